use std::collections::HashSet;

use miette::Diagnostic;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use thiserror::Error;

use crate::utils::string::{closed_walk, pluralize};

/// One non-trivial strongly connected component, reported as a cycle
///
/// `members` lists every label in the component in lexicographic order.
/// `walk` is a concrete closed walk through the component, starting from the
/// lexicographically smallest member; rendering repeats the starting label
/// at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentCycle {
    members: Vec<String>,
    walk: Vec<String>,
}

impl ComponentCycle {
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn walk(&self) -> &[String] {
        &self.walk
    }
}

impl std::fmt::Display for ComponentCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", closed_walk(&self.walk))
    }
}

/// Aggregate error for a batch run that found at least one cycle
///
/// Carries every cyclic component, not just the first: the whole graph is
/// analyzed in one pass regardless of how many cycles exist.
#[derive(Error, Debug, Diagnostic)]
#[error("Found {} dependency {}", .cycles.len(), pluralize("cycle", .cycles.len()))]
#[diagnostic(
    code(untangle::cycles_found),
    help("Break each cycle by removing at least one of its edges")
)]
pub struct CyclesFound {
    pub cycles: Vec<ComponentCycle>,
}

/// Batch cycle finder over a fully-built dependency graph
///
/// Partitions the graph into strongly connected components with Tarjan's
/// algorithm (via [`petgraph::algo::tarjan_scc`]) and classifies each
/// component: size > 1 is always a cycle, size 1 only with a self-loop.
/// When no component is cyclic the finder yields a topological order of all
/// labels instead.
///
/// A finder can be reused: [`run`](Self::run) resets previous results, and
/// the input graph is never mutated.
pub struct SccCycleFinder {
    cycles: Vec<ComponentCycle>,
    topological_order: Option<Vec<String>>,
}

impl Default for SccCycleFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl SccCycleFinder {
    /// Create a new cycle finder
    pub fn new() -> Self {
        Self {
            cycles: Vec::new(),
            topological_order: None,
        }
    }

    /// Analyze the graph, recording every cyclic component
    pub fn run(&mut self, graph: &DiGraph<String, ()>) {
        self.cycles.clear();
        self.topological_order = None;

        let components = tarjan_scc(graph);

        let mut cycles = Vec::new();
        for component in &components {
            let is_cycle = component.len() > 1
                || component
                    .first()
                    .is_some_and(|&node| graph.contains_edge(node, node));
            if is_cycle {
                cycles.push(Self::component_cycle(graph, component));
            }
        }

        if cycles.is_empty() {
            // Tarjan finishes components in reverse topological order, so
            // reversing the completion order puts sources before targets.
            let order = components
                .iter()
                .rev()
                .flat_map(|component| component.iter().map(|&node| graph[node].clone()))
                .collect();
            self.topological_order = Some(order);
        } else {
            cycles.sort_by(|a, b| a.members.cmp(&b.members));
            self.cycles = cycles;
        }
    }

    /// Run once and collapse the outcome into a topological order or the
    /// aggregate cycle error
    pub fn topological_sort(graph: &DiGraph<String, ()>) -> Result<Vec<String>, CyclesFound> {
        let mut finder = Self::new();
        finder.run(graph);
        finder.into_result()
    }

    /// All cyclic components found by the last run, deterministically ordered
    pub fn cycles(&self) -> &[ComponentCycle] {
        &self.cycles
    }

    /// Whether the last run found any cyclic component
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Number of cyclic components found by the last run
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    /// Topological order of all labels, present only when the last run found
    /// no cycles
    pub fn topological_order(&self) -> Option<&[String]> {
        self.topological_order.as_deref()
    }

    /// Consume the finder, yielding the topological order or the aggregate
    /// [`CyclesFound`] error
    pub fn into_result(self) -> Result<Vec<String>, CyclesFound> {
        if self.cycles.is_empty() {
            Ok(self.topological_order.unwrap_or_default())
        } else {
            Err(CyclesFound {
                cycles: self.cycles,
            })
        }
    }

    fn component_cycle(graph: &DiGraph<String, ()>, component: &[NodeIndex]) -> ComponentCycle {
        let mut members: Vec<String> = component.iter().map(|&node| graph[node].clone()).collect();
        members.sort();

        let walk = match component.iter().min_by_key(|&&node| &graph[node]) {
            Some(&start) if component.len() == 1 => vec![graph[start].clone()],
            Some(&start) => {
                let set: HashSet<NodeIndex> = component.iter().copied().collect();
                let mut visited = HashSet::new();
                let mut path = vec![start];
                if Self::dfs_walk(graph, &set, start, start, &mut visited, &mut path) {
                    path.into_iter().map(|node| graph[node].clone()).collect()
                } else {
                    // unreachable for a strongly connected component
                    members.clone()
                }
            }
            None => Vec::new(),
        };

        ComponentCycle { members, walk }
    }

    /// Depth-first search for a walk from `start` back to `start` that stays
    /// inside the component; neighbors are explored in lexicographic label
    /// order for deterministic output
    fn dfs_walk(
        graph: &DiGraph<String, ()>,
        component: &HashSet<NodeIndex>,
        current: NodeIndex,
        start: NodeIndex,
        visited: &mut HashSet<NodeIndex>,
        path: &mut Vec<NodeIndex>,
    ) -> bool {
        visited.insert(current);

        let mut neighbors: Vec<NodeIndex> = graph
            .neighbors(current)
            .filter(|node| component.contains(node))
            .collect();
        neighbors.sort_by(|&a, &b| graph[a].cmp(&graph[b]));
        neighbors.dedup();

        for neighbor in neighbors {
            if neighbor == start && path.len() > 1 {
                return true;
            }
            if neighbor != start && !visited.contains(&neighbor) {
                path.push(neighbor);
                if Self::dfs_walk(graph, component, neighbor, start, visited, path) {
                    return true;
                }
                path.pop();
            }
        }
        false
    }
}
