use std::collections::{BTreeSet, HashMap, HashSet};

use miette::Diagnostic;
use thiserror::Error;

use super::types::EdgePair;
use crate::utils::string::closed_walk;

/// Stable handle into the node arena
type NodeId = usize;

/// Why an edge was refused by [`EdgeAdmissionGraph::add_edge`]
///
/// Every variant carries the labels involved so callers can render a precise
/// diagnostic; `CycleClosed` additionally carries the concrete path through
/// the accepted edges that the rejected edge would have closed into a cycle.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum AdmissionError {
    #[error("Self-loop rejected: '{label}' cannot depend on itself")]
    #[diagnostic(
        code(untangle::self_loop),
        help("Remove the edge from '{label}' to itself")
    )]
    SelfLoop { label: String },

    #[error("Unknown node: '{label}'")]
    #[diagnostic(
        code(untangle::unknown_node),
        help("Declare every label up front, or build the graph without a declared node set")
    )]
    UnknownNode { label: String },

    #[error("Edge '{edge}' would close the cycle {}", closed_walk(.path))]
    #[diagnostic(
        code(untangle::cycle_closed),
        help("Break the cycle by removing one of the edges along the reported path")
    )]
    CycleClosed {
        edge: EdgePair,
        /// Path from the edge's target back to its source through accepted
        /// edges
        path: Vec<String>,
    },
}

impl AdmissionError {
    /// The edge whose admission was refused, if the error names one
    pub fn rejected_edge(&self) -> Option<EdgePair> {
        match self {
            AdmissionError::SelfLoop { label } => Some(EdgePair::new(label, label)),
            AdmissionError::UnknownNode { .. } => None,
            AdmissionError::CycleClosed { edge, .. } => Some(edge.clone()),
        }
    }
}

/// Incrementally built directed graph that refuses cycle-closing edges
///
/// Edges are admitted one at a time; the accepted edge set is guaranteed to
/// be acyclic after every successful [`add_edge`](Self::add_edge) call. A
/// rejected edge never mutates the graph, so a caller may collect rejections
/// and keep feeding edges.
///
/// Admission is order-dependent: different submission orders of the same edge
/// set can accept different maximal acyclic subsets. That is inherent to
/// incremental admission, not a defect.
///
/// Alongside the accepted edges the graph maintains an anti-edge cache: the
/// set of reverse-direction pairs that would close a cycle through edges
/// accepted so far. The cache is pure derived data and is kept consistent
/// with the accepted edge set on every successful admission.
pub struct EdgeAdmissionGraph {
    labels: Vec<String>,
    ids: HashMap<String, NodeId>,
    outbound: Vec<BTreeSet<NodeId>>,
    inbound: Vec<BTreeSet<NodeId>>,
    accepted: BTreeSet<(NodeId, NodeId)>,
    banned: HashSet<(NodeId, NodeId)>,
    declared: bool,
}

impl Default for EdgeAdmissionGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeAdmissionGraph {
    /// Create an empty graph whose nodes are created lazily on first
    /// reference
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            ids: HashMap::new(),
            outbound: Vec::new(),
            inbound: Vec::new(),
            accepted: BTreeSet::new(),
            banned: HashSet::new(),
            declared: false,
        }
    }

    /// Create a graph with a pre-declared node set
    ///
    /// With a declared node set, [`add_edge`](Self::add_edge) fails with
    /// [`AdmissionError::UnknownNode`] when either label was never declared.
    pub fn with_nodes<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        let mut sorted: Vec<String> = labels.into_iter().map(Into::into).collect();
        sorted.sort();
        sorted.dedup();
        for label in sorted {
            graph.intern(label);
        }
        graph.declared = true;
        graph
    }

    /// Admit the edge `source -> target` if it preserves acyclicity
    ///
    /// Re-adding an already accepted edge is a no-op. On rejection the graph
    /// is left untouched and the returned [`AdmissionError::CycleClosed`]
    /// carries the path from `target` back to `source` that the edge would
    /// have closed.
    pub fn add_edge(&mut self, source: &str, target: &str) -> Result<(), AdmissionError> {
        if source == target {
            return Err(AdmissionError::SelfLoop {
                label: source.to_string(),
            });
        }

        let source_id = self.resolve(source)?;
        let target_id = self.resolve(target)?;

        if self.accepted.contains(&(source_id, target_id)) {
            // idempotent
            return Ok(());
        }

        // direct two-cycle
        if self.accepted.contains(&(target_id, source_id)) {
            return Err(AdmissionError::CycleClosed {
                edge: EdgePair::new(source, target),
                path: vec![target.to_string(), source.to_string()],
            });
        }

        // If target already reaches source, this edge closes that path into
        // a cycle. The anti-edge cache must agree with the walk in both
        // directions.
        match self.path_between(target_id, source_id) {
            Some(path) => {
                debug_assert!(
                    self.banned.contains(&(source_id, target_id)),
                    "anti-edge cache is missing a cycle-closing pair"
                );
                Err(AdmissionError::CycleClosed {
                    edge: EdgePair::new(source, target),
                    path: path.into_iter().map(|id| self.labels[id].clone()).collect(),
                })
            }
            None => {
                debug_assert!(
                    !self.banned.contains(&(source_id, target_id)),
                    "anti-edge cache bans an admissible pair"
                );
                self.accept(source_id, target_id);
                Ok(())
            }
        }
    }

    /// Number of distinct nodes referenced or declared so far
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of accepted edges
    pub fn edge_count(&self) -> usize {
        self.accepted.len()
    }

    /// Whether `source -> target` has been accepted
    pub fn contains_edge(&self, source: &str, target: &str) -> bool {
        match (self.ids.get(source), self.ids.get(target)) {
            (Some(&s), Some(&t)) => self.accepted.contains(&(s, t)),
            _ => false,
        }
    }

    /// Whether the anti-edge cache records `source -> target` as
    /// cycle-closing
    pub fn is_banned(&self, source: &str, target: &str) -> bool {
        match (self.ids.get(source), self.ids.get(target)) {
            (Some(&s), Some(&t)) => self.banned.contains(&(s, t)),
            _ => false,
        }
    }

    /// All node labels in lexicographic order
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.labels.iter().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    /// All accepted edges, ordered by `(source, target)` label pair
    pub fn accepted_edges(&self) -> Vec<EdgePair> {
        let mut edges: Vec<EdgePair> = self
            .accepted
            .iter()
            .map(|&(s, t)| EdgePair::new(self.labels[s].clone(), self.labels[t].clone()))
            .collect();
        edges.sort();
        edges
    }

    fn resolve(&mut self, label: &str) -> Result<NodeId, AdmissionError> {
        if let Some(&id) = self.ids.get(label) {
            return Ok(id);
        }
        if self.declared {
            return Err(AdmissionError::UnknownNode {
                label: label.to_string(),
            });
        }
        Ok(self.intern(label.to_string()))
    }

    fn intern(&mut self, label: String) -> NodeId {
        let id = self.labels.len();
        self.ids.insert(label.clone(), id);
        self.labels.push(label);
        self.outbound.push(BTreeSet::new());
        self.inbound.push(BTreeSet::new());
        id
    }

    fn accept(&mut self, source: NodeId, target: NodeId) {
        self.accepted.insert((source, target));
        self.outbound[source].insert(target);
        self.inbound[target].insert(source);

        // The reverse of the new edge is rejected by the direct two-cycle
        // check from now on; keep the cache free of that redundancy.
        self.banned.remove(&(target, source));

        // Every ancestor of source (inclusive) now reaches every descendant
        // of target (inclusive), so each reverse-direction pair would close
        // a cycle through the edge just accepted.
        let ancestors = self.reachable_from(source, Direction::Inbound);
        let descendants = self.reachable_from(target, Direction::Outbound);
        for &v in &descendants {
            for &u in &ancestors {
                if self.accepted.contains(&(u, v)) {
                    // covered by the direct two-cycle check
                    continue;
                }
                self.banned.insert((v, u));
            }
        }
    }

    /// Transitive closure over one relation, inclusive of the start node
    fn reachable_from(&self, start: NodeId, direction: Direction) -> BTreeSet<NodeId> {
        let relation = match direction {
            Direction::Outbound => &self.outbound,
            Direction::Inbound => &self.inbound,
        };
        let mut seen = BTreeSet::new();
        let mut pending = vec![start];
        while let Some(node) = pending.pop() {
            if seen.insert(node) {
                pending.extend(relation[node].iter().copied());
            }
        }
        seen
    }

    /// Depth-first path from `from` to `to` along outbound edges
    ///
    /// Neighbors are explored in lexicographic label order, so the reported
    /// path is deterministic for a given accepted edge set.
    fn path_between(&self, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
        let mut visited = vec![false; self.labels.len()];
        let mut path = Vec::new();
        if self.dfs_path(from, to, &mut visited, &mut path) {
            Some(path)
        } else {
            None
        }
    }

    fn dfs_path(
        &self,
        current: NodeId,
        to: NodeId,
        visited: &mut [bool],
        path: &mut Vec<NodeId>,
    ) -> bool {
        visited[current] = true;
        path.push(current);
        if current == to {
            return true;
        }
        let mut neighbors: Vec<NodeId> = self.outbound[current].iter().copied().collect();
        neighbors.sort_by(|&a, &b| self.labels[a].cmp(&self.labels[b]));
        for next in neighbors {
            if !visited[next] && self.dfs_path(next, to, visited, path) {
                return true;
            }
        }
        path.pop();
        false
    }
}

enum Direction {
    Outbound,
    Inbound,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Build a lazily-populated graph from two-letter edge descriptors,
    /// panicking on the first rejection
    fn build_graph(edges: &[&str]) -> EdgeAdmissionGraph {
        let mut graph = EdgeAdmissionGraph::new();
        for edge in edges {
            let (source, target) = split(edge);
            graph
                .add_edge(&source, &target)
                .unwrap_or_else(|e| panic!("edge {edge} unexpectedly rejected: {e}"));
        }
        graph
    }

    fn split(edge: &str) -> (String, String) {
        let mut chars = edge.chars();
        (
            chars.next().unwrap().to_string(),
            chars.next().unwrap().to_string(),
        )
    }

    /// Feed all edges, returning the first rejection if any
    fn try_build(edges: &[&str]) -> Result<EdgeAdmissionGraph, AdmissionError> {
        let mut graph = EdgeAdmissionGraph::new();
        for edge in edges {
            let (source, target) = split(edge);
            graph.add_edge(&source, &target)?;
        }
        Ok(graph)
    }

    #[test]
    fn test_acyclic_samples_admit_fully() {
        let samples: &[&[&str]] = &[
            &["AB"],
            &["BA"],
            &["AB", "BC"],
            &["AB", "AC"],
            &["AB", "AC", "BC"],
            &["AB", "AC", "CB"],
            &["AB", "AD", "CD", "BC", "BD", "AC"],
            &["AB", "AF", "CD", "DE", "CE", "BD", "FD", "BC"],
        ];

        for sample in samples {
            let graph = build_graph(sample);
            assert_eq!(graph.edge_count(), sample.len(), "sample {sample:?}");
        }
    }

    #[test]
    fn test_cyclic_samples_are_rejected() {
        let samples: &[&[&str]] = &[
            &["AA"],
            &["AB", "BA"],
            &["BA", "AB"],
            &["AB", "BC", "CA"],
            &["AB", "BC", "CB"],
            &["AB", "CB", "BA"],
            &["AB", "BC", "CD", "DA"],
            &["AB", "AD", "CD", "BC", "BD", "AC", "DA"],
            &["AB", "AF", "CD", "DE", "CE", "BD", "FD", "BC", "ED"],
            &["AB", "AF", "CD", "DE", "CE", "BD", "FD", "BC", "EA"],
        ];

        for sample in samples {
            assert!(try_build(sample).is_err(), "sample {sample:?}");
        }
    }

    #[test]
    fn test_self_loop_rejected() {
        let mut graph = EdgeAdmissionGraph::new();
        let err = graph.add_edge("A", "A").unwrap_err();
        assert_eq!(
            err,
            AdmissionError::SelfLoop {
                label: "A".to_string()
            }
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_duplicate_edge_is_idempotent() {
        let mut graph = EdgeAdmissionGraph::new();
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("A", "B").unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_edge("A", "B"));
    }

    #[test]
    fn test_reverse_edge_always_rejected() {
        let mut graph = EdgeAdmissionGraph::new();
        graph.add_edge("A", "B").unwrap();

        let err = graph.add_edge("B", "A").unwrap_err();
        match err {
            AdmissionError::CycleClosed { edge, path } => {
                assert_eq!(edge, EdgePair::new("B", "A"));
                assert_eq!(path, vec!["A".to_string(), "B".to_string()]);
            }
            other => panic!("expected CycleClosed, got {other:?}"),
        }
    }

    #[test]
    fn test_transitive_cycle_reports_connected_path() {
        let mut graph = build_graph(&["AB", "BC"]);

        let err = graph.add_edge("C", "A").unwrap_err();
        match err {
            AdmissionError::CycleClosed { path, .. } => {
                // path runs from target back to source through accepted edges
                assert_eq!(
                    path,
                    vec!["A".to_string(), "B".to_string(), "C".to_string()]
                );
            }
            other => panic!("expected CycleClosed, got {other:?}"),
        }
        // rejection leaves the graph untouched
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_transitive_cycle_regardless_of_submission_order() {
        let mut graph = build_graph(&["BC", "AB"]);
        assert!(graph.add_edge("C", "A").is_err());
    }

    #[test]
    fn test_island_joining() {
        let mut graph = build_graph(&["AB", "CD"]);

        graph.add_edge("B", "C").unwrap();
        assert!(
            graph.add_edge("D", "A").is_err(),
            "closure across the joined islands must be detected"
        );
    }

    #[test]
    fn test_diamond_then_back_edge() {
        let mut graph = build_graph(&["AB", "AC", "BD", "CD"]);
        assert!(graph.add_edge("D", "A").is_err());
    }

    #[test]
    fn test_shared_sink_allows_cross_edge() {
        // A -> B <- C -> D is acyclic; D -> A stays acyclic, B -> D does not
        let mut graph = build_graph(&["AB", "CD", "CB"]);
        graph.add_edge("D", "A").unwrap();
        assert!(graph.add_edge("B", "D").is_err());
    }

    #[test]
    fn test_declared_nodes_reject_unknown_labels() {
        let mut graph = EdgeAdmissionGraph::with_nodes(["A", "B"]);
        graph.add_edge("A", "B").unwrap();

        let err = graph.add_edge("A", "Z").unwrap_err();
        assert_eq!(
            err,
            AdmissionError::UnknownNode {
                label: "Z".to_string()
            }
        );
    }

    #[test]
    fn test_lazy_nodes_are_created_on_first_reference() {
        let mut graph = EdgeAdmissionGraph::new();
        assert_eq!(graph.node_count(), 0);
        graph.add_edge("A", "B").unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.labels(), vec!["A", "B"]);
    }

    #[test]
    fn test_anti_edge_cache_tracks_transitive_closure() {
        let mut graph = build_graph(&["AB", "BC"]);
        assert!(graph.is_banned("C", "A"));
        assert!(!graph.is_banned("A", "C"));

        // joining islands extends the cache across both of them
        graph.add_edge("C", "D").unwrap();
        assert!(graph.is_banned("D", "A"));
        assert!(graph.is_banned("D", "B"));
    }

    #[test]
    fn test_accepted_edge_is_never_banned() {
        let graph = build_graph(&["AB", "AC", "BC"]);
        for edge in graph.accepted_edges() {
            assert!(
                !graph.is_banned(&edge.source, &edge.target),
                "accepted edge {edge} must not be banned"
            );
        }
    }

    #[test]
    fn test_parallel_path_is_not_a_cycle() {
        // A already reaches C through B; the direct edge is still admissible
        let mut graph = build_graph(&["AB", "BC"]);
        graph.add_edge("A", "C").unwrap();
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_rejection_error_exposes_rejected_edge() {
        let mut graph = build_graph(&["AB"]);
        let err = graph.add_edge("B", "A").unwrap_err();
        assert_eq!(err.rejected_edge(), Some(EdgePair::new("B", "A")));

        let self_loop = graph.add_edge("A", "A").unwrap_err();
        assert_eq!(self_loop.rejected_edge(), Some(EdgePair::new("A", "A")));
    }

    #[test]
    fn test_accepted_edges_are_sorted() {
        let graph = build_graph(&["CB", "AB", "AC"]);
        let edges = graph.accepted_edges();
        assert_eq!(
            edges,
            vec![
                EdgePair::new("A", "B"),
                EdgePair::new("A", "C"),
                EdgePair::new("C", "B"),
            ]
        );
    }

    #[test]
    fn test_cycle_error_message_names_the_closed_walk() {
        let mut graph = build_graph(&["AB", "BC"]);
        let err = graph.add_edge("C", "A").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Edge 'C -> A' would close the cycle A -> B -> C -> A"
        );
    }

    #[test]
    fn test_cycle_error_carries_no_error_source() {
        // the rejected edge is domain data on the variant, not a wrapped
        // underlying error
        let mut graph = build_graph(&["AB"]);
        let err = graph.add_edge("B", "A").unwrap_err();
        assert!(std::error::Error::source(&err).is_none());
    }

    fn permutations<'a>(items: &[&'a str]) -> Vec<Vec<&'a str>> {
        fn heap<'a>(k: usize, items: &mut Vec<&'a str>, out: &mut Vec<Vec<&'a str>>) {
            if k <= 1 {
                out.push(items.clone());
                return;
            }
            for i in 0..k {
                heap(k - 1, items, out);
                if k % 2 == 0 {
                    items.swap(i, k - 1);
                } else {
                    items.swap(0, k - 1);
                }
            }
        }
        let mut items = items.to_vec();
        let mut out = Vec::new();
        let len = items.len();
        heap(len, &mut items, &mut out);
        out
    }

    #[test]
    fn test_cache_agrees_with_walks_in_every_submission_order() {
        // diamond with a tail hanging off the sink; every submission order
        // must admit all edges, with the cache/walk cross-checks active
        let edges = ["AB", "AC", "BD", "CD", "DE"];

        for permutation in permutations(&edges) {
            let mut graph = EdgeAdmissionGraph::new();
            for edge in &permutation {
                let (source, target) = split(edge);
                graph
                    .add_edge(&source, &target)
                    .unwrap_or_else(|e| panic!("order {permutation:?}: {e}"));
            }
            assert_eq!(graph.edge_count(), edges.len());
            assert!(graph.is_banned("D", "A"), "order {permutation:?}");
            assert!(graph.is_banned("E", "A"), "order {permutation:?}");
            assert!(graph.add_edge("E", "A").is_err());
        }
    }
}
