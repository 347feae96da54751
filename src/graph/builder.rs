use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use super::types::EdgePair;

/// Builder for constructing dependency graphs from label pairs
///
/// Collects `(source, target)` pairs into a [`DiGraph`] keyed by label, the
/// representation consumed by the batch cycle finder. Nodes are created
/// lazily on first reference and duplicate pairs collapse into one edge.
/// Unlike the incremental admission graph, this builder accepts any pair,
/// including ones that form cycles; classification happens later.
pub struct DependencyGraphBuilder {
    graph: DiGraph<String, ()>,
    indices: HashMap<String, NodeIndex>,
}

impl Default for DependencyGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyGraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            indices: HashMap::new(),
        }
    }

    /// Add one directed edge, creating nodes as needed
    pub fn add_pair(&mut self, source: &str, target: &str) {
        let from = self.node_index(source);
        let to = self.node_index(target);
        self.graph.update_edge(from, to, ());
    }

    /// Add every pair from an edge list
    pub fn add_pairs<'a, I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = &'a EdgePair>,
    {
        for pair in pairs {
            self.add_pair(&pair.source, &pair.target);
        }
    }

    /// The assembled graph
    pub fn graph(&self) -> &DiGraph<String, ()> {
        &self.graph
    }

    /// Consume the builder, yielding the assembled graph
    pub fn into_graph(self) -> DiGraph<String, ()> {
        self.graph
    }

    fn node_index(&mut self, label: &str) -> NodeIndex {
        if let Some(&index) = self.indices.get(label) {
            return index;
        }
        let index = self.graph.add_node(label.to_string());
        self.indices.insert(label.to_string(), index);
        index
    }
}
