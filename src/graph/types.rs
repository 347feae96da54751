//! Core graph types
//!
//! This module contains the fundamental data structures used in the dependency
//! graph.

use serde::Serialize;

/// A directed edge between two labeled nodes
///
/// Identity is the ordered pair itself: `(a, b)` and `(b, a)` are distinct
/// edges. Ordering is lexicographic by `(source, target)` so that sorted
/// collections of edges are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgePair {
    pub source: String,
    pub target: String,
}

impl EdgePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// The same pair with source and target swapped
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl std::fmt::Display for EdgePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_pair_display() {
        let edge = EdgePair::new("core", "app");
        assert_eq!(edge.to_string(), "core -> app");
    }

    #[test]
    fn test_edge_pair_identity_is_ordered() {
        let forward = EdgePair::new("a", "b");
        let backward = EdgePair::new("b", "a");
        assert_ne!(forward, backward);
        assert_eq!(forward.reversed(), backward);
    }

    #[test]
    fn test_edge_pair_ordering() {
        let mut edges = vec![
            EdgePair::new("b", "a"),
            EdgePair::new("a", "c"),
            EdgePair::new("a", "b"),
        ];
        edges.sort();
        assert_eq!(edges[0], EdgePair::new("a", "b"));
        assert_eq!(edges[1], EdgePair::new("a", "c"));
        assert_eq!(edges[2], EdgePair::new("b", "a"));
    }

    #[test]
    fn test_self_loop() {
        assert!(EdgePair::new("a", "a").is_self_loop());
        assert!(!EdgePair::new("a", "b").is_self_loop());
    }
}
