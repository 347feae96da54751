//! # Graph Construction and Admission Module
//!
//! This module provides the two graph representations used by the tool.
//!
//! ## Components
//!
//! ### Incremental admission
//! - **EdgeAdmissionGraph**: admits edges one at a time, rejecting any edge
//!   that would close a cycle through the edges accepted so far
//! - **AdmissionError**: the precise reason an edge was refused, with the
//!   counter-example path for cycle-closing edges
//!
//! ### Batch construction
//! - **DependencyGraphBuilder**: collects all pairs into a petgraph
//!   [`DiGraph`](petgraph::graph::DiGraph) for the batch cycle finder
//! - **EdgePair**: a directed, ordered pair of node labels
//!
//! ## Example
//!
//! ```
//! use untangle::graph::EdgeAdmissionGraph;
//!
//! let mut graph = EdgeAdmissionGraph::new();
//! graph.add_edge("app", "core").unwrap();
//! graph.add_edge("core", "util").unwrap();
//!
//! // util -> app would close the cycle app -> core -> util -> app
//! assert!(graph.add_edge("util", "app").is_err());
//! assert_eq!(graph.edge_count(), 2);
//! ```

mod admission;
mod builder;
mod types;

pub use admission::{AdmissionError, EdgeAdmissionGraph};
pub use builder::DependencyGraphBuilder;
pub use types::EdgePair;
