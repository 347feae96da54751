//! # Batch Cycle Detection Module
//!
//! This module implements batch cycle detection over a fully-built
//! dependency graph.
//!
//! ## Algorithm
//!
//! We use Tarjan's Strongly Connected Components (SCC) algorithm to find all
//! cycles in one pass. This algorithm has O(V + E) time complexity where V
//! is the number of nodes (labels) and E is the number of edges. A component
//! of size > 1 is always a cycle; a single node is a cycle only when it has
//! an edge to itself. When the graph is acyclic the finder produces a
//! topological order instead, derived from the component completion order.
//!
//! ## Key Components
//!
//! - **SccCycleFinder**: runs the analysis and holds the results
//! - **ComponentCycle**: one cyclic component with its member labels and a
//!   deterministic closed walk
//! - **CyclesFound**: aggregate error carrying every cyclic component
//!
//! ## Example
//!
//! ```
//! use untangle::detector::SccCycleFinder;
//! use untangle::graph::DependencyGraphBuilder;
//!
//! let mut builder = DependencyGraphBuilder::new();
//! builder.add_pair("a", "b");
//! builder.add_pair("b", "a");
//!
//! let mut finder = SccCycleFinder::new();
//! finder.run(builder.graph());
//!
//! assert!(finder.has_cycles());
//! assert_eq!(finder.cycle_count(), 1);
//! ```

mod detector_impl;

pub use detector_impl::*;
