//! # Untangle - Detect Cycles in Directed Dependency Graphs
//!
//! Untangle builds a directed graph from `(source, target)` label pairs and
//! reports dependency cycles. It implements two complementary strategies:
//! incremental edge admission, which keeps the graph acyclic by rejecting
//! each cycle-closing edge as it arrives, and batch detection, which
//! partitions a fully-built graph into strongly connected components.
//!
//! ## Main Components
//!
//! - **Graph**: the incremental [`EdgeAdmissionGraph`](graph::EdgeAdmissionGraph)
//!   and the batch [`DependencyGraphBuilder`](graph::DependencyGraphBuilder)
//! - **Detector**: [`SccCycleFinder`](detector::SccCycleFinder), Tarjan's SCC
//!   algorithm with cycle classification and topological ordering
//! - **Reports**: deterministic human-readable and JSON reports
//!
//! ## Incremental admission
//!
//! ```
//! use untangle::graph::{AdmissionError, EdgeAdmissionGraph};
//!
//! let mut graph = EdgeAdmissionGraph::new();
//! graph.add_edge("app", "core").unwrap();
//! graph.add_edge("core", "util").unwrap();
//!
//! match graph.add_edge("util", "app") {
//!     Err(AdmissionError::CycleClosed { path, .. }) => {
//!         // the path runs from the target back to the source
//!         assert_eq!(path, vec!["app", "core", "util"]);
//!     }
//!     other => panic!("expected a rejection, got {other:?}"),
//! }
//!
//! // rejected edges never mutate the graph
//! assert_eq!(graph.edge_count(), 2);
//! ```
//!
//! ## Batch detection
//!
//! ```
//! use untangle::detector::SccCycleFinder;
//! use untangle::graph::DependencyGraphBuilder;
//!
//! let mut builder = DependencyGraphBuilder::new();
//! builder.add_pair("a", "b");
//! builder.add_pair("b", "c");
//! builder.add_pair("c", "a");
//!
//! let mut finder = SccCycleFinder::new();
//! finder.run(builder.graph());
//!
//! assert_eq!(finder.cycle_count(), 1);
//! assert_eq!(finder.cycles()[0].members(), ["a", "b", "c"]);
//!
//! // an acyclic graph yields a topological order instead
//! let mut dag = DependencyGraphBuilder::new();
//! dag.add_pair("a", "b");
//! let order = SccCycleFinder::topological_sort(dag.graph()).unwrap();
//! assert_eq!(order, vec!["a", "b"]);
//! ```
//!
//! ## Rendering a report
//!
//! ```
//! use untangle::detector::SccCycleFinder;
//! use untangle::graph::DependencyGraphBuilder;
//! use untangle::reports::{CycleReport, JsonReportGenerator, ReportGenerator};
//!
//! let mut builder = DependencyGraphBuilder::new();
//! builder.add_pair("a", "b");
//! builder.add_pair("b", "a");
//!
//! let mut finder = SccCycleFinder::new();
//! finder.run(builder.graph());
//!
//! let report = CycleReport::from_components(finder.cycles());
//! let json = JsonReportGenerator::new().generate_report(&report).unwrap();
//! assert!(json.contains("\"has_cycles\": true"));
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod detector;
pub mod edge_list;
pub mod error;
pub mod executors;
pub mod graph;
pub mod reports;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
