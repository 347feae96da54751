use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, CycleDisplayArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "untangle",
    about = "Detect and report cycles in directed dependency graphs",
    long_about = "untangle reads directed edge lists ('source -> target' pairs, one per line) \
                  and reports dependency cycles. It offers two complementary strategies: batch \
                  analysis of the whole graph with Tarjan's strongly connected components \
                  algorithm, and incremental admission that rejects each cycle-closing edge as \
                  it arrives.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze the whole graph for cycles in one pass
    ///
    /// Builds the complete graph from all input edges, partitions it into
    /// strongly connected components, and reports every cyclic component.
    /// When the graph is acyclic, a topological order can be printed
    /// instead.
    #[command(
        long_about = "Batch cycle detection. All edges are loaded into one directed graph, then \
                      Tarjan's algorithm partitions it into strongly connected components. Every \
                      component with more than one node, and every single node with a self-loop, \
                      is reported as a cycle. No short-circuiting: the whole graph is analyzed \
                      regardless of how many cycles exist. For an acyclic graph, --topo prints a \
                      topological order consistent with every edge."
    )]
    Check {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Exit with error code if cycles found
        #[arg(long, env = "UNTANGLE_ERROR_ON_CYCLES")]
        error_on_cycles: bool,

        /// Print a topological order when the graph is acyclic
        #[arg(long, env = "UNTANGLE_TOPO")]
        topo: bool,
    },

    /// Admit edges one at a time, rejecting any that would close a cycle
    ///
    /// Feeds edges into an incrementally maintained acyclic graph in input
    /// order. Each edge that would close a cycle through previously accepted
    /// edges is rejected and reported with the concrete path it would have
    /// closed.
    #[command(
        long_about = "Incremental edge admission. Edges are processed in input order; an edge is \
                      accepted only if the accepted edge set stays acyclic, so which edges end \
                      up rejected depends on the submission order. Rejections carry the path \
                      through accepted edges that the rejected edge would have turned into a \
                      cycle. By default all rejections are collected; --fail-fast stops at the \
                      first one."
    )]
    Admit {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Exit with error code if any edge was rejected
        #[arg(long, env = "UNTANGLE_ERROR_ON_CYCLES")]
        error_on_cycles: bool,

        /// Stop at the first rejected edge instead of collecting all of them
        #[arg(long, env = "UNTANGLE_FAIL_FAST")]
        fail_fast: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
