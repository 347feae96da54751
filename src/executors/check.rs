//! Check command executor

use console::style;
use miette::Result;

use crate::cli::OutputFormat;
use crate::config::CheckConfig;
use crate::detector::SccCycleFinder;
use crate::edge_list::load_edge_lists;
use crate::executors::CommandExecutor;
use crate::graph::DependencyGraphBuilder;
use crate::reports::{CycleReport, HumanReportGenerator, JsonReportGenerator, ReportGenerator};
use crate::utils::string::pluralize;

pub struct CheckExecutor;

impl CommandExecutor for CheckExecutor {
    type Config = CheckConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Checking the dependency graph for cycles...\n",
            style("🔍").cyan()
        );

        let pairs = load_edge_lists(&config.inputs)?;
        eprintln!(
            "  {} loaded {} {}",
            style("→").dim(),
            pairs.len(),
            pluralize("edge", pairs.len())
        );

        let mut builder = DependencyGraphBuilder::new();
        builder.add_pairs(&pairs);
        eprintln!(
            "  {} graph has {} nodes, {} edges",
            style("→").dim(),
            builder.graph().node_count(),
            builder.graph().edge_count()
        );

        let mut finder = SccCycleFinder::new();
        finder.run(builder.graph());

        let report = if finder.has_cycles() {
            CycleReport::from_components(finder.cycles())
        } else {
            let order = if config.topo {
                finder.topological_order().map(<[String]>::to_vec)
            } else {
                None
            };
            CycleReport::acyclic(order)
        };

        let rendered = match config.format {
            OutputFormat::Human => {
                HumanReportGenerator::new(config.max_cycles).generate_report(&report)?
            }
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&report)?,
        };
        print!("{rendered}");

        // Exit with error code if cycles found and requested
        if config.error_on_cycles && report.has_cycles() {
            std::process::exit(1);
        }

        Ok(())
    }
}
