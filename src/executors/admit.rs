//! Admit command executor

use console::style;
use miette::Result;

use crate::cli::OutputFormat;
use crate::config::AdmitConfig;
use crate::edge_list::load_edge_lists;
use crate::executors::CommandExecutor;
use crate::graph::{AdmissionError, EdgeAdmissionGraph};
use crate::reports::{CycleReport, HumanReportGenerator, JsonReportGenerator, ReportGenerator};
use crate::utils::string::pluralize;

pub struct AdmitExecutor;

impl CommandExecutor for AdmitExecutor {
    type Config = AdmitConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Admitting edges one at a time...\n",
            style("🔍").cyan()
        );

        let pairs = load_edge_lists(&config.inputs)?;

        let mut graph = EdgeAdmissionGraph::new();
        let mut rejections = Vec::new();
        for pair in &pairs {
            match graph.add_edge(&pair.source, &pair.target) {
                Ok(()) => {}
                // cannot occur with lazily created nodes, but a rejection
                // here would be a tool bug rather than a cycle
                Err(err @ AdmissionError::UnknownNode { .. }) => return Err(err.into()),
                Err(err) => {
                    rejections.push(err);
                    if config.fail_fast {
                        break;
                    }
                }
            }
        }

        eprintln!(
            "  {} accepted {} {}, rejected {}",
            style("→").dim(),
            graph.edge_count(),
            pluralize("edge", graph.edge_count()),
            rejections.len()
        );

        let report = if rejections.is_empty() {
            CycleReport::acyclic(None)
        } else {
            CycleReport::from_rejections(&rejections)
        };

        let rendered = match config.format {
            OutputFormat::Human => {
                HumanReportGenerator::new(config.max_cycles).generate_report(&report)?
            }
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&report)?,
        };
        print!("{rendered}");

        // Exit with error code if any edge was rejected and requested
        if config.error_on_cycles && report.has_cycles() {
            std::process::exit(1);
        }

        Ok(())
    }
}
