//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{CycleReport, ReportGenerator};
use crate::error::UntangleError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, report: &CycleReport) -> Result<String, UntangleError> {
        let mut output = String::new();

        if !report.has_cycles() {
            write!(
                output,
                "\n{} No dependency cycles detected! The graph has a clean dependency structure.\n",
                style("✅").green().bold()
            )?;

            if let Some(order) = report.topological_order() {
                writeln!(output, "\n{} Topological order:", style("📋").blue())?;
                for label in order {
                    writeln!(output, "  {} {}", style("•").dim(), label)?;
                }
            }
            return Ok(output);
        }

        write!(
            output,
            "\n{} Found {} dependency {}:\n\n",
            style("❌").red().bold(),
            style(report.cycle_count()).red().bold(),
            pluralize("cycle", report.cycle_count())
        )?;

        let total_cycles = report.cycle_count();
        let showing_all = self.max_cycles.is_none_or(|limit| limit >= total_cycles);
        let cycles_to_show = match self.max_cycles {
            Some(limit) => &report.cycles()[..limit.min(total_cycles)],
            None => report.cycles(),
        };

        for (i, cycle) in cycles_to_show.iter().enumerate() {
            writeln!(
                output,
                "{} Cycle #{}: {}",
                style("🔄").yellow(),
                i + 1,
                style(cycle.description()).bold()
            )?;
            if let Some(edge) = cycle.rejected_edge() {
                writeln!(
                    output,
                    "    {} rejected edge: {}",
                    style("→").dim(),
                    style(edge).yellow()
                )?;
            }
        }

        if !showing_all {
            if let Some(limit) = self.max_cycles {
                writeln!(
                    output,
                    "\n{} Showing {} of {} cycles. Use --max-cycles to see more.",
                    style("ℹ️").blue(),
                    style(limit).yellow(),
                    style(total_cycles).yellow()
                )?;
            }
        }

        writeln!(
            output,
            "\n{} To break these cycles, you need to remove at least one edge from each cycle.",
            style("💡").yellow()
        )?;
        writeln!(
            output,
            "{} Consider extracting shared code into a module that both sides can depend on.",
            style("💡").yellow()
        )?;

        Ok(output)
    }
}
