//! JSON format report generation

use serde_json::json;

use super::{CycleReport, ReportGenerator};
use crate::error::UntangleError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, report: &CycleReport) -> Result<String, UntangleError> {
        // CycleReport already orders cycles deterministically
        let cycles: Vec<_> = report
            .cycles()
            .iter()
            .map(|cycle| {
                json!({
                    "walk": cycle.walk(),
                    "description": cycle.description(),
                    "rejected_edge": cycle.rejected_edge().map(|edge| {
                        json!({
                            "source": edge.source,
                            "target": edge.target,
                        })
                    }),
                })
            })
            .collect();

        let output = json!({
            "has_cycles": report.has_cycles(),
            "cycle_count": report.cycle_count(),
            "cycles": cycles,
            "topological_order": report.topological_order(),
        });

        serde_json::to_string_pretty(&output).map_err(UntangleError::Json)
    }
}
