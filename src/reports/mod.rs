//! Report generation modules for different output formats
//!
//! This module contains report generators for the supported output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//!
//! Both generators consume a [`CycleReport`], the format-independent outcome
//! of one analysis run: an ordered list of cycle descriptions, plus an
//! optional topological order when the graph turned out acyclic. Batch
//! components and incremental rejections both collapse into this model, so
//! the generators never care which mode produced the result.

pub mod human;
pub mod json;

use crate::detector::ComponentCycle;
use crate::error::UntangleError;
use crate::graph::{AdmissionError, EdgePair};
use crate::utils::string::closed_walk;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Render a report from an analysis outcome
    fn generate_report(&self, report: &CycleReport) -> Result<String, UntangleError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;

/// One reported cycle: a closed walk of labels, and the rejected edge when
/// the cycle was discovered by incremental admission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedCycle {
    walk: Vec<String>,
    rejected_edge: Option<EdgePair>,
}

impl ReportedCycle {
    pub fn walk(&self) -> &[String] {
        &self.walk
    }

    pub fn rejected_edge(&self) -> Option<&EdgePair> {
        self.rejected_edge.as_ref()
    }

    /// Arrow-joined closed walk, repeating the starting label
    pub fn description(&self) -> String {
        closed_walk(&self.walk)
    }
}

/// Format-independent outcome of one analysis run
#[derive(Debug, Clone, Default)]
pub struct CycleReport {
    cycles: Vec<ReportedCycle>,
    topological_order: Option<Vec<String>>,
}

impl CycleReport {
    /// Outcome of an acyclic run, optionally carrying the topological order
    pub fn acyclic(topological_order: Option<Vec<String>>) -> Self {
        Self {
            cycles: Vec::new(),
            topological_order,
        }
    }

    /// Build from the cyclic components of a batch run
    pub fn from_components(components: &[ComponentCycle]) -> Self {
        let mut cycles: Vec<ReportedCycle> = components
            .iter()
            .map(|component| ReportedCycle {
                walk: component.walk().to_vec(),
                rejected_edge: None,
            })
            .collect();
        cycles.sort_by(|a, b| a.walk.cmp(&b.walk));
        Self {
            cycles,
            topological_order: None,
        }
    }

    /// Build from the edges rejected by incremental admission
    ///
    /// `UnknownNode` rejections are configuration failures, not cycles, and
    /// are skipped; callers surface those separately. Identical rejections
    /// (the same edge rejected with the same path, from duplicate input
    /// lines) collapse into one reported cycle; distinct rejections are
    /// always kept.
    pub fn from_rejections(rejections: &[AdmissionError]) -> Self {
        let mut cycles: Vec<ReportedCycle> = rejections
            .iter()
            .filter_map(|rejection| match rejection {
                AdmissionError::SelfLoop { label } => Some(ReportedCycle {
                    walk: vec![label.clone()],
                    rejected_edge: Some(EdgePair::new(label, label)),
                }),
                AdmissionError::CycleClosed { edge, path } => Some(ReportedCycle {
                    walk: path.clone(),
                    rejected_edge: Some(edge.clone()),
                }),
                AdmissionError::UnknownNode { .. } => None,
            })
            .collect();
        cycles.sort_by(|a, b| (&a.walk, &a.rejected_edge).cmp(&(&b.walk, &b.rejected_edge)));
        cycles.dedup();
        Self {
            cycles,
            topological_order: None,
        }
    }

    pub fn cycles(&self) -> &[ReportedCycle] {
        &self.cycles
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    pub fn topological_order(&self) -> Option<&[String]> {
        self.topological_order.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rejections_sorts_and_skips_unknown_nodes() {
        let rejections = vec![
            AdmissionError::CycleClosed {
                edge: EdgePair::new("z", "y"),
                path: vec!["y".to_string(), "z".to_string()],
            },
            AdmissionError::UnknownNode {
                label: "ghost".to_string(),
            },
            AdmissionError::SelfLoop {
                label: "a".to_string(),
            },
        ];

        let report = CycleReport::from_rejections(&rejections);
        assert_eq!(report.cycle_count(), 2);
        assert_eq!(report.cycles()[0].description(), "a -> a");
        assert_eq!(report.cycles()[1].description(), "y -> z -> y");
    }

    #[test]
    fn test_from_rejections_deduplicates() {
        let rejection = AdmissionError::SelfLoop {
            label: "a".to_string(),
        };
        let report = CycleReport::from_rejections(&[rejection.clone(), rejection]);
        assert_eq!(report.cycle_count(), 1);
    }

    #[test]
    fn test_acyclic_report_carries_order() {
        let report = CycleReport::acyclic(Some(vec!["a".to_string(), "b".to_string()]));
        assert!(!report.has_cycles());
        assert_eq!(report.topological_order(), Some(&["a".to_string(), "b".to_string()][..]));
    }
}
