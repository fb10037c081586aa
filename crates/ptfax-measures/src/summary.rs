//! Per-row report lines and the aggregate summary of improvements.

use ptfax_core::models::measurement::{MeasurementCategory, MeasurementSample};

use crate::improvement::{self, Direction, Improvement, ImprovementKind};

/// A measurement row as printed in the "Objective Measurements" block.
#[derive(Debug, Clone)]
pub struct ReportLine<'a> {
    pub sample: &'a MeasurementSample,
    pub improvement: Option<Improvement>,
}

impl ReportLine<'_> {
    /// The parenthesised change after the values, without parentheses:
    /// `+25%`, `-2 level(s)`, or for pain `-50%` when pain went down.
    pub fn delta_label(&self) -> Option<String> {
        let improvement = self.improvement?;
        let magnitude = improvement.magnitude;
        let sign = if magnitude == 0.0 {
            ""
        } else {
            // Pain is printed as the raw movement of the score.
            match (self.sample.category.lower_is_better(), improvement.direction) {
                (false, Direction::Positive) | (true, Direction::Negative) => "+",
                (false, Direction::Negative) | (true, Direction::Positive) => "-",
            }
        };
        Some(match improvement.kind {
            ImprovementKind::MmtLevels => format!("{sign}{magnitude} level(s)"),
            ImprovementKind::Percentage => format!("{sign}{magnitude}%"),
        })
    }
}

/// Rows of `category` worth printing: described, with at least one value.
pub fn report_lines(
    samples: &[MeasurementSample],
    category: MeasurementCategory,
) -> Vec<ReportLine<'_>> {
    samples
        .iter()
        .filter(|s| s.category == category)
        .filter(|s| !s.description.is_empty() && s.has_any_value())
        .map(|sample| ReportLine {
            sample,
            improvement: improvement::report_improvement(
                sample.category,
                &sample.initial_value,
                &sample.current_value,
            ),
        })
        .collect()
}

/// One line of the "Summary of Objective Improvements" block.
#[derive(Debug, Clone)]
pub struct SummaryEntry<'a> {
    pub sample: &'a MeasurementSample,
    pub improvement: Improvement,
}

impl SummaryEntry<'_> {
    /// Pain improvements point down, everything else up.
    pub fn arrow(&self) -> &'static str {
        if self.sample.category.lower_is_better() {
            "↓"
        } else {
            "↑"
        }
    }

    /// The text after the description, e.g. `25% improvement`.
    pub fn outcome(&self) -> String {
        let magnitude = self.improvement.magnitude;
        match self.improvement.kind {
            ImprovementKind::MmtLevels => format!("{magnitude} level(s) improvement"),
            ImprovementKind::Percentage if self.sample.category.lower_is_better() => {
                format!("{magnitude}% pain reduction")
            }
            ImprovementKind::Percentage => format!("{magnitude}% improvement"),
        }
    }
}

/// Every clinically favorable change across all categories, in report
/// order. Rows need a description and both values to be considered.
pub fn summarize(samples: &[MeasurementSample]) -> Vec<SummaryEntry<'_>> {
    MeasurementCategory::ALL
        .iter()
        .flat_map(|&category| samples.iter().filter(move |s| s.category == category))
        .filter(|s| !s.description.is_empty() && s.has_both_values())
        .filter_map(|sample| {
            let improvement = improvement::report_improvement(
                sample.category,
                &sample.initial_value,
                &sample.current_value,
            )?;
            improvement.is_positive().then_some(SummaryEntry {
                sample,
                improvement,
            })
        })
        .collect()
}

/// Whether any row has both values, which is when the summary block is shown.
pub fn has_comparable_rows(samples: &[MeasurementSample]) -> bool {
    samples.iter().any(MeasurementSample::has_both_values)
}
