//! Improvement between an initial and a current observation.
//!
//! A comparison is attempted with an ordered list of parsers; the first one
//! that understands both values decides the result. When none does, there is
//! no comparison, which is a normal outcome rather than an error.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use ptfax_core::models::measurement::{MeasurementCategory, is_mmt_unit};

use crate::parse::{self, ParseMode};

/// Whether the change is clinically favorable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Direction {
    Positive,
    Negative,
}

/// How `Improvement::magnitude` is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ImprovementKind {
    /// Whole-number percent change.
    Percentage,
    /// Difference in manual muscle test grades.
    MmtLevels,
}

/// A signed, categorized magnitude of change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Improvement {
    /// Always non-negative.
    pub magnitude: f64,
    pub direction: Direction,
    pub kind: ImprovementKind,
}

impl Improvement {
    pub fn is_positive(&self) -> bool {
        self.direction == Direction::Positive
    }

    pub fn arrow(&self) -> &'static str {
        if self.is_positive() { "↑" } else { "↓" }
    }

    /// The live badge shown next to a row while editing, e.g.
    /// `↑ 2 MMT levels improvement` or `↑ 50% pain reduction`.
    pub fn badge(&self, category: MeasurementCategory) -> String {
        let arrow = self.arrow();
        let magnitude = self.magnitude;
        match self.kind {
            ImprovementKind::MmtLevels => {
                let plural = if magnitude == 1.0 { "" } else { "s" };
                let trend = if self.is_positive() { "improvement" } else { "decrease" };
                format!("{arrow} {magnitude} MMT level{plural} {trend}")
            }
            ImprovementKind::Percentage if category.lower_is_better() => {
                let trend = if self.is_positive() { "reduction" } else { "increase" };
                format!("{arrow} {magnitude}% pain {trend}")
            }
            ImprovementKind::Percentage => {
                let trend = if self.is_positive() { "improvement" } else { "decrease" };
                format!("{arrow} {magnitude}% {trend}")
            }
        }
    }
}

/// One way of reading a pair of raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    /// Both values are `level/scale` tokens; compare levels.
    MmtLevels,
    /// Both values contain `/`; compare the whole numbers written before it.
    MmtLeadingLevels,
    /// Both values are numbers; compare percent change.
    Numeric(ParseMode),
}

impl Attempt {
    fn compare(
        self,
        category: MeasurementCategory,
        initial: &str,
        current: &str,
    ) -> Option<Improvement> {
        match self {
            Attempt::MmtLevels => {
                let from = parse::parse_mmt_level(initial)?;
                let to = parse::parse_mmt_level(current)?;
                Some(level_change(from, to))
            }
            Attempt::MmtLeadingLevels => {
                let from = parse::parse_mmt_leading_level(initial)?;
                let to = parse::parse_mmt_leading_level(current)?;
                Some(level_change(from, to))
            }
            Attempt::Numeric(mode) => {
                let from = parse::parse_number(initial, mode)?;
                let to = parse::parse_number(current, mode)?;
                percent_change(category, from, to)
            }
        }
    }
}

/// Compute the live improvement for one measurement row.
///
/// `unit` only matters for strength rows: with unit exactly `MMT` the values
/// are first read as muscle test grades, falling back to plain numbers.
pub fn calculate(
    category: MeasurementCategory,
    initial: &str,
    current: &str,
    unit: Option<&str>,
) -> Option<Improvement> {
    let mmt_unit = unit.is_some_and(is_mmt_unit);
    let attempts: &[Attempt] = match category {
        MeasurementCategory::Strength if mmt_unit => {
            &[Attempt::MmtLevels, Attempt::Numeric(ParseMode::Strict)]
        }
        _ => &[Attempt::Numeric(ParseMode::Strict)],
    };
    run(attempts, category, initial, current)
}

/// Compute the improvement printed on the report.
///
/// Strength grades are recognized whatever the unit, including graded values
/// such as `4+/5`. Range-of-motion, functional, and strength values tolerate
/// stray characters such as `°`. Pain reads the leading number as written,
/// so `6/10` is 6 rather than 610.
pub fn report_improvement(
    category: MeasurementCategory,
    initial: &str,
    current: &str,
) -> Option<Improvement> {
    let attempts: &[Attempt] = match category {
        MeasurementCategory::Strength => {
            &[Attempt::MmtLeadingLevels, Attempt::Numeric(ParseMode::Lenient)]
        }
        MeasurementCategory::Pain => &[Attempt::Numeric(ParseMode::Prefix)],
        MeasurementCategory::RangeOfMotion | MeasurementCategory::Functional => {
            &[Attempt::Numeric(ParseMode::Lenient)]
        }
    };
    run(attempts, category, initial, current)
}

fn run(
    attempts: &[Attempt],
    category: MeasurementCategory,
    initial: &str,
    current: &str,
) -> Option<Improvement> {
    if initial.is_empty() || current.is_empty() {
        return None;
    }
    attempts
        .iter()
        .find_map(|attempt| attempt.compare(category, initial, current))
}

fn level_change(from: i64, to: i64) -> Improvement {
    let delta = to.saturating_sub(from);
    Improvement {
        magnitude: delta.unsigned_abs() as f64,
        direction: if to > from {
            Direction::Positive
        } else {
            Direction::Negative
        },
        kind: ImprovementKind::MmtLevels,
    }
}

fn percent_change(category: MeasurementCategory, initial: f64, current: f64) -> Option<Improvement> {
    if initial == 0.0 {
        return None;
    }

    // Pain divides by the raw baseline, everything else by its magnitude.
    let ratio = if category.lower_is_better() {
        (initial - current) / initial
    } else {
        (current - initial) / initial.abs()
    };
    if !ratio.is_finite() {
        return None;
    }

    // Direction follows the exact change; only the magnitude is rounded.
    Some(Improvement {
        magnitude: (ratio * 100.0).round().abs(),
        direction: if ratio > 0.0 {
            Direction::Positive
        } else {
            Direction::Negative
        },
        kind: ImprovementKind::Percentage,
    })
}
