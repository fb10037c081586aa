use serde::{Deserialize, Serialize};
use ts_rs::TS;

use ptfax_core::models::clinician::Credential;
use ptfax_core::models::measurement::{MeasurementCategory, MeasurementSample, is_mmt_unit};
use ptfax_core::models::report::ProgressReport;

use crate::parse;

/// Defines the valid range for a measured value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ValueRange {
    pub const PAIN_SCALE: ValueRange = ValueRange {
        min: 0.0,
        max: 10.0,
        step: None,
    };

    pub const MMT_GRADE: ValueRange = ValueRange {
        min: 0.0,
        max: 5.0,
        step: Some(1.0),
    };

    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let remainder = (value - self.min) % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// A form value that looks wrong. Issues are advisory; the report still
/// renders, and the calculator treats unreadable values as "no comparison".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldIssue {
    /// Path of the offending field, e.g. `measurements[2].current_value`.
    pub field: String,
    pub message: String,
}

/// Check a report for out-of-range and unreadable values.
pub fn validate_report(report: &ProgressReport) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    for (field, value) in [
        ("initial_pain_scale", report.initial_pain_scale),
        ("current_pain_scale", report.current_pain_scale),
    ] {
        if !ValueRange::PAIN_SCALE.contains(f64::from(value)) {
            issues.push(FieldIssue {
                field: field.to_string(),
                message: format!("pain scale {value} is outside range [0, 10]"),
            });
        }
    }

    if report.clinician.credentials == Some(Credential::Other)
        && report.clinician.credentials_other.trim().is_empty()
    {
        issues.push(FieldIssue {
            field: "clinician.credentials_other".to_string(),
            message: "credentials set to Other but no credential text given".to_string(),
        });
    }

    for (index, sample) in report.measurements.iter().enumerate() {
        for (name, value) in [
            ("initial_value", &sample.initial_value),
            ("current_value", &sample.current_value),
        ] {
            if value.is_empty() {
                continue;
            }
            if let Some(message) = check_value(sample, value) {
                issues.push(FieldIssue {
                    field: format!("measurements[{index}].{name}"),
                    message: format!("{}: {message}", label(sample)),
                });
            }
        }
    }

    issues
}

fn label(sample: &MeasurementSample) -> &str {
    if sample.description.is_empty() {
        sample.category.label()
    } else {
        &sample.description
    }
}

fn check_value(sample: &MeasurementSample, value: &str) -> Option<String> {
    let unit = sample.effective_unit();
    match sample.category {
        MeasurementCategory::Strength if is_mmt_unit(unit) => {
            let (Some(level), Some(scale)) =
                (parse::parse_mmt_level(value), parse::parse_mmt_scale(value))
            else {
                return Some(format!("'{value}' is not a muscle test grade like 4/5"));
            };
            if scale != 5 || !ValueRange::MMT_GRADE.contains(level as f64) {
                return Some(format!("grade {value} is outside range [0/5, 5/5]"));
            }
            None
        }
        MeasurementCategory::Pain if unit.contains("pain scale") => {
            match parse::parse_prefix(value) {
                None => Some(format!("'{value}' is not a number")),
                Some(score) if !ValueRange::PAIN_SCALE.contains(score) => {
                    Some(format!("pain score {value} is outside range [0, 10]"))
                }
                Some(_) => None,
            }
        }
        MeasurementCategory::Pain => parse::parse_prefix(value)
            .is_none()
            .then(|| format!("'{value}' is not a number")),
        _ => {
            // Strength grades entered under a non-MMT unit still compare on the report.
            if sample.category == MeasurementCategory::Strength && parse::is_mmt_token(value) {
                return None;
            }
            parse::parse_lenient(value)
                .is_none()
                .then(|| format!("'{value}' has no numeric value"))
        }
    }
}
