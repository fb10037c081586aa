//! The cover sheet view model.
//!
//! Every value the template prints is formatted here, so templates stay
//! free of date and arithmetic logic.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use ptfax_core::dates;
use ptfax_core::models::measurement::{MeasurementCategory, MeasurementSample};
use ptfax_core::models::patient::SymptomIntake;
use ptfax_core::models::report::ProgressReport;
use ptfax_measures::summary::{self, ReportLine};

/// Recipient details used when the report leaves them blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverSheetDefaults {
    pub recipient_name: String,
    pub recipient_fax: String,
}

impl Default for CoverSheetDefaults {
    fn default() -> Self {
        Self {
            recipient_name: "Mount Sinai Selikoff Centers".to_string(),
            recipient_fax: "Manhattan Fax: 212-987-0889".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverSheet {
    pub recipient_name: String,
    pub recipient_fax: String,
    pub sender: String,
    pub facility_name: String,
    pub pages: u32,
    pub date: String,

    pub patient_name: String,
    pub date_of_birth: String,
    pub claim_number: String,
    pub date_of_injury: Option<String>,
    pub work_status: Option<String>,
    pub mechanism: Option<String>,

    pub initial_eval_date: String,
    pub initial_pain: u8,
    pub anatomical_location: Option<String>,
    pub symptoms: Vec<LabeledText>,
    pub current_pain: u8,

    pub show_summary: bool,
    pub summary: Vec<SummaryLine>,
    pub sections: Vec<MeasurementSection>,

    pub need_more_pt: bool,
    pub continued_goals: Option<String>,
    pub additional_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LabeledText {
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryLine {
    pub arrow: String,
    pub description: String,
    pub outcome: String,
}

/// One category block under "Objective Measurements".
#[derive(Debug, Clone, Serialize)]
pub struct MeasurementSection {
    pub heading: String,
    pub rows: Vec<MeasurementLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MeasurementLine {
    pub description: String,
    /// Value with unit as printed, e.g. `90 degrees`.
    pub initial: String,
    pub current: String,
    /// Change in parentheses without the parentheses, e.g. `+33%`.
    pub delta: Option<String>,
    pub initial_date: String,
    pub current_date: String,
}

impl CoverSheet {
    /// Build the view model for `report`, dated `today`.
    pub fn build(report: &ProgressReport, defaults: &CoverSheetDefaults, today: Date) -> Self {
        let injury = &report.injury;
        let sections = MeasurementCategory::ALL
            .iter()
            .filter_map(|&category| {
                let rows: Vec<_> = summary::report_lines(&report.measurements, category)
                    .iter()
                    .map(measurement_line)
                    .collect();
                (!rows.is_empty()).then(|| MeasurementSection {
                    heading: category.report_heading().to_string(),
                    rows,
                })
            })
            .collect();

        let summary = summary::summarize(&report.measurements)
            .iter()
            .map(|entry| SummaryLine {
                arrow: entry.arrow().to_string(),
                description: entry.sample.description.clone(),
                outcome: entry.outcome(),
            })
            .collect();

        Self {
            recipient_name: or_default(&report.recipient.name, &defaults.recipient_name),
            recipient_fax: or_default(&report.recipient.fax, &defaults.recipient_fax),
            sender: report.clinician.signature(),
            facility_name: report.clinician.facility_name.clone(),
            pages: 1,
            date: dates::format_long(today),

            patient_name: report.patient.name.clone(),
            date_of_birth: dates::format_optional(report.patient.date_of_birth),
            claim_number: report.patient.claim_number.clone(),
            date_of_injury: injury.date_of_injury.map(dates::format_short),
            work_status: injury.work_status.map(|s| s.label().to_string()),
            mechanism: non_empty(&injury.mechanism),

            initial_eval_date: dates::format_optional(injury.initial_eval_date),
            initial_pain: report.initial_pain_scale,
            anatomical_location: non_empty(&injury.anatomical_location),
            symptoms: symptom_lines(&report.symptoms),
            current_pain: report.current_pain_scale,

            show_summary: summary::has_comparable_rows(&report.measurements),
            summary,
            sections,

            need_more_pt: report.need_more_pt,
            continued_goals: non_empty(&report.continued_goals),
            additional_notes: non_empty(&report.additional_notes),
        }
    }
}

fn measurement_line(line: &ReportLine<'_>) -> MeasurementLine {
    let sample = line.sample;
    MeasurementLine {
        description: sample.description.clone(),
        initial: with_unit(sample, &sample.initial_value, false),
        current: with_unit(sample, &sample.current_value, true),
        delta: line.delta_label(),
        initial_date: dates::format_optional(sample.initial_date),
        current_date: dates::format_optional(sample.current_date),
    }
}

/// Range of motion falls back to a degree sign, strength grades carry no
/// unit, and pain prints its scale once, after the current value.
fn with_unit(sample: &MeasurementSample, value: &str, is_current: bool) -> String {
    let unit = sample.unit.trim();
    match sample.category {
        MeasurementCategory::RangeOfMotion if unit.is_empty() => format!("{value}°"),
        MeasurementCategory::Strength => value.to_string(),
        MeasurementCategory::Pain if !is_current => value.to_string(),
        _ if unit.is_empty() => value.to_string(),
        _ => format!("{value} {unit}"),
    }
}

fn symptom_lines(symptoms: &SymptomIntake) -> Vec<LabeledText> {
    let descriptors = symptoms
        .pain_descriptors
        .iter()
        .map(|d| d.label())
        .collect::<Vec<_>>()
        .join(", ");

    [
        ("Pain descriptors", descriptors.as_str()),
        ("Pain triggers", symptoms.pain_triggers.as_str()),
        ("Associated symptoms", symptoms.associated_symptoms.as_str()),
        ("Functional limitations", symptoms.functional_limitations.as_str()),
    ]
    .into_iter()
    .filter_map(|(label, text)| {
        non_empty(text).map(|text| LabeledText {
            label: label.to_string(),
            text,
        })
    })
    .collect()
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn or_default(value: &str, default: &str) -> String {
    non_empty(value).unwrap_or_else(|| default.to_string())
}
