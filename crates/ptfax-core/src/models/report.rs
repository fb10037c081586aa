use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::clinician::{Clinician, Recipient};
use super::measurement::{MeasurementCategory, MeasurementSample};
use super::patient::{Injury, Patient, SymptomIntake};

/// Everything collected on the progress report form.
///
/// Every field defaults, so a partially filled JSON document still loads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProgressReport {
    #[serde(default)]
    pub clinician: Clinician,
    #[serde(default)]
    pub recipient: Recipient,
    #[serde(default)]
    pub patient: Patient,
    #[serde(default)]
    pub injury: Injury,
    #[serde(default)]
    pub symptoms: SymptomIntake,

    /// Pain at the initial evaluation, 0–10.
    #[serde(default)]
    pub initial_pain_scale: u8,
    /// Pain at the current visit, 0–10.
    #[serde(default)]
    pub current_pain_scale: u8,

    #[serde(default)]
    pub measurements: Vec<MeasurementSample>,

    #[serde(default)]
    pub need_more_pt: bool,
    /// Goals for a further four weeks of therapy.
    #[serde(default)]
    pub continued_goals: String,
    #[serde(default)]
    pub additional_notes: String,
}

impl ProgressReport {
    pub fn from_json(json: &str) -> Result<Self, crate::error::CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, crate::error::CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rows of one category in entry order.
    pub fn measurements_in(
        &self,
        category: MeasurementCategory,
    ) -> impl Iterator<Item = &MeasurementSample> {
        self.measurements
            .iter()
            .filter(move |m| m.category == category)
    }
}
