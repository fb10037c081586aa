use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date_of_birth: Option<jiff::civil::Date>,
    #[serde(default)]
    pub claim_number: String,
}

/// Workers' compensation duty status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum WorkStatus {
    #[serde(rename = "Full Duty")]
    FullDuty,
    #[serde(rename = "Modified Duty")]
    ModifiedDuty,
    #[serde(rename = "Off Work")]
    OffWork,
}

impl WorkStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::FullDuty => "Full Duty",
            Self::ModifiedDuty => "Modified Duty",
            Self::OffWork => "Off Work",
        }
    }
}

/// Injury and initial evaluation details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Injury {
    #[serde(default)]
    pub date_of_injury: Option<jiff::civil::Date>,
    #[serde(default)]
    pub mechanism: String,
    #[serde(default)]
    pub work_status: Option<WorkStatus>,
    #[serde(default)]
    pub anatomical_location: String,
    #[serde(default)]
    pub initial_eval_date: Option<jiff::civil::Date>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PainDescriptor {
    Sharp,
    Dull,
    Aching,
    Throbbing,
    Burning,
    Stabbing,
    Shooting,
    Tingling,
    Numbness,
    Pressure,
    Stiffness,
}

impl PainDescriptor {
    pub fn label(self) -> &'static str {
        match self {
            Self::Sharp => "Sharp",
            Self::Dull => "Dull",
            Self::Aching => "Aching",
            Self::Throbbing => "Throbbing",
            Self::Burning => "Burning",
            Self::Stabbing => "Stabbing",
            Self::Shooting => "Shooting",
            Self::Tingling => "Tingling",
            Self::Numbness => "Numbness",
            Self::Pressure => "Pressure",
            Self::Stiffness => "Stiffness",
        }
    }
}

/// Subjective symptoms recorded at intake.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomIntake {
    #[serde(default)]
    pub pain_triggers: String,
    #[serde(default)]
    pub pain_descriptors: Vec<PainDescriptor>,
    #[serde(default)]
    pub associated_symptoms: String,
    #[serde(default)]
    pub functional_limitations: String,
}

impl SymptomIntake {
    pub fn is_empty(&self) -> bool {
        self.pain_triggers.trim().is_empty()
            && self.pain_descriptors.is_empty()
            && self.associated_symptoms.trim().is_empty()
            && self.functional_limitations.trim().is_empty()
    }
}
