use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Professional credential shown after the clinician's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Credential {
    #[serde(rename = "PT")]
    Pt,
    #[serde(rename = "DPT")]
    Dpt,
    #[serde(rename = "MPT")]
    Mpt,
    #[serde(rename = "PT, DPT")]
    PtDpt,
    /// Orthopedic Clinical Specialist.
    #[serde(rename = "PT, DPT, OCS")]
    PtDptOcs,
    /// Sports Clinical Specialist.
    #[serde(rename = "PT, DPT, SCS")]
    PtDptScs,
    /// Neurologic Clinical Specialist.
    #[serde(rename = "PT, DPT, NCS")]
    PtDptNcs,
    /// Geriatric Clinical Specialist.
    #[serde(rename = "PT, DPT, GCS")]
    PtDptGcs,
    /// Pediatric Clinical Specialist.
    #[serde(rename = "PT, DPT, PCS")]
    PtDptPcs,
    /// Physical Therapist Assistant.
    #[serde(rename = "PTA")]
    Pta,
    /// Free-text credential carried in `Clinician::credentials_other`.
    Other,
}

impl Credential {
    /// The abbreviation printed on the cover sheet.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Pt => "PT",
            Self::Dpt => "DPT",
            Self::Mpt => "MPT",
            Self::PtDpt => "PT, DPT",
            Self::PtDptOcs => "PT, DPT, OCS",
            Self::PtDptScs => "PT, DPT, SCS",
            Self::PtDptNcs => "PT, DPT, NCS",
            Self::PtDptGcs => "PT, DPT, GCS",
            Self::PtDptPcs => "PT, DPT, PCS",
            Self::Pta => "PTA",
            Self::Other => "Other",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Pt => "Physical Therapist",
            Self::Dpt => "Doctor of Physical Therapy",
            Self::Mpt => "Master of Physical Therapy",
            Self::PtDpt => "PT, DPT",
            Self::PtDptOcs => "Orthopedic Clinical Specialist",
            Self::PtDptScs => "Sports Clinical Specialist",
            Self::PtDptNcs => "Neurologic Clinical Specialist",
            Self::PtDptGcs => "Geriatric Clinical Specialist",
            Self::PtDptPcs => "Pediatric Clinical Specialist",
            Self::Pta => "Physical Therapist Assistant",
            Self::Other => "Other",
        }
    }
}

/// The treating therapist sending the report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Clinician {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub credentials: Option<Credential>,
    #[serde(default)]
    pub credentials_other: String,
    #[serde(default)]
    pub facility_name: String,
}

impl Clinician {
    /// Name followed by credentials, e.g. `Jane Doe, PT, DPT`.
    pub fn signature(&self) -> String {
        match self.credentials {
            Some(Credential::Other) => format!("{}, {}", self.name, self.credentials_other),
            Some(credential) => format!("{}, {}", self.name, credential.abbreviation()),
            None => self.name.clone(),
        }
    }
}

/// Who the fax goes to. Empty fields fall back to configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recipient {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fax: String,
}
