use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Unit marking a strength row as a manual muscle test grade.
pub const MMT_UNIT: &str = "MMT";

/// Whether `unit` marks manual muscle test grades. The match is exact.
pub fn is_mmt_unit(unit: &str) -> bool {
    unit == MMT_UNIT
}

/// The four kinds of objective measurement tracked on a progress report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MeasurementCategory {
    /// Joint angle, higher is better.
    RangeOfMotion,
    /// Manual muscle test grade or a numeric strength value.
    Strength,
    /// Tolerances and counts (minutes standing, stairs climbed).
    Functional,
    /// Pain rating, lower is better.
    Pain,
}

impl MeasurementCategory {
    /// All categories in the order they appear on the report.
    pub const ALL: [MeasurementCategory; 4] = [
        MeasurementCategory::RangeOfMotion,
        MeasurementCategory::Strength,
        MeasurementCategory::Functional,
        MeasurementCategory::Pain,
    ];

    pub fn default_unit(self) -> &'static str {
        match self {
            Self::RangeOfMotion => "degrees",
            Self::Strength => MMT_UNIT,
            Self::Functional => "minutes",
            Self::Pain => "pain scale (0-10)",
        }
    }

    /// Label shown on a measurement row while editing.
    pub fn label(self) -> &'static str {
        match self {
            Self::RangeOfMotion => "ROM Measurement",
            Self::Strength => "Strength Test",
            Self::Functional => "Functional Test",
            Self::Pain => "Pain Measurement",
        }
    }

    /// Heading used for the category block on the printed report.
    pub fn report_heading(self) -> &'static str {
        match self {
            Self::RangeOfMotion => "Range of Motion",
            Self::Strength => "Strength Tests",
            Self::Functional => "Functional Tests",
            Self::Pain => "Pain Measurements",
        }
    }

    /// Whether a decrease in value is the clinically favorable direction.
    pub fn lower_is_better(self) -> bool {
        matches!(self, Self::Pain)
    }

    fn slug(self) -> &'static str {
        match self {
            Self::RangeOfMotion => "rom",
            Self::Strength => "strength",
            Self::Functional => "functional",
            Self::Pain => "pain",
        }
    }
}

impl fmt::Display for MeasurementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for MeasurementCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rom" | "range_of_motion" | "range-of-motion" => Ok(Self::RangeOfMotion),
            "strength" => Ok(Self::Strength),
            "functional" => Ok(Self::Functional),
            "pain" => Ok(Self::Pain),
            other => Err(CoreError::UnknownCategory(other.to_string())),
        }
    }
}

/// One row of observational data: a single measurement taken at the initial
/// evaluation and again at the current visit.
///
/// Values are kept as entered. Parsing happens in `ptfax-measures` when an
/// improvement is computed, so a half-typed value never loses input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MeasurementSample {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub category: MeasurementCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub initial_value: String,
    #[serde(default)]
    pub current_value: String,
    #[serde(default)]
    pub initial_date: Option<jiff::civil::Date>,
    #[serde(default)]
    pub current_date: Option<jiff::civil::Date>,
    #[serde(default)]
    pub unit: String,
}

impl MeasurementSample {
    /// A blank row carrying the category's default unit.
    pub fn new(category: MeasurementCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            description: String::new(),
            initial_value: String::new(),
            current_value: String::new(),
            initial_date: None,
            current_date: None,
            unit: category.default_unit().to_string(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_values(mut self, initial: impl Into<String>, current: impl Into<String>) -> Self {
        self.initial_value = initial.into();
        self.current_value = current.into();
        self
    }

    /// The unit to display, falling back to the category default when the
    /// row has none.
    pub fn effective_unit(&self) -> &str {
        if self.unit.trim().is_empty() {
            self.category.default_unit()
        } else {
            &self.unit
        }
    }

    /// Both values are filled in, so a comparison can be attempted.
    pub fn has_both_values(&self) -> bool {
        !self.initial_value.is_empty() && !self.current_value.is_empty()
    }

    /// At least one value is filled in.
    pub fn has_any_value(&self) -> bool {
        !self.initial_value.is_empty() || !self.current_value.is_empty()
    }
}
