//! Measurement presets and the fixed choice lists offered while editing.

use serde::Serialize;

use ptfax_core::models::measurement::{MeasurementCategory, is_mmt_unit};
use ptfax_core::models::measurement::MeasurementCategory::{Functional, Pain, RangeOfMotion, Strength};

use crate::error::MeasureError;

/// One row a preset adds.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PresetItem {
    pub category: MeasurementCategory,
    pub description: &'static str,
    pub unit: &'static str,
}

/// A named set of rows appended in one action (e.g. "Knee Set").
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Preset {
    /// Lookup key, e.g. `knee`.
    pub key: &'static str,
    pub label: &'static str,
    pub items: &'static [PresetItem],
}

const fn item(
    category: MeasurementCategory,
    description: &'static str,
    unit: &'static str,
) -> PresetItem {
    PresetItem {
        category,
        description,
        unit,
    }
}

static PRESETS: [Preset; 6] = [
    Preset {
        key: "shoulder",
        label: "Shoulder Set",
        items: &[
            item(RangeOfMotion, "Shoulder Flexion", "degrees"),
            item(RangeOfMotion, "Shoulder Abduction", "degrees"),
            item(RangeOfMotion, "Shoulder External Rotation", "degrees"),
            item(RangeOfMotion, "Shoulder Internal Rotation", "degrees"),
        ],
    },
    Preset {
        key: "knee",
        label: "Knee Set",
        items: &[
            item(RangeOfMotion, "Knee Flexion", "degrees"),
            item(RangeOfMotion, "Knee Extension", "degrees"),
        ],
    },
    Preset {
        key: "back",
        label: "Back Set",
        items: &[
            item(RangeOfMotion, "Lumbar Flexion", "degrees"),
            item(RangeOfMotion, "Lumbar Extension", "degrees"),
            item(RangeOfMotion, "Lateral Flexion (L)", "degrees"),
            item(RangeOfMotion, "Lateral Flexion (R)", "degrees"),
        ],
    },
    Preset {
        key: "strength",
        label: "Strength Set",
        items: &[
            item(Strength, "Deltoid Strength", "MMT"),
            item(Strength, "Biceps Strength", "MMT"),
            item(Strength, "Triceps Strength", "MMT"),
        ],
    },
    Preset {
        key: "functional",
        label: "Functional Set",
        items: &[
            item(Functional, "Standing Tolerance", "minutes"),
            item(Functional, "Walking Tolerance", "minutes"),
            item(Functional, "Stair Climbing", "steps"),
        ],
    },
    Preset {
        key: "pain",
        label: "Pain Set",
        items: &[
            item(Pain, "Pain with Walking", "pain scale (0-10)"),
            item(Pain, "Pain with Standing", "pain scale (0-10)"),
            item(Pain, "Pain with Lifting", "pain scale (0-10)"),
            item(Pain, "Pain at Rest", "pain scale (0-10)"),
            item(Pain, "Pain at Night", "pain scale (0-10)"),
        ],
    },
];

/// Return all presets in menu order.
pub fn all_presets() -> &'static [Preset] {
    &PRESETS
}

/// Look up a preset by key.
pub fn get_preset(key: &str) -> Result<&'static Preset, MeasureError> {
    PRESETS
        .iter()
        .find(|p| p.key == key)
        .ok_or_else(|| MeasureError::UnknownPreset(key.to_string()))
}

/// A value offered in a picker, with its descriptive label.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Manual muscle test grades.
pub const MMT_GRADES: [ChoiceOption; 6] = [
    ChoiceOption { value: "0/5", label: "0/5 - No contraction" },
    ChoiceOption { value: "1/5", label: "1/5 - Trace contraction" },
    ChoiceOption { value: "2/5", label: "2/5 - Poor, some movement" },
    ChoiceOption { value: "3/5", label: "3/5 - Fair, full ROM against gravity" },
    ChoiceOption { value: "4/5", label: "4/5 - Good, full ROM against resistance" },
    ChoiceOption { value: "5/5", label: "5/5 - Normal strength" },
];

/// Numeric pain rating scale.
pub const PAIN_LEVELS: [ChoiceOption; 11] = [
    ChoiceOption { value: "0", label: "0 - No Pain" },
    ChoiceOption { value: "1", label: "1 - Minimal" },
    ChoiceOption { value: "2", label: "2 - Mild" },
    ChoiceOption { value: "3", label: "3 - Uncomfortable" },
    ChoiceOption { value: "4", label: "4 - Moderate" },
    ChoiceOption { value: "5", label: "5 - Distracting" },
    ChoiceOption { value: "6", label: "6 - Distressing" },
    ChoiceOption { value: "7", label: "7 - Severe" },
    ChoiceOption { value: "8", label: "8 - Intense" },
    ChoiceOption { value: "9", label: "9 - Excruciating" },
    ChoiceOption { value: "10", label: "10 - Worst Possible" },
];

/// The picker choices for a row, if its values come from a fixed list.
pub fn choices_for(category: MeasurementCategory, unit: &str) -> Option<&'static [ChoiceOption]> {
    match category {
        Strength if is_mmt_unit(unit) => Some(&MMT_GRADES),
        Pain if unit.contains("pain scale") => Some(&PAIN_LEVELS),
        _ => None,
    }
}
