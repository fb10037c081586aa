use serde::{Deserialize, Serialize};

/// Document styling configuration for exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Font for body text (e.g. "Times New Roman", "Calibri").
    pub body_font: String,

    /// Font for headings (e.g. "Arial", "Calibri").
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Title font size in points.
    pub heading1_size: usize,

    /// Report heading font size in points.
    pub heading2_size: usize,

    /// Section heading font size in points.
    pub heading3_size: usize,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Times New Roman".to_string(),
            heading_font: "Arial".to_string(),
            body_size: 11,
            heading1_size: 16,
            heading2_size: 14,
            heading3_size: 12,
        }
    }
}
