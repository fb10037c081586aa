//! Date conventions used on the printed cover sheet.
//!
//! Measurement and patient dates print as `M/d/yy`; the cover sheet's own
//! date prints as `M/d/yyyy`.

use jiff::civil::Date;

use crate::error::CoreError;

/// Format a date the way row and patient dates appear on the fax (`1/5/24`).
pub fn format_short(date: Date) -> String {
    date.strftime("%-m/%-d/%y").to_string()
}

/// Format a date with a four-digit year (`1/5/2024`).
pub fn format_long(date: Date) -> String {
    date.strftime("%-m/%-d/%Y").to_string()
}

/// Format an optional date, rendering a missing one as an empty string.
pub fn format_optional(date: Option<Date>) -> String {
    date.map(format_short).unwrap_or_default()
}

/// Parse a date entered as ISO (`2024-01-05`) or US style (`1/5/2024`).
pub fn parse_date(value: &str) -> Result<Date, CoreError> {
    let trimmed = value.trim();
    if let Ok(date) = trimmed.parse::<Date>() {
        return Ok(date);
    }
    Date::strptime("%m/%d/%Y", trimmed).map_err(|e| CoreError::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}
