use std::io::Write;
use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use jiff::civil::Date;

use ptfax_core::models::measurement::MeasurementCategory;
use ptfax_core::models::report::ProgressReport;
use ptfax_export::context::CoverSheet;
use ptfax_export::{docx, render};
use ptfax_measures::session::MeasurementSession;
use ptfax_measures::{presets, validate};

use crate::config::PtfaxConfig;

/// Output format for `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Markdown-style text, suitable for printing or piping.
    Text,
    /// Word document.
    Docx,
}

/// Print the live improvement badge for one pair of values.
pub fn calc(
    out: &mut dyn Write,
    category: MeasurementCategory,
    initial: &str,
    current: &str,
    unit: Option<&str>,
) -> Result<()> {
    let unit = unit.unwrap_or(category.default_unit());
    match ptfax_measures::calculate(category, initial, current, Some(unit)) {
        Some(improvement) => writeln!(out, "{}", improvement.badge(category))?,
        None => writeln!(out, "no comparison available")?,
    }
    Ok(())
}

/// List the measurement presets and the rows each one adds, followed by the
/// fixed value scales.
pub fn list_presets(out: &mut dyn Write) -> Result<()> {
    for preset in presets::all_presets() {
        writeln!(out, "{:<12}{}", preset.key, preset.label)?;
        for item in preset.items {
            writeln!(out, "  - {} ({}, {})", item.description, item.category, item.unit)?;
        }
    }

    for category in [MeasurementCategory::Strength, MeasurementCategory::Pain] {
        let unit = category.default_unit();
        if let Some(choices) = presets::choices_for(category, unit) {
            writeln!(out, "\n{} values ({unit}):", category.label())?;
            for choice in choices {
                writeln!(out, "  {}", choice.label)?;
            }
        }
    }
    Ok(())
}

/// Print a blank report with the requested preset rows.
pub fn new_report(
    out: &mut dyn Write,
    preset_keys: &[String],
    initial_eval: Option<Date>,
    today: Date,
) -> Result<()> {
    let mut session = MeasurementSession::new(initial_eval, today);
    for key in preset_keys {
        session.apply_preset(key)?;
    }

    let mut report = ProgressReport::default();
    report.injury.initial_eval_date = initial_eval;
    report.measurements = session.into_samples();

    writeln!(out, "{}", report.to_json_pretty()?)?;
    Ok(())
}

pub fn load_report(path: &Path) -> Result<ProgressReport> {
    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read report at {}", path.display()))?;
    let report = ProgressReport::from_json(&json)
        .wrap_err_with(|| format!("invalid report JSON in {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        measurements = report.measurements.len(),
        "loaded report"
    );
    Ok(report)
}

/// Print validation issues for a report. Returns how many were found.
pub fn check(out: &mut dyn Write, report: &ProgressReport) -> Result<usize> {
    let issues = validate::validate_report(report);
    if issues.is_empty() {
        writeln!(out, "no issues found")?;
    }
    for issue in &issues {
        writeln!(out, "{}: {}", issue.field, issue.message)?;
    }
    Ok(issues.len())
}

pub struct RenderOptions {
    pub format: Format,
    pub output: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub today: Date,
}

/// Render the cover sheet as text or DOCX.
pub fn render_report(
    out: &mut dyn Write,
    report: &ProgressReport,
    config: &PtfaxConfig,
    options: &RenderOptions,
) -> Result<()> {
    for issue in validate::validate_report(report) {
        tracing::warn!(field = %issue.field, "{}", issue.message);
    }

    let sheet = CoverSheet::build(report, &config.defaults, options.today);
    let rendered = match options.template.as_ref().or(config.template_path.as_ref()) {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read template at {}", path.display()))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "custom".to_string());
            render::render_template(&name, &content, &sheet)?
        }
        None => render::render_cover_sheet(&sheet)?,
    };

    let bytes = match options.format {
        Format::Text => rendered.into_bytes(),
        Format::Docx => docx::generate_docx(&rendered, &config.styles)?,
    };

    match &options.output {
        Some(path) => {
            std::fs::write(path, &bytes)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = bytes.len(), "cover sheet written");
        }
        None if options.format == Format::Docx => {
            eyre::bail!("DOCX output needs --output <PATH>");
        }
        None => out.write_all(&bytes)?,
    }
    Ok(())
}
