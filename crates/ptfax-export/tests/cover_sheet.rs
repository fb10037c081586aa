use jiff::civil::date;

use ptfax_core::models::clinician::{Clinician, Credential, Recipient};
use ptfax_core::models::measurement::{MeasurementCategory, MeasurementSample};
use ptfax_core::models::patient::{Injury, Patient, PainDescriptor, WorkStatus};
use ptfax_core::models::report::ProgressReport;
use ptfax_export::context::{CoverSheet, CoverSheetDefaults};
use ptfax_export::render::{render_cover_sheet, render_template};

fn dated(sample: MeasurementSample) -> MeasurementSample {
    MeasurementSample {
        initial_date: Some(date(2024, 1, 5)),
        current_date: Some(date(2024, 3, 1)),
        ..sample
    }
}

fn sample_report() -> ProgressReport {
    let mut report = ProgressReport {
        clinician: Clinician {
            name: "Dana Reyes".to_string(),
            credentials: Some(Credential::PtDpt),
            credentials_other: String::new(),
            facility_name: "Harbor Physical Therapy".to_string(),
        },
        patient: Patient {
            name: "Sam Ortiz".to_string(),
            date_of_birth: Some(date(1980, 6, 14)),
            claim_number: "WC-20931".to_string(),
        },
        injury: Injury {
            date_of_injury: Some(date(2023, 12, 2)),
            mechanism: "Lifting heavy object".to_string(),
            work_status: Some(WorkStatus::ModifiedDuty),
            anatomical_location: "Right shoulder".to_string(),
            initial_eval_date: Some(date(2024, 1, 5)),
        },
        initial_pain_scale: 7,
        current_pain_scale: 3,
        measurements: vec![
            dated(
                MeasurementSample::new(MeasurementCategory::RangeOfMotion)
                    .with_description("Shoulder Flexion")
                    .with_values("90", "120"),
            ),
            dated(
                MeasurementSample::new(MeasurementCategory::Strength)
                    .with_description("Deltoid Strength")
                    .with_values("3/5", "4/5"),
            ),
            dated(
                MeasurementSample::new(MeasurementCategory::Functional)
                    .with_description("Walking Tolerance")
                    .with_values("20", "15"),
            ),
            dated(
                MeasurementSample::new(MeasurementCategory::Pain)
                    .with_description("Pain with Lifting")
                    .with_values("8", "4"),
            ),
        ],
        need_more_pt: true,
        continued_goals: "Return to full duty lifting".to_string(),
        ..Default::default()
    };
    report.symptoms.pain_descriptors = vec![PainDescriptor::Aching, PainDescriptor::Sharp];
    report
}

fn build(report: &ProgressReport) -> CoverSheet {
    CoverSheet::build(report, &CoverSheetDefaults::default(), date(2024, 3, 4))
}

#[test]
fn blank_recipient_uses_defaults() {
    let sheet = build(&sample_report());
    assert_eq!(sheet.recipient_name, "Mount Sinai Selikoff Centers");
    assert_eq!(sheet.recipient_fax, "Manhattan Fax: 212-987-0889");
}

#[test]
fn recipient_on_the_report_wins() {
    let mut report = sample_report();
    report.recipient = Recipient {
        name: "Claims Dept".to_string(),
        fax: "555-0100".to_string(),
    };
    let sheet = build(&report);
    assert_eq!(sheet.recipient_name, "Claims Dept");
    assert_eq!(sheet.recipient_fax, "555-0100");
}

#[test]
fn view_model_formats_values() {
    let sheet = build(&sample_report());
    assert_eq!(sheet.sender, "Dana Reyes, PT, DPT");
    assert_eq!(sheet.date, "3/4/2024");
    assert_eq!(sheet.date_of_birth, "6/14/80");
    assert_eq!(sheet.date_of_injury.as_deref(), Some("12/2/23"));
    assert_eq!(sheet.work_status.as_deref(), Some("Modified Duty"));

    let headings: Vec<_> = sheet.sections.iter().map(|s| s.heading.as_str()).collect();
    assert_eq!(
        headings,
        ["Range of Motion", "Strength Tests", "Functional Tests", "Pain Measurements"]
    );

    let rom = &sheet.sections[0].rows[0];
    assert_eq!(rom.initial, "90 degrees");
    assert_eq!(rom.current, "120 degrees");
    assert_eq!(rom.delta.as_deref(), Some("+33%"));
    assert_eq!(rom.initial_date, "1/5/24");

    let pain = &sheet.sections[3].rows[0];
    assert_eq!(pain.initial, "8");
    assert_eq!(pain.current, "4 pain scale (0-10)");
    assert_eq!(pain.delta.as_deref(), Some("-50%"));

    // Walking tolerance dropped, so it is not in the summary.
    assert_eq!(sheet.summary.len(), 3);
    assert!(sheet.show_summary);
}

#[test]
fn rendered_sheet_has_every_section() {
    let rendered = render_cover_sheet(&build(&sample_report())).unwrap();

    for expected in [
        "# FAX COVER SHEET [DRAFT REPORT]",
        "**TO:** Mount Sinai Selikoff Centers",
        "**FROM:** Dana Reyes, PT, DPT",
        "Harbor Physical Therapy",
        "**Date:** 3/4/2024",
        "## PHYSICAL THERAPY PROGRESS REPORT",
        "**Patient:** Sam Ortiz",
        "**DOB:** 6/14/80    **Claim #:** WC-20931",
        "**Date of Injury:** 12/2/23    **Work Status:** Modified Duty",
        "**Mechanism of Injury:** Lifting heavy object",
        "### Initial Evaluation (1/5/24):",
        "- Pain 7/10",
        "- Right shoulder",
        "- Pain descriptors: Aching, Sharp",
        "### Current Status (3/4/2024):",
        "- Pain 3/10",
        "### Summary of Objective Improvements:",
        "- ↑ **Shoulder Flexion:** 33% improvement",
        "- ↑ **Deltoid Strength:** 1 level(s) improvement",
        "- ↓ **Pain with Lifting:** 50% pain reduction",
        "**RANGE OF MOTION**",
        "- **Shoulder Flexion:** 90 degrees → 120 degrees (+33%)",
        "- **Deltoid Strength:** 3/5 → 4/5 (+1 level(s))",
        "- **Walking Tolerance:** 20 minutes → 15 minutes (-25%)",
        "Initial: 1/5/24  Current: 3/1/24",
        "☒ Yes    ☐ No",
        "### Goals if Continued (4 weeks):",
        "Return to full duty lifting",
    ] {
        assert!(rendered.contains(expected), "missing {expected:?} in:\n{rendered}");
    }
    assert!(!rendered.contains("Walking Tolerance:** 25%"));
    assert!(!rendered.contains("Additional Notes"));
}

#[test]
fn summary_block_is_omitted_without_comparable_rows() {
    let mut report = sample_report();
    for sample in &mut report.measurements {
        sample.current_value.clear();
    }
    report.need_more_pt = false;

    let rendered = render_cover_sheet(&build(&report)).unwrap();
    assert!(!rendered.contains("Summary of Objective Improvements"));
    assert!(rendered.contains("### Objective Measurements:"));
    assert!(rendered.contains("☐ Yes    ☒ No"));
    assert!(!rendered.contains("Goals if Continued"));
}

#[test]
fn missing_injury_details_are_skipped() {
    let mut report = sample_report();
    report.injury.date_of_injury = None;
    report.injury.mechanism.clear();
    report.additional_notes = "Patient attending twice weekly.".to_string();

    let rendered = render_cover_sheet(&build(&report)).unwrap();
    assert!(!rendered.contains("Date of Injury"));
    assert!(!rendered.contains("Mechanism of Injury"));
    assert!(rendered.contains("### Additional Notes:\nPatient attending twice weekly."));
}

#[test]
fn custom_templates_see_the_same_fields() {
    let sheet = build(&sample_report());
    let rendered = render_template(
        "brief.txt",
        "{{ patient_name }} / {{ summary | length }} improvements",
        &sheet,
    )
    .unwrap();
    assert_eq!(rendered, "Sam Ortiz / 3 improvements");
}

#[test]
fn broken_templates_report_a_parse_error() {
    let sheet = build(&sample_report());
    let result = render_template("broken.txt", "{% if %}", &sheet);
    assert!(matches!(
        result,
        Err(ptfax_export::error::ExportError::TemplateParse(_))
    ));
}
