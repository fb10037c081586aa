use ptfax_core::models::measurement::MeasurementCategory::{self, Functional, Pain, RangeOfMotion, Strength};
use ptfax_measures::{Direction, Improvement, ImprovementKind, calculate, report_improvement};

fn percent(direction: Direction, magnitude: f64) -> Improvement {
    Improvement {
        magnitude,
        direction,
        kind: ImprovementKind::Percentage,
    }
}

#[test]
fn mmt_grades_compare_levels() {
    let result = calculate(Strength, "2/5", "4/5", Some("MMT"));
    assert_eq!(
        result,
        Some(Improvement {
            magnitude: 2.0,
            direction: Direction::Positive,
            kind: ImprovementKind::MmtLevels,
        })
    );
}

#[test]
fn unchanged_mmt_grade_is_a_non_positive_result() {
    let result = calculate(Strength, "3/5", "3/5", Some("MMT")).unwrap();
    assert_eq!(result.direction, Direction::Negative);
    assert_eq!(result.magnitude, 0.0);
    assert_eq!(result.kind, ImprovementKind::MmtLevels);
}

#[test]
fn mmt_decline_is_negative() {
    let result = calculate(Strength, "4/5", "3/5", Some("MMT")).unwrap();
    assert_eq!(result.direction, Direction::Negative);
    assert_eq!(result.magnitude, 1.0);
}

#[test]
fn strength_with_numeric_unit_uses_percent_change() {
    assert_eq!(
        calculate(Strength, "30", "45", Some("lbs")),
        Some(percent(Direction::Positive, 50.0))
    );
}

#[test]
fn mmt_unit_falls_back_to_numbers() {
    assert_eq!(
        calculate(Strength, "30", "45", Some("MMT")),
        Some(percent(Direction::Positive, 50.0))
    );
}

#[test]
fn malformed_mmt_with_no_numeric_reading_is_absent() {
    assert_eq!(calculate(Strength, "a/5", "4/5", Some("MMT")), None);
}

#[test]
fn pain_reduction_is_positive() {
    assert_eq!(
        calculate(Pain, "8", "4", None),
        Some(percent(Direction::Positive, 50.0))
    );
}

#[test]
fn pain_worsening_is_negative() {
    assert_eq!(
        calculate(Pain, "4", "8", None),
        Some(percent(Direction::Negative, 100.0))
    );
}

#[test]
fn zero_baseline_is_absent_for_every_category() {
    for category in MeasurementCategory::ALL {
        assert_eq!(calculate(category, "0", "5", Some("units")), None, "{category}");
        assert_eq!(report_improvement(category, "0", "5"), None, "{category}");
    }
}

#[test]
fn empty_values_are_absent() {
    for category in MeasurementCategory::ALL {
        assert_eq!(calculate(category, "", "5", None), None);
        assert_eq!(calculate(category, "5", "", None), None);
        assert_eq!(calculate(category, "", "", Some("MMT")), None);
    }
}

#[test]
fn non_numeric_values_are_absent() {
    assert_eq!(calculate(RangeOfMotion, "ninety", "120", None), None);
    assert_eq!(calculate(Functional, "5", "NaN", None), None);
    assert_eq!(calculate(Functional, "inf", "5", None), None);
}

#[test]
fn range_of_motion_gain_rounds_to_whole_percent() {
    // (120 - 90) / 90 = 33.33%
    assert_eq!(
        calculate(RangeOfMotion, "90", "120", Some("degrees")),
        Some(percent(Direction::Positive, 33.0))
    );
}

#[test]
fn higher_is_better_loss_is_negative() {
    assert_eq!(
        calculate(Functional, "20", "15", Some("minutes")),
        Some(percent(Direction::Negative, 25.0))
    );
}

#[test]
fn negative_baseline_divides_by_magnitude() {
    // Knee extension lag: -10 to -5 is a 50% gain.
    assert_eq!(
        calculate(RangeOfMotion, "-10", "-5", None),
        Some(percent(Direction::Positive, 50.0))
    );
}

#[test]
fn direction_matches_value_order_for_higher_is_better() {
    let pairs: [(f64, f64); 7] = [
        (10.0, 12.0),
        (10.0, 8.0),
        (3.5, 7.0),
        (50.0, 49.0),
        (-4.0, -2.0),
        (1000.0, 1004.0),
        (1000.0, 999.0),
    ];
    for (initial, current) in pairs {
        let result = calculate(RangeOfMotion, &initial.to_string(), &current.to_string(), None)
            .unwrap();
        let expected = f64::abs(current - initial) / f64::abs(initial) * 100.0;
        assert_eq!(result.magnitude, expected.round());
        assert_eq!(result.is_positive(), current > initial);
    }
}

#[test]
fn direction_is_inverted_for_pain() {
    let pairs: [(f64, f64); 6] = [
        (6.0, 3.0),
        (3.0, 6.0),
        (10.0, 9.0),
        (2.0, 2.5),
        (1000.0, 996.0),
        (1000.0, 1003.0),
    ];
    for (initial, current) in pairs {
        let result = calculate(Pain, &initial.to_string(), &current.to_string(), None).unwrap();
        assert_eq!(result.is_positive(), current < initial);
    }
}

#[test]
fn calculation_is_idempotent() {
    let first = calculate(Strength, "3/5", "5/5", Some("MMT"));
    let second = calculate(Strength, "3/5", "5/5", Some("MMT"));
    assert_eq!(first, second);

    let first = calculate(Pain, "7", "3", None).unwrap();
    let second = calculate(Pain, "7", "3", None).unwrap();
    assert_eq!(first.magnitude.to_bits(), second.magnitude.to_bits());
}

#[test]
fn live_calculation_is_strict_about_units_in_values() {
    assert_eq!(calculate(RangeOfMotion, "90°", "120°", None), None);
}

#[test]
fn report_calculation_tolerates_unit_characters() {
    assert_eq!(
        report_improvement(RangeOfMotion, "90°", "135°"),
        Some(percent(Direction::Positive, 50.0))
    );
}

#[test]
fn report_recognizes_mmt_grades_whatever_the_unit() {
    let result = report_improvement(Strength, "3/5", "5/5").unwrap();
    assert_eq!(result.kind, ImprovementKind::MmtLevels);
    assert_eq!(result.magnitude, 2.0);
}

#[test]
fn report_reads_the_leading_pain_number() {
    assert_eq!(
        report_improvement(Pain, "6/10", "3/10"),
        Some(percent(Direction::Positive, 50.0))
    );
    assert_eq!(
        report_improvement(Pain, "6", "3"),
        Some(percent(Direction::Positive, 50.0))
    );
    assert_eq!(report_improvement(Pain, "severe", "3"), None);
}

#[test]
fn report_reads_graded_strength_by_level() {
    assert_eq!(
        report_improvement(Strength, "4+/5", "5/5"),
        Some(Improvement {
            magnitude: 1.0,
            direction: Direction::Positive,
            kind: ImprovementKind::MmtLevels,
        })
    );
    let same_level = report_improvement(Strength, "4-/5", "4+/5").unwrap();
    assert_eq!(same_level.kind, ImprovementKind::MmtLevels);
    assert_eq!(same_level.magnitude, 0.0);
}

#[test]
fn report_reads_a_range_by_its_first_number() {
    // 120-130 reads as 120; (150 - 120) / 120 = 25%.
    assert_eq!(
        report_improvement(RangeOfMotion, "120-130", "150"),
        Some(percent(Direction::Positive, 25.0))
    );
}

#[test]
fn sub_percent_changes_keep_their_direction() {
    assert_eq!(
        calculate(RangeOfMotion, "1000", "1004", None),
        Some(percent(Direction::Positive, 0.0))
    );
    assert_eq!(
        calculate(RangeOfMotion, "1000", "996", None),
        Some(percent(Direction::Negative, 0.0))
    );
    assert_eq!(
        calculate(Pain, "1000", "996", None),
        Some(percent(Direction::Positive, 0.0))
    );
    assert_eq!(
        calculate(Functional, "200", "200", None),
        Some(percent(Direction::Negative, 0.0))
    );
}

#[test]
fn mmt_unit_must_match_exactly() {
    assert_eq!(calculate(Strength, "2/5", "4/5", Some("mmt")), None);
    assert_eq!(calculate(Strength, "2/5", "4/5", Some(" MMT")), None);
}

#[test]
fn badges_read_like_the_editor() {
    let mmt = calculate(Strength, "2/5", "4/5", Some("MMT")).unwrap();
    assert_eq!(mmt.badge(Strength), "↑ 2 MMT levels improvement");

    let one_level = calculate(Strength, "4/5", "3/5", Some("MMT")).unwrap();
    assert_eq!(one_level.badge(Strength), "↓ 1 MMT level decrease");

    let rom = calculate(RangeOfMotion, "100", "125", None).unwrap();
    assert_eq!(rom.badge(RangeOfMotion), "↑ 25% improvement");

    let pain = calculate(Pain, "8", "4", None).unwrap();
    assert_eq!(pain.badge(Pain), "↑ 50% pain reduction");

    let worse = calculate(Pain, "4", "8", None).unwrap();
    assert_eq!(worse.badge(Pain), "↓ 100% pain increase");
}
