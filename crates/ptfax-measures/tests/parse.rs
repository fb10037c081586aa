use ptfax_measures::parse::{
    ParseMode, is_mmt_token, parse_lenient, parse_mmt_leading_level, parse_mmt_level,
    parse_mmt_scale, parse_number, parse_prefix, parse_strict,
};

#[test]
fn strict_accepts_plain_numbers_only() {
    assert_eq!(parse_strict("42"), Some(42.0));
    assert_eq!(parse_strict(" 3.5 "), Some(3.5));
    assert_eq!(parse_strict("-7"), Some(-7.0));
    assert_eq!(parse_strict("90°"), None);
    assert_eq!(parse_strict(""), None);
    assert_eq!(parse_strict("infinity"), None);
}

#[test]
fn lenient_strips_stray_characters() {
    assert_eq!(parse_lenient("120°"), Some(120.0));
    assert_eq!(parse_lenient("~15 min"), Some(15.0));
    assert_eq!(parse_lenient("-10 deg"), Some(-10.0));
    assert_eq!(parse_lenient("2.5 hrs"), Some(2.5));
}

#[test]
fn lenient_reads_the_leading_number() {
    assert_eq!(parse_lenient("120-130"), Some(120.0));
    assert_eq!(parse_lenient("5-3"), Some(5.0));
    assert_eq!(parse_lenient("1.2.3"), Some(1.2));
    assert_eq!(parse_lenient("about .5 mi"), Some(0.5));
    assert_eq!(parse_lenient("--4"), None);
}

#[test]
fn lenient_rejects_values_without_digits() {
    assert_eq!(parse_lenient("full"), None);
    assert_eq!(parse_lenient("."), None);
    assert_eq!(parse_lenient("-"), None);
}

#[test]
fn prefix_reads_the_number_as_written() {
    assert_eq!(parse_prefix("6/10"), Some(6.0));
    assert_eq!(parse_prefix("  7.5 at worst"), Some(7.5));
    assert_eq!(parse_prefix("+3"), Some(3.0));
    assert_eq!(parse_prefix("2e1"), Some(20.0));
    assert_eq!(parse_prefix("4e"), Some(4.0));
    assert_eq!(parse_prefix("about 6"), None);
    assert_eq!(parse_prefix(""), None);
}

#[test]
fn parse_number_dispatches_on_mode() {
    assert_eq!(parse_number("45 lbs", ParseMode::Strict), None);
    assert_eq!(parse_number("45 lbs", ParseMode::Lenient), Some(45.0));
    assert_eq!(parse_number("45 lbs", ParseMode::Prefix), Some(45.0));
    assert_eq!(parse_number("~45", ParseMode::Prefix), None);
}

#[test]
fn mmt_tokens() {
    assert!(is_mmt_token("4/5"));
    assert!(is_mmt_token("10/10"));
    assert!(!is_mmt_token("4+/5"));
    assert!(!is_mmt_token("4 / 5"));
    assert!(!is_mmt_token("/5"));
    assert!(!is_mmt_token("4"));

    assert_eq!(parse_mmt_level("3/5"), Some(3));
    assert_eq!(parse_mmt_scale("3/5"), Some(5));
    assert_eq!(parse_mmt_level("a/5"), None);
    assert_eq!(parse_mmt_level("99999999999999999999/5"), None);
}

#[test]
fn leading_levels_ignore_grade_modifiers() {
    assert_eq!(parse_mmt_leading_level("4+/5"), Some(4));
    assert_eq!(parse_mmt_leading_level("3-/5"), Some(3));
    assert_eq!(parse_mmt_leading_level(" 2 / 5"), Some(2));
    assert_eq!(parse_mmt_leading_level("a/5"), None);
    assert_eq!(parse_mmt_leading_level("4"), None);
}
