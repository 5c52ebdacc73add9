use super::*;

#[test]
fn handle_prefixes_at_sign() {
    assert_eq!(handle("test_user"), "@test_user");
}

#[test]
fn yes_no_labels() {
    assert_eq!(yes_no(true), "Yes");
    assert_eq!(yes_no(false), "No");
}

#[test]
fn date_is_iso() {
    let d = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    assert_eq!(date(d), "2026-01-01");
}

#[test]
fn last_scraped_formats_to_minutes() {
    let ts = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap().and_hms_opt(14, 10, 59).unwrap();
    assert_eq!(last_scraped(Some(ts)), "2026-01-03 14:10");
}

#[test]
fn missing_values_render_placeholder() {
    assert_eq!(last_scraped(None), PLACEHOLDER);
    assert_eq!(text_or_placeholder(""), PLACEHOLDER);
    assert_eq!(text_or_placeholder("note"), "note");
}
