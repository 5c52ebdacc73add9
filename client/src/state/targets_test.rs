use super::*;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn list_of(names: &[&str]) -> TargetList {
    let targets = names
        .iter()
        .enumerate()
        .map(|(i, name)| Target::new(i as u64 + 1, name, day(2026, 1, 1)))
        .collect();
    TargetList::new(targets)
}

fn usernames(rows: &[&Target]) -> Vec<String> {
    rows.iter().map(|t| t.username.clone()).collect()
}

// =============================================================
// Seed
// =============================================================

#[test]
fn seeded_list_has_single_mock_target() {
    let list = TargetList::seeded();
    assert_eq!(list.len(), 1);
    let t = &list.targets()[0];
    assert_eq!(t.id, 1);
    assert_eq!(t.username, "test_user");
    assert_eq!(t.profile_pic_url, "https://i.pravatar.cc/80?img=12");
    assert!(!t.is_private);
    assert_eq!(t.last_scraped, day(2026, 1, 3).and_hms_opt(14, 10, 0));
    assert!(t.is_scraped);
    assert_eq!(t.added_date, day(2026, 1, 1));
    assert_eq!(t.total_stories, 120);
    assert_eq!(t.stories_24h, 4);
    assert_eq!(t.comments, "Watch this account");
    assert_eq!(list.filter(), "");
}

// =============================================================
// add_target
// =============================================================

#[test]
fn add_to_seed_prepends_with_next_id_and_defaults() {
    let mut list = TargetList::seeded();
    let outcome = list.add_target_on("New_User", day(2026, 2, 14));
    assert_eq!(outcome, AddOutcome::Added { id: 2 });
    assert_eq!(list.len(), 2);

    let t = &list.targets()[0];
    assert_eq!(t.id, 2);
    assert_eq!(t.username, "New_User");
    assert!(t.is_scraped);
    assert!(!t.is_private);
    assert_eq!(t.total_stories, 0);
    assert_eq!(t.stories_24h, 0);
    assert_eq!(t.last_scraped, None);
    assert_eq!(t.comments, "");
    assert_eq!(t.added_date, day(2026, 2, 14));
    assert_eq!(list.targets()[1].username, "test_user");
}

#[test]
fn add_trims_surrounding_whitespace() {
    let mut list = TargetList::default();
    list.add_target_on("  spaced_out \t", day(2026, 1, 1));
    assert_eq!(list.targets()[0].username, "spaced_out");
}

#[test]
fn add_empty_or_blank_is_rejected() {
    let mut list = TargetList::seeded();
    let before = list.clone();
    assert_eq!(list.add_target_on("", day(2026, 1, 1)), AddOutcome::Empty);
    assert_eq!(list.add_target_on("   ", day(2026, 1, 1)), AddOutcome::Empty);
    assert_eq!(list, before);
}

#[test]
fn add_rejects_any_casing_of_existing_username() {
    let mut list = TargetList::seeded();
    for variant in ["test_user", "TEST_USER", "Test_User", "  tEsT_uSeR  "] {
        let outcome = list.add_target_on(variant, day(2026, 1, 1));
        assert!(matches!(outcome, AddOutcome::Duplicate { .. }), "{variant:?} should be a duplicate");
        assert_eq!(list.len(), 1);
    }
}

#[test]
fn duplicate_outcome_carries_trimmed_input() {
    let mut list = TargetList::seeded();
    let outcome = list.add_target_on(" TEST_user ", day(2026, 1, 1));
    assert_eq!(outcome, AddOutcome::Duplicate { username: "TEST_user".to_owned() });
}

#[test]
fn add_to_empty_list_starts_ids_at_one() {
    let mut list = TargetList::default();
    assert_eq!(list.add_target_on("first", day(2026, 1, 1)), AddOutcome::Added { id: 1 });
    assert_eq!(list.add_target_on("second", day(2026, 1, 1)), AddOutcome::Added { id: 2 });
    assert_eq!(usernames(&list.visible_rows()), ["second", "first"]);
}

#[test]
fn next_id_follows_max_not_length() {
    let mut list = TargetList::new(vec![
        Target::new(7, "seven", day(2026, 1, 1)),
        Target::new(3, "three", day(2026, 1, 1)),
    ]);
    assert_eq!(list.next_id(), 8);
    assert_eq!(list.add_target_on("eight", day(2026, 1, 1)), AddOutcome::Added { id: 8 });
}

#[test]
fn add_target_uses_current_date() {
    let mut list = TargetList::default();
    let before = Utc::now().date_naive();
    list.add_target("today");
    let after = Utc::now().date_naive();
    let added = list.targets()[0].added_date;
    assert!(added >= before && added <= after);
}

// =============================================================
// profile_pic_url
// =============================================================

#[test]
fn profile_pic_url_encodes_username() {
    assert_eq!(profile_pic_url("plain_name"), "https://i.pravatar.cc/80?u=plain_name");
    assert_eq!(profile_pic_url("a b&c"), "https://i.pravatar.cc/80?u=a%20b%26c");
}

#[test]
fn new_target_derives_profile_pic_from_username() {
    let t = Target::new(5, "some.user", day(2026, 1, 1));
    assert_eq!(t.profile_pic_url, profile_pic_url("some.user"));
}

// =============================================================
// toggle_scraped
// =============================================================

#[test]
fn toggle_flips_only_matching_target() {
    let mut list = list_of(&["a", "b", "c"]);
    assert!(list.toggle_scraped(2));
    let flags: Vec<bool> = list.targets().iter().map(|t| t.is_scraped).collect();
    assert_eq!(flags, [true, false, true]);
}

#[test]
fn toggle_twice_restores_original() {
    let mut list = TargetList::seeded();
    let before = list.clone();
    list.toggle_scraped(1);
    list.toggle_scraped(1);
    assert_eq!(list, before);
}

#[test]
fn toggle_unknown_id_is_noop() {
    let mut list = TargetList::seeded();
    let before = list.clone();
    assert!(!list.toggle_scraped(99));
    assert_eq!(list, before);
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn filter_matches_substring() {
    let mut list = list_of(&["test_user", "other"]);
    list.set_filter("test");
    assert_eq!(usernames(&list.visible_rows()), ["test_user"]);
}

#[test]
fn empty_filter_returns_all_in_order() {
    let list = list_of(&["test_user", "other"]);
    assert_eq!(usernames(&list.visible_rows()), ["test_user", "other"]);
}

#[test]
fn filter_is_case_insensitive() {
    let mut list = list_of(&["Test_User", "other"]);
    list.set_filter("USER");
    assert_eq!(usernames(&list.visible_rows()), ["Test_User"]);
}

#[test]
fn blank_filter_shows_everything() {
    let mut list = list_of(&["a", "b"]);
    list.set_filter("   ");
    assert_eq!(list.visible_rows().len(), 2);
}

#[test]
fn filter_with_no_match_is_empty() {
    let mut list = list_of(&["a", "b"]);
    list.set_filter("zzz");
    assert!(list.visible_rows().is_empty());
}

#[test]
fn filter_preserves_store_order_after_adds() {
    let mut list = list_of(&["user_one"]);
    list.add_target_on("user_two", day(2026, 1, 2));
    list.add_target_on("nobody", day(2026, 1, 2));
    list.set_filter("user");
    assert_eq!(usernames(&list.visible_rows()), ["user_two", "user_one"]);
    assert_eq!(list.filter(), "user");
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn target_serializes_dates_as_iso_strings() {
    let t = Target::new(1, "x", day(2026, 3, 9));
    let json = serde_json::to_value(&t).unwrap();
    assert_eq!(json["added_date"], "2026-03-09");
    assert_eq!(json["last_scraped"], serde_json::Value::Null);
}
