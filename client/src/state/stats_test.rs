use super::*;

// =============================================================
// DashboardStats
// =============================================================

#[test]
fn default_stats_match_mock_figures() {
    let s = DashboardStats::default();
    assert_eq!(s.usernames, 42);
    assert_eq!(s.stories, 1280);
    assert_eq!(s.stories_24h, 37);
    assert_eq!(s.military_related, 116);
    assert_eq!(s.new_items, 12);
    assert_eq!(s.complete_items, 268);
}

#[test]
fn cards_are_in_display_order() {
    let titles: Vec<&str> = DashboardStats::default().cards().iter().map(|c| c.title).collect();
    assert_eq!(
        titles,
        ["Usernames", "Stories", "Stories - Last 24h", "Military Related", "New Items", "Complete Items"]
    );
}

#[test]
fn cards_carry_stat_values() {
    let stats = DashboardStats { stories: 5, new_items: 9, ..DashboardStats::default() };
    let cards = stats.cards();
    assert_eq!(cards[1].value, 5);
    assert_eq!(cards[4].value, 9);
}

#[test]
fn only_usernames_card_is_clickable() {
    let cards = DashboardStats::default().cards();
    let clickable: Vec<&str> = cards.iter().filter(|c| c.action.is_clickable()).map(|c| c.title).collect();
    assert_eq!(clickable, ["Usernames"]);
    assert_eq!(cards[0].action, CardAction::Navigate(AppRoute::InstagramUsernames));
}

#[test]
fn subtitles_present_where_expected() {
    let cards = DashboardStats::default().cards();
    assert_eq!(cards[0].subtitle, Some("Manage scraping targets"));
    assert_eq!(cards[1].subtitle, None);
    assert_eq!(cards[2].subtitle, None);
    assert_eq!(cards[3].subtitle, Some("AI analyzed as interesting"));
}

// =============================================================
// CardAction
// =============================================================

#[test]
fn static_card_is_not_clickable() {
    assert!(!CardAction::Static.is_clickable());
    assert!(CardAction::Navigate(AppRoute::Root).is_clickable());
}
