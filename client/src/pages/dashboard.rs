//! Landing dashboard with aggregate counters.

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::state::stats::DashboardStats;

/// Dashboard page. Renders one card per counter, and the usernames card
/// links to the target table.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let stats = DashboardStats::default();

    view! {
        <div class="page-eyebrow">"Instagram"</div>
        <h2 class="page-title">"Dashboard"</h2>

        <div class="stat-grid">
            {stats.cards().into_iter().map(|spec| view! { <StatCard spec=spec/> }).collect_view()}
        </div>
    }
}
