//! Dashboard counter card.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::stats::{CardAction, StatCardSpec};

/// A single counter. Cards with `CardAction::Navigate` behave as buttons and
/// activate on click, Enter, or Space.
#[component]
pub fn StatCard(spec: StatCardSpec) -> impl IntoView {
    let navigate = use_navigate();
    let action = spec.action;
    let clickable = action.is_clickable();

    let activate = move || {
        if let CardAction::Navigate(route) = action {
            navigate(route.path(), NavigateOptions::default());
        }
    };
    let activate_key = activate.clone();

    view! {
        <div
            class=if clickable { "stat-card stat-card--clickable" } else { "stat-card" }
            role=clickable.then_some("button")
            tabindex=clickable.then_some("0")
            on:click=move |_| activate()
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if clickable && matches!(ev.key().as_str(), "Enter" | " ") {
                    ev.prevent_default();
                    activate_key();
                }
            }
        >
            <div class="stat-card__title">{spec.title}</div>
            <div class="stat-card__value">{spec.value}</div>
            {spec.subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
        </div>
    }
}
