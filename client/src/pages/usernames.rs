//! Usernames page: the scrape-target table with search and add.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page is the sole owner of `UsernamesPageState`. It is created on
//! mount and dropped on unmount, so every visit starts from the seed list
//! with the modal closed.

use leptos::prelude::*;

use crate::components::add_target_modal::AddTargetModal;
use crate::components::targets_table::TargetsTable;
use crate::route::AppRoute;
use crate::state::usernames::UsernamesPageState;

#[component]
pub fn UsernamesPage() -> impl IntoView {
    let page = RwSignal::new(UsernamesPageState::default());

    let visible = Signal::derive(move || {
        page.with(|p| p.targets.visible_rows().into_iter().cloned().collect::<Vec<_>>())
    });

    let on_toggle = Callback::new(move |id: u64| page.update(|p| p.toggle_scraped(id)));
    let on_close = Callback::new(move |()| page.update(UsernamesPageState::cancel));
    let on_submit = Callback::new(move |username: String| {
        page.update(|p| {
            p.submit(&username);
        });
    });

    view! {
        <div class="page-header">
            <div>
                <div class="page-eyebrow">"Instagram"</div>
                <h2 class="page-title">"Usernames"</h2>
                <a class="page-back" href=AppRoute::InstagramDashboard.path()>
                    "← Back to dashboard"
                </a>
            </div>

            <button class="btn btn--primary" on:click=move |_| page.update(UsernamesPageState::open_add)>
                "+ Add"
            </button>
        </div>

        <div class="page-search">
            <input
                class="page-search__input"
                type="text"
                placeholder="Search username..."
                prop:value=move || page.with(|p| p.targets.filter().to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    page.update(|p| p.set_filter(value));
                }
            />
        </div>

        <Show when=move || page.with(|p| p.notice.is_some())>
            <p class="page-notice" role="status">
                {move || page.with(|p| p.notice.clone().unwrap_or_default())}
            </p>
        </Show>

        <TargetsTable rows=visible on_toggle=on_toggle/>

        <Show when=move || page.with(|p| p.modal.is_open())>
            <AddTargetModal on_submit=on_submit on_close=on_close/>
        </Show>
    }
}
