//! Modal for entering a new username.
//!
//! The modal owns only its draft. A submit hands the trimmed text to
//! `on_submit`; every other exit goes through `on_close` and discards the draft.

use leptos::prelude::*;

use crate::state::modal::AddTargetDraft;

#[component]
pub fn AddTargetModal(on_submit: Callback<String>, on_close: Callback<()>) -> impl IntoView {
    let draft = RwSignal::new(AddTargetDraft::default());

    let cancel = move || {
        draft.update(AddTargetDraft::clear);
        on_close.run(());
    };

    let submit = move || {
        let Some(username) = draft.try_update(AddTargetDraft::take_submission).flatten() else {
            return;
        };
        on_submit.run(username);
    };

    view! {
        <div class="modal">
            <button class="modal__overlay" aria-label="Close overlay" on:click=move |_| cancel()></button>
            <div
                class="modal__panel"
                role="dialog"
                aria-modal="true"
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        cancel();
                    }
                }
            >
                <div class="modal__header">
                    <h2 class="modal__title">"Add Username"</h2>
                    <button class="modal__close" title="Close" on:click=move |_| cancel()>
                        "✕"
                    </button>
                </div>

                <label class="modal__label" for="add-target-username">
                    "Instagram username"
                </label>
                <input
                    id="add-target-username"
                    class="modal__input"
                    type="text"
                    placeholder="e.g. some_user"
                    autofocus=true
                    prop:value=move || draft.with(|d| d.input.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.input = value);
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit();
                        }
                    }
                />

                <div class="modal__actions">
                    <button class="btn" on:click=move |_| cancel()>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || !draft.with(AddTargetDraft::can_submit)
                        on:click=move |_| submit()
                    >
                        "Submit"
                    </button>
                </div>
            </div>
        </div>
    }
}
