use leptos::prelude::*;

#[component]
pub fn Logo() -> impl IntoView {
    view! { <img class="logo" src="/logo.svg" alt="Mabit logo" draggable="false"/> }
}
