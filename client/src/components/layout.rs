//! Page frame: full-width header with the logo, centered content below.

use leptos::prelude::*;

use crate::components::logo::Logo;
use crate::route::AppRoute;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <header class="layout__header">
                <a class="layout__logo" href=AppRoute::Root.path() title="Dashboard">
                    <Logo/>
                </a>
            </header>
            <main class="layout__content">{children()}</main>
        </div>
    }
}
