//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::pages::{dashboard::DashboardPage, usernames::UsernamesPage};
use crate::route::AppRoute;

/// Two-segment path for a page under a section.
fn section_path(route: AppRoute) -> (StaticSegment<&'static str>, StaticSegment<&'static str>) {
    (StaticSegment(route.section_segment().unwrap_or_default()), StaticSegment(route.page_segment()))
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Every page renders inside `Layout`. Paths outside the route table
/// redirect to `/`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/mabit.css"/>
        <Title text="Mabit"/>

        <Router>
            <Layout>
                <Routes fallback=|| view! { <Redirect path=AppRoute::fallback().path()/> }>
                    <Route path=StaticSegment(AppRoute::Root.page_segment()) view=DashboardPage/>
                    <Route path=section_path(AppRoute::InstagramDashboard) view=DashboardPage/>
                    <Route path=section_path(AppRoute::InstagramUsernames) view=UsernamesPage/>
                </Routes>
            </Layout>
        </Router>
    }
}
