//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host has no data API. It server-renders the Leptos app for every path
//! in the client route table, serves the compiled bundle under `/pkg`, and
//! answers a liveness check. A known page requested with a trailing slash is
//! redirected to its canonical path; every other path is redirected to `/`.

use std::path::PathBuf;

use axum::Router;
use axum::http::{StatusCode, Uri};
use axum::response::Redirect;
use axum::routing::get;
use client::route::AppRoute;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Full application router: SSR pages, static assets, health check, fallback.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_dir = site_root.join(leptos_options.site_pkg_dir.as_ref());

    Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .route_service("/logo.svg", ServeFile::new(site_root.join("logo.svg")))
        .fallback(redirect_unknown)
        .with_state(leptos_options)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn redirect_unknown(uri: Uri) -> Redirect {
    let target = AppRoute::redirect_target(uri.path());
    tracing::debug!(%uri, to = target.path(), "unmatched path, redirecting");
    Redirect::to(target.path())
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
