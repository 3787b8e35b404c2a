//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the small JSON API with Leptos SSR rendering under a
//! single Axum router. Compiled assets are served from `<site_root>/pkg`,
//! and any other unmatched path falls through to the site root on disk.

pub mod health;

use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use client::app::{App, shell};
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// API routes, reachable from any origin.
fn api_routes() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ping", get(health::ping))
        .route("/healthz", get(health::healthz))
        .layer(cors)
}

/// Full application: API routes + Leptos SSR at `/` + static assets.
pub fn app(config: &ServerConfig) -> Router {
    let leptos_options = config.leptos_options.clone();
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_path = site_root_path.join(leptos_options.site_pkg_dir.as_ref());

    api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_path))
        .fallback_service(ServeDir::new(site_root_path))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
