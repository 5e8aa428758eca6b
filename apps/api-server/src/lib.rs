//! # Blog Posts API
//!
//! Actix-web surface for the posts resource. The binary in `main.rs` and the
//! integration tests both build their `App` through [`configure_app`].

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;

use actix_web::web;

pub use state::AppState;

/// Register shared state, extractor error handling and all routes.
pub fn configure_app(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state))
            .app_data(middleware::error::json_config())
            .app_data(middleware::error::path_config())
            .configure(handlers::configure_routes);
    }
}
