// Library root - exports the route table and app state for the binary
// and the integration tests.

pub mod config;
pub mod database;
pub mod handlers;
pub mod models;
pub mod store;

pub use config::Config;

use std::sync::Arc;

use axum::{routing::get, Router};

use store::WalletStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn WalletStore>,
}

/// Builds the API router. Lives in the library so integration tests run
/// the exact route table the binary serves.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/v1/wallets",
            get(handlers::list_wallets).post(handlers::create_wallet),
        )
        .route(
            "/api/v1/wallets/:id",
            get(handlers::get_wallet).put(handlers::update_wallet),
        )
        .route(
            "/api/v1/users/:id/wallets",
            get(handlers::get_user_wallets).delete(handlers::delete_user_wallets),
        )
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
