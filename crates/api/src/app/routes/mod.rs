use axum::{routing::get, Router};

pub mod inventory;
pub mod system;

/// Router for all API endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/inventory", inventory::router())
}
