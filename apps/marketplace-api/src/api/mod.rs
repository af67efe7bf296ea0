//! API routes module
//!
//! Route assembly for the marketplace API. The public paths are `/`,
//! `/product`, and `/product/{id}`, plus the `/ready` readiness probe.

pub mod health;
pub mod products;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/product", products::router(state))
        .merge(health::router(state.clone()))
}

/// Plain-text greeting at the root path
async fn root() -> &'static str {
    "Welcome to DressStore Application."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_greeting() {
        assert_eq!(root().await, "Welcome to DressStore Application.");
    }
}
