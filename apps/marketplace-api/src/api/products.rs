//! Products API routes
//!
//! This module wires the products domain to HTTP routes.

use axum::Router;
use domain_products::{MongoProductRepository, ProductService, handlers};

use crate::state::AppState;

/// Create the products router
pub fn router(state: &AppState) -> Router {
    let repository = MongoProductRepository::new(state.db.clone());
    let service = ProductService::new(repository);

    handlers::router(service)
}
