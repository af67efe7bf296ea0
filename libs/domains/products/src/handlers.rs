//! HTTP handlers for the Products API

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductFilter, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(schemas(Product, CreateProduct, UpdateProduct, DeleteConfirmation)),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// Parse a path identifier.
///
/// Failures land in the operation-failure class: an unparseable id
/// answers 500, never 404.
fn parse_id(id: &str) -> ProductResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| ProductError::InvalidId(id.to_string()))
}

/// Confirmation body returned by a successful delete
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteConfirmation {
    pub message: String,
}

/// List products, optionally filtered by exact name
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductFilter),
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 500, description = "Operation failure")
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(filter): Query<ProductFilter>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list_products(filter).await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Stored product", body = Product),
        (status = 500, description = "Validation or operation failure")
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Json(input): Json<CreateProduct>,
) -> ProductResult<Json<Product>> {
    let product = service.create_product(input).await?;
    Ok(Json(product))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "No product has this ID"),
        (status = 500, description = "Malformed ID or operation failure")
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<Product>> {
    let id = parse_id(&id)?;
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Update a product by ID
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 404, description = "No product has this ID"),
        (status = 500, description = "Malformed ID or operation failure")
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    Json(input): Json<UpdateProduct>,
) -> ProductResult<Json<Product>> {
    let id = parse_id(&id)?;
    let product = service.update_product(id, input).await?;
    Ok(Json(product))
}

/// Delete a product by ID
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = DeleteConfirmation),
        (status = 404, description = "No product has this ID"),
        (status = 500, description = "Malformed ID or operation failure")
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<DeleteConfirmation>> {
    let id = parse_id(&id)?;
    service.delete_product(id).await?;
    Ok(Json(DeleteConfirmation {
        message: "Product deleted".to_string(),
    }))
}
