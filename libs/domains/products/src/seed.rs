//! Startup seed data for the products collection

use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{CreateProduct, ProductFilter};
use crate::repository::ProductRepository;

/// The fixed initial dataset
fn initial_products() -> Vec<CreateProduct> {
    let product = |name: &str, description: &str, price: f64, quantity: i32, category: &str| {
        CreateProduct {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            price: Some(price),
            quantity: Some(quantity),
            category: Some(category.to_string()),
        }
    };

    vec![
        product("Jacket", "Leather Jacket with Fur", 100.0, 10, "Men"),
        product("Sweater", "Warm wool sweater", 50.0, 20, "Women"),
        product("Jeans", "Blue denim jeans", 40.0, 50, "Men"),
        product("Dress", "Summer floral dress", 80.0, 15, "Women"),
        product("Shoes", "Running shoes", 60.0, 25, "Unisex"),
        product("Hat", "Baseball cap", 20.0, 30, "Men"),
    ]
}

/// Insert the fixed dataset when the collection is empty.
///
/// The guard makes repeated startups idempotent. Returns the number of
/// inserted records; zero when data was already present.
#[instrument(skip(repository))]
pub async fn seed_products<R: ProductRepository>(repository: &R) -> ProductResult<usize> {
    if repository.count(ProductFilter::default()).await? > 0 {
        tracing::info!("Products already present, skipping seed");
        return Ok(0);
    }

    let products = initial_products();
    let total = products.len();
    for product in products {
        repository.create(product).await?;
    }

    tracing::info!(count = total, "Products seeded successfully");
    Ok(total)
}
