// src/modules/catalog/application/ports/outgoing/product_repository.rs

use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::{Pricing, Product};
use crate::shared::{patch::PatchField, soft_delete::DeletionStatus};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateProductData {
    pub seller_id: Uuid,
    pub category_id: Uuid,
    pub name: String,

    /// Slug is immutable: only set at creation time
    pub slug: String,

    pub desc: String,
    pub price_current: Decimal,
    pub in_stock: i32,
    pub image1: String,
    pub image2: Option<String>,
    pub image3: Option<String>,
}

/// Patch semantics:
/// - `None` / `Unset` => keep
/// - `pricing` carries both price columns, already resolved by the domain
/// - image2/image3: `Null` => clear
#[derive(Debug, Clone)]
pub struct UpdateProductData {
    /// `price_current` read before the edit; the write only lands if the row
    /// still holds it.
    pub expected_price: Decimal,
    pub pricing: Option<Pricing>,
    pub name: Option<String>,
    pub desc: Option<String>,
    pub category_id: Option<Uuid>,
    pub in_stock: Option<i32>,
    pub image1: Option<String>,
    pub image2: PatchField<String>,
    pub image3: PatchField<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductRepositoryError {
    #[error("Product not found")]
    NotFound,

    #[error("Slug already exists")]
    SlugAlreadyExists,

    /// The guarded price no longer matches: someone else edited the price.
    #[error("Product was modified concurrently")]
    StaleWrite,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create_product(
        &self,
        data: CreateProductData,
    ) -> Result<Product, ProductRepositoryError>;

    async fn update_product(
        &self,
        product_id: Uuid,
        data: UpdateProductData,
    ) -> Result<Product, ProductRepositoryError>;

    async fn soft_delete_product(
        &self,
        product_id: Uuid,
        deletion: DeletionStatus,
    ) -> Result<(), ProductRepositoryError>;
}
