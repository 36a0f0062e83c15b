// src/modules/catalog/application/ports/outgoing/product_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::catalog::application::domain::entities::{Category, Product};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Shop-facing summary of the seller behind a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SellerShopView {
    pub name: String,
    pub slug: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductView {
    pub seller: Option<SellerShopView>,
    pub name: String,
    pub slug: String,
    pub desc: String,
    #[schema(value_type = Option<String>, example = "24.99")]
    pub price_old: Option<Decimal>,
    #[schema(value_type = String, example = "19.99")]
    pub price_current: Decimal,
    pub category: Option<Category>,
    pub in_stock: i32,
    pub image1: String,
    pub image2: Option<String>,
    pub image3: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Shop listing filters; every bound is inclusive.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub in_stock: Option<i32>,
    pub created_after: Option<DateTime<Utc>>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProductQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side, non-deleted products only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProductQuery: Send + Sync {
    /// Newest first.
    async fn list(&self, filter: ProductFilter) -> Result<Vec<ProductView>, ProductQueryError>;

    async fn list_by_category(
        &self,
        category_id: Uuid,
    ) -> Result<Vec<ProductView>, ProductQueryError>;

    async fn list_by_seller(&self, seller_id: Uuid) -> Result<Vec<ProductView>, ProductQueryError>;

    async fn find_view_by_slug(&self, slug: &str)
        -> Result<Option<ProductView>, ProductQueryError>;

    async fn find_view_by_id(&self, product_id: Uuid)
        -> Result<Option<ProductView>, ProductQueryError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, ProductQueryError>;

    /// Checks every product, deleted ones included: slugs are never reused.
    async fn slug_taken(&self, slug: &str) -> Result<bool, ProductQueryError>;
}
