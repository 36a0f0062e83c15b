use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::cart::application::domain::entities::CartOutcome;

//
// ──────────────────────────────────────────────────────────
// Toggle Cart Item Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleCartItemCommand {
    slug: String,
    quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToggleCartItemCommandError {
    #[error("Product slug cannot be empty")]
    EmptySlug,

    #[error("Quantity cannot be negative")]
    NegativeQuantity,
}

impl ToggleCartItemCommand {
    pub fn new(slug: String, quantity: i32) -> Result<Self, ToggleCartItemCommandError> {
        let slug = slug.trim().to_lowercase();
        if slug.is_empty() {
            return Err(ToggleCartItemCommandError::EmptySlug);
        }
        if quantity < 0 {
            return Err(ToggleCartItemCommandError::NegativeQuantity);
        }

        Ok(Self { slug, quantity })
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ToggleCartItemError {
    #[error("No Product with that slug")]
    ProductNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Adds, updates or removes (quantity 0) the caller's cart line for a product.
#[async_trait]
pub trait ToggleCartItemUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        command: ToggleCartItemCommand,
    ) -> Result<CartOutcome, ToggleCartItemError>;
}
