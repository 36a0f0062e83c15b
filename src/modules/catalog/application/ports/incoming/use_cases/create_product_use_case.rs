use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::modules::catalog::application::domain::entities::{DEFAULT_STOCK, MAX_PRICE};
use crate::modules::catalog::application::ports::outgoing::ProductView;
use crate::modules::seller::application::domain::entities::Seller;

//
// ──────────────────────────────────────────────────────────
// Create Product Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub(crate) name: String,
    pub(crate) desc: String,
    pub(crate) price_current: Decimal,
    pub(crate) category_slug: String,
    pub(crate) in_stock: i32,
    pub(crate) image1: String,
    pub(crate) image2: Option<String>,
    pub(crate) image3: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateProductCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Price must be between 0 and 9999999.99 with at most two decimals")]
    InvalidPrice,

    #[error("Stock cannot be negative")]
    NegativeStock,

    #[error("Category slug cannot be empty")]
    EmptyCategory,

    #[error("First image is required")]
    MissingImage,
}

pub(crate) fn validate_name(name: &str) -> Result<String, CreateProductCommandError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CreateProductCommandError::EmptyName);
    }
    if name.chars().count() > 100 {
        return Err(CreateProductCommandError::NameTooLong);
    }
    Ok(name.to_string())
}

pub(crate) fn validate_price(price: Decimal) -> Result<Decimal, CreateProductCommandError> {
    if price.is_sign_negative() || price > MAX_PRICE || price.normalize().scale() > 2 {
        return Err(CreateProductCommandError::InvalidPrice);
    }
    Ok(price)
}

pub(crate) fn optional_image(image: Option<String>) -> Option<String> {
    image
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty())
}

impl CreateProductCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        desc: String,
        price_current: Decimal,
        category_slug: String,
        in_stock: Option<i32>,
        image1: String,
        image2: Option<String>,
        image3: Option<String>,
    ) -> Result<Self, CreateProductCommandError> {
        let name = validate_name(&name)?;
        let price_current = validate_price(price_current)?;

        let in_stock = in_stock.unwrap_or(DEFAULT_STOCK);
        if in_stock < 0 {
            return Err(CreateProductCommandError::NegativeStock);
        }

        let category_slug = category_slug.trim().to_lowercase();
        if category_slug.is_empty() {
            return Err(CreateProductCommandError::EmptyCategory);
        }

        let image1 = image1.trim().to_string();
        if image1.is_empty() {
            return Err(CreateProductCommandError::MissingImage);
        }

        Ok(Self {
            name,
            desc: desc.trim().to_string(),
            price_current,
            category_slug,
            in_stock,
            image1,
            image2: optional_image(image2),
            image3: optional_image(image3),
        })
    }

    pub fn category_slug(&self) -> &str {
        &self.category_slug
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProductError {
    #[error("Category does not exist!")]
    CategoryNotFound,

    #[error("Could not derive a free slug: {0}")]
    SlugUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Publishes a product for an approved seller.
#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(
        &self,
        seller: &Seller,
        command: CreateProductCommand,
    ) -> Result<ProductView, CreateProductError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn command(price: Decimal, in_stock: Option<i32>) -> Result<CreateProductCommand, CreateProductCommandError> {
        CreateProductCommand::new(
            "Desk Lamp".to_string(),
            "Warm light".to_string(),
            price,
            "Lighting".to_string(),
            in_stock,
            "lamp.png".to_string(),
            Some("  ".to_string()),
            None,
        )
    }

    #[test]
    fn stock_defaults_to_five() {
        let command = command(dec!(19.99), None).unwrap();
        assert_eq!(command.in_stock, 5);
        assert_eq!(command.category_slug(), "lighting");
        assert!(command.image2.is_none());
    }

    #[test]
    fn negative_price_is_rejected() {
        assert_eq!(
            command(dec!(-1), None).unwrap_err(),
            CreateProductCommandError::InvalidPrice
        );
    }

    #[test]
    fn three_decimal_places_are_rejected() {
        assert_eq!(
            command(dec!(1.005), None).unwrap_err(),
            CreateProductCommandError::InvalidPrice
        );
    }

    #[test]
    fn negative_stock_is_rejected() {
        assert_eq!(
            command(dec!(1), Some(-3)).unwrap_err(),
            CreateProductCommandError::NegativeStock
        );
    }
}
