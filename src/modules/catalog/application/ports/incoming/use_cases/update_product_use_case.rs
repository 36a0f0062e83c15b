use async_trait::async_trait;
use rust_decimal::Decimal;

use super::create_product_use_case::{
    optional_image, validate_name, validate_price, CreateProductCommandError,
};
use crate::modules::catalog::application::ports::outgoing::ProductView;
use crate::modules::seller::application::domain::entities::Seller;
use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// Update Product Command
// ──────────────────────────────────────────────────────────
//

/// Fields a seller may change on an existing product. The slug never changes.
#[derive(Debug, Clone, Default)]
pub struct UpdateProductCommand {
    pub(crate) name: Option<String>,
    pub(crate) desc: Option<String>,
    pub(crate) price_current: Option<Decimal>,
    pub(crate) category_slug: Option<String>,
    pub(crate) in_stock: Option<i32>,
    pub(crate) image1: Option<String>,
    pub(crate) image2: PatchField<String>,
    pub(crate) image3: PatchField<String>,
}

pub type UpdateProductCommandError = CreateProductCommandError;

impl UpdateProductCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Option<String>,
        desc: Option<String>,
        price_current: Option<Decimal>,
        category_slug: Option<String>,
        in_stock: Option<i32>,
        image1: Option<String>,
        image2: PatchField<String>,
        image3: PatchField<String>,
    ) -> Result<Self, UpdateProductCommandError> {
        let name = name.map(|n| validate_name(&n)).transpose()?;
        let price_current = price_current.map(validate_price).transpose()?;

        if matches!(in_stock, Some(n) if n < 0) {
            return Err(CreateProductCommandError::NegativeStock);
        }

        let category_slug = match category_slug {
            Some(slug) if slug.trim().is_empty() => {
                return Err(CreateProductCommandError::EmptyCategory)
            }
            other => other.map(|s| s.trim().to_lowercase()),
        };

        let image1 = match image1 {
            Some(image) if image.trim().is_empty() => {
                return Err(CreateProductCommandError::MissingImage)
            }
            other => other.map(|i| i.trim().to_string()),
        };

        Ok(Self {
            name,
            desc: desc.map(|d| d.trim().to_string()),
            price_current,
            category_slug,
            in_stock,
            image1,
            image2: normalize_image(image2),
            image3: normalize_image(image3),
        })
    }
}

fn normalize_image(image: PatchField<String>) -> PatchField<String> {
    match image {
        PatchField::Value(v) => match optional_image(Some(v)) {
            Some(v) => PatchField::Value(v),
            None => PatchField::Null,
        },
        other => other,
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProductError {
    #[error("Product does not exist!")]
    ProductNotFound,

    #[error("Access is denied")]
    Forbidden,

    #[error("Category does not exist!")]
    CategoryNotFound,

    #[error("Product was changed by another request")]
    StaleWrite,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(
        &self,
        seller: &Seller,
        slug: &str,
        command: UpdateProductCommand,
    ) -> Result<ProductView, UpdateProductError>;
}
