use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::modules::catalog::application::ports::{
    incoming::use_cases::{DeleteProductError, DeleteProductUseCase},
    outgoing::{ProductQuery, ProductRepository, ProductRepositoryError},
};
use crate::modules::seller::application::domain::entities::Seller;
use crate::shared::soft_delete::Deletable;

#[derive(Debug, Clone)]
pub struct DeleteProductService<Q, R>
where
    Q: ProductQuery + Send + Sync,
    R: ProductRepository + Send + Sync,
{
    products: Q,
    repository: R,
}

impl<Q, R> DeleteProductService<Q, R>
where
    Q: ProductQuery + Send + Sync,
    R: ProductRepository + Send + Sync,
{
    pub fn new(products: Q, repository: R) -> Self {
        Self {
            products,
            repository,
        }
    }
}

#[async_trait]
impl<Q, R> DeleteProductUseCase for DeleteProductService<Q, R>
where
    Q: ProductQuery + Send + Sync,
    R: ProductRepository + Send + Sync,
{
    async fn execute(&self, seller: &Seller, slug: &str) -> Result<(), DeleteProductError> {
        let mut product = self
            .products
            .find_by_slug(slug)
            .await
            .map_err(|e| DeleteProductError::RepositoryError(e.to_string()))?
            .ok_or(DeleteProductError::ProductNotFound)?;

        if !seller.owns(product.seller_id) {
            warn!(seller_id = %seller.id, slug = %slug, "Product delete by non-owner");
            return Err(DeleteProductError::Forbidden);
        }

        product.mark_deleted(Utc::now());

        self.repository
            .soft_delete_product(product.id, product.deletion_status())
            .await
            .map_err(|e| match e {
                ProductRepositoryError::NotFound => DeleteProductError::ProductNotFound,
                other => DeleteProductError::RepositoryError(other.to_string()),
            })?;

        info!(slug = %slug, "Product soft-deleted");

        Ok(())
    }
}
