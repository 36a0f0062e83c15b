use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::catalog::application::ports::{
    incoming::use_cases::{UpdateProductCommand, UpdateProductError, UpdateProductUseCase},
    outgoing::{
        CategoryQuery, ProductQuery, ProductRepository, ProductRepositoryError, ProductView,
        UpdateProductData,
    },
};
use crate::modules::seller::application::domain::entities::Seller;

#[derive(Debug, Clone)]
pub struct UpdateProductService<C, Q, R>
where
    C: CategoryQuery + Send + Sync,
    Q: ProductQuery + Send + Sync,
    R: ProductRepository + Send + Sync,
{
    categories: C,
    products: Q,
    repository: R,
}

impl<C, Q, R> UpdateProductService<C, Q, R>
where
    C: CategoryQuery + Send + Sync,
    Q: ProductQuery + Send + Sync,
    R: ProductRepository + Send + Sync,
{
    pub fn new(categories: C, products: Q, repository: R) -> Self {
        Self {
            categories,
            products,
            repository,
        }
    }
}

#[async_trait]
impl<C, Q, R> UpdateProductUseCase for UpdateProductService<C, Q, R>
where
    C: CategoryQuery + Send + Sync,
    Q: ProductQuery + Send + Sync,
    R: ProductRepository + Send + Sync,
{
    async fn execute(
        &self,
        seller: &Seller,
        slug: &str,
        command: UpdateProductCommand,
    ) -> Result<ProductView, UpdateProductError> {
        let product = self
            .products
            .find_by_slug(slug)
            .await
            .map_err(|e| UpdateProductError::RepositoryError(e.to_string()))?
            .ok_or(UpdateProductError::ProductNotFound)?;

        if !seller.owns(product.seller_id) {
            warn!(seller_id = %seller.id, slug = %slug, "Product update by non-owner");
            return Err(UpdateProductError::Forbidden);
        }

        let category_id = match command.category_slug.as_deref() {
            Some(category_slug) => Some(
                self.categories
                    .find_by_slug(category_slug)
                    .await
                    .map_err(|e| UpdateProductError::RepositoryError(e.to_string()))?
                    .ok_or(UpdateProductError::CategoryNotFound)?
                    .id,
            ),
            None => None,
        };

        let data = UpdateProductData {
            expected_price: product.price_current,
            pricing: command.price_current.map(|price| product.reprice(price)),
            name: command.name,
            desc: command.desc,
            category_id,
            in_stock: command.in_stock,
            image1: command.image1,
            image2: command.image2,
            image3: command.image3,
        };

        let updated = self
            .repository
            .update_product(product.id, data)
            .await
            .map_err(|e| match e {
                ProductRepositoryError::NotFound => UpdateProductError::ProductNotFound,
                ProductRepositoryError::StaleWrite => UpdateProductError::StaleWrite,
                other => UpdateProductError::RepositoryError(other.to_string()),
            })?;

        info!(slug = %updated.slug, "Product updated");

        self.products
            .find_view_by_id(updated.id)
            .await
            .map_err(|e| UpdateProductError::RepositoryError(e.to_string()))?
            .ok_or(UpdateProductError::ProductNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserId;
    use crate::modules::catalog::application::domain::entities::fixtures::{category, product};
    use crate::modules::catalog::application::services::test_doubles::{
        FakeCategoryQuery, FakeProductQuery, FakeProductRepository,
    };
    use crate::modules::seller::application::domain::entities::fixtures::seller;
    use crate::shared::patch::PatchField;

    fn price_change(price: rust_decimal::Decimal) -> UpdateProductCommand {
        UpdateProductCommand {
            price_current: Some(price),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn price_change_records_previous_price() {
        // Arrange
        let s = seller(UserId::from(Uuid::new_v4()), true);
        let existing = product(Some(s.id), dec!(10.00));
        let repo = FakeProductRepository::returning(existing.clone());
        let service = UpdateProductService::new(
            FakeCategoryQuery::default(),
            FakeProductQuery::with(vec![existing.clone()]),
            repo.clone(),
        );

        // Act
        service
            .execute(&s, &existing.slug, price_change(dec!(8.00)))
            .await
            .unwrap();

        // Assert
        let data = repo.updated.lock().unwrap().clone().unwrap();
        assert_eq!(data.expected_price, dec!(10.00));
        let pricing = data.pricing.unwrap();
        assert_eq!(pricing.price_current, dec!(8.00));
        assert_eq!(pricing.price_old, Some(dec!(10.00)));
    }

    #[tokio::test]
    async fn other_sellers_product_is_forbidden() {
        let owner = seller(UserId::from(Uuid::new_v4()), true);
        let intruder = seller(UserId::from(Uuid::new_v4()), true);
        let existing = product(Some(owner.id), dec!(10.00));
        let repo = FakeProductRepository::returning(existing.clone());
        let service = UpdateProductService::new(
            FakeCategoryQuery::default(),
            FakeProductQuery::with(vec![existing.clone()]),
            repo.clone(),
        );

        let result = service
            .execute(&intruder, &existing.slug, price_change(dec!(1)))
            .await;

        assert!(matches!(result, Err(UpdateProductError::Forbidden)));
        assert!(repo.updated.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn category_change_resolves_slug() {
        let s = seller(UserId::from(Uuid::new_v4()), true);
        let existing = product(Some(s.id), dec!(10.00));
        let desks = category("desks");
        let repo = FakeProductRepository::returning(existing.clone());
        let service = UpdateProductService::new(
            FakeCategoryQuery {
                categories: vec![desks.clone()],
            },
            FakeProductQuery::with(vec![existing.clone()]),
            repo.clone(),
        );

        service
            .execute(
                &s,
                &existing.slug,
                UpdateProductCommand {
                    category_slug: Some("desks".to_string()),
                    image2: PatchField::Null,
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let data = repo.updated.lock().unwrap().clone().unwrap();
        assert_eq!(data.category_id, Some(desks.id));
        assert!(data.pricing.is_none());
        assert!(data.image2.is_null());
    }

    #[tokio::test]
    async fn unknown_category_is_rejected() {
        let s = seller(UserId::from(Uuid::new_v4()), true);
        let existing = product(Some(s.id), dec!(10.00));
        let service = UpdateProductService::new(
            FakeCategoryQuery::default(),
            FakeProductQuery::with(vec![existing.clone()]),
            FakeProductRepository::returning(existing.clone()),
        );

        let result = service
            .execute(
                &s,
                &existing.slug,
                UpdateProductCommand {
                    category_slug: Some("nope".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(UpdateProductError::CategoryNotFound)));
    }

    #[tokio::test]
    async fn concurrent_price_edit_is_stale() {
        let s = seller(UserId::from(Uuid::new_v4()), true);
        let existing = product(Some(s.id), dec!(10.00));
        let service = UpdateProductService::new(
            FakeCategoryQuery::default(),
            FakeProductQuery::with(vec![existing.clone()]),
            FakeProductRepository::failing(existing.clone(), ProductRepositoryError::StaleWrite),
        );

        let result = service
            .execute(&s, &existing.slug, price_change(dec!(9)))
            .await;

        assert!(matches!(result, Err(UpdateProductError::StaleWrite)));
    }

    #[tokio::test]
    async fn missing_product_is_not_found() {
        let s = seller(UserId::from(Uuid::new_v4()), true);
        let service = UpdateProductService::new(
            FakeCategoryQuery::default(),
            FakeProductQuery::default(),
            FakeProductRepository::returning(product(Some(s.id), dec!(1))),
        );

        let result = service.execute(&s, "ghost", price_change(dec!(9))).await;

        assert!(matches!(result, Err(UpdateProductError::ProductNotFound)));
    }
}
