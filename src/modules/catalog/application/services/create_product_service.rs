use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::catalog::application::ports::{
    incoming::use_cases::{CreateProductCommand, CreateProductError, CreateProductUseCase},
    outgoing::{
        CategoryQuery, CreateProductData, ProductQuery, ProductRepository,
        ProductRepositoryError, ProductView,
    },
};
use crate::modules::seller::application::domain::entities::Seller;
use crate::shared::slug::unique_slug;

#[derive(Debug, Clone)]
pub struct CreateProductService<C, Q, R>
where
    C: CategoryQuery + Send + Sync,
    Q: ProductQuery + Send + Sync,
    R: ProductRepository + Send + Sync,
{
    categories: C,
    products: Q,
    repository: R,
}

impl<C, Q, R> CreateProductService<C, Q, R>
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
impl<C, Q, R> CreateProductUseCase for CreateProductService<C, Q, R>
where
    C: CategoryQuery + Send + Sync,
    Q: ProductQuery + Send + Sync,
    R: ProductRepository + Send + Sync,
{
    async fn execute(
        &self,
        seller: &Seller,
        command: CreateProductCommand,
    ) -> Result<ProductView, CreateProductError> {
        let category = self
            .categories
            .find_by_slug(command.category_slug())
            .await
            .map_err(|e| CreateProductError::RepositoryError(e.to_string()))?
            .ok_or(CreateProductError::CategoryNotFound)?;

        let products = &self.products;
        let slug = unique_slug(&command.name, |candidate| async move {
            products.slug_taken(&candidate).await
        })
        .await
        .map_err(|e| CreateProductError::SlugUnavailable(e.to_string()))?;

        let product = self
            .repository
            .create_product(CreateProductData {
                seller_id: seller.id,
                category_id: category.id,
                name: command.name,
                slug,
                desc: command.desc,
                price_current: command.price_current,
                in_stock: command.in_stock,
                image1: command.image1,
                image2: command.image2,
                image3: command.image3,
            })
            .await
            .map_err(|e| match e {
                // Lost the race for the slug between the probe and the insert.
                ProductRepositoryError::SlugAlreadyExists => {
                    warn!("Product slug taken concurrently");
                    CreateProductError::SlugUnavailable(e.to_string())
                }
                other => CreateProductError::RepositoryError(other.to_string()),
            })?;

        info!(seller_id = %seller.id, slug = %product.slug, "Product created");

        self.products
            .find_view_by_id(product.id)
            .await
            .map_err(|e| CreateProductError::RepositoryError(e.to_string()))?
            .ok_or_else(|| CreateProductError::RepositoryError("created product vanished".into()))
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

    fn command(name: &str) -> CreateProductCommand {
        CreateProductCommand::new(
            name.to_string(),
            "Warm light".to_string(),
            dec!(19.99),
            "lighting".to_string(),
            None,
            "lamp.png".to_string(),
            None,
            None,
        )
        .unwrap()
    }

    fn categories() -> FakeCategoryQuery {
        FakeCategoryQuery {
            categories: vec![category("lighting")],
        }
    }

    #[tokio::test]
    async fn creates_product_under_seller_and_category() {
        // Arrange
        let s = seller(UserId::from(Uuid::new_v4()), true);
        let mut stored = product(Some(s.id), dec!(19.99));
        stored.slug = "stored-lamp".to_string();
        let repo = FakeProductRepository::returning(stored.clone());
        let service = CreateProductService::new(
            categories(),
            FakeProductQuery::with(vec![stored]),
            repo.clone(),
        );

        // Act
        let view = service.execute(&s, command("Desk Lamp")).await.unwrap();

        // Assert
        let created = repo.created.lock().unwrap().clone().unwrap();
        assert_eq!(created.seller_id, s.id);
        assert_eq!(created.slug, "desk-lamp");
        assert_eq!(created.in_stock, 5);
        assert_eq!(view.price_current, dec!(19.99));
    }

    #[tokio::test]
    async fn colliding_name_gets_numbered_slug() {
        let s = seller(UserId::from(Uuid::new_v4()), true);
        let mut stored = product(Some(s.id), dec!(19.99));
        stored.slug = "stored-lamp".to_string();
        let repo = FakeProductRepository::returning(stored.clone());
        let mut query = FakeProductQuery::with(vec![stored]);
        query.taken_slugs = vec!["desk-lamp".to_string()];
        let service = CreateProductService::new(categories(), query, repo.clone());

        service.execute(&s, command("Desk Lamp")).await.unwrap();

        let created = repo.created.lock().unwrap().clone().unwrap();
        assert_eq!(created.slug, "desk-lamp-2");
    }

    #[tokio::test]
    async fn unknown_category_is_rejected() {
        let s = seller(UserId::from(Uuid::new_v4()), true);
        let service = CreateProductService::new(
            FakeCategoryQuery::default(),
            FakeProductQuery::default(),
            FakeProductRepository::returning(product(Some(s.id), dec!(1))),
        );

        let result = service.execute(&s, command("Desk Lamp")).await;

        assert!(matches!(result, Err(CreateProductError::CategoryNotFound)));
    }
}
