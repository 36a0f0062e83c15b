use async_trait::async_trait;

use crate::modules::catalog::application::ports::outgoing::ProductQuery;
use crate::modules::review::application::domain::entities::Review;
use crate::modules::review::application::ports::{
    incoming::use_cases::{ListReviewsError, ListReviewsUseCase},
    outgoing::ReviewQuery,
};

#[derive(Debug, Clone)]
pub struct ListReviewsService<P, Q>
where
    P: ProductQuery + Send + Sync,
    Q: ReviewQuery + Send + Sync,
{
    products: P,
    reviews: Q,
}

impl<P, Q> ListReviewsService<P, Q>
where
    P: ProductQuery + Send + Sync,
    Q: ReviewQuery + Send + Sync,
{
    pub fn new(products: P, reviews: Q) -> Self {
        Self { products, reviews }
    }
}

#[async_trait]
impl<P, Q> ListReviewsUseCase for ListReviewsService<P, Q>
where
    P: ProductQuery + Send + Sync,
    Q: ReviewQuery + Send + Sync,
{
    async fn execute(&self, product_slug: &str) -> Result<Vec<Review>, ListReviewsError> {
        let product = self
            .products
            .find_by_slug(product_slug)
            .await
            .map_err(|e| ListReviewsError::QueryError(e.to_string()))?
            .ok_or(ListReviewsError::ProductNotFound)?;

        self.reviews
            .list_for_product(product.id)
            .await
            .map_err(|e| ListReviewsError::QueryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserId;
    use crate::modules::catalog::application::domain::entities::fixtures::product;
    use crate::modules::catalog::application::services::test_doubles::FakeProductQuery;
    use crate::modules::review::application::domain::entities::fixtures::review;
    use crate::modules::review::application::services::test_doubles::FakeReviewStore;
    use crate::shared::soft_delete::Deletable;

    #[tokio::test]
    async fn lists_active_reviews_newest_first() {
        // Arrange
        let lamp = product(None, dec!(19.99));
        let mut older = review(UserId::from(Uuid::new_v4()), lamp.id, 3);
        older.created_at = Utc::now() - Duration::days(2);
        let newer = review(UserId::from(Uuid::new_v4()), lamp.id, 5);
        let mut hidden = review(UserId::from(Uuid::new_v4()), lamp.id, 1);
        hidden.mark_deleted(Utc::now());
        let other_product = review(UserId::from(Uuid::new_v4()), Uuid::new_v4(), 4);
        let store = FakeReviewStore::with(vec![older.clone(), hidden, newer.clone(), other_product]);
        let service = ListReviewsService::new(FakeProductQuery::with(vec![lamp.clone()]), store);

        // Act
        let reviews = service.execute(&lamp.slug).await.unwrap();

        // Assert
        let ids: Vec<Uuid> = reviews.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![newer.id, older.id]);
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let service = ListReviewsService::new(FakeProductQuery::default(), FakeReviewStore::default());

        let result = service.execute("nothing").await;

        assert!(matches!(result, Err(ListReviewsError::ProductNotFound)));
    }
}
