use async_trait::async_trait;
use tracing::debug;

use crate::auth::application::domain::entities::UserId;
use uuid::Uuid;

use crate::modules::cart::application::domain::entities::{CartLine, CartOutcome};
use crate::modules::cart::application::ports::{
    incoming::use_cases::{ToggleCartItemCommand, ToggleCartItemError, ToggleCartItemUseCase},
    outgoing::{CartMutation, CartQuery, CartRepository},
};
use crate::modules::catalog::application::ports::outgoing::ProductQuery;

#[derive(Debug, Clone)]
pub struct ToggleCartItemService<P, R, Q>
where
    P: ProductQuery + Send + Sync,
    R: CartRepository + Send + Sync,
    Q: CartQuery + Send + Sync,
{
    products: P,
    repository: R,
    cart: Q,
}

impl<P, R, Q> ToggleCartItemService<P, R, Q>
where
    P: ProductQuery + Send + Sync,
    R: CartRepository + Send + Sync,
    Q: CartQuery + Send + Sync,
{
    pub fn new(products: P, repository: R, cart: Q) -> Self {
        Self {
            products,
            repository,
            cart,
        }
    }

    async fn reload(&self, line_id: Uuid) -> Result<CartLine, ToggleCartItemError> {
        self.cart
            .find_line(line_id)
            .await
            .map_err(|e| ToggleCartItemError::RepositoryError(e.to_string()))?
            .ok_or_else(|| ToggleCartItemError::RepositoryError("cart line vanished".into()))
    }
}

#[async_trait]
impl<P, R, Q> ToggleCartItemUseCase for ToggleCartItemService<P, R, Q>
where
    P: ProductQuery + Send + Sync,
    R: CartRepository + Send + Sync,
    Q: CartQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        command: ToggleCartItemCommand,
    ) -> Result<CartOutcome, ToggleCartItemError> {
        let product = self
            .products
            .find_by_slug(command.slug())
            .await
            .map_err(|e| ToggleCartItemError::RepositoryError(e.to_string()))?
            .ok_or(ToggleCartItemError::ProductNotFound)?;

        let mutation = self
            .repository
            .upsert_or_remove(user_id, product.id, command.quantity())
            .await
            .map_err(|e| ToggleCartItemError::RepositoryError(e.to_string()))?;

        debug!(user_id = %user_id, product = %product.slug, ?mutation, "Cart toggled");

        Ok(match mutation {
            CartMutation::Created(line_id) => CartOutcome::Added(self.reload(line_id).await?),
            CartMutation::Updated(line_id) => CartOutcome::Updated(self.reload(line_id).await?),
            CartMutation::Removed => CartOutcome::Removed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{mock, predicate::eq};
    use rust_decimal_macros::dec;

    use crate::modules::cart::application::domain::entities::fixtures::line;
    use crate::modules::cart::application::ports::outgoing::{CartQueryError, CartRepositoryError};
    use crate::modules::catalog::application::domain::entities::fixtures::product;
    use crate::modules::catalog::application::services::test_doubles::FakeProductQuery;

    mock! {
        pub CartRepositoryMock {}
        #[async_trait]
        impl CartRepository for CartRepositoryMock {
            async fn upsert_or_remove(
                &self,
                user_id: UserId,
                product_id: Uuid,
                quantity: i32,
            ) -> Result<CartMutation, CartRepositoryError>;
        }
    }

    #[derive(Clone, Default)]
    struct FakeCart {
        line: Option<CartLine>,
    }

    #[async_trait]
    impl CartQuery for FakeCart {
        async fn list_lines(&self, _user_id: UserId) -> Result<Vec<CartLine>, CartQueryError> {
            Ok(self.line.clone().into_iter().collect())
        }

        async fn find_line(&self, _line_id: Uuid) -> Result<Option<CartLine>, CartQueryError> {
            Ok(self.line.clone())
        }
    }

    fn command(quantity: i32) -> ToggleCartItemCommand {
        ToggleCartItemCommand::new("desk-lamp".to_string(), quantity).unwrap()
    }

    #[tokio::test]
    async fn new_line_is_reported_as_added() {
        // Arrange
        let lamp = product(None, dec!(19.99));
        let user_id = UserId::from(Uuid::new_v4());
        let mut repo = MockCartRepositoryMock::new();
        repo.expect_upsert_or_remove()
            .with(eq(user_id), eq(lamp.id), eq(2))
            .times(1)
            .returning(|_, _, _| Ok(CartMutation::Created(Uuid::new_v4())));
        let service = ToggleCartItemService::new(
            FakeProductQuery::with(vec![lamp]),
            repo,
            FakeCart {
                line: Some(line("Desk Lamp", dec!(19.99), 2)),
            },
        );

        // Act
        let outcome = service.execute(user_id, command(2)).await.unwrap();

        // Assert
        assert!(outcome.is_created());
        assert_eq!(outcome.into_item().map(|l| l.total), Some(dec!(39.98)));
    }

    #[tokio::test]
    async fn existing_line_is_reported_as_updated() {
        let lamp = product(None, dec!(5));
        let mut repo = MockCartRepositoryMock::new();
        repo.expect_upsert_or_remove()
            .returning(|_, _, _| Ok(CartMutation::Updated(Uuid::new_v4())));
        let service = ToggleCartItemService::new(
            FakeProductQuery::with(vec![lamp]),
            repo,
            FakeCart {
                line: Some(line("Desk Lamp", dec!(5), 4)),
            },
        );

        let outcome = service
            .execute(UserId::from(Uuid::new_v4()), command(4))
            .await
            .unwrap();

        assert_eq!(outcome.message(), "Item Updated In Cart");
    }

    #[tokio::test]
    async fn zero_quantity_removes_line() {
        let lamp = product(None, dec!(5));
        let mut repo = MockCartRepositoryMock::new();
        repo.expect_upsert_or_remove()
            .with(eq(UserId::from(Uuid::nil())), eq(lamp.id), eq(0))
            .returning(|_, _, _| Ok(CartMutation::Removed));
        let service =
            ToggleCartItemService::new(FakeProductQuery::with(vec![lamp]), repo, FakeCart::default());

        let outcome = service
            .execute(UserId::from(Uuid::nil()), command(0))
            .await
            .unwrap();

        assert_eq!(outcome, CartOutcome::Removed);
    }

    #[tokio::test]
    async fn unknown_product_touches_nothing() {
        let mut repo = MockCartRepositoryMock::new();
        repo.expect_upsert_or_remove().never();
        let service =
            ToggleCartItemService::new(FakeProductQuery::default(), repo, FakeCart::default());

        let result = service
            .execute(UserId::from(Uuid::new_v4()), command(1))
            .await;

        assert!(matches!(result, Err(ToggleCartItemError::ProductNotFound)));
    }
}
