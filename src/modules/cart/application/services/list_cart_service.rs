use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::cart::application::domain::entities::CartLine;
use crate::modules::cart::application::ports::{
    incoming::use_cases::{ListCartError, ListCartUseCase},
    outgoing::CartQuery,
};

#[derive(Debug, Clone)]
pub struct ListCartService<Q>
where
    Q: CartQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListCartService<Q>
where
    Q: CartQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListCartUseCase for ListCartService<Q>
where
    Q: CartQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<Vec<CartLine>, ListCartError> {
        self.query
            .list_lines(user_id)
            .await
            .map_err(|e| ListCartError::QueryError(e.to_string()))
    }
}
