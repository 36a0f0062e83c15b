use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::cart::application::domain::entities::CartLine;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCartError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListCartUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Vec<CartLine>, ListCartError>;
}
