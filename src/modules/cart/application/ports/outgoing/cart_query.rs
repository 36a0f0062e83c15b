use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::cart::application::domain::entities::CartLine;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CartQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CartQuery: Send + Sync {
    /// The user's in-cart lines, oldest first.
    async fn list_lines(&self, user_id: UserId) -> Result<Vec<CartLine>, CartQueryError>;

    /// An in-cart line by id; `None` once it is removed or checked out.
    async fn find_line(&self, line_id: Uuid) -> Result<Option<CartLine>, CartQueryError>;
}
