use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{UserQuery, UserRepository, UserRepositoryError};
use crate::shared::soft_delete::Deletable;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeactivateAccountError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeactivateAccountUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<(), DeactivateAccountError>;
}

#[derive(Debug, Clone)]
pub struct DeactivateAccountUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeactivateAccountUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IDeactivateAccountUseCase for DeactivateAccountUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<(), DeactivateAccountError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| DeactivateAccountError::RepositoryError(e.to_string()))?
            .ok_or(DeactivateAccountError::UserNotFound)?;

        let user = user.deactivate(Utc::now());

        self.repository
            .deactivate_user(user.id, user.deletion_status())
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => DeactivateAccountError::UserNotFound,
                other => DeactivateAccountError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user.id, "Account deactivated");
        Ok(())
    }
}
