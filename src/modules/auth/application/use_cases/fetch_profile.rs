use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AccountType, User, UserId};
use crate::auth::application::ports::outgoing::UserQuery;

/// Public view of a user, returned by every profile endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserProfile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar: Option<String>,
    #[schema(value_type = String, example = "BUYER")]
    pub account_type: AccountType,
    pub is_staff: bool,
    pub date_joined: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.value(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
            account_type: user.account_type,
            is_staff: user.is_staff,
            date_joined: user.created_at,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IFetchProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<UserProfile, FetchProfileError>;
}

#[derive(Debug, Clone)]
pub struct FetchProfileUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FetchProfileUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchProfileUseCase for FetchProfileUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<UserProfile, FetchProfileError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchProfileError::QueryError(e.to_string()))?
            .ok_or(FetchProfileError::UserNotFound)?;

        Ok(UserProfile::from(&user))
    }
}
