use async_trait::async_trait;

use crate::auth::application::domain::entities::{AccountType, User, UserId};
use crate::shared::{patch::PatchField, soft_delete::DeletionStatus};

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub first_name: String,
    pub last_name: String,
    /// Already lowercased and validated
    pub email: String,
    pub password_hash: String,
}

/// The only profile fields a user may change themselves.
#[derive(Debug, Clone, Default)]
pub struct PatchProfileData {
    pub first_name: PatchField<String>,
    pub last_name: PatchField<String>,
    pub avatar: PatchField<String>,
}

impl PatchProfileData {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_unset() && self.last_name.is_unset() && self.avatar.is_unset()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;

    async fn patch_profile(
        &self,
        user_id: UserId,
        patch: PatchProfileData,
    ) -> Result<User, UserRepositoryError>;

    async fn set_account_type(
        &self,
        user_id: UserId,
        account_type: AccountType,
    ) -> Result<User, UserRepositoryError>;

    /// Persists `is_active = false` together with the given deletion status.
    async fn deactivate_user(
        &self,
        user_id: UserId,
        deletion: DeletionStatus,
    ) -> Result<(), UserRepositoryError>;
}
