use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{
    PatchProfileData, UserRepository, UserRepositoryError,
};
use crate::auth::application::use_cases::fetch_profile::UserProfile;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("First name cannot be empty")]
    EmptyFirstName,

    #[error("Last name cannot be null")]
    NullLastName,

    #[error("No fields to update")]
    NothingToUpdate,

    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        patch: PatchProfileData,
    ) -> Result<UserProfile, UpdateProfileError>;
}

#[derive(Debug, Clone)]
pub struct UpdateProfileUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateProfileUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    fn validate(patch: PatchProfileData) -> Result<PatchProfileData, UpdateProfileError> {
        if patch.is_empty() {
            return Err(UpdateProfileError::NothingToUpdate);
        }

        let first_name = match patch.first_name {
            PatchField::Null => return Err(UpdateProfileError::EmptyFirstName),
            PatchField::Value(name) if name.trim().is_empty() => {
                return Err(UpdateProfileError::EmptyFirstName)
            }
            other => other.map(|name| name.trim().to_string()),
        };

        if patch.last_name.is_null() {
            return Err(UpdateProfileError::NullLastName);
        }

        Ok(PatchProfileData {
            first_name,
            last_name: patch.last_name.map(|name| name.trim().to_string()),
            avatar: patch.avatar,
        })
    }
}

#[async_trait]
impl<R> IUpdateProfileUseCase for UpdateProfileUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        patch: PatchProfileData,
    ) -> Result<UserProfile, UpdateProfileError> {
        let patch = Self::validate(patch)?;

        let user = self
            .repository
            .patch_profile(user_id, patch)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateProfileError::UserNotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })?;

        Ok(UserProfile::from(&user))
    }
}
