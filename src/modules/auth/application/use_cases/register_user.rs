use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};
use crate::auth::application::use_cases::fetch_profile::UserProfile;

const MIN_PASSWORD_LEN: usize = 8;
const MAX_NAME_LEN: usize = 100;

// ========================= Register Request =========================

/// Validated registration input.
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterUserRequestError {
    #[error("First name cannot be empty")]
    EmptyFirstName,

    #[error("Name must not exceed 100 characters")]
    NameTooLong,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
}

impl RegisterUserRequest {
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        password: String,
    ) -> Result<Self, RegisterUserRequestError> {
        let first_name = first_name.trim().to_string();
        let last_name = last_name.trim().to_string();

        if first_name.is_empty() {
            return Err(RegisterUserRequestError::EmptyFirstName);
        }
        if first_name.chars().count() > MAX_NAME_LEN || last_name.chars().count() > MAX_NAME_LEN {
            return Err(RegisterUserRequestError::NameTooLong);
        }

        let email = email.trim();
        if !EmailAddress::is_valid(email) {
            return Err(RegisterUserRequestError::InvalidEmailFormat);
        }

        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(RegisterUserRequestError::PasswordTooShort);
        }

        Ok(Self {
            first_name,
            last_name,
            email: email.to_lowercase(),
            password,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

// ========================= Register Error =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ========================= Use Case =========================

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegisterUserRequest)
        -> Result<UserProfile, RegisterUserError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        request: RegisterUserRequest,
    ) -> Result<UserProfile, RegisterUserError> {
        // 1️⃣ Emails stay reserved after an account is deactivated
        let taken = self
            .query
            .email_exists(request.email())
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;

        if taken {
            warn!(email = %request.email, "Registration rejected: email taken");
            return Err(RegisterUserError::EmailAlreadyExists);
        }

        // 2️⃣ Hash password off the async runtime
        let password_hash = self
            .password_hasher
            .hash_password(&request.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        // 3️⃣ Persist (unique index still guards a concurrent signup)
        let user = self
            .repository
            .create_user(CreateUserData {
                first_name: request.first_name,
                last_name: request.last_name,
                email: request.email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => RegisterUserError::EmailAlreadyExists,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user.id, "User registered");

        Ok(UserProfile::from(&user))
    }
}
