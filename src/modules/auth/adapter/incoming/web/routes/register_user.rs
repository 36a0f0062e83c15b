use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::{
    fetch_profile::UserProfile,
    register_user::{RegisterUserError, RegisterUserRequest},
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUserRequestDto {
    #[schema(example = "Ada")]
    pub first_name: String,
    #[serde(default)]
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "correct-horse-battery")]
    pub password: String,
}

/// Register a buyer account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequestDto,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<UserProfile>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    payload: web::Json<RegisterUserRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();

    let request =
        match RegisterUserRequest::new(dto.first_name, dto.last_name, dto.email, dto.password) {
            Ok(request) => request,
            Err(e) => return ApiResponse::validation(&e.to_string()),
        };

    match data.auth.register.execute(request).await {
        Ok(profile) => ApiResponse::created(profile),
        Err(err) => map_register_error(err),
    }
}

fn map_register_error(err: RegisterUserError) -> HttpResponse {
    match err {
        RegisterUserError::EmailAlreadyExists => {
            ApiResponse::conflict("EMAIL_EXISTS", "A user with that email already exists")
        }
        RegisterUserError::HashingFailed(msg) | RegisterUserError::RepositoryError(msg) => {
            error!(error = %msg, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}
