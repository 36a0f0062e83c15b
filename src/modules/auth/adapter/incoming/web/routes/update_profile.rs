use actix_web::{patch, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::ports::outgoing::PatchProfileData;
use crate::auth::application::use_cases::{
    fetch_profile::UserProfile, update_profile::UpdateProfileError,
};
use crate::shared::{api::ApiResponse, patch::PatchField};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequestDto {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub first_name: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub last_name: PatchField<String>,
    /// Image reference; `null` clears it
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub avatar: PatchField<String>,
}

/// Update own profile
#[utoipa::path(
    patch,
    path = "/api/profile",
    tag = "users",
    security(("BearerAuth" = [])),
    request_body = UpdateProfileRequestDto,
    responses(
        (status = 200, description = "Updated profile", body = inline(SuccessResponse<UserProfile>)),
        (status = 400, description = "Invalid patch", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
    )
)]
#[patch("/api/profile")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<UpdateProfileRequestDto>,
) -> impl Responder {
    let dto = payload.into_inner();
    let patch = PatchProfileData {
        first_name: dto.first_name,
        last_name: dto.last_name,
        avatar: dto.avatar,
    };

    match data.auth.update_profile.execute(user.user_id, patch).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(err) => map_update_profile_error(err),
    }
}

fn map_update_profile_error(err: UpdateProfileError) -> HttpResponse {
    match err {
        UpdateProfileError::EmptyFirstName
        | UpdateProfileError::NullLastName
        | UpdateProfileError::NothingToUpdate => {
            ApiResponse::validation(&err.to_string())
        }
        UpdateProfileError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        UpdateProfileError::RepositoryError(msg) => {
            error!(error = %msg, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}
