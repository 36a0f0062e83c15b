use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::fetch_profile::{FetchProfileError, UserProfile};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Current user's profile
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "users",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Profile", body = inline(SuccessResponse<UserProfile>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
    )
)]
#[get("/api/profile")]
pub async fn get_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.fetch_profile.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(err) => map_fetch_profile_error(err),
    }
}

pub(crate) fn map_fetch_profile_error(err: FetchProfileError) -> HttpResponse {
    match err {
        FetchProfileError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        FetchProfileError::QueryError(msg) => {
            error!(error = %msg, "Failed to load profile");
            ApiResponse::internal_error()
        }
    }
}
