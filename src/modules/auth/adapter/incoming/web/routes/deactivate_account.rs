use actix_web::{delete, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::deactivate_account::DeactivateAccountError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Deactivate own account
///
/// The account is soft-deleted and can no longer sign in.
#[utoipa::path(
    delete,
    path = "/api/profile",
    tag = "users",
    security(("BearerAuth" = [])),
    responses(
        (status = 204, description = "Account deactivated"),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
    )
)]
#[delete("/api/profile")]
pub async fn deactivate_account_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.deactivate.execute(user.user_id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_deactivate_error(err),
    }
}

fn map_deactivate_error(err: DeactivateAccountError) -> HttpResponse {
    match err {
        DeactivateAccountError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        DeactivateAccountError::RepositoryError(msg) => {
            error!(error = %msg, "Account deactivation failed");
            ApiResponse::internal_error()
        }
    }
}
