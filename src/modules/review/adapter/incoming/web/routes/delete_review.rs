use actix_web::{delete, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::review::application::ports::incoming::use_cases::DeleteReviewError;
use crate::shared::api::{ApiResponse, MessageBody};
use crate::AppState;

/// Delete one of the caller's reviews
#[utoipa::path(
    delete,
    path = "/api/shop/reviews/{id}",
    tag = "shop",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review deleted", body = MessageResponse),
        (status = 403, description = "Caller is not the author", body = ErrorResponse),
        (status = 404, description = "Review does not exist!", body = ErrorResponse),
    )
)]
#[delete("/api/shop/reviews/{id}")]
pub async fn delete_review_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .review
        .delete
        .execute(user.user_id, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::success(MessageBody::new("Review deleted successfully")),
        Err(err) => map_delete_review_error(err),
    }
}

fn map_delete_review_error(err: DeleteReviewError) -> HttpResponse {
    match err {
        DeleteReviewError::NotFound => {
            ApiResponse::not_found("REVIEW_NOT_FOUND", "Review does not exist!")
        }
        DeleteReviewError::Forbidden => ApiResponse::access_denied(),
        DeleteReviewError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to delete review");
            ApiResponse::internal_error()
        }
    }
}
