use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::cart::application::domain::entities::CartLine;
use crate::modules::cart::application::ports::incoming::use_cases::ListCartError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List the caller's cart
#[utoipa::path(
    get,
    path = "/api/shop/cart",
    tag = "cart",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "In-cart lines, oldest first", body = inline(SuccessResponse<Vec<CartLine>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/shop/cart")]
pub async fn list_cart_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.cart.list.execute(user.user_id).await {
        Ok(lines) => ApiResponse::success(lines),
        Err(ListCartError::QueryError(msg)) => {
            error!(error = %msg, user_id = %user.user_id, "Failed to list cart");
            ApiResponse::internal_error()
        }
    }
}
