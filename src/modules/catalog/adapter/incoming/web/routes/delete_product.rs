use actix_web::{delete, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::catalog::application::ports::incoming::use_cases::DeleteProductError;
use crate::modules::seller::adapter::incoming::web::gate::approved_seller;
use crate::shared::api::{ApiResponse, MessageBody};
use crate::AppState;

/// Remove one of the caller's products from the shop
#[utoipa::path(
    delete,
    path = "/api/seller/products/{slug}",
    tag = "seller",
    security(("BearerAuth" = [])),
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 403, description = "Not the owner or not approved", body = ErrorResponse),
        (status = 404, description = "Product does not exist", body = ErrorResponse),
    )
)]
#[delete("/api/seller/products/{slug}")]
pub async fn delete_product_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let seller = match approved_seller(&data, user.user_id).await {
        Ok(seller) => seller,
        Err(resp) => return resp,
    };

    match data.catalog.delete_product.execute(&seller, &path).await {
        Ok(()) => ApiResponse::success(MessageBody::new("Product deleted successfully")),
        Err(err) => map_delete_product_error(err),
    }
}

fn map_delete_product_error(err: DeleteProductError) -> HttpResponse {
    match err {
        DeleteProductError::ProductNotFound => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product does not exist!")
        }
        DeleteProductError::Forbidden => ApiResponse::access_denied(),
        DeleteProductError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to delete product");
            ApiResponse::internal_error()
        }
    }
}
