use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::catalog::application::ports::incoming::use_cases::ProductsBySellerError;
use crate::modules::catalog::application::ports::outgoing::ProductView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Products of a seller's shop
#[utoipa::path(
    get,
    path = "/api/shop/sellers/{slug}",
    tag = "shop",
    params(("slug" = String, Path, description = "Seller slug")),
    responses(
        (status = 200, description = "The seller's products", body = inline(SuccessResponse<Vec<ProductView>>)),
        (status = 404, description = "Seller does not exist", body = ErrorResponse),
    )
)]
#[get("/api/shop/sellers/{slug}")]
pub async fn products_by_seller_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.catalog.products_by_seller.execute(&path).await {
        Ok(products) => ApiResponse::success(products),
        Err(err) => map_products_by_seller_error(err),
    }
}

fn map_products_by_seller_error(err: ProductsBySellerError) -> HttpResponse {
    match err {
        ProductsBySellerError::SellerNotFound => {
            ApiResponse::not_found("SELLER_NOT_FOUND", "Seller does not exist!")
        }
        ProductsBySellerError::QueryError(msg) => {
            error!(error = %msg, "Failed to list seller products");
            ApiResponse::internal_error()
        }
    }
}
