use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::order::application::domain::entities::{OrderLine, OrderView};
use crate::modules::order::application::ports::incoming::use_cases::{
    SellerOrderItemsError, SellerOrdersError,
};
use crate::modules::seller::adapter::incoming::web::gate::approved_seller;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Orders containing the caller's products (approved sellers only)
#[utoipa::path(
    get,
    path = "/api/seller/orders",
    tag = "seller",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Orders, newest first", body = inline(SuccessResponse<Vec<OrderView>>)),
        (status = 403, description = "Caller is not an approved seller", body = ErrorResponse),
    )
)]
#[get("/api/seller/orders")]
pub async fn seller_orders_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let seller = match approved_seller(&data, user.user_id).await {
        Ok(seller) => seller,
        Err(resp) => return resp,
    };

    match data.order.seller_orders.execute(&seller).await {
        Ok(orders) => ApiResponse::success(orders),
        Err(SellerOrdersError::QueryError(msg)) => {
            error!(error = %msg, seller_id = %seller.id, "Failed to list seller orders");
            ApiResponse::internal_error()
        }
    }
}

/// The caller's lines of one order (approved sellers only)
#[utoipa::path(
    get,
    path = "/api/seller/orders/{tx_ref}/items",
    tag = "seller",
    security(("BearerAuth" = [])),
    params(("tx_ref" = String, Path, description = "Order transaction reference")),
    responses(
        (status = 200, description = "Order lines of the seller's products", body = inline(SuccessResponse<Vec<OrderLine>>)),
        (status = 403, description = "Caller is not an approved seller", body = ErrorResponse),
        (status = 404, description = "Order does not exist!", body = ErrorResponse),
    )
)]
#[get("/api/seller/orders/{tx_ref}/items")]
pub async fn seller_order_items_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let seller = match approved_seller(&data, user.user_id).await {
        Ok(seller) => seller,
        Err(resp) => return resp,
    };

    match data.order.seller_items.execute(&seller, &path).await {
        Ok(items) => ApiResponse::success(items),
        Err(SellerOrderItemsError::NotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order does not exist!")
        }
        Err(SellerOrderItemsError::QueryError(msg)) => {
            error!(error = %msg, seller_id = %seller.id, "Failed to load seller order items");
            ApiResponse::internal_error()
        }
    }
}
