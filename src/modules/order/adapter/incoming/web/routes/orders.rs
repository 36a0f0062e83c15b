use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::order::application::domain::entities::OrderDetail;
use crate::modules::order::application::ports::incoming::use_cases::{
    GetOrderError, ListOrdersError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List the caller's orders, newest first
#[utoipa::path(
    get,
    path = "/api/shop/orders",
    tag = "orders",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Orders with their items", body = inline(SuccessResponse<Vec<OrderDetail>>)),
    )
)]
#[get("/api/shop/orders")]
pub async fn list_orders_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.order.list.execute(user.user_id).await {
        Ok(orders) => ApiResponse::success(orders),
        Err(ListOrdersError::QueryError(msg)) => {
            error!(error = %msg, user_id = %user.user_id, "Failed to list orders");
            ApiResponse::internal_error()
        }
    }
}

/// Fetch one of the caller's orders
#[utoipa::path(
    get,
    path = "/api/shop/orders/{tx_ref}",
    tag = "orders",
    security(("BearerAuth" = [])),
    params(("tx_ref" = String, Path, description = "Order transaction reference")),
    responses(
        (status = 200, description = "The order", body = inline(SuccessResponse<OrderDetail>)),
        (status = 404, description = "Order does not exist!", body = ErrorResponse),
    )
)]
#[get("/api/shop/orders/{tx_ref}")]
pub async fn get_order_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.order.get.execute(user.user_id, &path).await {
        Ok(order) => ApiResponse::success(order),
        Err(GetOrderError::NotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order does not exist!")
        }
        Err(GetOrderError::QueryError(msg)) => {
            error!(error = %msg, "Failed to load order");
            ApiResponse::internal_error()
        }
    }
}
