use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::order::application::domain::entities::OrderDetail;
use crate::modules::order::application::ports::incoming::use_cases::{
    CheckoutCommand, CheckoutError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckoutRequestDto {
    pub shipping_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutResponseDto {
    #[schema(example = "Checkout Successful")]
    pub message: String,
    pub order: OrderDetail,
}

/// Place an order from the caller's cart
///
/// Every in-cart line moves onto the new order; the cart is empty afterwards.
#[utoipa::path(
    post,
    path = "/api/shop/checkout",
    tag = "orders",
    security(("BearerAuth" = [])),
    request_body = CheckoutRequestDto,
    responses(
        (status = 200, description = "Checkout Successful", body = inline(SuccessResponse<CheckoutResponseDto>)),
        (status = 404, description = "No Items in Cart / Shipping address does not exist!", body = ErrorResponse),
        (status = 409, description = "Cart changed during checkout", body = ErrorResponse),
    )
)]
#[post("/api/shop/checkout")]
pub async fn checkout_handler(
    user: AuthenticatedUser,
    payload: web::Json<CheckoutRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = CheckoutCommand::new(payload.shipping_id);

    match data.order.checkout.execute(user.user_id, command).await {
        Ok(order) => ApiResponse::success(CheckoutResponseDto {
            message: "Checkout Successful".to_string(),
            order,
        }),
        Err(err) => map_checkout_error(err),
    }
}

fn map_checkout_error(err: CheckoutError) -> HttpResponse {
    match err {
        CheckoutError::EmptyCart => ApiResponse::not_found("EMPTY_CART", "No Items in Cart"),
        CheckoutError::ShippingNotFound => ApiResponse::not_found(
            "SHIPPING_ADDRESS_NOT_FOUND",
            "Shipping address does not exist!",
        ),
        CheckoutError::CartChanged => {
            ApiResponse::conflict("CART_CHANGED", "Cart changed during checkout")
        }
        CheckoutError::ReferenceExhausted(msg) => {
            error!(error = %msg, "Checkout aborted: transaction reference space exhausted");
            ApiResponse::internal_error()
        }
        CheckoutError::RepositoryError(msg) => {
            error!(error = %msg, "Checkout failed");
            ApiResponse::internal_error()
        }
    }
}
