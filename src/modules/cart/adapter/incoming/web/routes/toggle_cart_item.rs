use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::cart::application::domain::entities::CartLine;
use crate::modules::cart::application::ports::incoming::use_cases::{
    ToggleCartItemCommand, ToggleCartItemError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ToggleCartItemRequestDto {
    #[schema(example = "desk-lamp")]
    pub slug: String,
    /// 0 removes the line
    #[schema(example = 2)]
    pub quantity: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartItemResponseDto {
    #[schema(example = "Item Added To Cart")]
    pub message: String,
    /// Null when the line was removed
    pub item: Option<CartLine>,
}

/// Add, update or remove a cart line
#[utoipa::path(
    post,
    path = "/api/shop/cart",
    tag = "cart",
    security(("BearerAuth" = [])),
    request_body = ToggleCartItemRequestDto,
    responses(
        (status = 201, description = "Item Added To Cart", body = inline(SuccessResponse<CartItemResponseDto>)),
        (status = 200, description = "Item Updated In Cart / Item Removed From Cart", body = inline(SuccessResponse<CartItemResponseDto>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "No Product with that slug", body = ErrorResponse),
    )
)]
#[post("/api/shop/cart")]
pub async fn toggle_cart_item_handler(
    user: AuthenticatedUser,
    payload: web::Json<ToggleCartItemRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();
    let command = match ToggleCartItemCommand::new(dto.slug, dto.quantity) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::validation(&e.to_string()),
    };

    match data.cart.toggle.execute(user.user_id, command).await {
        Ok(outcome) => {
            let status = if outcome.is_created() {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            let body = CartItemResponseDto {
                message: outcome.message().to_string(),
                item: outcome.into_item(),
            };
            ApiResponse::with_status(status, body)
        }
        Err(err) => map_toggle_error(err),
    }
}

fn map_toggle_error(err: ToggleCartItemError) -> HttpResponse {
    match err {
        ToggleCartItemError::ProductNotFound => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "No Product with that slug")
        }
        ToggleCartItemError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to update cart");
            ApiResponse::internal_error()
        }
    }
}
