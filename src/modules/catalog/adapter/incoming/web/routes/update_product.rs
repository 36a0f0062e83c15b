use actix_web::{patch, web, HttpResponse, Responder};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    UpdateProductCommand, UpdateProductError,
};
use crate::modules::catalog::application::ports::outgoing::ProductView;
use crate::modules::seller::adapter::incoming::web::gate::approved_seller;
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

/// Omitted fields keep their value. `image2`/`image3` accept `null` to clear.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequestDto {
    pub name: Option<String>,
    pub desc: Option<String>,
    #[schema(value_type = Option<String>, example = "17.49")]
    pub price_current: Option<Decimal>,
    pub category_slug: Option<String>,
    pub in_stock: Option<i32>,
    pub image1: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub image2: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub image3: PatchField<String>,
}

/// Edit one of the caller's products
///
/// A new `price_current` moves the previous one into `price_old`.
#[utoipa::path(
    patch,
    path = "/api/seller/products/{slug}",
    tag = "seller",
    security(("BearerAuth" = [])),
    params(("slug" = String, Path, description = "Product slug")),
    request_body = UpdateProductRequestDto,
    responses(
        (status = 200, description = "Product updated", body = inline(SuccessResponse<ProductView>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Not the owner or not approved", body = ErrorResponse),
        (status = 404, description = "Product or category does not exist", body = ErrorResponse),
        (status = 409, description = "Price changed concurrently", body = ErrorResponse),
    )
)]
#[patch("/api/seller/products/{slug}")]
pub async fn update_product_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<UpdateProductRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let seller = match approved_seller(&data, user.user_id).await {
        Ok(seller) => seller,
        Err(resp) => return resp,
    };

    let dto = payload.into_inner();
    let command = match UpdateProductCommand::new(
        dto.name,
        dto.desc,
        dto.price_current,
        dto.category_slug,
        dto.in_stock,
        dto.image1,
        dto.image2,
        dto.image3,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::validation(&e.to_string()),
    };

    match data
        .catalog
        .update_product
        .execute(&seller, &path, command)
        .await
    {
        Ok(product) => ApiResponse::success(product),
        Err(err) => map_update_product_error(err),
    }
}

fn map_update_product_error(err: UpdateProductError) -> HttpResponse {
    match err {
        UpdateProductError::ProductNotFound => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product does not exist!")
        }
        UpdateProductError::CategoryNotFound => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category does not exist!")
        }
        UpdateProductError::Forbidden => ApiResponse::access_denied(),
        UpdateProductError::StaleWrite => ApiResponse::conflict(
            "STALE_WRITE",
            "Product was changed by another request, reload and retry",
        ),
        UpdateProductError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to update product");
            ApiResponse::internal_error()
        }
    }
}
