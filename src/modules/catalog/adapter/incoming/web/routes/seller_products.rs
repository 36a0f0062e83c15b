use actix_web::{get, post, web, HttpResponse, Responder};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreateProductCommand, CreateProductError, ListSellerProductsError,
};
use crate::modules::catalog::application::ports::outgoing::ProductView;
use crate::modules::seller::adapter::incoming::web::gate::approved_seller;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequestDto {
    #[schema(example = "Desk Lamp")]
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[schema(value_type = String, example = "19.99")]
    pub price_current: Decimal,
    #[schema(example = "lighting")]
    pub category_slug: String,
    /// Defaults to 5
    pub in_stock: Option<i32>,
    pub image1: String,
    pub image2: Option<String>,
    pub image3: Option<String>,
}

/// List the caller's own products (approved sellers only)
#[utoipa::path(
    get,
    path = "/api/seller/products",
    tag = "seller",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "The seller's products", body = inline(SuccessResponse<Vec<ProductView>>)),
        (status = 403, description = "Caller is not an approved seller", body = ErrorResponse),
    )
)]
#[get("/api/seller/products")]
pub async fn list_seller_products_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let seller = match approved_seller(&data, user.user_id).await {
        Ok(seller) => seller,
        Err(resp) => return resp,
    };

    match data.catalog.seller_products.execute(&seller).await {
        Ok(products) => ApiResponse::success(products),
        Err(ListSellerProductsError::QueryError(msg)) => {
            error!(error = %msg, seller_id = %seller.id, "Failed to list seller products");
            ApiResponse::internal_error()
        }
    }
}

/// Publish a new product (approved sellers only)
#[utoipa::path(
    post,
    path = "/api/seller/products",
    tag = "seller",
    security(("BearerAuth" = [])),
    request_body = CreateProductRequestDto,
    responses(
        (status = 201, description = "Product created", body = inline(SuccessResponse<ProductView>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Caller is not an approved seller", body = ErrorResponse),
        (status = 404, description = "Category does not exist", body = ErrorResponse),
    )
)]
#[post("/api/seller/products")]
pub async fn create_product_handler(
    user: AuthenticatedUser,
    payload: web::Json<CreateProductRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let seller = match approved_seller(&data, user.user_id).await {
        Ok(seller) => seller,
        Err(resp) => return resp,
    };

    let dto = payload.into_inner();
    let command = match CreateProductCommand::new(
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

    match data.catalog.create_product.execute(&seller, command).await {
        Ok(product) => ApiResponse::created(product),
        Err(err) => map_create_product_error(err),
    }
}

fn map_create_product_error(err: CreateProductError) -> HttpResponse {
    match err {
        CreateProductError::CategoryNotFound => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category does not exist!")
        }
        CreateProductError::SlugUnavailable(msg) | CreateProductError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to create product");
            ApiResponse::internal_error()
        }
    }
}
