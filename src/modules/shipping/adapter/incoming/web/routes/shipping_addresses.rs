use actix_web::{get, http::StatusCode, post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::shipping::application::domain::entities::ShippingAddress;
use crate::modules::shipping::application::ports::incoming::use_cases::{
    CreateShippingAddressError, ListShippingAddressesError, ShippingAddressInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateShippingAddressRequestDto {
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    #[schema(example = 10115)]
    pub zipcode: Option<i32>,
}

/// List the caller's shipping addresses
#[utoipa::path(
    get,
    path = "/api/profile/shipping_addresses",
    tag = "shipping",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Saved addresses", body = inline(SuccessResponse<Vec<ShippingAddress>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[get("/api/profile/shipping_addresses")]
pub async fn list_shipping_addresses_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.shipping.list.execute(user.user_id).await {
        Ok(addresses) => ApiResponse::success(addresses),
        Err(ListShippingAddressesError::QueryError(msg)) => {
            error!(error = %msg, user_id = %user.user_id, "Failed to list shipping addresses");
            ApiResponse::internal_error()
        }
    }
}

/// Save a shipping address
///
/// Posting the same content twice returns the stored record with 200.
#[utoipa::path(
    post,
    path = "/api/profile/shipping_addresses",
    tag = "shipping",
    security(("BearerAuth" = [])),
    request_body = CreateShippingAddressRequestDto,
    responses(
        (status = 201, description = "Address created", body = inline(SuccessResponse<ShippingAddress>)),
        (status = 200, description = "Identical address already saved", body = inline(SuccessResponse<ShippingAddress>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
    )
)]
#[post("/api/profile/shipping_addresses")]
pub async fn create_shipping_address_handler(
    user: AuthenticatedUser,
    payload: web::Json<CreateShippingAddressRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();
    let input = match ShippingAddressInput::new(
        dto.full_name,
        dto.email,
        dto.phone,
        dto.address,
        dto.city,
        dto.country,
        dto.zipcode,
    ) {
        Ok(input) => input,
        Err(e) => return ApiResponse::validation(&e.to_string()),
    };

    match data.shipping.create.execute(user.user_id, input).await {
        Ok(creation) if creation.created => ApiResponse::created(creation.address),
        Ok(creation) => ApiResponse::with_status(StatusCode::OK, creation.address),
        Err(err) => map_create_error(err),
    }
}

fn map_create_error(err: CreateShippingAddressError) -> HttpResponse {
    match err {
        CreateShippingAddressError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to save shipping address");
            ApiResponse::internal_error()
        }
    }
}
