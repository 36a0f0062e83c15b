use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::seller::application::domain::entities::{Seller, SellerProfile};
use crate::modules::seller::application::ports::incoming::use_cases::{
    ApplySellerCommand, ApplySellerError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ApplySellerRequestDto {
    #[schema(example = "Acme Goods")]
    pub business_name: String,
    pub inn_identification_number: String,
    pub website_url: Option<String>,
    pub phone_number: String,
    #[serde(default)]
    pub business_description: String,
    pub business_address: String,
    pub city: String,
    pub postal_code: String,
    pub bank_name: String,
    pub bank_bic_number: String,
    pub bank_account_number: String,
    pub bank_routing_number: String,
}

impl From<ApplySellerRequestDto> for SellerProfile {
    fn from(dto: ApplySellerRequestDto) -> Self {
        SellerProfile {
            business_name: dto.business_name,
            inn_identification_number: dto.inn_identification_number,
            website_url: dto.website_url,
            phone_number: dto.phone_number,
            business_description: dto.business_description,
            business_address: dto.business_address,
            city: dto.city,
            postal_code: dto.postal_code,
            bank_name: dto.bank_name,
            bank_bic_number: dto.bank_bic_number,
            bank_account_number: dto.bank_account_number,
            bank_routing_number: dto.bank_routing_number,
        }
    }
}

/// Apply to become a seller
///
/// Repeated applications update the same seller profile. The account turns
/// SELLER immediately; selling waits for staff approval.
#[utoipa::path(
    post,
    path = "/api/sellers",
    tag = "sellers",
    security(("BearerAuth" = [])),
    request_body = ApplySellerRequestDto,
    responses(
        (status = 200, description = "Seller profile saved", body = inline(SuccessResponse<Seller>)),
        (status = 400, description = "Invalid profile", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
#[post("/api/sellers")]
pub async fn apply_seller_handler(
    user: AuthenticatedUser,
    payload: web::Json<ApplySellerRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match ApplySellerCommand::new(user.user_id, payload.into_inner().into()) {
        Ok(command) => command,
        Err(e) => return ApiResponse::validation(&e.to_string()),
    };

    match data.seller.apply.execute(command).await {
        Ok(seller) => ApiResponse::success(seller),
        Err(err) => map_apply_seller_error(err),
    }
}

fn map_apply_seller_error(err: ApplySellerError) -> HttpResponse {
    match err {
        ApplySellerError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        ApplySellerError::SlugUnavailable(msg) => {
            error!(error = %msg, "Seller slug exhausted");
            ApiResponse::conflict("SLUG_CONFLICT", "Could not allocate a seller slug")
        }
        ApplySellerError::RepositoryError(msg) => {
            error!(error = %msg, "Seller application failed");
            ApiResponse::internal_error()
        }
    }
}
