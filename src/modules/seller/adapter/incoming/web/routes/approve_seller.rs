use actix_web::{patch, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::StaffUser;
use crate::modules::seller::application::domain::entities::Seller;
use crate::modules::seller::application::ports::incoming::use_cases::ApproveSellerError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ApproveSellerRequestDto {
    #[schema(example = true)]
    pub approved: bool,
}

/// Approve or suspend a seller (staff only)
#[utoipa::path(
    patch,
    path = "/api/sellers/{seller_id}/approval",
    tag = "sellers",
    security(("BearerAuth" = [])),
    params(("seller_id" = Uuid, Path, description = "Seller id")),
    request_body = ApproveSellerRequestDto,
    responses(
        (status = 200, description = "Approval updated", body = inline(SuccessResponse<Seller>)),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
        (status = 404, description = "Seller does not exist", body = ErrorResponse),
    )
)]
#[patch("/api/sellers/{seller_id}/approval")]
pub async fn approve_seller_handler(
    staff: StaffUser,
    path: web::Path<Uuid>,
    payload: web::Json<ApproveSellerRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let seller_id = path.into_inner();

    match data
        .seller
        .approve
        .execute(seller_id, payload.approved)
        .await
    {
        Ok(seller) => {
            tracing::info!(staff_id = %staff.user_id, seller_id = %seller_id, "Seller approval set");
            ApiResponse::success(seller)
        }
        Err(err) => map_approve_seller_error(err),
    }
}

fn map_approve_seller_error(err: ApproveSellerError) -> HttpResponse {
    match err {
        ApproveSellerError::SellerNotFound => {
            ApiResponse::not_found("SELLER_NOT_FOUND", "Seller does not exist!")
        }
        ApproveSellerError::RepositoryError(msg) => {
            error!(error = %msg, "Seller approval failed");
            ApiResponse::internal_error()
        }
    }
}
