use actix_web::HttpResponse;
use tracing::error;

use crate::auth::application::domain::entities::UserId;
use crate::modules::seller::application::domain::entities::Seller;
use crate::modules::seller::application::ports::incoming::use_cases::ResolveSellerError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Resolves the caller's approved seller record, or the response to send
/// back instead.
pub async fn approved_seller(data: &AppState, user_id: UserId) -> Result<Seller, HttpResponse> {
    data.seller
        .resolve
        .execute(user_id)
        .await
        .map_err(map_resolve_seller_error)
}

pub fn map_resolve_seller_error(err: ResolveSellerError) -> HttpResponse {
    match err {
        ResolveSellerError::NotASeller | ResolveSellerError::NotApproved => {
            ApiResponse::access_denied()
        }
        ResolveSellerError::QueryError(msg) => {
            error!(error = %msg, "Seller lookup failed");
            ApiResponse::internal_error()
        }
    }
}
