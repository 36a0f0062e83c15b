use actix_web::{delete, get, patch, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::shipping::application::domain::entities::{AddressPatch, ShippingAddress};
use crate::modules::shipping::application::ports::incoming::use_cases::{
    DeleteShippingAddressError, GetShippingAddressError, UpdateShippingAddressCommand,
    UpdateShippingAddressError,
};
use crate::shared::api::{ApiResponse, MessageBody};
use crate::shared::patch::PatchField;
use crate::AppState;

const NOT_FOUND_MESSAGE: &str = "Shipping address does not exist!";

/// Omitted fields keep their value; optional fields accept `null` to clear.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateShippingAddressRequestDto {
    pub full_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub phone: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub address: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub city: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub country: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub zipcode: PatchField<i32>,
}

fn not_found() -> HttpResponse {
    ApiResponse::not_found("SHIPPING_ADDRESS_NOT_FOUND", NOT_FOUND_MESSAGE)
}

/// Fetch one of the caller's shipping addresses
#[utoipa::path(
    get,
    path = "/api/profile/shipping_addresses/{id}",
    tag = "shipping",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Shipping address id")),
    responses(
        (status = 200, description = "The address", body = inline(SuccessResponse<ShippingAddress>)),
        (status = 404, description = "Shipping address does not exist!", body = ErrorResponse),
    )
)]
#[get("/api/profile/shipping_addresses/{id}")]
pub async fn get_shipping_address_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.shipping.get.execute(user.user_id, path.into_inner()).await {
        Ok(address) => ApiResponse::success(address),
        Err(GetShippingAddressError::NotFound) => not_found(),
        Err(GetShippingAddressError::QueryError(msg)) => {
            error!(error = %msg, "Failed to load shipping address");
            ApiResponse::internal_error()
        }
    }
}

/// Edit one of the caller's shipping addresses
#[utoipa::path(
    patch,
    path = "/api/profile/shipping_addresses/{id}",
    tag = "shipping",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Shipping address id")),
    request_body = UpdateShippingAddressRequestDto,
    responses(
        (status = 200, description = "Address updated", body = inline(SuccessResponse<ShippingAddress>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Shipping address does not exist!", body = ErrorResponse),
    )
)]
#[patch("/api/profile/shipping_addresses/{id}")]
pub async fn update_shipping_address_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateShippingAddressRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();
    let command = match UpdateShippingAddressCommand::new(AddressPatch {
        full_name: dto.full_name,
        email: dto.email,
        phone: dto.phone,
        address: dto.address,
        city: dto.city,
        country: dto.country,
        zipcode: dto.zipcode,
    }) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::validation(&e.to_string()),
    };

    match data
        .shipping
        .update
        .execute(user.user_id, path.into_inner(), command)
        .await
    {
        Ok(address) => ApiResponse::success(address),
        Err(err) => map_update_error(err),
    }
}

fn map_update_error(err: UpdateShippingAddressError) -> HttpResponse {
    match err {
        UpdateShippingAddressError::NotFound => not_found(),
        UpdateShippingAddressError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to update shipping address");
            ApiResponse::internal_error()
        }
    }
}

/// Delete one of the caller's shipping addresses
#[utoipa::path(
    delete,
    path = "/api/profile/shipping_addresses/{id}",
    tag = "shipping",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Shipping address id")),
    responses(
        (status = 200, description = "Shipping address deleted successfully", body = MessageResponse),
        (status = 404, description = "Shipping address does not exist!", body = ErrorResponse),
    )
)]
#[delete("/api/profile/shipping_addresses/{id}")]
pub async fn delete_shipping_address_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .shipping
        .delete
        .execute(user.user_id, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::success(MessageBody::new("Shipping address deleted successfully")),
        Err(DeleteShippingAddressError::NotFound) => not_found(),
        Err(DeleteShippingAddressError::RepositoryError(msg)) => {
            error!(error = %msg, "Failed to delete shipping address");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::auth::application::domain::entities::UserId;
    use crate::modules::shipping::application::domain::entities::fixtures::address;
    use crate::modules::shipping::application::services::{
        test_doubles::FakeAddressBook, DeleteShippingAddressService, GetShippingAddressService,
        UpdateShippingAddressService,
    };
    use crate::tests::support::{app_state_builder::TestAppStateBuilder, stubs::StubTokenProvider};

    fn book_for(user_id: Uuid) -> (FakeAddressBook, ShippingAddress) {
        let mine = address(UserId::from(user_id));
        (FakeAddressBook::with(vec![mine.clone()]), mine)
    }

    #[actix_web::test]
    async fn owner_reads_address() {
        let user_id = Uuid::new_v4();
        let (book, mine) = book_for(user_id);
        let state = TestAppStateBuilder::default()
            .with_get_shipping_address(GetShippingAddressService::new(book))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(StubTokenProvider::buyer(user_id).into_data())
                .service(get_shipping_address_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/profile/shipping_addresses/{}", mine.id))
            .insert_header(("Authorization", "Bearer t"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn stranger_gets_404() {
        let (book, theirs) = book_for(Uuid::new_v4());
        let state = TestAppStateBuilder::default()
            .with_get_shipping_address(GetShippingAddressService::new(book))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(StubTokenProvider::buyer(Uuid::new_v4()).into_data())
                .service(get_shipping_address_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/profile/shipping_addresses/{}", theirs.id))
            .insert_header(("Authorization", "Bearer t"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["message"], NOT_FOUND_MESSAGE);
    }

    #[actix_web::test]
    async fn patch_clears_nullable_field() {
        // Arrange
        let user_id = Uuid::new_v4();
        let (book, mine) = book_for(user_id);
        let state = TestAppStateBuilder::default()
            .with_update_shipping_address(UpdateShippingAddressService::new(
                book.clone(),
                book.clone(),
            ))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(StubTokenProvider::buyer(user_id).into_data())
                .service(update_shipping_address_handler),
        )
        .await;

        // Act
        let req = test::TestRequest::patch()
            .uri(&format!("/api/profile/shipping_addresses/{}", mine.id))
            .insert_header(("Authorization", "Bearer t"))
            .set_json(serde_json::json!({ "phone": null, "city": "Paris" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert!(json["data"]["phone"].is_null());
        assert_eq!(json["data"]["city"], "Paris");
        assert_eq!(json["data"]["full_name"], mine.full_name);
    }

    #[actix_web::test]
    async fn delete_confirms_with_message() {
        let user_id = Uuid::new_v4();
        let (book, mine) = book_for(user_id);
        let state = TestAppStateBuilder::default()
            .with_delete_shipping_address(DeleteShippingAddressService::new(book))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(StubTokenProvider::buyer(user_id).into_data())
                .service(delete_shipping_address_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/profile/shipping_addresses/{}", mine.id))
            .insert_header(("Authorization", "Bearer t"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["message"], "Shipping address deleted successfully");
    }
}
