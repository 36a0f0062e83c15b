use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::catalog::application::ports::incoming::use_cases::GetProductError;
use crate::modules::catalog::application::ports::outgoing::ProductView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Product detail
#[utoipa::path(
    get,
    path = "/api/shop/products/{slug}",
    tag = "shop",
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Product found", body = inline(SuccessResponse<ProductView>)),
        (status = 404, description = "Product does not exist", body = ErrorResponse),
    )
)]
#[get("/api/shop/products/{slug}")]
pub async fn get_product_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.catalog.get_product.execute(&path).await {
        Ok(product) => ApiResponse::success(product),
        Err(GetProductError::NotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product does not exist!")
        }
        Err(GetProductError::QueryError(msg)) => {
            error!(error = %msg, slug = %path, "Failed to load product");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    use crate::modules::catalog::application::domain::entities::fixtures::product;
    use crate::modules::catalog::application::ports::incoming::use_cases::GetProductUseCase;
    use crate::modules::catalog::application::services::test_doubles::view_of;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct Lamp;

    #[async_trait]
    impl GetProductUseCase for Lamp {
        async fn execute(&self, _slug: &str) -> Result<ProductView, GetProductError> {
            Ok(view_of(&product(None, dec!(19.99))))
        }
    }

    #[actix_web::test]
    async fn price_is_serialized_as_string() {
        let state = TestAppStateBuilder::default().with_get_product(Lamp).build();
        let app = test::init_service(App::new().app_data(state).service(get_product_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/shop/products/desk-lamp")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["price_current"], "19.99");
        assert!(json["data"]["price_old"].is_null());
    }

    #[actix_web::test]
    async fn missing_product_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_product_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/shop/products/none").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
