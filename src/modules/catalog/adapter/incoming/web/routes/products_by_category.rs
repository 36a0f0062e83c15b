use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::catalog::application::ports::incoming::use_cases::ProductsByCategoryError;
use crate::modules::catalog::application::ports::outgoing::ProductView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Products in a category
#[utoipa::path(
    get,
    path = "/api/shop/categories/{slug}",
    tag = "shop",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Products in the category", body = inline(SuccessResponse<Vec<ProductView>>)),
        (status = 404, description = "Category does not exist", body = ErrorResponse),
    )
)]
#[get("/api/shop/categories/{slug}")]
pub async fn products_by_category_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.catalog.products_by_category.execute(&path).await {
        Ok(products) => ApiResponse::success(products),
        Err(err) => map_products_by_category_error(err),
    }
}

fn map_products_by_category_error(err: ProductsByCategoryError) -> HttpResponse {
    match err {
        ProductsByCategoryError::CategoryNotFound => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category does not exist!")
        }
        ProductsByCategoryError::QueryError(msg) => {
            error!(error = %msg, "Failed to list category products");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn unknown_category_is_not_found() {
        // Default stub reports every category missing
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(products_by_category_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/shop/categories/nope")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["message"], "Category does not exist!");
    }
}
