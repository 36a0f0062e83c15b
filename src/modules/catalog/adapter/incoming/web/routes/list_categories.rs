use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::catalog::application::domain::entities::Category;
use crate::modules::catalog::application::ports::incoming::use_cases::ListCategoriesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List all product categories
#[utoipa::path(
    get,
    path = "/api/shop/categories",
    tag = "shop",
    responses(
        (status = 200, description = "Categories ordered by name", body = inline(SuccessResponse<Vec<Category>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/shop/categories")]
pub async fn list_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.catalog.list_categories.execute().await {
        Ok(categories) => ApiResponse::success(categories),
        Err(ListCategoriesError::QueryError(msg)) => {
            error!(error = %msg, "Failed to list categories");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::modules::catalog::application::domain::entities::fixtures::category;
    use crate::modules::catalog::application::ports::incoming::use_cases::ListCategoriesUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct TwoCategories;

    #[async_trait]
    impl ListCategoriesUseCase for TwoCategories {
        async fn execute(&self) -> Result<Vec<Category>, ListCategoriesError> {
            Ok(vec![category("desks"), category("lighting")])
        }
    }

    #[actix_web::test]
    async fn lists_categories_without_ids() {
        let state = TestAppStateBuilder::default()
            .with_list_categories(TwoCategories)
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(list_categories_handler)).await;

        let req = test::TestRequest::get().uri("/api/shop/categories").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"].as_array().map(Vec::len), Some(2));
        assert!(json["data"][0].get("id").is_none());
        assert_eq!(json["data"][1]["slug"], "lighting");
    }
}
