use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::StaffUser;
use crate::modules::catalog::application::domain::entities::Category;
use crate::modules::catalog::application::ports::incoming::use_cases::{
    CreateCategoryCommand, CreateCategoryError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequestDto {
    #[schema(example = "Lighting")]
    pub name: String,
    #[schema(example = "category_images/lighting.png")]
    pub image: String,
}

/// Create a product category (staff only)
#[utoipa::path(
    post,
    path = "/api/shop/categories",
    tag = "shop",
    security(("BearerAuth" = [])),
    request_body = CreateCategoryRequestDto,
    responses(
        (status = 201, description = "Category created", body = inline(SuccessResponse<Category>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 403, description = "Caller is not staff", body = ErrorResponse),
        (status = 409, description = "Category name already exists", body = ErrorResponse),
    )
)]
#[post("/api/shop/categories")]
pub async fn create_category_handler(
    _staff: StaffUser,
    payload: web::Json<CreateCategoryRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match CreateCategoryCommand::new(dto.name, dto.image) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::validation(&e.to_string()),
    };

    match data.catalog.create_category.execute(command).await {
        Ok(category) => ApiResponse::created(category),
        Err(err) => map_create_category_error(err),
    }
}

fn map_create_category_error(err: CreateCategoryError) -> HttpResponse {
    match err {
        CreateCategoryError::AlreadyExists => {
            ApiResponse::conflict("CATEGORY_EXISTS", "Category with this name already exists")
        }
        CreateCategoryError::SlugUnavailable(msg) | CreateCategoryError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to create category");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::modules::catalog::application::ports::incoming::use_cases::CreateCategoryUseCase;
    use crate::tests::support::{app_state_builder::TestAppStateBuilder, stubs::StubTokenProvider};

    struct DuplicateCategory;

    #[async_trait]
    impl CreateCategoryUseCase for DuplicateCategory {
        async fn execute(
            &self,
            _command: CreateCategoryCommand,
        ) -> Result<Category, CreateCategoryError> {
            Err(CreateCategoryError::AlreadyExists)
        }
    }

    fn request(name: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/shop/categories")
            .insert_header(("Authorization", "Bearer t"))
            .set_json(serde_json::json!({ "name": name, "image": "c.png" }))
    }

    #[actix_web::test]
    async fn buyer_is_forbidden() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(StubTokenProvider::buyer(Uuid::new_v4()).into_data())
                .service(create_category_handler),
        )
        .await;

        let resp = test::call_service(&app, request("Lighting").to_request()).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn duplicate_name_is_conflict() {
        let state = TestAppStateBuilder::default()
            .with_create_category(DuplicateCategory)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(StubTokenProvider::staff(Uuid::new_v4()).into_data())
                .service(create_category_handler),
        )
        .await;

        let resp = test::call_service(&app, request("Lighting").to_request()).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn blank_name_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(StubTokenProvider::staff(Uuid::new_v4()).into_data())
                .service(create_category_handler),
        )
        .await;

        let resp = test::call_service(&app, request("   ").to_request()).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
