use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::review::application::domain::entities::Review;
use crate::modules::review::application::ports::incoming::use_cases::{
    CreateReviewCommand, CreateReviewError, ListReviewsError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReviewRequestDto {
    #[schema(example = 5, minimum = 1, maximum = 5)]
    pub rating: i32,
    #[schema(example = "Bright and sturdy")]
    pub text: String,
}

/// Active reviews of a product, newest first
#[utoipa::path(
    get,
    path = "/api/shop/products/{slug}/reviews",
    tag = "shop",
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Reviews", body = inline(SuccessResponse<Vec<Review>>)),
        (status = 404, description = "Product does not exist!", body = ErrorResponse),
    )
)]
#[get("/api/shop/products/{slug}/reviews")]
pub async fn list_reviews_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.review.list.execute(&path).await {
        Ok(reviews) => ApiResponse::success(reviews),
        Err(ListReviewsError::ProductNotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product does not exist!")
        }
        Err(ListReviewsError::QueryError(msg)) => {
            error!(error = %msg, "Failed to list reviews");
            ApiResponse::internal_error()
        }
    }
}

/// Review a product
///
/// A user holds at most one active review per product.
#[utoipa::path(
    post,
    path = "/api/shop/products/{slug}/reviews",
    tag = "shop",
    security(("BearerAuth" = [])),
    params(("slug" = String, Path, description = "Product slug")),
    request_body = CreateReviewRequestDto,
    responses(
        (status = 201, description = "Review created", body = inline(SuccessResponse<Review>)),
        (status = 400, description = "Invalid rating or already reviewed", body = ErrorResponse),
        (status = 404, description = "Product does not exist!", body = ErrorResponse),
    )
)]
#[post("/api/shop/products/{slug}/reviews")]
pub async fn create_review_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<CreateReviewRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = match CreateReviewCommand::new(dto.rating, dto.text) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::validation(&e.to_string()),
    };

    match data.review.create.execute(user.user_id, &path, command).await {
        Ok(review) => ApiResponse::created(review),
        Err(err) => map_create_review_error(err),
    }
}

fn map_create_review_error(err: CreateReviewError) -> HttpResponse {
    match err {
        CreateReviewError::ProductNotFound => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product does not exist!")
        }
        CreateReviewError::AlreadyReviewed => {
            ApiResponse::validation("You have already reviewed this product")
        }
        CreateReviewError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to create review");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserId;
    use crate::modules::catalog::application::domain::entities::fixtures::product;
    use crate::modules::catalog::application::services::test_doubles::FakeProductQuery;
    use crate::modules::review::application::domain::entities::fixtures::review;
    use crate::modules::review::application::services::{
        test_doubles::FakeReviewStore, CreateReviewService, ListReviewsService,
    };
    use crate::tests::support::{app_state_builder::TestAppStateBuilder, stubs::StubTokenProvider};

    fn post(slug: &str, rating: i32) -> test::TestRequest {
        test::TestRequest::post()
            .uri(&format!("/api/shop/products/{slug}/reviews"))
            .insert_header(("Authorization", "Bearer t"))
            .set_json(serde_json::json!({ "rating": rating, "text": "Bright and sturdy" }))
    }

    #[actix_web::test]
    async fn second_review_is_rejected_with_400() {
        // Arrange
        let user_id = Uuid::new_v4();
        let lamp = product(None, dec!(19.99));
        let store = FakeReviewStore::default();
        let state = TestAppStateBuilder::default()
            .with_create_review(CreateReviewService::new(
                FakeProductQuery::with(vec![lamp.clone()]),
                store.clone(),
                store,
            ))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(StubTokenProvider::buyer(user_id).into_data())
                .service(create_review_handler),
        )
        .await;

        // Act
        let first = test::call_service(&app, post(&lamp.slug, 5).to_request()).await;
        let second = test::call_service(&app, post(&lamp.slug, 4).to_request()).await;

        // Assert
        assert_eq!(first.status(), StatusCode::CREATED);
        assert_eq!(second.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(second).await;
        assert_eq!(json["error"]["message"], "You have already reviewed this product");
    }

    #[actix_web::test]
    async fn out_of_range_rating_is_400() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(StubTokenProvider::buyer(Uuid::new_v4()).into_data())
                .service(create_review_handler),
        )
        .await;

        let resp = test::call_service(&app, post("desk-lamp", 0).to_request()).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn anonymous_caller_is_401() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(StubTokenProvider::buyer(Uuid::new_v4()).into_data())
                .service(create_review_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/shop/products/desk-lamp/reviews")
            .set_json(serde_json::json!({ "rating": 5, "text": "x" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn lists_reviews_publicly() {
        let lamp = product(None, dec!(19.99));
        let store = FakeReviewStore::with(vec![review(UserId::from(Uuid::new_v4()), lamp.id, 4)]);
        let state = TestAppStateBuilder::default()
            .with_list_reviews(ListReviewsService::new(
                FakeProductQuery::with(vec![lamp.clone()]),
                store,
            ))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(list_reviews_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/shop/products/{}/reviews", lamp.slug))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"][0]["rating"], 4);
    }
}
