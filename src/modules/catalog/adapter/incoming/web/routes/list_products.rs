use actix_web::{get, web, HttpResponse, Responder};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::catalog::application::ports::incoming::use_cases::ListProductsError;
use crate::modules::catalog::application::ports::outgoing::{ProductFilter, ProductView};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListProductsQuery {
    /// Lowest `price_current`, inclusive
    #[param(value_type = Option<String>, example = "10.00")]
    pub min_price: Option<Decimal>,
    /// Highest `price_current`, inclusive
    #[param(value_type = Option<String>, example = "99.99")]
    pub max_price: Option<Decimal>,
    /// Minimum units in stock
    pub in_stock: Option<i32>,
    /// Only products created at or after this instant (RFC 3339, or a bare date meaning midnight UTC)
    #[serde(default, alias = "created_after", deserialize_with = "date_or_datetime")]
    #[param(value_type = Option<String>, example = "2024-01-01")]
    pub created_at: Option<DateTime<Utc>>,
}

fn date_or_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if let Ok(at) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(at.with_timezone(&Utc)));
    }

    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| Some(dt.and_utc()))
        .ok_or_else(|| serde::de::Error::custom(format!("invalid created_at: {raw}")))
}

impl From<ListProductsQuery> for ProductFilter {
    fn from(q: ListProductsQuery) -> Self {
        ProductFilter {
            min_price: q.min_price,
            max_price: q.max_price,
            in_stock: q.in_stock,
            created_after: q.created_at,
        }
    }
}

/// Browse products
#[utoipa::path(
    get,
    path = "/api/shop/products",
    tag = "shop",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "Products, newest first", body = inline(SuccessResponse<Vec<ProductView>>)),
        (status = 400, description = "Invalid filter", body = ErrorResponse),
    )
)]
#[get("/api/shop/products")]
pub async fn list_products_handler(
    query: web::Query<ListProductsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .catalog
        .list_products
        .execute(query.into_inner().into())
        .await
    {
        Ok(products) => ApiResponse::success(products),
        Err(err) => map_list_products_error(err),
    }
}

fn map_list_products_error(err: ListProductsError) -> HttpResponse {
    match err {
        ListProductsError::InvalidPriceRange => {
            ApiResponse::validation(&err.to_string())
        }
        ListProductsError::QueryError(msg) => {
            error!(error = %msg, "Failed to list products");
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
    use std::sync::{Arc, Mutex};

    use crate::modules::catalog::application::ports::incoming::use_cases::ListProductsUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Default)]
    struct CapturingList {
        seen: Arc<Mutex<Option<ProductFilter>>>,
    }

    #[async_trait]
    impl ListProductsUseCase for CapturingList {
        async fn execute(
            &self,
            filter: ProductFilter,
        ) -> Result<Vec<ProductView>, ListProductsError> {
            *self.seen.lock().unwrap() = Some(filter);
            Ok(vec![])
        }
    }

    #[actix_web::test]
    async fn query_string_becomes_filter() {
        // Arrange
        let seen = Arc::new(Mutex::new(None));
        let state = TestAppStateBuilder::default()
            .with_list_products(CapturingList { seen: seen.clone() })
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(list_products_handler)).await;

        // Act
        let req = test::TestRequest::get()
            .uri("/api/shop/products?min_price=10.50&in_stock=2&created_after=2024-01-01T00:00:00Z")
            .to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        let filter = seen.lock().unwrap().clone().unwrap();
        assert_eq!(filter.min_price, Some(dec!(10.50)));
        assert_eq!(filter.max_price, None);
        assert_eq!(filter.in_stock, Some(2));
        assert!(filter.created_after.is_some());
    }

    #[actix_web::test]
    async fn created_at_accepts_bare_date() {
        let seen = Arc::new(Mutex::new(None));
        let state = TestAppStateBuilder::default()
            .with_list_products(CapturingList { seen: seen.clone() })
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(list_products_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/shop/products?created_at=2024-01-01")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let filter = seen.lock().unwrap().clone().unwrap();
        assert_eq!(
            filter.created_after.unwrap().to_rfc3339(),
            "2024-01-01T00:00:00+00:00"
        );
    }

    #[actix_web::test]
    async fn malformed_price_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(list_products_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/shop/products?min_price=cheap")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
