use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::{FutureExt, LocalBoxFuture};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{TokenError, TokenProvider, UserQuery};
use crate::shared::api::ApiResponse;

/// Verifies bearer tokens and checks that the account behind them can still sign in.
#[derive(Clone)]
pub struct Authenticator {
    tokens: Arc<dyn TokenProvider + Send + Sync>,
    users: Arc<dyn UserQuery>,
}

impl Authenticator {
    pub fn new(tokens: Arc<dyn TokenProvider + Send + Sync>, users: Arc<dyn UserQuery>) -> Self {
        Self { tokens, users }
    }
}

/// Principal resolved from a valid `Authorization: Bearer` access token
/// whose account is active and not deleted.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub is_staff: bool,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let authenticator = match req.app_data::<web::Data<Authenticator>>() {
            Some(authenticator) => authenticator.clone(),
            None => {
                tracing::error!("Authenticator is not registered as app data");
                return futures::future::err(create_api_error(ApiResponse::internal_error()))
                    .boxed_local();
            }
        };

        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return futures::future::err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                )))
                .boxed_local();
            }
        };

        let claims = match authenticator.tokens.verify_token(&token) {
            Ok(claims) => claims,
            Err(TokenError::InvalidTokenType(_)) => {
                return futures::future::err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN_TYPE",
                    "Invalid token type",
                )))
                .boxed_local();
            }
            Err(_) => {
                return futures::future::err(create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN",
                    "Invalid or expired token",
                )))
                .boxed_local();
            }
        };

        async move {
            let user_id = UserId::from(claims.sub);
            let user = authenticator.users.find_by_id(user_id).await.map_err(|e| {
                tracing::error!(error = %e, user_id = %user_id, "Failed to load token subject");
                create_api_error(ApiResponse::internal_error())
            })?;

            match user {
                Some(user) if user.can_sign_in() => Ok(AuthenticatedUser {
                    user_id,
                    is_staff: user.is_staff,
                }),
                _ => {
                    tracing::warn!(user_id = %user_id, "Token presented for inactive account");
                    Err(create_api_error(ApiResponse::unauthorized(
                        "ACCOUNT_INACTIVE",
                        "Account is inactive or deleted",
                    )))
                }
            }
        }
        .boxed_local()
    }
}

/// Authenticated principal carrying the staff flag.
#[derive(Debug, Clone, Copy)]
pub struct StaffUser {
    pub user_id: UserId,
}

impl FromRequest for StaffUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let authenticated = AuthenticatedUser::from_request(req, payload);

        async move {
            let user = authenticated.await?;
            if user.is_staff {
                Ok(StaffUser {
                    user_id: user.user_id,
                })
            } else {
                Err(create_api_error(ApiResponse::forbidden(
                    "STAFF_ONLY",
                    "Access is denied",
                )))
            }
        }
        .boxed_local()
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
