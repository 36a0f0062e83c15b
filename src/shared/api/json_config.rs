// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Turns JSON extractor failures (malformed body, missing field, wrong type)
/// into the standard 400 envelope instead of actix's plain-text error.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(256 * 1024)
        .error_handler(|err, _req| {
            let message = err.to_string();
            tracing::debug!(error = %message, "Rejected request body");
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::validation(&message),
            )
            .into()
        })
}
