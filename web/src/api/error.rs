use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::{error, warn};
use serde_json::json;
use std::fmt;
use storeit_cloud_storage::StorageError;

/// Transport view of a [`StorageError`].
#[derive(Debug)]
pub struct ApiError(pub StorageError);

impl From<StorageError> for ApiError {
    fn from(error: StorageError) -> Self {
        ApiError(error)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            StorageError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            StorageError::CredentialUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            StorageError::ProviderRejected(_) => StatusCode::BAD_GATEWAY,
            StorageError::ProviderUnreachable(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Storage request failed: {}", self.0);
        } else {
            warn!("Storage request refused: {}", self.0);
        }
        HttpResponse::build(status).json(json!({
            "error": self.0.kind(),
            "message": self.0.to_string(),
        }))
    }
}
