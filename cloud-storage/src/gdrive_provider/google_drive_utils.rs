use crate::error::{StorageError, StorageResult};
use google_drive3::common::Client;
use google_drive3::yup_oauth2::authenticator::Authenticator;
use google_drive3::yup_oauth2::{ServiceAccountAuthenticator, ServiceAccountKey};
use hyper::StatusCode;
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use rustls::crypto::ring::default_provider;
use rustls::crypto::CryptoProvider;
use serde_json::Value;
use std::future::Future;
use std::sync::Once;
use std::time::Duration;

/// Read/write access to the files of the service account.
pub const DRIVE_SCOPE: &str = "https://www.googleapis.com/auth/drive";
pub const LIST_FIELDS: &str = "files(id, name, mimeType)";
pub const UPLOAD_FIELDS: &str = "id";

static INIT: Once = Once::new();

pub(crate) fn build_connection_client() -> StorageResult<Client<HttpsConnector<HttpConnector>>> {
    INIT.call_once(|| {
        // Another component may have installed a provider already; either is fine.
        let _ = CryptoProvider::install_default(default_provider());
    });
    let connector = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .map_err(|e| StorageError::ProviderUnreachable(format!("Failed to load native TLS roots: {}", e)))?
        .https_or_http()
        .enable_http2()
        .build();
    Ok(hyper_util::client::legacy::Client::builder(hyper_util::rt::TokioExecutor::new()).build(connector))
}

pub(crate) fn parse_service_account_key(secret_json: &str) -> StorageResult<ServiceAccountKey> {
    serde_json::from_str(secret_json).map_err(|e| {
        StorageError::CredentialUnavailable(format!("Failed to parse service account key: {}", e))
    })
}

pub(crate) async fn create_auth_authenticator(secret: ServiceAccountKey) -> StorageResult<Authenticator<HttpsConnector<HttpConnector>>> {
    ServiceAccountAuthenticator::builder(secret)
        .build()
        .await
        .map_err(|e| StorageError::CredentialUnavailable(format!("Failed to create authenticator: {}", e)))
}

fn escape_query_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

pub(crate) fn build_all_files_query() -> String {
    "trashed = false".to_string()
}

pub(crate) fn build_mime_prefix_query(mime_prefix: &str) -> String {
    format!("mimeType contains '{}' and trashed = false", escape_query_value(mime_prefix))
}

fn map_status_code(context: &str, code: u16, detail: &str) -> StorageError {
    match code {
        401 => StorageError::CredentialUnavailable(format!("{}: provider refused the credential ({}) {}", context, code, detail)),
        _ => StorageError::ProviderRejected(format!("{}: status {} {}", context, code, detail)),
    }
}

pub(crate) fn map_response_status(context: &str, status: StatusCode) -> StorageError {
    map_status_code(context, status.as_u16(), "")
}

/// Error payloads look like `{"error": {"code": 403, "message": "..."}}`.
fn map_error_body(context: &str, body: &Value) -> StorageError {
    let error = &body["error"];
    let message = error["message"].as_str().unwrap_or_default();
    match error["code"].as_u64().and_then(|code| u16::try_from(code).ok()) {
        Some(code) => map_status_code(context, code, message),
        None => StorageError::ProviderRejected(format!("{}: {}", context, body)),
    }
}

pub(crate) fn map_drive_error(context: &str, error: google_drive3::Error) -> StorageError {
    use google_drive3::Error;

    match error {
        Error::HttpError(e) => StorageError::ProviderUnreachable(format!("{}: {}", context, e)),
        Error::Io(e) => StorageError::ProviderUnreachable(format!("{}: {}", context, e)),
        Error::MissingToken(e) => StorageError::CredentialUnavailable(format!("{}: {}", context, e)),
        Error::BadRequest(body) => map_error_body(context, &body),
        Error::Failure(response) => map_response_status(context, response.status()),
        other => StorageError::ProviderRejected(format!("{}: {}", context, other)),
    }
}

/// Bounds a remote call; expiry counts as the provider being unreachable.
pub(crate) async fn with_deadline<T, F>(timeout: Duration, context: &str, call: F) -> StorageResult<T>
where
    F: Future<Output = T>,
{
    tokio::time::timeout(timeout, call).await.map_err(|_| {
        StorageError::ProviderUnreachable(format!("{}: no answer within {:?}", context, timeout))
    })
}
