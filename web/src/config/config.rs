use crate::api::upload::DEFAULT_MAX_UPLOAD_BYTES;
use serde::Deserialize;
use storeit_cloud_storage::gdrive_provider::google_drive_gateway::DEFAULT_PAGE_SIZE;
use storeit_cloud_storage::gdrive_provider::DRIVE_SCOPE;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Path to the service-account key, or the name of an environment
    /// variable holding the key JSON.
    #[serde(rename = "gdriveCredentialsFile")]
    pub gdrive_credentials_file: String,
    #[serde(rename = "gdriveScope", default = "default_scope")]
    pub gdrive_scope: String,
    #[serde(rename = "pageSize", default = "default_page_size")]
    pub page_size: i32,
    /// 0 builds a new Drive client for every request.
    #[serde(rename = "clientCacheTtlSecs", default)]
    pub client_cache_ttl_secs: u64,
    #[serde(rename = "requestTimeoutSecs", default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(rename = "bindAddress", default = "default_bind_address")]
    pub bind_address: String,
    #[serde(rename = "port", default = "default_port")]
    pub port: u16,
    #[serde(rename = "maxUploadBytes", default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    #[serde(rename = "staticAssetsPath", default)]
    pub static_assets_path: Option<String>,
}

fn default_scope() -> String {
    DRIVE_SCOPE.to_string()
}

fn default_page_size() -> i32 {
    DEFAULT_PAGE_SIZE
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}
