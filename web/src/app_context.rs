use crate::api::upload::DEFAULT_MAX_UPLOAD_BYTES;
use crate::config::config::AppConfig;
use log::info;
use std::sync::Arc;
use std::time::Duration;
use storeit_cloud_storage::gdrive_provider::google_drive_gateway::GoogleDriveGateway;
use storeit_cloud_storage::gdrive_provider::google_drive_hub_adapter_builder::GoogleDriveHubAdapterBuilder;
use storeit_cloud_storage::{CloudStorageService, KeyFileCredentials, ProviderRegistry};

pub struct AppContext {
    pub storage: Arc<CloudStorageService>,
    pub max_upload_bytes: usize,
}

impl AppContext {
    pub fn new(storage: CloudStorageService) -> Self {
        Self {
            storage: Arc::new(storage),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }

    /// Wires the Google Drive gateway. The key is only read when a request
    /// needs a client, so a missing key surfaces per request.
    pub fn from_config(config: &AppConfig) -> Self {
        info!(
            "Google Drive gateway: credentials '{}', page size {}, client cache ttl {}s, timeout {}s, upload limit {} bytes",
            config.gdrive_credentials_file,
            config.page_size,
            config.client_cache_ttl_secs,
            config.request_timeout_secs,
            config.max_upload_bytes
        );
        let hub_builder = GoogleDriveHubAdapterBuilder::new()
            .with_credentials(Arc::new(KeyFileCredentials::new(config.gdrive_credentials_file.clone())))
            .with_scope(config.gdrive_scope.clone())
            .with_timeout(Duration::from_secs(config.request_timeout_secs));

        let gateway = GoogleDriveGateway::new(Arc::new(hub_builder))
            .with_page_size(config.page_size)
            .with_client_ttl(Duration::from_secs(config.client_cache_ttl_secs));

        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(gateway));
        Self::new(CloudStorageService::new(registry)).with_max_upload_bytes(config.max_upload_bytes)
    }
}
