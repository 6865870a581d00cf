use crate::error::{StorageError, StorageResult};
use crate::gateway::{names, FileEntry, StorageGateway, UploadReceipt, UploadRequest};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Storage backends the gateway knows how to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
}

impl Provider {
    pub fn label(&self) -> &'static str {
        match self {
            Provider::Google => "Google Drive",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Google => "google",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = StorageError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "google" | "gdrive" | "google-drive" => Ok(Provider::Google),
            other => Err(StorageError::InvalidRequest(format!(
                "Unsupported storage provider: '{}'",
                other
            ))),
        }
    }
}

/// Maps each provider to the gateway instance serving it.
#[derive(Default)]
pub struct ProviderRegistry {
    gateways: HashMap<Provider, Arc<dyn StorageGateway>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a gateway under the provider it reports, replacing any
    /// previous registration.
    pub fn register(&mut self, gateway: Arc<dyn StorageGateway>) -> &mut Self {
        let provider = gateway.provider();
        if self.gateways.insert(provider, gateway).is_some() {
            warn!("Replacing previously registered gateway for {}", provider);
        }
        self
    }

    pub fn gateway(&self, provider: Provider) -> StorageResult<Arc<dyn StorageGateway>> {
        self.gateways.get(&provider).cloned().ok_or_else(|| {
            StorageError::InvalidRequest(format!("Storage provider '{}' is not configured", provider))
        })
    }

    pub fn providers(&self) -> Vec<Provider> {
        self.gateways.keys().copied().collect()
    }
}

/// Provider-polymorphic entry point used by the transport layer.
pub struct CloudStorageService {
    registry: ProviderRegistry,
}

impl CloudStorageService {
    pub fn new(registry: ProviderRegistry) -> Self {
        Self { registry }
    }

    pub fn providers(&self) -> Vec<Provider> {
        self.registry.providers()
    }

    pub async fn list_files(&self, provider: Provider) -> StorageResult<Vec<String>> {
        self.list_entries(provider).await.map(names)
    }

    pub async fn list_entries(&self, provider: Provider) -> StorageResult<Vec<FileEntry>> {
        debug!("Listing files on {}", provider);
        self.registry.gateway(provider)?.list_files().await
    }

    pub async fn list_photos(&self, provider: Provider) -> StorageResult<Vec<String>> {
        debug!("Listing photos on {}", provider);
        self.registry.gateway(provider)?.list_photos().await.map(names)
    }

    pub async fn list_videos(&self, provider: Provider) -> StorageResult<Vec<String>> {
        debug!("Listing videos on {}", provider);
        self.registry.gateway(provider)?.list_videos().await.map(names)
    }

    pub async fn upload_file(&self, provider: Provider, request: UploadRequest) -> StorageResult<UploadReceipt> {
        info!(
            "Uploading '{}' ({}, {} bytes) to {}",
            request.file_name,
            request.content_type,
            request.content.len(),
            provider
        );
        let receipt = self.registry.gateway(provider)?.upload_file(request).await?;
        info!("Upload of '{}' to {} created {}", receipt.name, provider, receipt.id);
        Ok(receipt)
    }
}
