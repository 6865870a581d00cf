use crate::error::{StorageError, StorageResult};
use crate::gateway::{FileCategory, FileEntry, StorageGateway, UploadReceipt, UploadRequest};
use crate::gdrive_provider::drive_hub_adapter::{DriveHubAdapter, HubFactory};
use crate::gdrive_provider::google_drive_utils::{build_all_files_query, build_mime_prefix_query};
use crate::gdrive_provider::hub_cache::HubCache;
use crate::provider::Provider;
use async_trait::async_trait;
use google_drive3::api::File;
use log::{debug, warn};
use std::sync::Arc;
use std::time::Duration;

/// Listings stop after this many entries; no page token is followed.
pub const DEFAULT_PAGE_SIZE: i32 = 100;

/// [`StorageGateway`] backed by the Google Drive v3 API.
pub struct GoogleDriveGateway {
    hubs: HubCache,
    page_size: i32,
}

impl GoogleDriveGateway {
    /// A gateway that connects a fresh hub for every operation.
    pub fn new(factory: Arc<dyn HubFactory>) -> Self {
        Self {
            hubs: HubCache::new(factory, Duration::ZERO),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Reuse a connected hub for up to `ttl`.
    pub fn with_client_ttl(self, ttl: Duration) -> Self {
        let factory = self.hubs.factory();
        Self {
            hubs: HubCache::new(factory, ttl),
            ..self
        }
    }

    async fn observe<T: Sync>(&self, hub: &Arc<dyn DriveHubAdapter>, result: &StorageResult<T>) {
        if let Err(e) = result {
            if e.is_auth_failure() {
                warn!("Drive rejected the credential, dropping cached hub: {}", e);
                self.hubs.invalidate(hub).await;
            }
        }
    }

    async fn list_with_query(&self, query: String) -> StorageResult<Vec<FileEntry>> {
        let hub = self.hubs.acquire().await?;
        let result = hub.fetch_files(&query, self.page_size).await;
        self.observe(&hub, &result).await;

        let entries: Vec<FileEntry> = result?.into_iter().filter_map(to_file_entry).collect();
        debug!("Drive query \"{}\" returned {} entries", query, entries.len());
        Ok(entries)
    }
}

fn to_file_entry(file: File) -> Option<FileEntry> {
    match file.name {
        Some(name) => Some(FileEntry::new(name, file.mime_type)),
        None => {
            debug!("File {:?} returned by Drive has no name. Skipping.", file.id);
            None
        }
    }
}

#[async_trait]
impl StorageGateway for GoogleDriveGateway {
    fn provider(&self) -> Provider {
        Provider::Google
    }

    async fn list_files(&self) -> StorageResult<Vec<FileEntry>> {
        self.list_with_query(build_all_files_query()).await
    }

    async fn list_files_by_category(&self, category: FileCategory) -> StorageResult<Vec<FileEntry>> {
        debug!("Listing {} on Google Drive", category);
        self.list_with_query(build_mime_prefix_query(category.mime_prefix())).await
    }

    async fn upload_file(&self, request: UploadRequest) -> StorageResult<UploadReceipt> {
        let hub = self.hubs.acquire().await?;
        let result = hub
            .create_file(&request.file_name, &request.content_type, request.content)
            .await;
        self.observe(&hub, &result).await;

        let id = result?
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                StorageError::ProviderRejected(format!(
                    "Drive did not return an identifier for '{}'",
                    request.file_name
                ))
            })?;

        Ok(UploadReceipt {
            provider: Provider::Google,
            id,
            name: request.file_name,
        })
    }
}
