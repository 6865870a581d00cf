use crate::error::StorageResult;
use async_trait::async_trait;
use bytes::Bytes;
use google_drive3::api::File;
use std::sync::Arc;

/// The slice of the Drive API the gateway relies on.
#[async_trait]
pub trait DriveHubAdapter: Send + Sync {
    /// Runs one `files.list` call. Only the first page is returned.
    async fn fetch_files(&self, query: &str, page_size: i32) -> StorageResult<Vec<File>>;

    /// Creates a new file named `name` holding `content`.
    async fn create_file(&self, name: &str, content_type: &str, content: Bytes) -> StorageResult<File>;
}

/// Produces connected hubs. Each call performs full credential loading and
/// client construction.
#[async_trait]
pub trait HubFactory: Send + Sync {
    async fn connect(&self) -> StorageResult<Arc<dyn DriveHubAdapter>>;
}
