use crate::error::{StorageError, StorageResult};
use crate::provider::Provider;
use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// A file visible to the provider credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, mime_type: Option<String>) -> Self {
        Self {
            name: name.into(),
            mime_type,
        }
    }
}

/// Classification of files by the prefix of their MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    Photo,
    Video,
}

impl FileCategory {
    pub fn mime_prefix(&self) -> &'static str {
        match self {
            FileCategory::Photo => "image/",
            FileCategory::Video => "video/",
        }
    }

    pub fn matches(&self, mime_type: &str) -> bool {
        mime_type.starts_with(self.mime_prefix())
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileCategory::Photo => write!(f, "photos"),
            FileCategory::Video => write!(f, "videos"),
        }
    }
}

/// Bytes handed over by a caller for upload. Never persisted locally.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file_name: String,
    pub content_type: String,
    pub content: Bytes,
}

impl UploadRequest {
    /// Builds a request, falling back to `application/octet-stream` when the
    /// caller gave no usable content type.
    pub fn new(file_name: impl Into<String>, content_type: Option<&str>, content: Bytes) -> StorageResult<Self> {
        let file_name = file_name.into();
        if file_name.trim().is_empty() {
            return Err(StorageError::InvalidRequest(
                "Uploaded file has no file name".to_string(),
            ));
        }

        let content_type = content_type
            .filter(|value| value.parse::<mime::Mime>().is_ok())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();

        Ok(Self {
            file_name,
            content_type,
            content,
        })
    }
}

/// Confirmation of a completed upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadReceipt {
    pub provider: Provider,
    pub id: String,
    pub name: String,
}

impl fmt::Display for UploadReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File uploaded successfully to {} with ID: {}",
            self.provider.label(),
            self.id
        )
    }
}

/// Operations every storage backend has to support.
#[async_trait]
pub trait StorageGateway: Send + Sync {
    fn provider(&self) -> Provider;

    /// Every file visible to the credential. An empty listing is `Ok(vec![])`.
    async fn list_files(&self) -> StorageResult<Vec<FileEntry>>;

    async fn list_files_by_category(&self, category: FileCategory) -> StorageResult<Vec<FileEntry>>;

    async fn list_photos(&self) -> StorageResult<Vec<FileEntry>> {
        self.list_files_by_category(FileCategory::Photo).await
    }

    async fn list_videos(&self) -> StorageResult<Vec<FileEntry>> {
        self.list_files_by_category(FileCategory::Video).await
    }

    /// Creates a new remote object, even when one with the same name exists.
    async fn upload_file(&self, request: UploadRequest) -> StorageResult<UploadReceipt>;
}

pub fn names(entries: Vec<FileEntry>) -> Vec<String> {
    entries.into_iter().map(|entry| entry.name).collect()
}
