use crate::error::{StorageError, StorageResult};
use crate::gdrive_provider::drive_hub_adapter::DriveHubAdapter;
use crate::gdrive_provider::google_drive_utils::{map_drive_error, map_response_status, with_deadline, LIST_FIELDS, UPLOAD_FIELDS};
use async_trait::async_trait;
use bytes::Bytes;
use google_drive3::api::File;
use google_drive3::DriveHub;
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use log::debug;
use std::io::Cursor;
use std::time::Duration;

pub struct GoogleDriveHubAdapter {
    hub: DriveHub<HttpsConnector<HttpConnector>>,
    scope: String,
    timeout: Duration,
}

impl GoogleDriveHubAdapter {
    pub fn new(hub: DriveHub<HttpsConnector<HttpConnector>>, scope: String, timeout: Duration) -> Self {
        Self { hub, scope, timeout }
    }
}

/// Media body for `files.create`; shares the buffer instead of copying it.
fn upload_body(content: Bytes) -> Cursor<Bytes> {
    Cursor::new(content)
}

#[async_trait]
impl DriveHubAdapter for GoogleDriveHubAdapter {
    async fn fetch_files(&self, query: &str, page_size: i32) -> StorageResult<Vec<File>> {
        debug!("Drive files.list q=\"{}\" pageSize={}", query, page_size);
        let call = self
            .hub
            .files()
            .list()
            .q(query)
            .page_size(page_size)
            .param("fields", LIST_FIELDS)
            .add_scope(&self.scope)
            .doit();

        let (response, file_list) = with_deadline(self.timeout, "Failed to fetch file list", call)
            .await?
            .map_err(|e| map_drive_error("Failed to fetch file list", e))?;

        if !response.status().is_success() {
            return Err(map_response_status("Failed to fetch file list", response.status()));
        }
        Ok(file_list.files.unwrap_or_default())
    }

    async fn create_file(&self, name: &str, content_type: &str, content: Bytes) -> StorageResult<File> {
        let mime_type: mime::Mime = content_type.parse().map_err(|e| {
            StorageError::InvalidRequest(format!("Invalid content type '{}': {}", content_type, e))
        })?;
        debug!("Drive files.create name=\"{}\" type={} size={}", name, mime_type, content.len());

        let metadata = File {
            name: Some(name.to_string()),
            ..Default::default()
        };
        let call = self
            .hub
            .files()
            .create(metadata)
            .param("fields", UPLOAD_FIELDS)
            .add_scope(&self.scope)
            .upload(upload_body(content), mime_type);

        let (response, file) = with_deadline(self.timeout, "Failed to upload file", call)
            .await?
            .map_err(|e| map_drive_error("Failed to upload file", e))?;

        if !response.status().is_success() {
            return Err(map_response_status("Failed to upload file", response.status()));
        }
        Ok(file)
    }
}
