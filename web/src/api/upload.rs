use actix_multipart::Multipart;
use bytes::BytesMut;
use futures::StreamExt;
use log::{debug, warn};
use storeit_cloud_storage::{StorageError, UploadRequest};

/// Name of the multipart part carrying the file.
pub const FILE_FIELD: &str = "file";

/// Largest `file` part accepted unless configured otherwise: 100 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

fn malformed(error: impl std::fmt::Display) -> StorageError {
    StorageError::InvalidRequest(format!("Failed to parse multipart data: {}", error))
}

/// Buffers the `file` part of a multipart body. Other parts are skipped.
///
/// Reading stops as soon as the part grows past `max_bytes`.
pub async fn read_upload_request(mut payload: Multipart, max_bytes: usize) -> Result<UploadRequest, StorageError> {
    while let Some(field) = payload.next().await {
        let mut field = field.map_err(malformed)?;
        if field.name() != Some(FILE_FIELD) {
            debug!("Skipping multipart part {:?}", field.name());
            continue;
        }

        let file_name = field
            .content_disposition()
            .and_then(|disposition| disposition.get_filename())
            .unwrap_or_default()
            .to_string();
        let content_type = field.content_type().map(|mime| mime.to_string());

        let mut content = BytesMut::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(malformed)?;
            if content.len() + chunk.len() > max_bytes {
                warn!("Upload '{}' exceeds the limit of {} bytes, aborting", file_name, max_bytes);
                return Err(StorageError::InvalidRequest(format!(
                    "File exceeds the maximum upload size of {} bytes",
                    max_bytes
                )));
            }
            content.extend_from_slice(&chunk);
        }
        return UploadRequest::new(file_name, content_type.as_deref(), content.freeze());
    }

    Err(StorageError::InvalidRequest(format!(
        "Multipart body has no '{}' part",
        FILE_FIELD
    )))
}
