//! Provider-agnostic access to cloud file storage.
//!
//! [`CloudStorageService`] dispatches to the [`StorageGateway`] registered
//! for a [`Provider`]. Google Drive is served by
//! [`gdrive_provider::google_drive_gateway::GoogleDriveGateway`].

pub mod credentials;
pub mod error;
pub mod gateway;
pub mod gdrive_provider;
pub mod provider;

pub use credentials::{CredentialSource, InlineCredentials, KeyFileCredentials};
pub use error::{StorageError, StorageResult};
pub use gateway::{FileCategory, FileEntry, StorageGateway, UploadReceipt, UploadRequest};
pub use provider::{CloudStorageService, Provider, ProviderRegistry};
