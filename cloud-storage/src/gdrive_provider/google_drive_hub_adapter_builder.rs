use crate::credentials::CredentialSource;
use crate::error::{StorageError, StorageResult};
use crate::gdrive_provider::drive_hub_adapter::{DriveHubAdapter, HubFactory};
use crate::gdrive_provider::google_drive_hub_adapter::GoogleDriveHubAdapter;
use crate::gdrive_provider::google_drive_utils::{build_connection_client, create_auth_authenticator, parse_service_account_key, DRIVE_SCOPE};
use async_trait::async_trait;
use google_drive3::DriveHub;
use log::debug;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Assembles a [`GoogleDriveHubAdapter`] from a credential source.
///
/// The builder is reusable: as a [`HubFactory`] every `connect` reloads the
/// key and constructs a brand new client and authenticator.
pub struct GoogleDriveHubAdapterBuilder {
    credentials: Option<Arc<dyn CredentialSource>>,
    scope: String,
    timeout: Duration,
}

impl GoogleDriveHubAdapterBuilder {
    pub fn new() -> Self {
        GoogleDriveHubAdapterBuilder {
            credentials: None,
            scope: DRIVE_SCOPE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_scope(mut self, scope: String) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_credentials(mut self, credentials: Arc<dyn CredentialSource>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn build(&self) -> StorageResult<GoogleDriveHubAdapter> {
        let credentials = self.credentials.as_ref().ok_or_else(|| {
            StorageError::CredentialUnavailable("No credential source configured".to_string())
        })?;
        debug!("Building Drive hub from {}", credentials.describe());

        // Parse before touching the network stack so a bad key fails fast.
        let secret = parse_service_account_key(&credentials.load()?)?;
        let client = build_connection_client()?;
        let auth = create_auth_authenticator(secret).await?;
        let hub = DriveHub::new(client, auth);
        Ok(GoogleDriveHubAdapter::new(hub, self.scope.clone(), self.timeout))
    }
}

impl Default for GoogleDriveHubAdapterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HubFactory for GoogleDriveHubAdapterBuilder {
    async fn connect(&self) -> StorageResult<Arc<dyn DriveHubAdapter>> {
        Ok(Arc::new(self.build().await?))
    }
}
