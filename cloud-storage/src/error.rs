use thiserror::Error;

/// Failure taxonomy shared by every storage gateway.
///
/// Provider SDK errors are translated into one of these variants at the
/// point of the remote call; nothing provider specific leaks past the
/// `StorageGateway` boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The credential resource is missing, unreadable or unparsable, or the
    /// provider refused the token it produced.
    #[error("Credential unavailable: {0}")]
    CredentialUnavailable(String),

    /// Transport failure or deadline expiry while talking to the provider.
    #[error("Provider unreachable: {0}")]
    ProviderUnreachable(String),

    /// The provider answered, but with a failure status or a payload we
    /// cannot use.
    #[error("Provider rejected the request: {0}")]
    ProviderRejected(String),

    /// The caller asked for something that cannot be served.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl StorageError {
    /// Stable identifier suitable for machine consumption.
    pub fn kind(&self) -> &'static str {
        match self {
            StorageError::CredentialUnavailable(_) => "credential_unavailable",
            StorageError::ProviderUnreachable(_) => "provider_unreachable",
            StorageError::ProviderRejected(_) => "provider_rejected",
            StorageError::InvalidRequest(_) => "invalid_request",
        }
    }

    pub fn is_auth_failure(&self) -> bool {
        matches!(self, StorageError::CredentialUnavailable(_))
    }
}

pub type StorageResult<T> = Result<T, StorageError>;
