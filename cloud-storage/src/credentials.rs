use crate::error::{StorageError, StorageResult};
use log::debug;
use std::path::Path;
use std::{env, fs};

/// Supplies the raw service-account key material for a provider.
///
/// Implementations are consulted on every hub construction, so a rotated
/// key file is picked up without restarting the process.
pub trait CredentialSource: Send + Sync {
    fn load(&self) -> StorageResult<String>;

    /// Human readable origin of the credential, safe to log.
    fn describe(&self) -> String;
}

/// Key material read from a file, or from an environment variable when no
/// file exists at `source`.
#[derive(Debug, Clone)]
pub struct KeyFileCredentials {
    source: String,
}

impl KeyFileCredentials {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

fn read_key_file(path: &Path) -> StorageResult<String> {
    fs::read_to_string(path).map_err(|e| {
        StorageError::CredentialUnavailable(format!(
            "Failed to read service account key file {}: {}",
            path.display(),
            e
        ))
    })
}

fn read_key_from_env(variable_name: &str) -> StorageResult<String> {
    env::var(variable_name).map_err(|e| {
        StorageError::CredentialUnavailable(format!(
            "Neither a key file at '{}' nor an environment variable with that name was found: {}",
            variable_name, e
        ))
    })
}

impl CredentialSource for KeyFileCredentials {
    fn load(&self) -> StorageResult<String> {
        let path = Path::new(&self.source);
        let secret = if path.exists() {
            debug!("Reading service account key from file {}", path.display());
            read_key_file(path)?
        } else {
            debug!("Reading service account key from environment variable {}", self.source);
            read_key_from_env(&self.source)?
        };

        if secret.trim().is_empty() {
            return Err(StorageError::CredentialUnavailable(format!(
                "Service account key from '{}' is empty",
                self.source
            )));
        }
        Ok(secret)
    }

    fn describe(&self) -> String {
        format!("key file or env var '{}'", self.source)
    }
}

/// Key material already held in memory.
#[derive(Clone)]
pub struct InlineCredentials(pub String);

impl CredentialSource for InlineCredentials {
    fn load(&self) -> StorageResult<String> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "inline service account key".to_string()
    }
}
