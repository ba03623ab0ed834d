// src/store/credentials.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;
use tracing::warn;

/// LinkedIn login forwarded to the job-search proxy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Credentials count as set only when both fields are non-empty.
    pub fn is_set(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

/// Flat JSON file holding the LinkedIn credentials.
#[derive(Debug, Clone)]
pub struct CredentialsStore {
    path: PathBuf,
}

impl CredentialsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read credentials from disk; an absent or unparsable file yields empty
    /// credentials rather than an error.
    pub async fn load(&self) -> Credentials {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Credentials::default(),
            Err(e) => {
                warn!(
                    "Failed to read credentials file {}: {}",
                    self.path.display(),
                    e
                );
                return Credentials::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(credentials) => credentials,
            Err(e) => {
                warn!(
                    "Ignoring unparsable credentials file {}: {}",
                    self.path.display(),
                    e
                );
                Credentials::default()
            }
        }
    }

    pub async fn save(&self, credentials: &Credentials) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let body =
            serde_json::to_string_pretty(credentials).context("Failed to serialize credentials")?;
        fs::write(&self.path, body)
            .await
            .with_context(|| format!("Failed to write credentials file: {}", self.path.display()))
    }
}
