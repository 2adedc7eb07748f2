//! Storage service implementation using Apache OpenDAL.

use std::future::Future;

use bytes::Bytes;
use opendal::{Operator, services};
use tracing::{debug, info};
use uuid::Uuid;

use super::config::{StorageConfig, StorageProvider};
use super::error::StorageError;

/// Result of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Generated object name: random UUID plus the original extension.
    pub object_name: String,
    /// Public URL of the object.
    pub url: String,
    /// Size in bytes.
    pub size: u64,
}

/// Storage service for uploaded files.
pub struct StorageService {
    operator: Operator,
    config: StorageConfig,
}

impl std::fmt::Debug for StorageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageService")
            .field("provider", &self.config.provider.name())
            .field("max_file_size", &self.config.max_file_size)
            .finish_non_exhaustive()
    }
}

impl StorageService {
    /// Create a new storage service from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage provider cannot be initialized.
    pub fn from_config(config: StorageConfig) -> Result<Self, StorageError> {
        let operator = Self::create_operator(&config.provider)?;
        Ok(Self { operator, config })
    }

    /// Create OpenDAL operator from provider config.
    fn create_operator(provider: &StorageProvider) -> Result<Operator, StorageError> {
        match provider {
            StorageProvider::S3 {
                endpoint,
                bucket,
                access_key_id,
                secret_access_key,
                region,
            } => finish(
                services::S3::default()
                    .endpoint(endpoint)
                    .bucket(bucket)
                    .access_key_id(access_key_id)
                    .secret_access_key(secret_access_key)
                    .region(region),
            ),
            StorageProvider::AzureBlob {
                account,
                access_key,
                container,
            } => finish(
                services::Azblob::default()
                    .account_name(account)
                    .account_key(access_key)
                    .container(container),
            ),
            StorageProvider::LocalFs { root } => finish(
                services::Fs::default().root(
                    root.to_str()
                        .ok_or_else(|| StorageError::configuration("invalid path"))?,
                ),
            ),
            StorageProvider::Memory => finish(services::Memory::default()),
        }
    }

    /// Reject files over the configured size limit.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::FileTooLarge` if `size` exceeds the limit.
    pub fn validate_size(&self, size: u64) -> Result<(), StorageError> {
        if size > self.config.max_file_size {
            return Err(StorageError::file_too_large(
                size,
                self.config.max_file_size,
            ));
        }
        Ok(())
    }

    /// Store `data` under a fresh random name that keeps the extension of
    /// `original_filename`, and return its public URL.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `original_filename` has no extension
    /// - the file exceeds the size limit
    /// - the write fails or times out
    pub async fn upload(
        &self,
        data: Bytes,
        original_filename: &str,
    ) -> Result<StoredObject, StorageError> {
        let object_name = object_name_for(original_filename)?;
        let size = data.len() as u64;
        self.validate_size(size)?;

        debug!(object_name = %object_name, size, "writing object");
        self.bounded(self.operator.write(&object_name, data))
            .await?
            .map_err(StorageError::from)?;

        let url = self.config.public_url(&object_name);
        info!(
            provider = self.provider_name(),
            object_name = %object_name,
            size,
            "object stored"
        );

        Ok(StoredObject {
            object_name,
            url,
            size,
        })
    }

    /// Read an object back.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist or cannot be read.
    pub async fn read(&self, object_name: &str) -> Result<Bytes, StorageError> {
        let buffer = self
            .bounded(self.operator.read(object_name))
            .await?
            .map_err(StorageError::from)?;
        Ok(buffer.to_bytes())
    }

    /// Get the storage provider name.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.config.provider.name()
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    async fn bounded<F: Future>(&self, fut: F) -> Result<F::Output, StorageError> {
        tokio::time::timeout(self.config.timeout, fut)
            .await
            .map_err(|_| StorageError::Timeout {
                secs: self.config.timeout.as_secs(),
            })
    }
}

fn finish<B: opendal::Builder>(builder: B) -> Result<Operator, StorageError> {
    Ok(Operator::new(builder)
        .map_err(|e| StorageError::configuration(e.to_string()))?
        .finish())
}

/// Extension of `filename`, from the last `.` inclusive.
///
/// `"photo.final.PNG"` yields `".PNG"`; a name with no `.` yields `None`.
#[must_use]
pub fn extension_of(filename: &str) -> Option<&str> {
    filename.rfind('.').map(|idx| &filename[idx..])
}

/// Random object name carrying the extension of `original_filename`.
///
/// # Errors
///
/// Returns `StorageError::MissingExtension` if the filename has no `.`.
pub fn object_name_for(original_filename: &str) -> Result<String, StorageError> {
    let extension = extension_of(original_filename)
        .ok_or_else(|| StorageError::missing_extension(original_filename))?;
    Ok(format!("{}{extension}", Uuid::new_v4()))
}
