//! Storage configuration types.

use std::time::Duration;

use sky_shared::config::StorageSettings;
pub use sky_shared::config::StorageProvider;

/// Storage service configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Storage provider configuration.
    pub provider: StorageProvider,
    /// Base URL prepended to object names in returned links.
    pub public_base_url: Option<String>,
    /// Maximum file size in bytes.
    pub max_file_size: u64,
    /// Upper bound for a single storage call.
    pub timeout: Duration,
}

impl StorageConfig {
    /// Default max file size: 10MB.
    pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
    /// Default timeout: 5 seconds.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Create a new storage config with default settings.
    #[must_use]
    pub fn new(provider: StorageProvider) -> Self {
        Self {
            provider,
            public_base_url: None,
            max_file_size: Self::DEFAULT_MAX_FILE_SIZE,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Build from loaded application settings.
    #[must_use]
    pub fn from_settings(settings: &StorageSettings, timeout: Duration) -> Self {
        Self {
            provider: settings.provider.clone(),
            public_base_url: settings.public_base_url.clone(),
            max_file_size: settings.max_file_size,
            timeout,
        }
    }

    /// Set maximum file size.
    #[must_use]
    pub fn with_max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }

    /// Set the public base URL.
    #[must_use]
    pub fn with_public_base_url(mut self, url: impl Into<String>) -> Self {
        self.public_base_url = Some(url.into());
        self
    }

    /// Set the per-call timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Public URL of an object.
    ///
    /// Uses `public_base_url` when set, otherwise derives one from the provider.
    #[must_use]
    pub fn public_url(&self, object_name: &str) -> String {
        if let Some(base) = &self.public_base_url {
            return format!("{}/{object_name}", base.trim_end_matches('/'));
        }

        match &self.provider {
            StorageProvider::S3 {
                endpoint, bucket, ..
            } => format!("{}/{bucket}/{object_name}", endpoint.trim_end_matches('/')),
            StorageProvider::AzureBlob {
                account, container, ..
            } => format!("https://{account}.blob.core.windows.net/{container}/{object_name}"),
            StorageProvider::LocalFs { root } => {
                format!("file://{}/{object_name}", root.display())
            }
            StorageProvider::Memory => format!("memory:///{object_name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sky_shared::config::StorageSettings;

    #[test]
    fn test_storage_config_defaults() {
        let config = StorageConfig::new(StorageProvider::Memory);
        assert_eq!(config.max_file_size, StorageConfig::DEFAULT_MAX_FILE_SIZE);
        assert_eq!(config.timeout, StorageConfig::DEFAULT_TIMEOUT);
        assert!(config.public_base_url.is_none());
    }

    #[test]
    fn test_from_settings() {
        let settings = StorageSettings {
            provider: StorageProvider::Memory,
            public_base_url: Some("https://cdn.example.com".to_string()),
            max_file_size: 1024,
        };

        let config = StorageConfig::from_settings(&settings, Duration::from_secs(2));

        assert_eq!(config.provider, StorageProvider::Memory);
        assert_eq!(config.max_file_size, 1024);
        assert_eq!(config.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_public_url_prefers_base_url() {
        let config = StorageConfig::new(StorageProvider::Memory)
            .with_public_base_url("https://sky-take-out.oss-cn-beijing.aliyuncs.com/");
        assert_eq!(
            config.public_url("a.png"),
            "https://sky-take-out.oss-cn-beijing.aliyuncs.com/a.png"
        );
    }

    #[test]
    fn test_public_url_s3() {
        let config = StorageConfig::new(StorageProvider::S3 {
            endpoint: "https://oss-cn-beijing.aliyuncs.com".to_string(),
            bucket: "sky-take-out".to_string(),
            access_key_id: "ak".to_string(),
            secret_access_key: "sk".to_string(),
            region: "oss-cn-beijing".to_string(),
        });
        assert_eq!(
            config.public_url("a.png"),
            "https://oss-cn-beijing.aliyuncs.com/sky-take-out/a.png"
        );
    }

    #[test]
    fn test_public_url_azure() {
        let config = StorageConfig::new(StorageProvider::AzureBlob {
            account: "skydev".to_string(),
            access_key: "key".to_string(),
            container: "images".to_string(),
        });
        assert_eq!(
            config.public_url("a.png"),
            "https://skydev.blob.core.windows.net/images/a.png"
        );
    }

    #[test]
    fn test_public_url_memory() {
        let config = StorageConfig::new(StorageProvider::Memory);
        assert_eq!(config.public_url("a.png"), "memory:///a.png");
    }
}
