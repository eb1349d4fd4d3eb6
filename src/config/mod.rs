//! Configuration types for the IGDB client.
//!
//! # Overview
//!
//! - [`IgdbConfig`]: The configuration struct holding all client settings
//! - [`IgdbConfigBuilder`]: A builder for constructing [`IgdbConfig`] instances
//! - [`ApiKey`]: A validated user key with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use igdb::{IgdbConfig, ApiKey, BaseUrl};
//!
//! let config = IgdbConfig::builder()
//!     .api_key(ApiKey::new("my-user-key").unwrap())
//!     .base_url(BaseUrl::new("https://api-v3.igdb.com").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl};

use crate::error::ConfigError;

/// Configuration for the IGDB client.
///
/// `IgdbConfig` is `Clone`, `Send`, and `Sync`, so a single configuration
/// can back any number of clients.
#[derive(Clone, Debug)]
pub struct IgdbConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
}

impl IgdbConfig {
    /// Creates a new builder for constructing an `IgdbConfig`.
    #[must_use]
    pub fn builder() -> IgdbConfigBuilder {
        IgdbConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify IgdbConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<IgdbConfig>();
};

/// Builder for constructing [`IgdbConfig`] instances.
///
/// `api_key` is required. `base_url` defaults to [`BaseUrl::DEFAULT`] and
/// `user_agent_prefix` to `None`.
#[derive(Debug, Default)]
pub struct IgdbConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl IgdbConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`IgdbConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<IgdbConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(IgdbConfig {
            api_key,
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let result = IgdbConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = IgdbConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "https://api-v3.igdb.com");
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = IgdbConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .base_url(BaseUrl::new("http://localhost:9999").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "http://localhost:9999");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.api_key().as_ref(), "key");
    }

    #[test]
    fn test_config_debug_does_not_leak_key() {
        let config = IgdbConfig::builder()
            .api_key(ApiKey::new("very-secret-key").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("IgdbConfig"));
        assert!(!debug_str.contains("very-secret-key"));
    }
}
