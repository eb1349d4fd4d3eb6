//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated IGDB user key.
///
/// This newtype ensures the key is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use igdb::ApiKey;
///
/// let key = ApiKey::new("my-user-key").unwrap();
/// assert_eq!(key.as_ref(), "my-user-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key.to_string()))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated base URL for the API.
///
/// The URL must use the `http` or `https` scheme and have a host. Trailing
/// slashes are removed so paths can be appended with a single `/`.
///
/// # Example
///
/// ```rust
/// use igdb::BaseUrl;
///
/// let url = BaseUrl::new("https://api-v3.igdb.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api-v3.igdb.com");
///
/// assert!(BaseUrl::new("api-v3.igdb.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// The production IGDB endpoint.
    pub const DEFAULT: &'static str = "https://api-v3.igdb.com";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the scheme is missing or
    /// not `http`/`https`, or if the host is empty.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));

        match host {
            Some(host) if !host.is_empty() && !host.starts_with('/') => {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(ConfigError::InvalidBaseUrl { url }),
        }
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
