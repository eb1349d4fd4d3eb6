//! Request executor for the IGDB API.
//!
//! This module provides the [`IgdbClient`] type. Every resource operation
//! funnels through it: IDs and options are validated first, then a single
//! `GET` is sent and the body is classified.

use serde::de::DeserializeOwned;

use crate::clients::{HttpClient, HttpError, HttpRequest};
use crate::config::IgdbConfig;
use crate::error::IgdbError;
use crate::query::{QueryOption, RequestConfig};
use crate::rest::{
    build_path, decode_count, decode_fields, decode_records, validate_ids, Endpoint,
    ResourceOperation,
};

/// Client for the IGDB API.
///
/// Holds the credentials and the HTTP transport. A client is immutable once
/// created and can be shared between tasks; each call builds its own
/// [`RequestConfig`], so concurrent calls never observe each other's options.
///
/// # Thread Safety
///
/// `IgdbClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use igdb::{ApiKey, IgdbClient, IgdbConfig};
/// use igdb::query::set_limit;
/// use igdb::rest::{Endpoint, ResourceOperation};
///
/// let config = IgdbConfig::builder()
///     .api_key(ApiKey::new("my-user-key")?)
///     .build()?;
/// let client = IgdbClient::new(&config)?;
///
/// let icons: Vec<serde_json::Value> = client
///     .fetch(Endpoint::new("achievement_icons"), ResourceOperation::Index, &[], &[set_limit(5)])
///     .await?;
/// ```
#[derive(Debug)]
pub struct IgdbClient {
    http_client: HttpClient,
}

// Verify IgdbClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<IgdbClient>();
};

impl IgdbClient {
    /// Creates a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IgdbError::Transport`] if the HTTP client cannot be created.
    pub fn new(config: &IgdbConfig) -> Result<Self, IgdbError> {
        let http_client = HttpClient::new(config)?;
        Ok(Self { http_client })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.http_client.base_url()
    }

    /// Fetches records for `Get`, `List` or `Index`.
    ///
    /// Records are returned in the order the server sent them.
    ///
    /// # Errors
    ///
    /// - [`IgdbError::NegativeId`], [`IgdbError::EmptyIds`] for bad IDs
    /// - [`IgdbError::OutOfRange`], [`IgdbError::InvalidQuery`] for bad options
    /// - [`IgdbError::Transport`] if the request fails
    /// - [`IgdbError::InvalidResponse`] if the body cannot be decoded
    /// - [`IgdbError::NoResults`] if the server returned an empty array
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        operation: ResourceOperation,
        ids: &[i64],
        options: &[QueryOption],
    ) -> Result<Vec<T>, IgdbError> {
        validate_ids(operation, ids)?;
        let config = RequestConfig::from_options(options)?;

        let path = build_path(endpoint, operation, ids);
        let body = self.send(path, config.query_pairs()).await?;

        decode_records(&body)
    }

    /// Counts the records matching the filters and search of `options`.
    ///
    /// Every option is still validated, but only filters and search are sent.
    ///
    /// # Errors
    ///
    /// - [`IgdbError::OutOfRange`], [`IgdbError::InvalidQuery`] for bad options
    /// - [`IgdbError::Transport`] if the request fails
    /// - [`IgdbError::InvalidResponse`] if the body is not a count object
    /// - [`IgdbError::NoResults`] if the server returned an empty array
    pub async fn fetch_count(
        &self,
        endpoint: Endpoint,
        options: &[QueryOption],
    ) -> Result<u64, IgdbError> {
        let config = RequestConfig::from_options(options)?;

        let path = build_path(endpoint, ResourceOperation::Count, &[]);
        let body = self.send(path, config.count_query_pairs()).await?;

        decode_count(&body)
    }

    /// Lists the field names that can be selected on `endpoint`.
    ///
    /// An empty array is returned as an empty `Vec`.
    ///
    /// # Errors
    ///
    /// - [`IgdbError::Transport`] if the request fails
    /// - [`IgdbError::InvalidResponse`] if the body is not an array of strings
    pub async fn fetch_fields(&self, endpoint: Endpoint) -> Result<Vec<String>, IgdbError> {
        let path = build_path(endpoint, ResourceOperation::Fields, &[]);
        let body = self.send(path, Vec::new()).await?;

        decode_fields(&body)
    }

    async fn send(&self, path: String, query: Vec<(String, String)>) -> Result<String, IgdbError> {
        let request = HttpRequest::builder(path)
            .query(query)
            .build()
            .map_err(HttpError::from)?;
        let response = self.http_client.request(request).await?;
        Ok(response.body)
    }
}
