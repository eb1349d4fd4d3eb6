//! HTTP client types for IGDB API communication.
//!
//! This module provides the transport layer and the request executor:
//!
//! - [`HttpClient`]: The async HTTP client that sends authenticated `GET`s
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response received from the API
//! - [`HttpError`]: Transport failures and non-2xx responses
//! - [`IgdbClient`]: Validates, sends and classifies resource calls
//!
//! # Example
//!
//! ```rust,ignore
//! use igdb::{ApiKey, HttpClient, HttpRequest, IgdbConfig};
//!
//! let config = IgdbConfig::builder()
//!     .api_key(ApiKey::new("my-user-key")?)
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder("characters/count")
//!     .query_param("filter[gender][eq]", "1")
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! println!("{}", response.body);
//! ```
//!
//! # Retry Behavior
//!
//! Requests are never retried. Each failure is returned to the caller.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod igdb;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, API_KEY_HEADER, CLIENT_VERSION};
pub use http_request::{HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use igdb::IgdbClient;
