//! # IGDB API Rust Client
//!
//! A typed Rust client for the IGDB video game database API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`IgdbConfig`] and [`IgdbConfigBuilder`]
//! - Validated newtypes for the API key and base URL
//! - Composable, validated query options (fields, filters, order, limit, offset, search)
//! - The same five operations on every resource: `get`, `list`, `index`, `count`, `fields`
//! - A classified error taxonomy, reachable through [`ErrorKind`]
//! - The usage report of the API key via [`rest::resources::Status`]
//!
//! ## Quick Start
//!
//! ```rust
//! use igdb::{ApiKey, IgdbConfig};
//!
//! // Create configuration using the builder pattern
//! let config = IgdbConfig::builder()
//!     .api_key(ApiKey::new("your-user-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api-v3.igdb.com");
//! ```
//!
//! ## Querying Resources
//!
//! ```rust,ignore
//! use igdb::{ErrorKind, IgdbClient};
//! use igdb::query::{set_fields, set_filter, set_limit, set_order, Direction, FilterOperator};
//! use igdb::rest::Resource;
//! use igdb::rest::resources::{AchievementIcon, Character};
//!
//! let client = IgdbClient::new(&config)?;
//!
//! // A single record
//! let icon = AchievementIcon::get(&client, 7346, &[set_fields(["url"])]).await?;
//!
//! // Several records by ID
//! let characters = Character::list(&client, &[1, 2, 3], &[set_limit(3)]).await?;
//!
//! // Filtered, ordered browsing
//! let popular = Character::index(
//!     &client,
//!     &[
//!         set_filter("popularity", FilterOperator::GreaterThan, "75"),
//!         set_order("popularity", Direction::Desc),
//!         set_limit(10),
//!     ],
//! )
//! .await?;
//!
//! // Counting and introspection
//! let total = Character::count(&client, &[]).await?;
//! let fields = Character::fields(&client).await?;
//!
//! // Classified errors
//! match Character::get(&client, 0, &[]).await {
//!     Err(e) if e.kind() == ErrorKind::NoResults => println!("no such character"),
//!     other => println!("{other:?}"),
//! }
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events: `debug` for
//! every outgoing request and for bodies that fail to decode, `warn` for
//! non-2xx responses. Install a subscriber to see them.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: IDs and options are checked before any request is sent
//! - **Thread-safe**: The client and all options are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No retries**: Every failure is returned to the caller

pub mod clients;
pub mod config;
pub mod error;
pub mod query;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, BaseUrl, IgdbConfig, IgdbConfigBuilder};
pub use error::{ConfigError, ErrorKind, IgdbError};

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpRequest, HttpRequestBuilder, HttpResponse, HttpResponseError,
    IgdbClient, InvalidHttpRequestError,
};

// Re-export resource essentials
pub use query::QueryOption;
pub use rest::{Resource, ResourceError};
