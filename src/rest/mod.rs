//! Resource infrastructure for the IGDB API.
//!
//! This module provides the foundation shared by every IGDB resource:
//!
//! - **[`Resource`] trait**: `get`, `list`, `index`, `count` and `fields`
//! - **Path building**: [`Endpoint`], [`ResourceOperation`], [`build_path`]
//! - **Response classification**: [`decode_records`], [`decode_count`], [`decode_fields`]
//! - **[`ResourceError`]**: A classified error with resource and operation context
//!
//! Individual resources (`Character`, `Page`, ...) live in the [`resources`]
//! submodule.
//!
//! # Example: Using a Resource
//!
//! ```rust,ignore
//! use igdb::{ApiKey, IgdbClient, IgdbConfig};
//! use igdb::query::{set_fields, set_filter, set_limit, FilterOperator};
//! use igdb::rest::Resource;
//! use igdb::rest::resources::Character;
//!
//! let config = IgdbConfig::builder()
//!     .api_key(ApiKey::new("my-user-key")?)
//!     .build()?;
//! let client = IgdbClient::new(&config)?;
//!
//! // Fetch a single character
//! let character = Character::get(&client, 1, &[set_fields(["name", "gender"])]).await?;
//!
//! // Fetch several characters
//! let characters = Character::list(&client, &[1, 2, 3], &[]).await?;
//!
//! // Browse with filters
//! let humans = Character::index(
//!     &client,
//!     &[set_filter("species", FilterOperator::Equals, "1"), set_limit(20)],
//! )
//! .await?;
//!
//! // Count and describe
//! let total = Character::count(&client, &[]).await?;
//! let fields = Character::fields(&client).await?;
//! ```

mod errors;
mod path;
mod resource;
mod response;

pub mod resources;

// Public exports
pub use errors::ResourceError;
pub use path::{build_path, validate_ids, Endpoint, ResourceOperation};
pub use resource::Resource;
pub use response::{decode_count, decode_fields, decode_records};
