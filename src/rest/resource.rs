//! Resource trait for read operations.
//!
//! This module defines the [`Resource`] trait, which gives every IGDB record
//! type the same five operations: `get()`, `list()`, `index()`, `count()` and
//! `fields()`. The operations share one executor,
//! [`IgdbClient`](crate::clients::IgdbClient); a resource only supplies its
//! name and endpoint.
//!
//! # Implementing a Resource
//!
//! 1. Define a struct with serde derives and all fields optional
//! 2. Implement the `Resource` trait with `NAME` and `ENDPOINT`
//!
//! # Example
//!
//! ```rust,ignore
//! use igdb::rest::{Endpoint, Resource};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Clone, Deserialize)]
//! pub struct Theme {
//!     pub id: Option<u64>,
//!     pub name: Option<String>,
//! }
//!
//! impl Resource for Theme {
//!     const NAME: &'static str = "Theme";
//!     const ENDPOINT: Endpoint = Endpoint::new("themes");
//! }
//!
//! // Usage:
//! let theme = Theme::get(&client, 18, &[set_fields(["name"])]).await?;
//! let themes = Theme::list(&client, &[18, 19], &[]).await?;
//! ```

use serde::de::DeserializeOwned;

use crate::clients::IgdbClient;
use crate::error::IgdbError;
use crate::query::QueryOption;
use crate::rest::{Endpoint, ResourceError, ResourceOperation};

/// An IGDB record type that can be fetched, listed, counted and described.
///
/// # Required Bounds
///
/// Resources must be deserializable and thread-safe.
#[allow(async_fn_in_trait)]
pub trait Resource: DeserializeOwned + Send + Sync + Sized {
    /// The type name of the resource (e.g., "Character").
    ///
    /// Used in error messages.
    const NAME: &'static str;

    /// The endpoint the resource is served from (e.g., `characters`).
    const ENDPOINT: Endpoint;

    /// Fetches a single record by ID.
    ///
    /// Returns the first record of the response.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] wrapping `NegativeId` for a negative ID,
    /// any option validation error, a transport error, `InvalidResponse` or
    /// `NoResults`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let icon = AchievementIcon::get(&client, 7346, &[set_fields(["url"])]).await?;
    /// ```
    async fn get(
        client: &IgdbClient,
        id: i64,
        options: &[QueryOption],
    ) -> Result<Self, ResourceError> {
        let records = client
            .fetch::<Self>(Self::ENDPOINT, ResourceOperation::Get, &[id], options)
            .await
            .map_err(wrap::<Self>(ResourceOperation::Get))?;

        records.into_iter().next().ok_or_else(|| {
            ResourceError::new(Self::NAME, ResourceOperation::Get, IgdbError::NoResults)
        })
    }

    /// Fetches the records with the given IDs.
    ///
    /// Records are returned in the order the server sent them.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] wrapping `EmptyIds` when `ids` is empty,
    /// `NegativeId` for the first negative ID, or any error [`Resource::get`]
    /// can return.
    async fn list(
        client: &IgdbClient,
        ids: &[i64],
        options: &[QueryOption],
    ) -> Result<Vec<Self>, ResourceError> {
        client
            .fetch(Self::ENDPOINT, ResourceOperation::List, ids, options)
            .await
            .map_err(wrap::<Self>(ResourceOperation::List))
    }

    /// Fetches a page of records, shaped by `options`.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] wrapping an option validation error, a
    /// transport error, `InvalidResponse` or `NoResults`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let pages = Page::index(&client, &[set_limit(5), set_offset(10)]).await?;
    /// ```
    async fn index(
        client: &IgdbClient,
        options: &[QueryOption],
    ) -> Result<Vec<Self>, ResourceError> {
        client
            .fetch(Self::ENDPOINT, ResourceOperation::Index, &[], options)
            .await
            .map_err(wrap::<Self>(ResourceOperation::Index))
    }

    /// Counts the records matching the filters and search in `options`.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] wrapping an option validation error, a
    /// transport error, `InvalidResponse`, or `NoResults` when the server
    /// answers with an empty array.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let popular = AchievementIcon::count(
    ///     &client,
    ///     &[set_filter("popularity", FilterOperator::GreaterThan, "75")],
    /// )
    /// .await?;
    /// ```
    async fn count(client: &IgdbClient, options: &[QueryOption]) -> Result<u64, ResourceError> {
        client
            .fetch_count(Self::ENDPOINT, options)
            .await
            .map_err(wrap::<Self>(ResourceOperation::Count))
    }

    /// Lists the field names that can be selected on this resource.
    ///
    /// Expanded sub-record fields use dotted paths (`logo.url`). An empty
    /// list is a valid answer.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] wrapping a transport error or
    /// `InvalidResponse`.
    async fn fields(client: &IgdbClient) -> Result<Vec<String>, ResourceError> {
        client
            .fetch_fields(Self::ENDPOINT)
            .await
            .map_err(wrap::<Self>(ResourceOperation::Fields))
    }
}

fn wrap<R: Resource>(operation: ResourceOperation) -> impl FnOnce(IgdbError) -> ResourceError {
    move |source| ResourceError::new(R::NAME, operation, source)
}
