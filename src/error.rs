//! Error types for the IGDB client.
//!
//! This module contains the configuration error type and the classified
//! error taxonomy shared by every resource operation.
//!
//! # Error Handling
//!
//! Configuration constructors return `Result<T, ConfigError>` so that invalid
//! credentials are rejected at startup. Query composition and request
//! execution return [`IgdbError`], whose [`kind`](IgdbError::kind) can be
//! matched on without caring about the message details.
//!
//! # Example
//!
//! ```rust
//! use igdb::{ApiKey, ConfigError, ErrorKind, IgdbError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//!
//! let error = IgdbError::NegativeId { id: -1 };
//! assert_eq!(error.kind(), ErrorKind::NegativeId);
//! ```

use std::fmt;

use thiserror::Error;

use crate::clients::HttpError;

/// Errors that can occur during client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid IGDB user key.")]
    EmptyApiKey,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with an http or https scheme (e.g., 'https://api-v3.igdb.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

/// The classified outcome of a failed query composition or API call.
///
/// Validation variants (`NegativeId`, `EmptyIds`, `OutOfRange`,
/// `InvalidQuery`) are produced before any network traffic. The remaining
/// variants are produced after the request was sent.
#[derive(Debug, Error)]
pub enum IgdbError {
    /// A supplied ID is below zero.
    #[error("ID {id} is invalid, IDs cannot be negative")]
    NegativeId {
        /// The offending ID.
        id: i64,
    },

    /// A list call received no IDs.
    #[error("at least one ID must be provided")]
    EmptyIds,

    /// A bounded option received a value outside of its range.
    #[error("{option} value {value} is out of range, expected {min}..={max}")]
    OutOfRange {
        /// The option that was rejected (e.g., "limit").
        option: &'static str,
        /// The rejected value.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// The query is structurally malformed.
    #[error("invalid query: {reason}")]
    InvalidQuery {
        /// What is wrong with the query.
        reason: String,
    },

    /// The response body was empty or not JSON of the expected shape.
    #[error("invalid response: {reason}")]
    InvalidResponse {
        /// Why the body could not be decoded.
        reason: String,
    },

    /// The response decoded successfully but contained no results.
    #[error("results are empty")]
    NoResults,

    /// The request failed at the HTTP layer.
    #[error(transparent)]
    Transport(#[from] HttpError),
}

impl IgdbError {
    /// Returns the classified kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NegativeId { .. } => ErrorKind::NegativeId,
            Self::EmptyIds => ErrorKind::EmptyIds,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::InvalidQuery { .. } => ErrorKind::InvalidQuery,
            Self::InvalidResponse { .. } => ErrorKind::InvalidResponse,
            Self::NoResults => ErrorKind::NoResults,
            Self::Transport(_) => ErrorKind::Transport,
        }
    }

    /// Returns `true` if the error was raised before a request was sent.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NegativeId { .. }
                | Self::EmptyIds
                | Self::OutOfRange { .. }
                | Self::InvalidQuery { .. }
        )
    }

    pub(crate) fn invalid_query(reason: impl Into<String>) -> Self {
        Self::InvalidQuery {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_response(reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            reason: reason.into(),
        }
    }
}

/// Fieldless classification of an [`IgdbError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`IgdbError::NegativeId`].
    NegativeId,
    /// See [`IgdbError::EmptyIds`].
    EmptyIds,
    /// See [`IgdbError::OutOfRange`].
    OutOfRange,
    /// See [`IgdbError::InvalidQuery`].
    InvalidQuery,
    /// See [`IgdbError::InvalidResponse`].
    InvalidResponse,
    /// See [`IgdbError::NoResults`].
    NoResults,
    /// See [`IgdbError::Transport`].
    Transport,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NegativeId => "negative id",
            Self::EmptyIds => "empty ids",
            Self::OutOfRange => "out of range",
            Self::InvalidQuery => "invalid query",
            Self::InvalidResponse => "invalid response",
            Self::NoResults => "no results",
            Self::Transport => "transport",
        };
        f.write_str(name)
    }
}

// Verify IgdbError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<IgdbError>();
};
