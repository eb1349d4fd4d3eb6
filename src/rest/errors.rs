//! Resource-level error type.
//!
//! Every resource operation reports failures as a [`ResourceError`]: the
//! classified [`IgdbError`] plus the resource and operation that produced it.
//! The classification stays reachable through [`ResourceError::kind`],
//! [`ResourceError::inner`] and `std::error::Error::source`.
//!
//! # Example
//!
//! ```rust,ignore
//! use igdb::ErrorKind;
//! use igdb::rest::Resource;
//!
//! match AchievementIcon::get(&client, 7346, &[]).await {
//!     Ok(icon) => println!("Found: {:?}", icon.url),
//!     Err(e) if e.kind() == ErrorKind::NoResults => println!("No such icon"),
//!     Err(e) => println!("{} failed: {}", e.operation, e),
//! }
//! ```

use thiserror::Error;

use crate::error::{ErrorKind, IgdbError};
use crate::rest::ResourceOperation;

/// Error type for resource operations.
///
/// # Example
///
/// ```rust
/// use igdb::{ErrorKind, IgdbError};
/// use igdb::rest::{ResourceError, ResourceOperation};
///
/// let error = ResourceError::new("Character", ResourceOperation::List, IgdbError::EmptyIds);
/// assert_eq!(error.kind(), ErrorKind::EmptyIds);
/// assert_eq!(
///     error.to_string(),
///     "cannot list Character: at least one ID must be provided"
/// );
/// ```
#[derive(Debug, Error)]
#[error("cannot {operation} {resource}: {source}")]
pub struct ResourceError {
    /// The type name of the resource (e.g., "Character").
    pub resource: &'static str,
    /// The operation being attempted.
    pub operation: ResourceOperation,
    #[source]
    source: IgdbError,
}

impl ResourceError {
    /// Wraps `source` with the resource and operation it came from.
    #[must_use]
    pub const fn new(
        resource: &'static str,
        operation: ResourceOperation,
        source: IgdbError,
    ) -> Self {
        Self {
            resource,
            operation,
            source,
        }
    }

    /// Returns the classified kind of the underlying error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.source.kind()
    }

    /// Returns the underlying classified error.
    #[must_use]
    pub const fn inner(&self) -> &IgdbError {
        &self.source
    }

    /// Consumes the wrapper and returns the underlying classified error.
    #[must_use]
    pub fn into_inner(self) -> IgdbError {
        self.source
    }

    /// Returns the request ID of a failed HTTP response, if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match &self.source {
            IgdbError::Transport(crate::clients::HttpError::Response(e)) => {
                e.error_reference.as_deref()
            }
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpError, HttpResponseError};
    use std::error::Error as _;

    #[test]
    fn test_message_includes_context_and_cause() {
        let error = ResourceError::new(
            "AchievementIcon",
            ResourceOperation::Get,
            IgdbError::NegativeId { id: -1 },
        );
        let message = error.to_string();

        assert!(message.contains("get"));
        assert!(message.contains("AchievementIcon"));
        assert!(message.contains("-1"));
    }

    #[test]
    fn test_wrapping_preserves_kind() {
        let error = ResourceError::new("Page", ResourceOperation::Index, IgdbError::NoResults);
        assert_eq!(error.kind(), ErrorKind::NoResults);
        assert!(matches!(error.inner(), IgdbError::NoResults));
        assert!(matches!(error.into_inner(), IgdbError::NoResults));
    }

    #[test]
    fn test_source_chain_reaches_inner_error() {
        let error = ResourceError::new("Page", ResourceOperation::Count, IgdbError::EmptyIds);
        let source = error.source().unwrap();
        let inner = source.downcast_ref::<IgdbError>().unwrap();
        assert_eq!(inner.kind(), ErrorKind::EmptyIds);
    }

    #[test]
    fn test_request_id_extraction() {
        let error = ResourceError::new(
            "Character",
            ResourceOperation::Get,
            IgdbError::Transport(HttpError::Response(HttpResponseError {
                code: 500,
                message: "Internal Server Error".to_string(),
                error_reference: Some("req-abc".to_string()),
            })),
        );
        assert_eq!(error.kind(), ErrorKind::Transport);
        assert_eq!(error.request_id(), Some("req-abc"));

        let error = ResourceError::new("Character", ResourceOperation::Get, IgdbError::NoResults);
        assert_eq!(error.request_id(), None);
    }
}
