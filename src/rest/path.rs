//! Path building for resource requests.
//!
//! Every resource lives under a single [`Endpoint`]. The operation decides
//! what is appended to it:
//!
//! | Operation | Path |
//! |---|---|
//! | `Get`, `List` | `<endpoint>/<id>,<id>,...` |
//! | `Index` | `<endpoint>` |
//! | `Count` | `<endpoint>/count` |
//! | `Fields` | `<endpoint>/meta` |
//!
//! # Example
//!
//! ```rust
//! use igdb::rest::{build_path, Endpoint, ResourceOperation};
//!
//! const CHARACTERS: Endpoint = Endpoint::new("characters");
//!
//! assert_eq!(build_path(CHARACTERS, ResourceOperation::List, &[1, 2]), "characters/1,2");
//! assert_eq!(build_path(CHARACTERS, ResourceOperation::Count, &[]), "characters/count");
//! ```

use std::fmt;

use crate::error::IgdbError;

/// The path identifying a resource collection (e.g. `achievement_icons`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Endpoint(&'static str);

impl Endpoint {
    /// Creates an endpoint from its path segment.
    #[must_use]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    /// Returns the path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Operations that can be performed on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Fetch a single record by ID.
    Get,
    /// Fetch records for a list of IDs.
    List,
    /// Fetch a page of records.
    Index,
    /// Count records matching the filters.
    Count,
    /// List the queryable fields.
    Fields,
}

impl ResourceOperation {
    /// Returns `true` if the operation fails without at least one ID.
    #[must_use]
    pub const fn requires_ids(self) -> bool {
        matches!(self, Self::Get | Self::List)
    }
}

impl fmt::Display for ResourceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Get => "get",
            Self::List => "list",
            Self::Index => "index",
            Self::Count => "count",
            Self::Fields => "fields",
        };
        f.write_str(name)
    }
}

/// Checks the IDs supplied to `operation`.
///
/// # Errors
///
/// - [`IgdbError::EmptyIds`] if the operation needs IDs and none were given
/// - [`IgdbError::NegativeId`] for the first ID below zero
pub fn validate_ids(operation: ResourceOperation, ids: &[i64]) -> Result<(), IgdbError> {
    if operation.requires_ids() && ids.is_empty() {
        return Err(IgdbError::EmptyIds);
    }
    if let Some(&id) = ids.iter().find(|&&id| id < 0) {
        return Err(IgdbError::NegativeId { id });
    }
    Ok(())
}

/// Builds the request path for `operation` on `endpoint`.
///
/// IDs are only used by `Get` and `List`.
#[must_use]
pub fn build_path(endpoint: Endpoint, operation: ResourceOperation, ids: &[i64]) -> String {
    match operation {
        ResourceOperation::Get | ResourceOperation::List => {
            let ids = ids
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            format!("{endpoint}/{ids}")
        }
        ResourceOperation::Index => endpoint.to_string(),
        ResourceOperation::Count => format!("{endpoint}/count"),
        ResourceOperation::Fields => format!("{endpoint}/meta"),
    }
}
