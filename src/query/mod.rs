//! Query composition.
//!
//! A request is configured by a sequence of [`QueryOption`]s applied, in
//! order, to a fresh [`RequestConfig`]. Each option validates its input when
//! applied; the first failure aborts the whole composition and nothing is
//! sent.
//!
//! - Singleton settings (fields, order, limit, offset, search) are
//!   overwritten by later options.
//! - Filters accumulate and are combined with logical AND.
//!
//! # Example
//!
//! ```rust
//! use igdb::query::{
//!     set_fields, set_filter, set_limit, set_order, Direction, FilterOperator, RequestConfig,
//! };
//!
//! let config = RequestConfig::from_options(&[
//!     set_fields(["name", "logo.url"]),
//!     set_filter("popularity", FilterOperator::GreaterThan, "75"),
//!     set_order("popularity", Direction::Desc),
//!     set_limit(5),
//! ])
//! .unwrap();
//!
//! assert_eq!(config.fields(), ["name", "logo.url"]);
//! assert_eq!(config.limit(), 5);
//! assert_eq!(config.offset(), 0);
//!
//! assert!(RequestConfig::from_options(&[set_limit(51)]).is_err());
//! ```

mod filter;
mod options;

pub use filter::{FilterClause, FilterOperator};
pub use options::{set_fields, set_filter, set_limit, set_offset, set_order, set_search};

use std::fmt;
use std::str::FromStr;

use crate::error::IgdbError;

/// Selector returning every field of a record.
pub const WILDCARD: &str = "*";

/// Smallest accepted `limit`.
pub const MIN_LIMIT: i64 = 1;
/// Largest accepted `limit`.
pub const MAX_LIMIT: i64 = 50;
/// `limit` used when none is set.
pub const DEFAULT_LIMIT: u32 = 10;
/// Largest accepted `offset`.
pub const MAX_OFFSET: i64 = 9999;

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl Direction {
    /// Returns the wire form of the direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = IgdbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(IgdbError::invalid_query(format!(
                "unrecognized sort direction '{other}'"
            ))),
        }
    }
}

/// Sort order of the results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    /// The field to sort by.
    pub field: String,
    /// The sort direction.
    pub direction: Direction,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.direction)
    }
}

/// The composed configuration of a single outbound request.
///
/// Created through [`RequestConfig::from_options`] at the start of each call
/// and dropped when the call ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestConfig {
    fields: Vec<String>,
    filters: Vec<FilterClause>,
    order: Option<Order>,
    limit: Option<u32>,
    offset: Option<u32>,
    search: Option<String>,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            fields: vec![WILDCARD.to_string()],
            filters: Vec::new(),
            order: None,
            limit: None,
            offset: None,
            search: None,
        }
    }
}

impl RequestConfig {
    /// Applies `options` in order to a default configuration.
    ///
    /// # Errors
    ///
    /// Returns the error of the first option that fails validation.
    pub fn from_options(options: &[QueryOption]) -> Result<Self, IgdbError> {
        let mut config = Self::default();
        for option in options {
            option.apply(&mut config)?;
        }
        Ok(config)
    }

    /// Returns the selected fields.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns the filter clauses.
    #[must_use]
    pub fn filters(&self) -> &[FilterClause] {
        &self.filters
    }

    /// Returns the sort order, if set.
    #[must_use]
    pub const fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    /// Returns the effective limit.
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// Returns the effective offset.
    #[must_use]
    pub fn offset(&self) -> u32 {
        self.offset.unwrap_or(0)
    }

    /// Returns the search term, if set.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Returns the query parameters for a record-fetching request.
    ///
    /// Order is fixed: fields, filters, order, limit, offset, search. Unset
    /// options are omitted so the server applies its defaults.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("fields".to_string(), self.fields.join(","))];
        pairs.extend(self.filters.iter().map(FilterClause::to_query_pair));
        if let Some(order) = &self.order {
            pairs.push(("order".to_string(), order.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset".to_string(), offset.to_string()));
        }
        pairs.extend(self.search_pair());
        pairs
    }

    /// Returns the query parameters for a count request.
    ///
    /// Fields, order, limit and offset do not affect a count and are left out.
    #[must_use]
    pub fn count_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<_> = self.filters.iter().map(FilterClause::to_query_pair).collect();
        pairs.extend(self.search_pair());
        pairs
    }

    fn search_pair(&self) -> Option<(String, String)> {
        self.search
            .as_ref()
            .map(|term| ("search".to_string(), term.clone()))
    }
}

type ApplyFn = dyn Fn(&mut RequestConfig) -> Result<(), IgdbError> + Send + Sync;

/// A validated configuration step.
///
/// Options are reusable: the same option can be applied to any number of
/// configurations. Use the `set_*` constructors in this module, or
/// [`QueryOption::new`] for a custom step.
pub struct QueryOption(Box<ApplyFn>);

impl QueryOption {
    /// Wraps a custom configuration step.
    pub fn new<F>(apply: F) -> Self
    where
        F: Fn(&mut RequestConfig) -> Result<(), IgdbError> + Send + Sync + 'static,
    {
        Self(Box::new(apply))
    }

    /// Applies the option to `config`.
    ///
    /// # Errors
    ///
    /// Returns the validation error of the option. `config` is left as it
    /// was when the option fails.
    pub fn apply(&self, config: &mut RequestConfig) -> Result<(), IgdbError> {
        (self.0)(config)
    }
}

impl fmt::Debug for QueryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("QueryOption(..)")
    }
}
