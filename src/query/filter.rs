//! Filter clauses.

use std::fmt;
use std::str::FromStr;

use crate::error::IgdbError;

/// Comparison operator of a [`FilterClause`].
///
/// Parses from the symbolic form (`=`, `!=`, `>`, `>=`, `<`, `<=`, `in`,
/// `not-in`, `has`, `exists`, `not-exists`) and is sent using its wire token.
///
/// # Example
///
/// ```rust
/// use igdb::query::FilterOperator;
///
/// let op: FilterOperator = ">=".parse().unwrap();
/// assert_eq!(op, FilterOperator::GreaterThanOrEqual);
/// assert_eq!(op.as_wire(), "gte");
/// assert!("~=".parse::<FilterOperator>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    /// `=`
    Equals,
    /// `!=`
    NotEquals,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanOrEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessThanOrEqual,
    /// Value is one of a comma-separated list.
    In,
    /// Value is none of a comma-separated list.
    NotIn,
    /// Array field contains the value.
    Has,
    /// Field is present.
    Exists,
    /// Field is absent.
    NotExists,
}

impl FilterOperator {
    /// All operators, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Equals,
        Self::NotEquals,
        Self::GreaterThan,
        Self::GreaterThanOrEqual,
        Self::LessThan,
        Self::LessThanOrEqual,
        Self::In,
        Self::NotIn,
        Self::Has,
        Self::Exists,
        Self::NotExists,
    ];

    /// Returns the symbolic form of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equals => "=",
            Self::NotEquals => "!=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::In => "in",
            Self::NotIn => "not-in",
            Self::Has => "has",
            Self::Exists => "exists",
            Self::NotExists => "not-exists",
        }
    }

    /// Returns the token used inside `filter[<field>][<token>]`.
    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::Equals => "eq",
            Self::NotEquals => "not_eq",
            Self::GreaterThan => "gt",
            Self::GreaterThanOrEqual => "gte",
            Self::LessThan => "lt",
            Self::LessThanOrEqual => "lte",
            Self::In => "in",
            Self::NotIn => "not_in",
            Self::Has => "has",
            Self::Exists => "exists",
            Self::NotExists => "not_exists",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for FilterOperator {
    type Err = IgdbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| IgdbError::invalid_query(format!("unrecognized filter operator '{s}'")))
    }
}

/// A single `field operator value` predicate.
///
/// Clauses in a request are combined with logical AND.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterClause {
    field: String,
    operator: FilterOperator,
    value: String,
}

impl FilterClause {
    /// Creates a new clause.
    ///
    /// # Errors
    ///
    /// Returns [`IgdbError::InvalidQuery`] if `field` or `value` is blank.
    pub fn new(
        field: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<String>,
    ) -> Result<Self, IgdbError> {
        let field = field.into().trim().to_string();
        let value = value.into();

        if field.is_empty() {
            return Err(IgdbError::invalid_query("filter field cannot be empty"));
        }
        if value.trim().is_empty() {
            return Err(IgdbError::invalid_query(format!(
                "filter value for '{field}' cannot be empty"
            )));
        }

        Ok(Self {
            field,
            operator,
            value,
        })
    }

    /// Returns the filtered field.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the operator.
    #[must_use]
    pub const fn operator(&self) -> FilterOperator {
        self.operator
    }

    /// Returns the compared value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the query parameter key and value for this clause.
    #[must_use]
    pub fn to_query_pair(&self) -> (String, String) {
        (
            format!("filter[{}][{}]", self.field, self.operator.as_wire()),
            self.value.clone(),
        )
    }
}
