//! Constructors for the built-in query options.

use crate::error::IgdbError;
use crate::query::{
    Direction, FilterClause, FilterOperator, Order, QueryOption, MAX_LIMIT, MAX_OFFSET, MIN_LIMIT,
};

/// Replaces the selected fields.
///
/// Accepts the wildcard `*` and dotted paths into expanded sub-records
/// (`logo.url`). Selectors are only checked syntactically; duplicates are
/// dropped, keeping the first occurrence.
///
/// Fails with `InvalidQuery` when no selector is given or a selector is blank.
pub fn set_fields<I, S>(fields: I) -> QueryOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let requested: Vec<String> = fields
        .into_iter()
        .map(|field| field.into().trim().to_string())
        .collect();

    QueryOption::new(move |config| {
        if requested.is_empty() {
            return Err(IgdbError::invalid_query("at least one field must be selected"));
        }

        let mut fields: Vec<String> = Vec::with_capacity(requested.len());
        for field in &requested {
            if field.is_empty() {
                return Err(IgdbError::invalid_query("field selectors cannot be empty"));
            }
            if !fields.contains(field) {
                fields.push(field.clone());
            }
        }

        config.fields = fields;
        Ok(())
    })
}

/// Appends a filter clause.
///
/// Fails with `InvalidQuery` when `field` or `value` is blank.
pub fn set_filter(
    field: impl Into<String>,
    operator: FilterOperator,
    value: impl Into<String>,
) -> QueryOption {
    let clause = FilterClause::new(field, operator, value).map_err(|err| invalid_reason(&err));

    QueryOption::new(move |config| {
        let clause = clause.clone().map_err(IgdbError::invalid_query)?;
        config.filters.push(clause);
        Ok(())
    })
}

/// Sets the maximum number of results.
///
/// Fails with `OutOfRange` unless `1 <= limit <= 50`.
#[must_use]
pub fn set_limit(limit: i64) -> QueryOption {
    QueryOption::new(move |config| {
        config.limit = Some(bounded("limit", limit, MIN_LIMIT, MAX_LIMIT)?);
        Ok(())
    })
}

/// Sets the number of results to skip.
///
/// Fails with `OutOfRange` unless `0 <= offset <= 9999`.
#[must_use]
pub fn set_offset(offset: i64) -> QueryOption {
    QueryOption::new(move |config| {
        config.offset = Some(bounded("offset", offset, 0, MAX_OFFSET)?);
        Ok(())
    })
}

/// Sets the sort order.
///
/// Fails with `InvalidQuery` when `field` is blank.
pub fn set_order(field: impl Into<String>, direction: Direction) -> QueryOption {
    let field = field.into().trim().to_string();

    QueryOption::new(move |config| {
        if field.is_empty() {
            return Err(IgdbError::invalid_query("order field cannot be empty"));
        }
        config.order = Some(Order {
            field: field.clone(),
            direction,
        });
        Ok(())
    })
}

/// Sets the free-text search term.
///
/// Fails with `InvalidQuery` when `term` is blank.
pub fn set_search(term: impl Into<String>) -> QueryOption {
    let term = term.into();

    QueryOption::new(move |config| {
        if term.trim().is_empty() {
            return Err(IgdbError::invalid_query("search term cannot be empty"));
        }
        config.search = Some(term.clone());
        Ok(())
    })
}

fn bounded(option: &'static str, value: i64, min: i64, max: i64) -> Result<u32, IgdbError> {
    if !(min..=max).contains(&value) {
        return Err(IgdbError::OutOfRange {
            option,
            value,
            min,
            max,
        });
    }
    u32::try_from(value).map_err(|_| IgdbError::OutOfRange {
        option,
        value,
        min,
        max,
    })
}

// Clause errors are always InvalidQuery; keep the reason for re-raising.
fn invalid_reason(err: &IgdbError) -> String {
    match err {
        IgdbError::InvalidQuery { reason } => reason.clone(),
        other => other.to_string(),
    }
}
