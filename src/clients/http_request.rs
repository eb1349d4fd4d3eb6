//! HTTP request type and its builder.
//!
//! Every call the client makes is a `GET`, so a request is just a relative
//! path plus an ordered list of query parameters. Parameter order is kept
//! so that the same request always produces the same URL.

use crate::clients::errors::InvalidHttpRequestError;

/// A `GET` request to be sent to the API.
///
/// # Example
///
/// ```rust
/// use igdb::clients::HttpRequest;
///
/// let request = HttpRequest::builder("achievement_icons/1,2")
///     .query_param("fields", "*")
///     .query_param("limit", "5")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     request.url("https://api-v3.igdb.com"),
///     "https://api-v3.igdb.com/achievement_icons/1,2?fields=%2A&limit=5"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The path (relative to the base URL) for this request.
    pub path: String,
    /// Query parameters in the order they will be sent.
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the path is empty, starts with
    /// `/`, or contains a `?`.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.path.is_empty() {
            return Err(InvalidHttpRequestError::EmptyPath);
        }
        if self.path.starts_with('/') || self.path.contains('?') {
            return Err(InvalidHttpRequestError::InvalidPath {
                path: self.path.clone(),
            });
        }
        Ok(())
    }

    /// Returns the percent-encoded query string, without the leading `?`.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Returns the full URL for this request under `base_url`.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        let query = self.query_string();
        if query.is_empty() {
            format!("{base_url}/{}", self.path)
        } else {
            format!("{base_url}/{}?{query}", self.path)
        }
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    path: String,
    query: Vec<(String, String)>,
}

impl HttpRequestBuilder {
    fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Appends all query parameters, keeping their order.
    #[must_use]
    pub fn query(mut self, query: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(query);
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            path: self.path,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_creates_valid_request() {
        let request = HttpRequest::builder("characters").build().unwrap();

        assert_eq!(request.path, "characters");
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_verify_rejects_empty_path() {
        let result = HttpRequest::builder("").build();
        assert_eq!(result, Err(InvalidHttpRequestError::EmptyPath));
    }

    #[test]
    fn test_verify_rejects_absolute_path_and_inline_query() {
        assert!(matches!(
            HttpRequest::builder("/characters").build(),
            Err(InvalidHttpRequestError::InvalidPath { .. })
        ));
        assert!(matches!(
            HttpRequest::builder("characters?fields=*").build(),
            Err(InvalidHttpRequestError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_query_keeps_insertion_order() {
        let request = HttpRequest::builder("pages")
            .query_param("limit", "5")
            .query_param("fields", "name")
            .build()
            .unwrap();

        assert_eq!(request.query_string(), "limit=5&fields=name");
    }

    #[test]
    fn test_query_string_percent_encodes_keys_and_values() {
        let request = HttpRequest::builder("characters")
            .query_param("filter[name][eq]", "Mario & Luigi")
            .build()
            .unwrap();

        assert_eq!(
            request.query_string(),
            "filter%5Bname%5D%5Beq%5D=Mario%20%26%20Luigi"
        );
    }

    #[test]
    fn test_url_without_query_has_no_question_mark() {
        let request = HttpRequest::builder("pages/meta").build().unwrap();
        assert_eq!(
            request.url("http://localhost:1234"),
            "http://localhost:1234/pages/meta"
        );
    }
}
