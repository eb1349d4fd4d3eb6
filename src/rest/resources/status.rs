//! API status and usage report.
//!
//! # Example
//!
//! ```rust,ignore
//! use igdb::rest::resources::Status;
//!
//! let status = Status::fetch(&client).await?;
//! let usage = &status.usage_reports;
//! println!("{}/{} requests used", usage.current_value, usage.max_value);
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::IgdbClient;
use crate::error::IgdbError;
use crate::rest::{Endpoint, ResourceError, ResourceOperation};

/// Usage statistics of the API key for the current period.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UsageReport {
    /// The metric being reported (e.g., "requests").
    #[serde(default)]
    pub metric: String,
    /// The length of the period (e.g., "month").
    #[serde(default)]
    pub period: String,
    /// Start of the current period, as sent by the API.
    #[serde(default)]
    pub period_start: String,
    /// End of the current period, as sent by the API.
    #[serde(default)]
    pub period_end: String,
    /// Allowance for the period.
    #[serde(default)]
    pub max_value: u64,
    /// Usage so far in the period.
    #[serde(default)]
    pub current_value: u64,
}

/// Status of the API key along with its usage report.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Status {
    /// Whether the key is authorized.
    #[serde(default)]
    pub authorized: bool,
    /// The plan the key is subscribed to.
    #[serde(default)]
    pub plan: String,
    /// Usage statistics for the current period.
    #[serde(default)]
    pub usage_reports: UsageReport,
}

impl Status {
    /// The endpoint the status is served from.
    pub const ENDPOINT: Endpoint = Endpoint::new("api_status");

    /// Fetches the status of the client's API key.
    ///
    /// # Errors
    ///
    /// Returns a [`ResourceError`] wrapping a transport error,
    /// `InvalidResponse`, or `NoResults` when the server answers with an
    /// empty array.
    pub async fn fetch(client: &IgdbClient) -> Result<Self, ResourceError> {
        let wrap = |source| ResourceError::new("API status", ResourceOperation::Get, source);

        let statuses: Vec<Self> = client
            .fetch(Self::ENDPOINT, ResourceOperation::Index, &[], &[])
            .await
            .map_err(wrap)?;

        statuses
            .into_iter()
            .next()
            .ok_or_else(|| wrap(IgdbError::NoResults))
    }
}
