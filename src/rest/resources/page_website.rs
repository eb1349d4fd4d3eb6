//! Page website resource implementation.
//!
//! A page website is a link from a company or person page to an external
//! site (official homepage, social network, store).

use serde::{Deserialize, Serialize};

use crate::rest::{Endpoint, Resource};

/// A website linked from an IGDB page.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PageWebsite {
    /// The record ID.
    pub id: Option<u64>,

    /// The kind of website, as the wire integer (e.g., `1` for official).
    pub category: Option<u32>,

    /// Whether the link was verified.
    pub trusted: Option<bool>,

    /// The website address.
    pub url: Option<String>,
}

impl Resource for PageWebsite {
    const NAME: &'static str = "PageWebsite";
    const ENDPOINT: Endpoint = Endpoint::new("page_websites");
}
