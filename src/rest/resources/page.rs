//! Page resource implementation.
//!
//! This module provides the Page resource, the IGDB profile of a company,
//! person or platform, along with its social links.
//!
//! # Example
//!
//! ```rust,ignore
//! use igdb::query::{set_fields, set_limit, set_search};
//! use igdb::rest::Resource;
//! use igdb::rest::resources::Page;
//!
//! // Find a single page
//! let page = Page::get(&client, 55, &[]).await?;
//! println!("Page: {}", page.name.as_deref().unwrap_or(""));
//!
//! // Search pages
//! let pages = Page::index(&client, &[set_search("nintendo"), set_limit(5)]).await?;
//!
//! // Count pages
//! let count = Page::count(&client, &[]).await?;
//! println!("Total pages: {}", count);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::{Endpoint, Resource};

/// An IGDB page.
///
/// # Fields
///
/// Record references (`background`, `company`, `game`, `platform`,
/// `websites`) hold IDs unless expanded with a dotted selector such as
/// `websites.url`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Page {
    /// The record ID.
    pub id: Option<u64>,

    /// ID of the background image.
    pub background: Option<u64>,

    /// Battle.net handle.
    pub battlenet: Option<String>,

    /// Page theme color, as the wire integer.
    pub color: Option<u32>,

    /// ID of the company the page belongs to.
    pub company: Option<u64>,

    /// ISO 3166-1 country code.
    pub country: Option<u32>,

    /// When the record was created.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,

    /// Free-text description.
    pub description: Option<String>,

    /// Facebook handle.
    pub facebook: Option<String>,

    /// ID of the game the page belongs to.
    pub game: Option<u64>,

    /// Instagram handle.
    pub instagram: Option<String>,

    /// The page name.
    pub name: Option<String>,

    /// Number of users following the page.
    pub page_follows_count: Option<u64>,

    /// The kind of page, as the wire integer.
    pub page_type: Option<u32>,

    /// ID of the platform the page belongs to.
    pub platform: Option<u64>,

    /// PlayStation Network handle.
    pub playstation: Option<String>,

    /// URL-safe unique name.
    pub slug: Option<String>,

    /// Page subtype, as the wire integer.
    pub sub_type: Option<u32>,

    /// Twitch handle.
    pub twitch: Option<String>,

    /// Twitter handle.
    pub twitter: Option<String>,

    /// When the record was last updated.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub updated_at: Option<DateTime<Utc>>,

    /// The IGDB website address of the page.
    pub url: Option<String>,

    /// IDs of the linked [`PageWebsite`](super::PageWebsite) records.
    pub websites: Option<Vec<u64>>,

    /// Xbox Live handle.
    pub xbox: Option<String>,

    /// YouTube handle.
    pub youtube: Option<String>,
}

impl Resource for Page {
    const NAME: &'static str = "Page";
    const ENDPOINT: Endpoint = Endpoint::new("pages");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_page_deserialization() {
        let json = r#"{
            "id": 55,
            "name": "Nintendo",
            "slug": "nintendo",
            "company": 70,
            "created_at": 1500000000,
            "twitter": "NintendoAmerica",
            "websites": [777777, 777778],
            "unknown_future_field": {"nested": true}
        }"#;

        let page: Page = serde_json::from_str(json).unwrap();

        assert_eq!(page.id, Some(55));
        assert_eq!(page.name.as_deref(), Some("Nintendo"));
        assert_eq!(page.company, Some(70));
        assert_eq!(page.websites, Some(vec![777_777, 777_778]));
        assert_eq!(
            page.created_at,
            Some(Utc.timestamp_opt(1_500_000_000, 0).unwrap())
        );
        assert!(page.updated_at.is_none());
    }

    #[test]
    fn test_page_endpoint() {
        assert_eq!(Page::ENDPOINT.as_str(), "pages");
    }
}
