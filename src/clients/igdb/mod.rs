//! IGDB API client.
//!
//! [`IgdbClient`] validates a call, composes its query, sends it through
//! [`HttpClient`](crate::clients::HttpClient) and classifies the response.
//! Resource types reach it through the [`Resource`](crate::rest::Resource)
//! trait.

mod client;

pub use client::IgdbClient;
