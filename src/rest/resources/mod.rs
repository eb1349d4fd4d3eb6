//! IGDB resource implementations.
//!
//! Each resource is a plain serde struct implementing
//! [`Resource`](crate::rest::Resource). All record fields are optional
//! because the API only returns the fields selected for the request, and
//! unknown fields are ignored.
//!
//! # Available Resources
//!
//! | Resource | Endpoint |
//! |---|---|
//! | [`AchievementIcon`] | `achievement_icons` |
//! | [`Character`] | `characters` |
//! | [`Page`] | `pages` |
//! | [`PageWebsite`] | `page_websites` |
//!
//! [`Status`] is not a resource: it has a single `fetch` call returning the
//! usage report of the API key.
//!
//! # Example
//!
//! ```rust,ignore
//! use igdb::query::{set_filter, FilterOperator};
//! use igdb::rest::Resource;
//! use igdb::rest::resources::{Character, CharacterGender};
//!
//! let count = Character::count(
//!     &client,
//!     &[set_filter("gender", FilterOperator::Equals, CharacterGender::Female.code().to_string())],
//! )
//! .await?;
//! ```

mod achievement_icon;
mod character;
mod common;
mod page;
mod page_website;
mod status;

pub use achievement_icon::AchievementIcon;
pub use character::{Character, CharacterGender, CharacterSpecies};
pub use common::Image;
pub use page::Page;
pub use page_website::PageWebsite;
pub use status::{Status, UsageReport};
