//! Types shared by several resources.

use serde::{Deserialize, Serialize};

/// An image hosted by IGDB.
///
/// `url` points at the default thumbnail size; other sizes are reachable
/// through `image_id`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Image {
    /// The record ID.
    pub id: Option<u64>,

    /// Whether the image has an alpha channel.
    pub alpha_channel: Option<bool>,

    /// Whether the image is animated.
    pub animated: Option<bool>,

    /// Height in pixels.
    pub height: Option<u32>,

    /// The ID used to build image URLs of other sizes.
    pub image_id: Option<String>,

    /// The website address (URL) of the image.
    pub url: Option<String>,

    /// Width in pixels.
    pub width: Option<u32>,
}
