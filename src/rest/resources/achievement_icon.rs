//! Achievement icon resource implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use igdb::query::set_fields;
//! use igdb::rest::Resource;
//! use igdb::rest::resources::AchievementIcon;
//!
//! let icon = AchievementIcon::get(&client, 7346, &[set_fields(["url", "width"])]).await?;
//! println!("Icon: {}", icon.url.as_deref().unwrap_or(""));
//! ```

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::rest::resources::Image;
use crate::rest::{Endpoint, Resource};

/// The icon image of an achievement.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct AchievementIcon(pub Image);

impl Deref for AchievementIcon {
    type Target = Image;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Resource for AchievementIcon {
    const NAME: &'static str = "AchievementIcon";
    const ENDPOINT: Endpoint = Endpoint::new("achievement_icons");
}
