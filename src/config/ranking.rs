//! Ranking presentation configuration

use crate::events::Section;
use serde::{Deserialize, Serialize};

/// Settings that shape how standings are presented
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingSettings {
    /// How many competitors per level make the podium view
    pub podium_size: usize,
    /// Section used when a competition document omits one
    pub default_section: Section,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            podium_size: 3,
            default_section: Section::Women,
        }
    }
}
