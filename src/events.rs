//! Event catalogs for each competition section

use crate::types::EventId;
use serde::{Deserialize, Serialize};

/// Standard maximum score for an apparatus
pub const DEFAULT_MAX_SCORE: f64 = 10.0;

/// One judged discipline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub short_name: String,
    pub max_score: f64,
    /// Display only
    pub icon: String,
}

impl Event {
    fn new(id: &str, name: &str, short_name: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            short_name: short_name.to_string(),
            max_score: DEFAULT_MAX_SCORE,
            icon: icon.to_string(),
        }
    }
}

/// Competition division; each has a fixed apparatus list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Women,
    Men,
}

impl Section {
    /// Events contested in this section, in competition order
    pub fn events(&self) -> Vec<Event> {
        match self {
            Section::Women => vec![
                Event::new("vault", "Vault", "VT", "Zap"),
                Event::new("uneven-bars", "Uneven Bars", "UB", "Minus"),
                Event::new("balance-beam", "Balance Beam", "BB", "GitBranch"),
                Event::new("floor-exercise", "Floor Exercise", "FX", "Square"),
            ],
            Section::Men => vec![
                Event::new("floor-exercise", "Floor Exercise", "FX", "Square"),
                Event::new("pommel-horse", "Pommel Horse", "PH", "Waves"),
                Event::new("still-rings", "Still Rings", "SR", "Circle"),
                Event::new("vault", "Vault", "VT", "Zap"),
                Event::new("parallel-bars", "Parallel Bars", "PB", "Equal"),
                Event::new("horizontal-bar", "Horizontal Bar", "HB", "Minus"),
            ],
        }
    }

    /// Look up an event of this section by id
    pub fn find_event(&self, event_id: &str) -> Option<Event> {
        self.events().into_iter().find(|event| event.id == event_id)
    }

    /// Human readable division name
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::Women => "Women's Division",
            Section::Men => "Men's Division",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Women => write!(f, "women"),
            Section::Men => write!(f, "men"),
        }
    }
}

impl std::str::FromStr for Section {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "women" => Ok(Section::Women),
            "men" => Ok(Section::Men),
            _ => Err(anyhow::anyhow!("Invalid section: {}", s)),
        }
    }
}
