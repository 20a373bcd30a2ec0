//! Competency levels and their ordering
//!
//! Levels run "Level 1" through "Level 10", then "Elite". Labels outside that
//! taxonomy are kept verbatim and sort after every standard level.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

const LEVEL_PREFIX: &str = "Level ";
const ELITE_LABEL: &str = "Elite";

/// Highest numbered level in the taxonomy
pub const MAX_NUMBERED_LEVEL: u8 = 10;

/// A competency tier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Level {
    /// "Level 1" ..= "Level 10"
    Numbered(u8),
    Elite,
    /// Any label that is not part of the standard taxonomy
    Unrecognized(String),
}

impl Level {
    /// Parse a level label. Never fails: unknown labels become `Unrecognized`.
    pub fn parse(label: &str) -> Self {
        if label == ELITE_LABEL {
            return Level::Elite;
        }

        label
            .strip_prefix(LEVEL_PREFIX)
            .and_then(|rest| {
                let number: u8 = rest.parse().ok()?;
                // Only the canonical spelling maps onto the taxonomy ("Level 05" does not)
                let canonical = (1..=MAX_NUMBERED_LEVEL).contains(&number)
                    && number.to_string() == rest;
                canonical.then_some(Level::Numbered(number))
            })
            .unwrap_or_else(|| Level::Unrecognized(label.to_string()))
    }

    /// The standard levels in ascending order
    pub fn taxonomy() -> Vec<Level> {
        (1..=MAX_NUMBERED_LEVEL)
            .map(Level::Numbered)
            .chain(std::iter::once(Level::Elite))
            .collect()
    }

    /// Whether this level belongs to the standard taxonomy
    pub fn is_standard(&self) -> bool {
        !matches!(self, Level::Unrecognized(_))
    }

    fn sort_key(&self) -> (u8, u8, &str) {
        match self {
            Level::Numbered(n) => (0, *n, ""),
            Level::Elite => (1, 0, ""),
            Level::Unrecognized(label) => (2, 0, label.as_str()),
        }
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Numbered(n) => write!(f, "{}{}", LEVEL_PREFIX, n),
            Level::Elite => write!(f, "{}", ELITE_LABEL),
            Level::Unrecognized(label) => write!(f, "{}", label),
        }
    }
}

impl FromStr for Level {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Level::parse(s))
    }
}

impl From<&str> for Level {
    fn from(label: &str) -> Self {
        Level::parse(label)
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Level::parse(&label))
    }
}
