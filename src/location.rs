use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// Field roles a record can expose for translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Every role the record variant has
    #[default]
    Any,
    Instruction,
    Input,
    Output,
    Content,
}

/// Roles that apply to pair records
pub const LOCATIONS_PAIRS: [Location; 3] = [Location::Instruction, Location::Input, Location::Output];

/// Roles that apply to pretrain records
pub const LOCATIONS_PRETRAIN: [Location; 1] = [Location::Content];

impl Location {
    // @returns: Lowercase location identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Instruction => "instruction",
            Self::Input => "input",
            Self::Output => "output",
            Self::Content => "content",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Location {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" => Ok(Self::Any),
            "instruction" => Ok(Self::Instruction),
            "input" => Ok(Self::Input),
            "output" => Ok(Self::Output),
            "content" => Ok(Self::Content),
            _ => Err(ConfigError::InvalidLocation(s.to_string())),
        }
    }
}

/// Set of locations whose fields get translated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationSelector {
    locations: BTreeSet<Location>,
}

impl LocationSelector {
    /// Build a selector, rejecting an empty set
    pub fn new<I>(locations: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = Location>,
    {
        let locations: BTreeSet<Location> = locations.into_iter().collect();
        if locations.is_empty() {
            return Err(ConfigError::NoLocation);
        }
        Ok(Self { locations })
    }

    /// Selector matching every role
    pub fn any() -> Self {
        Self {
            locations: BTreeSet::from([Location::Any]),
        }
    }

    /// Whether the field with the given role is eligible
    pub fn selects(&self, role: Location) -> bool {
        self.locations.contains(&Location::Any) || self.locations.contains(&role)
    }
}

impl Default for LocationSelector {
    fn default() -> Self {
        Self::any()
    }
}

impl fmt::Display for LocationSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.locations.iter().map(Location::as_str).collect();
        write!(f, "{}", names.join(","))
    }
}
