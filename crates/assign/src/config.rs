use crate::error::AssignError;
use std::fmt;
use std::str::FromStr;

/// How nearest stations are searched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Spatial index once the station count reaches the threshold
    #[default]
    Auto,

    /// Compare every house against every station
    BruteForce,

    /// R-tree over station points
    Spatial,
}

impl Strategy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::BruteForce => "brute-force",
            Self::Spatial => "spatial",
        }
    }
}

impl FromStr for Strategy {
    type Err = AssignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "brute-force" | "brute_force" | "bruteforce" => Ok(Self::BruteForce),
            "spatial" | "rtree" => Ok(Self::Spatial),
            other => Err(AssignError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for nearest-station assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignConfig {
    pub strategy: Strategy,

    /// Station count at or above which `Auto` builds the spatial index
    pub spatial_threshold: usize,
}

impl Default for AssignConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Auto,
            spatial_threshold: 64,
        }
    }
}

impl AssignConfig {
    /// Always scan linearly
    pub fn brute_force() -> Self {
        Self {
            strategy: Strategy::BruteForce,
            ..Default::default()
        }
    }

    /// Always use the spatial index
    pub fn spatial() -> Self {
        Self {
            strategy: Strategy::Spatial,
            ..Default::default()
        }
    }
}
