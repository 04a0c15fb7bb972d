//! Generation options
//!
//! Plain data with defaults; can be loaded from a JSON document where every
//! field is optional.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_COLLECTIBLE_COUNT, DEFAULT_HAZARD_COUNT};
use crate::error::Result;

/// Options for building one maze
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Rooms per row. Signed so that bad input reaches validation.
    pub width: i64,
    /// Rooms per column
    pub height: i64,
    pub hazard_count: usize,
    pub collectible_count: usize,
    /// RNG seed; `None` draws one from entropy
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            hazard_count: DEFAULT_HAZARD_COUNT,
            collectible_count: DEFAULT_COLLECTIBLE_COUNT,
            seed: None,
        }
    }
}

impl MazeConfig {
    /// Default marker counts for a `width` x `height` maze
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_markers(mut self, hazards: usize, collectibles: usize) -> Self {
        self.hazard_count = hazards;
        self.collectible_count = collectibles;
        self
    }

    /// Parse a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
