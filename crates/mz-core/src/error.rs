//! Maze construction errors
//!
//! Only input validation can fail. Out-of-bounds grid queries return `None`
//! and degenerate partition regions end the recursion; neither is an error.

use thiserror::Error;

/// Errors that can occur while building a maze
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("Invalid maze dimensions: width {width}, height {height} (both must be at least 1)")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias for maze operations
pub type Result<T> = std::result::Result<T, MazeError>;
