//! Error types for suzerain
//!
//! Expected rules outcomes (rating at cap, not enough XP, a credit
//! shortfall) are NOT errors - the domain models them as explicit
//! branches. These types cover host and infrastructure failures plus
//! the user-facing rejections the engine reports through the notice
//! channel.

use thiserror::Error;

/// Error raised when a rating is already at its maximum level
#[derive(Debug, Error)]
#[error("{category} rating is already at max ({level})")]
pub struct RatingCapError {
    pub category: String,
    pub level: u8,
}

/// Error raised when the XP pool cannot cover the next level
#[derive(Debug, Error)]
#[error("Not enough XP to raise rating. Have {have} Need {need}")]
pub struct InsufficientXpError {
    pub have: u32,
    pub need: u32,
}

/// Error raised when a referenced record cannot be resolved
#[derive(Debug, Error)]
#[error("Cannot find record '{reference_id}'")]
pub struct ReferenceNotFoundError {
    pub reference_id: String,
}

/// General suzerain error type
#[derive(Debug, Error)]
pub enum SuzerainError {
    #[error(transparent)]
    RatingCap(#[from] RatingCapError),

    #[error(transparent)]
    InsufficientXp(#[from] InsufficientXpError),

    #[error(transparent)]
    ReferenceNotFound(#[from] ReferenceNotFoundError),

    /// The state store rejected a commit. Terminal for the current
    /// operation; no partial state is assumed persisted and no retry
    /// is performed.
    #[error("Commit failed: {0}")]
    Commit(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SuzerainError>;
