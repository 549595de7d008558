//! Error types
//!
//! `Display` output doubles as the banner text shown to the user.

use thiserror::Error;

/// Rejected text input (detected before the placement engine runs)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please input a number")]
    Missing,

    #[error("Please input a number")]
    NotANumber,

    #[error("Please input an integer")]
    NotInteger,

    #[error("Please input a number between {min} and {max}")]
    OutOfRange { min: u32, max: u32 },
}

/// Failure reported by the placement engine itself
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    /// Attempt budget exhausted for one circle; nothing is returned
    #[error(
        "Cannot place that many circles in this space ({placed} of {requested} placed), please choose a lower number of circles"
    )]
    Infeasible { placed: usize, requested: usize },

    #[error("Invalid drawing area {width}x{height}")]
    InvalidArea { width: f32, height: f32 },

    #[error("Invalid placement config: {0}")]
    InvalidConfig(&'static str),
}

/// Anything the glue layer may surface in the error banner
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Placement(#[from] PlacementError),
}
