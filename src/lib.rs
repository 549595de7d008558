//! Circle Field - scatter non-overlapping circles and drag them around
//!
//! Core modules:
//! - `placement`: Randomized placement with repulsion (the only real algorithm)
//! - `input`: Validation of the raw count typed by the user
//! - `interaction`: Drag state machine and pointer readout
//! - `scene`: Platform-independent glue between input, placement and drag
//! - `render`: SVG attribute/document generation
//! - `settings`: User configuration persisted to LocalStorage

pub mod error;
pub mod input;
pub mod interaction;
pub mod placement;
pub mod render;
pub mod scene;
pub mod settings;

pub use error::{AppError, InputError, PlacementError};
pub use placement::{Area, Circle, PlacementConfig, Rgb, place, place_seeded};
pub use scene::Scene;
pub use settings::Settings;

/// Layout configuration constants
pub mod consts {
    /// Accepted range for the requested circle count
    pub const MIN_CIRCLES: u32 = 0;
    pub const MAX_CIRCLES: u32 = 80;

    /// Circle radius in surface pixels
    pub const CIRCLE_RADIUS: f32 = 20.0;

    /// Candidates tried for a single circle before giving up
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 500;
    /// Consecutive nudges before falling back to a uniform resample
    pub const MAX_NUDGE_ATTEMPTS: u32 = 10;

    /// Surface size used when no host surface is available (native)
    pub const DEFAULT_SURFACE_WIDTH: f32 = 500.0;
    pub const DEFAULT_SURFACE_HEIGHT: f32 = 500.0;

    /// Circles in the native demo layout
    pub const DEMO_COUNT: u32 = 40;
}
