//! Circle placement module
//!
//! Everything here is pure and synchronous:
//! - Randomness only through an injected `Rng`
//! - Output is created fresh per call and never mutated afterwards
//! - No rendering or platform dependencies

pub mod area;
pub mod color;
pub mod config;
pub mod engine;

pub use area::Area;
pub use color::{Rgb, derive_color};
pub use config::PlacementConfig;
pub use engine::{Circle, place, place_seeded, seeded_rng};
