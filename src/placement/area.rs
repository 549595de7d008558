//! Drawing surface bounds and the inset rectangle circles must stay inside

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::PlacementError;

/// Usable size of the drawing surface, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub width: f32,
    pub height: f32,
}

impl Area {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Reject non-finite or non-positive dimensions
    pub fn validate(&self) -> Result<(), PlacementError> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(PlacementError::InvalidArea {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Whether a circle of `radius` fits at all (inset rectangle non-empty)
    pub fn fits(&self, radius: f32) -> bool {
        self.width >= 2.0 * radius && self.height >= 2.0 * radius
    }

    /// Check if a center keeps the whole circle on the surface
    #[inline]
    pub fn inset_contains(&self, pos: Vec2, radius: f32) -> bool {
        in_span(pos.x, radius, self.width) && in_span(pos.y, radius, self.height)
    }

    /// Uniform point inside the inset rectangle
    pub fn sample_inset<R: Rng + ?Sized>(&self, radius: f32, rng: &mut R) -> Vec2 {
        Vec2::new(
            sample_span(radius, self.width, rng),
            sample_span(radius, self.height, rng),
        )
    }

    /// Keep in-range axes of `pos`, resample the ones that left the inset range
    pub fn resample_outside<R: Rng + ?Sized>(&self, pos: Vec2, radius: f32, rng: &mut R) -> Vec2 {
        let x = if in_span(pos.x, radius, self.width) {
            pos.x
        } else {
            sample_span(radius, self.width, rng)
        };
        let y = if in_span(pos.y, radius, self.height) {
            pos.y
        } else {
            sample_span(radius, self.height, rng)
        };
        Vec2::new(x, y)
    }
}

#[inline]
fn in_span(v: f32, radius: f32, extent: f32) -> bool {
    v >= radius && v <= extent - radius
}

/// Caller guarantees `extent >= 2 * radius`
#[inline]
fn sample_span<R: Rng + ?Sized>(radius: f32, extent: f32, rng: &mut R) -> f32 {
    rng.random_range(radius..=extent - radius)
}
