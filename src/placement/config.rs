//! Placement parameters

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::PlacementError;

/// Tunable parameters of the placement algorithm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredConfig")]
pub struct PlacementConfig {
    /// Circle radius
    pub radius: f32,
    /// Random extra distance added to each nudge (uniform in [0, variance))
    pub nudge_variance: f32,
    /// Candidates per circle before the whole placement fails
    pub max_placement_attempts: u32,
    /// Consecutive nudges before a uniform resample
    pub max_nudge_attempts: u32,
}

/// Saved form: any field may be missing. Missing values are derived from
/// the (possibly saved) radius, so `nudge_variance` tracks 2R.
#[derive(Deserialize)]
struct StoredConfig {
    radius: Option<f32>,
    nudge_variance: Option<f32>,
    max_placement_attempts: Option<u32>,
    max_nudge_attempts: Option<u32>,
}

impl From<StoredConfig> for PlacementConfig {
    fn from(stored: StoredConfig) -> Self {
        let base = Self::with_radius(stored.radius.unwrap_or(CIRCLE_RADIUS));
        Self {
            nudge_variance: stored.nudge_variance.unwrap_or(base.nudge_variance),
            max_placement_attempts: stored
                .max_placement_attempts
                .unwrap_or(base.max_placement_attempts),
            max_nudge_attempts: stored.max_nudge_attempts.unwrap_or(base.max_nudge_attempts),
            ..base
        }
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self::with_radius(CIRCLE_RADIUS)
    }
}

impl PlacementConfig {
    /// Default budgets, variance scaled to the radius (2R)
    pub fn with_radius(radius: f32) -> Self {
        Self {
            radius,
            nudge_variance: 2.0 * radius,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            max_nudge_attempts: MAX_NUDGE_ATTEMPTS,
        }
    }

    /// Minimum center-to-center distance: a diameter plus a quarter radius
    #[inline]
    pub fn min_distance(&self) -> f32 {
        2.0 * self.radius + self.radius / 4.0
    }

    /// Base length of a nudge before variance is added
    #[inline]
    pub fn nudge_base(&self) -> f32 {
        2.0 * self.radius
    }

    pub fn validate(&self) -> Result<(), PlacementError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(PlacementError::InvalidConfig("radius must be positive"));
        }
        if !self.nudge_variance.is_finite() || self.nudge_variance < 0.0 {
            return Err(PlacementError::InvalidConfig(
                "nudge variance must be non-negative",
            ));
        }
        if self.max_placement_attempts == 0 {
            return Err(PlacementError::InvalidConfig(
                "placement attempt budget must be at least 1",
            ));
        }
        Ok(())
    }
}
