//! Position-keyed fill color
//!
//! Red is fixed, green follows x and blue follows y, so a layout reads as a
//! smooth gradient across the surface.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::Area;

pub const RED: u8 = 200;
pub const GREEN_BASE: u8 = 155;
pub const GREEN_SPAN: f32 = 25.0;
pub const BLUE_BASE: u8 = 155;
pub const BLUE_SPAN: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color string
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Derive the fill color for a circle centered at `pos`
pub fn derive_color(pos: Vec2, area: &Area) -> Rgb {
    Rgb {
        r: RED,
        g: channel(GREEN_BASE, pos.x / area.width, GREEN_SPAN),
        b: channel(BLUE_BASE, pos.y / area.height, BLUE_SPAN),
    }
}

#[inline]
fn channel(base: u8, t: f32, span: f32) -> u8 {
    let offset = (t.clamp(0.0, 1.0) * span).floor();
    (base as f32 + offset).min(255.0) as u8
}
