//! Scene: what the page shows, independent of the DOM
//!
//! Routes text input to the placement engine and pointer events to the drag
//! state machine. The engine's layout is kept untouched; drags move a
//! separate copy of the positions.

use glam::Vec2;
use rand::Rng;

use crate::error::AppError;
use crate::input::parse_count;
use crate::interaction::{DragState, format_pointer};
use crate::placement::{Area, Circle, PlacementConfig, place};

#[derive(Debug, Clone)]
pub struct Scene {
    area: Area,
    config: PlacementConfig,
    /// Last successful placement, in paint order
    layout: Vec<Circle>,
    /// Current on-screen centers, same indices as `layout`
    live: Vec<Vec2>,
    drag: DragState<usize>,
    pointer: Option<Vec2>,
    error: Option<String>,
}

impl Scene {
    pub fn new(area: Area, config: PlacementConfig) -> Self {
        Self {
            area,
            config,
            layout: Vec::new(),
            live: Vec::new(),
            drag: DragState::Idle,
            pointer: None,
            error: None,
        }
    }

    pub fn area(&self) -> &Area {
        &self.area
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    pub fn layout(&self) -> &[Circle] {
        &self.layout
    }

    pub fn live_positions(&self) -> &[Vec2] {
        &self.live
    }

    /// Error banner text, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Handle a new value from the count field.
    ///
    /// Invalid input only sets the banner. Valid input always discards the
    /// previous layout; if placement then fails the surface stays empty.
    pub fn submit<R: Rng + ?Sized>(&mut self, raw: &str, rng: &mut R) -> Result<&[Circle], AppError> {
        let count = match parse_count(raw) {
            Ok(count) => count,
            Err(e) => {
                log::debug!("Rejected input {:?}: {}", raw, e);
                self.error = Some(e.to_string());
                return Err(e.into());
            }
        };

        self.error = None;
        self.clear();

        match place(count as usize, &self.area, &self.config, rng) {
            Ok(circles) => {
                log::info!("Placed {} circles", circles.len());
                self.live = circles.iter().map(|c| c.pos).collect();
                self.layout = circles;
                Ok(&self.layout)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    fn clear(&mut self) {
        self.layout.clear();
        self.live.clear();
        self.drag = self.drag.release();
    }

    /// Topmost circle under `pos` (last painted wins)
    pub fn circle_at(&self, pos: Vec2) -> Option<usize> {
        let radius = self.config.radius;
        self.live.iter().rposition(|c| c.distance(pos) <= radius)
    }

    /// Press: start dragging the circle under the pointer, if any
    pub fn pointer_down(&mut self, pos: Vec2) -> Option<usize> {
        let hit = self.circle_at(pos).map(|i| (i, self.live[i]));
        self.drag = self.drag.press(hit, pos);
        hit.map(|(i, _)| i)
    }

    /// Move: record the pointer and drag the held circle.
    /// Returns the moved circle and its new center.
    pub fn pointer_move(&mut self, pos: Vec2) -> Option<(usize, Vec2)> {
        self.pointer = Some(pos);
        let (index, center) = self.drag.drag_to(pos)?;
        let slot = self.live.get_mut(index)?;
        *slot = center;
        Some((index, center))
    }

    pub fn pointer_up(&mut self) {
        self.drag = self.drag.release();
    }

    /// Readout text for the last known pointer position
    pub fn pointer_readout(&self) -> Option<String> {
        self.pointer.map(format_pointer)
    }
}
