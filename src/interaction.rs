//! Pointer drag state machine
//!
//! Idle -> Dragging on a press over an element, Dragging -> Dragging on move,
//! anything -> Idle on release. One pointer, one dragged element at a time.

use glam::Vec2;

/// Drag state, owned by whoever routes pointer events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState<T> {
    Idle,
    /// `offset` is element position minus pointer position at press time
    Dragging { target: T, offset: Vec2 },
}

impl<T> Default for DragState<T> {
    fn default() -> Self {
        DragState::Idle
    }
}

impl<T: Copy> DragState<T> {
    /// Handle a press. `hit` is the element under the pointer and its
    /// current position, if any.
    pub fn press(self, hit: Option<(T, Vec2)>, pointer: Vec2) -> Self {
        match hit {
            Some((target, element_pos)) => DragState::Dragging {
                target,
                offset: element_pos - pointer,
            },
            None => self,
        }
    }

    /// New position for the dragged element when the pointer moves
    pub fn drag_to(&self, pointer: Vec2) -> Option<(T, Vec2)> {
        match *self {
            DragState::Idle => None,
            DragState::Dragging { target, offset } => Some((target, pointer + offset)),
        }
    }

    pub fn release(self) -> Self {
        DragState::Idle
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn target(&self) -> Option<T> {
        match *self {
            DragState::Idle => None,
            DragState::Dragging { target, .. } => Some(target),
        }
    }
}

/// Pointer readout text, e.g. `(12.50,300.00)`
pub fn format_pointer(pos: Vec2) -> String {
    format!("({:.2},{:.2})", pos.x, pos.y)
}
