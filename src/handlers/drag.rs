use egui::Pos2;
use log::{debug, trace};

use crate::registry::ShapeRegistry;
use crate::shape::ShapeId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Moves the selection along with the pointer while a drag is active
#[derive(Debug, Clone, Default)]
pub struct DragHandler {
    state: DragState,
    last_pointer: Option<Pos2>,
}

impl DragHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging when the press landed on a shape, otherwise go idle
    pub fn on_mouse_pressed(&mut self, clicked: Option<ShapeId>) {
        let next = if clicked.is_some() { DragState::Dragging } else { DragState::Idle };
        if next != self.state {
            debug!("Drag {:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }

    pub fn on_mouse_released(&mut self) {
        if self.state == DragState::Dragging {
            debug!("Drag finished");
        }
        self.state = DragState::Idle;
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Called once per frame with the current pointer position.
    ///
    /// The pointer is always recorded so the first frame of a new drag starts
    /// from a fresh position. Frames without a known pointer are skipped.
    pub fn update(
        &mut self,
        pointer: Option<Pos2>,
        shapes_to_move: &[ShapeId],
        registry: &mut ShapeRegistry,
    ) {
        let Some(current) = pointer else {
            return;
        };
        let previous = self.last_pointer.replace(current).unwrap_or(current);

        if self.is_dragging() {
            let delta = current - previous;
            if delta != egui::Vec2::ZERO {
                trace!("Moving {} shapes by {:?}", shapes_to_move.len(), delta);
                registry.translate(shapes_to_move, delta);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_transitions() {
        let mut drag = DragHandler::new();
        assert_eq!(drag.state(), DragState::Idle);

        drag.on_mouse_pressed(Some(ShapeId::new(1)));
        assert_eq!(drag.state(), DragState::Dragging);

        drag.on_mouse_released();
        assert_eq!(drag.state(), DragState::Idle);

        drag.on_mouse_pressed(None);
        assert_eq!(drag.state(), DragState::Idle);
    }
}
