use std::collections::HashSet;

use log::debug;

use crate::marks::Mark;
use crate::shape::{ShapeElement, ShapeId, ShapeType};

/// Tracks which shapes are currently selected
#[derive(Debug, Clone, Default)]
pub struct SelectionHandler {
    selected: HashSet<ShapeId>,
}

impl SelectionHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a mouse press.
    ///
    /// `related` is the clicked shape's whole group (or just the shape itself when
    /// ungrouped). Without `allow_multiple` the selection is replaced by `related`,
    /// or cleared when nothing was clicked. With `allow_multiple` the related set is
    /// toggled in or out depending on whether the clicked shape was already selected,
    /// and clicks on empty space leave the selection untouched.
    pub fn on_mouse_pressed(
        &mut self,
        clicked: Option<ShapeId>,
        related: &[ShapeId],
        allow_multiple: bool,
    ) {
        match (clicked, allow_multiple) {
            (None, true) => {}
            (None, false) => {
                if !self.selected.is_empty() {
                    debug!("Cleared selection of {} shapes", self.selected.len());
                }
                self.selected.clear();
            }
            (Some(_), false) => {
                self.selected = related.iter().copied().collect();
                debug!("Selected {:?}", self.selected());
            }
            (Some(id), true) => {
                if self.selected.contains(&id) {
                    for shape in related {
                        self.selected.remove(shape);
                    }
                } else {
                    self.selected.extend(related.iter().copied());
                }
                debug!("Toggled {id}, selection is now {:?}", self.selected());
            }
        }
    }

    /// Snapshot of the current selection, sorted by id
    pub fn selected(&self) -> Vec<ShapeId> {
        let mut ids: Vec<_> = self.selected.iter().copied().collect();
        ids.sort();
        ids
    }

    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn build_selection_mark_if_selected(&self, shape: &ShapeType) -> Option<Mark> {
        self.is_selected(shape.id()).then(|| Mark::selection(shape.bounds()))
    }
}
