use egui::{Color32, Painter, Pos2, Rect, Vec2};

use super::{ShapeElement, ShapeId};
use crate::shape::common;

/// Axis-aligned filled rectangle
#[derive(Debug, Clone)]
pub struct Rectangle {
    id: ShapeId,
    position: Pos2,
    size: Vec2,
    fill: Color32,

    // Recomputed whenever the position changes
    bounds: Rect,
}

impl Rectangle {
    pub(crate) fn new(id: ShapeId, position: Pos2, size: Vec2, fill: Color32) -> Self {
        Self {
            id,
            position,
            size,
            fill,
            bounds: common::bounds_at(position, size),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }
}

impl ShapeElement for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind_name(&self) -> &'static str {
        "rectangle"
    }

    fn position(&self) -> Pos2 {
        self.position
    }

    fn set_position(&mut self, position: Pos2) {
        self.position = position;
        self.bounds = common::bounds_at(position, self.size);
    }

    fn fill_color(&self) -> Color32 {
        self.fill
    }

    fn set_fill_color(&mut self, color: Color32) {
        self.fill = color;
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn draw(&self, painter: &Painter) {
        painter.rect_filled(self.bounds, 0.0, self.fill);
    }
}
