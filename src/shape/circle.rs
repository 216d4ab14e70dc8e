use egui::{Color32, Painter, Pos2, Rect, Vec2};

use super::{ShapeElement, ShapeId};
use crate::shape::common;

/// Filled circle, positioned by the top-left corner of its bounding square
#[derive(Debug, Clone)]
pub struct Circle {
    id: ShapeId,
    position: Pos2,
    radius: f32,
    fill: Color32,
    bounds: Rect,
}

impl Circle {
    pub(crate) fn new(id: ShapeId, position: Pos2, radius: f32, fill: Color32) -> Self {
        Self {
            id,
            position,
            radius,
            fill,
            bounds: common::bounds_at(position, Vec2::splat(radius * 2.0)),
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn center(&self) -> Pos2 {
        self.bounds.center()
    }
}

impl ShapeElement for Circle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind_name(&self) -> &'static str {
        "circle"
    }

    fn position(&self) -> Pos2 {
        self.position
    }

    fn set_position(&mut self, position: Pos2) {
        self.position = position;
        self.bounds = common::bounds_at(position, Vec2::splat(self.radius * 2.0));
    }

    fn fill_color(&self) -> Color32 {
        self.fill
    }

    fn set_fill_color(&mut self, color: Color32) {
        self.fill = color;
    }

    // Hit-testing uses the bounding square, not the disc
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn draw(&self, painter: &Painter) {
        painter.circle_filled(self.center(), self.radius, self.fill);
    }
}
