use egui::{Color32, Painter, Rect, Stroke};

pub const SELECTION_PADDING: f32 = 3.0;
pub const GROUP_PADDING: f32 = 7.0;

/// Outline drawn over a shape to show selection or group membership
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mark {
    pub rect: Rect,
    pub stroke: Stroke,
}

impl Mark {
    /// Thin outline just outside the shape's bounds
    pub fn selection(bounds: Rect) -> Self {
        Self {
            rect: bounds.expand(SELECTION_PADDING),
            stroke: Stroke::new(1.5, Color32::from_rgb(40, 120, 255)),
        }
    }

    /// Thicker outline outside the selection mark so both stay visible
    pub fn group(bounds: Rect) -> Self {
        Self {
            rect: bounds.expand(GROUP_PADDING),
            stroke: Stroke::new(2.0, Color32::from_rgb(255, 160, 0)),
        }
    }

    pub fn draw(&self, painter: &Painter) {
        painter.rect_stroke(self.rect, 0.0, self.stroke);
    }
}
