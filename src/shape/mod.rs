use egui::{Color32, Painter, Pos2, Rect, Vec2};

mod common;
pub mod circle;
pub mod rectangle;

pub use common::random_position_in_bounds;

/// Stable identifier of a shape, used for selection and group membership
/// instead of object identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(usize);

impl ShapeId {
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Common trait that all drawable shapes implement
pub trait ShapeElement {
    /// Get the unique identifier for this shape
    fn id(&self) -> ShapeId;

    /// Get the shape kind as a string
    fn kind_name(&self) -> &'static str;

    /// Top-left corner of the shape's bounding box
    fn position(&self) -> Pos2;

    /// Move the shape so its bounding box starts at `position`
    fn set_position(&mut self, position: Pos2);

    fn fill_color(&self) -> Color32;

    fn set_fill_color(&mut self, color: Color32);

    /// Cached axis-aligned bounding box
    fn bounds(&self) -> Rect;

    /// Draw the shape using the provided painter
    fn draw(&self, painter: &Painter);

    /// Translate the shape by the given delta
    fn translate(&mut self, delta: Vec2) {
        let position = self.position() + delta;
        self.set_position(position);
    }

    /// Test if the shape's bounds contain the given position
    fn hit_test(&self, pos: Pos2) -> bool {
        self.bounds().contains(pos)
    }
}

/// Enumeration of all shape kinds on the board
#[derive(Debug, Clone)]
pub enum ShapeType {
    Rectangle(rectangle::Rectangle),
    Circle(circle::Circle),
}

impl ShapeElement for ShapeType {
    fn id(&self) -> ShapeId {
        match self {
            ShapeType::Rectangle(r) => r.id(),
            ShapeType::Circle(c) => c.id(),
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            ShapeType::Rectangle(_) => "rectangle",
            ShapeType::Circle(_) => "circle",
        }
    }

    fn position(&self) -> Pos2 {
        match self {
            ShapeType::Rectangle(r) => r.position(),
            ShapeType::Circle(c) => c.position(),
        }
    }

    fn set_position(&mut self, position: Pos2) {
        match self {
            ShapeType::Rectangle(r) => r.set_position(position),
            ShapeType::Circle(c) => c.set_position(position),
        }
    }

    fn fill_color(&self) -> Color32 {
        match self {
            ShapeType::Rectangle(r) => r.fill_color(),
            ShapeType::Circle(c) => c.fill_color(),
        }
    }

    fn set_fill_color(&mut self, color: Color32) {
        match self {
            ShapeType::Rectangle(r) => r.set_fill_color(color),
            ShapeType::Circle(c) => c.set_fill_color(color),
        }
    }

    fn bounds(&self) -> Rect {
        match self {
            ShapeType::Rectangle(r) => r.bounds(),
            ShapeType::Circle(c) => c.bounds(),
        }
    }

    fn draw(&self, painter: &Painter) {
        match self {
            ShapeType::Rectangle(r) => r.draw(painter),
            ShapeType::Circle(c) => c.draw(painter),
        }
    }
}

/// Factory functions for creating shapes
pub mod factory {
    use super::*;

    /// Create a new rectangle with its top-left corner at `position`
    pub fn create_rectangle(id: ShapeId, position: Pos2, size: Vec2, fill: Color32) -> ShapeType {
        ShapeType::Rectangle(rectangle::Rectangle::new(id, position, size, fill))
    }

    /// Create a new circle whose bounding square starts at `position`
    pub fn create_circle(id: ShapeId, position: Pos2, radius: f32, fill: Color32) -> ShapeType {
        ShapeType::Circle(circle::Circle::new(id, position, radius, fill))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_bounds_follow_position() {
        let mut shape =
            factory::create_circle(ShapeId::new(3), Pos2::new(10.0, 20.0), 35.0, Color32::BLACK);
        let ShapeType::Circle(circle) = &shape else {
            panic!("expected a circle");
        };
        assert_eq!(circle.radius(), 35.0);
        assert_eq!(circle.center(), Pos2::new(45.0, 55.0));
        assert_eq!(shape.kind_name(), "circle");

        shape.translate(Vec2::new(5.0, -5.0));
        assert_eq!(shape.bounds(), Rect::from_min_size(Pos2::new(15.0, 15.0), Vec2::splat(70.0)));
        assert!(shape.hit_test(Pos2::new(84.0, 84.0)));
        assert!(!shape.hit_test(Pos2::new(86.0, 86.0)));
    }

    #[test]
    fn test_fill_color_is_replaced() {
        let mut shape = factory::create_rectangle(
            ShapeId::new(1),
            Pos2::ZERO,
            Vec2::new(20.0, 20.0),
            Color32::BLACK,
        );
        shape.set_fill_color(Color32::RED);
        assert_eq!(shape.fill_color(), Color32::RED);
        assert_eq!(shape.id().raw(), 1);
        assert_eq!(shape.kind_name(), "rectangle");
    }
}
