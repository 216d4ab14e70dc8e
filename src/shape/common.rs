use egui::{Pos2, Rect, Vec2};
use rand::Rng;

/// Bounding box of a shape anchored at its top-left corner
pub(crate) fn bounds_at(position: Pos2, size: Vec2) -> Rect {
    Rect::from_min_size(position, size)
}

/// Pick a random top-left position that keeps a shape of `shape_size`
/// inside `area`. Shapes larger than the area are pinned to its origin.
pub fn random_position_in_bounds(area: Vec2, shape_size: Vec2) -> Pos2 {
    let mut rng = rand::thread_rng();
    let max_x = (area.x - shape_size.x).max(0.0);
    let max_y = (area.y - shape_size.y).max(0.0);

    let x = if max_x > 0.0 { rng.gen_range(0.0..max_x) } else { 0.0 };
    let y = if max_y > 0.0 { rng.gen_range(0.0..max_y) } else { 0.0 };
    Pos2::new(x, y)
}
