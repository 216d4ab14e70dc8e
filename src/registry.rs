use egui::{Pos2, Vec2};

use crate::config::{AppConfig, ShapeSpec};
use crate::id_generator::generate_id;
use crate::shape::{factory, random_position_in_bounds, ShapeElement, ShapeId, ShapeType};

/// All shapes on the board, in drawing order (later shapes are on top)
#[derive(Debug, Clone, Default)]
pub struct ShapeRegistry {
    shapes: Vec<ShapeType>,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Build the startup board from `config`, placing every shape at random inside the window
    pub fn from_config(config: &AppConfig) -> Self {
        let window = config.window_size();
        let mut registry = Self::new();

        for spec in &config.shapes {
            let position = random_position_in_bounds(window, spec.size());
            let shape = match spec {
                ShapeSpec::Rectangle { .. } => {
                    factory::create_rectangle(generate_id(), position, spec.size(), spec.fill())
                }
                ShapeSpec::Circle { radius, .. } => {
                    factory::create_circle(generate_id(), position, *radius, spec.fill())
                }
            };
            log::debug!("Placed {} {} at {:?}", shape.kind_name(), shape.id(), position);
            registry.add(shape);
        }

        registry
    }

    pub fn add(&mut self, shape: ShapeType) {
        self.shapes.push(shape);
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, id: ShapeId) -> Option<&ShapeType> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut ShapeType> {
        self.shapes.iter_mut().find(|shape| shape.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShapeType> {
        self.shapes.iter()
    }

    /// Snapshot of the ids in drawing order
    pub fn ids(&self) -> Vec<ShapeId> {
        self.shapes.iter().map(ShapeElement::id).collect()
    }

    /// Topmost shape whose bounds contain `pos`
    pub fn shape_at(&self, pos: Pos2) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|shape| shape.hit_test(pos))
            .map(ShapeElement::id)
    }

    /// Move every listed shape by `delta`. Unknown ids are skipped.
    pub fn translate(&mut self, ids: &[ShapeId], delta: Vec2) {
        for id in ids {
            if let Some(shape) = self.get_mut(*id) {
                shape.translate(delta);
            }
        }
    }
}
