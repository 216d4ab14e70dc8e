#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod id_generator;
pub mod input;
pub mod marks;
pub mod registry;
pub mod shape;

pub use app::ShapesApp;
pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use handlers::{DragHandler, GroupHandler, SelectionHandler};
pub use input::{InputEvent, InputHandler};
pub use marks::Mark;
pub use registry::ShapeRegistry;
pub use shape::{ShapeElement, ShapeId, ShapeType};
