mod drag;
mod group;
mod selection;

pub use drag::{DragHandler, DragState};
pub use group::{GroupHandler, GroupId};
pub use selection::SelectionHandler;
