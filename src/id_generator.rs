use std::sync::atomic::{AtomicUsize, Ordering};

use crate::shape::ShapeId;

// Single static counter for all shapes
static NEXT_SHAPE_ID: AtomicUsize = AtomicUsize::new(1);

pub fn generate_id() -> ShapeId {
    ShapeId::new(NEXT_SHAPE_ID.fetch_add(1, Ordering::SeqCst))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let first = generate_id();
        let second = generate_id();
        assert!(second.raw() > first.raw());
        assert_ne!(first, second);
    }
}
