use std::collections::{HashMap, HashSet};

use log::info;
use uuid::Uuid;

use crate::marks::Mark;
use crate::shape::{ShapeElement, ShapeId, ShapeType};

/// Identifier shared by every member of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(Uuid);

impl GroupId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tracks shape -> group membership. A shape belongs to at most one group.
#[derive(Debug, Clone, Default)]
pub struct GroupHandler {
    membership: HashMap<ShapeId, GroupId>,
}

impl GroupHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put all `shapes` into one new group, pulling them out of any group they were in.
    ///
    /// A single shape still forms a (trivial) group of its own.
    pub fn group(&mut self, shapes: &[ShapeId]) {
        if shapes.is_empty() {
            return;
        }

        let previous: HashSet<GroupId> = shapes
            .iter()
            .filter_map(|shape| self.membership.get(shape).copied())
            .collect();

        let group = GroupId::new();
        for shape in shapes {
            self.membership.insert(*shape, group);
        }
        for old in previous {
            self.dissolve_if_trivial(old);
        }

        info!("Grouped {} shapes into {group}", shapes.len());
    }

    /// Remove each of `shapes` from its group. Groups left with fewer than two
    /// members are dissolved.
    pub fn ungroup(&mut self, shapes: &[ShapeId]) {
        let removed: Vec<GroupId> = shapes
            .iter()
            .filter_map(|shape| self.membership.remove(shape))
            .collect();

        if removed.is_empty() {
            return;
        }
        let touched: HashSet<GroupId> = removed.iter().copied().collect();
        for group in touched {
            self.dissolve_if_trivial(group);
        }

        info!("Ungrouped {} shapes", removed.len());
    }

    /// Every shape sharing `shape`'s group, including itself, sorted by id
    pub fn related_shapes(&self, shape: ShapeId) -> Vec<ShapeId> {
        let Some(group) = self.membership.get(&shape).copied() else {
            return vec![shape];
        };
        let mut related = self.members(group);
        related.sort();
        related
    }

    pub fn group_of(&self, shape: ShapeId) -> Option<GroupId> {
        self.membership.get(&shape).copied()
    }

    /// Number of distinct groups, trivial ones included
    pub fn group_count(&self) -> usize {
        self.membership.values().collect::<HashSet<_>>().len()
    }

    pub fn build_group_mark_if_has_group(&self, shape: &ShapeType) -> Option<Mark> {
        let group = self.group_of(shape.id())?;
        (self.members(group).len() >= 2).then(|| Mark::group(shape.bounds()))
    }

    fn members(&self, group: GroupId) -> Vec<ShapeId> {
        self.membership
            .iter()
            .filter(|(_, g)| **g == group)
            .map(|(shape, _)| *shape)
            .collect()
    }

    fn dissolve_if_trivial(&mut self, group: GroupId) {
        let members = self.members(group);
        if members.len() < 2 {
            for shape in members {
                self.membership.remove(&shape);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[usize]) -> Vec<ShapeId> {
        raw.iter().copied().map(ShapeId::new).collect()
    }

    #[test]
    fn test_ungrouped_shape_relates_to_itself() {
        let groups = GroupHandler::new();
        assert_eq!(groups.related_shapes(ShapeId::new(5)), ids(&[5]));
        assert!(groups.group_of(ShapeId::new(5)).is_none());
    }

    #[test]
    fn test_membership_is_symmetric() {
        let mut groups = GroupHandler::new();
        groups.group(&ids(&[1, 2, 3]));
        for id in ids(&[1, 2, 3]) {
            assert_eq!(groups.related_shapes(id), ids(&[1, 2, 3]));
        }
        assert_eq!(groups.group_count(), 1);
    }

    #[test]
    fn test_regroup_moves_shape_and_dissolves_leftover() {
        let mut groups = GroupHandler::new();
        groups.group(&ids(&[1, 2]));
        groups.group(&ids(&[2, 3]));

        assert_eq!(groups.related_shapes(ShapeId::new(2)), ids(&[2, 3]));
        assert_eq!(groups.related_shapes(ShapeId::new(1)), ids(&[1]));
        assert!(groups.group_of(ShapeId::new(1)).is_none());
    }

    #[test]
    fn test_ungroup_dissolves_small_groups() {
        let mut groups = GroupHandler::new();
        groups.group(&ids(&[1, 2, 3]));
        groups.ungroup(&ids(&[1]));
        assert_eq!(groups.related_shapes(ShapeId::new(2)), ids(&[2, 3]));

        groups.ungroup(&ids(&[2]));
        assert_eq!(groups.related_shapes(ShapeId::new(3)), ids(&[3]));
        assert_eq!(groups.group_count(), 0);
    }

    #[test]
    fn test_empty_and_unknown_are_noops() {
        let mut groups = GroupHandler::new();
        groups.group(&[]);
        groups.ungroup(&ids(&[9]));
        assert_eq!(groups.group_count(), 0);
    }

    #[test]
    fn test_ungroup_ignores_ungrouped_ids() {
        let mut groups = GroupHandler::new();
        groups.group(&ids(&[1, 2, 3]));
        groups.ungroup(&ids(&[1, 7, 8]));

        assert_eq!(groups.related_shapes(ShapeId::new(2)), ids(&[2, 3]));
        assert_eq!(groups.related_shapes(ShapeId::new(7)), ids(&[7]));
        assert_eq!(groups.group_count(), 1);
    }

    #[test]
    fn test_singleton_group() {
        let mut groups = GroupHandler::new();
        groups.group(&ids(&[4]));
        assert!(groups.group_of(ShapeId::new(4)).is_some());
        assert_eq!(groups.related_shapes(ShapeId::new(4)), ids(&[4]));

        groups.ungroup(&ids(&[4]));
        assert!(groups.group_of(ShapeId::new(4)).is_none());
    }
}
