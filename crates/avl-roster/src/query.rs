//! Read-only descent queries over the arena.

use crate::node::AvlNode;

/// Side of the pivot a [`find_closest`] query looks at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Least key strictly greater than the pivot.
    Above,
    /// Greatest key strictly less than the pivot.
    Below,
}

/// Finds the node holding `key`. Always returns a defined found/not-found
/// result.
pub fn find(arena: &[AvlNode], root: Option<u32>, key: i64) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        let curr_key = arena[i as usize].key;
        if key == curr_key {
            return Some(i);
        }
        curr = if key < curr_key {
            arena[i as usize].left
        } else {
            arena[i as usize].right
        };
    }
    None
}

/// Guided descent for the nearest neighbour of `pivot` on the given side.
///
/// The pivot itself never matches; a tree whose keys all sit on the wrong
/// side of the pivot yields `None`.
pub fn find_closest(
    arena: &[AvlNode],
    root: Option<u32>,
    pivot: i64,
    direction: Direction,
) -> Option<u32> {
    let mut curr = root;
    let mut best = None;
    while let Some(i) = curr {
        let key = arena[i as usize].key;
        curr = match direction {
            Direction::Above if key > pivot => {
                best = Some(i);
                arena[i as usize].left
            }
            Direction::Above => arena[i as usize].right,
            Direction::Below if key < pivot => {
                best = Some(i);
                arena[i as usize].right
            }
            Direction::Below => arena[i as usize].left,
        };
    }
    best
}

/// Leftmost node under `root`.
pub fn first(arena: &[AvlNode], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = arena[curr as usize].left {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node under `root`.
pub fn last(arena: &[AvlNode], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = arena[curr as usize].right {
        curr = r;
    }
    Some(curr)
}

fn size_inner(arena: &[AvlNode], root: u32) -> usize {
    1 + arena[root as usize]
        .left
        .map_or(0, |l| size_inner(arena, l))
        + arena[root as usize]
            .right
            .map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes under `root`.
pub fn size(arena: &[AvlNode], root: Option<u32>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}

/// Linear reverse lookup: the node whose label equals `name`, if any.
///
/// Labels are not indexed, so this walks the subtree; ties are resolved in
/// favour of the leftmost (lowest-key) match.
pub fn find_by_label(arena: &[AvlNode], root: Option<u32>, name: &str) -> Option<u32> {
    let i = root?;
    let n = &arena[i as usize];
    find_by_label(arena, n.left, name)
        .or_else(|| (n.label.as_str() == name).then_some(i))
        .or_else(|| find_by_label(arena, n.right, name))
}
