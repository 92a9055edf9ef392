//! The balancing engine: insert, remove, and the four-case rotation logic.
//!
//! All functions take the arena and the current subtree root by value and
//! return the new root by value; the caller reassigns its root index after
//! each mutation. Slots released by [`remove`] go onto the caller-owned free
//! list and are recycled by the next [`insert`].

use crate::error::TreeError;
use crate::node::{AvlNode, Label, EMPTY_HEIGHT};

/// Height of the subtree rooted at `node` (`None` = empty).
#[inline]
pub fn height(arena: &[AvlNode], node: Option<u32>) -> i32 {
    node.map_or(EMPTY_HEIGHT, |i| arena[i as usize].height)
}

#[inline]
fn update_height(arena: &mut [AvlNode], i: u32) {
    let l = height(arena, arena[i as usize].left);
    let r = height(arena, arena[i as usize].right);
    arena[i as usize].height = 1 + l.max(r);
}

/// `height(left) - height(right)` at `i`.
#[inline]
pub fn balance_factor(arena: &[AvlNode], i: u32) -> i32 {
    height(arena, arena[i as usize].left) - height(arena, arena[i as usize].right)
}

/// Right rotation: promote `n`'s left child over `n`.
///
/// ```text
///      n            nl
///     /      →        \
///   nl                 n
///     \               /
///      b             b
/// ```
pub fn rotate_right(arena: &mut [AvlNode], n: u32) -> u32 {
    let nl = arena[n as usize].left.expect("left child exists");
    let b = arena[nl as usize].right;
    arena[nl as usize].right = Some(n);
    arena[n as usize].left = b;
    update_height(arena, n);
    update_height(arena, nl);
    nl
}

/// Left rotation: promote `n`'s right child over `n`.
///
/// ```text
///   n                 nr
///     \       →      /
///      nr           n
///     /              \
///    b                b
/// ```
pub fn rotate_left(arena: &mut [AvlNode], n: u32) -> u32 {
    let nr = arena[n as usize].right.expect("right child exists");
    let b = arena[nr as usize].left;
    arena[nr as usize].left = Some(n);
    arena[n as usize].right = b;
    update_height(arena, n);
    update_height(arena, nr);
    nr
}

/// Four-case AVL dispatch at `n`, assuming `n`'s height is current.
///
/// Single vs. double rotation is chosen from the taller child's balance
/// factor; returns the subtree's new root. A balanced `n` passes through
/// untouched, so both the insert and remove unwinds call this at every
/// level.
pub fn rebalance(arena: &mut [AvlNode], n: u32) -> u32 {
    let bf = balance_factor(arena, n);
    if bf > 1 {
        let l = arena[n as usize].left.expect("left child exists");
        if balance_factor(arena, l) >= 0 {
            rotate_right(arena, n)
        } else {
            let new_l = rotate_left(arena, l);
            arena[n as usize].left = Some(new_l);
            rotate_right(arena, n)
        }
    } else if bf < -1 {
        let r = arena[n as usize].right.expect("right child exists");
        if balance_factor(arena, r) <= 0 {
            rotate_left(arena, n)
        } else {
            let new_r = rotate_right(arena, r);
            arena[n as usize].right = Some(new_r);
            rotate_left(arena, n)
        }
    } else {
        n
    }
}

fn claim_slot(
    arena: &mut Vec<AvlNode>,
    free: &mut Vec<u32>,
    key: i64,
    label: Label,
) -> Result<u32, TreeError> {
    if let Some(i) = free.pop() {
        arena[i as usize] = AvlNode::new(key, label);
        return Ok(i);
    }
    arena.try_reserve(1)?;
    arena.push(AvlNode::new(key, label));
    Ok((arena.len() - 1) as u32)
}

/// Inserts `key` into the subtree rooted at `root`.
///
/// Returns the new subtree root and whether a node was created. The node is
/// allocated at the empty-subtree base case, before any link is rewritten,
/// so an allocation failure leaves every ancestor untouched. A key already
/// present is a no-op: no allocation, and the stored label is kept.
pub fn insert(
    arena: &mut Vec<AvlNode>,
    free: &mut Vec<u32>,
    root: Option<u32>,
    key: i64,
    label: Label,
) -> Result<(u32, bool), TreeError> {
    let Some(curr) = root else {
        return Ok((claim_slot(arena, free, key, label)?, true));
    };

    let curr_key = arena[curr as usize].key;
    let inserted = if key < curr_key {
        let left = arena[curr as usize].left;
        let (l, inserted) = insert(arena, free, left, key, label)?;
        arena[curr as usize].left = Some(l);
        inserted
    } else if key > curr_key {
        let right = arena[curr as usize].right;
        let (r, inserted) = insert(arena, free, right, key, label)?;
        arena[curr as usize].right = Some(r);
        inserted
    } else {
        return Ok((curr, false));
    };

    if !inserted {
        return Ok((curr, false));
    }

    update_height(arena, curr);
    Ok((rebalance(arena, curr), true))
}

/// Removes `key` from the subtree rooted at `root`.
///
/// Returns the new subtree root and whether a node was released. An absent
/// key (or an empty subtree) is a no-op. In the two-child case the in-order
/// successor's key and label move into the matched node and the successor's
/// original slot is the one released, after a bounded recursive delete in
/// the right subtree that is guaranteed to hit a zero/one-child case.
///
/// Unlike insert, the unwind may rotate at several ancestors: each level is
/// rebalanced independently after its height is recomputed.
pub fn remove(
    arena: &mut [AvlNode],
    free: &mut Vec<u32>,
    root: Option<u32>,
    key: i64,
) -> (Option<u32>, bool) {
    let Some(curr) = root else {
        return (None, false);
    };

    let curr_key = arena[curr as usize].key;
    let removed;
    if key < curr_key {
        let left = arena[curr as usize].left;
        let (l, r) = remove(arena, free, left, key);
        arena[curr as usize].left = l;
        removed = r;
    } else if key > curr_key {
        let right = arena[curr as usize].right;
        let (new_r, r) = remove(arena, free, right, key);
        arena[curr as usize].right = new_r;
        removed = r;
    } else {
        match (arena[curr as usize].left, arena[curr as usize].right) {
            (None, child) | (child, None) => {
                free.push(curr);
                return (child, true);
            }
            (Some(_), Some(r)) => {
                let mut succ = r;
                while let Some(l) = arena[succ as usize].left {
                    succ = l;
                }
                let succ_key = arena[succ as usize].key;
                let succ_label = arena[succ as usize].label.clone();
                arena[curr as usize].key = succ_key;
                arena[curr as usize].label = succ_label;
                let (new_r, _) = remove(arena, free, Some(r), succ_key);
                arena[curr as usize].right = new_r;
                removed = true;
            }
        }
    }

    if !removed {
        return (Some(curr), false);
    }

    update_height(arena, curr);
    (Some(rebalance(arena, curr)), true)
}

/// Checks BST ordering, AVL balance, and height-field correctness under
/// `root`. Intended for tests and debugging.
pub fn assert_avl(arena: &[AvlNode], root: Option<u32>) -> Result<(), String> {
    fn walk(
        arena: &[AvlNode],
        node: Option<u32>,
        lo: Option<i64>,
        hi: Option<i64>,
    ) -> Result<i32, String> {
        let Some(i) = node else {
            return Ok(EMPTY_HEIGHT);
        };
        let n = &arena[i as usize];
        if let Some(lo) = lo {
            if n.key <= lo {
                return Err("Node order violated".to_string());
            }
        }
        if let Some(hi) = hi {
            if n.key >= hi {
                return Err("Node order violated".to_string());
            }
        }
        let lh = walk(arena, n.left, lo, Some(n.key))?;
        let rh = walk(arena, n.right, Some(n.key), hi)?;
        let expected = 1 + lh.max(rh);
        if n.height != expected {
            return Err(format!(
                "Height mismatch: expected {expected}, got {}",
                n.height
            ));
        }
        if !(-1..=1).contains(&(lh - rh)) {
            return Err("AVL balance violated".to_string());
        }
        Ok(expected)
    }

    walk(arena, root, None, None).map(|_| ())
}

/// Debug printer for the tree shape.
pub fn print(arena: &[AvlNode], node: Option<u32>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print(arena, n.left, &format!("{tab}  "));
            let right = print(arena, n.right, &format!("{tab}  "));
            format!(
                "Node[{i}] [h={}] {{ {} = {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.height,
                n.key,
                n.label.as_str()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(keys: &[i64]) -> (Vec<AvlNode>, Vec<u32>, Option<u32>) {
        let mut arena = Vec::new();
        let mut free = Vec::new();
        let mut root = None;
        for &k in keys {
            let (r, inserted) =
                insert(&mut arena, &mut free, root, k, Label::new("n")).expect("insert");
            assert!(inserted);
            root = Some(r);
        }
        (arena, free, root)
    }

    #[test]
    fn single_rotation_restores_balance() {
        // Ascending insert forces an RR case at the root.
        let (arena, _, root) = build(&[1, 2, 3]);
        let r = root.expect("root exists");
        assert_eq!(arena[r as usize].key, 2);
        assert_avl(&arena, root).unwrap();
    }

    #[test]
    fn double_rotation_restores_balance() {
        // 3, 1, 2 is the LR case.
        let (arena, _, root) = build(&[3, 1, 2]);
        let r = root.expect("root exists");
        assert_eq!(arena[r as usize].key, 2);
        assert_avl(&arena, root).unwrap();
    }

    #[test]
    fn removed_slot_is_recycled() {
        let (mut arena, mut free, root) = build(&[2, 1, 3]);
        let (root, removed) = remove(&mut arena, &mut free, root, 1);
        assert!(removed);
        assert_eq!(free.len(), 1);
        let slots = arena.len();
        let (_, inserted) =
            insert(&mut arena, &mut free, root, 4, Label::new("n")).expect("insert");
        assert!(inserted);
        assert_eq!(arena.len(), slots);
        assert!(free.is_empty());
    }

    #[test]
    fn validator_catches_a_broken_height() {
        let (mut arena, _, root) = build(&[2, 1, 3]);
        arena[root.unwrap() as usize].height = 5;
        assert!(assert_avl(&arena, root).is_err());
    }
}
