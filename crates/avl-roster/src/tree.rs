//! Owning wrapper around the arena, root index, and free list.

use crate::balance;
use crate::error::TreeError;
use crate::node::{AvlNode, Label};
use crate::query::{self, Direction};
use crate::traverse::{Entries, InOrderIter, TraverseOrder};

/// Height-balanced roster tree: unique `i64` keys, bounded labels.
///
/// Single-owner, single-threaded: no interior locking, callers serialize
/// access. Every mutation leaves the tree a valid AVL-BST.
pub struct AvlTree {
    arena: Vec<AvlNode>,
    free: Vec<u32>,
    root: Option<u32>,
    len: usize,
}

impl AvlTree {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// Inserts `key` with `label` (truncated to [`Label::MAX_CHARS`]
    /// characters). Returns `Ok(true)` if a node was created, `Ok(false)`
    /// if the key was already present — in which case the stored label is
    /// kept as-is.
    pub fn insert(&mut self, key: i64, label: &str) -> Result<bool, TreeError> {
        let (root, inserted) = balance::insert(
            &mut self.arena,
            &mut self.free,
            self.root,
            key,
            Label::new(label),
        )?;
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
        Ok(inserted)
    }

    /// Removes `key`. Returns `false` (and changes nothing) when the key is
    /// absent; deleting from an empty tree is likewise a no-op.
    pub fn remove(&mut self, key: i64) -> bool {
        let (root, removed) = balance::remove(&mut self.arena, &mut self.free, self.root, key);
        self.root = root;
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Label stored under `key`, or `None`.
    pub fn get(&self, key: i64) -> Option<&str> {
        query::find(&self.arena, self.root, key).map(|i| self.arena[i as usize].label.as_str())
    }

    pub fn has(&self, key: i64) -> bool {
        query::find(&self.arena, self.root, key).is_some()
    }

    /// Nearest entry strictly above/below `pivot`.
    pub fn closest(&self, pivot: i64, direction: Direction) -> Option<(i64, &str)> {
        query::find_closest(&self.arena, self.root, pivot, direction).map(|i| self.entry(i))
    }

    /// Entry with the lowest key.
    pub fn first(&self) -> Option<(i64, &str)> {
        query::first(&self.arena, self.root).map(|i| self.entry(i))
    }

    /// Entry with the highest key.
    pub fn last(&self) -> Option<(i64, &str)> {
        query::last(&self.arena, self.root).map(|i| self.entry(i))
    }

    /// Key of the entry whose label equals `label`; linear scan.
    pub fn key_of(&self, label: &str) -> Option<i64> {
        query::find_by_label(&self.arena, self.root, label).map(|i| self.arena[i as usize].key)
    }

    /// Recursive node count. O(n); [`Self::len`] is the O(1) counter.
    pub fn count(&self) -> usize {
        query::size(&self.arena, self.root)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the whole tree: -1 when empty, 0 for a single node.
    pub fn height(&self) -> i32 {
        balance::height(&self.arena, self.root)
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    /// Lazy traversal in the requested order.
    pub fn iter(&self, order: TraverseOrder) -> Entries<'_> {
        Entries::new(&self.arena, self.root, order)
    }

    /// In-order entries, ascending by key.
    pub fn entries(&self) -> InOrderIter<'_> {
        InOrderIter::new(&self.arena, self.root)
    }

    /// In-order visitor.
    pub fn for_each<F: FnMut(i64, &str)>(&self, mut f: F) {
        for (key, label) in self.entries() {
            f(key, label);
        }
    }

    /// Checks BST ordering, AVL balance, and height-field correctness.
    pub fn assert_valid(&self) -> Result<(), String> {
        balance::assert_avl(&self.arena, self.root)?;
        let reachable = self.count();
        if reachable != self.len {
            return Err(format!(
                "Length mismatch: {} reachable, len {}",
                reachable, self.len
            ));
        }
        if reachable + self.free.len() != self.arena.len() {
            return Err("Arena slot leak".to_string());
        }
        Ok(())
    }

    /// Debug rendering of the tree shape.
    pub fn to_string_tree(&self) -> String {
        balance::print(&self.arena, self.root, "")
    }

    fn entry(&self, i: u32) -> (i64, &str) {
        let n = &self.arena[i as usize];
        (n.key, n.label.as_str())
    }
}

impl Default for AvlTree {
    fn default() -> Self {
        Self::new()
    }
}
