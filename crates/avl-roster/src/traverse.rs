//! Lazy traversal iterators.
//!
//! Each iterator borrows the arena immutably and yields `(key, label)`
//! pairs; restarting a traversal means constructing a fresh iterator. The
//! depth-first orders keep an explicit stack, level order keeps a FIFO of
//! pending subtree roots.

use std::collections::VecDeque;

use crate::node::AvlNode;

/// Visit order selector for [`crate::AvlTree::iter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraverseOrder {
    /// Node, then left subtree, then right subtree.
    Pre,
    /// Left subtree, node, right subtree — ascending key order.
    In,
    /// Left subtree, right subtree, then node.
    Post,
    /// Breadth-first, row by row from the root.
    Level,
}

/// In-order iterator backed by a left-spine stack.
pub struct InOrderIter<'a> {
    arena: &'a [AvlNode],
    stack: Vec<u32>,
}

impl<'a> InOrderIter<'a> {
    pub(crate) fn new(arena: &'a [AvlNode], root: Option<u32>) -> Self {
        let mut it = Self {
            arena,
            stack: Vec::new(),
        };
        it.push_left_spine(root);
        it
    }

    fn push_left_spine(&mut self, mut node: Option<u32>) {
        while let Some(i) = node {
            self.stack.push(i);
            node = self.arena[i as usize].left;
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = (i64, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.stack.pop()?;
        let n = &self.arena[i as usize];
        self.push_left_spine(n.right);
        Some((n.key, n.label.as_str()))
    }
}

/// Pre-order iterator.
pub struct PreOrderIter<'a> {
    arena: &'a [AvlNode],
    stack: Vec<u32>,
}

impl<'a> PreOrderIter<'a> {
    pub(crate) fn new(arena: &'a [AvlNode], root: Option<u32>) -> Self {
        Self {
            arena,
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = (i64, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.stack.pop()?;
        let n = &self.arena[i as usize];
        // Right first so the left subtree is popped first.
        if let Some(r) = n.right {
            self.stack.push(r);
        }
        if let Some(l) = n.left {
            self.stack.push(l);
        }
        Some((n.key, n.label.as_str()))
    }
}

/// Post-order iterator; the flag marks nodes whose children were expanded.
pub struct PostOrderIter<'a> {
    arena: &'a [AvlNode],
    stack: Vec<(u32, bool)>,
}

impl<'a> PostOrderIter<'a> {
    pub(crate) fn new(arena: &'a [AvlNode], root: Option<u32>) -> Self {
        Self {
            arena,
            stack: root.map(|r| (r, false)).into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = (i64, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((i, expanded)) = self.stack.pop() {
            let n = &self.arena[i as usize];
            if expanded {
                return Some((n.key, n.label.as_str()));
            }
            self.stack.push((i, true));
            if let Some(r) = n.right {
                self.stack.push((r, false));
            }
            if let Some(l) = n.left {
                self.stack.push((l, false));
            }
        }
        None
    }
}

/// Breadth-first iterator over a FIFO of pending subtree roots, seeded with
/// the root; each visited node enqueues its non-empty children.
pub struct LevelOrderIter<'a> {
    arena: &'a [AvlNode],
    queue: VecDeque<u32>,
}

impl<'a> LevelOrderIter<'a> {
    pub(crate) fn new(arena: &'a [AvlNode], root: Option<u32>) -> Self {
        Self {
            arena,
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for LevelOrderIter<'a> {
    type Item = (i64, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.queue.pop_front()?;
        let n = &self.arena[i as usize];
        if let Some(l) = n.left {
            self.queue.push_back(l);
        }
        if let Some(r) = n.right {
            self.queue.push_back(r);
        }
        Some((n.key, n.label.as_str()))
    }
}

/// Order-erased traversal handle returned by [`crate::AvlTree::iter`].
pub enum Entries<'a> {
    Pre(PreOrderIter<'a>),
    In(InOrderIter<'a>),
    Post(PostOrderIter<'a>),
    Level(LevelOrderIter<'a>),
}

impl<'a> Entries<'a> {
    pub(crate) fn new(arena: &'a [AvlNode], root: Option<u32>, order: TraverseOrder) -> Self {
        match order {
            TraverseOrder::Pre => Entries::Pre(PreOrderIter::new(arena, root)),
            TraverseOrder::In => Entries::In(InOrderIter::new(arena, root)),
            TraverseOrder::Post => Entries::Post(PostOrderIter::new(arena, root)),
            TraverseOrder::Level => Entries::Level(LevelOrderIter::new(arena, root)),
        }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = (i64, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Entries::Pre(it) => it.next(),
            Entries::In(it) => it.next(),
            Entries::Post(it) => it.next(),
            Entries::Level(it) => it.next(),
        }
    }
}
