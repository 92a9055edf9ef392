//! Height-balanced AVL roster tree.
//!
//! An ordered container keyed by a numeric id (`i64`) with a bounded name
//! label per key, self-balancing after every mutation. Built for roster-style
//! records (member seniority in months, usernames with scores) where callers
//! need ordered traversal, nearest-neighbour queries, and O(log n) updates.
//!
//! Instead of raw pointers, all child "pointers" are `Option<u32>` indices
//! into a `Vec`-backed arena owned by [`AvlTree`]. The mutating functions in
//! [`balance`] take the current subtree root by value and return the new root
//! by value, so the wrapper (or any caller holding a root index) simply
//! reassigns its root after each call.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`node`] | [`AvlNode`] arena slot and the bounded [`Label`] payload |
//! | [`balance`] | `insert` / `remove`, the four-case rotation engine, validator |
//! | [`query`] | `find`, `find_closest`, `first` / `last`, `size` |
//! | [`traverse`] | pre / in / post / level-order iterators |
//! | [`tree`] | the owning [`AvlTree`] wrapper |
//! | [`error`] | [`TreeError`] |

pub mod balance;
pub mod error;
pub mod node;
pub mod query;
pub mod traverse;
pub mod tree;

pub use error::TreeError;
pub use node::{AvlNode, Label};
pub use query::Direction;
pub use traverse::{Entries, TraverseOrder};
pub use tree::AvlTree;
