//! Arena node and bounded label payload.

use core::fmt;

/// Height of an empty subtree. A leaf node has height 0.
pub const EMPTY_HEIGHT: i32 = -1;

/// Bounded label payload stored next to each key.
///
/// At most [`Label::MAX_CHARS`] characters are retained; longer inputs are
/// truncated, never rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label(String);

impl Label {
    /// Capacity in characters, not bytes.
    pub const MAX_CHARS: usize = 100;

    pub fn new(s: &str) -> Self {
        match s.char_indices().nth(Self::MAX_CHARS) {
            Some((cut, _)) => Self(s[..cut].to_string()),
            None => Self(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Arena slot of the roster tree.
///
/// No parent link: rebalancing happens on the unwind of the recursive
/// mutations in [`crate::balance`], so only child indices are stored.
#[derive(Clone, Debug)]
pub struct AvlNode {
    pub key: i64,
    pub label: Label,
    pub left: Option<u32>,
    pub right: Option<u32>,
    /// Cached subtree height: empty = [`EMPTY_HEIGHT`], leaf = 0, otherwise
    /// `1 + max(height(left), height(right))`.
    pub height: i32,
}

impl AvlNode {
    pub fn new(key: i64, label: Label) -> Self {
        Self {
            key,
            label,
            left: None,
            right: None,
            height: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AvlNode, Label};

    #[test]
    fn label_keeps_short_input_intact() {
        let label = Label::new("Alice");
        assert_eq!(label.as_str(), "Alice");
    }

    #[test]
    fn label_truncates_to_capacity() {
        let long: String = "x".repeat(250);
        let label = Label::new(&long);
        assert_eq!(label.as_str().chars().count(), Label::MAX_CHARS);
    }

    #[test]
    fn label_truncation_respects_char_boundaries() {
        let long: String = "é".repeat(150);
        let label = Label::new(&long);
        assert_eq!(label.as_str().chars().count(), Label::MAX_CHARS);
        assert!(label.as_str().chars().all(|c| c == 'é'));
    }

    #[test]
    fn fresh_node_is_a_leaf() {
        let n = AvlNode::new(7, Label::new("Bob"));
        assert_eq!(n.height, 0);
        assert_eq!(n.left, None);
        assert_eq!(n.right, None);
    }
}
