use std::collections::TryReserveError;

use thiserror::Error;

/// Errors surfaced by tree mutation.
///
/// Absent keys on delete/search and duplicate keys on insert are defined
/// no-op / absent results, not errors; label overflow truncates silently.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Arena growth failed before the new node was linked in; the tree is
    /// left exactly as it was.
    #[error("node allocation failed")]
    Allocation(#[from] TryReserveError),
}
