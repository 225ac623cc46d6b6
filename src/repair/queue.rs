//! The candidate queue manager (§4.3's current-/next- collapse/flip sets).
//!
//! The teacher's own query builder never needed an ordered, removable-
//! anywhere set, so this follows the hash-set-plus-lazy-validation
//! alternative the spec's design notes call out explicitly ("Working sets
//! with removable entries"): staleness is caught by re-classifying on pop
//! (see `driver.rs`), not by proactively scrubbing every working set on
//! every mesh mutation.

use std::collections::HashSet;

use crate::mesh::EdgeId;

/// A generation's pair of working sets.
#[derive(Debug, Default)]
pub struct Queues {
    pub collapse: HashSet<EdgeId>,
    pub flip: HashSet<EdgeId>,
}

impl Queues {
    pub fn is_empty(&self) -> bool {
        self.collapse.is_empty() && self.flip.is_empty()
    }
}

/// Removes and returns an arbitrary member of `set`, or `None` if empty.
/// The driver does not rely on any particular draw order (§5).
pub fn pop_any(set: &mut HashSet<EdgeId>) -> Option<EdgeId> {
    let e = *set.iter().next()?;
    set.remove(&e);
    Some(e)
}
