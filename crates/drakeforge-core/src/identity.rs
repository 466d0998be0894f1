//! Drake identifiers and the allocator that hands them out

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a drake instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrakeId(pub u64);

impl DrakeId {
    /// Create a new drake ID
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DrakeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "drake:{}", self.0)
    }
}

/// Monotonic source of [`DrakeId`]s
///
/// Owned by whoever creates drakes and passed by `&mut` into the factory and
/// the merge resolver. Ids only ever move forward: reseeding after a restore
/// can raise the counter but never lower it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Create an allocator starting at id 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an allocator whose next id is `next`
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Return the current id and advance the counter
    pub fn next_id(&mut self) -> DrakeId {
        let id = DrakeId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to [`next_id`](Self::next_id) will return
    pub fn peek(&self) -> DrakeId {
        DrakeId(self.next)
    }

    /// Raise the counter above the highest id seen in restored state
    ///
    /// Sets the counter to `max(counter, highest + 1)`. `None` means nothing
    /// was restored and leaves the counter unchanged.
    pub fn reset_above(&mut self, highest: Option<DrakeId>) {
        let Some(highest) = highest else {
            tracing::info!(next = self.next, "no restored drakes, id counter unchanged");
            return;
        };

        let candidate = highest.0.saturating_add(1);
        if candidate > self.next {
            self.next = candidate;
        }
        tracing::info!(highest = %highest, next = self.next, "reseeded drake id counter");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drake_id() {
        let id = DrakeId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "drake:42");
    }

    #[test]
    fn test_next_id_is_monotonic() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_id(), DrakeId(0));
        assert_eq!(ids.next_id(), DrakeId(1));
        assert_eq!(ids.peek(), DrakeId(2));
    }

    #[test]
    fn test_reset_above_never_regresses() {
        let mut ids = IdAllocator::new();
        ids.reset_above(Some(DrakeId(5)));
        ids.reset_above(Some(DrakeId(2)));
        assert!(ids.next_id() >= DrakeId(6));
    }

    #[test]
    fn test_reset_above_none_is_noop() {
        let mut ids = IdAllocator::starting_at(9);
        ids.reset_above(None);
        assert_eq!(ids.next_id(), DrakeId(9));
    }

    #[test]
    fn test_reset_above_higher_jumps_forward() {
        let mut ids = IdAllocator::starting_at(3);
        ids.reset_above(Some(DrakeId(10)));
        assert_eq!(ids.next_id(), DrakeId(11));
    }
}
