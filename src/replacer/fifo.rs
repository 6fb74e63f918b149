//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;

use crate::common::PageId;
use crate::replacer::{AccessOutcome, PolicyKind, ReplacementPolicy, ResidentSet};

/// Evicts the longest-resident page.
///
/// A strict insertion-order queue: the victim is always the front, and a
/// hit does NOT reorder anything; recency is invisible to FIFO.
pub struct FifoReplacer {
    resident: ResidentSet,

    /// Pages in insertion order (front = oldest).
    queue: VecDeque<PageId>,
}

impl FifoReplacer {
    /// Create a new FIFO replacer.
    ///
    /// # Panics
    /// Panics if `frame_count` is 0.
    pub fn new(frame_count: usize) -> Self {
        Self {
            resident: ResidentSet::new(frame_count),
            queue: VecDeque::with_capacity(frame_count),
        }
    }
}

impl ReplacementPolicy for FifoReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn on_reference(&mut self, page: PageId, _future: &[PageId]) -> AccessOutcome {
        if self.resident.contains(page) {
            return AccessOutcome::Hit;
        }

        let evicted = if self.resident.is_full() {
            self.queue.pop_front().map(|victim| {
                self.resident.evict(victim);
                victim
            })
        } else {
            None
        };

        self.resident.insert(page);
        self.queue.push_back(page);

        AccessOutcome::Fault { evicted }
    }

    fn resident_pages(&self) -> &[PageId] {
        self.resident.pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refer(policy: &mut FifoReplacer, id: u32) -> AccessOutcome {
        policy.on_reference(PageId::new(id), &[])
    }

    #[test]
    fn test_fifo_evicts_in_insertion_order() {
        let mut policy = FifoReplacer::new(3);

        for id in 1..=3 {
            assert_eq!(refer(&mut policy, id), AccessOutcome::Fault { evicted: None });
        }

        // Full set: victims come out oldest-first.
        assert_eq!(
            refer(&mut policy, 4),
            AccessOutcome::Fault {
                evicted: Some(PageId::new(1))
            }
        );
        assert_eq!(
            refer(&mut policy, 5),
            AccessOutcome::Fault {
                evicted: Some(PageId::new(2))
            }
        );
    }

    #[test]
    fn test_fifo_hit_does_not_reorder() {
        let mut policy = FifoReplacer::new(2);

        refer(&mut policy, 1);
        refer(&mut policy, 2);

        // Re-access page 1: still the oldest.
        assert_eq!(refer(&mut policy, 1), AccessOutcome::Hit);
        assert_eq!(
            refer(&mut policy, 3),
            AccessOutcome::Fault {
                evicted: Some(PageId::new(1))
            }
        );
    }

    #[test]
    fn test_fifo_snapshot_order() {
        let mut policy = FifoReplacer::new(3);

        refer(&mut policy, 1);
        refer(&mut policy, 2);
        refer(&mut policy, 3);
        refer(&mut policy, 4);

        // Victim removed by value, newcomer appended.
        assert_eq!(
            policy.resident_pages(),
            &[PageId::new(2), PageId::new(3), PageId::new(4)]
        );
    }
}
