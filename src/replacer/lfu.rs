//! LFU (Least-Frequently-Used) replacement policy.

use std::collections::HashMap;

use crate::common::PageId;
use crate::replacer::{AccessOutcome, PolicyKind, ReplacementPolicy, ResidentSet};

/// Evicts the resident page with the minimum reference frequency.
///
/// Frequency counts references since insertion: it resets to 1 when a page
/// is installed and increments on every hit. Ties are broken by the
/// documented rule (the earliest-inserted page among the tied minimum),
/// which the victim scan realizes directly, because LFU's resident order IS
/// insertion order (victims are removed by value, newcomers appended) and
/// the minimum scan keeps the first of equals.
pub struct LfuReplacer {
    resident: ResidentSet,

    /// References since insertion, per resident page.
    frequency: HashMap<PageId, u64>,
}

impl LfuReplacer {
    /// Create a new LFU replacer.
    ///
    /// # Panics
    /// Panics if `frame_count` is 0.
    pub fn new(frame_count: usize) -> Self {
        Self {
            resident: ResidentSet::new(frame_count),
            frequency: HashMap::with_capacity(frame_count),
        }
    }

    /// First resident page holding the minimum frequency.
    fn victim(&self) -> Option<PageId> {
        self.resident
            .pages()
            .iter()
            .copied()
            .min_by_key(|page| self.frequency.get(page).copied().unwrap_or(0))
    }
}

impl ReplacementPolicy for LfuReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lfu
    }

    fn on_reference(&mut self, page: PageId, _future: &[PageId]) -> AccessOutcome {
        if self.resident.contains(page) {
            *self.frequency.entry(page).or_insert(0) += 1;
            return AccessOutcome::Hit;
        }

        let evicted = if self.resident.is_full() {
            self.victim().map(|victim| {
                self.resident.evict(victim);
                self.frequency.remove(&victim);
                victim
            })
        } else {
            None
        };

        self.resident.insert(page);
        self.frequency.insert(page, 1);

        AccessOutcome::Fault { evicted }
    }

    fn resident_pages(&self) -> &[PageId] {
        self.resident.pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refer(policy: &mut LfuReplacer, id: u32) -> AccessOutcome {
        policy.on_reference(PageId::new(id), &[])
    }

    #[test]
    fn test_lfu_evicts_least_frequent() {
        let mut policy = LfuReplacer::new(3);

        refer(&mut policy, 1);
        refer(&mut policy, 2);
        refer(&mut policy, 3);
        refer(&mut policy, 1);
        refer(&mut policy, 1);
        refer(&mut policy, 2);

        // Frequencies: 1 → 3, 2 → 2, 3 → 1.
        assert_eq!(
            refer(&mut policy, 4),
            AccessOutcome::Fault {
                evicted: Some(PageId::new(3))
            }
        );
    }

    #[test]
    fn test_lfu_tie_break_is_earliest_inserted() {
        let mut policy = LfuReplacer::new(3);

        refer(&mut policy, 1);
        refer(&mut policy, 2);
        refer(&mut policy, 3);

        // All at frequency 1: the earliest-inserted page loses.
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
    fn test_lfu_frequency_resets_on_reinstall() {
        let mut policy = LfuReplacer::new(2);

        refer(&mut policy, 1);
        refer(&mut policy, 1);
        refer(&mut policy, 1);
        refer(&mut policy, 2);

        // Evicts 2 (freq 1), not the hot page 1.
        assert_eq!(
            refer(&mut policy, 3),
            AccessOutcome::Fault {
                evicted: Some(PageId::new(2))
            }
        );

        // Re-admit 2: its old count of 1 is gone. Page 3 now holds the
        // minimum (1 vs. page 1's 3) and is evicted.
        assert_eq!(
            refer(&mut policy, 2),
            AccessOutcome::Fault {
                evicted: Some(PageId::new(3))
            }
        );
    }
}
