//! OPT - Belady's optimal replacement, the offline oracle.

use crate::common::PageId;
use crate::replacer::{AccessOutcome, PolicyKind, ReplacementPolicy, ResidentSet};

/// Evicts the resident page whose next use lies farthest in the future.
///
/// A page that never occurs again wins immediately over any page that does;
/// among pages with future uses, the farthest first occurrence is chosen
/// (first occurrences are distinct indices, so no tie-break is needed).
///
/// This is a reference oracle, not a production policy: each fault scans the
/// remaining trace suffix, O(trace length) per fault and O(n²) worst case.
/// Fine for the bounded traces this simulator replays.
pub struct OptReplacer {
    resident: ResidentSet,
}

impl OptReplacer {
    /// Create a new OPT replacer.
    ///
    /// # Panics
    /// Panics if `frame_count` is 0.
    pub fn new(frame_count: usize) -> Self {
        Self {
            resident: ResidentSet::new(frame_count),
        }
    }

    /// Scan resident pages against the trace suffix for the victim.
    fn victim(&self, future: &[PageId]) -> Option<PageId> {
        let mut farthest: Option<(usize, PageId)> = None;

        for &page in self.resident.pages() {
            match future.iter().position(|&p| p == page) {
                // Never used again: evict before anything with a future use.
                None => return Some(page),
                Some(next_use) => {
                    if farthest.map_or(true, |(best, _)| next_use > best) {
                        farthest = Some((next_use, page));
                    }
                }
            }
        }

        farthest.map(|(_, page)| page)
    }
}

impl ReplacementPolicy for OptReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Opt
    }

    fn on_reference(&mut self, page: PageId, future: &[PageId]) -> AccessOutcome {
        if self.resident.contains(page) {
            return AccessOutcome::Hit;
        }

        let evicted = if self.resident.is_full() {
            self.victim(future).map(|victim| {
                self.resident.evict(victim);
                victim
            })
        } else {
            None
        };

        self.resident.insert(page);

        AccessOutcome::Fault { evicted }
    }

    fn resident_pages(&self) -> &[PageId] {
        self.resident.pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(ids: &[u32]) -> Vec<PageId> {
        ids.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_opt_evicts_farthest_next_use() {
        let mut policy = OptReplacer::new(3);

        for &id in &[1, 2, 3] {
            let _ = policy.on_reference(PageId::new(id), &[]);
        }

        // Next uses: 1 soonest, 3 farthest.
        let future = pages(&[1, 2, 1, 2, 3]);
        assert_eq!(
            policy.on_reference(PageId::new(4), &future),
            AccessOutcome::Fault {
                evicted: Some(PageId::new(3))
            }
        );
    }

    #[test]
    fn test_opt_dead_page_beats_any_live_page() {
        let mut policy = OptReplacer::new(3);

        for &id in &[1, 2, 3] {
            let _ = policy.on_reference(PageId::new(id), &[]);
        }

        // Page 2 never reappears; 3 is used much later but still loses.
        let future = pages(&[1, 1, 1, 3]);
        assert_eq!(
            policy.on_reference(PageId::new(4), &future),
            AccessOutcome::Fault {
                evicted: Some(PageId::new(2))
            }
        );
    }

    #[test]
    fn test_opt_empty_future_evicts_first_resident() {
        let mut policy = OptReplacer::new(2);

        let _ = policy.on_reference(PageId::new(1), &[]);
        let _ = policy.on_reference(PageId::new(2), &[]);

        // Nothing reappears: the scan stops at the first resident page.
        assert_eq!(
            policy.on_reference(PageId::new(3), &[]),
            AccessOutcome::Fault {
                evicted: Some(PageId::new(1))
            }
        );
    }
}
