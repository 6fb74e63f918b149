//! LRU (Least-Recently-Used) replacement policy.

use std::collections::HashMap;

use crate::common::PageId;
use crate::replacer::{AccessOutcome, PolicyKind, ReplacementPolicy, ResidentSet};

/// Evicts the page with the minimum last-access logical timestamp.
///
/// The timestamp is refreshed on every hit and on insertion, and strictly
/// increases across references, so the minimum is always unique; LRU needs
/// no tie-break.
pub struct LruReplacer {
    resident: ResidentSet,

    /// Last-access stamp per resident page.
    last_access: HashMap<PageId, u64>,

    /// Logical clock, bumped once per reference.
    tick: u64,
}

impl LruReplacer {
    /// Create a new LRU replacer.
    ///
    /// # Panics
    /// Panics if `frame_count` is 0.
    pub fn new(frame_count: usize) -> Self {
        Self {
            resident: ResidentSet::new(frame_count),
            last_access: HashMap::with_capacity(frame_count),
            tick: 0,
        }
    }

    /// The resident page with the oldest stamp.
    fn victim(&self) -> Option<PageId> {
        self.resident
            .pages()
            .iter()
            .copied()
            .min_by_key(|page| self.last_access.get(page).copied().unwrap_or(0))
    }
}

impl ReplacementPolicy for LruReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn on_reference(&mut self, page: PageId, _future: &[PageId]) -> AccessOutcome {
        self.tick += 1;
        let now = self.tick;

        if self.resident.contains(page) {
            self.last_access.insert(page, now);
            return AccessOutcome::Hit;
        }

        let evicted = if self.resident.is_full() {
            self.victim().map(|victim| {
                self.resident.evict(victim);
                self.last_access.remove(&victim);
                victim
            })
        } else {
            None
        };

        self.resident.insert(page);
        self.last_access.insert(page, now);

        AccessOutcome::Fault { evicted }
    }

    fn resident_pages(&self) -> &[PageId] {
        self.resident.pages()
    }
}
