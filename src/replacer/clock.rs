//! The clock family: one-bit and use/modify-bit second chance.
//!
//! Both variants keep per-slot flags and a rotating hand. State only
//! transitions on a fault; a hit just sets the slot's use-bit. While the
//! set is still filling, the sweep always stops on the next empty slot, so
//! installs land at `hand == resident.len()` and the slot order stays in
//! lockstep with the bit vectors.

use crate::common::PageId;
use crate::replacer::{AccessOutcome, PolicyKind, ReplacementPolicy, ResidentSet};

/// One-bit CLOCK.
///
/// On a fault the hand sweeps forward, clearing use-bits, until it lands on
/// a slot whose use-bit is already clear; that slot is the victim. The
/// newcomer is installed there with its use-bit set and the hand stays on
/// it; the fresh bit is the first thing the next sweep clears.
pub struct SimpleClockReplacer {
    resident: ResidentSet,
    use_bits: Vec<bool>,
    hand: usize,
}

impl SimpleClockReplacer {
    /// Create a new simple clock replacer.
    ///
    /// # Panics
    /// Panics if `frame_count` is 0.
    pub fn new(frame_count: usize) -> Self {
        Self {
            resident: ResidentSet::new(frame_count),
            use_bits: vec![false; frame_count],
            hand: 0,
        }
    }

    /// Advance past set use-bits, clearing them, and stop on a clear one.
    fn sweep(&mut self) -> usize {
        let capacity = self.resident.capacity();
        while self.use_bits[self.hand] {
            self.use_bits[self.hand] = false;
            self.hand = (self.hand + 1) % capacity;
        }
        self.hand
    }
}

impl ReplacementPolicy for SimpleClockReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::SimpleClock
    }

    fn on_reference(&mut self, page: PageId, _future: &[PageId]) -> AccessOutcome {
        if self.resident.contains(page) {
            if let Some(slot) = self.resident.pages().iter().position(|&p| p == page) {
                self.use_bits[slot] = true;
            }
            return AccessOutcome::Hit;
        }

        let slot = self.sweep();

        let evicted = if self.resident.is_full() {
            Some(self.resident.replace_at(slot, page))
        } else {
            debug_assert_eq!(slot, self.resident.len());
            self.resident.insert(page);
            None
        };

        self.use_bits[slot] = true;

        AccessOutcome::Fault { evicted }
    }

    fn resident_pages(&self) -> &[PageId] {
        self.resident.pages()
    }
}

/// Use-bit + modify-bit CLOCK.
///
/// The sweep looks for a slot with both bits clear, clearing use-bits as it
/// passes set ones. The newcomer is installed at that slot with its use-bit
/// set and modify-bit clear, and the hand advances past it.
///
/// The simulated workload models no writes, so modify-bits are cleared on
/// install and never set afterwards: the sweep degenerates to a use-bit
/// scan. The variant still behaves differently from [`SimpleClockReplacer`]
/// because of where the hand rests after an install.
pub struct EnhancedClockReplacer {
    resident: ResidentSet,
    use_bits: Vec<bool>,
    modify_bits: Vec<bool>,
    hand: usize,
}

impl EnhancedClockReplacer {
    /// Create a new enhanced clock replacer.
    ///
    /// # Panics
    /// Panics if `frame_count` is 0.
    pub fn new(frame_count: usize) -> Self {
        Self {
            resident: ResidentSet::new(frame_count),
            use_bits: vec![false; frame_count],
            modify_bits: vec![false; frame_count],
            hand: 0,
        }
    }

    /// Find the first (use, modify) == (false, false) slot from the hand.
    ///
    /// Terminates because modify-bits are never set: after at most one full
    /// revolution of clearing, a clear use-bit is under the hand.
    fn sweep(&mut self) -> usize {
        let capacity = self.resident.capacity();
        loop {
            if !self.use_bits[self.hand] && !self.modify_bits[self.hand] {
                return self.hand;
            }
            self.use_bits[self.hand] = false;
            self.hand = (self.hand + 1) % capacity;
        }
    }
}

impl ReplacementPolicy for EnhancedClockReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::EnhancedClock
    }

    fn on_reference(&mut self, page: PageId, _future: &[PageId]) -> AccessOutcome {
        if self.resident.contains(page) {
            if let Some(slot) = self.resident.pages().iter().position(|&p| p == page) {
                self.use_bits[slot] = true;
            }
            return AccessOutcome::Hit;
        }

        let slot = self.sweep();

        let evicted = if self.resident.is_full() {
            Some(self.resident.replace_at(slot, page))
        } else {
            debug_assert_eq!(slot, self.resident.len());
            self.resident.insert(page);
            None
        };

        self.use_bits[slot] = true;
        self.modify_bits[slot] = false;
        self.hand = (slot + 1) % self.resident.capacity();

        AccessOutcome::Fault { evicted }
    }

    fn resident_pages(&self) -> &[PageId] {
        self.resident.pages()
    }
}
