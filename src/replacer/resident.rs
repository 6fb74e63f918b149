//! The bounded resident set shared by all policies.

use std::collections::HashSet;

use crate::common::PageId;

/// At most `capacity` resident pages, in an explicit order.
///
/// Two structures kept in sync on every insert/evict:
/// - `slots`: the order pages occupy frames. Queue-style policies append on
///   install and remove victims by value; the clock family overwrites in
///   place. Step snapshots reproduce this order verbatim.
/// - `index`: O(1) membership, so the hot hit/fault check never scans.
///
/// # Example
/// ```
/// use pagesim::{PageId, ResidentSet};
///
/// let mut set = ResidentSet::new(2);
/// set.insert(PageId::new(1));
/// set.insert(PageId::new(2));
/// assert!(set.is_full());
/// assert!(set.contains(PageId::new(1)));
/// ```
#[derive(Debug, Clone)]
pub struct ResidentSet {
    slots: Vec<PageId>,
    index: HashSet<PageId>,
    capacity: usize,
}

impl ResidentSet {
    /// Create an empty resident set.
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");

        Self {
            slots: Vec::with_capacity(capacity),
            index: HashSet::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of frames this set may occupy.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of pages currently resident.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no page is resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True when every frame is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// O(1) residency check.
    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.index.contains(&page)
    }

    /// Install a page in the last free slot.
    ///
    /// Callers only insert on a fault into a non-full set.
    pub fn insert(&mut self, page: PageId) {
        debug_assert!(!self.is_full(), "insert into a full resident set");
        debug_assert!(!self.contains(page), "insert of an already-resident page");

        self.slots.push(page);
        self.index.insert(page);
    }

    /// Remove a resident page, closing the gap in slot order.
    pub fn evict(&mut self, page: PageId) {
        debug_assert!(self.contains(page), "evict of a non-resident page");

        if let Some(pos) = self.slots.iter().position(|&p| p == page) {
            self.slots.remove(pos);
        }
        self.index.remove(&page);
    }

    /// Overwrite the page at `slot`, returning the displaced page.
    ///
    /// This is the clock family's in-place install; slot order is preserved.
    pub fn replace_at(&mut self, slot: usize, page: PageId) -> PageId {
        debug_assert!(!self.contains(page), "install of an already-resident page");

        let old = std::mem::replace(&mut self.slots[slot], page);
        self.index.remove(&old);
        self.index.insert(page);
        old
    }

    /// The page occupying `slot`.
    #[inline]
    pub fn page_at(&self, slot: usize) -> PageId {
        self.slots[slot]
    }

    /// Resident pages in slot order.
    #[inline]
    pub fn pages(&self) -> &[PageId] {
        &self.slots
    }
}
