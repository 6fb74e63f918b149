//! Reference traces and their generator.

use rand::Rng;

use crate::common::PageId;

/// A finite, immutable, ordered sequence of page references.
///
/// Fixed at construction; the simulator replays it without mutating it.
///
/// # Example
/// ```
/// use pagesim::ReferenceTrace;
///
/// let trace = ReferenceTrace::from_ids([1, 2, 3, 2, 1]);
/// assert_eq!(trace.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTrace {
    pages: Vec<PageId>,
}

impl ReferenceTrace {
    /// Wrap an explicit page sequence.
    pub fn new(pages: Vec<PageId>) -> Self {
        Self { pages }
    }

    /// Build a trace from raw page numbers.
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        Self {
            pages: ids.into_iter().map(PageId::new).collect(),
        }
    }

    /// Sample a trace uniformly from `[1, max_page_id]`.
    ///
    /// Draws from the thread-local generator, so repeated calls are NOT
    /// reproducible; use [`ReferenceTrace::generate_with`] and a seeded rng
    /// when determinism matters.
    ///
    /// # Panics
    /// Panics if `max_page_id` is 0.
    pub fn generate(length: usize, max_page_id: u32) -> Self {
        Self::generate_with(&mut rand::thread_rng(), length, max_page_id)
    }

    /// Sample a trace uniformly from `[1, max_page_id]` using `rng`.
    ///
    /// # Panics
    /// Panics if `max_page_id` is 0.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, length: usize, max_page_id: u32) -> Self {
        assert!(max_page_id >= 1, "max_page_id must be >= 1");

        Self {
            pages: (0..length)
                .map(|_| PageId::new(rng.gen_range(1..=max_page_id)))
                .collect(),
        }
    }

    /// Number of references.
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True when the trace holds no references.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// The references in order.
    #[inline]
    pub fn pages(&self) -> &[PageId] {
        &self.pages
    }
}
