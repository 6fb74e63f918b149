//! The closed set of policy variants and their dispatch table.

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, Result};
use crate::replacer::{
    EnhancedClockReplacer, FifoReplacer, LfuReplacer, LruReplacer, OptReplacer, ReplacementPolicy,
    SimpleClockReplacer,
};

/// Selector for one of the six replacement policies.
///
/// A closed enum rather than a string key: an unknown selector is
/// unrepresentable once parsed, and [`PolicyKind::build`] is the entire
/// dispatch table.
///
/// # Example
/// ```
/// use pagesim::PolicyKind;
///
/// let kind: PolicyKind = "lru".parse().unwrap();
/// assert_eq!(kind, PolicyKind::Lru);
/// assert_eq!(kind.name(), "LRU");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PolicyKind {
    Fifo,
    Lru,
    Opt,
    Lfu,
    SimpleClock,
    EnhancedClock,
}

impl PolicyKind {
    /// Every variant, in canonical comparison order.
    pub const ALL: [PolicyKind; 6] = [
        PolicyKind::Fifo,
        PolicyKind::Lru,
        PolicyKind::Opt,
        PolicyKind::Lfu,
        PolicyKind::SimpleClock,
        PolicyKind::EnhancedClock,
    ];

    /// Canonical display name.
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Opt => "OPT",
            PolicyKind::Lfu => "LFU",
            PolicyKind::SimpleClock => "SimpleCLOCK",
            PolicyKind::EnhancedClock => "EnhancedCLOCK",
        }
    }

    /// Build a fresh policy instance for one run.
    ///
    /// # Panics
    /// Panics if `frame_count` is 0; [`crate::simulate`] validates before
    /// building.
    pub fn build(self, frame_count: usize) -> Box<dyn ReplacementPolicy> {
        match self {
            PolicyKind::Fifo => Box::new(FifoReplacer::new(frame_count)),
            PolicyKind::Lru => Box::new(LruReplacer::new(frame_count)),
            PolicyKind::Opt => Box::new(OptReplacer::new(frame_count)),
            PolicyKind::Lfu => Box::new(LfuReplacer::new(frame_count)),
            PolicyKind::SimpleClock => Box::new(SimpleClockReplacer::new(frame_count)),
            PolicyKind::EnhancedClock => Box::new(EnhancedClockReplacer::new(frame_count)),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    /// Parse a canonical policy name, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        PolicyKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownPolicy(s.to_string()))
    }
}
