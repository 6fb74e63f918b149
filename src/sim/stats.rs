//! Per-step records and per-run summaries.

use std::fmt;

use crate::common::PageId;
use crate::replacer::PolicyKind;

/// One entry of the step log: the resident set right after a reference.
///
/// `resident` is a verbatim snapshot of slot order, not a sorted set:
/// reproducible logs depend on it even where the order is logically
/// irrelevant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// 0-based position of the reference in the trace.
    pub index: usize,

    /// Resident pages in slot order after applying the reference.
    pub resident: Vec<PageId>,
}

/// Immutable summary of one (policy, frame_count) run.
///
/// # Example
/// ```
/// use pagesim::{simulate, PolicyKind, ReferenceTrace};
///
/// let trace = ReferenceTrace::from_ids([1, 2, 1, 3]);
/// let run = simulate(PolicyKind::Fifo, &trace, 2).unwrap();
/// let result = &run.result;
///
/// assert_eq!(result.fault_count + result.hit_count, 4);
/// assert_eq!(result.fault_rate(), 0.75);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    /// Which policy produced this run.
    pub policy: PolicyKind,

    /// Frame capacity the run used.
    pub frame_count: usize,

    /// References that missed the resident set.
    pub fault_count: u64,

    /// References that found their page resident.
    pub hit_count: u64,

    /// Faults that displaced a resident page.
    ///
    /// Always <= `fault_count`: a fault into a non-full set installs
    /// without evicting.
    pub replacement_count: u64,
}

impl SimulationResult {
    /// Total references processed.
    pub fn steps(&self) -> u64 {
        self.fault_count + self.hit_count
    }

    /// Fraction of references that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        self.rate(self.fault_count)
    }

    /// Fraction of references that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        self.rate(self.hit_count)
    }

    /// Fraction of references that displaced a page (0.0 to 1.0).
    pub fn replacement_rate(&self) -> f64 {
        self.rate(self.replacement_count)
    }

    fn rate(&self, count: u64) -> f64 {
        let steps = self.steps();
        if steps == 0 {
            0.0
        } else {
            count as f64 / steps as f64
        }
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {} frames {{ faults: {}, hits: {}, replacements: {}, fault_rate: {:.2}% }}",
            self.policy,
            self.frame_count,
            self.fault_count,
            self.hit_count,
            self.replacement_count,
            self.fault_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> SimulationResult {
        SimulationResult {
            policy: PolicyKind::Fifo,
            frame_count: 3,
            fault_count: 9,
            hit_count: 3,
            replacement_count: 6,
        }
    }

    #[test]
    fn test_rates() {
        let r = result();
        assert_eq!(r.steps(), 12);
        assert_eq!(r.fault_rate(), 0.75);
        assert_eq!(r.hit_rate(), 0.25);
        assert_eq!(r.replacement_rate(), 0.5);
    }

    #[test]
    fn test_zero_steps_rates_are_zero() {
        let r = SimulationResult {
            policy: PolicyKind::Lru,
            frame_count: 1,
            fault_count: 0,
            hit_count: 0,
            replacement_count: 0,
        };
        assert_eq!(r.fault_rate(), 0.0);
        assert_eq!(r.replacement_rate(), 0.0);
    }

    #[test]
    fn test_display() {
        let display = format!("{}", result());
        assert!(display.contains("FIFO"));
        assert!(display.contains("faults: 9"));
        assert!(display.contains("75.00%"));
    }
}
