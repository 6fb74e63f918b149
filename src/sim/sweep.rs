//! The metrics aggregator: sweep policies across frame counts.

use std::collections::BTreeMap;

use log::debug;

use crate::common::{Error, Result};
use crate::replacer::PolicyKind;
use crate::sim::runner::simulate;
use crate::sim::stats::SimulationResult;
use crate::sim::trace::ReferenceTrace;

/// Results of a sweep, keyed by (policy, frame_count).
///
/// Iteration order is deterministic (policy order, then ascending frame
/// count), so tabular consumers render stably.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResults {
    results: BTreeMap<(PolicyKind, usize), SimulationResult>,
}

impl SweepResults {
    /// The result for one (policy, frame_count) pair, if it was swept.
    pub fn get(&self, policy: PolicyKind, frame_count: usize) -> Option<&SimulationResult> {
        self.results.get(&(policy, frame_count))
    }

    /// All results in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &SimulationResult> {
        self.results.values()
    }

    /// Number of (policy, frame_count) pairs swept.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True when nothing was swept.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// `(frame_count, fault_rate)` points for one policy, ascending.
    ///
    /// This is the series a chart consumer plots per policy.
    pub fn fault_rate_series(&self, policy: PolicyKind) -> Vec<(usize, f64)> {
        self.series(policy, SimulationResult::fault_rate)
    }

    /// `(frame_count, replacement_rate)` points for one policy, ascending.
    pub fn replacement_rate_series(&self, policy: PolicyKind) -> Vec<(usize, f64)> {
        self.series(policy, SimulationResult::replacement_rate)
    }

    fn series(&self, policy: PolicyKind, rate: fn(&SimulationResult) -> f64) -> Vec<(usize, f64)> {
        self.results
            .iter()
            .filter(|((kind, _), _)| *kind == policy)
            .map(|((_, frames), result)| (*frames, rate(result)))
            .collect()
    }
}

/// Run every (policy, frame_count) combination over one trace.
///
/// A pure function of its inputs: each pair gets an independent policy
/// instance, and no state carries across pairs. Inputs are validated up
/// front so a malformed request never begins simulating. Step logs are not
/// retained, only the summaries.
///
/// # Errors
/// - [`Error::EmptyTrace`] if the trace has no references
/// - [`Error::InvalidCapacity`] if any requested frame count is 0
///
/// # Example
/// ```
/// use pagesim::{sweep, PolicyKind, ReferenceTrace};
///
/// let trace = ReferenceTrace::from_ids([1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
/// let results = sweep(&PolicyKind::ALL, &trace, &[2, 3, 4]).unwrap();
///
/// assert_eq!(results.len(), 18);
/// let fifo = results.get(PolicyKind::Fifo, 3).unwrap();
/// assert_eq!(fifo.fault_count, 9);
/// ```
pub fn sweep(
    policies: &[PolicyKind],
    trace: &ReferenceTrace,
    frame_counts: &[usize],
) -> Result<SweepResults> {
    if trace.is_empty() {
        return Err(Error::EmptyTrace);
    }
    if let Some(&bad) = frame_counts.iter().find(|&&n| n < 1) {
        return Err(Error::InvalidCapacity(bad));
    }

    debug!(
        "sweeping {} policies x {} frame counts over {} references",
        policies.len(),
        frame_counts.len(),
        trace.len()
    );

    let mut results = BTreeMap::new();

    for &policy in policies {
        for &frame_count in frame_counts {
            let run = simulate(policy, trace, frame_count)?;
            results.insert((policy, frame_count), run.result);
        }
    }

    Ok(SweepResults { results })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn belady_trace() -> ReferenceTrace {
        ReferenceTrace::from_ids([1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5])
    }

    #[test]
    fn test_sweep_covers_every_pair() {
        let results = sweep(&PolicyKind::ALL, &belady_trace(), &[2, 3]).unwrap();

        assert_eq!(results.len(), 12);
        for kind in PolicyKind::ALL {
            for frames in [2, 3] {
                let result = results.get(kind, frames).unwrap();
                assert_eq!(result.policy, kind);
                assert_eq!(result.frame_count, frames);
            }
        }
    }

    #[test]
    fn test_sweep_rejects_empty_trace() {
        let trace = ReferenceTrace::from_ids([]);
        assert_eq!(
            sweep(&PolicyKind::ALL, &trace, &[2]).unwrap_err(),
            Error::EmptyTrace
        );
    }

    #[test]
    fn test_sweep_rejects_any_zero_capacity() {
        assert_eq!(
            sweep(&PolicyKind::ALL, &belady_trace(), &[2, 0, 3]).unwrap_err(),
            Error::InvalidCapacity(0)
        );
    }

    #[test]
    fn test_series_is_ascending_by_frame_count() {
        let results = sweep(&[PolicyKind::Fifo], &belady_trace(), &[4, 2, 3]).unwrap();
        let series = results.fault_rate_series(PolicyKind::Fifo);

        let frames: Vec<usize> = series.iter().map(|&(n, _)| n).collect();
        assert_eq!(frames, vec![2, 3, 4]);
    }

    #[test]
    fn test_empty_policy_list_yields_empty_results() {
        let results = sweep(&[], &belady_trace(), &[2, 3]).unwrap();
        assert!(results.is_empty());
    }
}
