//! The simulation runner: one policy, one trace, one frame capacity.

use log::debug;

use crate::common::{Error, Result};
use crate::replacer::{AccessOutcome, PolicyKind};
use crate::sim::stats::{SimulationResult, StepRecord};
use crate::sim::trace::ReferenceTrace;

/// Everything one run produces: the step log plus the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationRun {
    /// One record per trace element, in order.
    pub steps: Vec<StepRecord>,

    /// Aggregate counters for the run.
    pub result: SimulationResult,
}

/// Replay `trace` through a fresh `policy` instance at `frame_count`.
///
/// Validation happens before the policy is built; once the fold starts it
/// cannot fail. Each reference updates the counters and appends a
/// [`StepRecord`] snapshotting the resident order verbatim.
///
/// # Errors
/// - [`Error::InvalidCapacity`] if `frame_count` is 0
/// - [`Error::EmptyTrace`] if the trace has no references
///
/// # Example
/// ```
/// use pagesim::{simulate, PolicyKind, ReferenceTrace};
///
/// let trace = ReferenceTrace::from_ids([1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
/// let run = simulate(PolicyKind::Fifo, &trace, 3).unwrap();
///
/// assert_eq!(run.result.fault_count, 9);
/// assert_eq!(run.result.hit_count, 3);
/// assert_eq!(run.result.replacement_count, 6);
/// ```
pub fn simulate(
    policy: PolicyKind,
    trace: &ReferenceTrace,
    frame_count: usize,
) -> Result<SimulationRun> {
    if frame_count < 1 {
        return Err(Error::InvalidCapacity(frame_count));
    }
    if trace.is_empty() {
        return Err(Error::EmptyTrace);
    }

    let mut replacer = policy.build(frame_count);

    let mut fault_count = 0u64;
    let mut hit_count = 0u64;
    let mut replacement_count = 0u64;
    let mut steps = Vec::with_capacity(trace.len());

    for (index, &page) in trace.pages().iter().enumerate() {
        let future = &trace.pages()[index + 1..];

        match replacer.on_reference(page, future) {
            AccessOutcome::Hit => hit_count += 1,
            AccessOutcome::Fault { evicted } => {
                fault_count += 1;
                if evicted.is_some() {
                    replacement_count += 1;
                }
            }
        }

        debug_assert!(replacer.resident_pages().len() <= frame_count);

        steps.push(StepRecord {
            index,
            resident: replacer.resident_pages().to_vec(),
        });
    }

    let result = SimulationResult {
        policy,
        frame_count,
        fault_count,
        hit_count,
        replacement_count,
    };

    debug!("run complete: {}", result);

    Ok(SimulationRun { steps, result })
}
