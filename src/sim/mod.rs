//! The driving layer: traces in, step logs and summaries out.
//!
//! # Components
//! - [`ReferenceTrace`] - an immutable page-reference sequence + generator
//! - [`simulate`] - replay one trace through one policy at one capacity
//! - [`StepRecord`] / [`SimulationResult`] - per-step log and per-run summary
//! - [`sweep`] - aggregate results across (policy, frame_count) pairs

mod runner;
mod stats;
mod sweep;
mod trace;

pub use runner::{simulate, SimulationRun};
pub use stats::{SimulationResult, StepRecord};
pub use sweep::{sweep, SweepResults};
pub use trace::ReferenceTrace;
