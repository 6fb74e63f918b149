//! pagesim - A page-replacement simulator with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                           pagesim                             │
//! ├───────────────────────────────────────────────────────────────┤
//! │  ┌───────────────────────────────────────────────────────┐   │
//! │  │              Aggregation (sim/sweep)                   │   │
//! │  │      sweep(policies × frame_counts) → rate table       │   │
//! │  └───────────────────────────────────────────────────────┘   │
//! │                              ↓                                │
//! │  ┌───────────────────────────────────────────────────────┐   │
//! │  │               Runner (sim/runner)                      │   │
//! │  │   replay trace → step log + fault/hit/replacement      │   │
//! │  └───────────────────────────────────────────────────────┘   │
//! │                              ↓                                │
//! │  ┌───────────────────────────────────────────────────────┐   │
//! │  │   Eviction Policies (replacer/)  [Swappable]          │   │
//! │  │  ┌─────────────────────────────────────────────────┐  │   │
//! │  │  │ FIFO | LRU | OPT | LFU | SimpleCLOCK | EnhCLOCK │  │   │
//! │  │  └─────────────────────────────────────────────────┘  │   │
//! │  │        ReplacementPolicy trait + ResidentSet           │   │
//! │  └───────────────────────────────────────────────────────┘   │
//! │                              ↓                                │
//! │  ┌───────────────────────────────────────────────────────┐   │
//! │  │            Traces (sim/trace)                          │   │
//! │  │     uniform random generator / explicit sequences      │   │
//! │  └───────────────────────────────────────────────────────┘   │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Step logs and result tables are plain values; rendering them (text,
//! charts) is a consumer concern.
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, defaults)
//! - [`replacer`] - The six eviction policies and their trait
//! - [`sim`] - Trace generation, the runner, and the sweep aggregator
//!
//! # Quick Start
//! ```
//! use pagesim::{simulate, sweep, PolicyKind, ReferenceTrace};
//!
//! let trace = ReferenceTrace::from_ids([1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
//!
//! // One run: FIFO at 3 frames.
//! let run = simulate(PolicyKind::Fifo, &trace, 3).unwrap();
//! assert_eq!(run.result.fault_count, 9);
//!
//! // Full comparison table.
//! let results = sweep(&PolicyKind::ALL, &trace, &[2, 3, 4]).unwrap();
//! assert_eq!(results.len(), 18);
//! ```

pub mod common;
pub mod replacer;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_FRAME_COUNTS, DEFAULT_MAX_PAGE_ID, DEFAULT_TRACE_LENGTH};
pub use common::{Error, PageId, Result};

pub use replacer::{AccessOutcome, PolicyKind, ReplacementPolicy, ResidentSet};
pub use sim::{simulate, sweep, ReferenceTrace, SimulationResult, SimulationRun, StepRecord, SweepResults};
