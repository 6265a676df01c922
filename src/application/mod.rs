//! Application layer: Use cases and services.
//!
//! Orchestrates the domain types behind the busy states the page shows.

mod assessment;
mod worker;

pub use assessment::{AssessmentService, Timings};
pub use worker::{TaskHandle, TaskKind, TaskOutcome, TaskProgress, TimedWorker};
