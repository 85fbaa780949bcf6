//! Session - the interactive pass-pipeline core
//!
//! A `Session` binds the current source text and the current pass pipeline
//! to a result that is recomputed synchronously after every change.
//!
//! # Architecture
//!
//! The module is organized into:
//! - `scheduler`: owns the derived state and recomputes it on demand
//! - `engine`: the `Session` type and its user-facing operations
//! - `tests`: Unit tests (test-only)
//!
//! The scheduler stays private to the crate so that only the session's
//! mutators can advance the recompute counter:
//!
//! ```compile_fail
//! use irlab_sdk::session::Scheduler;
//! ```

mod engine;
mod scheduler;

pub use engine::Session;

#[cfg(test)]
mod tests;
