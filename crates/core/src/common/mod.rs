//! Common utilities and types used throughout the execution-box simulator.
//!
//! This module provides the building blocks shared across all components:
//! 1. **Error Handling:** Simulator error types and per-instruction exception summaries.
//! 2. **Synchronization:** Poison-tolerant mutex acquisition.

/// Error types and exception summary definitions.
pub mod error;

/// Synchronization helpers.
pub mod sync;

pub use error::{ExecError, Exception};
pub use sync::lock;
