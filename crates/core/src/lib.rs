//! Alpha 21264-style execution-box simulator library.
//!
//! This crate implements the multi-threaded dispatch loop at the heart of an
//! out-of-order Alpha AXP CPU simulator:
//! 1. **Pipelines:** Six execution pipelines — integer U0/U1/L0/L1 and
//!    floating-point multiply/other — each driven by its own worker thread.
//! 2. **Queues:** Counted instruction queues shared per cluster, with O(1)
//!    removal and a per-entry claim flag arbitrating between workers.
//! 3. **Window:** A reorder buffer owning every in-flight instruction's
//!    lifecycle state, with in-order retirement and squash support.
//! 4. **Seams:** The opcode dispatcher, register-readiness predicate, and
//!    free-list return are collaborator traits supplied by the embedder.
//! 5. **Lifecycle:** `ExecutionBox` spawns the workers; shutdown is a
//!    single state store plus a broadcast that drains all six cleanly.

/// Common types (errors, exception summaries, synchronization helpers).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU core: clusters, queues, reorder buffer, IPRs, dispatch loop.
pub mod core;
/// Instruction representation (decoded fields, lifecycle state, opcodes).
pub mod isa;
/// Simulation harness: worker thread lifecycle.
pub mod sim;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Shared CPU container; holds the clusters, reorder buffer, and IPRs.
pub use crate::core::cpu::{Cpu, CpuState};
/// The dispatch loop entry point and its collaborator seams.
pub use crate::core::execute::{Dispatcher, ExecHooks, run_worker};
/// Worker thread harness; spawns and drains the six pipeline workers.
pub use crate::sim::{ExecutionBox, FreeListHooks};
