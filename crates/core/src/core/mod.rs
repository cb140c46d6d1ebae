//! CPU core: clusters, queues, reorder buffer, IPRs, and the dispatch loop.

/// Execution cluster bundle (queue, mutex, condition variable).
pub mod cluster;

/// CPU container and lifecycle state.
pub mod cpu;

/// The dispatch loop and its collaborator traits.
pub mod execute;

/// Internal processor registers (floating-point enable).
pub mod ipr;

/// Counted instruction queue and entry pool.
pub mod iq;

/// Pipeline identities and the compatibility table.
pub mod pipeline;

/// Reorder buffer (in-flight instruction window).
pub mod rob;

pub use cluster::Cluster;
pub use cpu::{Cpu, CpuState};
pub use execute::{Dispatcher, ExecHooks, run_worker};
pub use iq::{EntryId, EntrySnapshot, InstructionQueue};
pub use pipeline::{ClusterKind, PipelineTag, WorkerId};
pub use rob::{Rob, RobTag};
