//! CPU container: clusters, reorder buffer, IPRs, and lifecycle state.
//!
//! The container owns the three core locks and the process lifecycle word.
//! Lock discipline: the cluster queue mutex guards queue linkage and claim
//! flags, the ROB mutex guards instruction state and exception summaries,
//! and the IPR mutex guards the floating-point enable bit. No code path in
//! this crate holds two of them at once.

use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::common::error::ExecError;
use crate::common::sync::lock;
use crate::config::Config;
use crate::core::cluster::Cluster;
use crate::core::ipr::ProcessContext;
use crate::core::pipeline::{ClusterKind, PipelineTag};
use crate::core::rob::{Rob, RobTag};
use crate::isa::instruction::Instruction;

/// Process-wide lifecycle state of the simulated CPU.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum CpuState {
    /// Power-on; nothing is running yet.
    Cold = 0,
    /// Built-in self-test and initialization.
    WaitBiSTInit = 1,
    /// Normal operation.
    Run = 2,
    /// Recovering from a machine-check fault.
    FaultReset = 3,
    /// Low-power sleep.
    Sleep = 4,
    /// Tearing down; workers drain and return.
    ShuttingDown = 5,
}

impl CpuState {
    const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Cold,
            1 => Self::WaitBiSTInit,
            2 => Self::Run,
            3 => Self::FaultReset,
            4 => Self::Sleep,
            _ => Self::ShuttingDown,
        }
    }
}

/// Shared container for everything the execution box touches.
#[derive(Debug)]
pub struct Cpu {
    /// Lifecycle word. Written with [`Cpu::set_state`] /
    /// [`Cpu::begin_shutdown`]; read lock-free by the workers.
    state: AtomicU8,
    /// In-flight instruction window, behind the ROB mutex.
    rob: Mutex<Rob>,
    /// Process-context IPRs, behind the IPR mutex.
    ipr: Mutex<ProcessContext>,
    /// Integer cluster (pipelines U0, U1, L0, L1).
    ebox: Cluster,
    /// Floating-point cluster (pipelines FMul, FOther).
    fbox: Cluster,
}

impl Cpu {
    /// Creates a CPU in the `Run` state with the configured structure sizes.
    pub fn new(config: &Config) -> Self {
        Self {
            state: AtomicU8::new(CpuState::Run as u8),
            rob: Mutex::new(Rob::new(config.window.rob_entries)),
            ipr: Mutex::new(ProcessContext::new(config.ipr.fpe_at_reset)),
            ebox: Cluster::new(ClusterKind::Ebox, config.queues.iq_entries),
            fbox: Cluster::new(ClusterKind::Fbox, config.queues.fq_entries),
        }
    }

    /// Returns the cluster bundle for the given kind.
    pub const fn cluster(&self, kind: ClusterKind) -> &Cluster {
        match kind {
            ClusterKind::Ebox => &self.ebox,
            ClusterKind::Fbox => &self.fbox,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> CpuState {
        CpuState::from_raw(self.state.load(Ordering::SeqCst))
    }

    /// Returns true once shutdown has begun.
    pub fn is_shutting_down(&self) -> bool {
        self.state() == CpuState::ShuttingDown
    }

    /// Moves the CPU to a non-terminal lifecycle state.
    ///
    /// `ShuttingDown` is delegated to [`Cpu::begin_shutdown`] so the state
    /// store is always paired with the worker broadcast.
    pub fn set_state(&self, state: CpuState) {
        if state == CpuState::ShuttingDown {
            self.begin_shutdown();
        } else {
            self.state.store(state as u8, Ordering::SeqCst);
        }
    }

    /// Begins shutdown: stores `ShuttingDown` and wakes every worker.
    ///
    /// Idempotent; only the first call performs the broadcast. Cycling each
    /// cluster mutex before its broadcast orders the store before any
    /// waiter's predicate recheck, so a worker between its check and its
    /// wait cannot sleep past the signal.
    pub fn begin_shutdown(&self) {
        let prev = self
            .state
            .swap(CpuState::ShuttingDown as u8, Ordering::SeqCst);
        if CpuState::from_raw(prev) == CpuState::ShuttingDown {
            return;
        }
        for cluster in [&self.ebox, &self.fbox] {
            drop(lock(cluster.queue()));
            cluster.wake_all();
        }
    }

    /// Locks and returns the reorder buffer.
    pub fn rob(&self) -> MutexGuard<'_, Rob> {
        lock(&self.rob)
    }

    /// Locks and returns the process-context IPR block.
    pub fn ipr(&self) -> MutexGuard<'_, ProcessContext> {
        lock(&self.ipr)
    }

    /// Reads the floating-point enable bit.
    pub fn fpe(&self) -> bool {
        self.ipr().fpe
    }

    /// Writes the floating-point enable bit, as PALcode would.
    pub fn set_fpe(&self, fpe: bool) {
        self.ipr().fpe = fpe;
    }

    /// Issues an instruction to a cluster: allocates a window slot in the
    /// `Queued` state, links a queue entry for it, and wakes the cluster's
    /// workers.
    ///
    /// This is the producer side of the queue contract and assumes a single
    /// issuing thread: workers only ever *free* window slots and queue
    /// entries, so the capacity checks cannot be invalidated concurrently.
    ///
    /// # Errors
    ///
    /// [`ExecError::QueueFull`] if the cluster's entry pool is exhausted,
    /// [`ExecError::RobFull`] if the in-flight window is.
    pub fn issue(
        &self,
        kind: ClusterKind,
        pc: u64,
        opcode: u32,
        dest: u8,
        pipeline: PipelineTag,
    ) -> Result<RobTag, ExecError> {
        let cluster = self.cluster(kind);

        if lock(cluster.queue()).free_entries() == 0 {
            return Err(ExecError::QueueFull);
        }
        let rob_tag = self
            .rob()
            .allocate(pc, opcode, dest)
            .ok_or(ExecError::RobFull)?;

        let mut iq = lock(cluster.queue());
        match iq.allocate(rob_tag, pipeline) {
            Some(id) => iq.enqueue(id),
            None => {
                // Only reachable if the single-producer contract is broken;
                // undo the window allocation rather than leak it.
                drop(iq);
                self.rob().abort(rob_tag);
                return Err(ExecError::QueueFull);
            }
        }
        drop(iq);

        cluster.wake_all();
        Ok(rob_tag)
    }

    /// Retires the oldest instruction if it has finished or was squashed.
    pub fn retire(&self) -> Option<Instruction> {
        self.rob().retire_head()
    }
}
