//! Simulation harness: worker thread lifecycle for the execution box.
//!
//! [`ExecutionBox`] spawns one OS thread per pipeline (six in total), each
//! running [`run_worker`], and joins them after
//! [`Cpu::begin_shutdown`] has been broadcast. [`FreeListHooks`] is the
//! minimal collaborator implementation for harnesses whose instructions
//! are issued with operands already available.

use std::sync::Arc;
use std::thread::JoinHandle;

use crate::common::error::ExecError;
use crate::core::cpu::Cpu;
use crate::core::execute::{Dispatcher, ExecHooks, run_worker};
use crate::core::iq::EntrySnapshot;
use crate::core::pipeline::WorkerId;

/// Handle to the six running pipeline worker threads.
#[derive(Debug)]
pub struct ExecutionBox {
    workers: Vec<(WorkerId, JoinHandle<()>)>,
}

impl ExecutionBox {
    /// Spawns one worker thread per pipeline.
    ///
    /// On a spawn failure the already-started workers are shut down and
    /// joined before the error is returned.
    ///
    /// # Errors
    ///
    /// [`ExecError::Spawn`] if the OS refuses a thread.
    pub fn spawn(
        cpu: Arc<Cpu>,
        hooks: Arc<dyn ExecHooks>,
        dispatcher: Arc<dyn Dispatcher>,
    ) -> Result<Self, ExecError> {
        let mut workers = Vec::with_capacity(WorkerId::ALL.len());
        for worker in WorkerId::ALL {
            let cpu_ref = Arc::clone(&cpu);
            let hooks_ref = Arc::clone(&hooks);
            let dispatcher_ref = Arc::clone(&dispatcher);
            let spawned = std::thread::Builder::new()
                .name(worker.thread_name().to_owned())
                .spawn(move || {
                    run_worker(&cpu_ref, worker, hooks_ref.as_ref(), dispatcher_ref.as_ref());
                });
            match spawned {
                Ok(handle) => workers.push((worker, handle)),
                Err(source) => {
                    let partial = Self { workers };
                    let _ = partial.shutdown(&cpu);
                    return Err(ExecError::Spawn {
                        name: worker.thread_name().to_owned(),
                        source,
                    });
                }
            }
        }
        Ok(Self { workers })
    }

    /// Signals shutdown and joins every worker.
    ///
    /// # Errors
    ///
    /// [`ExecError::WorkerPanicked`] naming the first worker whose thread
    /// panicked; the remaining workers are still joined.
    pub fn shutdown(self, cpu: &Cpu) -> Result<(), ExecError> {
        cpu.begin_shutdown();
        let mut first_panic = None;
        for (worker, handle) in self.workers {
            if handle.join().is_err() && first_panic.is_none() {
                first_panic = Some(ExecError::WorkerPanicked {
                    name: worker.thread_name().to_owned(),
                });
            }
        }
        match first_panic {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Free-list-only collaborator: every instruction is issued with its
/// operands ready, and returned entries go straight back to their
/// cluster's pool.
#[derive(Debug, Default)]
pub struct FreeListHooks;

impl ExecHooks for FreeListHooks {
    fn registers_ready(&self, _cpu: &Cpu, _entry: &EntrySnapshot) -> bool {
        true
    }

    fn return_entry(&self, cpu: &Cpu, entry: EntrySnapshot) {
        cpu.cluster(entry.cluster).release(entry.id);
    }
}
