//! The dispatch loop shared by all six execution pipelines.
//!
//! Each pipeline runs [`run_worker`] on its own thread. The loops for the
//! Ebox and Fbox are identical except for which compatibility row filters
//! the scan, the floating-point enable gate, and which free pool the entry
//! returns to; everything pipeline-specific comes in through [`WorkerId`]
//! and the collaborator traits.
//!
//! One iteration claims at most one entry and holds at most one of the
//! three core locks (cluster queue, ROB, IPR) at any point. The external
//! calls — readiness predicate, dispatcher, entry return — all run with no
//! core lock held.

use std::sync::PoisonError;

use tracing::trace;

use crate::common::error::Exception;
use crate::common::sync::lock;
use crate::core::cpu::Cpu;
use crate::core::iq::EntrySnapshot;
use crate::core::pipeline::{ClusterKind, WorkerId};
use crate::core::rob::RobTag;
use crate::isa::instruction::InsState;

/// Opcode dispatch seam, implemented by the instruction-execution layer.
pub trait Dispatcher: Send + Sync {
    /// Performs the opcode action for the instruction with the given tag,
    /// writes its results, and transitions its state (under the ROB mutex)
    /// to `WaitingRetirement` on completion or to a faulted equivalent on
    /// exception. Called with no core lock held.
    fn dispatch(&self, cpu: &Cpu, tag: RobTag);
}

/// Collaborator callbacks supplied by the issue/free-list layer.
pub trait ExecHooks: Send + Sync {
    /// Returns true when the instruction's source registers are ready.
    ///
    /// Pure with respect to the loop and called with no core lock held.
    /// Returning false leaves the entry linked and claimable again; the
    /// loop retries it on the next wake.
    fn registers_ready(&self, cpu: &Cpu, entry: &EntrySnapshot) -> bool;

    /// Relinquishes a dequeued entry to its free pool.
    ///
    /// Called exactly once per dequeued entry, whether the instruction was
    /// aborted, faulted on the fp-enable gate, or dispatched normally.
    fn return_entry(&self, cpu: &Cpu, entry: EntrySnapshot);
}

/// Runs one pipeline's dispatch loop until the CPU begins shutting down.
///
/// The loop waits on the cluster's condition variable for work, scans the
/// counted queue in FIFO order for the first unclaimed entry whose tag is
/// in this worker's compatibility row, claims it, and — if the instruction
/// survives the abort and register-readiness checks — dequeues it, marks it
/// `Executing`, and hands it to the dispatcher. Entries whose instruction
/// was squashed are discarded; entries whose operands are not ready stay
/// queued for a later wake.
pub fn run_worker(
    cpu: &Cpu,
    worker: WorkerId,
    hooks: &dyn ExecHooks,
    dispatcher: &dyn Dispatcher,
) {
    let cluster = cpu.cluster(worker.cluster());
    // Set after a scan that found no eligible entry: the queue may be
    // non-empty with work that belongs to other pipelines, and rescanning
    // it before a fresh signal would spin. Starts cleared so work enqueued
    // before this worker's first iteration is scanned without a signal.
    let mut suppressed = false;

    while !cpu.is_shutting_down() {
        let mut iq = lock(cluster.queue());

        // Wait while there is nothing to scan — an empty queue, or a queue
        // this worker already scanned fruitlessly. Shutdown short-circuits
        // the predicate so a worker can never begin a wait after the
        // shutdown broadcast has fired.
        while (iq.is_empty() || suppressed) && !cpu.is_shutting_down() {
            iq = cluster
                .cond()
                .wait(iq)
                .unwrap_or_else(PoisonError::into_inner);
            suppressed = false;
            trace!(pipeline = %worker, "signaled");
        }

        if cpu.is_shutting_down() {
            return;
        }

        // Scan in queue order for the first unclaimed entry this pipeline
        // may execute. The successor is captured before the claim decision;
        // once an entry is claimed its claimant may dequeue it at any time.
        let mut cursor = iq.first();
        let mut claimed = None;
        while let Some(id) = cursor {
            let next = iq.next(id);
            let tag = iq.pipeline(id);
            if !worker.accepts(tag) {
                trace!(pipeline = %worker, tag = %tag, "cannot execute");
            } else if iq.claim(id) {
                claimed = Some(EntrySnapshot {
                    cluster: cluster.kind(),
                    id,
                    rob_tag: iq.rob_tag(id),
                    pipeline: tag,
                });
                break;
            }
            cursor = next;
        }

        let Some(entry) = claimed else {
            trace!(pipeline = %worker, "nothing to process");
            suppressed = true;
            continue;
        };

        // The entry is claimed but still linked; siblings skip it on the
        // claim flag. Release the queue so they can scan concurrently.
        drop(iq);

        // The front end may have squashed the instruction after it was
        // queued. A reclaimed ROB slot can only mean the same thing.
        let state = cpu
            .rob()
            .state(entry.rob_tag)
            .unwrap_or(InsState::Aborted);
        if state == InsState::Aborted {
            let mut iq = lock(cluster.queue());
            iq.remove(entry.id);
            iq.unclaim(entry.id);
            drop(iq);
            trace!(pipeline = %worker, ins = entry.rob_tag.0, "discarding aborted entry");
            hooks.return_entry(cpu, entry);
            continue;
        }

        // Operands not ready: drop the claim, keep the entry linked, and
        // let the next signal retry it.
        if !hooks.registers_ready(cpu, &entry) {
            lock(cluster.queue()).unclaim(entry.id);
            continue;
        }

        lock(cluster.queue()).remove(entry.id);

        cpu.rob().set_state(entry.rob_tag, InsState::Executing);

        // Integer pipelines never consult the enable bit; treating it as
        // set keeps the dispatch path below uniform.
        let fp_enable = if worker.cluster() == ClusterKind::Fbox {
            cpu.ipr().fpe
        } else {
            true
        };

        if fp_enable {
            trace!(pipeline = %worker, ins = entry.rob_tag.0, "dispatching instruction");
            dispatcher.dispatch(cpu, entry.rob_tag);
        } else {
            trace!(pipeline = %worker, "floating-point instructions are currently disabled");
            let mut rob = cpu.rob();
            rob.record_exception(entry.rob_tag, Exception::FloatingDisabledFault);
            rob.set_state(entry.rob_tag, InsState::WaitingRetirement);
        }

        lock(cluster.queue()).unclaim(entry.id);
        hooks.return_entry(cpu, entry);
    }
}
