//! Execution cluster bundle: queue, mutex, and condition variable.
//!
//! One bundle exists per cluster. The four integer workers share the Ebox
//! bundle; the two floating-point workers share the Fbox bundle. The bundle
//! is immutable after construction; all mutability is inside the queue
//! mutex.

use std::sync::{Condvar, Mutex};

use crate::common::sync::lock;
use crate::core::iq::{EntryId, InstructionQueue};
use crate::core::pipeline::ClusterKind;

/// Shared state for one execution cluster.
#[derive(Debug)]
pub struct Cluster {
    kind: ClusterKind,
    queue: Mutex<InstructionQueue>,
    cond: Condvar,
}

impl Cluster {
    /// Creates a cluster with an empty queue of the given capacity.
    pub fn new(kind: ClusterKind, capacity: usize) -> Self {
        Self {
            kind,
            queue: Mutex::new(InstructionQueue::new(capacity)),
            cond: Condvar::new(),
        }
    }

    /// Which cluster this bundle serves.
    pub const fn kind(&self) -> ClusterKind {
        self.kind
    }

    /// The queue mutex. Hold it for every queue operation and for nothing
    /// else; the worker loop never holds it together with the ROB or IPR
    /// mutex.
    pub const fn queue(&self) -> &Mutex<InstructionQueue> {
        &self.queue
    }

    /// The condition variable the cluster's workers sleep on.
    pub(crate) const fn cond(&self) -> &Condvar {
        &self.cond
    }

    /// Number of entries currently linked in the queue.
    pub fn len(&self) -> usize {
        lock(&self.queue).len()
    }

    /// Returns true if the queue has no linked entries.
    pub fn is_empty(&self) -> bool {
        lock(&self.queue).is_empty()
    }

    /// Wakes every worker sleeping on this cluster.
    ///
    /// Broadcast rather than signal: an entry's tag may bind it to one
    /// specific pipeline, and only a scan by each worker decides who can
    /// take it. Woken workers that find nothing eligible suppress
    /// themselves until the next signal.
    pub fn wake_all(&self) {
        self.cond.notify_all();
    }

    /// Returns a dequeued entry's slot to the free pool.
    pub fn release(&self, id: EntryId) {
        lock(&self.queue).release(id);
    }
}
