//! Shared harness for execution-box tests.
//!
//! The real machine supplies an opcode dispatcher and issue-stage callbacks;
//! the tests replace them with instrumented stand-ins that count every
//! interaction so the at-most-once and no-leak properties can be asserted.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axpsim_core::config::{Config, IprConfig, QueueConfig, WindowConfig};
use axpsim_core::core::iq::EntrySnapshot;
use axpsim_core::core::rob::RobTag;
use axpsim_core::isa::instruction::InsState;
use axpsim_core::{Cpu, Dispatcher, ExecHooks};

/// Installs a `tracing` subscriber honoring `RUST_LOG`, once per process,
/// so the worker loop's trace events are visible when a test is run with
/// e.g. `RUST_LOG=trace`.
fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Builds a CPU with the given structure sizes (fp enabled).
pub fn cpu_with(iq_entries: usize, fq_entries: usize, rob_entries: usize) -> Arc<Cpu> {
    init_tracing();
    let config = Config {
        queues: QueueConfig {
            iq_entries,
            fq_entries,
        },
        window: WindowConfig { rob_entries },
        ipr: IprConfig { fpe_at_reset: true },
    };
    Arc::new(Cpu::new(&config))
}

/// Dispatcher stand-in: records the dispatching worker thread per
/// instruction and completes the instruction the way the real dispatcher
/// contract requires.
#[derive(Debug, Default)]
pub struct CountingDispatcher {
    records: Mutex<HashMap<u32, Vec<String>>>,
}

impl CountingDispatcher {
    /// Total number of dispatches across all instructions.
    pub fn total(&self) -> usize {
        self.records.lock().unwrap().values().map(Vec::len).sum()
    }

    /// Number of dispatches of one instruction.
    pub fn count(&self, tag: RobTag) -> usize {
        self.records
            .lock()
            .unwrap()
            .get(&tag.0)
            .map_or(0, Vec::len)
    }

    /// Thread names of the workers that dispatched one instruction.
    pub fn workers_for(&self, tag: RobTag) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .get(&tag.0)
            .cloned()
            .unwrap_or_default()
    }
}

impl Dispatcher for CountingDispatcher {
    fn dispatch(&self, cpu: &Cpu, tag: RobTag) {
        let worker = std::thread::current()
            .name()
            .unwrap_or("unnamed")
            .to_owned();
        self.records
            .lock()
            .unwrap()
            .entry(tag.0)
            .or_default()
            .push(worker);
        cpu.rob().set_state(tag, InsState::WaitingRetirement);
    }
}

/// Hooks stand-in: a switchable register-readiness gate plus counters
/// around the free-list return.
#[derive(Debug)]
pub struct GatedHooks {
    ready: AtomicBool,
    returns: AtomicUsize,
    stalls: AtomicUsize,
}

impl GatedHooks {
    /// Creates the hooks with the readiness gate in the given position.
    pub fn new(ready: bool) -> Self {
        Self {
            ready: AtomicBool::new(ready),
            returns: AtomicUsize::new(0),
            stalls: AtomicUsize::new(0),
        }
    }

    /// Opens or closes the readiness gate.
    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::SeqCst);
    }

    /// Number of entries returned to their pool.
    pub fn returns(&self) -> usize {
        self.returns.load(Ordering::SeqCst)
    }

    /// Number of readiness checks that reported "not ready".
    pub fn stalls(&self) -> usize {
        self.stalls.load(Ordering::SeqCst)
    }
}

impl ExecHooks for GatedHooks {
    fn registers_ready(&self, _cpu: &Cpu, _entry: &EntrySnapshot) -> bool {
        if self.ready.load(Ordering::SeqCst) {
            true
        } else {
            let _ = self.stalls.fetch_add(1, Ordering::SeqCst);
            false
        }
    }

    fn return_entry(&self, cpu: &Cpu, entry: EntrySnapshot) {
        let _ = self.returns.fetch_add(1, Ordering::SeqCst);
        cpu.cluster(entry.cluster).release(entry.id);
    }
}

/// Polls `pred` every millisecond until it holds or `timeout` elapses.
/// Returns the final predicate value.
pub fn wait_until(timeout: Duration, pred: impl Fn() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if pred() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(1));
    }
    pred()
}
