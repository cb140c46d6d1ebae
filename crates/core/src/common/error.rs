//! Simulator error and exception summary definitions.
//!
//! Two distinct notions live here:
//! 1. **`ExecError`:** Errors surfaced to the embedding application (thread
//!    lifecycle failures, exhausted structural resources).
//! 2. **`Exception`:** The per-instruction exception summary recorded in the
//!    reorder buffer and consumed at retirement, mirroring the Alpha
//!    exception summary register.

use std::io;

use thiserror::Error;

/// Errors reported by the execution box and its producer-side helpers.
#[derive(Debug, Error)]
pub enum ExecError {
    /// A worker thread could not be spawned.
    #[error("failed to spawn worker thread `{name}`")]
    Spawn {
        /// Thread name of the worker that failed to start.
        name: String,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// A worker thread panicked; observed when joining it at shutdown.
    #[error("worker thread `{name}` panicked")]
    WorkerPanicked {
        /// Thread name of the worker that panicked.
        name: String,
    },

    /// The reorder buffer has no free slot for a new instruction.
    #[error("reorder buffer full")]
    RobFull,

    /// The cluster's instruction queue has no free entry.
    #[error("instruction queue full")]
    QueueFull,
}

/// Exception summary recorded on an in-flight instruction.
///
/// Written under the ROB mutex, read by the retirement logic. The execution
/// box itself only ever records [`Exception::FloatingDisabledFault`]; the
/// other variants are written by the dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exception {
    /// Arithmetic trap (overflow, division by zero, FP traps).
    ArithmeticTrap,
    /// Floating-point instruction issued while the FPE bit is clear.
    FloatingDisabledFault,
    /// Reserved or unimplemented opcode.
    IllegalInstruction,
}

impl std::fmt::Display for Exception {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArithmeticTrap => write!(f, "ArithmeticTrap"),
            Self::FloatingDisabledFault => write!(f, "FloatingDisabledFault"),
            Self::IllegalInstruction => write!(f, "IllegalInstruction"),
        }
    }
}
