//! Alpha AXP instruction representation.
//!
//! The execution box never interprets opcodes itself; this module carries the
//! decoded fields the dispatch loop, trace output, and retirement logic
//! consume.

/// In-flight instruction record and lifecycle state.
pub mod instruction;

/// Alpha AXP major opcode constants.
pub mod opcodes;

pub use instruction::{InsState, Instruction};
