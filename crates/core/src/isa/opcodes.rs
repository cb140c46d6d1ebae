//! Alpha AXP Major Opcodes.
//!
//! Defines the major opcodes (bits 31-26) for the instruction groups the
//! execution box dispatches. Memory and branch groups are handled by other
//! units and are listed only where tests need a recognizable encoding.

/// Integer arithmetic group (ADDL, ADDQ, SUBL, CMPEQ, etc.).
pub const OP_INTA: u32 = 0x10;

/// Integer logical group (AND, BIS, XOR, CMOVxx, etc.).
pub const OP_INTL: u32 = 0x11;

/// Integer shift group (SLL, SRL, SRA, EXTxx, INSxx, MSKxx).
pub const OP_INTS: u32 = 0x12;

/// Integer multiply group (MULL, MULQ, UMULH).
pub const OP_INTM: u32 = 0x13;

/// Integer-to-floating transfer group (ITOFS, ITOFT, SQRTx).
pub const OP_ITFP: u32 = 0x14;

/// VAX floating-point group (ADDF, ADDG, MULF, etc.).
pub const OP_FLTV: u32 = 0x15;

/// IEEE floating-point group (ADDS, ADDT, MULS, MULT, etc.).
pub const OP_FLTI: u32 = 0x16;

/// Floating-point operate group (CPYS, MT_FPCR, CVTLQ, etc.).
pub const OP_FLTL: u32 = 0x17;
