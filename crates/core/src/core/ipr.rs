//! Internal processor registers consulted by the execution box.
//!
//! Only the process-context block matters here: its floating-point enable
//! bit gates every Fbox dispatch. The block is guarded by the IPR mutex in
//! [`crate::core::Cpu`]; PALcode-level writes and worker reads both go
//! through that lock.

/// Process-context IPR block.
#[derive(Debug)]
pub struct ProcessContext {
    /// Floating-point enable. While clear, every instruction reaching an
    /// Fbox pipeline completes with a floating-disabled fault instead of
    /// being dispatched.
    pub fpe: bool,
}

impl ProcessContext {
    /// Creates the block with the given reset value for the enable bit.
    pub const fn new(fpe: bool) -> Self {
        Self { fpe }
    }
}
