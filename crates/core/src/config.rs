//! Configuration system for the execution-box simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulated machine. It provides:
//! 1. **Defaults:** Baseline 21264 structural constants (queue and window sizes).
//! 2. **Structures:** Hierarchical config for queues, the in-flight window, and IPRs.
//!
//! Configuration is supplied as JSON (`serde_json`) or via `Config::default()`.

use serde::Deserialize;

/// Default configuration constants for the simulator.
///
/// These values match the structural sizes of the Alpha 21264 and are used
/// when a field is not explicitly overridden.
mod defaults {
    /// Integer issue queue (IQ) entry count.
    ///
    /// The 21264 holds up to 20 issued-but-not-executed integer instructions.
    pub const IQ_ENTRIES: usize = 20;

    /// Floating-point issue queue (FQ) entry count.
    ///
    /// The 21264 holds up to 15 issued-but-not-executed fp instructions.
    pub const FQ_ENTRIES: usize = 15;

    /// In-flight window (reorder buffer) entry count.
    ///
    /// The 21264 tracks up to 80 instructions between map and retire.
    pub const ROB_ENTRIES: usize = 80;

    /// Whether floating-point instructions are enabled out of reset.
    ///
    /// PALcode normally sets FPE early in the boot path; defaulting to
    /// enabled keeps bare harnesses from faulting every fp instruction.
    pub const FPE_AT_RESET: bool = true;
}

/// Root configuration for the execution box.
///
/// # Example
///
/// ```
/// use axpsim_core::config::Config;
///
/// let json = r#"{
///     "queues": { "iq_entries": 8, "fq_entries": 4 },
///     "window": { "rob_entries": 32 },
///     "ipr": { "fpe_at_reset": false }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.queues.iq_entries, 8);
/// assert!(!config.ipr.fpe_at_reset);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Instruction queue sizing.
    #[serde(default)]
    pub queues: QueueConfig,
    /// In-flight window sizing.
    #[serde(default)]
    pub window: WindowConfig,
    /// Internal processor register reset values.
    #[serde(default)]
    pub ipr: IprConfig,
}

/// Instruction queue sizing.
#[derive(Debug, Clone, Deserialize)]
pub struct QueueConfig {
    /// Number of entries in the Ebox integer queue.
    #[serde(default = "QueueConfig::default_iq_entries")]
    pub iq_entries: usize,

    /// Number of entries in the Fbox floating-point queue.
    #[serde(default = "QueueConfig::default_fq_entries")]
    pub fq_entries: usize,
}

impl QueueConfig {
    /// Returns the default integer queue entry count.
    fn default_iq_entries() -> usize {
        defaults::IQ_ENTRIES
    }

    /// Returns the default floating-point queue entry count.
    fn default_fq_entries() -> usize {
        defaults::FQ_ENTRIES
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            iq_entries: defaults::IQ_ENTRIES,
            fq_entries: defaults::FQ_ENTRIES,
        }
    }
}

/// In-flight window (reorder buffer) sizing.
#[derive(Debug, Clone, Deserialize)]
pub struct WindowConfig {
    /// Number of reorder buffer entries.
    #[serde(default = "WindowConfig::default_rob_entries")]
    pub rob_entries: usize,
}

impl WindowConfig {
    /// Returns the default reorder buffer entry count.
    fn default_rob_entries() -> usize {
        defaults::ROB_ENTRIES
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            rob_entries: defaults::ROB_ENTRIES,
        }
    }
}

/// Internal processor register reset values.
#[derive(Debug, Clone, Deserialize)]
pub struct IprConfig {
    /// Initial value of the floating-point enable bit.
    #[serde(default = "IprConfig::default_fpe_at_reset")]
    pub fpe_at_reset: bool,
}

impl IprConfig {
    /// Returns the default floating-point enable reset value.
    fn default_fpe_at_reset() -> bool {
        defaults::FPE_AT_RESET
    }
}

impl Default for IprConfig {
    fn default() -> Self {
        Self {
            fpe_at_reset: defaults::FPE_AT_RESET,
        }
    }
}
