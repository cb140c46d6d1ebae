//! Pipeline identities and the worker compatibility table.
//!
//! The issue stage tags every instruction with the set of pipelines able to
//! execute it; each worker thread owns exactly one pipeline. A worker may
//! claim an entry iff the entry's tag appears in the worker's compatibility
//! row. The table is constant and read without synchronization.

use std::fmt;

/// Cluster an execution pipeline belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClusterKind {
    /// Integer execution unit (U0, U1, L0, L1).
    Ebox,
    /// Floating-point execution unit (FMul, FOther).
    Fbox,
}

impl fmt::Display for ClusterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ebox => write!(f, "Ebox"),
            Self::Fbox => write!(f, "Fbox"),
        }
    }
}

/// Execution pipeline driven by one worker thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WorkerId {
    /// Integer upper pipeline 0.
    EboxU0,
    /// Integer upper pipeline 1.
    EboxU1,
    /// Integer lower pipeline 0.
    EboxL0,
    /// Integer lower pipeline 1.
    EboxL1,
    /// Floating-point multiply pipeline.
    FboxMul,
    /// Floating-point "other" pipeline.
    FboxOther,
}

/// Subset of pipelines the issue stage deemed capable of executing an
/// instruction. Assigned at issue; immutable while the entry is queued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PipelineTag {
    /// No pipeline (placeholder for not-yet-slotted instructions).
    None,
    /// Upper pipeline 0 only.
    U0,
    /// Upper pipeline 1 only.
    U1,
    /// Either upper pipeline.
    U0U1,
    /// Lower pipeline 0 only.
    L0,
    /// Lower pipeline 1 only.
    L1,
    /// Either lower pipeline.
    L0L1,
    /// Any integer pipeline.
    L0L1U0U1,
    /// Floating-point multiply pipeline.
    FboxMul,
    /// Floating-point "other" pipeline.
    FboxOther,
}

impl WorkerId {
    /// All six workers, in spawn order.
    pub const ALL: [Self; 6] = [
        Self::EboxU0,
        Self::EboxU1,
        Self::EboxL0,
        Self::EboxL1,
        Self::FboxMul,
        Self::FboxOther,
    ];

    /// Compatibility row for this worker: the three tags it may execute.
    ///
    /// An upper worker takes its own tag, the either-upper tag, and the
    /// any-integer tag; lower workers mirror that. The fp rows repeat their
    /// own tag so the eligibility test is uniform across all six workers.
    pub const fn row(self) -> [PipelineTag; 3] {
        match self {
            Self::EboxU0 => [PipelineTag::U0, PipelineTag::U0U1, PipelineTag::L0L1U0U1],
            Self::EboxU1 => [PipelineTag::U1, PipelineTag::U0U1, PipelineTag::L0L1U0U1],
            Self::EboxL0 => [PipelineTag::L0, PipelineTag::L0L1, PipelineTag::L0L1U0U1],
            Self::EboxL1 => [PipelineTag::L1, PipelineTag::L0L1, PipelineTag::L0L1U0U1],
            Self::FboxMul => [PipelineTag::FboxMul, PipelineTag::FboxMul, PipelineTag::FboxMul],
            Self::FboxOther => [
                PipelineTag::FboxOther,
                PipelineTag::FboxOther,
                PipelineTag::FboxOther,
            ],
        }
    }

    /// Returns true if this worker may execute an entry with the given tag.
    pub fn accepts(self, tag: PipelineTag) -> bool {
        let [t0, t1, t2] = self.row();
        tag == t0 || tag == t1 || tag == t2
    }

    /// Cluster this worker's pipeline belongs to.
    pub const fn cluster(self) -> ClusterKind {
        match self {
            Self::EboxU0 | Self::EboxU1 | Self::EboxL0 | Self::EboxL1 => ClusterKind::Ebox,
            Self::FboxMul | Self::FboxOther => ClusterKind::Fbox,
        }
    }

    /// OS thread name for this worker.
    pub const fn thread_name(self) -> &'static str {
        match self {
            Self::EboxU0 => "ebox-u0",
            Self::EboxU1 => "ebox-u1",
            Self::EboxL0 => "ebox-l0",
            Self::EboxL1 => "ebox-l1",
            Self::FboxMul => "fbox-mul",
            Self::FboxOther => "fbox-other",
        }
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EboxU0 => write!(f, "Ebox U0"),
            Self::EboxU1 => write!(f, "Ebox U1"),
            Self::EboxL0 => write!(f, "Ebox L0"),
            Self::EboxL1 => write!(f, "Ebox L1"),
            Self::FboxMul => write!(f, "Fbox Multiply"),
            Self::FboxOther => write!(f, "Fbox Other"),
        }
    }
}

impl fmt::Display for PipelineTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::U0 => write!(f, "U0"),
            Self::U1 => write!(f, "U1"),
            Self::U0U1 => write!(f, "U0, U1"),
            Self::L0 => write!(f, "L0"),
            Self::L1 => write!(f, "L1"),
            Self::L0L1 => write!(f, "L0, L1"),
            Self::L0L1U0U1 => write!(f, "L0, L1, U0, U1"),
            Self::FboxMul => write!(f, "Multiply"),
            Self::FboxOther => write!(f, "Other"),
        }
    }
}
