//! Result of solving a whole animation.

use alloc::vec::Vec;

use crate::config::{DerivativeOrder, ViolationPolicy};
use crate::motion::{MotionStatistics, Violation};
use crate::trajectory::{AxisReconciliation, TrajectoryRecord};

/// Reconciled records plus everything found while producing them.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryReport {
    /// One record per input frame, in input order.
    pub records: Vec<TrajectoryRecord>,
    /// Per-axis reconciliation outcome.
    pub reconciliation: [AxisReconciliation; 6],
    /// Limit violations of the reconciled trajectory.
    pub violations: Vec<Violation>,
    /// Min, max and average per axis and derivative order.
    pub statistics: MotionStatistics,
    /// Frames whose selected branch was not valid.
    pub unreachable_frames: Vec<usize>,
    /// Policy the report is judged by.
    pub policy: ViolationPolicy,
}

impl TrajectoryReport {
    /// No violations and every frame reachable.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty() && self.unreachable_frames.is_empty()
    }

    /// Whether the records may be handed to program generation.
    pub fn is_exportable(&self) -> bool {
        match self.policy {
            ViolationPolicy::Abort => self.is_clean(),
            ViolationPolicy::Warn => true,
        }
    }

    /// The records, if exportable under the policy.
    pub fn exportable_records(&self) -> Option<&[TrajectoryRecord]> {
        if self.is_exportable() {
            Some(&self.records)
        } else {
            None
        }
    }

    /// Violations of one derivative order.
    pub fn violations_of(&self, order: DerivativeOrder) -> impl Iterator<Item = &Violation> + '_ {
        self.violations.iter().filter(move |v| v.order == order)
    }
}
