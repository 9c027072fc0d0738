//! Topology consistency checks. Each check inspects the serialised
//! graph snapshot and reports coded issues; device iteration is in
//! sorted-id order, so issue sequences are reproducible run to run.

mod adjacency;
mod duplicate_ip;
mod loop_check;
mod subnet_overlap;

use serde::{Deserialize, Serialize};

use netlint_model::TopologyGraph;

use crate::policy::Severity;

pub use adjacency::AdjacencyCheck;
pub use duplicate_ip::DuplicateIpCheck;
pub use loop_check::LoopCheck;
pub use subnet_overlap::SubnetOverlapCheck;

/// A single topology problem detected by a check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Short machine-readable identifier (e.g. "DUP-IP-001").
    pub code: String,
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
    /// The device involved, when applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

/// Implemented by every topology check.
pub trait Check: Send + Sync {
    /// Evaluate the graph and return any detected issues.
    fn run(&self, graph: &TopologyGraph) -> Vec<Issue>;
}
