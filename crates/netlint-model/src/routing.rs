// ── Static routing ──

use serde::{Deserialize, Serialize};

/// A single static routing entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticRoute {
    /// Destination network in CIDR notation.
    pub destination: String,
    /// Next-hop IP address or interface.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_hop: Option<String>,
    /// Administrative distance (0-255).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_distance: Option<u8>,
}
