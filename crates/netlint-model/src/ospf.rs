// ── OSPF domain types ──

use serde::{Deserialize, Serialize};

/// A single OSPF area and the networks participating in it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OspfArea {
    /// Area identifier (e.g. "0", "0.0.0.0", "10").
    pub id: String,
    /// Subnets participating in this area.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<String>,
}

/// A routing protocol redistributed into OSPF.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OspfRedistribution {
    /// Source protocol (e.g. "bgp", "static", "connected").
    pub source: String,
}

/// OSPF protocol configuration for a device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OspfConfig {
    /// OSPF process identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_id: Option<u32>,
    /// OSPF router identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_id: Option<String>,
    /// Configured areas, in discovery order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub areas: Vec<OspfArea>,
    /// Protocols redistributed into OSPF.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub redistributions: Vec<OspfRedistribution>,
    /// Interfaces that do not send OSPF hellos.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub passive_interfaces: Vec<String>,
    /// All interfaces are passive by default.
    #[serde(default)]
    pub default_passive: bool,
}

impl OspfConfig {
    /// Whether this config shares at least one area id with `other`.
    pub fn shares_area_with(&self, other: &OspfConfig) -> bool {
        self.areas
            .iter()
            .any(|a| other.areas.iter().any(|b| a.id == b.id))
    }
}
