// ── Topology graph types ──

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::device::Device;

/// Protocol that established a topology adjacency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum LinkProtocol {
    Bgp,
    Ospf,
}

impl fmt::Display for LinkProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkProtocol::Bgp => f.write_str("bgp"),
            LinkProtocol::Ospf => f.write_str("ospf"),
        }
    }
}

/// A directed connection between two devices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyLink {
    /// Effective id of the originating device.
    pub source: String,
    /// Interface on the source device, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_interface: Option<String>,
    /// Effective id of the destination device.
    pub target: String,
    /// Interface on the target device, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_interface: Option<String>,
    /// Protocol the adjacency was inferred from.
    pub protocol: LinkProtocol,
}

impl TopologyLink {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        protocol: LinkProtocol,
    ) -> Self {
        Self {
            source: source.into(),
            source_interface: None,
            target: target.into(),
            target_interface: None,
            protocol,
        }
    }
}

/// Serialisable snapshot of a topology: devices keyed by effective id
/// plus the directed link list. The `BTreeMap` keeps device iteration in
/// sorted-id order, which the analysis checks rely on for reproducible
/// issue sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopologyGraph {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub devices: BTreeMap<String, Device>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<TopologyLink>,
}
