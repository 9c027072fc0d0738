// ── BGP domain types ──

use serde::{Deserialize, Serialize};

/// A single BGP peer relationship.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BgpNeighbor {
    /// Peer IP address.
    pub address: String,
    /// Autonomous system number of the peer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_as: Option<u32>,
    /// Description label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Interface used as the BGP source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_source: Option<String>,
    /// Peer is administratively disabled.
    #[serde(default)]
    pub shutdown: bool,
    /// Next-hop is rewritten to self for advertised prefixes.
    #[serde(default)]
    pub next_hop_self: bool,
    /// Inbound route-map name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_map_in: Option<String>,
    /// Outbound route-map name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_map_out: Option<String>,
}

impl BgpNeighbor {
    pub fn at(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }
}

/// A network advertised via BGP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BgpNetwork {
    /// Network prefix.
    pub prefix: String,
    /// Subnet mask, when the stanza carried an explicit `mask`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
}

/// BGP protocol configuration for a device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BgpConfig {
    /// Local autonomous system number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_as: Option<u32>,
    /// BGP router identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_id: Option<String>,
    /// Configured peers, in configuration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub neighbors: Vec<BgpNeighbor>,
    /// Advertised networks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<BgpNetwork>,
}
