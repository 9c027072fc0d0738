// ── Interface domain types ──

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Switchport operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VlanMode {
    Access,
    Trunk,
    Routed,
}

impl FromStr for VlanMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "access" => Ok(VlanMode::Access),
            "trunk" => Ok(VlanMode::Trunk),
            "routed" => Ok(VlanMode::Routed),
            _ => Err(()),
        }
    }
}

/// A single network interface on a device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    /// Interface identifier (e.g. "GigabitEthernet0/0", "ge-0/0/0").
    pub name: String,
    /// Operator-configured description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Primary IPv4 address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// Primary IPv6 address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_address: Option<String>,
    /// Subnet mask for the IPv4 address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_mask: Option<String>,
    /// Administratively shut down.
    #[serde(default)]
    pub shutdown: bool,
    /// Switchport mode, when the interface is a switchport.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_mode: Option<VlanMode>,
    /// VLAN ID in access mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_vlan: Option<u16>,
    /// Allowed VLANs in trunk mode.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trunk_allowed_vlans: Vec<u16>,
    /// Spanning-tree portfast enabled.
    #[serde(default, rename = "stp_portfast")]
    pub stp_portfast: bool,
    /// Configured maximum transmission unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtu: Option<u32>,
    /// Configured bandwidth in kbps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandwidth: Option<u32>,
    /// ACL applied inbound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_acl: Option<String>,
    /// ACL applied outbound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbound_acl: Option<String>,
    /// Lines inside the interface block the parser did not classify,
    /// keyed `line_<n>` in block order.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl Interface {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
