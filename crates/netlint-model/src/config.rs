// ── Canonical configuration model ──

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::acl::Acl;
use crate::bgp::BgpConfig;
use crate::device::Device;
use crate::interface::Interface;
use crate::ospf::OspfConfig;
use crate::routing::StaticRoute;
use crate::vlan::Vlan;

/// Split raw configuration text into its matching surface: one entry per
/// line, trailing `\r` stripped, empty and whitespace-only lines dropped.
///
/// This is the single splitter shared by every parser and by the drift
/// comparator, so `split(join(split(x)))` always equals `split(x)`.
pub fn split_config_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.trim().is_empty())
        .map(str::to_owned)
        .collect()
}

/// Vendor-neutral structured representation of a parsed device
/// configuration. The primary input to policy evaluation, drift scoring,
/// and topology inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigModel {
    /// Identity and metadata for the device.
    pub device: Device,
    /// Verbatim original configuration text.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub raw_text: String,
    /// The configuration lines, in original order. This is the primary
    /// matching surface for policy rules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<String>,
    /// Logical and physical interfaces.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<Interface>,
    /// Access control lists defined on the device.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub acls: Vec<Acl>,
    /// BGP protocol configuration, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bgp: Option<BgpConfig>,
    /// OSPF protocol configuration, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ospf: Option<OspfConfig>,
    /// Static routing entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub static_routes: Vec<StaticRoute>,
    /// VLANs configured on the device.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vlans: Vec<Vlan>,
    /// Discovered global singletons that do not map to a structured
    /// sub-model (hostname, ntp_server, vendor feature flags, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub global_settings: BTreeMap<String, String>,
}

impl ConfigModel {
    /// Build an empty model from raw bytes: `raw_text` keeps the input
    /// verbatim (lossily decoded), `lines` is the split matching surface.
    pub fn from_raw(device: Device, data: &[u8]) -> Self {
        let raw_text = String::from_utf8_lossy(data).into_owned();
        let lines = split_config_lines(&raw_text);
        Self {
            device,
            raw_text,
            lines,
            interfaces: Vec::new(),
            acls: Vec::new(),
            bgp: None,
            ospf: None,
            static_routes: Vec::new(),
            vlans: Vec::new(),
            global_settings: BTreeMap::new(),
        }
    }

    /// Whether the configuration contains the given exact line.
    pub fn has_line(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    /// Whether any line contains the given substring.
    pub fn contains_text(&self, text: &str) -> bool {
        self.lines.iter().any(|l| l.contains(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DeviceType;

    #[test]
    fn splitter_drops_blank_and_whitespace_lines() {
        let lines = split_config_lines("hostname R1\r\n\n   \nip ssh version 2\n");
        assert_eq!(lines, vec!["hostname R1", "ip ssh version 2"]);
    }

    #[test]
    fn splitter_is_idempotent() {
        let input = "a\r\n\nb\n   \n c \n";
        let once = split_config_lines(input);
        let again = split_config_lines(&once.join("\n"));
        assert_eq!(once, again);
    }

    #[test]
    fn from_raw_survives_arbitrary_bytes() {
        let device = Device::new("junk", DeviceType::Unknown);
        let cfg = ConfigModel::from_raw(device, &[0xff, 0xfe, b'\n', b'x', b'\n']);
        assert_eq!(cfg.lines.last().map(String::as_str), Some("x"));
    }

    #[test]
    fn line_queries() {
        let device = Device::new("r1", DeviceType::CiscoIos);
        let cfg = ConfigModel::from_raw(device, b"hostname R1\nntp server 10.0.0.1\n");
        assert!(cfg.has_line("hostname R1"));
        assert!(!cfg.has_line("hostname R2"));
        assert!(cfg.contains_text("ntp server"));
        assert!(!cfg.contains_text("snmp-server"));
    }
}
