// ── Device identity ──

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Vendor / platform family of a network device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceType {
    CiscoIos,
    CiscoNxos,
    JuniperJunos,
    AristaEos,
    Unknown,
}

impl DeviceType {
    /// The canonical identifier string, as it appears in reports and
    /// policy tooling.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::CiscoIos => "cisco-ios",
            DeviceType::CiscoNxos => "cisco-nxos",
            DeviceType::JuniperJunos => "juniper-junos",
            DeviceType::AristaEos => "arista-eos",
            DeviceType::Unknown => "unknown",
        }
    }

    /// Human-readable platform label.
    pub fn label(&self) -> &'static str {
        match self {
            DeviceType::CiscoIos => "Cisco IOS / IOS-XE",
            DeviceType::CiscoNxos => "Cisco NX-OS",
            DeviceType::JuniperJunos => "Juniper JunOS",
            DeviceType::AristaEos => "Arista EOS",
            DeviceType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity record for a network device, carried through the whole
/// pipeline from parsing to reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Stable identifier chosen by the caller -- typically a file path or
    /// inventory key. Falls back to `hostname` when empty (see
    /// [`effective_id`](Self::effective_id)).
    pub id: String,
    /// Configured hostname, filled in by the parser when discovered.
    pub hostname: String,
    /// Vendor / platform family.
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    /// Primary management IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_ip: Option<String>,
    /// Operating system version string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Location or datacenter identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    /// Logical classification (e.g. "core", "edge", "access").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Arbitrary key-value metadata labels.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
    /// When this device record was created.
    pub discovered_at: DateTime<Utc>,
}

impl Device {
    /// Create a device record with the given id and platform. The
    /// remaining fields start empty and are filled in by parsers or
    /// inventory providers.
    pub fn new(id: impl Into<String>, device_type: DeviceType) -> Self {
        Self {
            id: id.into(),
            hostname: String::new(),
            device_type,
            management_ip: None,
            version: None,
            site: None,
            role: None,
            tags: BTreeMap::new(),
            discovered_at: Utc::now(),
        }
    }

    /// The identifier used for graph keying and report grouping: `id`,
    /// or `hostname` whenever `id` is empty.
    pub fn effective_id(&self) -> &str {
        if self.id.is_empty() {
            &self.hostname
        } else {
            &self.id
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hostname.is_empty() {
            f.write_str(&self.id)
        } else {
            f.write_str(&self.hostname)
        }
    }
}
