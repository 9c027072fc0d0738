// ── Access control lists ──

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether an ACL entry permits or denies traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AclAction {
    Permit,
    Deny,
}

impl FromStr for AclAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "permit" => Ok(AclAction::Permit),
            "deny" => Ok(AclAction::Deny),
            _ => Err(()),
        }
    }
}

/// ACL flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AclKind {
    Standard,
    Extended,
}

impl FromStr for AclKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(AclKind::Standard),
            "extended" => Ok(AclKind::Extended),
            _ => Err(()),
        }
    }
}

/// A single rule within an access control list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AclEntry {
    /// Sequence number, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u32>,
    /// Permit or deny. Absent for remark-only entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<AclAction>,
    /// IP protocol (e.g. "tcp", "udp", "ip", "icmp").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Source address or network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Destination address or network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Source port or range, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_port: Option<String>,
    /// Destination port or range, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest_port: Option<String>,
    /// Matched traffic is logged.
    #[serde(default)]
    pub log: bool,
    /// Free-text remark associated with the entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// An access control list with its ordered entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Acl {
    /// ACL identifier.
    pub name: String,
    /// "standard" or "extended", when the header declared one.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AclKind>,
    /// Ordered list of entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<AclEntry>,
}
