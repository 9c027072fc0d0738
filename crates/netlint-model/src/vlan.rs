// ── VLAN domain types ──

use serde::{Deserialize, Serialize};

/// Administrative state of a VLAN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VlanState {
    Active,
    Suspend,
}

/// A single VLAN definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vlan {
    /// VLAN identifier (1-4094).
    pub id: u16,
    /// Operator-assigned name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Administrative state.
    pub state: VlanState,
}
