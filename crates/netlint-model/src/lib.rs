// netlint-model: vendor-neutral representation of network device state.
//
// Everything downstream of the parsers (policy evaluation, drift, topology)
// operates on these types only -- no vendor syntax leaks past this crate.

pub mod acl;
pub mod bgp;
pub mod config;
pub mod device;
pub mod interface;
pub mod ospf;
pub mod routing;
pub mod topology;
pub mod vlan;

// ── Primary re-exports ──────────────────────────────────────────────
pub use acl::{Acl, AclAction, AclEntry, AclKind};
pub use bgp::{BgpConfig, BgpNeighbor, BgpNetwork};
pub use config::{split_config_lines, ConfigModel};
pub use device::{Device, DeviceType};
pub use interface::{Interface, VlanMode};
pub use ospf::{OspfArea, OspfConfig, OspfRedistribution};
pub use routing::StaticRoute;
pub use topology::{LinkProtocol, TopologyGraph, TopologyLink};
pub use vlan::{Vlan, VlanState};
