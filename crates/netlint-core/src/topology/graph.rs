// ── Topology graph ──

use std::collections::BTreeMap;

use netlint_model::{Device, TopologyGraph, TopologyLink};

use crate::error::CoreError;

/// In-memory network topology: device nodes keyed by effective id plus
/// directed protocol links. Nodes live in a `BTreeMap` so traversal is
/// always in sorted-id order.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: BTreeMap<String, Device>,
    edges: Vec<TopologyLink>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a device node, keyed by its effective id
    /// (hostname when the id is empty).
    pub fn add_device(&mut self, device: Device) {
        let key = device.effective_id().to_owned();
        self.nodes.insert(key, device);
    }

    /// Add a directed link between two devices.
    pub fn add_link(&mut self, link: TopologyLink) {
        self.edges.push(link);
    }

    /// All device nodes, in sorted-id order.
    pub fn devices(&self) -> impl Iterator<Item = &Device> {
        self.nodes.values()
    }

    /// All directed links, in insertion order.
    pub fn links(&self) -> &[TopologyLink] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Device ids directly reachable from `device_id`, deduplicated, in
    /// first-seen order.
    pub fn neighbors(&self, device_id: &str) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for edge in &self.edges {
            if edge.source == device_id && !out.contains(&edge.target.as_str()) {
                out.push(&edge.target);
            }
        }
        out
    }

    /// Integrity check: every link endpoint must resolve to a node.
    /// A violation is a construction bug, not a user error.
    pub fn validate(&self) -> Result<(), CoreError> {
        for edge in &self.edges {
            if !self.nodes.contains_key(&edge.source) {
                return Err(CoreError::UnknownLinkDevice {
                    endpoint: "source",
                    device_id: edge.source.clone(),
                });
            }
            if !self.nodes.contains_key(&edge.target) {
                return Err(CoreError::UnknownLinkDevice {
                    endpoint: "target",
                    device_id: edge.target.clone(),
                });
            }
        }
        Ok(())
    }

    /// Snapshot into the serialisable model form the checks consume.
    pub fn to_model(&self) -> TopologyGraph {
        TopologyGraph {
            devices: self.nodes.clone(),
            links: self.edges.clone(),
        }
    }
}
