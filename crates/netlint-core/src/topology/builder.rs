// ── Topology inference ──

use tracing::debug;

use netlint_model::{ConfigModel, LinkProtocol, TopologyLink};

use super::graph::Graph;

/// Constructs a [`Graph`] from a collection of ConfigModels by inferring
/// adjacencies from routing-protocol configuration.
#[derive(Debug, Default)]
pub struct Builder;

impl Builder {
    pub fn new() -> Self {
        Self
    }

    /// Build the topology graph. Every device becomes a node; BGP edges
    /// come from neighbor-address resolution against management and
    /// interface IPs, OSPF edges from shared area ids between device
    /// pairs.
    pub fn build(&self, configs: &[ConfigModel]) -> Graph {
        let mut graph = Graph::new();

        for cfg in configs {
            graph.add_device(cfg.device.clone());
        }

        // BGP adjacencies.
        for cfg in configs {
            let Some(bgp) = &cfg.bgp else { continue };
            let source = cfg.device.effective_id();
            for neighbor in &bgp.neighbors {
                let Some(target) = resolve_by_ip(configs, &neighbor.address) else {
                    continue;
                };
                graph.add_link(TopologyLink::new(source, target, LinkProtocol::Bgp));
            }
        }

        // OSPF adjacencies: one edge per unordered pair sharing an area.
        for (i, a) in configs.iter().enumerate() {
            let Some(ospf_a) = &a.ospf else { continue };
            for b in &configs[i + 1..] {
                let Some(ospf_b) = &b.ospf else { continue };
                if ospf_a.shares_area_with(ospf_b) {
                    graph.add_link(TopologyLink::new(
                        a.device.effective_id(),
                        b.device.effective_id(),
                        LinkProtocol::Ospf,
                    ));
                }
            }
        }

        debug!(
            devices = graph.node_count(),
            links = graph.links().len(),
            "topology graph built"
        );
        graph
    }
}

/// Resolve a neighbor address to a device id by scanning management and
/// interface IPs. When the address matches more than one device -- an
/// ambiguous configuration -- the lexicographically smallest device id
/// wins, so resolution does not depend on input order.
fn resolve_by_ip<'a>(configs: &'a [ConfigModel], addr: &str) -> Option<&'a str> {
    let mut candidates: Vec<&str> = Vec::new();
    for cfg in configs {
        let matches_mgmt = cfg.device.management_ip.as_deref() == Some(addr);
        let matches_iface = cfg
            .interfaces
            .iter()
            .any(|i| i.ip_address.as_deref() == Some(addr));
        if matches_mgmt || matches_iface {
            candidates.push(cfg.device.effective_id());
        }
    }
    candidates.into_iter().min()
}
