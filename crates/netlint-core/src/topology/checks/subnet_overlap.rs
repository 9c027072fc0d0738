// ── Subnet overlap check ──

use std::collections::HashMap;

use netlint_model::TopologyGraph;

use crate::policy::Severity;

use super::{Check, Issue};

pub const CODE: &str = "SUBNET-OVERLAP-001";

/// Flags devices whose management IPs fall in the same /24, as a proxy
/// for overlapping management subnets. Strings that do not look like
/// IPv4 addresses are ignored.
#[derive(Debug, Default)]
pub struct SubnetOverlapCheck;

impl Check for SubnetOverlapCheck {
    fn run(&self, graph: &TopologyGraph) -> Vec<Issue> {
        let mut prefixes: HashMap<String, &str> = HashMap::new();
        let mut issues = Vec::new();

        for (id, device) in &graph.devices {
            let Some(ip) = device.management_ip.as_deref() else {
                continue;
            };
            let Some(prefix) = slash24_prefix(ip) else {
                continue;
            };
            match prefixes.get(&prefix) {
                Some(existing) => issues.push(Issue {
                    code: CODE.into(),
                    severity: Severity::Medium,
                    message: format!("devices '{existing}' and '{id}' share /24 prefix {prefix}"),
                    device_id: Some(id.clone()),
                }),
                None => {
                    prefixes.insert(prefix, id);
                }
            }
        }
        issues
    }
}

/// The first three octets of an IPv4-looking address.
fn slash24_prefix(ip: &str) -> Option<String> {
    let octets: Vec<&str> = ip.split('.').collect();
    if octets.len() != 4 || octets.iter().any(|o| o.parse::<u8>().is_err()) {
        return None;
    }
    Some(octets[..3].join("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use netlint_model::{Device, DeviceType};

    fn graph(entries: &[(&str, &str)]) -> TopologyGraph {
        let mut g = TopologyGraph::default();
        for (id, ip) in entries {
            let mut d = Device::new(*id, DeviceType::CiscoIos);
            d.management_ip = Some((*ip).to_owned());
            g.devices.insert((*id).to_owned(), d);
        }
        g
    }

    #[test]
    fn same_slash24_collides() {
        let g = graph(&[("a", "10.0.0.1"), ("b", "10.0.0.200"), ("c", "10.0.1.1")]);
        let issues = SubnetOverlapCheck.run(&g);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, CODE);
        assert!(issues[0].message.contains("10.0.0"));
    }

    #[test]
    fn non_ipv4_strings_are_ignored() {
        let g = graph(&[("a", "fe80::1"), ("b", "not-an-ip"), ("c", "10.1.2.3")]);
        assert!(SubnetOverlapCheck.run(&g).is_empty());
    }
}
