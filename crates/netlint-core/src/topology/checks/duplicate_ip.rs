// ── Duplicate management IP check ──

use std::collections::HashMap;

use netlint_model::TopologyGraph;

use crate::policy::Severity;

use super::{Check, Issue};

pub const CODE: &str = "DUP-IP-001";

/// Flags management IPs assigned to more than one device: one issue per
/// duplicate after the first holder.
#[derive(Debug, Default)]
pub struct DuplicateIpCheck;

impl Check for DuplicateIpCheck {
    fn run(&self, graph: &TopologyGraph) -> Vec<Issue> {
        let mut seen: HashMap<&str, &str> = HashMap::with_capacity(graph.devices.len());
        let mut issues = Vec::new();

        for (id, device) in &graph.devices {
            let Some(ip) = device.management_ip.as_deref() else {
                continue;
            };
            if ip.is_empty() {
                continue;
            }
            match seen.get(ip) {
                Some(existing) => issues.push(Issue {
                    code: CODE.into(),
                    severity: Severity::High,
                    message: format!(
                        "duplicate management IP {ip} assigned to devices '{existing}' and '{id}'"
                    ),
                    device_id: Some(id.clone()),
                }),
                None => {
                    seen.insert(ip, id);
                }
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netlint_model::{Device, DeviceType};

    fn graph(entries: &[(&str, Option<&str>)]) -> TopologyGraph {
        let mut g = TopologyGraph::default();
        for (id, ip) in entries {
            let mut d = Device::new(*id, DeviceType::CiscoIos);
            d.management_ip = ip.map(str::to_owned);
            g.devices.insert((*id).to_owned(), d);
        }
        g
    }

    #[test]
    fn one_issue_per_duplicate_after_the_first() {
        let g = graph(&[
            ("a", Some("10.0.0.1")),
            ("b", Some("10.0.0.1")),
            ("c", Some("10.0.0.1")),
            ("d", Some("10.0.0.9")),
        ]);
        let issues = DuplicateIpCheck.run(&g);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.code == CODE));
        assert_eq!(issues[0].device_id.as_deref(), Some("b"));
        assert_eq!(issues[1].device_id.as_deref(), Some("c"));
    }

    #[test]
    fn missing_ips_are_ignored() {
        let g = graph(&[("a", None), ("b", None)]);
        assert!(DuplicateIpCheck.run(&g).is_empty());
    }
}
