// ── Routing loop check ──

use std::collections::HashMap;

use netlint_model::TopologyGraph;

use crate::policy::Severity;

use super::{Check, Issue};

pub const CODE: &str = "LOOP-001";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InStack,
    Done,
}

/// Detects directed cycles in the link graph with three-colour DFS.
/// A back edge (a neighbour currently on the recursion stack) emits one
/// issue carrying the in-progress path; traversal does not continue past
/// a detected cycle in that branch.
#[derive(Debug, Default)]
pub struct LoopCheck;

impl Check for LoopCheck {
    fn run(&self, graph: &TopologyGraph) -> Vec<Issue> {
        let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
        for link in &graph.links {
            adjacency
                .entry(link.source.as_str())
                .or_default()
                .push(link.target.as_str());
        }

        let mut marks: HashMap<&str, Mark> = graph
            .devices
            .keys()
            .map(|id| (id.as_str(), Mark::Unvisited))
            .collect();
        let mut issues = Vec::new();

        // BTreeMap keys: start nodes are visited in sorted order.
        for id in graph.devices.keys() {
            if marks.get(id.as_str()) == Some(&Mark::Unvisited) {
                let mut path = vec![id.as_str()];
                dfs(id.as_str(), &adjacency, &mut marks, &mut path, &mut issues);
            }
        }
        issues
    }
}

fn dfs<'a>(
    node: &'a str,
    adjacency: &HashMap<&'a str, Vec<&'a str>>,
    marks: &mut HashMap<&'a str, Mark>,
    path: &mut Vec<&'a str>,
    issues: &mut Vec<Issue>,
) {
    marks.insert(node, Mark::InStack);
    if let Some(neighbors) = adjacency.get(node) {
        for &neighbor in neighbors {
            match marks.get(neighbor).copied().unwrap_or(Mark::Unvisited) {
                Mark::InStack => {
                    issues.push(Issue {
                        code: CODE.into(),
                        severity: Severity::Critical,
                        message: format!(
                            "routing loop detected: {} -> {neighbor}",
                            path.join(" -> ")
                        ),
                        device_id: Some(node.to_owned()),
                    });
                    marks.insert(node, Mark::Done);
                    return;
                }
                Mark::Unvisited => {
                    path.push(neighbor);
                    dfs(neighbor, adjacency, marks, path, issues);
                    path.pop();
                }
                Mark::Done => {}
            }
        }
    }
    marks.insert(node, Mark::Done);
}

#[cfg(test)]
mod tests {
    use super::*;
    use netlint_model::{Device, DeviceType, LinkProtocol, TopologyLink};

    fn graph(ids: &[&str], links: &[(&str, &str)]) -> TopologyGraph {
        let mut g = TopologyGraph::default();
        for id in ids {
            g.devices
                .insert((*id).to_owned(), Device::new(*id, DeviceType::CiscoIos));
        }
        for (src, dst) in links {
            g.links
                .push(TopologyLink::new(*src, *dst, LinkProtocol::Ospf));
        }
        g
    }

    #[test]
    fn dag_has_no_loops() {
        let g = graph(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("a", "c")]);
        assert!(LoopCheck.run(&g).is_empty());
    }

    #[test]
    fn three_node_cycle_is_detected() {
        let g = graph(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
        let issues = LoopCheck.run(&g);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, CODE);
        assert_eq!(issues[0].severity, Severity::Critical);
        assert_eq!(issues[0].message, "routing loop detected: a -> b -> c -> a");
    }

    #[test]
    fn self_loop_is_detected() {
        let g = graph(&["a"], &[("a", "a")]);
        let issues = LoopCheck.run(&g);
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn issue_order_is_reproducible() {
        let g = graph(
            &["m", "n", "x", "y"],
            &[("m", "n"), ("n", "m"), ("x", "y"), ("y", "x")],
        );
        let first = LoopCheck.run(&g);
        let second = LoopCheck.run(&g);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
