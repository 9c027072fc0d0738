// ── Asymmetric adjacency check ──

use std::collections::HashSet;

use netlint_model::TopologyGraph;

use crate::policy::Severity;

use super::{Check, Issue};

pub const CODE: &str = "ADJ-ASYMMETRIC-001";

/// Flags every directed link `a -> b` whose reverse `b -> a` is absent.
#[derive(Debug, Default)]
pub struct AdjacencyCheck;

impl Check for AdjacencyCheck {
    fn run(&self, graph: &TopologyGraph) -> Vec<Issue> {
        let existing: HashSet<(&str, &str)> = graph
            .links
            .iter()
            .map(|l| (l.source.as_str(), l.target.as_str()))
            .collect();

        graph
            .links
            .iter()
            .filter(|l| !existing.contains(&(l.target.as_str(), l.source.as_str())))
            .map(|l| Issue {
                code: CODE.into(),
                severity: Severity::Medium,
                message: format!(
                    "asymmetric link: {} -> {} has no return path",
                    l.source, l.target
                ),
                device_id: Some(l.source.clone()),
            })
            .collect()
    }
}
