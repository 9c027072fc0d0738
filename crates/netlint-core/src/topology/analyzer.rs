// ── Topology analysis ──

use std::fmt;

use tracing::debug;

use super::checks::{
    AdjacencyCheck, Check, DuplicateIpCheck, Issue, LoopCheck, SubnetOverlapCheck,
};
use super::graph::Graph;

/// Aggregate output of all topology checks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisResult {
    /// Detected problems, in check order.
    pub issues: Vec<Issue>,
    pub has_issues: bool,
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_issues {
            return writeln!(f, "Topology analysis: no issues detected.");
        }
        writeln!(f, "Topology analysis: {} issue(s) detected.", self.issues.len())?;
        for issue in &self.issues {
            writeln!(f, "  [{}] {}: {}", issue.severity, issue.code, issue.message)?;
        }
        Ok(())
    }
}

/// Runs all registered topology checks against a [`Graph`], in a fixed
/// order.
pub struct Analyzer {
    checks: Vec<Box<dyn Check>>,
}

impl Analyzer {
    /// An analyzer pre-loaded with the built-in checks.
    pub fn new() -> Self {
        Self {
            checks: vec![
                Box::new(DuplicateIpCheck),
                Box::new(SubnetOverlapCheck),
                Box::new(LoopCheck),
                Box::new(AdjacencyCheck),
            ],
        }
    }

    /// Run every check and collect the issues.
    pub fn analyze(&self, graph: &Graph) -> AnalysisResult {
        let snapshot = graph.to_model();
        let mut issues = Vec::new();
        for check in &self.checks {
            issues.extend(check.run(&snapshot));
        }
        debug!(issues = issues.len(), "topology analysis complete");
        AnalysisResult {
            has_issues: !issues.is_empty(),
            issues,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
