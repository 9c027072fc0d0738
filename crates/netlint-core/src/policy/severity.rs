// ── Severity levels ──

use std::fmt;

use serde::{Deserialize, Serialize};

/// Risk level of a policy violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Immediate security risk requiring urgent remediation.
    Critical,
    /// Significant risk with high remediation priority.
    High,
    /// Moderate risk requiring scheduled remediation.
    Medium,
    /// Minor risk or best-practice deviation.
    Low,
    /// Informational finding with no immediate risk.
    Info,
}

impl Severity {
    /// Numeric weight for scoring; higher means more severe.
    pub fn weight(&self) -> u32 {
        match self {
            Severity::Critical => 100,
            Severity::High => 75,
            Severity::Medium => 50,
            Severity::Low => 25,
            Severity::Info => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Info => "INFO",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_are_ordered() {
        assert!(Severity::Critical.weight() > Severity::High.weight());
        assert!(Severity::High.weight() > Severity::Medium.weight());
        assert!(Severity::Medium.weight() > Severity::Low.weight());
        assert!(Severity::Low.weight() > Severity::Info.weight());
    }

    #[test]
    fn serde_uses_uppercase_names() {
        let s: Severity = serde_yaml::from_str("HIGH").unwrap();
        assert_eq!(s, Severity::High);
        assert!(serde_yaml::from_str::<Severity>("high").is_err());
    }
}
