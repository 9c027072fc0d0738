// ── Policy linting ──
//
// Operates on the raw YAML document rather than the typed Policy, so it
// can see keys the typed deserialisation would silently ignore. Lint
// findings never fail a load; structural problems that do are the
// loader's job.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::Deserialize;

use crate::error::CoreError;

/// Valid keys within a rule's `match` block.
pub const SUPPORTED_MATCH_KEYS: [&str; 4] =
    ["contains", "not_contains", "regex", "required_block"];

/// Valid keys within a rule's `action` block.
pub const SUPPORTED_ACTION_KEYS: [&str; 3] = ["deny", "warn", "remediation"];

/// Valid severity values in policy documents.
pub const VALID_SEVERITIES: [&str; 5] = ["CRITICAL", "HIGH", "MEDIUM", "LOW", "INFO"];

/// A single problem found in a raw policy document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintFinding {
    /// Zero-based index of the offending rule; `None` for document-level
    /// findings.
    pub rule_index: Option<usize>,
    /// Rule identifier, when available.
    pub rule_id: Option<String>,
    /// The field the finding refers to.
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for LintFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rule_id {
            Some(id) => write!(f, "rule '{id}' field '{}': {}", self.field, self.message),
            None => match self.rule_index {
                Some(i) => write!(f, "rule #{i} field '{}': {}", self.field, self.message),
                None => write!(f, "document field '{}': {}", self.field, self.message),
            },
        }
    }
}

// Raw mirror of the policy document; unknown keys survive here.
#[derive(Debug, Deserialize)]
struct RawRule {
    #[serde(default)]
    id: String,
    #[serde(default)]
    severity: Option<String>,
    #[serde(default, rename = "match")]
    match_block: Option<BTreeMap<String, serde_yaml::Value>>,
    #[serde(default)]
    action: Option<BTreeMap<String, serde_yaml::Value>>,
}

#[derive(Debug, Deserialize)]
struct RawPolicy {
    #[serde(default)]
    name: String,
    #[serde(default)]
    rules: Vec<RawRule>,
}

/// Structural and semantic lint over a raw policy document.
#[derive(Debug, Default)]
pub struct PolicyLinter;

impl PolicyLinter {
    pub fn new() -> Self {
        Self
    }

    /// Lint a YAML policy document. Returns the list of findings; an
    /// unparsable document is an error.
    pub fn lint_bytes(&self, data: &[u8]) -> Result<Vec<LintFinding>, CoreError> {
        let raw: RawPolicy = serde_yaml::from_slice(data)?;
        Ok(lint(&raw))
    }
}

fn lint(policy: &RawPolicy) -> Vec<LintFinding> {
    let mut findings = Vec::new();

    if policy.name.is_empty() {
        findings.push(LintFinding {
            rule_index: None,
            rule_id: None,
            field: "name".into(),
            message: "policy name is required".into(),
        });
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(policy.rules.len());
    for (index, rule) in policy.rules.iter().enumerate() {
        let finding = |field: &str, message: String| LintFinding {
            rule_index: Some(index),
            rule_id: (!rule.id.is_empty()).then(|| rule.id.clone()),
            field: field.into(),
            message,
        };

        if rule.id.is_empty() {
            findings.push(finding("id", "rule id is required".into()));
        } else if !seen.insert(rule.id.as_str()) {
            findings.push(finding("id", "duplicate rule id".into()));
        }

        match rule.severity.as_deref() {
            None => findings.push(finding("severity", "severity is required".into())),
            Some(s) if !VALID_SEVERITIES.contains(&s) => findings.push(finding(
                "severity",
                format!("invalid severity '{s}'; must be one of {VALID_SEVERITIES:?}"),
            )),
            Some(_) => {}
        }

        match &rule.match_block {
            None => findings.push(finding("match", "match block is required".into())),
            Some(block) => {
                for key in block.keys() {
                    if !SUPPORTED_MATCH_KEYS.contains(&key.as_str()) {
                        findings.push(finding(
                            &format!("match.{key}"),
                            format!("unsupported match key '{key}'"),
                        ));
                    }
                }
            }
        }

        match &rule.action {
            None => findings.push(finding("action", "action block is required".into())),
            Some(block) => {
                for key in block.keys() {
                    if !SUPPORTED_ACTION_KEYS.contains(&key.as_str()) {
                        findings.push(finding(
                            &format!("action.{key}"),
                            format!("unsupported action key '{key}'"),
                        ));
                    }
                }
            }
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_policy_has_no_findings() {
        let doc = "\
name: p
rules:
  - id: R-1
    severity: HIGH
    match:
      contains: foo
    action:
      deny: true
";
        let findings = PolicyLinter::new().lint_bytes(doc.as_bytes()).unwrap();
        assert!(findings.is_empty(), "{findings:?}");
    }

    #[test]
    fn unknown_match_key_is_a_finding_not_an_error() {
        let doc = "\
name: p
rules:
  - id: R-1
    severity: HIGH
    match:
      containz: foo
    action:
      deny: true
";
        let findings = PolicyLinter::new().lint_bytes(doc.as_bytes()).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].field, "match.containz");
        assert_eq!(findings[0].rule_id.as_deref(), Some("R-1"));
    }

    #[test]
    fn missing_blocks_and_bad_severity_are_reported() {
        let doc = "\
name: ''
rules:
  - id: R-1
    severity: SEVERE
  - id: R-1
    severity: LOW
    match:
      contains: x
    action:
      warn: true
      escalate: true
";
        let findings = PolicyLinter::new().lint_bytes(doc.as_bytes()).unwrap();
        let fields: Vec<&str> = findings.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "name",
                "severity",
                "match",
                "action",
                "id",
                "action.escalate"
            ]
        );
    }

    #[test]
    fn unparsable_document_is_an_error() {
        assert!(PolicyLinter::new().lint_bytes(b": [ not yaml").is_err());
    }
}
