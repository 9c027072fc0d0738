// ── Policy and rule model ──

use serde::{Deserialize, Serialize};

use super::severity::Severity;

/// How a rule evaluates the device configuration. Exactly one field is
/// expected to be populated; the matcher rejects empty specs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchSpec {
    /// Substring that must appear on some configuration line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains: Option<String>,
    /// Substring that must be absent from every configuration line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_contains: Option<String>,
    /// Regular expression evaluated per line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    /// Configuration block prefix that must begin some line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_block: Option<String>,
}

/// What to report when a rule's condition is satisfied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionSpec {
    /// A match is a violation (FAIL).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deny: bool,
    /// A match is a warning (WARN).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub warn: bool,
    /// Suggested corrective action, copied onto FAIL/WARN results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

/// A single compliance rule within a policy.
///
/// A rule with neither `deny` nor `warn` asserts that its match *must*
/// hold: absence of the match is a failure (required-match inversion).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Unique identifier within the policy (e.g. "SNMP-001").
    pub id: String,
    /// What the rule validates.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Risk level of a violation.
    pub severity: Severity,
    /// Labels for categorisation and filtering.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Condition evaluated against the device configuration.
    #[serde(default)]
    pub r#match: MatchSpec,
    /// Outcome when the condition is satisfied.
    #[serde(default)]
    pub action: ActionSpec,
    /// Disables the rule without removing it; absent means enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl Rule {
    /// Whether the rule is active. Absent `enabled` defaults to true.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

/// Top-level policy definition, typically loaded from a YAML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// Human-readable policy identifier (e.g. "CIS-Baseline"). Required.
    pub name: String,
    /// Semantic version of the policy file.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    /// Purpose of the policy.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Author or organisation.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author: String,
    /// Ordered list of compliance rules.
    #[serde(default)]
    pub rules: Vec<Rule>,
}
