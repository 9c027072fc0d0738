// ── Policy loading ──

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::error::CoreError;

use super::rule::Policy;

/// Reads and validates policy definitions from YAML.
#[derive(Debug, Default)]
pub struct PolicyLoader;

impl PolicyLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read the policy at the given path.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Policy, CoreError> {
        let data = std::fs::read(path.as_ref())?;
        self.load_bytes(&data)
    }

    /// Parse YAML-encoded policy bytes. Structural problems -- a missing
    /// name, a rule without an id, duplicate ids, an unknown severity --
    /// are load errors, not lint findings.
    pub fn load_bytes(&self, data: &[u8]) -> Result<Policy, CoreError> {
        let policy: Policy = serde_yaml::from_slice(data)?;
        validate(&policy)?;
        debug!(policy = %policy.name, rules = policy.rules.len(), "policy loaded");
        Ok(policy)
    }
}

/// Check the structural integrity of a parsed Policy.
fn validate(policy: &Policy) -> Result<(), CoreError> {
    if policy.name.is_empty() {
        return Err(CoreError::PolicyNameMissing);
    }
    let mut seen = HashSet::with_capacity(policy.rules.len());
    for (index, rule) in policy.rules.iter().enumerate() {
        if rule.id.is_empty() {
            return Err(CoreError::RuleIdMissing { index });
        }
        if !seen.insert(rule.id.as_str()) {
            return Err(CoreError::DuplicateRuleId {
                id: rule.id.clone(),
                index,
            });
        }
    }
    Ok(())
}
