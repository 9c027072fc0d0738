use thiserror::Error;

use crate::policy::ValidationResult;

/// Unified error type for the core crate. Messages carry the identity of
/// the offending object (rule id, device id, pattern) so failures are
/// diagnosable from logs alone.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Policy loading ───────────────────────────────────────────────
    #[error("policy name is required")]
    PolicyNameMissing,

    #[error("rule at index {index} has no id")]
    RuleIdMissing { index: usize },

    #[error("duplicate rule id '{id}' at index {index}")]
    DuplicateRuleId { id: String, index: usize },

    #[error("failed to parse policy document: {0}")]
    PolicyYaml(#[from] serde_yaml::Error),

    // ── Engine ───────────────────────────────────────────────────────
    /// The run was cancelled. `partial` holds the results collected
    /// before cancellation was observed; it is empty when cancellation
    /// pre-empted job submission.
    #[error("rule evaluation cancelled ({} result(s) collected)", .partial.len())]
    Cancelled { partial: Vec<ValidationResult> },

    // ── Topology integrity ───────────────────────────────────────────
    #[error("link references unknown {endpoint} device '{device_id}'")]
    UnknownLinkDevice {
        endpoint: &'static str,
        device_id: String,
    },

    // ── Baseline ─────────────────────────────────────────────────────
    #[error("no baseline recorded for device '{device_id}'")]
    NoBaseline { device_id: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
