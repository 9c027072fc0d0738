// ── Validation results and reports ──

use std::fmt;

use serde::{Deserialize, Serialize};

use netlint_model::Device;

use super::severity::Severity;

/// Outcome of a single rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValidationStatus {
    /// Compliant with the rule.
    Pass,
    /// Violates the rule.
    Fail,
    /// Non-critical finding.
    Warn,
    /// Rule was not evaluated (e.g. disabled).
    Skip,
    /// Internal error during evaluation.
    Error,
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ValidationStatus::Pass => "PASS",
            ValidationStatus::Fail => "FAIL",
            ValidationStatus::Warn => "WARN",
            ValidationStatus::Skip => "SKIP",
            ValidationStatus::Error => "ERROR",
        };
        f.write_str(s)
    }
}

/// Outcome of evaluating a single rule against a single device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Id of the evaluated rule.
    pub rule_id: String,
    /// Human-readable rule description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub rule_description: String,
    /// The device that was evaluated.
    pub device: Device,
    /// Evaluation outcome. Machine clients key on this and `rule_id`;
    /// `message` is informational only.
    pub status: ValidationStatus,
    /// Severity of the rule.
    pub severity: Severity,
    /// Human-readable explanation.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Suggested corrective action (populated on FAIL/WARN).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

/// Aggregate compliance metrics for a validation report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
    pub skipped: usize,
    pub errors: usize,
    /// Compliance percentage in [0, 100]: passed over
    /// (passed + failed + warnings). Skips and errors do not enter the
    /// denominator; a zero denominator yields 0.
    pub score: f64,
}

impl ReportSummary {
    /// Compute aggregate statistics from a slice of results.
    pub fn compute(results: &[ValidationResult]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Self::default()
        };
        for r in results {
            match r.status {
                ValidationStatus::Pass => summary.passed += 1,
                ValidationStatus::Fail => summary.failed += 1,
                ValidationStatus::Warn => summary.warnings += 1,
                ValidationStatus::Skip => summary.skipped += 1,
                ValidationStatus::Error => summary.errors += 1,
            }
        }
        let evaluated = summary.passed + summary.failed + summary.warnings;
        if evaluated > 0 {
            summary.score = summary.passed as f64 / evaluated as f64 * 100.0;
        }
        summary
    }
}

/// Top-level output of a validation run against a device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// The evaluated device.
    pub device: Device,
    /// Name of the policy used.
    pub policy: String,
    /// Version of the policy used.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub policy_version: String,
    /// Complete list of rule results, sorted by rule id.
    pub results: Vec<ValidationResult>,
    /// Aggregate compliance metrics.
    pub summary: ReportSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use netlint_model::DeviceType;

    fn result(id: &str, status: ValidationStatus) -> ValidationResult {
        ValidationResult {
            rule_id: id.into(),
            rule_description: String::new(),
            device: Device::new("d1", DeviceType::CiscoIos),
            status,
            severity: Severity::Medium,
            message: String::new(),
            remediation: None,
        }
    }

    #[test]
    fn summary_counts_every_status() {
        let results = vec![
            result("a", ValidationStatus::Pass),
            result("b", ValidationStatus::Fail),
            result("c", ValidationStatus::Warn),
            result("d", ValidationStatus::Skip),
            result("e", ValidationStatus::Error),
        ];
        let s = ReportSummary::compute(&results);
        assert_eq!(
            (s.total, s.passed, s.failed, s.warnings, s.skipped, s.errors),
            (5, 1, 1, 1, 1, 1)
        );
        // 1 pass over 3 evaluated.
        assert!((s.score - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn skips_and_errors_do_not_enter_the_denominator() {
        let results = vec![
            result("a", ValidationStatus::Skip),
            result("b", ValidationStatus::Error),
        ];
        let s = ReportSummary::compute(&results);
        assert_eq!(s.score, 0.0);
    }

    #[test]
    fn score_stays_in_range() {
        let all_pass = vec![result("a", ValidationStatus::Pass)];
        assert_eq!(ReportSummary::compute(&all_pass).score, 100.0);
        let all_fail = vec![result("a", ValidationStatus::Fail)];
        assert_eq!(ReportSummary::compute(&all_fail).score, 0.0);
    }
}
