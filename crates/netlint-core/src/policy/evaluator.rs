// ── Per-rule evaluation ──

use netlint_model::ConfigModel;

use super::matcher::Matcher;
use super::report::{ValidationResult, ValidationStatus};
use super::rule::Rule;

/// Applies a single [`Rule`] to a [`ConfigModel`].
///
/// The decision table, in order:
/// 1. disabled rule → SKIP
/// 2. matcher error → ERROR (the engine is never aborted)
/// 3. `deny ∧ matched` → FAIL; `warn ∧ matched` → WARN;
///    neither deny nor warn ∧ ¬matched → FAIL (the match is required);
///    otherwise → PASS
#[derive(Debug, Default)]
pub struct Evaluator {
    matcher: Matcher,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evaluate(&mut self, rule: &Rule, cfg: &ConfigModel) -> ValidationResult {
        let mut result = ValidationResult {
            rule_id: rule.id.clone(),
            rule_description: rule.description.clone(),
            device: cfg.device.clone(),
            status: ValidationStatus::Pass,
            severity: rule.severity,
            message: String::new(),
            remediation: None,
        };

        if !rule.is_enabled() {
            result.status = ValidationStatus::Skip;
            result.message = "rule is disabled".into();
            return result;
        }

        let matched = match self.matcher.matches(&rule.r#match, cfg) {
            Ok(matched) => matched,
            Err(err) => {
                result.status = ValidationStatus::Error;
                result.message = format!("evaluation error: {err}");
                return result;
            }
        };

        let action = &rule.action;
        if action.deny && matched {
            result.status = ValidationStatus::Fail;
            result.message = format!("rule {} violated: {}", rule.id, rule.description);
            result.remediation = action.remediation.clone();
        } else if !action.deny && action.warn && matched {
            result.status = ValidationStatus::Warn;
            result.message = format!("rule {} warning: {}", rule.id, rule.description);
            result.remediation = action.remediation.clone();
        } else if !action.deny && !action.warn && !matched {
            // Required-match inversion: a rule with no explicit action
            // asserts the match must hold; absence is a failure.
            result.status = ValidationStatus::Fail;
            result.message = format!(
                "rule {}: required condition not met: {}",
                rule.id, rule.description
            );
            result.remediation = action.remediation.clone();
        } else {
            result.status = ValidationStatus::Pass;
            result.message = format!("rule {} passed", rule.id);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::rule::{ActionSpec, MatchSpec};
    use crate::policy::severity::Severity;
    use netlint_model::{Device, DeviceType};

    fn config(lines: &[&str]) -> ConfigModel {
        let mut cfg = ConfigModel::from_raw(Device::new("R1", DeviceType::CiscoIos), b"");
        cfg.lines = lines.iter().map(|l| (*l).to_owned()).collect();
        cfg
    }

    fn rule(deny: bool, warn: bool, contains: &str) -> Rule {
        Rule {
            id: "T-1".into(),
            description: "test rule".into(),
            severity: Severity::High,
            tags: Vec::new(),
            r#match: MatchSpec {
                contains: Some(contains.into()),
                ..MatchSpec::default()
            },
            action: ActionSpec {
                deny,
                warn,
                remediation: Some("fix it".into()),
            },
            enabled: None,
        }
    }

    // The full (matched, deny, warn) → status table.
    #[test]
    fn decision_table() {
        let present = config(&["the needle is here"]);
        let absent = config(&["nothing relevant"]);
        let cases = [
            // (deny, warn, matched, expected)
            (true, false, true, ValidationStatus::Fail),
            (true, false, false, ValidationStatus::Pass),
            (true, true, true, ValidationStatus::Fail), // deny wins over warn
            (true, true, false, ValidationStatus::Pass),
            (false, true, true, ValidationStatus::Warn),
            (false, true, false, ValidationStatus::Pass),
            (false, false, true, ValidationStatus::Pass),
            (false, false, false, ValidationStatus::Fail), // required-match inversion
        ];

        let mut evaluator = Evaluator::new();
        for (deny, warn, matched, expected) in cases {
            let cfg = if matched { &present } else { &absent };
            let result = evaluator.evaluate(&rule(deny, warn, "needle"), cfg);
            assert_eq!(
                result.status, expected,
                "deny={deny} warn={warn} matched={matched}"
            );
        }
    }

    #[test]
    fn disabled_rule_skips() {
        let mut r = rule(true, false, "needle");
        r.enabled = Some(false);
        let result = Evaluator::new().evaluate(&r, &config(&["the needle is here"]));
        assert_eq!(result.status, ValidationStatus::Skip);
        assert_eq!(result.message, "rule is disabled");
    }

    #[test]
    fn enabled_true_behaves_like_absent() {
        let mut r = rule(true, false, "needle");
        r.enabled = Some(true);
        let result = Evaluator::new().evaluate(&r, &config(&["the needle is here"]));
        assert_eq!(result.status, ValidationStatus::Fail);
    }

    #[test]
    fn matcher_error_becomes_error_status() {
        let mut r = rule(true, false, "");
        r.r#match = MatchSpec {
            regex: Some("[broken".into()),
            ..MatchSpec::default()
        };
        let result = Evaluator::new().evaluate(&r, &config(&["x"]));
        assert_eq!(result.status, ValidationStatus::Error);
        assert!(result.message.contains("evaluation error"));
        assert!(result.message.contains("[broken"));
    }

    #[test]
    fn remediation_is_copied_on_fail_and_warn() {
        let fail = Evaluator::new().evaluate(&rule(true, false, "needle"), &config(&["needle"]));
        assert_eq!(fail.remediation.as_deref(), Some("fix it"));

        let warn = Evaluator::new().evaluate(&rule(false, true, "needle"), &config(&["needle"]));
        assert_eq!(warn.remediation.as_deref(), Some("fix it"));

        let pass = Evaluator::new().evaluate(&rule(true, false, "needle"), &config(&["clean"]));
        assert_eq!(pass.remediation, None);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let cfg = config(&["ntp server 10.0.0.1"]);
        let r = rule(false, false, "ntp server");
        let mut e = Evaluator::new();
        let first = e.evaluate(&r, &cfg);
        let second = e.evaluate(&r, &cfg);
        assert_eq!(first, second);
    }
}
