// ── Single-device validation ──

use tokio_util::sync::CancellationToken;
use tracing::debug;

use netlint_model::ConfigModel;

use crate::error::CoreError;
use crate::policy::{Engine, EngineOptions, Policy, Report, ReportSummary};

/// Process exit codes surfaced to external glue.
///
/// 0 = compliant, 1 = policy violations, 2 = execution errors. Codes 3
/// (invalid input) and 4 (timeout) are reserved for the CLI layer.
pub mod exit_codes {
    pub const COMPLIANT: i32 = 0;
    pub const VIOLATIONS: i32 = 1;
    pub const EXECUTION_ERROR: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
    pub const TIMEOUT: i32 = 4;
}

/// Configures the DeviceValidator.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceValidatorOptions {
    /// Number of parallel rule-evaluation workers. Zero defaults to 4.
    pub concurrency: usize,
}

/// Parameters for a validation run.
#[derive(Debug, Clone)]
pub struct ValidationRequest {
    /// The parsed configuration model.
    pub config: ConfigModel,
    /// The policy to validate against.
    pub policy: Policy,
    /// Treat warnings as failures for exit-code purposes.
    pub strict: bool,
}

/// Validates a single device configuration against a policy and builds
/// a deterministic [`Report`].
#[derive(Debug)]
pub struct DeviceValidator {
    engine: Engine,
}

impl DeviceValidator {
    pub fn new(opts: DeviceValidatorOptions) -> Self {
        Self {
            engine: Engine::new(EngineOptions {
                concurrency: opts.concurrency,
            }),
        }
    }

    /// Run the engine, sort results by rule id, and assemble the report
    /// with its summary.
    pub async fn validate(
        &self,
        cancel: &CancellationToken,
        req: &ValidationRequest,
    ) -> Result<Report, CoreError> {
        let mut results = self.engine.run(cancel, &req.policy, &req.config).await?;
        results.sort_by(|a, b| a.rule_id.cmp(&b.rule_id));

        let summary = ReportSummary::compute(&results);
        debug!(
            device = %req.config.device.effective_id(),
            policy = %req.policy.name,
            score = summary.score,
            "validation complete"
        );

        Ok(Report {
            device: req.config.device.clone(),
            policy: req.policy.name.clone(),
            policy_version: req.policy.version.clone(),
            results,
            summary,
        })
    }
}

/// Map a report to its process exit code.
pub fn exit_code(report: &Report, strict: bool) -> i32 {
    let s = &report.summary;
    if s.errors > 0 {
        return exit_codes::EXECUTION_ERROR;
    }
    if s.failed > 0 || (strict && s.warnings > 0) {
        return exit_codes::VIOLATIONS;
    }
    exit_codes::COMPLIANT
}
