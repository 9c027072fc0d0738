// ── Topology-wide validation ──

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use netlint_model::ConfigModel;

use crate::error::CoreError;
use crate::policy::{Policy, Report};

use super::device::{DeviceValidator, DeviceValidatorOptions, ValidationRequest};

/// Aggregate result of validating every device in a topology.
#[derive(Debug, Default)]
pub struct TopologyValidationResult {
    /// Per-device reports, keyed by effective device id.
    pub reports: BTreeMap<String, Report>,
    /// Per-device failures, keyed by effective device id.
    pub errors: BTreeMap<String, CoreError>,
}

/// Validates a set of device configurations against one policy, fanning
/// out across devices with bounded parallelism. Rule evaluation inside
/// each device runs single-threaded; parallelism is spent on the device
/// dimension instead.
#[derive(Debug)]
pub struct TopologyValidator {
    concurrency: usize,
}

impl TopologyValidator {
    /// Concurrency of zero defaults to 4 parallel devices.
    pub fn new(concurrency: usize) -> Self {
        Self {
            concurrency: if concurrency == 0 { 4 } else { concurrency },
        }
    }

    pub async fn validate(
        &self,
        cancel: &CancellationToken,
        configs: &[ConfigModel],
        policy: &Policy,
    ) -> TopologyValidationResult {
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let policy = Arc::new(policy.clone());

        let mut handles = Vec::with_capacity(configs.len());
        for cfg in configs {
            let semaphore = Arc::clone(&semaphore);
            let policy = Arc::clone(&policy);
            let cancel = cancel.clone();
            let device_id = cfg.device.effective_id().to_owned();
            let request = ValidationRequest {
                config: cfg.clone(),
                policy: (*policy).clone(),
                strict: false,
            };

            handles.push(tokio::spawn(async move {
                // Closed only on runtime shutdown; treat as cancellation.
                let Ok(_permit) = semaphore.acquire().await else {
                    return (device_id, Err(CoreError::Cancelled { partial: Vec::new() }));
                };
                let validator = DeviceValidator::new(DeviceValidatorOptions { concurrency: 1 });
                let outcome = validator.validate(&cancel, &request).await;
                (device_id, outcome)
            }));
        }

        let mut result = TopologyValidationResult::default();
        for handle in handles {
            let Ok((device_id, outcome)) = handle.await else {
                continue;
            };
            match outcome {
                Ok(report) => {
                    result.reports.insert(device_id, report);
                }
                Err(err) => {
                    result.errors.insert(device_id, err);
                }
            }
        }

        debug!(
            reports = result.reports.len(),
            errors = result.errors.len(),
            "topology validation complete"
        );
        result
    }
}
