// ── Concurrent rule evaluation engine ──
//
// A fixed pool of worker tasks pulls jobs from a bounded channel sized
// to the rule count. Submission follows policy rule order; completion
// order is unspecified -- the DeviceValidator sorts by rule id to obtain
// a deterministic report. All blocking points (submit, worker receive,
// result collection) observe the cancellation token.

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use netlint_model::ConfigModel;

use crate::error::CoreError;

use super::evaluator::Evaluator;
use super::report::ValidationResult;
use super::rule::{Policy, Rule};

const DEFAULT_CONCURRENCY: usize = 4;

/// Configures the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineOptions {
    /// Number of parallel rule-evaluation workers. Zero defaults to 4.
    pub concurrency: usize,
}

/// Orchestrates concurrent rule evaluation across all rules in a policy.
#[derive(Debug)]
pub struct Engine {
    concurrency: usize,
}

struct Job {
    rule: Rule,
    cfg: Arc<ConfigModel>,
}

impl Engine {
    pub fn new(opts: EngineOptions) -> Self {
        let concurrency = if opts.concurrency == 0 {
            DEFAULT_CONCURRENCY
        } else {
            opts.concurrency
        };
        Self { concurrency }
    }

    /// Evaluate every rule in the policy against the configuration.
    ///
    /// Results arrive in completion order; callers wanting determinism
    /// sort by rule id. Cancellation before all jobs were submitted
    /// returns [`CoreError::Cancelled`] with an empty partial set;
    /// cancellation observed later returns the error carrying the
    /// results collected so far.
    pub async fn run(
        &self,
        cancel: &CancellationToken,
        policy: &Policy,
        cfg: &ConfigModel,
    ) -> Result<Vec<ValidationResult>, CoreError> {
        let total = policy.rules.len();
        if total == 0 {
            return Ok(Vec::new());
        }

        let cfg = Arc::new(cfg.clone());
        let (job_tx, job_rx) = mpsc::channel::<Job>(total);
        let (result_tx, mut result_rx) = mpsc::channel::<ValidationResult>(total);
        let job_rx = Arc::new(Mutex::new(job_rx));

        let workers: Vec<JoinHandle<()>> = (0..self.concurrency)
            .map(|_| {
                let job_rx = Arc::clone(&job_rx);
                let result_tx = result_tx.clone();
                let cancel = cancel.clone();
                tokio::spawn(worker(job_rx, result_tx, cancel))
            })
            .collect();
        drop(result_tx);

        // Submit in policy rule order.
        for rule in &policy.rules {
            let job = Job {
                rule: rule.clone(),
                cfg: Arc::clone(&cfg),
            };
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    warn!(policy = %policy.name, "cancelled before all rules were submitted");
                    drop(job_tx);
                    drain(workers).await;
                    return Err(CoreError::Cancelled { partial: Vec::new() });
                }
                sent = job_tx.send(job) => {
                    if sent.is_err() {
                        // All workers exited early; only possible under
                        // cancellation.
                        drain(workers).await;
                        return Err(CoreError::Cancelled { partial: Vec::new() });
                    }
                }
            }
        }
        drop(job_tx);

        let mut results = Vec::with_capacity(total);
        while let Some(result) = result_rx.recv().await {
            results.push(result);
        }
        drain(workers).await;

        if cancel.is_cancelled() {
            return Err(CoreError::Cancelled { partial: results });
        }
        debug!(policy = %policy.name, results = results.len(), "engine run complete");
        Ok(results)
    }
}

/// Long-lived worker: picks between cancellation and the next job. Each
/// worker owns its Evaluator, and with it its own regex cache.
async fn worker(
    job_rx: Arc<Mutex<mpsc::Receiver<Job>>>,
    result_tx: mpsc::Sender<ValidationResult>,
    cancel: CancellationToken,
) {
    let mut evaluator = Evaluator::new();
    loop {
        let job = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            job = async { job_rx.lock().await.recv().await } => job,
        };
        let Some(job) = job else { break };
        let result = evaluator.evaluate(&job.rule, &job.cfg);
        if result_tx.send(result).await.is_err() {
            break;
        }
    }
}

async fn drain(workers: Vec<JoinHandle<()>>) {
    for handle in workers {
        let _ = handle.await;
    }
}
