// ── Drift scoring ──

use serde::{Deserialize, Serialize};

use super::differ::DiffResult;

const DEFAULT_THRESHOLD: f64 = 5.0;

/// Magnitude summary of configuration drift for one device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriftScore {
    pub device_id: String,
    pub lines_added: usize,
    pub lines_removed: usize,
    pub total_changes: usize,
    /// Percentage of the baseline changed, in [0, ∞): total changes over
    /// the baseline line count. Zero when the baseline has no lines.
    pub drift_percent: f64,
    /// Whether the drift meets the configured threshold.
    pub significant: bool,
}

/// Computes a [`DriftScore`] from a [`DiffResult`].
#[derive(Debug, Clone, Copy)]
pub struct DriftScorer {
    /// Drift percentage at or above which drift is significant.
    threshold: f64,
}

impl DriftScorer {
    /// A scorer with the given significance threshold. Zero or negative
    /// thresholds are coerced to the 5.0% default.
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold <= 0.0 {
            DEFAULT_THRESHOLD
        } else {
            threshold
        };
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Score a diff against the baseline's split line count.
    pub fn score(&self, diff: &DiffResult, baseline_line_count: usize) -> DriftScore {
        let lines_added = diff.added.len();
        let lines_removed = diff.removed.len();
        let total_changes = lines_added + lines_removed;

        let drift_percent = if baseline_line_count > 0 {
            total_changes as f64 / baseline_line_count as f64 * 100.0
        } else {
            0.0
        };

        DriftScore {
            device_id: diff.device_id.clone(),
            lines_added,
            lines_removed,
            total_changes,
            drift_percent,
            significant: drift_percent >= self.threshold,
        }
    }
}

impl Default for DriftScorer {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}
