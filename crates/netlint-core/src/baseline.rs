// ── Compliance baselines ──

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::policy::{Report, ReportSummary};

/// Snapshot of a device's compliance state at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineEntry {
    pub device_id: String,
    pub policy_name: String,
    /// Compliance score at baseline time.
    pub score: f64,
    pub recorded_at: DateTime<Utc>,
    pub summary: ReportSummary,
}

/// In-memory collection of baseline entries, keyed by device id.
///
/// Not internally synchronised: callers sharing a store across tasks
/// wrap it in their own reader-writer discipline.
#[derive(Debug, Default)]
pub struct BaselineStore {
    entries: BTreeMap<String, BaselineEntry>,
}

impl BaselineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the baseline for the report's device.
    pub fn record(&mut self, report: &Report) {
        let device_id = report.device.effective_id().to_owned();
        self.entries.insert(
            device_id.clone(),
            BaselineEntry {
                device_id,
                policy_name: report.policy.clone(),
                score: report.summary.score,
                recorded_at: Utc::now(),
                summary: report.summary,
            },
        );
    }

    /// The baseline entry for a device.
    pub fn get(&self, device_id: &str) -> Result<&BaselineEntry, CoreError> {
        self.entries
            .get(device_id)
            .ok_or_else(|| CoreError::NoBaseline {
                device_id: device_id.to_owned(),
            })
    }

    /// Change in compliance score since the device's baseline; positive
    /// means improvement.
    pub fn compare(&self, current: &Report) -> Result<f64, CoreError> {
        let baseline = self.get(current.device.effective_id())?;
        Ok(current.summary.score - baseline.score)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netlint_model::{Device, DeviceType};

    fn report(score: f64) -> Report {
        Report {
            device: Device::new("R1", DeviceType::CiscoIos),
            policy: "baseline".into(),
            policy_version: String::new(),
            results: Vec::new(),
            summary: ReportSummary {
                score,
                ..ReportSummary::default()
            },
        }
    }

    #[test]
    fn record_and_compare() {
        let mut store = BaselineStore::new();
        store.record(&report(80.0));
        assert_eq!(store.len(), 1);

        let delta = store.compare(&report(95.0)).unwrap();
        assert!((delta - 15.0).abs() < 1e-9);

        let delta = store.compare(&report(60.0)).unwrap();
        assert!((delta + 20.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_device_is_an_error() {
        let store = BaselineStore::new();
        let err = store.get("ghost").unwrap_err();
        assert!(matches!(err, CoreError::NoBaseline { .. }));
    }

    #[test]
    fn re_recording_replaces_the_entry() {
        let mut store = BaselineStore::new();
        store.record(&report(50.0));
        store.record(&report(70.0));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("R1").unwrap().score, 70.0);
    }
}
