// ── Risk scoring ──
//
// Turns a validation report's failures into an aggregate risk tier.
// One CRITICAL violation (100 x 4.0) lands in the HIGH tier; a pair of
// them crosses into CRITICAL.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::policy::{Report, Severity, ValidationStatus};

/// Aggregate risk tier of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
    None,
}

/// Result of a risk assessment for a single device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskModel {
    /// The assessed device.
    pub device_id: String,
    /// Unweighted sum of violation severity weights.
    pub raw_score: f64,
    /// Weighted aggregate violation score.
    pub weighted_score: f64,
    /// Derived risk tier.
    pub level: RiskLevel,
    /// Violation count per severity name.
    pub violation_breakdown: BTreeMap<String, usize>,
}

/// Severity → multiplier table for weighted scoring.
#[derive(Debug, Clone)]
pub struct WeightTable {
    factors: BTreeMap<Severity, f64>,
}

impl WeightTable {
    /// The multiplier for a severity; unlisted severities count as 1.0.
    pub fn factor(&self, severity: Severity) -> f64 {
        self.factors.get(&severity).copied().unwrap_or(1.0)
    }

    /// A copy of this table with one factor overridden.
    pub fn with_factor(&self, severity: Severity, factor: f64) -> Self {
        let mut factors = self.factors.clone();
        factors.insert(severity, factor);
        Self { factors }
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            factors: BTreeMap::from([
                (Severity::Critical, 4.0),
                (Severity::High, 2.5),
                (Severity::Medium, 1.5),
                (Severity::Low, 1.0),
                (Severity::Info, 0.1),
            ]),
        }
    }
}

/// Computes risk assessments from validation reports.
#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    weights: WeightTable,
}

impl RiskScorer {
    pub fn new(weights: WeightTable) -> Self {
        Self { weights }
    }

    /// Derive a [`RiskModel`] from a report. Only FAIL results count as
    /// violations.
    pub fn score(&self, report: &Report) -> RiskModel {
        let mut model = RiskModel {
            device_id: report.device.effective_id().to_owned(),
            raw_score: 0.0,
            weighted_score: 0.0,
            level: RiskLevel::None,
            violation_breakdown: BTreeMap::new(),
        };

        for result in &report.results {
            if result.status != ValidationStatus::Fail {
                continue;
            }
            *model
                .violation_breakdown
                .entry(result.severity.as_str().to_owned())
                .or_insert(0) += 1;
            let weight = f64::from(result.severity.weight());
            model.raw_score += weight;
            model.weighted_score += weight * self.weights.factor(result.severity);
        }

        model.level = classify(model.weighted_score);
        model
    }

    pub fn score_many(&self, reports: &[Report]) -> Vec<RiskModel> {
        reports.iter().map(|r| self.score(r)).collect()
    }
}

fn classify(score: f64) -> RiskLevel {
    if score >= 500.0 {
        RiskLevel::Critical
    } else if score >= 200.0 {
        RiskLevel::High
    } else if score >= 75.0 {
        RiskLevel::Medium
    } else if score > 0.0 {
        RiskLevel::Low
    } else {
        RiskLevel::None
    }
}
