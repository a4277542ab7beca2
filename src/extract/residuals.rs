//! Residual distribution summary.

use serde::{Deserialize, Serialize};

use super::coefficients::round_to;
use crate::model::RegressionResult;

/// Five-number summary of a residual series, each value independently
/// rounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResidualSummary {
    /// Minimum residual
    pub min: f64,
    /// First quartile
    pub q25: f64,
    /// Median
    pub median: f64,
    /// Third quartile
    pub q75: f64,
    /// Maximum residual
    pub max: f64,
}

impl ResidualSummary {
    /// Labeled values in rendering order.
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("Min", self.min),
            ("25%", self.q25),
            ("50%", self.median),
            ("75%", self.q75),
            ("Max", self.max),
        ]
    }
}

/// Linearly interpolated quantile of a sorted, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}

/// Compute the five-number residual summary of a classified result.
///
/// Non-finite residuals are ignored, matching how the engines' own
/// describe routines treat them. An empty (or all-non-finite) series
/// yields all-NaN statistics, which render as `NaN`.
pub fn extract_residual_summary(result: &RegressionResult, digits: usize) -> ResidualSummary {
    let mut residuals: Vec<f64> = result
        .residuals()
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .collect();

    if residuals.is_empty() {
        return ResidualSummary {
            min: f64::NAN,
            q25: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        };
    }

    residuals.sort_unstable_by(f64::total_cmp);
    ResidualSummary {
        min: round_to(residuals[0], digits),
        q25: round_to(quantile(&residuals, 0.25), digits),
        median: round_to(quantile(&residuals, 0.50), digits),
        q75: round_to(quantile(&residuals, 0.75), digits),
        max: round_to(residuals[residuals.len() - 1], digits),
    }
}
