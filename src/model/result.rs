//! Typed result variants.
//!
//! Each supported kind gets its own record shape carrying only the fields
//! valid for that kind, so a variant-specific statistic cannot be read off
//! the wrong model. [`RegressionResult`] ties them together under the
//! engine type tag, which doubles as the serde tag for loose payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::kind::{classify, ModelKind};
use super::table::SummaryTable;
use crate::error::ReportError;

/// Fixed-effect dimensions a panel model can absorb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Per-entity intercept shifts
    Entity,
    /// Per-period intercept shifts
    Time,
}

impl EffectKind {
    /// Column label in the fixed-effects section.
    pub fn label(self) -> &'static str {
        match self {
            EffectKind::Entity => "Entity",
            EffectKind::Time => "Time",
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of an ordinary least squares fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdinaryResult {
    /// Model formula, e.g. `"y ~ x1 + x2"`
    pub formula: String,
    /// Number of observations used
    pub nobs: u64,
    /// Residual series (observed minus fitted)
    pub residuals: Vec<f64>,
    /// Native coefficient summary table
    pub summary: SummaryTable,
    /// R-squared
    pub r_squared: f64,
    /// Adjusted R-squared
    pub adj_r_squared: f64,
    /// F-statistic for overall model significance
    pub f_statistic: f64,
    /// Model degrees of freedom
    pub df_model: u64,
    /// Residual degrees of freedom
    pub df_resid: u64,
    /// p-value for the F-statistic
    pub f_pvalue: f64,
}

/// Result of a panel fixed-effects fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelResult {
    /// Model formula
    pub formula: String,
    /// Number of observations used
    pub nobs: u64,
    /// Residual series
    pub residuals: Vec<f64>,
    /// Native coefficient summary table
    pub summary: SummaryTable,
    /// R-squared including the fixed effects
    pub rsquared_inclusive: f64,
    /// R-squared of the within-transformed model
    pub rsquared_within: f64,
    /// F-statistic for overall model significance
    pub f_statistic: f64,
    /// p-value for the F-statistic
    pub f_pvalue: f64,
    /// Variance-estimator label, e.g. `"clustered"`
    pub cov_type: String,
    /// Effect kinds absorbed by the fitted model
    pub included_effects: Vec<EffectKind>,
    /// Number of entities; engines hand this over as a float
    pub entity_count: f64,
    /// Number of time periods; engines hand this over as a float
    pub time_count: f64,
}

/// Result of a conditional-volatility fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityResult {
    /// Mean-model formula or description
    pub formula: String,
    /// Number of observations used
    pub nobs: u64,
    /// Residual series
    pub residuals: Vec<f64>,
    /// Native summary table for the mean equation
    pub mean_summary: SummaryTable,
    /// Native summary table for the variance equation
    pub volatility_summary: SummaryTable,
    /// Innovation distribution name
    pub distribution: String,
    /// Akaike information criterion
    pub aic: f64,
    /// Bayesian information criterion
    pub bic: f64,
}

/// A fitted regression result from one of the supported engines.
///
/// The serde tag is the engine type tag itself, so a loose payload
/// round-trips with its `kind` field intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum RegressionResult {
    /// Ordinary least squares
    #[serde(rename = "statsmodels.regression.linear_model.RegressionResultsWrapper")]
    Ordinary(OrdinaryResult),
    /// Panel regression with fixed effects
    #[serde(rename = "linearmodels.panel.results.PanelEffectsResults")]
    Panel(PanelResult),
    /// Conditional-volatility model
    #[serde(rename = "arch.univariate.base.ARCHModelResult")]
    Volatility(VolatilityResult),
}

impl RegressionResult {
    /// The classified kind of this result.
    pub fn kind(&self) -> ModelKind {
        match self {
            RegressionResult::Ordinary(_) => ModelKind::Ordinary,
            RegressionResult::Panel(_) => ModelKind::Panel,
            RegressionResult::Volatility(_) => ModelKind::Volatility,
        }
    }

    /// Model formula.
    pub fn formula(&self) -> &str {
        match self {
            RegressionResult::Ordinary(r) => &r.formula,
            RegressionResult::Panel(r) => &r.formula,
            RegressionResult::Volatility(r) => &r.formula,
        }
    }

    /// Number of observations used.
    pub fn nobs(&self) -> u64 {
        match self {
            RegressionResult::Ordinary(r) => r.nobs,
            RegressionResult::Panel(r) => r.nobs,
            RegressionResult::Volatility(r) => r.nobs,
        }
    }

    /// Residual series.
    pub fn residuals(&self) -> &[f64] {
        match self {
            RegressionResult::Ordinary(r) => &r.residuals,
            RegressionResult::Panel(r) => &r.residuals,
            RegressionResult::Volatility(r) => &r.residuals,
        }
    }

    /// Borrow the panel variant, if this is one.
    pub fn as_panel(&self) -> Option<&PanelResult> {
        match self {
            RegressionResult::Panel(r) => Some(r),
            _ => None,
        }
    }

    /// Build a typed result from a loose engine payload.
    ///
    /// The `kind` tag is classified first: an unknown tag is rejected as
    /// [`ReportError::UnsupportedResult`] before any other field is
    /// touched, regardless of which attributes the payload exposes. A
    /// known tag with missing or ill-typed attributes propagates the
    /// deserialization failure as [`ReportError::Payload`].
    pub fn from_value(value: Value) -> Result<Self, ReportError> {
        let tag = value.get("kind").and_then(Value::as_str).unwrap_or_default();
        if classify(tag).is_none() {
            return Err(ReportError::UnsupportedResult {
                tag: tag.to_string(),
            });
        }
        Ok(serde_json::from_value(value)?)
    }
}
