//! Classification of engine result types.
//!
//! Classification consults only the intrinsic type tag a result payload
//! carries, never its attribute set, so lookalike objects from unsupported
//! engines are rejected even when they expose the expected fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tag carried by statsmodels OLS results.
pub const TAG_ORDINARY: &str = "statsmodels.regression.linear_model.RegressionResultsWrapper";
/// Type tag carried by linearmodels panel results.
pub const TAG_PANEL: &str = "linearmodels.panel.results.PanelEffectsResults";
/// Type tag carried by arch conditional-volatility results.
pub const TAG_VOLATILITY: &str = "arch.univariate.base.ARCHModelResult";

/// The closed set of supported result kinds.
///
/// Set once at classification time; all downstream extraction and
/// rendering switches on this tag rather than re-inspecting the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelKind {
    /// Ordinary least squares regression
    Ordinary,
    /// Panel regression with fixed effects
    Panel,
    /// Conditional-volatility model
    Volatility,
}

impl ModelKind {
    /// Report header label for this kind.
    pub fn label(self) -> &'static str {
        match self {
            ModelKind::Ordinary => "OLS Model",
            ModelKind::Panel => "Panel OLS Model",
            ModelKind::Volatility => "Volatility Model",
        }
    }

    /// The engine type tag this kind classifies from.
    pub fn tag(self) -> &'static str {
        match self {
            ModelKind::Ordinary => TAG_ORDINARY,
            ModelKind::Panel => TAG_PANEL,
            ModelKind::Volatility => TAG_VOLATILITY,
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify an engine type tag against the supported set.
///
/// Returns `None` for anything outside the closed set; never panics.
/// Callers turn `None` into [`crate::ReportError::UnsupportedResult`].
pub fn classify(tag: &str) -> Option<ModelKind> {
    match tag {
        TAG_ORDINARY => Some(ModelKind::Ordinary),
        TAG_PANEL => Some(ModelKind::Panel),
        TAG_VOLATILITY => Some(ModelKind::Volatility),
        _ => None,
    }
}
