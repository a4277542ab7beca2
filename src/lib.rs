//! # regreport
//!
//! Render fitted regression results as R-style text summaries.
//!
//! ## Overview
//!
//! Estimation engines produce result objects with inconsistent shapes:
//! statsmodels-style OLS fits, linearmodels-style panel fits with fixed
//! effects, arch-style conditional-volatility fits. This library adapts
//! the three supported shapes into one common tabular representation and
//! renders them as a compact text report: model formula, coefficient
//! table, goodness-of-fit statistics, optional residual distribution.
//!
//! The pipeline is:
//! 1. Model (classification into a closed set of typed variants)
//! 2. Extraction (column aliasing, numeric coercion, rounding)
//! 3. Rendering (formatted strings, width-aware wrapping and truncation)
//!
//! There is no estimation here - results come from the caller, already
//! fitted. Everything is a pure function of the supplied data; no I/O,
//! no state between calls.
//!
//! ## Example
//!
//! ```rust
//! use regreport::{render_report, Options, OrdinaryResult, RegressionResult, SummaryTable};
//!
//! let result = RegressionResult::Ordinary(OrdinaryResult {
//!     formula: "y ~ x1".to_string(),
//!     nobs: 100,
//!     residuals: vec![-0.4, -0.1, 0.0, 0.2, 0.3],
//!     summary: SummaryTable::new(
//!         ["", "coef", "std err", "t", "P>|t|"],
//!         [
//!             ["Intercept", "0.1203", "0.0451", "2.667", "0.009"],
//!             ["x1", "0.8411", "0.0322", "26.121", "0.000"],
//!         ],
//!     ),
//!     r_squared: 0.874,
//!     adj_r_squared: 0.873,
//!     f_statistic: 682.3,
//!     df_model: 1,
//!     df_resid: 98,
//!     f_pvalue: 0.0,
//! });
//!
//! let report = render_report(&result, &Options::new()).unwrap();
//! assert!(report.starts_with("OLS Model:\ny ~ x1\n"));
//! assert!(report.contains("Coefficients:"));
//! assert!(report.contains("- Number of observations: 100"));
//! ```

pub mod error;
pub mod extract;
pub mod model;
pub mod options;
pub mod render;

pub use error::ReportError;
pub use extract::{
    extract_coefficients, extract_fixed_effects, extract_residual_summary,
    normalize_summary_table, CoefficientRow, CoefficientTables, EffectCount, ResidualSummary,
};
pub use model::{
    classify, EffectKind, ModelKind, OrdinaryResult, PanelResult, RegressionResult, SummaryTable,
    VolatilityResult,
};
pub use options::Options;
pub use render::{render_comparison, render_report};

/// Result type for regreport operations
pub type Result<T> = std::result::Result<T, ReportError>;
