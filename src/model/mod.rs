//! Result model: typed variants and classification.
//!
//! This module handles the first stage of the pipeline - turning a fitted
//! result handed over by an estimation engine into one of a closed set of
//! typed shapes. It provides:
//!
//! - **Classification**: [`classify`] matches an engine type tag against
//!   the supported set (`ModelKind`)
//! - **Result variants**: [`OrdinaryResult`], [`PanelResult`],
//!   [`VolatilityResult`], each carrying only the fields valid for its kind
//! - **Native tables**: [`SummaryTable`], the raw header-labeled summary an
//!   engine emits, normalized later by the extract stage
//!
//! ## Example
//!
//! ```rust,ignore
//! use regreport::model::{classify, ModelKind, TAG_PANEL};
//!
//! assert_eq!(classify(TAG_PANEL), Some(ModelKind::Panel));
//! assert_eq!(classify("sklearn.linear_model.LinearRegression"), None);
//! ```

pub mod kind;
pub mod result;
pub mod table;

pub use kind::{classify, ModelKind, TAG_ORDINARY, TAG_PANEL, TAG_VOLATILITY};
pub use result::{
    EffectKind, OrdinaryResult, PanelResult, RegressionResult, VolatilityResult,
};
pub use table::SummaryTable;
