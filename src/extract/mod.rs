//! Extraction: normalize native result payloads into tables.
//!
//! This module handles the second stage of the pipeline - adapting each
//! result variant's native summary into one common tabular shape. It
//! provides:
//!
//! - **Coefficients**: column aliasing, statistic-column selection,
//!   numeric coercion and rounding ([`normalize_summary_table`],
//!   [`extract_coefficients`])
//! - **Fixed effects**: membership-restricted level counts
//!   ([`extract_fixed_effects`])
//! - **Residuals**: five-number distribution summary
//!   ([`extract_residual_summary`])
//!
//! Everything here is pure data-to-data; rendering to text happens in the
//! render stage. All outputs serialize to JSON for programmatic reuse.

pub mod coefficients;
pub mod effects;
pub mod residuals;

pub use coefficients::{
    extract_coefficients, normalize_summary_table, round_to, CoefficientRow, CoefficientTables,
};
pub use effects::{extract_fixed_effects, EffectCount};
pub use residuals::{extract_residual_summary, ResidualSummary};
