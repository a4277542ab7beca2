//! Rendering: present extracted tables as text.
//!
//! This module handles the final stage of the pipeline - assembling the
//! extracted tables and scalar statistics into formatted text. It
//! provides:
//!
//! - **Report**: the multi-section single-result summary
//!   ([`render_report`])
//! - **Comparison**: the wide side-by-side table over several panel
//!   models ([`render_comparison`])
//!
//! Rendering is a pure presentation layer: all normalization happens in
//! the extract stage, and options are validated before the first section
//! is built.

pub mod comparison;
pub mod report;
mod text;

pub use comparison::render_comparison;
pub use report::render_report;
