//! Report formatting options.
//!
//! This module contains the configuration surface for report rendering.
//! Options are a typed struct with defaults; callers holding a loose
//! key/value map (e.g. forwarded from a scripting layer) go through
//! [`Options::from_value`], which enforces the option allow-list before
//! any formatting work starts.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ReportError;

/// Default number of decimal places in rendered values.
pub const DEFAULT_DIGITS: usize = 3;
/// Default maximum report line width in characters.
pub const DEFAULT_MAX_WIDTH: usize = 64;
/// Keys accepted by [`Options::from_value`]. Anything else is an error.
pub const ALLOWED_KEYS: [&str; 3] = ["digits", "include_residuals", "max_width"];

/// Formatting options for a rendered report.
///
/// `max_width` bounds both formula wrapping and coefficient-name
/// truncation; it must be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Decimal places for every floating value in the report
    pub digits: usize,
    /// Include the residual distribution section
    pub include_residuals: bool,
    /// Maximum line width in characters
    pub max_width: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            include_residuals: false,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl Options {
    /// Create options with the defaults (3 digits, no residuals, width 64).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set decimal places
    pub fn with_digits(mut self, digits: usize) -> Self {
        self.digits = digits;
        self
    }

    /// Builder: include the residuals section
    pub fn with_residuals(mut self) -> Self {
        self.include_residuals = true;
        self
    }

    /// Builder: set the maximum line width
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    /// Check option values are in range.
    ///
    /// Runs before any section is rendered, so an invalid configuration
    /// never produces partial output.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.max_width == 0 {
            return Err(ReportError::invalid_option(
                "max_width",
                "must be a positive integer",
            ));
        }
        Ok(())
    }

    /// Build options from a loose JSON map, enforcing the allow-list.
    ///
    /// Unspecified keys keep their defaults. A key outside
    /// [`ALLOWED_KEYS`], or a value of the wrong type or range, is an
    /// [`ReportError::InvalidOption`].
    pub fn from_value(value: &Value) -> Result<Self, ReportError> {
        let map = value.as_object().ok_or_else(|| {
            ReportError::invalid_option("options", "expected a JSON object of options")
        })?;

        for key in map.keys() {
            if !ALLOWED_KEYS.contains(&key.as_str()) {
                return Err(ReportError::invalid_option(key, "not a recognized option"));
            }
        }

        let mut options = Options::default();
        if let Some(digits) = map.get("digits") {
            options.digits = digits
                .as_u64()
                .ok_or_else(|| {
                    ReportError::invalid_option("digits", "must be a non-negative integer")
                })? as usize;
        }
        if let Some(include) = map.get("include_residuals") {
            options.include_residuals = include.as_bool().ok_or_else(|| {
                ReportError::invalid_option("include_residuals", "must be a boolean")
            })?;
        }
        if let Some(width) = map.get("max_width") {
            options.max_width = width
                .as_u64()
                .ok_or_else(|| {
                    ReportError::invalid_option("max_width", "must be a positive integer")
                })? as usize;
        }
        options.validate()?;
        Ok(options)
    }
}
