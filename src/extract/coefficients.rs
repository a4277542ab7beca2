//! Coefficient-table normalization.
//!
//! Engines label their summary columns inconsistently: statsmodels emits
//! `coef` / `std err` and a `t` or `z` statistic depending on the
//! reference distribution, linearmodels emits `Parameter` / `Std. Err.` /
//! `T-stat` / `P-value`. This module adapts all of them into one
//! [`CoefficientRow`] shape: Estimate, Std. Error, Statistic, p-Value.

use serde::{Deserialize, Serialize};

use crate::model::{RegressionResult, SummaryTable};

/// Header labels accepted for the estimate column.
const ESTIMATE_COLUMNS: [&str; 2] = ["coef", "Parameter"];
/// Header labels accepted for the standard-error column.
const STD_ERROR_COLUMNS: [&str; 2] = ["std err", "Std. Err."];
/// Statistic/p-value column pairs, in preference order: `t` wins over
/// `z`, and the p-value column is chosen by the same suffix.
const STATISTIC_COLUMNS: [(&str, &str); 3] =
    [("t", "P>|t|"), ("z", "P>|z|"), ("T-stat", "P-value")];

/// One normalized row of a coefficient table.
///
/// A `None` value is a cell that failed numeric coercion in the native
/// table; it renders as `NaN` and is never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientRow {
    /// Coefficient name
    pub name: String,
    /// Point estimate
    pub estimate: Option<f64>,
    /// Standard error of the estimate
    pub std_error: Option<f64>,
    /// Test statistic (t or z, whichever the estimator used)
    pub statistic: Option<f64>,
    /// p-value for the test statistic
    pub p_value: Option<f64>,
}

impl CoefficientRow {
    /// The row's numeric cells in rendering order.
    pub fn values(&self) -> [Option<f64>; 4] {
        [self.estimate, self.std_error, self.statistic, self.p_value]
    }
}

/// Normalized coefficient tables of one result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientTables {
    /// Mean-equation rows (the only block for non-volatility models)
    pub mean: Vec<CoefficientRow>,
    /// Variance-equation rows, volatility models only
    pub variance: Option<Vec<CoefficientRow>>,
}

/// Round to `digits` decimal places, ties away from zero.
///
/// This follows `f64::round` rather than the banker's rounding some
/// engines apply upstream; the difference only shows in the last digit of
/// exact ties.
pub fn round_to(value: f64, digits: usize) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// Coerce a native table cell to a number.
///
/// Unparseable or non-finite cells become `None` (missing), matching the
/// coerce-don't-fail policy of the native summaries.
fn coerce(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Locate the first of `candidates` present in the table.
fn find_column(table: &SummaryTable, candidates: &[&str]) -> Option<usize> {
    candidates.iter().find_map(|name| table.column(name))
}

/// Normalize a native summary table into coefficient rows.
///
/// Column selection follows the preference order of
/// [`STATISTIC_COLUMNS`]; every parsed value is rounded to `digits`.
/// Rows keep the table's order. The first column is always the name.
pub fn normalize_summary_table(table: &SummaryTable, digits: usize) -> Vec<CoefficientRow> {
    let estimate_col = find_column(table, &ESTIMATE_COLUMNS);
    let std_error_col = find_column(table, &STD_ERROR_COLUMNS);
    let (statistic_col, p_value_col) = STATISTIC_COLUMNS
        .iter()
        .find_map(|(stat, pval)| {
            table
                .column(stat)
                .map(|stat_idx| (Some(stat_idx), table.column(pval)))
        })
        .unwrap_or((None, None));

    let cell = |row: &[String], col: Option<usize>| -> Option<f64> {
        col.and_then(|idx| row.get(idx))
            .and_then(|value| coerce(value))
            .map(|value| round_to(value, digits))
    };

    table
        .rows
        .iter()
        .map(|row| CoefficientRow {
            name: row.first().cloned().unwrap_or_default(),
            estimate: cell(row, estimate_col),
            std_error: cell(row, std_error_col),
            statistic: cell(row, statistic_col),
            p_value: cell(row, p_value_col),
        })
        .collect()
}

/// Extract the normalized coefficient tables of a classified result.
///
/// Volatility models contribute a second block for the variance
/// equation; everything else has only the mean block.
pub fn extract_coefficients(result: &RegressionResult, digits: usize) -> CoefficientTables {
    match result {
        RegressionResult::Ordinary(r) => CoefficientTables {
            mean: normalize_summary_table(&r.summary, digits),
            variance: None,
        },
        RegressionResult::Panel(r) => CoefficientTables {
            mean: normalize_summary_table(&r.summary, digits),
            variance: None,
        },
        RegressionResult::Volatility(r) => CoefficientTables {
            mean: normalize_summary_table(&r.mean_summary, digits),
            variance: Some(normalize_summary_table(&r.volatility_summary, digits)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn t_table() -> SummaryTable {
        SummaryTable::new(
            ["", "coef", "std err", "t", "P>|t|"],
            [
                ["Intercept", "1.2344", "0.1111", "11.1111", "0.0004"],
                ["x1", "0.5", "0.042", "11.9", "0.0"],
            ],
        )
    }

    #[test]
    fn test_t_columns_selected() {
        let rows = normalize_summary_table(&t_table(), 3);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Intercept");
        assert_relative_eq!(rows[0].estimate.unwrap(), 1.234);
        assert_relative_eq!(rows[0].std_error.unwrap(), 0.111);
        assert_relative_eq!(rows[0].statistic.unwrap(), 11.111);
        assert_relative_eq!(rows[0].p_value.unwrap(), 0.0);
    }

    #[test]
    fn test_z_fallback_when_t_absent() {
        let table = SummaryTable::new(
            ["", "coef", "std err", "z", "P>|z|"],
            [["x1", "0.5", "0.1", "5.0", "0.02"]],
        );
        let rows = normalize_summary_table(&table, 3);
        assert_relative_eq!(rows[0].statistic.unwrap(), 5.0);
        assert_relative_eq!(rows[0].p_value.unwrap(), 0.02);
    }

    #[test]
    fn test_t_preferred_over_z() {
        // Pathological table carrying both: "t" must win, with its p-value
        let table = SummaryTable::new(
            ["", "coef", "std err", "z", "P>|z|", "t", "P>|t|"],
            [["x1", "0.5", "0.1", "9.0", "0.9", "5.0", "0.02"]],
        );
        let rows = normalize_summary_table(&table, 3);
        assert_relative_eq!(rows[0].statistic.unwrap(), 5.0);
        assert_relative_eq!(rows[0].p_value.unwrap(), 0.02);
    }

    #[test]
    fn test_panel_column_labels() {
        let table = SummaryTable::new(
            ["", "Parameter", "Std. Err.", "T-stat", "P-value"],
            [["beta", "0.4567", "0.0333", "13.7", "0.0"]],
        );
        let rows = normalize_summary_table(&table, 3);
        assert_relative_eq!(rows[0].estimate.unwrap(), 0.457);
        assert_relative_eq!(rows[0].std_error.unwrap(), 0.033);
        assert_relative_eq!(rows[0].statistic.unwrap(), 13.7);
    }

    #[test]
    fn test_unparseable_cell_becomes_missing() {
        let table = SummaryTable::new(
            ["", "coef", "std err", "t", "P>|t|"],
            [["x1", "0.5", "--", "5.0", "nan"]],
        );
        let rows = normalize_summary_table(&table, 3);
        assert!(rows[0].estimate.is_some());
        assert!(rows[0].std_error.is_none());
        assert!(rows[0].p_value.is_none());
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_relative_eq!(round_to(0.0625, 3), 0.063);
        assert_relative_eq!(round_to(-0.0625, 3), -0.063);
        assert_relative_eq!(round_to(1.5, 0), 2.0);
    }

    #[test]
    fn test_missing_statistic_columns() {
        let table = SummaryTable::new(["", "coef"], [["x1", "0.5"]]);
        let rows = normalize_summary_table(&table, 3);
        assert!(rows[0].statistic.is_none());
        assert!(rows[0].p_value.is_none());
        assert!(rows[0].std_error.is_none());
    }
}
