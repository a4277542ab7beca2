//! Side-by-side comparison of panel models.

use crate::error::ReportError;
use crate::extract::{extract_fixed_effects, normalize_summary_table, CoefficientRow};
use crate::model::{PanelResult, RegressionResult};

use super::text::{format_float, format_value, group_thousands};

/// Render several panel results as one wide comparison table.
///
/// Every input must classify as a panel model; the precondition is
/// checked before any rendering occurs. Each model contributes one
/// column of `"estimate (statistic)"` cells under a `Model N` header;
/// rows are the outer union of coefficient names in first-seen order,
/// with blank cells where a model lacks the coefficient. Trailer rows
/// list included fixed effects, covariance type, observation count and
/// the two panel R-squared variants. An empty slice renders an empty
/// string.
pub fn render_comparison(
    results: &[RegressionResult],
    digits: usize,
) -> Result<String, ReportError> {
    let panels: Vec<&PanelResult> = results
        .iter()
        .enumerate()
        .map(|(index, result)| {
            result.as_panel().ok_or(ReportError::MixedComparison {
                kind: result.kind(),
                index,
            })
        })
        .collect::<Result<_, _>>()?;

    if panels.is_empty() {
        return Ok(String::new());
    }

    let tables: Vec<Vec<CoefficientRow>> = panels
        .iter()
        .map(|panel| normalize_summary_table(&panel.summary, digits))
        .collect();

    // Outer union of coefficient names, first-seen order
    let mut names: Vec<String> = Vec::new();
    for table in &tables {
        for row in table {
            if !names.iter().any(|name| name == &row.name) {
                names.push(row.name.clone());
            }
        }
    }

    let coefficient_rows: Vec<(String, Vec<String>)> = names
        .iter()
        .map(|name| {
            let cells = tables
                .iter()
                .map(|table| coefficient_cell(table, name, digits))
                .collect();
            (name.clone(), cells)
        })
        .collect();

    let trailer_rows: Vec<(String, Vec<String>)> = vec![
        (
            "Fixed effects".to_string(),
            panels.iter().map(|p| effect_labels(p)).collect(),
        ),
        (
            "Covariance type".to_string(),
            panels.iter().map(|p| p.cov_type.clone()).collect(),
        ),
        (
            "Observations".to_string(),
            panels.iter().map(|p| group_thousands(p.nobs)).collect(),
        ),
        (
            "Inclusive R-squared".to_string(),
            panels
                .iter()
                .map(|p| format_float(p.rsquared_inclusive, digits))
                .collect(),
        ),
        (
            "Within R-squared".to_string(),
            panels
                .iter()
                .map(|p| format_float(p.rsquared_within, digits))
                .collect(),
        ),
    ];

    let headers: Vec<String> = (1..=panels.len()).map(|i| format!("Model {i}")).collect();
    let label_width = coefficient_rows
        .iter()
        .chain(&trailer_rows)
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for (_, cells) in coefficient_rows.iter().chain(&trailer_rows) {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let total_width = label_width + widths.iter().map(|w| w + 2).sum::<usize>();

    let render_row = |label: &str, cells: &[String]| -> String {
        let mut line = format!("{label:<label_width$}");
        for (cell, width) in cells.iter().zip(widths.iter().copied()) {
            line.push_str(&format!("  {cell:>width$}"));
        }
        line.trim_end().to_string()
    };

    let mut lines = Vec::with_capacity(coefficient_rows.len() + trailer_rows.len() + 2);
    lines.push(render_row("", &headers));
    for (label, cells) in &coefficient_rows {
        lines.push(render_row(label, cells));
    }
    lines.push("-".repeat(total_width));
    for (label, cells) in &trailer_rows {
        lines.push(render_row(label, cells));
    }

    Ok(lines.join("\n") + "\n")
}

/// One `"estimate (statistic)"` cell; blank when the model lacks the
/// coefficient or its estimate is missing.
fn coefficient_cell(table: &[CoefficientRow], name: &str, digits: usize) -> String {
    table
        .iter()
        .find(|row| row.name == name)
        .and_then(|row| {
            row.estimate.map(|estimate| {
                format!(
                    "{} ({})",
                    format_float(estimate, digits),
                    format_value(row.statistic, digits)
                )
            })
        })
        .unwrap_or_default()
}

/// Comma-joined labels of the effects a panel model absorbed.
fn effect_labels(panel: &PanelResult) -> String {
    extract_fixed_effects(panel)
        .iter()
        .map(|effect| effect.kind.label())
        .collect::<Vec<_>>()
        .join(", ")
}
