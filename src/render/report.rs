//! Single-result report assembly.
//!
//! A report is a sequence of titled sections appended to one buffer:
//! model header, optional residual distribution, coefficient table(s),
//! fixed-effects counts for panel models, and a summary-statistics
//! footer. Options are validated before any section is built, so an
//! invalid configuration never produces partial output.

use crate::error::ReportError;
use crate::extract::{
    extract_coefficients, extract_fixed_effects, extract_residual_summary, CoefficientRow,
    EffectCount, ResidualSummary,
};
use crate::model::RegressionResult;
use crate::options::Options;

use super::text::{
    format_float, format_value, group_thousands, stat_row, truncate_label, wrap_formula,
};

/// Normalized column headers of a rendered coefficient table.
pub(crate) const COEFFICIENT_HEADERS: [&str; 4] =
    ["Estimate", "Std. Error", "Statistic", "p-Value"];

/// Render a classified result as a multi-section text report.
pub fn render_report(
    result: &RegressionResult,
    options: &Options,
) -> Result<String, ReportError> {
    options.validate()?;
    let digits = options.digits;

    let mut out = String::new();
    out.push_str(&format!(
        "{}:\n{}\n\n",
        result.kind().label(),
        wrap_formula(result.formula(), options.max_width)
    ));

    if options.include_residuals {
        let summary = extract_residual_summary(result, digits);
        out.push_str(&format!(
            "Residuals:\n{}\n\n",
            residuals_section(&summary, digits)
        ));
    }

    let tables = extract_coefficients(result, digits);
    out.push_str(&format!(
        "Coefficients:\n{}\n\n",
        coefficients_section(&tables.mean, options)
    ));
    if let Some(variance) = &tables.variance {
        out.push_str(&format!(
            "Volatility coefficients:\n{}\n\n",
            coefficients_section(variance, options)
        ));
    }

    if let RegressionResult::Panel(panel) = result {
        let effects = extract_fixed_effects(panel);
        if !effects.is_empty() {
            out.push_str(&format!(
                "Fixed effects:\n{}\n\n",
                effects_section(&effects)
            ));
        }
    }

    out.push_str(&footer(result, digits));
    Ok(out)
}

/// Render the residual five-number summary as header plus value row.
pub(crate) fn residuals_section(summary: &ResidualSummary, digits: usize) -> String {
    let entries = summary.entries();
    let labels: Vec<&str> = entries.iter().map(|(label, _)| *label).collect();
    let values: Vec<String> = entries
        .iter()
        .map(|(_, value)| format_float(*value, digits))
        .collect();
    stat_row(&labels, &values)
}

/// Render the fixed-effects counts as header plus value row.
pub(crate) fn effects_section(effects: &[EffectCount]) -> String {
    let labels: Vec<&str> = effects.iter().map(|e| e.kind.label()).collect();
    let values: Vec<String> = effects.iter().map(|e| group_thousands(e.count)).collect();
    stat_row(&labels, &values)
}

/// Render a normalized coefficient table.
///
/// Row labels sit left-aligned in the first column, truncated per row
/// against `max_width`; numeric columns are right-aligned under the
/// normalized headers, every value at exactly `digits` decimals.
pub(crate) fn coefficients_section(rows: &[CoefficientRow], options: &Options) -> String {
    let formatted: Vec<(String, Vec<String>)> = rows
        .iter()
        .map(|row| {
            let values: Vec<String> = row
                .values()
                .iter()
                .map(|v| format_value(*v, options.digits))
                .collect();
            let values_width = values.iter().map(|v| v.chars().count()).sum::<usize>()
                + values.len().saturating_sub(1);
            let name = truncate_label(&row.name, values_width, options.max_width);
            (name, values)
        })
        .collect();

    let name_width = formatted
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);
    let mut widths: Vec<usize> = COEFFICIENT_HEADERS.iter().map(|h| h.len()).collect();
    for (_, values) in &formatted {
        for (width, value) in widths.iter_mut().zip(values) {
            *width = (*width).max(value.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(formatted.len() + 1);
    let header = COEFFICIENT_HEADERS
        .iter()
        .zip(widths.iter().copied())
        .map(|(label, width)| format!("{label:>width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(format!("{:name_width$}  {header}", ""));
    for (name, values) in &formatted {
        let cells = values
            .iter()
            .zip(widths.iter().copied())
            .map(|(value, width)| format!("{value:>width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(format!("{name:<name_width$}  {cells}"));
    }
    lines.join("\n")
}

/// Kind-dependent summary-statistics footer.
fn footer(result: &RegressionResult, digits: usize) -> String {
    let mut lines = vec![
        "Summary statistics:".to_string(),
        format!(
            "- Number of observations: {}",
            group_thousands(result.nobs())
        ),
    ];
    match result {
        RegressionResult::Ordinary(r) => {
            lines.push(format!(
                "- Multiple R-squared: {}, Adjusted R-squared: {}",
                format_float(r.r_squared, digits),
                format_float(r.adj_r_squared, digits)
            ));
            lines.push(format!(
                "- F-statistic: {} on {} and {} DF, p-value: {}",
                format_float(r.f_statistic, digits),
                r.df_model,
                r.df_resid,
                format_float(r.f_pvalue, digits)
            ));
        }
        RegressionResult::Panel(r) => {
            lines.push(format!(
                "- Inclusive R-squared: {}, Within R-squared: {}",
                format_float(r.rsquared_inclusive, digits),
                format_float(r.rsquared_within, digits)
            ));
            lines.push(format!(
                "- F-statistic: {}, p-value: {}",
                format_float(r.f_statistic, digits),
                format_float(r.f_pvalue, digits)
            ));
            lines.push(format!("- Covariance type: {}", r.cov_type));
        }
        RegressionResult::Volatility(r) => {
            lines.push(format!("- Distribution: {}", r.distribution));
            lines.push(format!(
                "- AIC: {}, BIC: {}",
                format_float(r.aic, digits),
                format_float(r.bic, digits)
            ));
        }
    }
    lines.join("\n") + "\n"
}
