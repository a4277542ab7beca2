//! Low-level text formatting helpers.
//!
//! Fixed-width alignment, number formatting, formula wrapping and label
//! truncation shared by the report and comparison renderers.

/// Collapse every run of whitespace to a single space.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Wrap a model formula to `max_width` characters.
///
/// The formula is collapsed first. If it still exceeds `max_width` it is
/// split once, at the last `+` within the first `max_width` characters;
/// the remainder continues on the next line prefixed `" + "`. A formula
/// with no `+` in range is emitted unsplit.
pub(crate) fn wrap_formula(formula: &str, max_width: usize) -> String {
    let cleaned = collapse_whitespace(formula);
    if cleaned.chars().count() <= max_width {
        return cleaned;
    }

    let mut split_at = None;
    for (position, (byte_idx, ch)) in cleaned.char_indices().enumerate() {
        if position >= max_width {
            break;
        }
        if ch == '+' {
            split_at = Some(byte_idx);
        }
    }

    match split_at {
        None => cleaned,
        Some(idx) => format!(
            "{}\n + {}",
            cleaned[..idx].trim_end(),
            cleaned[idx + 1..].trim_start()
        ),
    }
}

/// Format a float to exactly `digits` decimal places.
pub(crate) fn format_float(value: f64, digits: usize) -> String {
    format!("{:.prec$}", value, prec = digits)
}

/// Format an optional cell value; missing renders as `NaN`.
pub(crate) fn format_value(value: Option<f64>, digits: usize) -> String {
    match value {
        Some(v) => format_float(v, digits),
        None => "NaN".to_string(),
    }
}

/// Format an integer count with thousands separators.
pub(crate) fn group_thousands(count: u64) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Truncate a row label so the rendered row fits `max_width`.
///
/// `values_width` is the width of the row's space-joined value cells.
/// A label is truncated to `max_width - values_width - 23` characters
/// (saturating) plus a `"..."` suffix whenever label + values + 20 would
/// overflow `max_width`. Applied per row; two labels sharing a truncated
/// prefix collide in the output.
pub(crate) fn truncate_label(label: &str, values_width: usize, max_width: usize) -> String {
    if label.chars().count() + values_width + 20 <= max_width {
        return label.to_string();
    }
    let keep = max_width.saturating_sub(values_width + 23);
    let kept: String = label.chars().take(keep).collect();
    format!("{kept}...")
}

/// Render a one-row stat table: right-aligned header labels over one row
/// of right-aligned values, columns separated by two spaces.
pub(crate) fn stat_row(labels: &[&str], values: &[String]) -> String {
    let widths: Vec<usize> = labels
        .iter()
        .zip(values)
        .map(|(label, value)| label.chars().count().max(value.chars().count()))
        .collect();

    let header = labels
        .iter()
        .zip(widths.iter().copied())
        .map(|(label, width)| format!("{label:>width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    let row = values
        .iter()
        .zip(widths.iter().copied())
        .map(|(value, width)| format!("{value:>width$}"))
        .collect::<Vec<_>>()
        .join("  ");

    format!("{header}\n{row}")
}
