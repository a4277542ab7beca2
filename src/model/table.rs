//! Native summary tables as emitted by estimation engines.
//!
//! Engines hand their coefficient summaries over as pre-formatted text
//! tables: a header row whose labels vary by engine and estimator (`coef`
//! vs `Parameter`, `t` vs `z`), and string cells. The first column holds
//! the coefficient name under a blank header. Cells stay strings here;
//! numeric coercion is the extract stage's job.

use serde::{Deserialize, Serialize};

/// A raw row/column summary table keyed by header labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTable {
    /// Column headers; `headers[0]` is the (usually blank) name column
    pub headers: Vec<String>,
    /// Data rows, each aligned with `headers`
    pub rows: Vec<Vec<String>>,
}

impl SummaryTable {
    /// Create a table from headers and rows.
    pub fn new<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Position of the column with the given header label, if present.
    pub fn column(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Whether a column with the given header label exists.
    pub fn has_column(&self, header: &str) -> bool {
        self.column(header).is_some()
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_lookup() {
        let table = SummaryTable::new(
            ["", "coef", "std err", "t", "P>|t|"],
            [["x1", "0.5", "0.1", "5.0", "0.0"]],
        );
        assert_eq!(table.column("coef"), Some(1));
        assert_eq!(table.column("t"), Some(3));
        assert_eq!(table.column("z"), None);
        assert!(table.has_column("P>|t|"));
        assert_eq!(table.row_count(), 1);
    }
}
