//! Common types for numstat.
//!
//! Defines the summary record, its fixed row order, and the parse error.

use serde::Serialize;
use thiserror::Error;

/// Descriptive statistics computed over a parsed number list.
///
/// Built fresh on every computation and never mutated afterwards; callers
/// hand it to a renderer or exporter as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    /// Arithmetic sum of all elements.
    pub sum: f64,
    /// Number of elements.
    pub count: usize,
    /// Sum divided by count.
    pub average: f64,
    /// Middle value of the sorted list (mean of the two middle values
    /// when the count is even).
    pub median: f64,
    /// Nth root of the product of the elements; `None` when any element
    /// is not strictly positive.
    pub geometric_mean: Option<f64>,
    /// Maximum element.
    pub largest: f64,
    /// Minimum element.
    pub smallest: f64,
    /// Largest minus smallest.
    pub range: f64,
}

/// One (label, formatted value) row of the rendered table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// Statistic name as displayed.
    pub label: &'static str,
    /// Value formatted for display.
    pub value: String,
}

impl StatsSummary {
    /// Returns the eight display rows in their fixed order.
    ///
    /// Average and geometric mean are rounded to two decimals; a missing
    /// geometric mean renders as `n/a`.
    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        let geometric_mean = self
            .geometric_mean
            .map_or_else(|| "n/a".to_string(), |g| round2(g).to_string());

        vec![
            Row {
                label: "Sum",
                value: self.sum.to_string(),
            },
            Row {
                label: "Count",
                value: self.count.to_string(),
            },
            Row {
                label: "Average",
                value: round2(self.average).to_string(),
            },
            Row {
                label: "Median",
                value: self.median.to_string(),
            },
            Row {
                label: "Geometric Mean",
                value: geometric_mean,
            },
            Row {
                label: "Largest",
                value: self.largest.to_string(),
            },
            Row {
                label: "Smallest",
                value: self.smallest.to_string(),
            },
            Row {
                label: "Range",
                value: self.range.to_string(),
            },
        ]
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Error returned when the input text cannot be fully tokenized into
/// finite numbers.
///
/// Validation is all-or-nothing, so a single bad token (or empty input)
/// rejects the whole call; no partial summary is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("please enter only numbers separated by '{delimiter}'")]
pub struct ParseError {
    /// Delimiter the input was split on.
    pub delimiter: char,
}
