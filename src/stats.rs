//! The statistics engine.
//!
//! A pure function from input text to a summary record: parse the number
//! list, then compute each statistic over it. Every call builds a fresh
//! [`StatsSummary`]; nothing is retained between calls.

#![allow(clippy::cast_precision_loss)]

use crate::parser::{parse_number_list, DEFAULT_DELIMITER};
use crate::types::{ParseError, StatsSummary};

/// Computes all statistics for comma-separated `input`.
pub fn compute(input: &str) -> Result<StatsSummary, ParseError> {
    compute_with_delimiter(input, DEFAULT_DELIMITER)
}

/// Computes all statistics for `input` split on `delimiter`.
pub fn compute_with_delimiter(input: &str, delimiter: char) -> Result<StatsSummary, ParseError> {
    let numbers = parse_number_list(input, delimiter)?;
    Ok(summarize(&numbers))
}

/// Summarizes a parsed number list.
///
/// `numbers` must be non-empty; the parse gate guarantees this for input
/// that reaches here through [`compute`].
#[must_use]
pub fn summarize(numbers: &[f64]) -> StatsSummary {
    debug_assert!(!numbers.is_empty());

    let count = numbers.len();
    let sum: f64 = numbers.iter().sum();
    let largest = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let smallest = numbers.iter().copied().fold(f64::INFINITY, f64::min);

    StatsSummary {
        sum,
        count,
        average: sum / count as f64,
        median: median(numbers),
        geometric_mean: geometric_mean(numbers),
        largest,
        smallest,
        range: largest - smallest,
    }
}

/// Middle value of the sorted list, or the mean of the two middle values
/// when the count is even.
#[must_use]
pub fn median(numbers: &[f64]) -> f64 {
    let mut sorted = numbers.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Nth root of the product of `numbers`, computed as exp of the mean log
/// to avoid overflowing the intermediate product.
///
/// Returns `None` when any element is not strictly positive, since the
/// root is undefined there.
#[must_use]
pub fn geometric_mean(numbers: &[f64]) -> Option<f64> {
    if numbers.iter().any(|&x| x <= 0.0) {
        return None;
    }

    let log_sum: f64 = numbers.iter().map(|x| x.ln()).sum();
    Some((log_sum / numbers.len() as f64).exp())
}
