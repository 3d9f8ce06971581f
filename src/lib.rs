//! numstat: descriptive statistics for delimiter-separated number lists.
//!
//! Parses user-supplied text into a list of numbers and computes a fixed
//! set of descriptive statistics (sum, count, average, median, geometric
//! mean, largest, smallest, range), rendered as table rows or exported
//! as a two-column CSV.

pub mod export;
pub mod parser;
pub mod report;
pub mod stats;
pub mod types;
