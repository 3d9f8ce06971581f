//! Input tokenization.
//!
//! Splits user-supplied text on a delimiter, trims each token, and parses
//! every token as a finite floating-point number. The gate is
//! all-or-nothing: one bad token rejects the whole input.

use crate::types::ParseError;

/// Delimiter used when the caller does not choose one.
pub const DEFAULT_DELIMITER: char = ',';

/// Parses `input` into an ordered number list.
///
/// Empty (or all-whitespace) input is an error; there is no degenerate
/// zero-element list.
pub fn parse_number_list(input: &str, delimiter: char) -> Result<Vec<f64>, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError { delimiter });
    }

    input
        .split(delimiter)
        .map(|token| {
            token
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or(ParseError { delimiter })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_comma_separated_numbers() {
        let numbers = parse_number_list("1,2,3,4", ',').unwrap();
        assert_eq!(numbers, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let numbers = parse_number_list("  1 , 2.5 ,\t-3 ", ',').unwrap();
        assert_eq!(numbers, vec![1.0, 2.5, -3.0]);
    }

    #[test]
    fn supports_alternate_delimiters() {
        let numbers = parse_number_list("1; 2; 3", ';').unwrap();
        assert_eq!(numbers, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn rejects_non_numeric_token() {
        assert!(parse_number_list("1,2,a", ',').is_err());
    }

    #[test]
    fn rejects_empty_token_between_delimiters() {
        assert!(parse_number_list("1,,2", ',').is_err());
    }

    #[test]
    fn rejects_empty_input() {
        assert!(parse_number_list("", ',').is_err());
        assert!(parse_number_list("   ", ',').is_err());
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(parse_number_list("1,inf", ',').is_err());
        assert!(parse_number_list("NaN", ',').is_err());
    }

    #[test]
    fn single_token_needs_no_delimiter() {
        let numbers = parse_number_list("5", ',').unwrap();
        assert_eq!(numbers, vec![5.0]);
    }
}
