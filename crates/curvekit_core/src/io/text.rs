//! Whitespace-separated numeric text.
//!
//! Tokens are split on any whitespace; a line whose first non-blank character
//! is `#` is a comment. Tokens that do not parse as written are retried after
//! exponent repair:
//!
//! - `0.501-129` → `0.501E-129` (Fortran output that dropped the marker)
//! - `1.0D+03` → `1.0E+03`

use crate::types::FormatError;
use crate::vector::Vector;
use std::borrow::Cow;

/// Rewrites Fortran-style exponents into a form `f64::from_str` accepts.
///
/// A `D`/`d` or a bare sign directly after a digit or `.` is taken as the
/// exponent marker. Tokens without such a marker are returned unchanged.
///
/// # Examples
/// ```
/// use curvekit_core::io::repair_exponent;
///
/// assert_eq!(repair_exponent("0.501-129"), "0.501E-129");
/// assert_eq!(repair_exponent("1.0D+03"), "1.0E+03");
/// assert_eq!(repair_exponent("-2.5"), "-2.5");
/// ```
pub fn repair_exponent(token: &str) -> Cow<'_, str> {
    let mut repaired = String::with_capacity(token.len() + 1);
    let mut prev: Option<char> = None;
    for ch in token.chars() {
        let after_mantissa = matches!(prev, Some(p) if p.is_ascii_digit() || p == '.');
        match ch {
            'd' | 'D' if after_mantissa => repaired.push('E'),
            '+' | '-' if after_mantissa => {
                repaired.push('E');
                repaired.push(ch);
            }
            _ => repaired.push(ch),
        }
        prev = Some(ch);
    }
    if repaired == token {
        Cow::Borrowed(token)
    } else {
        Cow::Owned(repaired)
    }
}

/// Parses one token, repairing its exponent if needed.
///
/// # Errors
///
/// [`FormatError::UnreadableValue`] carrying the original token and `position`.
pub fn parse_value(token: &str, position: usize) -> Result<f64, FormatError> {
    if let Ok(value) = token.parse::<f64>() {
        return Ok(value);
    }
    repair_exponent(token)
        .parse::<f64>()
        .map_err(|_| FormatError::UnreadableValue {
            token: token.to_string(),
            position,
        })
}

/// Non-comment lines, with their one-based line numbers.
fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim_start().starts_with('#'))
}

/// Parses every token of `text` into one sequence.
///
/// Token positions in errors count data tokens from zero across the whole
/// input.
///
/// # Examples
/// ```
/// use curvekit_core::io::parse_values;
///
/// let values = parse_values("# header\n1 2.5\n  3.0D-01 1.5-2\n").unwrap();
/// assert_eq!(values, vec![1.0, 2.5, 0.3, 0.015]);
/// ```
pub fn parse_values(text: &str) -> Result<Vec<f64>, FormatError> {
    data_lines(text)
        .flat_map(|(_, line)| line.split_whitespace())
        .enumerate()
        .map(|(position, token)| parse_value(token, position))
        .collect()
}

/// Parses `text` as rows of exactly `columns` values, one row per line.
///
/// Blank and comment lines are skipped. Returns one [`Vector`] per column.
///
/// # Errors
///
/// * [`FormatError::CorruptData`] - `columns` is zero or a row has the wrong
///   number of values
/// * [`FormatError::UnreadableValue`] - a token failed to parse
///
/// # Examples
/// ```
/// use curvekit_core::io::parse_columns;
///
/// let cols = parse_columns("0 1\n1 3\n2 5\n", 2).unwrap();
/// assert_eq!(cols[0].as_slice(), &[0.0, 1.0, 2.0]);
/// assert_eq!(cols[1].as_slice(), &[1.0, 3.0, 5.0]);
/// ```
pub fn parse_columns(text: &str, columns: usize) -> Result<Vec<Vector>, FormatError> {
    if columns == 0 {
        return Err(FormatError::CorruptData(
            "column count must be positive".to_string(),
        ));
    }

    let mut data: Vec<Vec<f64>> = vec![Vec::new(); columns];
    let mut position = 0;
    for (line_number, line) in data_lines(text) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() != columns {
            return Err(FormatError::CorruptData(format!(
                "line {} has {} values, expected {}",
                line_number,
                tokens.len(),
                columns
            )));
        }
        for (column, token) in data.iter_mut().zip(tokens) {
            column.push(parse_value(token, position)?);
            position += 1;
        }
    }

    Ok(data.into_iter().map(Vector::from).collect())
}
