//! Utility functions and errors for parsing puzzle input.

use std::str::FromStr;

use thiserror::Error;

use crate::{BoxedError, PuzzleResult};

/// A `FromStr` failure carrying the text that was being parsed.
#[derive(Error, Debug)]
#[error("failed to parse field: {field:?}")]
pub struct FieldParseError<E>
where
    E: std::error::Error,
{
    /// The text that failed to parse.
    field: String,
    source: E,
}

/// Parse a string slice, wrapping any failure with the slice as context.
///
/// # Errors
///
/// Returns a [`FieldParseError`] sourcing [`FromStr::Err`] when the slice
/// does not parse.
pub fn parse_field<F>(field: &str) -> Result<F, FieldParseError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    field.parse().map_err(|source| FieldParseError {
        field: field.to_owned(),
        source,
    })
}

/// A parsing failure located to a line of input.
///
/// The stored index is zero based; display formats it one based to match how
/// editors number lines.
#[derive(Error, Debug)]
#[error("failure parsing line {}", .line_index.saturating_add(1))]
pub struct LineError {
    line_index: usize,
    source: BoxedError,
}

/// Parse every line of input with a closure, locating failures with a
/// [`LineError`].
pub fn parse_lines<T, F>(input: &str, mut parser: F) -> impl Iterator<Item = Result<T, LineError>>
where
    F: FnMut(&str) -> PuzzleResult<T>,
{
    input.lines().enumerate().map(move |(line_index, line)| {
        parser(line).map_err(|source| LineError { line_index, source })
    })
}

/// Split input into blocks separated by blank lines.
///
/// Handles both `\n\n` and `\r\n\r\n` separators and skips fully blank
/// blocks, so trailing newlines do not produce an empty final block.
pub fn blocks(input: &str) -> impl Iterator<Item = &str> {
    input
        .split("\n\n")
        .flat_map(|block| block.split("\r\n\r\n"))
        .map(str::trim_end)
        .filter(|block| !block.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_field_keeps_context() {
        let err = parse_field::<u32>("12a").unwrap_err();
        assert!(err.to_string().contains("12a"));
    }

    #[test]
    fn parse_lines_reports_one_based_position() {
        let results: Vec<_> =
            parse_lines("4\nx\n6", |line| Ok(parse_field::<u32>(line)?)).collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[2].is_ok());
        let err = results[1].as_ref().unwrap_err();
        assert_eq!(err.to_string(), "failure parsing line 2");
    }

    #[test]
    fn blocks_split_on_blank_lines() {
        let collected: Vec<_> = blocks("top: 1\n2\n\nmiddle\n\nbottom\n").collect();
        assert_eq!(collected, vec!["top: 1\n2", "middle", "bottom"]);
    }

    #[test]
    fn blocks_ignore_trailing_blank_lines() {
        let collected: Vec<_> = blocks("only\n\n\n").collect();
        assert_eq!(collected, vec!["only"]);
    }
}
