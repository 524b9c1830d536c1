//! Seed input: turning external text into live coordinates.
//!
//! This is the boundary layer. Malformed input is rejected here with a
//! [`SeedError`]; the domain never sees it. Duplicate coordinates are
//! dropped, keeping the first occurrence.

mod soup;

pub use soup::{random_soup, random_soup_seeded};

use std::num::ParseIntError;

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::domain::Coordinate;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("line {line}: expected `x,y`, found `{token}`")]
    MalformedPair { line: usize, token: String },

    #[error("line {line}: `{token}` is not a valid coordinate")]
    InvalidNumber {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}, column {column}: unexpected character {ch:?}")]
    UnexpectedChar { line: usize, column: usize, ch: char },
}

/// Parse whitespace-separated `x,y` pairs. Lines whose first non-blank
/// character is `#` are comments.
///
/// ```
/// use sparse_life::input::parse_pairs;
/// use sparse_life::Coordinate;
///
/// let cells = parse_pairs("# blinker\n-1,0 0,0\n1,0\n").unwrap();
/// assert_eq!(cells.len(), 3);
/// assert_eq!(cells[0], Coordinate::new(-1, 0));
/// ```
pub fn parse_pairs(text: &str) -> Result<Vec<Coordinate>, SeedError> {
    let mut cells = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw.trim();
        if content.starts_with('#') {
            continue;
        }
        for token in content.split_whitespace() {
            cells.push(parse_pair(line, token)?);
        }
    }
    Ok(dedup(cells))
}

fn parse_pair(line: usize, token: &str) -> Result<Coordinate, SeedError> {
    let malformed = || SeedError::MalformedPair {
        line,
        token: token.to_owned(),
    };
    let (x, y) = token.split_once(',').ok_or_else(malformed)?;
    if x.is_empty() || y.is_empty() || y.contains(',') {
        return Err(malformed());
    }
    Ok(Coordinate::new(parse_axis(line, x)?, parse_axis(line, y)?))
}

fn parse_axis(line: usize, text: &str) -> Result<i64, SeedError> {
    text.parse().map_err(|source| SeedError::InvalidNumber {
        line,
        token: text.to_owned(),
        source,
    })
}

/// Parse a plain-text grid. `O`, `#` and `*` are live; `.` and space are
/// dead. Lines starting with `!` are comments. Column is x, row is y.
pub fn parse_plaintext(text: &str) -> Result<Vec<Coordinate>, SeedError> {
    let mut cells = Vec::new();
    let mut y = 0;
    for (index, raw) in text.lines().enumerate() {
        if raw.starts_with('!') {
            continue;
        }
        for (x, ch) in raw.trim_end_matches('\r').chars().enumerate() {
            match ch {
                'O' | '#' | '*' => cells.push(Coordinate::new(x as i64, y)),
                '.' | ' ' => {}
                _ => {
                    return Err(SeedError::UnexpectedChar {
                        line: index + 1,
                        column: x + 1,
                        ch,
                    });
                }
            }
        }
        y += 1;
    }
    Ok(dedup(cells))
}

fn dedup(cells: Vec<Coordinate>) -> Vec<Coordinate> {
    let mut seen = FxHashSet::default();
    cells.into_iter().filter(|c| seen.insert(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i64, y: i64) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn test_parse_pairs() {
        let cells = parse_pairs("0,0 1,0\n  # comment 9,9\n\n-3,-4\n").unwrap();
        assert_eq!(cells, vec![c(0, 0), c(1, 0), c(-3, -4)]);
    }

    #[test]
    fn test_parse_pairs_empty() {
        assert!(parse_pairs("").unwrap().is_empty());
        assert!(parse_pairs("   \n# only comments\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_pairs_dedups() {
        let cells = parse_pairs("2,2 1,1 2,2").unwrap();
        assert_eq!(cells, vec![c(2, 2), c(1, 1)]);
    }

    #[test]
    fn test_parse_pairs_malformed() {
        assert_eq!(
            parse_pairs("0,0\n5").unwrap_err(),
            SeedError::MalformedPair { line: 2, token: "5".into() }
        );
        assert!(matches!(
            parse_pairs("1,2,3"),
            Err(SeedError::MalformedPair { line: 1, .. })
        ));
        assert!(matches!(
            parse_pairs(",4"),
            Err(SeedError::MalformedPair { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_pairs_out_of_range() {
        let err = parse_pairs("0,99999999999999999999").unwrap_err();
        match err {
            SeedError::InvalidNumber { line, token, .. } => {
                assert_eq!(line, 1);
                assert_eq!(token, "99999999999999999999");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_pairs_not_a_number() {
        assert!(matches!(
            parse_pairs("a,1"),
            Err(SeedError::InvalidNumber { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_plaintext() {
        let text = "!Name: Glider\n.O.\n..O\nOOO\n";
        let cells = parse_plaintext(text).unwrap();
        assert_eq!(cells, vec![c(1, 0), c(2, 1), c(0, 2), c(1, 2), c(2, 2)]);
    }

    #[test]
    fn test_parse_plaintext_rejects_unknown() {
        assert_eq!(
            parse_plaintext("..\n.x").unwrap_err(),
            SeedError::UnexpectedChar { line: 2, column: 2, ch: 'x' }
        );
    }

    #[test]
    fn test_error_messages() {
        let err = SeedError::MalformedPair { line: 3, token: "7".into() };
        assert_eq!(err.to_string(), "line 3: expected `x,y`, found `7`");
    }
}
