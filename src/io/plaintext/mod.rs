//! Golly 2D ["plaintext" format](https://conwaylife.com/wiki/Plaintext)
//! (`.cells` files).
//!
//! One row of cells per line: `O` is a live cell and any other character is
//! a dead cell (conventionally `.`). Lines starting with `!` are comments;
//! by convention the first comment line is `!Name:` followed by the name of
//! the pattern. Use [`parse_grid()`] to read just the cells, or parse a
//! [`Plaintext`] to keep the metadata, and `format!("{}", some_plaintext)`
//! to convert back to a string.
//!
//! Decoding never fails: every character denotes either a live or a dead
//! cell, and comment lines may appear anywhere.

use itertools::Itertools;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::grid::Grid;

/// Character marking a live cell.
pub const LIVE_CHAR: char = 'O';
/// Character written for a dead cell.
pub const DEAD_CHAR: char = '.';
/// Character starting a comment line.
pub const COMMENT_CHAR: char = '!';

/// Comment prefix carrying the pattern name.
const NAME_PREFIX: &str = "Name:";

/// Parses plaintext contents into a grid, discarding comments.
///
/// Rows shorter than the widest line are right-padded with dead cells, so
/// the result is always rectangular. Blank lines encode fully dead rows,
/// except at the end of the input where they are insignificant and are
/// trimmed; text with no cell rows at all parses to [`Grid::empty()`].
pub fn parse_grid(s: &str) -> Grid {
    let mut lines = s
        .lines()
        .filter(|line| !line.starts_with(COMMENT_CHAR))
        .collect_vec();

    while lines.last().map_or(false, |line| line.trim().is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return Grid::empty();
    }

    // Width of the widest line, never narrower than one column.
    let max_width = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
        .max(1);

    Grid::from_rows(
        lines
            .iter()
            .map(|line| {
                let mut row = line
                    .chars()
                    .map(|ch| (ch == LIVE_CHAR) as u8)
                    .collect_vec();
                row.resize(max_width, 0_u8);
                row
            })
            .collect(),
    )
}

/// Plaintext file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plaintext {
    /// Pattern name, taken from the first `!Name:` comment line.
    pub name: Option<String>,
    /// Remaining comment lines, without the leading `!`.
    pub comments: String,
    /// Cell contents.
    pub grid: Grid,
}

impl Plaintext {
    /// Sets the pattern name.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn with_name(mut self, name: impl ToString) -> Self {
        self.name = Some(name.to_string());
        self
    }
}

impl From<Grid> for Plaintext {
    fn from(grid: Grid) -> Self {
        Self {
            name: None,
            comments: String::new(),
            grid,
        }
    }
}

impl FromStr for Plaintext {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        let mut name = None;
        let mut comments = String::new();

        for line in s.lines() {
            if let Some(comment) = line.strip_prefix(COMMENT_CHAR) {
                match comment.trim_start().strip_prefix(NAME_PREFIX) {
                    Some(n) if name.is_none() => name = Some(n.trim().to_owned()),
                    _ => {
                        comments.push_str(comment);
                        comments.push('\n');
                    }
                }
            }
        }

        Ok(Self {
            name,
            comments,
            grid: parse_grid(s),
        })
    }
}

impl fmt::Display for Plaintext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            writeln!(f, "{}{} {}", COMMENT_CHAR, NAME_PREFIX, name)?;
        }
        for comment_line in self.comments.trim_end().lines() {
            writeln!(f, "{}{}", COMMENT_CHAR, comment_line)?;
        }
        write!(f, "{}", self.grid)
    }
}
