//! Registry of spaceship patterns, grouped into size tiers.
//!
//! Each tier is built once, on first access, from the raw cell diagrams in
//! [`spaceships`] and is never mutated afterwards, so references into the
//! tiers are `'static` and safe to share freely. [`ALL_PATTERNS`] holds a
//! reference to every registered pattern, ordered small, medium, large;
//! the selection pools in [`crate::select`] are prefixes of it.

use lazy_static::lazy_static;
use log::debug;

use crate::grid::Grid;
use crate::io::plaintext;

pub mod spaceships;

/// Metadata for a single spaceship pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternInfo {
    /// Cell bitmap.
    pub grid: Grid,
    /// Display name.
    pub name: &'static str,
    /// Propagation speed label, e.g. `"c/4"` or `"2c/5"`.
    pub speed: &'static str,
    /// Whether the ship travels diagonally rather than orthogonally.
    pub diagonal: bool,
    /// Number of columns in `grid`.
    pub width: usize,
    /// Number of rows in `grid`.
    pub height: usize,
}

impl PatternInfo {
    /// Creates pattern metadata, deriving the dimensions from the grid.
    ///
    /// The grid is trusted as-is; the plaintext parser already guarantees
    /// rectangularity for everything registered here.
    pub fn new(grid: Grid, name: &'static str, speed: &'static str, diagonal: bool) -> Self {
        let width = grid.width();
        let height = grid.height();
        Self {
            grid,
            name,
            speed,
            diagonal,
            width,
            height,
        }
    }
}

fn parse_pattern(
    raw: &'static str,
    name: &'static str,
    speed: &'static str,
    diagonal: bool,
) -> PatternInfo {
    PatternInfo::new(plaintext::parse_grid(raw), name, speed, diagonal)
}

lazy_static! {
    /// Ships small enough for any viewport.
    pub static ref SMALL_PATTERNS: Vec<PatternInfo> = vec![
        parse_pattern(spaceships::GLIDER, "Glider", "c/4", true),
        parse_pattern(spaceships::LWSS, "LWSS", "c/2", false),
        parse_pattern(spaceships::MWSS, "MWSS", "c/2", false),
        parse_pattern(spaceships::B29, "B29", "c/4", true),
    ];

    /// Mid-sized ships; excluded on mobile-sized viewports.
    pub static ref MEDIUM_PATTERNS: Vec<PatternInfo> = vec![
        parse_pattern(spaceships::P70, "P70", "2c/5", false),
        parse_pattern(spaceships::P70C2, "P70C2", "c/2", false),
        parse_pattern(spaceships::P72, "P72", "c/3", false),
        parse_pattern(spaceships::P60, "P60", "c/3", false),
    ];

    /// Large ships; only eligible on large viewports.
    pub static ref LARGE_PATTERNS: Vec<PatternInfo> = vec![
        parse_pattern(spaceships::P58, "P58", "c/5", true),
        parse_pattern(spaceships::P86C3, "P86C3", "c/3", false),
        parse_pattern(spaceships::P77, "P77", "c/6", true),
        parse_pattern(spaceships::P86, "P86", "c/5", true),
    ];

    /// References to every registered pattern: the three tiers concatenated
    /// in small, medium, large order.
    pub static ref ALL_PATTERNS: Vec<&'static PatternInfo> = {
        let small: &'static [PatternInfo] = &SMALL_PATTERNS;
        let medium: &'static [PatternInfo] = &MEDIUM_PATTERNS;
        let large: &'static [PatternInfo] = &LARGE_PATTERNS;
        let all: Vec<&'static PatternInfo> =
            small.iter().chain(medium).chain(large).collect();
        debug!("spaceship catalog initialized ({} patterns)", all.len());
        all
    };
}
