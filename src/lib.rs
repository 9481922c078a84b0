//! Conway's Game of Life spaceship catalog and viewport-aware selection.
//!
//! This crate bundles a set of known spaceships (patterns that translate
//! across the grid as they evolve), parsed from the Golly ["plaintext"
//! format](https://conwaylife.com/wiki/Plaintext) into rectangular bitmaps
//! and grouped into size tiers. [`select::select_random()`] picks a ship
//! that fits a viewport measured in character cells; a renderer can then
//! read the returned [`catalog::PatternInfo`] to drive an animation.
//!
//! All catalog data is built once on first use and never mutated, so it is
//! safe to share across threads without synchronization.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

pub mod catalog;
pub mod grid;
pub mod io;
pub mod select;

pub mod prelude {
    //! Re-exports of everything needed to pick and inspect a pattern.

    pub use crate::catalog::{
        PatternInfo, ALL_PATTERNS, LARGE_PATTERNS, MEDIUM_PATTERNS, SMALL_PATTERNS,
    };
    pub use crate::grid::Grid;
    pub use crate::io::plaintext::Plaintext;
    pub use crate::select::{select_random, select_with, SizeClass};
}
