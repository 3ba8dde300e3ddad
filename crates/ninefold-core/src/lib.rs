//! Core data structures for the ninefold Sudoku solver.
//!
//! This crate owns the puzzle data model: the contents of the 9×9 grid, the
//! set of fixed (given) cells, and three presence tables (per row, per
//! column, per 3×3 box) that make placement legality an O(1) query. The
//! backtracking search itself lives in the `ninefold-solver` crate and
//! drives the state exclusively through [`PuzzleState::is_legal`],
//! [`PuzzleState::place`], and [`PuzzleState::remove`].
//!
//! # Overview
//!
//! - [`digit`]: type-safe representation of Sudoku digits 1-9
//! - [`digit_set`]: a 9-bit set of digits, one per row/column/box
//! - [`position`]: grid coordinates and the row-major cell-index mapping
//! - [`puzzle`]: [`PuzzleState`] with placement, removal, legality checks,
//!   configuration loading, and text rendering
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Digit, Position, PuzzleState};
//!
//! let mut state = PuzzleState::new();
//! let pos = Position::new(4, 4);
//!
//! assert!(state.is_legal(Digit::D5, pos));
//! state.place(Digit::D5, pos);
//!
//! // 5 is now blocked in the same row, column, and box
//! assert!(!state.is_legal(Digit::D5, Position::new(0, 4)));
//! assert!(!state.is_legal(Digit::D5, Position::new(4, 0)));
//! assert!(!state.is_legal(Digit::D5, Position::new(3, 3)));
//! ```

pub mod digit;
pub mod digit_set;
pub mod position;
pub mod puzzle;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    position::Position,
    puzzle::{ConfigError, PuzzleState},
};
