//! Recursive backtracking search for the ninefold Sudoku solver.
//!
//! [`BacktrackingSolver`] performs an exhaustive depth-first search over
//! the 81 cells of a [`PuzzleState`] in row-major order, trying candidate
//! digits in ascending order and pruning with the state's O(1) legality
//! check. Backtracking is an explicit undo of the trial placement; the
//! state is never copied.
//!
//! There are no heuristics: no forward checking, no minimum-remaining-values
//! ordering, no propagation beyond the three presence tables. Worst case is
//! exponential, which is acceptable at this fixed 81-cell size.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::PuzzleState;
//! use ninefold_solver::BacktrackingSolver;
//!
//! let mut state = PuzzleState::new();
//! let solver = BacktrackingSolver::new();
//!
//! assert!(solver.solve(&mut state));
//! ```

use ninefold_core::{Digit, Position, PuzzleState};

/// A depth-first backtracking solver over a [`PuzzleState`].
///
/// Cells are visited by linear index 0-80 (row-major) and candidates are
/// tried in ascending digit order, so for under-constrained puzzles the
/// solver deterministically finds the first solution in that scan order.
///
/// # Examples
///
/// ```
/// use ninefold_core::PuzzleState;
/// use ninefold_solver::BacktrackingSolver;
///
/// let text = "
///     5 3 0 0 7 0 0 0 0
///     6 0 0 1 9 5 0 0 0
///     0 9 8 0 0 0 0 6 0
///     8 0 0 0 6 0 0 0 3
///     4 0 0 8 0 3 0 0 1
///     7 0 0 0 2 0 0 0 6
///     0 6 0 0 0 0 2 8 0
///     0 0 0 4 1 9 0 0 5
///     0 0 0 0 8 0 0 7 9
/// ";
/// let mut state: PuzzleState = text.parse()?;
///
/// let solver = BacktrackingSolver::new();
/// assert!(solver.solve(&mut state));
/// # Ok::<(), ninefold_core::ConfigError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        BacktrackingSolver
    }

    /// Searches for a complete legal assignment of all 81 cells.
    ///
    /// Returns `true` if a solution was found, in which case `state` holds
    /// it. Returns `false` if no legal completion exists; this is a normal
    /// outcome, not an error. On failure every trial placement has been
    /// undone on the way back up, so `state` holds the original givens.
    ///
    /// Fixed cells are never modified in either case.
    pub fn solve(&self, state: &mut PuzzleState) -> bool {
        let found = self.solve_from(state, 0);
        log::debug!(
            "search {} with {} clues",
            if found { "succeeded" } else { "was exhausted" },
            state.clue_count()
        );
        found
    }

    /// Finds a value for the cell with linear index `n`, recursing on the
    /// rest of the grid.
    fn solve_from(&self, state: &mut PuzzleState, n: u8) -> bool {
        if n == 81 {
            return true;
        }
        let pos = Position::from_cell_index(n);

        // A fixed clue has no alternatives: forward the result of the rest
        // of the search unchanged, success or failure.
        if state.is_fixed(pos) {
            return self.solve_from(state, n + 1);
        }

        for digit in Digit::ALL {
            if state.is_legal(digit, pos) {
                state.place(digit, pos);
                if self.solve_from(state, n + 1) {
                    return true;
                }
                state.remove(digit, pos);
            }
        }

        // all nine candidates failed; the caller undoes its own trial
        false
    }
}

#[cfg(test)]
mod tests {
    use ninefold_core::{DigitSet, Position};

    use super::*;

    fn parse(text: &str) -> PuzzleState {
        text.parse().unwrap()
    }

    fn solve(state: &mut PuzzleState) -> bool {
        BacktrackingSolver::new().solve(state)
    }

    /// Asserts a complete, legal grid: every row, column, and box holds
    /// each digit exactly once.
    fn assert_valid_solution(state: &PuzzleState) {
        let mut rows = [DigitSet::EMPTY; 9];
        let mut cols = [DigitSet::EMPTY; 9];
        let mut boxes = [DigitSet::EMPTY; 9];
        for n in 0..81 {
            let pos = Position::from_cell_index(n);
            let digit = state.get(pos).expect("cell left empty");
            for set in [
                &mut rows[usize::from(pos.y())],
                &mut cols[usize::from(pos.x())],
                &mut boxes[usize::from(pos.box_index())],
            ] {
                assert!(!set.contains(digit), "duplicate {digit} at {pos:?}");
                set.insert(digit);
            }
        }
        for set in rows.iter().chain(&cols).chain(&boxes) {
            assert_eq!(*set, DigitSet::FULL);
        }
    }

    /// Asserts that every fixed clue of `original` is unchanged in `state`.
    fn assert_clues_preserved(original: &PuzzleState, state: &PuzzleState) {
        for n in 0..81 {
            let pos = Position::from_cell_index(n);
            if original.is_fixed(pos) {
                assert!(state.is_fixed(pos));
                assert_eq!(state.get(pos), original.get(pos));
            }
        }
    }

    #[test]
    fn test_empty_grid_solves() {
        let mut state = PuzzleState::new();
        assert!(solve(&mut state));
        assert_valid_solution(&state);
    }

    #[test]
    fn test_empty_grid_first_row_is_ascending() {
        // row-major scan with ascending digit trials fills the first row
        // 1..9 with no backtracking at all
        let mut state = PuzzleState::new();
        assert!(solve(&mut state));
        for x in 0..9 {
            assert_eq!(state.get(Position::new(x, 0)), Some(Digit::from_value(x + 1)));
        }
    }

    #[test]
    fn test_completed_grid_is_returned_unchanged() {
        // every cell given: the search skips all 81 fixed frames and
        // succeeds without a single trial
        let mut state = parse(
            "
            1 2 3 4 5 6 7 8 9
            4 5 6 7 8 9 1 2 3
            7 8 9 1 2 3 4 5 6
            2 1 4 3 6 5 8 9 7
            3 6 5 8 9 7 2 1 4
            8 9 7 2 1 4 3 6 5
            5 3 1 6 4 2 9 7 8
            6 4 2 9 7 8 5 3 1
            9 7 8 5 3 1 6 4 2
            ",
        );
        let before = state.clone();
        assert!(solve(&mut state));
        assert_eq!(state, before);
        assert_valid_solution(&state);
    }

    #[test]
    fn test_seventeen_clue_puzzle_has_known_solution() {
        // first entry of Royle's minimal 17-clue collection
        let mut state = parse(
            "
            0 0 0 0 0 0 0 1 0
            4 0 0 0 0 0 0 0 0
            0 2 0 0 0 0 0 0 0
            0 0 0 0 5 0 4 0 7
            0 0 8 0 0 0 3 0 0
            0 0 1 0 9 0 0 0 0
            3 0 0 4 0 0 2 0 0
            0 5 0 1 0 0 0 0 0
            0 0 0 8 0 6 0 0 0
            ",
        );
        let original = state.clone();
        assert!(solve(&mut state));
        assert_valid_solution(&state);
        assert_clues_preserved(&original, &state);

        let expected = parse(
            "
            6 9 3 7 8 4 5 1 2
            4 8 7 5 1 2 9 3 6
            1 2 5 9 6 3 8 7 4
            9 3 2 6 5 1 4 8 7
            5 6 8 2 4 7 3 9 1
            7 4 1 3 9 8 6 2 5
            3 1 9 4 7 5 2 6 8
            8 5 6 1 2 9 7 4 3
            2 7 4 8 3 6 1 5 9
            ",
        );
        for n in 0..81 {
            let pos = Position::from_cell_index(n);
            assert_eq!(state.get(pos), expected.get(pos), "mismatch at {pos:?}");
        }
    }

    #[test]
    fn test_deep_backtracking_puzzle() {
        // Inkala's 2012 puzzle, notorious for forcing long backtracks
        let mut state = parse(
            "
            8 0 0 0 0 0 0 0 0
            0 0 3 6 0 0 0 0 0
            0 7 0 0 9 0 2 0 0
            0 5 0 0 0 7 0 0 0
            0 0 0 0 4 5 7 0 0
            0 0 0 1 0 0 0 3 0
            0 0 1 0 0 0 0 6 8
            0 0 8 5 0 0 0 1 0
            0 9 0 0 0 0 4 0 0
            ",
        );
        let original = state.clone();
        assert!(solve(&mut state));
        assert_valid_solution(&state);
        assert_clues_preserved(&original, &state);
    }

    #[test]
    fn test_unsolvable_puzzle_returns_false_with_givens_intact() {
        // row 0 leaves only 9 for its last cell, but the 9 below it in the
        // same box makes that placement illegal; individually every clue
        // is legal, so this loads fine and fails only in the search
        let mut state = parse(
            "
            1 2 3 4 5 6 7 8 0
            0 0 0 0 0 0 0 0 9
            0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0
            0 0 0 0 0 0 0 0 0
            ",
        );
        let original = state.clone();
        assert!(!solve(&mut state));
        // failure residue: every trial was undone, leaving the givens
        assert_eq!(state, original);
    }

    #[test]
    fn test_solver_is_deterministic() {
        let text = "
            0 0 0 0 0 0 0 1 0
            4 0 0 0 0 0 0 0 0
            0 2 0 0 0 0 0 0 0
            0 0 0 0 5 0 4 0 7
            0 0 8 0 0 0 3 0 0
            0 0 1 0 9 0 0 0 0
            3 0 0 4 0 0 2 0 0
            0 5 0 1 0 0 0 0 0
            0 0 0 8 0 6 0 0 0
            ";
        let mut first = parse(text);
        let mut second = parse(text);
        assert!(solve(&mut first));
        assert!(solve(&mut second));
        assert_eq!(first, second);
    }
}
