//! Puzzle state: grid contents, fixed clues, and presence tables.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{digit::Digit, digit_set::DigitSet, position::Position};

/// Errors reported when loading a puzzle configuration.
///
/// The loader fails fast on malformed input; it never wraps or truncates an
/// out-of-range value, and it refuses clues that contradict each other so
/// the presence tables can never be corrupted by a bad file.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// The configuration contained fewer than 81 values.
    #[display("expected 81 values, found {found}")]
    TooFewValues {
        /// Number of values actually present.
        found: usize,
    },
    /// The configuration contained more than 81 values.
    #[display("expected 81 values, found more")]
    TooManyValues,
    /// A token was not an integer in the range 0-9.
    #[display("invalid cell value {token:?} (expected an integer in 0-9)")]
    InvalidToken {
        /// The offending token.
        token: String,
    },
    /// A value was an integer but outside the range 0-9.
    #[display("cell value {value} at column {x}, row {y} is out of range 0-9")]
    ValueOutOfRange {
        /// The out-of-range value.
        value: u8,
        /// Column of the offending cell (0-8).
        x: u8,
        /// Row of the offending cell (0-8).
        y: u8,
    },
    /// A given clue repeats a digit already present in its row, column, or
    /// box, so no legal completion exists.
    #[display("clue {digit} at column {x}, row {y} conflicts with another clue")]
    ConflictingClue {
        /// The conflicting digit.
        digit: Digit,
        /// Column of the offending cell (0-8).
        x: u8,
        /// Row of the offending cell (0-8).
        y: u8,
    },
}

/// The state of a 9×9 Sudoku puzzle.
///
/// Owns the grid contents, the mask of fixed (given) cells, and three
/// redundant presence tables — one [`DigitSet`] per row, column, and 3×3
/// box — kept in sync with the grid so that [`is_legal`](Self::is_legal)
/// is a constant-time query instead of a scan.
///
/// The solver mutates a `PuzzleState` destructively: backtracking is an
/// explicit [`remove`](Self::remove) of the trial digit, never a snapshot.
/// After a failed search the state therefore holds exactly the original
/// givens again.
///
/// # Caller contract
///
/// [`place`](Self::place) and [`remove`](Self::remove) do not re-validate
/// their arguments in release builds; the search consults
/// [`is_legal`](Self::is_legal) before every placement, and removal must
/// name the digit that was placed. Violating either is a logic error and
/// trips a `debug_assert!`.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, Position, PuzzleState};
///
/// let mut state = PuzzleState::new();
/// let pos = Position::new(0, 0);
///
/// state.place(Digit::D5, pos);
/// assert_eq!(state.get(pos), Some(Digit::D5));
/// assert!(!state.is_legal(Digit::D5, Position::new(8, 0)));
///
/// state.remove(Digit::D5, pos);
/// assert_eq!(state, PuzzleState::new());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    /// `grid[y][x]` is the digit at column `x`, row `y`.
    grid: [[Option<Digit>; 9]; 9],
    /// `fixed[y][x]` is `true` for cells supplied by the initial
    /// configuration. Never modified after loading.
    fixed: [[bool; 9]; 9],
    rows: [DigitSet; 9],
    cols: [DigitSet; 9],
    boxes: [DigitSet; 9],
}

impl PuzzleState {
    /// Creates an empty puzzle: no digits placed, no cells fixed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            grid: [[None; 9]; 9],
            fixed: [[false; 9]; 9],
            rows: [DigitSet::EMPTY; 9],
            cols: [DigitSet::EMPTY; 9],
            boxes: [DigitSet::EMPTY; 9],
        }
    }

    /// Loads a configuration from 9 rows of 9 values, row-major.
    ///
    /// `0` leaves a cell empty and unfixed; `1`-`9` places the digit and
    /// marks the cell as a fixed clue.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValueOutOfRange`] for a value above 9 and
    /// [`ConfigError::ConflictingClue`] if a clue repeats a digit already
    /// present in its row, column, or box (such a configuration has no
    /// legal completion).
    pub fn from_rows(rows: [[u8; 9]; 9]) -> Result<Self, ConfigError> {
        let mut state = Self::new();
        for (y, row) in (0..).zip(&rows) {
            for (x, &value) in (0..).zip(row) {
                if value == 0 {
                    continue;
                }
                let digit = Digit::try_from_value(value)
                    .ok_or(ConfigError::ValueOutOfRange { value, x, y })?;
                let pos = Position::new(x, y);
                if !state.is_legal(digit, pos) {
                    return Err(ConfigError::ConflictingClue { digit, x, y });
                }
                state.place(digit, pos);
                state.fixed[usize::from(y)][usize::from(x)] = true;
            }
        }
        Ok(state)
    }

    /// Returns `true` if placing `digit` at `pos` would not repeat the
    /// digit in the cell's row, column, or 3×3 box.
    ///
    /// Pure query over the presence tables; no scan of the grid.
    #[must_use]
    pub fn is_legal(&self, digit: Digit, pos: Position) -> bool {
        !self.rows[usize::from(pos.y())].contains(digit)
            && !self.cols[usize::from(pos.x())].contains(digit)
            && !self.boxes[usize::from(pos.box_index())].contains(digit)
    }

    /// Places `digit` in the cell at `pos` and records it in the row,
    /// column, and box presence tables.
    ///
    /// The cell must be empty and the placement legal per
    /// [`is_legal`](Self::is_legal); this is the caller's responsibility
    /// and is only checked in debug builds.
    pub fn place(&mut self, digit: Digit, pos: Position) {
        debug_assert!(self.get(pos).is_none());
        debug_assert!(self.is_legal(digit, pos));
        self.grid[usize::from(pos.y())][usize::from(pos.x())] = Some(digit);
        self.rows[usize::from(pos.y())].insert(digit);
        self.cols[usize::from(pos.x())].insert(digit);
        self.boxes[usize::from(pos.box_index())].insert(digit);
    }

    /// Removes `digit` from the cell at `pos`, clearing the same three
    /// presence flags that [`place`](Self::place) set.
    ///
    /// Must be called with the exact digit previously placed: removal
    /// clears that digit's flags, it does not erase whatever is there.
    /// Checked in debug builds only.
    pub fn remove(&mut self, digit: Digit, pos: Position) {
        debug_assert_eq!(self.get(pos), Some(digit));
        self.grid[usize::from(pos.y())][usize::from(pos.x())] = None;
        self.rows[usize::from(pos.y())].remove(digit);
        self.cols[usize::from(pos.x())].remove(digit);
        self.boxes[usize::from(pos.box_index())].remove(digit);
    }

    /// Returns the digit at `pos`, or `None` for an empty cell.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.grid[usize::from(pos.y())][usize::from(pos.x())]
    }

    /// Returns `true` if the cell at `pos` is a fixed clue from the
    /// initial configuration.
    #[must_use]
    pub fn is_fixed(&self, pos: Position) -> bool {
        self.fixed[usize::from(pos.y())][usize::from(pos.x())]
    }

    /// Returns the number of fixed clues in the configuration.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.fixed.iter().flatten().filter(|&&f| f).count()
    }
}

impl Default for PuzzleState {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for PuzzleState {
    type Err = ConfigError;

    /// Parses the puzzle file format: 81 whitespace-separated integers in
    /// 0-9, conventionally laid out as 9 lines of 9 values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = [[0_u8; 9]; 9];
        let mut count = 0_usize;
        for token in s.split_whitespace() {
            if count == 81 {
                return Err(ConfigError::TooManyValues);
            }
            let value = token.parse::<u8>().map_err(|_| ConfigError::InvalidToken {
                token: token.to_owned(),
            })?;
            rows[count / 9][count % 9] = value;
            count += 1;
        }
        if count < 81 {
            return Err(ConfigError::TooFewValues { found: count });
        }
        Self::from_rows(rows)
    }
}

const ROW_SEPARATOR: &str = "-------------------------------------";

impl Display for PuzzleState {
    /// Renders the fixed-width grid: `|`-separated cells, each filled cell
    /// as ` d `, each empty cell as three spaces, with a dash separator
    /// line before every row and after the last.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            writeln!(f, "{ROW_SEPARATOR}")?;
            for cell in row {
                match cell {
                    Some(digit) => write!(f, "| {digit} ")?,
                    None => write!(f, "|   ")?,
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{ROW_SEPARATOR}")
    }
}
