//! Grid coordinates and the row-major cell-index mapping.

/// A cell position on the 9×9 grid.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). The solver walks cells in row-major order by linear index; see
/// [`Position::from_cell_index`].
///
/// # Examples
///
/// ```
/// use ninefold_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 7);
/// assert_eq!(pos.box_index(), 7); // bottom-middle box
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a position from column and row coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Creates a position from a row-major cell index in 0-80.
    ///
    /// Index `n` maps to row `n / 9` and column `n % 9`, matching the order
    /// in which the backtracking solver visits cells.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not in the range 0-80.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Position;
    ///
    /// assert_eq!(Position::from_cell_index(0), Position::new(0, 0));
    /// assert_eq!(Position::from_cell_index(10), Position::new(1, 1));
    /// assert_eq!(Position::from_cell_index(80), Position::new(8, 8));
    /// ```
    #[must_use]
    pub const fn from_cell_index(n: u8) -> Self {
        assert!(n < 81);
        Self::new(n % 9, n / 9)
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the index (0-8) of the 3×3 box containing this position.
    ///
    /// Boxes are numbered left to right, top to bottom, so the box at
    /// grid coordinates `(y / 3, x / 3)` has index `(y / 3) * 3 + x / 3`.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }
}
