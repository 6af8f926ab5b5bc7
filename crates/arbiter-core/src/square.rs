//! Board squares addressed by (row, column).

use std::fmt;

/// A square on the chess board.
///
/// Row 0 is Black's back rank (rank 8), row 7 is White's back rank (rank 1).
/// Column 0 is the a-file. Both components are always in `0..8`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square, returning `None` if either component is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Create a square from a literal pair.
    ///
    /// # Panics
    ///
    /// Panics if either component is off the board. Intended for constants
    /// and fixtures; use [`Square::new`] or [`Square::from_coords`] for input.
    #[inline]
    pub const fn at(row: u8, col: u8) -> Square {
        assert!(row < 8 && col < 8, "square off the board");
        Square { row, col }
    }

    /// Create a square without bounds checking.
    #[inline]
    pub(crate) const fn from_parts_unchecked(row: u8, col: u8) -> Square {
        debug_assert!(row < 8 && col < 8);
        Square { row, col }
    }

    /// Create a square from untrusted signed coordinates.
    pub fn from_coords(row: i64, col: i64) -> Option<Square> {
        let row = u8::try_from(row).ok()?;
        let col = u8::try_from(col).ok()?;
        Square::new(row, col)
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Return the zero-based index (row * 8 + col).
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Return the square displaced by (`d_row`, `d_col`), if it is on the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::from_parts_unchecked(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Signed (row, column) displacement from `self` to `to`.
    #[inline]
    pub fn delta(self, to: Square) -> (i8, i8) {
        (to.row as i8 - self.row as i8, to.col as i8 - self.col as i8)
    }

    /// Same row, different column.
    #[inline]
    pub fn with_col(self, col: u8) -> Option<Square> {
        Square::new(self.row, col)
    }

    /// Iterate over all 64 squares, row by row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..8).flat_map(|row| (0u8..8).map(move |col| Square::from_parts_unchecked(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        write!(f, "{file}{rank}")
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {} = {})", self.row, self.col, self)
    }
}
