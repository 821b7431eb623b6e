//! Individual representation.
//!
//! A [`Board`] places one queen per column; the value stored at position `c`
//! is the 1-based row of the queen in column `c`. Boards are small `Copy`
//! values, so every operator works on its own copy and parents are never
//! aliased by their offspring.

use crate::error::{GaError, Result};
use std::fmt;
use std::ops::Index;

/// Board size used by the classic problem and the free-function API.
pub const QUEENS: usize = 8;

/// Fitness of a board: the number of attacking queen pairs.
///
/// Lower is better; `0` is a valid solution.
pub type Conflicts = u32;

/// A candidate placement of `N` queens on an `N × N` board.
///
/// # Examples
///
/// ```
/// use u_queens::ga::Board;
///
/// let board = Board::new([2, 4, 6, 8, 3, 1, 7, 5]).unwrap();
/// assert_eq!(board.conflicts(), 0);
/// assert!(board.is_solution());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<const N: usize = 8> {
    rows: [usize; N],
}

impl<const N: usize> Board<N> {
    /// Creates a board, checking that every row lies in `1..=N`.
    pub fn new(rows: [usize; N]) -> Result<Self> {
        if let Some((column, &row)) = rows
            .iter()
            .enumerate()
            .find(|&(_, &row)| row == 0 || row > N)
        {
            return Err(GaError::InvalidIndividual {
                column,
                row,
                size: N,
            });
        }
        Ok(Self { rows })
    }

    /// Builds a board from rows already known to be in range.
    pub(crate) fn from_rows_unchecked(rows: [usize; N]) -> Self {
        debug_assert!(rows.iter().all(|&r| (1..=N).contains(&r)));
        Self { rows }
    }

    /// Row assignments, indexed by column.
    pub fn rows(&self) -> &[usize; N] {
        &self.rows
    }

    /// Number of columns (and rows) on the board.
    pub const fn size(&self) -> usize {
        N
    }

    /// Number of attacking pairs. See [`evaluate`](super::fitness::evaluate).
    pub fn conflicts(&self) -> Conflicts {
        super::fitness::evaluate(self)
    }

    /// Returns `true` when no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        self.conflicts() == 0
    }

    pub(crate) fn set_row(&mut self, column: usize, row: usize) {
        debug_assert!((1..=N).contains(&row));
        self.rows[column] = row;
    }
}

impl<const N: usize> Index<usize> for Board<N> {
    type Output = usize;

    fn index(&self, column: usize) -> &usize {
        &self.rows[column]
    }
}

impl<const N: usize> TryFrom<[usize; N]> for Board<N> {
    type Error = GaError;

    fn try_from(rows: [usize; N]) -> Result<Self> {
        Self::new(rows)
    }
}

/// Renders the board top row first, `Q` for a queen and `.` for an empty
/// square.
impl<const N: usize> fmt::Display for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=N).rev() {
            for (column, &queen) in self.rows.iter().enumerate() {
                if column > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if queen == row { "Q" } else { "." })?;
            }
            if row > 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// serde only implements arrays up to a fixed length, so boards go through a
// plain sequence and are re-validated on the way in.
#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for Board<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for Board<N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        use serde::de::Error;

        let rows = Vec::<usize>::deserialize(deserializer)?;
        let len = rows.len();
        let rows: [usize; N] = rows
            .try_into()
            .map_err(|_| D::Error::invalid_length(len, &"one row per column"))?;
        Board::new(rows).map_err(D::Error::custom)
    }
}
