use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use super::{
    piece::Piece,
    shape::{Coord, ShapeKind},
};

const ROWS: usize = 22;
const COLS: usize = 16;

/// A single cell of the grid.
///
/// Filled cells remember which shape they came from so renderers can color
/// them; the engine itself only ever asks whether a cell is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum Cell {
    #[default]
    Empty,
    Filled(ShapeKind),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[must_use]
    pub fn is_occupied(self) -> bool {
        !self.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GridRow {
    cells: [Cell; COLS],
}

impl GridRow {
    const EMPTY: Self = Self {
        cells: [Cell::Empty; COLS],
    };

    fn is_filled(&self) -> bool {
        self.cells.iter().all(|c| c.is_occupied())
    }
}

/// The fixed 22 × 16 occupancy grid holding locked cells.
///
/// Row 0 is the top row and row 21 the bottom; column 0 is the leftmost.
/// The dimensions never change: clearing rows shifts the stack down and
/// refills the top with empty rows.
///
/// Reading or writing outside the grid is a contract violation and panics.
/// The move validator checks bounds before it looks at a cell, so engine code
/// never does this.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Grid, Piece, ShapeKind};
///
/// let mut grid = Grid::EMPTY;
/// grid.lock(&Piece::spawn(ShapeKind::O));
/// assert!(grid.is_occupied(0, 0));
/// assert!(grid.scan_full_rows().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: [GridRow; ROWS],
}

impl Default for Grid {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Grid {
    pub const ROWS: usize = ROWS;
    pub const COLS: usize = COLS;
    /// Index of the bottom row.
    pub const BOTTOM_ROW: i32 = 21;
    /// Index of the rightmost column.
    pub const RIGHT_COL: i32 = 15;

    pub const EMPTY: Self = {
        assert!(Self::BOTTOM_ROW as usize == ROWS - 1);
        assert!(Self::RIGHT_COL as usize == COLS - 1);
        Self {
            rows: [GridRow::EMPTY; ROWS],
        }
    };

    /// Returns whether `coord` lies inside the grid.
    #[must_use]
    pub fn contains(coord: Coord) -> bool {
        (0..=Self::BOTTOM_ROW).contains(&coord.row) && (0..=Self::RIGHT_COL).contains(&coord.col)
    }

    #[expect(clippy::cast_sign_loss)]
    fn index(coord: Coord) -> (usize, usize) {
        assert!(
            Self::contains(coord),
            "grid access out of bounds: row {}, col {}",
            coord.row,
            coord.col
        );
        (coord.row as usize, coord.col as usize)
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < Self::ROWS && col < Self::COLS,
            "grid access out of bounds: row {row}, col {col}"
        );
        self.rows[row].cells[col]
    }

    #[must_use]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_occupied()
    }

    /// Like [`Self::is_occupied`], addressed by a grid coordinate.
    #[must_use]
    pub fn is_occupied_at(&self, coord: Coord) -> bool {
        let (row, col) = Self::index(coord);
        self.rows[row].cells[col].is_occupied()
    }

    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        assert!(
            row < Self::ROWS && col < Self::COLS,
            "grid access out of bounds: row {row}, col {col}"
        );
        self.rows[row].cells[col] = cell;
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; COLS]> {
        self.rows.iter().map(|row| &row.cells)
    }

    /// Burns the piece's four absolute cells into the grid.
    ///
    /// Existing occupancy is not checked: a piece is only locked after the
    /// validator has refused a further drop, so its cells are free.
    pub fn lock(&mut self, piece: &Piece) {
        for coord in piece.absolute_cells() {
            let (row, col) = Self::index(coord);
            self.rows[row].cells[col] = Cell::Filled(piece.kind());
        }
    }

    /// Returns a copy of the grid with the piece stamped in.
    ///
    /// Intended for renderers that want to draw the falling piece together
    /// with the locked stack.
    #[must_use]
    pub fn with_piece(&self, piece: &Piece) -> Self {
        let mut grid = self.clone();
        grid.lock(piece);
        grid
    }

    /// Returns the indices of completely filled rows, top to bottom.
    #[must_use]
    pub fn scan_full_rows(&self) -> ArrayVec<usize, ROWS> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.is_filled())
            .map(|(y, _)| y)
            .collect()
    }

    /// Removes the given rows as one set and compacts the stack.
    ///
    /// Rows above a removed row move down by the number of removed rows below
    /// them, and the same number of empty rows appear at the top. Surviving
    /// rows keep their relative order. Duplicate indices count once.
    pub fn clear_rows(&mut self, rows: &[usize]) {
        let mut removed = [false; ROWS];
        for &y in rows {
            assert!(y < Self::ROWS, "row {y} out of bounds");
            removed[y] = true;
        }

        let mut count = 0;
        for y in (0..Self::ROWS).rev() {
            if removed[y] {
                count += 1;
                continue;
            }
            if count > 0 {
                self.rows[y + count] = self.rows[y];
            }
        }
        self.rows[..count].fill(GridRow::EMPTY);
    }
}
