use serde::{Deserialize, Serialize};

use super::{
    rotation,
    shape::{Coord, ShapeKind},
};

/// The falling piece.
///
/// A piece keeps its four cells in the local frame of its shape plus a
/// translation offset that maps the local frame onto the grid. Lateral moves
/// and drops only touch the offset; rotation only touches the local cells.
/// The pivot is taken from the catalog once, at spawn.
///
/// Pieces are plain values: every move returns a new `Piece`, and the caller
/// decides whether to keep it.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Coord, Piece, ShapeKind};
///
/// let piece = Piece::spawn(ShapeKind::I);
/// let moved = piece.shifted(Coord::new(3, 1));
/// assert_eq!(moved.absolute_cells()[0], Coord::new(3, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Piece {
    kind: ShapeKind,
    cells: [Coord; 4],
    pivot: Coord,
    offset: Coord,
}

impl Piece {
    /// Creates a piece of the given shape at translation (0, 0).
    #[must_use]
    pub const fn spawn(kind: ShapeKind) -> Self {
        Self {
            kind,
            cells: kind.cells(),
            pivot: kind.pivot(),
            offset: Coord::ORIGIN,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Cells in the shape's local frame (after any rotations).
    #[must_use]
    pub const fn cells(&self) -> &[Coord; 4] {
        &self.cells
    }

    #[must_use]
    pub const fn pivot(&self) -> Coord {
        self.pivot
    }

    /// Translation from the local frame onto the grid.
    #[must_use]
    pub const fn offset(&self) -> Coord {
        self.offset
    }

    /// Cells in grid coordinates.
    #[must_use]
    pub fn absolute_cells(&self) -> [Coord; 4] {
        self.cells.map(|cell| cell + self.offset)
    }

    /// Returns the piece translated by `delta`.
    #[must_use]
    pub fn shifted(&self, delta: Coord) -> Self {
        Self {
            offset: self.offset + delta,
            ..*self
        }
    }

    #[must_use]
    pub fn left(&self) -> Self {
        self.shifted(Coord::new(-1, 0))
    }

    #[must_use]
    pub fn right(&self) -> Self {
        self.shifted(Coord::new(1, 0))
    }

    #[must_use]
    pub fn down(&self) -> Self {
        self.shifted(Coord::new(0, 1))
    }

    /// Returns the piece rotated 90° counterclockwise about its spawn pivot.
    ///
    /// The translation offset is left untouched.
    #[must_use]
    pub fn rotated(&self) -> Self {
        Self {
            cells: rotation::rotate_cells(self.cells, self.pivot),
            ..*self
        }
    }
}
