//! Legality checks for moving the falling piece.
//!
//! Every check is a pure function of the piece and the grid. Bounds are
//! tested before a cell is looked up, so none of these functions ever asks
//! the grid for a cell outside it.

use serde::{Deserialize, Serialize};

use crate::core::{grid::Grid, piece::Piece, shape::Coord};

/// Horizontal direction of a lateral move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[must_use]
    pub const fn step(self) -> Coord {
        match self {
            Side::Left => Coord::new(-1, 0),
            Side::Right => Coord::new(1, 0),
        }
    }
}

/// Every way the falling piece can be asked to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Direction {
    Left,
    Right,
    Down,
    Rotate,
}

/// Returns whether the piece may take `direction` from where it is.
#[must_use]
pub fn is_legal(direction: Direction, piece: &Piece, grid: &Grid) -> bool {
    match direction {
        Direction::Left => can_move(Side::Left, piece, grid),
        Direction::Right => can_move(Side::Right, piece, grid),
        Direction::Down => can_drop(piece, grid),
        Direction::Rotate => can_rotate(piece, grid),
    }
}

/// Returns whether the piece can descend one row.
///
/// Every cell must sit above the bottom row, be free, and have a free cell
/// directly below it.
#[must_use]
pub fn can_drop(piece: &Piece, grid: &Grid) -> bool {
    piece.absolute_cells().into_iter().all(|cell| {
        Grid::contains(cell)
            && cell.row < Grid::BOTTOM_ROW
            && !grid.is_occupied_at(cell)
            && !grid.is_occupied_at(cell.below())
    })
}

/// Returns whether the piece can shift one column toward `side`.
///
/// Every cell must sit above the bottom row and be free, and its neighbor
/// toward `side` must be inside the grid and free. Columns 0 and 15 are
/// legal resting places, but a cell already there cannot move further out.
#[must_use]
pub fn can_move(side: Side, piece: &Piece, grid: &Grid) -> bool {
    piece.absolute_cells().into_iter().all(|cell| {
        let target = cell + side.step();
        Grid::contains(cell)
            && cell.row < Grid::BOTTOM_ROW
            && Grid::contains(target)
            && !grid.is_occupied_at(cell)
            && !grid.is_occupied_at(target)
    })
}

/// Returns whether the piece can rotate in place.
///
/// The candidate cells are computed exactly as [`Piece::rotated`] would,
/// without touching the piece. Each must lie inside the grid strictly above
/// the bottom row and be free. No kicks are tried.
#[must_use]
pub fn can_rotate(piece: &Piece, grid: &Grid) -> bool {
    piece.rotated().absolute_cells().into_iter().all(|cell| {
        cell.row >= 0
            && cell.row < Grid::BOTTOM_ROW
            && cell.col >= 0
            && cell.col <= Grid::RIGHT_COL
            && !grid.is_occupied_at(cell)
    })
}
