//! Rotation about a fixed pivot.
//!
//! Rotation works purely on a piece's local offsets. The pivot is captured
//! when the piece spawns and is never re-derived, so a piece that has been
//! shifted sideways still rotates about the same local point; the shift is
//! applied afterwards when absolute cells are computed.

use super::shape::Coord;

/// Rotates a single cell 90° counterclockwise about `pivot`.
///
/// In grid coordinates (rows growing downward) this is the transform
/// `(x, y) -> (y, -x)` applied to the pivot-relative vector.
#[must_use]
pub const fn rotate_cell(cell: Coord, pivot: Coord) -> Coord {
    let x = cell.col - pivot.col;
    let y = cell.row - pivot.row;
    Coord::new(pivot.col + y, pivot.row - x)
}

/// Rotates every cell of a piece about `pivot`, returning a fresh set.
#[must_use]
pub fn rotate_cells(cells: [Coord; 4], pivot: Coord) -> [Coord; 4] {
    cells.map(|cell| rotate_cell(cell, pivot))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::core::shape::ShapeKind;

    #[test]
    fn test_pivot_is_fixed_point() {
        let pivot = Coord::new(4, 7);
        assert_eq!(rotate_cell(pivot, pivot), pivot);
    }

    #[test]
    fn test_rotate_i_shape_becomes_vertical() {
        let kind = ShapeKind::I;
        let rotated = rotate_cells(kind.cells(), kind.pivot());
        assert_eq!(
            rotated,
            [
                Coord::new(2, 2),
                Coord::new(2, 1),
                Coord::new(2, 0),
                Coord::new(2, -1),
            ]
        );
    }

    #[test]
    fn test_rotate_t_shape() {
        let kind = ShapeKind::T;
        let rotated = rotate_cells(kind.cells(), kind.pivot());
        // Nub moves from top to left.
        assert_eq!(
            rotated,
            [
                Coord::new(0, 1),
                Coord::new(1, 2),
                Coord::new(1, 1),
                Coord::new(1, 0),
            ]
        );
    }

    #[test]
    fn test_four_rotations_restore_every_catalog_shape() {
        for kind in ShapeKind::ALL {
            let original = kind.cells();
            let mut cells = original;
            for _ in 0..4 {
                cells = rotate_cells(cells, kind.pivot());
            }
            assert_eq!(cells, original, "{kind:?}");
        }
    }

    proptest! {
        #[test]
        fn prop_four_rotations_are_identity(
            col in -50i32..50,
            row in -50i32..50,
            pivot_col in -50i32..50,
            pivot_row in -50i32..50,
        ) {
            let cell = Coord::new(col, row);
            let pivot = Coord::new(pivot_col, pivot_row);
            let mut rotated = cell;
            for _ in 0..4 {
                rotated = rotate_cell(rotated, pivot);
            }
            prop_assert_eq!(rotated, cell);
        }

        #[test]
        fn prop_rotation_preserves_distance_to_pivot(
            col in -50i32..50,
            row in -50i32..50,
            pivot_col in -50i32..50,
            pivot_row in -50i32..50,
        ) {
            let cell = Coord::new(col, row);
            let pivot = Coord::new(pivot_col, pivot_row);
            let before = cell - pivot;
            let after = rotate_cell(cell, pivot) - pivot;
            prop_assert_eq!(
                before.col * before.col + before.row * before.row,
                after.col * after.col + after.row * after.row
            );
        }
    }
}
