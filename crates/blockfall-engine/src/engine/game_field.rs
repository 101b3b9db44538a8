use crate::{
    PieceCollisionError, SpawnCollisionError,
    core::{grid::Grid, piece::Piece},
};

use super::{
    shape_source::{ShapeSource, UniformShapes},
    validator::{self, Direction},
};

/// Grid, falling piece and shape source of a single game.
///
/// The field knows how to move the piece and how to lock it, but nothing
/// about time, score or pause. [`GameSession`](super::GameSession) layers
/// those on top.
///
/// After a spawn collision the field holds no falling piece until
/// [`GameField::reset`] is called.
#[derive(Debug, Clone)]
pub struct GameField<S = UniformShapes> {
    grid: Grid,
    falling_piece: Option<Piece>,
    shapes: S,
}

impl Default for GameField {
    fn default() -> Self {
        Self::new(UniformShapes::new())
    }
}

impl<S> GameField<S>
where
    S: ShapeSource,
{
    /// Creates an empty field and spawns its first piece.
    #[must_use]
    pub fn new(mut shapes: S) -> Self {
        let falling_piece = Piece::spawn(shapes.next_shape());
        Self {
            grid: Grid::EMPTY,
            falling_piece: Some(falling_piece),
            shapes,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[must_use]
    pub fn falling_piece(&self) -> Option<&Piece> {
        self.falling_piece.as_ref()
    }

    #[must_use]
    pub fn shape_source(&self) -> &S {
        &self.shapes
    }

    /// Moves the falling piece one step in `direction` if the validator allows it.
    ///
    /// A rejected step, or a step with no falling piece, leaves the field
    /// untouched.
    pub fn try_step(&mut self, direction: Direction) -> Result<(), PieceCollisionError> {
        let piece = self.falling_piece.as_mut().ok_or(PieceCollisionError)?;
        if !validator::is_legal(direction, piece, &self.grid) {
            return Err(PieceCollisionError);
        }
        *piece = match direction {
            Direction::Left => piece.left(),
            Direction::Right => piece.right(),
            Direction::Down => piece.down(),
            Direction::Rotate => piece.rotated(),
        };
        Ok(())
    }

    /// Locks the falling piece, clears full rows and spawns the next piece.
    ///
    /// Returns the number of cleared rows together with the spawn outcome.
    /// If the new piece's cells are already occupied it is not placed and the
    /// field is left without a falling piece.
    pub fn complete_piece_drop(&mut self) -> (usize, Result<(), SpawnCollisionError>) {
        let Some(piece) = self.falling_piece.take() else {
            return (0, Err(SpawnCollisionError));
        };

        self.grid.lock(&piece);
        tracing::debug!(kind = ?piece.kind(), offset = ?piece.offset(), "piece locked");

        let full_rows = self.grid.scan_full_rows();
        if !full_rows.is_empty() {
            tracing::debug!(rows = ?full_rows.as_slice(), "clearing rows");
            self.grid.clear_rows(&full_rows);
        }

        (full_rows.len(), self.spawn_next())
    }

    /// Empties the grid and spawns a fresh piece from the same source.
    pub fn reset(&mut self) {
        self.grid = Grid::EMPTY;
        self.falling_piece = Some(Piece::spawn(self.shapes.next_shape()));
    }

    fn spawn_next(&mut self) -> Result<(), SpawnCollisionError> {
        let piece = Piece::spawn(self.shapes.next_shape());
        let blocked = piece
            .absolute_cells()
            .into_iter()
            .any(|cell| self.grid.is_occupied_at(cell));
        if blocked {
            tracing::debug!(kind = ?piece.kind(), "spawn blocked");
            return Err(SpawnCollisionError);
        }
        tracing::debug!(kind = ?piece.kind(), "piece spawned");
        self.falling_piece = Some(piece);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{
            grid::Cell,
            shape::{Coord, ShapeKind},
        },
        engine::shape_source::SequenceShapes,
    };

    fn field(shapes: &[ShapeKind]) -> GameField<SequenceShapes> {
        GameField::new(SequenceShapes::new(shapes))
    }

    #[test]
    fn test_new_field_spawns_at_origin() {
        let field = field(&[ShapeKind::T]);
        let piece = field.falling_piece().unwrap();
        assert_eq!(*piece, Piece::spawn(ShapeKind::T));
        assert_eq!(*field.grid(), Grid::EMPTY);
    }

    #[test]
    fn test_try_step_updates_offset() {
        let mut field = field(&[ShapeKind::O]);
        field.try_step(Direction::Right).unwrap();
        field.try_step(Direction::Right).unwrap();
        assert_eq!(field.falling_piece().unwrap().offset(), Coord::new(2, 0));
        field.try_step(Direction::Left).unwrap();
        assert_eq!(field.falling_piece().unwrap().offset(), Coord::new(1, 0));
    }

    #[test]
    fn test_try_step_agrees_with_validator() {
        let mut field = field(&[ShapeKind::J]);
        field.grid_mut().set_cell(4, 3, Cell::Filled(ShapeKind::O));
        for direction in [
            Direction::Left,
            Direction::Right,
            Direction::Down,
            Direction::Rotate,
        ] {
            let before = *field.falling_piece().unwrap();
            let legal = validator::is_legal(direction, &before, field.grid());
            assert_eq!(field.try_step(direction).is_ok(), legal, "{direction:?}");
            if !legal {
                assert_eq!(*field.falling_piece().unwrap(), before);
            }
        }
    }

    #[test]
    fn test_rejected_move_leaves_piece_unchanged() {
        let mut field = field(&[ShapeKind::O]);
        let before = *field.falling_piece().unwrap();
        assert!(field.try_step(Direction::Left).is_err());
        assert_eq!(*field.falling_piece().unwrap(), before);
    }

    #[test]
    fn test_rejected_rotation_leaves_piece_unchanged() {
        // Vertical I would reach row -1.
        let mut field = field(&[ShapeKind::I]);
        let before = *field.falling_piece().unwrap();
        assert!(field.try_step(Direction::Rotate).is_err());
        assert_eq!(*field.falling_piece().unwrap(), before);

        field.try_step(Direction::Down).unwrap();
        field.try_step(Direction::Rotate).unwrap();
        assert_ne!(field.falling_piece().unwrap().cells(), before.cells());
    }

    #[test]
    fn test_complete_piece_drop_locks_and_respawns() {
        let mut field = field(&[ShapeKind::S, ShapeKind::J]);
        while field.try_step(Direction::Down).is_ok() {}
        let landed = *field.falling_piece().unwrap();

        let (cleared, result) = field.complete_piece_drop();
        assert_eq!(cleared, 0);
        assert!(result.is_ok());
        for coord in landed.absolute_cells() {
            let row = usize::try_from(coord.row).unwrap();
            let col = usize::try_from(coord.col).unwrap();
            assert_eq!(field.grid().cell(row, col), Cell::Filled(ShapeKind::S));
        }
        assert_eq!(*field.falling_piece().unwrap(), Piece::spawn(ShapeKind::J));
    }

    #[test]
    fn test_complete_piece_drop_clears_full_row() {
        let mut field = field(&[ShapeKind::I]);
        for col in 4..Grid::COLS {
            field.grid_mut().set_cell(21, col, Cell::Filled(ShapeKind::O));
        }
        field.grid_mut().set_cell(20, 9, Cell::Filled(ShapeKind::T));
        while field.try_step(Direction::Down).is_ok() {}

        let (cleared, result) = field.complete_piece_drop();
        assert_eq!(cleared, 1);
        assert!(result.is_ok());
        assert_eq!(field.grid().cell(21, 9), Cell::Filled(ShapeKind::T));
        let occupied = field
            .grid()
            .rows()
            .flatten()
            .filter(|c| c.is_occupied())
            .count();
        assert_eq!(occupied, 1);
    }

    #[test]
    fn test_spawn_collision_leaves_no_piece() {
        let mut field = field(&[ShapeKind::O]);
        // Something sitting right under the spawn area.
        field.grid_mut().set_cell(2, 0, Cell::Filled(ShapeKind::I));
        assert!(field.try_step(Direction::Down).is_err());

        let (cleared, result) = field.complete_piece_drop();
        assert_eq!(cleared, 0);
        assert!(result.is_err());
        assert!(field.falling_piece().is_none());
        assert!(field.try_step(Direction::Right).is_err());
        assert!(field.complete_piece_drop().1.is_err());

        field.reset();
        assert_eq!(*field.grid(), Grid::EMPTY);
        assert!(field.falling_piece().is_some());
    }
}
