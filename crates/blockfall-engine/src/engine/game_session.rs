use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{grid::Grid, piece::Piece};

use super::{
    GameStats,
    game_field::GameField,
    shape_source::{ShapeSeed, ShapeSource, UniformShapes},
    validator::Direction,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant, Serialize)]
pub enum SessionState {
    Playing,
    Paused,
    GameOver,
}

/// What a gravity tick (or soft drop) did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TickEvent {
    /// The piece descended one row.
    Moved,
    /// The piece was locked, full rows were cleared and a new piece spawned.
    Locked { cleared_lines: usize },
    /// The piece was locked but the next one could not be placed.
    GameOver,
}

/// Player actions accepted by [`GameSession::handle_input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    Rotate,
}

impl InputAction {
    pub const ALL: [Self; 3] = [Self::MoveLeft, Self::MoveRight, Self::Rotate];

    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            InputAction::MoveLeft => Direction::Left,
            InputAction::MoveRight => Direction::Right,
            InputAction::Rotate => Direction::Rotate,
        }
    }
}

/// A running game: field, statistics and play state.
///
/// The session is a single owned value and every state change goes through
/// `&mut self`, so a tick and an input can never be applied to it at the
/// same time.
///
/// # Example
///
/// ```
/// use blockfall_engine::{GameSession, InputAction, SequenceShapes, ShapeKind, TickEvent};
///
/// let mut session = GameSession::with_shape_source(SequenceShapes::new([ShapeKind::I]));
/// assert!(session.handle_input(InputAction::MoveRight));
/// assert_eq!(session.tick(), Some(TickEvent::Moved));
/// assert_eq!(session.score(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession<S = UniformShapes> {
    field: GameField<S>,
    stats: GameStats,
    session_state: SessionState,
    last_direction: Option<Direction>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Starts a session with uniformly random shapes.
    #[must_use]
    pub fn new() -> Self {
        Self::with_shape_source(UniformShapes::new())
    }

    /// Starts a session whose shapes are reproducible from `seed`.
    #[must_use]
    pub fn with_seed(seed: ShapeSeed) -> Self {
        Self::with_shape_source(UniformShapes::with_seed(seed))
    }
}

impl<S> GameSession<S>
where
    S: ShapeSource,
{
    #[must_use]
    pub fn with_shape_source(shapes: S) -> Self {
        Self {
            field: GameField::new(shapes),
            stats: GameStats::new(),
            session_state: SessionState::Playing,
            last_direction: None,
        }
    }

    #[must_use]
    pub fn field(&self) -> &GameField<S> {
        &self.field
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.session_state
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.stats.score()
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.stats.elapsed_seconds()
    }

    /// The locked cells, without the falling piece.
    #[must_use]
    pub fn grid_snapshot(&self) -> &Grid {
        self.field.grid()
    }

    /// `None` once the game is over.
    #[must_use]
    pub fn falling_piece(&self) -> Option<&Piece> {
        self.field.falling_piece()
    }

    /// The locked cells with the falling piece stamped in.
    #[must_use]
    pub fn render_grid(&self) -> Grid {
        match self.field.falling_piece() {
            Some(piece) => self.field.grid().with_piece(piece),
            None => self.field.grid().clone(),
        }
    }

    /// The direction most recently asked for, whether or not it was accepted.
    #[must_use]
    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    pub fn toggle_pause(&mut self) {
        self.session_state = match self.session_state {
            SessionState::Playing => SessionState::Paused,
            SessionState::Paused => SessionState::Playing,
            SessionState::GameOver => SessionState::GameOver, // No change from game over
        };
        tracing::info!(state = ?self.session_state, "pause toggled");
    }

    /// Throws the current game away and starts over with an empty grid.
    ///
    /// Works from any state, including game over. The shape source carries
    /// on from where it was.
    pub fn restart(&mut self) {
        self.field.reset();
        self.stats = GameStats::new();
        self.session_state = SessionState::Playing;
        self.last_direction = None;
        tracing::info!("session restarted");
    }

    /// Adds wall-clock time to the session while it is being played.
    pub fn advance_time(&mut self, delta: Duration) {
        if self.session_state.is_playing() {
            self.stats.advance_time(delta);
        }
    }

    /// Applies one gravity step.
    ///
    /// Returns `None` when the session is paused or over. Gravity does not
    /// count as player input, so [`last_direction`](Self::last_direction) is
    /// left as it was.
    pub fn tick(&mut self) -> Option<TickEvent> {
        if !self.session_state.is_playing() {
            return None;
        }
        Some(self.drop_step())
    }

    /// Explicit down input. Moves the piece exactly like a gravity tick.
    pub fn soft_drop(&mut self) -> Option<TickEvent> {
        if !self.session_state.is_playing() {
            return None;
        }
        self.last_direction = Some(Direction::Down);
        Some(self.drop_step())
    }

    /// Applies a player action to the falling piece.
    ///
    /// Returns whether the action was accepted. A rejected action, or any
    /// action while paused or after game over, leaves the piece untouched.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        if !self.session_state.is_playing() {
            return false;
        }
        self.last_direction = Some(action.direction());
        self.field.try_step(action.direction()).is_ok()
    }

    fn drop_step(&mut self) -> TickEvent {
        if self.field.try_step(Direction::Down).is_ok() {
            return TickEvent::Moved;
        }
        self.complete_piece_drop()
    }

    fn complete_piece_drop(&mut self) -> TickEvent {
        let (cleared_lines, result) = self.field.complete_piece_drop();
        self.stats.complete_piece_drop(cleared_lines);
        if result.is_err() {
            self.session_state = SessionState::GameOver;
            tracing::info!(
                score = self.stats.score(),
                pieces = self.stats.completed_pieces(),
                "game over"
            );
            return TickEvent::GameOver;
        }
        TickEvent::Locked { cleared_lines }
    }
}
