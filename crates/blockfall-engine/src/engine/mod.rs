//! Game engine logic and state management.
//!
//! This module builds the game rules on top of the [`core`](crate::core)
//! data structures:
//!
//! - [`validator`] - Legality checks for drops, lateral moves and rotation
//! - [`ShapeSource`] - Where new pieces come from ([`UniformShapes`], [`SequenceShapes`])
//! - [`GameField`] - Grid plus falling piece; moves, locks and spawns
//! - [`GameStats`] - Score, cleared lines, locked pieces and play time
//! - [`GameSession`] - Ticks, player input, pause, restart and game over
//!
//! # Game Flow
//!
//! 1. Create a [`GameSession`], optionally with a seed or a scripted source
//! 2. On each gravity tick call [`GameSession::tick`]: the piece either
//!    descends one row or is locked, full rows are cleared, and the next
//!    piece spawns
//! 3. Forward player actions to [`GameSession::handle_input`]
//! 4. The game ends when a new piece cannot be placed; only
//!    [`GameSession::restart`] leaves that state
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{GameSession, InputAction, TickEvent};
//!
//! let mut session = GameSession::new();
//! session.handle_input(InputAction::MoveRight);
//!
//! loop {
//!     match session.tick() {
//!         Some(TickEvent::Moved) => continue,
//!         Some(TickEvent::Locked { cleared_lines }) => {
//!             println!("locked, {cleared_lines} rows cleared");
//!             break;
//!         }
//!         Some(TickEvent::GameOver) | None => break,
//!     }
//! }
//! ```

pub use self::{
    game_field::*,
    game_session::*,
    game_stats::*,
    shape_source::*,
    validator::{Direction, Side},
};

mod game_field;
mod game_session;
mod game_stats;
mod shape_source;
pub mod validator;
