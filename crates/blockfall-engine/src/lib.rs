pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// The piece would overlap locked cells or leave the grid.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("piece colliding when moving falling piece")]
pub struct PieceCollisionError;

/// The next piece could not be placed because its spawn cells are occupied.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("piece colliding when spawning next piece")]
pub struct SpawnCollisionError;

#[derive(Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseShapeSequenceError {
    #[display("shape sequence must not be empty")]
    Empty,
    #[display("invalid shape {_0:?}: expected one of I, J, O, S, T")]
    InvalidShape(#[error(not(source))] char),
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ParseShapeSeedError {
    #[display("invalid seed: expected 32 hex characters, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    #[display("invalid seed: {_0}")]
    InvalidHex(std::num::ParseIntError),
}
