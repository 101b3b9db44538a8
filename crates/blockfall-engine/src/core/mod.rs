pub use self::{grid::*, piece::*, rotation::*, shape::*};

pub(crate) mod grid;
pub(crate) mod piece;
pub(crate) mod rotation;
pub(crate) mod shape;
