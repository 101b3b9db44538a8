use std::ops::{Add, Sub};

use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

/// A (column, row) pair.
///
/// Used both for offsets in a shape's local frame and for absolute grid
/// positions. Columns grow rightward and rows grow downward. Components are
/// signed because rotating about a pivot can move a local offset above or to
/// the left of the frame origin.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Coord {
    pub col: i32,
    pub row: i32,
}

impl Coord {
    pub const ORIGIN: Self = Self::new(0, 0);

    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    #[must_use]
    pub const fn below(self) -> Self {
        Self::new(self.col, self.row + 1)
    }
}

impl Add for Coord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.col + rhs.col, self.row + rhs.row)
    }
}

impl Sub for Coord {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.col - rhs.col, self.row - rhs.row)
    }
}

/// The five shapes of the catalog.
///
/// This is a reduced set: the classic Z and L pieces are not part of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[repr(u8)]
pub enum ShapeKind {
    /// Four cells in a row.
    I = 0,
    /// Vertical three with a foot to the left.
    J = 1,
    /// 2×2 square.
    O = 2,
    /// Bent shape, step down to the right.
    S = 3,
    /// Three in a row with a nub on top.
    T = 4,
}

impl Distribution<ShapeKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ShapeKind {
        match rng.random_range(0..ShapeKind::LEN) {
            0 => ShapeKind::I,
            1 => ShapeKind::J,
            2 => ShapeKind::O,
            3 => ShapeKind::S,
            _ => ShapeKind::T,
        }
    }
}

impl ShapeKind {
    /// Number of shapes in the catalog.
    pub const LEN: usize = 5;

    pub const ALL: [Self; Self::LEN] = [Self::I, Self::J, Self::O, Self::S, Self::T];

    /// Returns the shape's four cells in its local frame, in catalog order.
    ///
    /// The order matters: the third cell is the rotation pivot.
    #[must_use]
    pub const fn cells(self) -> [Coord; 4] {
        SHAPE_CELLS[self as usize]
    }

    /// Returns the rotation pivot, the third listed cell.
    #[must_use]
    pub const fn pivot(self) -> Coord {
        SHAPE_CELLS[self as usize][2]
    }

    /// Returns the single character representation of this shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::I.as_char(), 'I');
    /// assert_eq!(ShapeKind::T.as_char(), 'T');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            ShapeKind::I => 'I',
            ShapeKind::J => 'J',
            ShapeKind::O => 'O',
            ShapeKind::S => 'S',
            ShapeKind::T => 'T',
        }
    }

    /// Parses a shape from a single character.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_char('O'), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_char('Z'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(ShapeKind::I),
            'J' => Some(ShapeKind::J),
            'O' => Some(ShapeKind::O),
            'S' => Some(ShapeKind::S),
            'T' => Some(ShapeKind::T),
            _ => None,
        }
    }
}

const SHAPE_CELLS: [[Coord; 4]; ShapeKind::LEN] = {
    const fn c(col: i32, row: i32) -> Coord {
        Coord::new(col, row)
    }

    [
        // I
        [c(0, 0), c(1, 0), c(2, 0), c(3, 0)],
        // J
        [c(1, 0), c(1, 1), c(1, 2), c(0, 2)],
        // O
        [c(0, 0), c(0, 1), c(1, 0), c(1, 1)],
        // S
        [c(0, 0), c(1, 0), c(1, 1), c(2, 1)],
        // T
        [c(1, 0), c(0, 1), c(1, 1), c(2, 1)],
    ]
};
