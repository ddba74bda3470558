use crate::prelude::*;

mod sticker;
mod surface;
mod turn;

pub use sticker::Sticker;
pub use surface::Cube;
pub use turn::layer;

pub trait CubeLike: Sized + core::fmt::Debug + Eq {
    fn solved() -> Self;
    fn apply(self, move_: Move) -> Self;

    fn apply_all(self, moves: impl IntoIterator<Item = Move>) -> Self {
        moves.into_iter().fold(self, |cube, m| cube.apply(m))
    }
}

/// One side of the cube. Also used as a sticker color, since face `i` is
/// entirely color `i` when solved.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, enum_iterator::Sequence,
)]
pub enum Face {
    Up,
    Down,
    Left,
    Right,
    Front,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Face {
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Face::Left | Face::Right => Axis::X,
            Face::Up | Face::Down => Axis::Y,
            Face::Front | Face::Back => Axis::Z,
        }
    }

    /// Which end of its axis this face sits on.
    pub fn layer_sign(self) -> i8 {
        match self {
            Face::Up | Face::Right | Face::Front => 1,
            Face::Down | Face::Left | Face::Back => -1,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
