use crate::cube::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, enum_iterator::Sequence)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn sign(self) -> i8 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

impl Move {
    pub fn new(face: Face, direction: Direction) -> Move {
        Move { face, direction }
    }

    pub fn all() -> impl Iterator<Item = Move> {
        enum_iterator::all::<Face>().flat_map(|face| {
            enum_iterator::all::<Direction>().map(move |direction| Move { face, direction })
        })
    }

    /// Position of this move in `Move::all()`.
    pub fn index(self) -> usize {
        self.face.index() as usize * 2
            + match self.direction {
                Direction::Clockwise => 0,
                Direction::CounterClockwise => 1,
            }
    }

    pub fn reverse(self) -> Move {
        Move {
            face: self.face,
            direction: self.direction.reverse(),
        }
    }

    pub fn parse_sequence(s: &str) -> anyhow::Result<Vec<Move>> {
        s.split_whitespace().map(|s| s.parse()).collect()
    }
}

/// The sequence that undoes `moves`.
pub fn inverse_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|m| m.reverse()).collect()
}

pub fn random_sequence<R: rand::Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<Move> {
    use rand::seq::SliceRandom;

    let alphabet = Move::all().collect::<Vec<_>>();
    (0..len)
        .map(|_| *alphabet.choose(rng).unwrap_or_else(|| unreachable!()))
        .collect()
}

impl core::str::FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Move> {
        let mut chars = s.chars();
        let face_char = match chars.next() {
            Some(c) => c,
            None => return Err(anyhow::anyhow!("No face for move")),
        };

        let face = match face_char {
            'F' | 'f' => Face::Front,
            'R' | 'r' => Face::Right,
            'U' | 'u' => Face::Up,
            'L' | 'l' => Face::Left,
            'B' | 'b' => Face::Back,
            'D' | 'd' => Face::Down,
            _ => return Err(anyhow::anyhow!("Unrecognized face {}", face_char)),
        };

        let direction = match chars.next() {
            None => Direction::Clockwise,
            Some('\'') => Direction::CounterClockwise,
            Some(c) => return Err(anyhow::anyhow!("Unrecognized direction {}", c)),
        };

        if let Some(c) = chars.next() {
            return Err(anyhow::anyhow!("Trailing {} after move {}", c, s));
        }

        Ok(Move { face, direction })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.face)?;
        if self.direction == Direction::CounterClockwise {
            write!(f, "'")?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Move {
    fn arbitrary<G: quickcheck::Gen>(g: &mut G) -> Move {
        random_sequence(g, 1)[0]
    }
}
