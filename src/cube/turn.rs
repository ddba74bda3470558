use crate::prelude::*;

use smallvec::SmallVec;

/// A straight strip of three stickers along one edge of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    Row(u8),
    Col(u8),
}

/// One leg of the four-strip cycle around a turned face.
#[derive(Debug, Clone, Copy)]
struct Leg {
    face: Face,
    line: Line,
    /// Read the strip from its far end.
    reversed: bool,
}

const fn leg(face: Face, line: Line, reversed: bool) -> Leg {
    Leg {
        face,
        line,
        reversed,
    }
}

/// Strips bordering each face, in the order stickers flow during a
/// clockwise turn: leg `k` moves onto leg `k + 1`, the last onto the first.
fn adjacency(face: Face) -> [Leg; 4] {
    use Face::*;
    use Line::*;

    match face {
        Up => [
            leg(Front, Row(0), false),
            leg(Left, Row(0), false),
            leg(Back, Row(0), false),
            leg(Right, Row(0), false),
        ],
        Down => [
            leg(Front, Row(2), false),
            leg(Right, Row(2), false),
            leg(Back, Row(2), false),
            leg(Left, Row(2), false),
        ],
        Right => [
            leg(Up, Col(2), false),
            leg(Back, Col(0), true),
            leg(Down, Col(2), false),
            leg(Front, Col(2), false),
        ],
        Left => [
            leg(Up, Col(0), false),
            leg(Front, Col(0), false),
            leg(Down, Col(0), false),
            leg(Back, Col(2), true),
        ],
        Front => [
            leg(Up, Row(2), false),
            leg(Right, Col(0), false),
            leg(Down, Row(0), true),
            leg(Left, Col(2), true),
        ],
        Back => [
            leg(Up, Row(0), false),
            leg(Left, Col(0), true),
            leg(Down, Row(2), true),
            leg(Right, Col(2), false),
        ],
    }
}

impl Leg {
    fn stickers(self) -> [Sticker; 3] {
        let mut stickers = [0, 1, 2].map(|i| match self.line {
            Line::Row(row) => Sticker::new(self.face, row, i),
            Line::Col(col) => Sticker::new(self.face, i, col),
        });
        if self.reversed {
            stickers.reverse();
        }
        stickers
    }
}

/// Gather permutation: after the move, sticker `i` holds what was at
/// `self.0[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Permutation([u8; Sticker::COUNT]);

impl Permutation {
    fn identity() -> Self {
        let mut p = [0; Sticker::COUNT];
        for (i, slot) in p.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Permutation(p)
    }

    fn clockwise(face: Face) -> Self {
        let mut p = Self::identity();

        for row in 0..3 {
            for col in 0..3 {
                let to = Sticker::new(face, row, col);
                let from = Sticker::new(face, 2 - col, row);
                p.0[to.index()] = from.index() as u8;
            }
        }

        let legs = adjacency(face);
        for k in 0..4 {
            let from = legs[k].stickers();
            let to = legs[(k + 1) % 4].stickers();
            for i in 0..3 {
                p.0[to[i].index()] = from[i].index() as u8;
            }
        }

        p
    }

    /// `self` followed by `then`.
    fn then(&self, then: &Permutation) -> Permutation {
        let mut p = [0; Sticker::COUNT];
        for (i, slot) in p.iter_mut().enumerate() {
            *slot = self.0[then.0[i] as usize];
        }
        Permutation(p)
    }

    fn is_bijection(&self) -> bool {
        let mut seen = [false; Sticker::COUNT];
        for &i in self.0.iter() {
            if std::mem::replace(&mut seen[i as usize], true) {
                return false;
            }
        }
        true
    }

    /// Every read comes from `cube`, every write goes to a fresh array.
    fn permute(&self, cube: &Cube) -> Cube {
        let old = cube.stickers();
        let mut new = *old;
        for (slot, &from) in new.iter_mut().zip(self.0.iter()) {
            *slot = old[from as usize];
        }
        Cube::from_stickers(new)
    }
}

struct TurnTable {
    /// Indexed by `Move::index`.
    moves: Vec<Permutation>,
}

impl TurnTable {
    fn init() -> Self {
        log::debug!("Building turn table");

        let moves = Move::all()
            .map(|m| {
                let cw = Permutation::clockwise(m.face);
                let p = match m.direction {
                    Direction::Clockwise => cw,
                    Direction::CounterClockwise => cw.then(&cw).then(&cw),
                };
                assert!(p.is_bijection(), "turn {} is not a bijection", m);
                p
            })
            .collect();

        TurnTable { moves }
    }

    fn get(&self, move_: Move) -> &Permutation {
        &self.moves[move_.index()]
    }
}

lazy_static::lazy_static! {
    static ref TURN_TABLE: TurnTable = TurnTable::init();
}

/// Applies one quarter turn, leaving `cube` untouched.
pub fn apply(cube: &Cube, move_: Move) -> Cube {
    TURN_TABLE.get(move_).permute(cube)
}

/// Stickers carried along by a turn of `face`: the face itself plus the
/// twelve bordering stickers on its neighbours.
pub fn layer(face: Face) -> SmallVec<[Sticker; 21]> {
    let mut stickers = Sticker::all()
        .filter(|s| s.face == face)
        .collect::<SmallVec<[Sticker; 21]>>();
    for leg in adjacency(face).iter() {
        stickers.extend(leg.stickers().iter().copied());
    }
    stickers
}
