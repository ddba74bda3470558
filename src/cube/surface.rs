use crate::prelude::*;

/// Sticker-level cube: one color per grid cell, indexed by `Sticker::index`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    stickers: [Face; Sticker::COUNT],
}

impl super::CubeLike for Cube {
    fn solved() -> Cube {
        let mut stickers = [Face::Up; Sticker::COUNT];
        for sticker in Sticker::all() {
            stickers[sticker.index()] = sticker.face;
        }
        Cube { stickers }
    }

    fn apply(self, move_: Move) -> Self {
        super::turn::apply(&self, move_)
    }
}

impl Cube {
    pub(super) fn from_stickers(stickers: [Face; Sticker::COUNT]) -> Cube {
        Cube { stickers }
    }

    pub(super) fn stickers(&self) -> &[Face; Sticker::COUNT] {
        &self.stickers
    }

    pub fn get(&self, sticker: Sticker) -> Face {
        self.stickers[sticker.index()]
    }

    /// Color index (`0..6`) of the sticker at `row`, `col` of `face`.
    pub fn color_at(&self, face: Face, row: u8, col: u8) -> u8 {
        self.get(Sticker::new(face, row, col)).index()
    }

    pub fn is_solved(&self) -> bool {
        Sticker::all().all(|s| self.get(s) == s.face)
    }

    fn row(&self, face: Face, row: u8) -> Slice {
        Slice([
            self.get(Sticker::new(face, row, 0)),
            self.get(Sticker::new(face, row, 1)),
            self.get(Sticker::new(face, row, 2)),
        ])
    }
}

impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in 0..3 {
            writeln!(f, "    {}", self.row(Face::Up, row))?;
        }

        let middle = [Face::Left, Face::Front, Face::Right, Face::Back];
        for row in 0..3 {
            let line = middle
                .iter()
                .map(|&face| self.row(face, row).to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }

        for row in 0..3 {
            writeln!(f, "    {}", self.row(Face::Down, row))?;
        }

        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
struct Slice([Face; 3]);

impl std::fmt::Display for Slice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}
