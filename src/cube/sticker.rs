use crate::prelude::*;

/// A single grid cell: `row` and `col` are in `0..3`, as seen looking at
/// `face` from outside the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sticker {
    pub face: Face,
    pub row: u8,
    pub col: u8,
}

impl Sticker {
    pub const COUNT: usize = 54;

    pub fn new(face: Face, row: u8, col: u8) -> Sticker {
        debug_assert!(row < 3 && col < 3);
        Sticker { face, row, col }
    }

    pub fn all() -> impl Iterator<Item = Sticker> {
        all_faces().flat_map(|face| {
            (0..3).flat_map(move |row| (0..3).map(move |col| Sticker { face, row, col }))
        })
    }

    pub fn index(self) -> usize {
        self.face.index() as usize * 9 + self.row as usize * 3 + self.col as usize
    }

    pub fn is_center(self) -> bool {
        self.row == 1 && self.col == 1
    }
}

fn all_faces() -> impl Iterator<Item = Face> {
    enum_iterator::all()
}
