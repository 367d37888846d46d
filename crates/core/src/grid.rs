//! Square grid addressing with orthogonal adjacency.

use crate::types::{CellIndex, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Saturates for sizes whose square does not fit in `usize`.
    pub fn cell_count(&self) -> usize {
        self.size.checked_mul(self.size).unwrap_or(usize::MAX)
    }

    pub fn contains(&self, index: CellIndex) -> bool {
        index < self.cell_count()
    }

    /// Centre-ish start cell. For even sizes this is `N²/2 + N/2`.
    pub fn center(&self) -> CellIndex {
        (self.size / 2) * self.size + self.size / 2
    }

    pub fn pos_of(&self, index: CellIndex) -> Pos {
        Pos { y: (index / self.size) as i32, x: (index % self.size) as i32 }
    }

    pub fn index_of(&self, pos: Pos) -> Option<CellIndex> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(pos.y as usize * self.size + pos.x as usize)
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.size && (pos.y as usize) < self.size
    }

    /// In-bounds orthogonal neighbours in up, down, left, right order.
    pub fn neighbors(&self, index: CellIndex) -> impl Iterator<Item = CellIndex> + '_ {
        let pos = self.pos_of(index);
        [
            Pos { y: pos.y - 1, x: pos.x },
            Pos { y: pos.y + 1, x: pos.x },
            Pos { y: pos.y, x: pos.x - 1 },
            Pos { y: pos.y, x: pos.x + 1 },
        ]
        .into_iter()
        .filter_map(move |candidate| self.index_of(candidate))
    }

    pub fn are_adjacent(&self, a: CellIndex, b: CellIndex) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        manhattan(self.pos_of(a), self.pos_of(b)) == 1
    }
}

pub(crate) fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}
