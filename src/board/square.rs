use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell on an N x N board. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub x: usize,
    pub y: usize,
}

impl Square {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self { Self { x, y } }

    #[inline]
    pub fn in_bounds(self, size: usize) -> bool { self.x < size && self.y < size }

    /// The square reached by `(dx, dy)`, if it stays on a `size` board.
    #[inline]
    pub fn offset(self, (dx, dy): (i32, i32), size: usize) -> Option<Square> {
        let x = self.x as i64 + dx as i64;
        let y = self.y as i64 + dy as i64;
        if x < 0 || y < 0 || x >= size as i64 || y >= size as i64 { return None; }
        Some(Square::new(x as usize, y as usize))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "({},{})", self.x, self.y) }
}

/// The 8 knight jumps, in the order the tour search tries them.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

#[inline]
pub fn is_knight_step(from: Square, to: Square) -> bool {
    let dx = from.x.abs_diff(to.x);
    let dy = from.y.abs_diff(to.y);
    (dx == 1 && dy == 2) || (dx == 2 && dy == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_stays_on_board() {
        let s = Square::new(0, 0);
        assert_eq!(s.offset((2, 1), 5), Some(Square::new(2, 1)));
        assert_eq!(s.offset((-1, 2), 5), None);
        assert_eq!(Square::new(4, 4).offset((1, 2), 5), None);
    }

    #[test]
    fn every_offset_is_a_knight_step() {
        let c = Square::new(3, 3);
        for off in KNIGHT_OFFSETS {
            let t = c.offset(off, 8).unwrap();
            assert!(is_knight_step(c, t), "{off:?}");
        }
        assert!(!is_knight_step(c, Square::new(4, 4)));
        assert!(!is_knight_step(c, Square::new(5, 5)));
    }
}
