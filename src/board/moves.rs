use serde::{Deserialize, Serialize};
use std::fmt;

use super::square::Square;

/// One Hanoi transition. Towers are 0-based; `Display` prints them 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HanoiMove {
    pub from: usize,
    pub to: usize,
    pub disk: usize,
}

impl HanoiMove {
    pub const fn new(from: usize, to: usize, disk: usize) -> Self { Self { from, to, disk } }
}

impl fmt::Display for HanoiMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "move disk {} from tower {} to tower {}", self.disk, self.from + 1, self.to + 1)
    }
}

/// One knight jump; `index` is the visitation index of `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KnightMove {
    pub from: Square,
    pub to: Square,
    pub index: usize,
}

impl fmt::Display for KnightMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} -> {}", self.index, self.from, self.to)
    }
}
