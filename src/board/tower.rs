use serde::{Deserialize, Serialize};
use std::fmt;

pub const TOWER_COUNT: usize = 3;

/// A Hanoi disk; 1 is the smallest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Disk(pub usize);

impl Disk {
    pub fn size(self) -> usize { self.0 }
}

/// One peg. Disks are stored bottom to top and sizes strictly decrease upwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tower {
    id: usize,
    disks: Vec<Disk>,
}

impl Tower {
    pub fn new(id: usize) -> Self { Self { id, disks: Vec::new() } }

    /// A tower holding `n..=1`, largest at the bottom.
    pub fn full(id: usize, n: usize) -> Self {
        Self { id, disks: (1..=n).rev().map(Disk).collect() }
    }

    pub fn id(&self) -> usize { self.id }
    pub fn len(&self) -> usize { self.disks.len() }
    pub fn is_empty(&self) -> bool { self.disks.is_empty() }
    pub fn peek(&self) -> Option<Disk> { self.disks.last().copied() }
    pub fn disks(&self) -> &[Disk] { &self.disks }

    pub fn can_place(&self, disk: Disk) -> bool {
        self.peek().map_or(true, |top| disk.size() < top.size())
    }

    /// Pushes `disk` if it is smaller than the current top; returns whether it was placed.
    pub(crate) fn push(&mut self, disk: Disk) -> bool {
        if !self.can_place(disk) { return false; }
        self.disks.push(disk);
        true
    }

    pub(crate) fn pop(&mut self) -> Option<Disk> { self.disks.pop() }

    pub fn is_ordered(&self) -> bool {
        self.disks.windows(2).all(|w| w[0].size() > w[1].size())
    }
}

impl fmt::Display for Tower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tower {}: ", self.id + 1)?;
        if self.disks.is_empty() { return write!(f, "empty"); }
        let sizes: Vec<String> = self.disks.iter().map(|d| d.size().to_string()).collect();
        write!(f, "[{}]", sizes.join(" "))
    }
}
