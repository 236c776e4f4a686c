use std::collections::HashMap;

use crate::puzzle::{Puzzle, PuzzleKind};

/// One live engine per puzzle kind, created on first use.
#[derive(Default)]
pub struct PuzzleRegistry {
    active: HashMap<PuzzleKind, Box<dyn Puzzle + Send>>,
}

impl PuzzleRegistry {
    pub fn new() -> Self { Self::default() }

    pub fn get(&mut self, kind: PuzzleKind) -> &mut (dyn Puzzle + Send) {
        self.active.entry(kind).or_insert_with(|| kind.create()).as_mut()
    }

    pub fn contains(&self, kind: PuzzleKind) -> bool { self.active.contains_key(&kind) }

    pub fn remove(&mut self, kind: PuzzleKind) -> Option<Box<dyn Puzzle + Send>> { self.active.remove(&kind) }

    pub fn reset_all(&mut self) {
        for p in self.active.values_mut() { p.reset(); }
    }

    pub fn clear(&mut self) { self.active.clear(); }

    pub fn len(&self) -> usize { self.active.len() }

    pub fn is_empty(&self) -> bool { self.active.is_empty() }
}
