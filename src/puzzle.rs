use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::board::Square;
use crate::error::Result;
use crate::lifecycle::Lifecycle;
use crate::puzzles::{HanoiEngine, KnightEngine, QueensEngine};
use crate::summary::PuzzleSummary;

pub const QUEENS_SIZES: RangeInclusive<usize> = 4..=12;
pub const KNIGHT_SIZES: RangeInclusive<usize> = 5..=8;
pub const HANOI_DISKS: RangeInclusive<usize> = 3..=10;

pub const DEFAULT_QUEENS_SIZE: usize = 8;
pub const DEFAULT_KNIGHT_SIZE: usize = 8;
pub const DEFAULT_HANOI_DISKS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PuzzleKind {
    Queens,
    Knight,
    Hanoi,
}

impl PuzzleKind {
    pub const ALL: [PuzzleKind; 3] = [PuzzleKind::Queens, PuzzleKind::Knight, PuzzleKind::Hanoi];

    pub fn name(self) -> &'static str {
        match self {
            PuzzleKind::Queens => "N-Queens",
            PuzzleKind::Knight => "Knight's Tour",
            PuzzleKind::Hanoi => "Tower of Hanoi",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PuzzleKind::Queens => "Place N queens on an N x N board so that none attacks another",
            PuzzleKind::Knight => "Visit every square of the board exactly once with a knight",
            PuzzleKind::Hanoi => "Move the whole stack of disks from the first tower to the last",
        }
    }

    pub fn default_params(self) -> PuzzleParams {
        match self {
            PuzzleKind::Queens => PuzzleParams::Queens { board_size: DEFAULT_QUEENS_SIZE },
            PuzzleKind::Knight => PuzzleParams::Knight { board_size: DEFAULT_KNIGHT_SIZE, start: Square::new(0, 0) },
            PuzzleKind::Hanoi => PuzzleParams::Hanoi { disks: DEFAULT_HANOI_DISKS },
        }
    }

    /// Fresh, uninitialized engine for this kind.
    pub fn create(self) -> Box<dyn Puzzle + Send> {
        match self {
            PuzzleKind::Queens => Box::new(QueensEngine::new()),
            PuzzleKind::Knight => Box::new(KnightEngine::new()),
            PuzzleKind::Hanoi => Box::new(HanoiEngine::new()),
        }
    }
}

impl fmt::Display for PuzzleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

impl FromStr for PuzzleKind {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "queens" | "q" => Ok(PuzzleKind::Queens),
            "knight" | "k" => Ok(PuzzleKind::Knight),
            "hanoi" | "h" => Ok(PuzzleKind::Hanoi),
            other => Err(format!("unknown puzzle: {other}")),
        }
    }
}

/// Parameters accepted by `Puzzle::initialize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PuzzleParams {
    Queens { board_size: usize },
    Knight { board_size: usize, start: Square },
    Hanoi { disks: usize },
}

impl PuzzleParams {
    pub fn kind(&self) -> PuzzleKind {
        match self {
            PuzzleParams::Queens { .. } => PuzzleKind::Queens,
            PuzzleParams::Knight { .. } => PuzzleKind::Knight,
            PuzzleParams::Hanoi { .. } => PuzzleKind::Hanoi,
        }
    }
}

/// The lifecycle every engine exposes to callers.
///
/// `step` and `solve` return `Ok(false)` when there is nothing more to do
/// (or the search space is exhausted); they only error before `initialize`.
pub trait Puzzle {
    fn kind(&self) -> PuzzleKind;

    /// Validates `params` and lays out a fresh board. Nothing changes on error.
    fn initialize(&mut self, params: &PuzzleParams) -> Result<()>;

    /// One incremental action.
    fn step(&mut self) -> Result<bool>;

    /// Runs to completion.
    fn solve(&mut self) -> Result<bool>;

    fn is_valid_solution(&self) -> bool;

    fn reset(&mut self);

    fn lifecycle(&self) -> &Lifecycle;

    /// Materializes the current state for storage.
    fn create_summary(&self, completed: bool) -> PuzzleSummary;

    /// Human-readable board.
    fn render(&self) -> String;

    fn is_solved(&self) -> bool { self.lifecycle().is_solved() }

    fn steps(&self) -> u64 { self.lifecycle().steps() }
}
