// Backtracking puzzle engines behind one initialize/step/solve/reset lifecycle
pub mod error;
pub mod lifecycle;
pub mod board;
pub mod puzzle;
pub mod puzzles;
pub mod summary;
pub mod registry;

pub use error::{PuzzleError, Result};
pub use lifecycle::Lifecycle;
pub use puzzle::{Puzzle, PuzzleKind, PuzzleParams};
pub use puzzles::{HanoiEngine, KnightEngine, QueensEngine, TourOrdering};
pub use registry::PuzzleRegistry;
pub use summary::{PuzzleSummary, SummaryDetails};
