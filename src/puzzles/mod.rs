pub mod queens;
pub mod knight;
pub mod hanoi;

pub use queens::QueensEngine;
pub use knight::{KnightEngine, TourOrdering};
pub use hanoi::{HanoiEngine, optimal_plan};
