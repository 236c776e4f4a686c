// Value types shared by the engines: board squares, knight offsets, Hanoi pegs and move records.
pub mod square;
pub mod tower;
pub mod moves;

pub use square::{Square, KNIGHT_OFFSETS, is_knight_step};
pub use tower::{Disk, Tower, TOWER_COUNT};
pub use moves::{HanoiMove, KnightMove};
