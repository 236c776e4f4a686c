use log::{debug, info, trace};
use std::fmt;

use crate::error::{PuzzleError, Result};
use crate::lifecycle::Lifecycle;
use crate::puzzle::{Puzzle, PuzzleKind, PuzzleParams, QUEENS_SIZES};
use crate::summary::{PuzzleSummary, SummaryDetails};

/// Where the incremental search tries next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trial {
    At { row: usize, col: usize },
    Exhausted,
}

/// Row-by-row backtracking N-Queens.
///
/// `queens[row]` holds the column of that row's queen. `solve` runs the full
/// search; `step` performs the same search one column trial at a time, so a
/// run of `step` calls ends on the same board with the same step count.
#[derive(Debug, Clone)]
pub struct QueensEngine {
    lc: Lifecycle,
    size: usize,
    queens: Vec<Option<usize>>,
    trial: Trial,
}

impl Default for QueensEngine {
    fn default() -> Self {
        Self { lc: Lifecycle::new(), size: 0, queens: Vec::new(), trial: Trial::At { row: 0, col: 0 } }
    }
}

impl QueensEngine {
    pub fn new() -> Self { Self::default() }

    /// Initialized engine for an `n` x `n` board.
    pub fn with_size(n: usize) -> Result<Self> {
        let mut e = Self::new();
        e.initialize(&PuzzleParams::Queens { board_size: n })?;
        Ok(e)
    }

    pub fn board_size(&self) -> usize { self.size }

    /// Column per row, `None` where the row is empty.
    pub fn queens(&self) -> Vec<Option<usize>> { self.queens.clone() }

    /// `board[row][col]` is true where a queen stands.
    pub fn board(&self) -> Vec<Vec<bool>> {
        (0..self.size)
            .map(|r| (0..self.size).map(|c| self.queens[r] == Some(c)).collect())
            .collect()
    }

    pub fn placed(&self) -> usize { self.queens.iter().filter(|q| q.is_some()).count() }

    /// Row the incremental search works on, `None` once it has run out of candidates.
    pub fn search_row(&self) -> Option<usize> {
        match self.trial {
            Trial::At { row, .. } => Some(row),
            Trial::Exhausted => None,
        }
    }

    /// True when `(row, col)` is not attacked by any queen in another row.
    pub fn is_safe(&self, row: usize, col: usize) -> bool {
        self.queens.iter().enumerate().all(|(r, q)| match *q {
            Some(c) if r != row => !attacks(r, c, row, col),
            _ => true,
        })
    }

    // Only rows above `row` matter during the row-by-row search.
    fn is_safe_above(&self, row: usize, col: usize) -> bool {
        self.queens[..row].iter().enumerate().all(|(r, q)| match *q {
            Some(c) => !attacks(r, c, row, col),
            None => true,
        })
    }

    /// Places a queen; a queen already in `row` is replaced.
    /// Returns `Ok(false)` without touching the board if the square is attacked.
    pub fn place_queen(&mut self, row: usize, col: usize) -> Result<bool> {
        self.lc.ensure_initialized("place_queen")?;
        if self.lc.is_solved() || row >= self.size || col >= self.size || !self.is_safe(row, col) {
            return Ok(false);
        }
        self.queens[row] = Some(col);
        self.lc.record_step();
        if self.is_valid_solution() { self.complete(); }
        Ok(true)
    }

    pub fn remove_queen(&mut self, row: usize, col: usize) -> Result<bool> {
        self.lc.ensure_initialized("remove_queen")?;
        if self.lc.is_solved() || row >= self.size || self.queens[row] != Some(col) {
            return Ok(false);
        }
        self.queens[row] = None;
        self.lc.record_step();
        Ok(true)
    }

    fn clear_board(&mut self) {
        self.queens = vec![None; self.size];
        self.trial = Trial::At { row: 0, col: 0 };
    }

    fn complete(&mut self) {
        self.lc.mark_completed();
        info!("queens: {}x{} solved in {} steps", self.size, self.size, self.lc.steps());
    }

    fn place_from(&mut self, row: usize) -> bool {
        if row >= self.size { return true; }
        for col in 0..self.size {
            self.lc.record_step();
            if !self.is_safe_above(row, col) { continue; }
            self.queens[row] = Some(col);
            if self.place_from(row + 1) { return true; }
            self.queens[row] = None;
        }
        false
    }

    // Walk back while the current trial row has no columns left.
    fn unwind(&mut self) {
        while let Trial::At { row, col } = self.trial {
            if col < self.size { break; }
            if row == 0 {
                self.trial = Trial::Exhausted;
                break;
            }
            let prev = row - 1;
            // A row emptied by hand starts over instead of counting as tried.
            let next = self.queens[prev].take().map_or(0, |c| c + 1);
            trace!("queens: row {row} exhausted, back to row {prev} col {next}");
            self.trial = Trial::At { row: prev, col: next };
        }
    }
}

fn attacks(r1: usize, c1: usize, r2: usize, c2: usize) -> bool {
    c1 == c2 || r1.abs_diff(r2) == c1.abs_diff(c2)
}

impl Puzzle for QueensEngine {
    fn kind(&self) -> PuzzleKind { PuzzleKind::Queens }

    fn initialize(&mut self, params: &PuzzleParams) -> Result<()> {
        let PuzzleParams::Queens { board_size } = *params else {
            return Err(PuzzleError::ParamsMismatch { expected: "queens", got: params.kind().name() });
        };
        if !QUEENS_SIZES.contains(&board_size) {
            return Err(PuzzleError::out_of_range("board size", board_size, &QUEENS_SIZES));
        }
        self.size = board_size;
        self.clear_board();
        self.lc.initialize();
        debug!("queens: initialized {board_size}x{board_size} board");
        Ok(())
    }

    fn step(&mut self) -> Result<bool> {
        if !self.lc.begin_step("step")? { return Ok(false); }
        let Trial::At { row, col } = self.trial else { return Ok(false) };
        let (row, col) = match self.queens[..row].iter().position(Option::is_none) {
            Some(empty) => {
                trace!("queens: row {empty} was cleared, search resumes there");
                (empty, 0)
            }
            None => (row, col),
        };
        self.lc.record_step();
        if self.is_safe_above(row, col) {
            self.queens[row] = Some(col);
            if row + 1 < self.size {
                self.queens[row + 1] = None;
                self.trial = Trial::At { row: row + 1, col: 0 };
            } else {
                // Every row above is filled and pairwise safe.
                debug_assert!(self.is_valid_solution());
                self.trial = Trial::At { row: self.size, col: 0 };
                self.complete();
                return Ok(true);
            }
        } else {
            self.trial = Trial::At { row, col: col + 1 };
        }
        self.unwind();
        Ok(true)
    }

    fn solve(&mut self) -> Result<bool> {
        if !self.lc.begin_step("solve")? { return Ok(false); }
        debug!("queens: solving {}x{}", self.size, self.size);
        self.clear_board();
        let solved = self.place_from(0);
        if solved {
            self.trial = Trial::At { row: self.size, col: 0 };
            self.complete();
        } else {
            self.trial = Trial::Exhausted;
        }
        Ok(solved)
    }

    fn is_valid_solution(&self) -> bool {
        if self.size == 0 || self.queens.iter().any(Option::is_none) { return false; }
        for r1 in 0..self.size {
            for r2 in r1 + 1..self.size {
                if let (Some(c1), Some(c2)) = (self.queens[r1], self.queens[r2]) {
                    if attacks(r1, c1, r2, c2) { return false; }
                }
            }
        }
        true
    }

    fn reset(&mut self) {
        *self = Self::default();
        debug!("queens: reset");
    }

    fn lifecycle(&self) -> &Lifecycle { &self.lc }

    fn create_summary(&self, completed: bool) -> PuzzleSummary {
        PuzzleSummary::from_lifecycle(&self.lc, completed, SummaryDetails::Queens { board_size: self.size })
    }

    fn render(&self) -> String { self.to_string() }
}

impl fmt::Display for QueensEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for q in &self.queens {
            let row: Vec<&str> = (0..self.size).map(|c| if *q == Some(c) { "Q" } else { "." }).collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}
