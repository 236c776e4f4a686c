use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::{is_knight_step, KnightMove, Square, KNIGHT_OFFSETS};
use crate::error::{PuzzleError, Result};
use crate::lifecycle::Lifecycle;
use crate::puzzle::{Puzzle, PuzzleKind, PuzzleParams, KNIGHT_SIZES};
use crate::summary::{PuzzleSummary, SummaryDetails};

/// Order in which the tour search tries the 8 jumps out of a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TourOrdering {
    /// `KNIGHT_OFFSETS` order at every square.
    #[default]
    Fixed,
    /// Fewest onward moves first; ties keep `KNIGHT_OFFSETS` order.
    Warnsdorff,
}

/// A square on the current path and the jumps still untried from it.
#[derive(Debug, Clone, Copy)]
struct Frame {
    square: Square,
    order: [u8; 8],
    next: u8,
}

enum Advance {
    Moved,
    Missed,
    Backtracked,
    Exhausted,
}

/// Depth-first Knight's Tour search.
///
/// The path from the start square is kept as an explicit stack, so `step`
/// can run one jump attempt at a time and manual moves extend the same path
/// the search works from.
#[derive(Debug, Clone, Default)]
pub struct KnightEngine {
    lc: Lifecycle,
    size: usize,
    start: Square,
    grid: Vec<Option<usize>>,
    path: Vec<Frame>,
    ordering: TourOrdering,
}

impl KnightEngine {
    pub fn new() -> Self { Self::default() }

    pub fn with_start(size: usize, start: Square) -> Result<Self> {
        let mut e = Self::new();
        e.initialize(&PuzzleParams::Knight { board_size: size, start })?;
        Ok(e)
    }

    /// Applies to squares entered from now on; `solve` re-lays the whole path with it.
    pub fn set_ordering(&mut self, ordering: TourOrdering) { self.ordering = ordering; }
    pub fn ordering(&self) -> TourOrdering { self.ordering }

    pub fn board_size(&self) -> usize { self.size }
    pub fn start(&self) -> Square { self.start }
    pub fn total_moves(&self) -> usize { self.path.len() }
    pub fn current(&self) -> Option<Square> { self.path.last().map(|f| f.square) }

    pub fn is_complete(&self) -> bool { self.size > 0 && self.path.len() == self.cells() }

    /// `visit_order()[y][x]` is the 0-based visit index of that square.
    pub fn visit_order(&self) -> Vec<Vec<Option<usize>>> {
        if self.size == 0 { return Vec::new(); }
        self.grid.chunks(self.size).map(|row| row.to_vec()).collect()
    }

    pub fn path(&self) -> Vec<Square> { self.path.iter().map(|f| f.square).collect() }

    pub fn moves(&self) -> Vec<KnightMove> {
        self.path
            .windows(2)
            .enumerate()
            .map(|(i, w)| KnightMove { from: w[0].square, to: w[1].square, index: i + 1 })
            .collect()
    }

    /// Unvisited squares one jump away from the knight, in offset order.
    pub fn possible_moves(&self) -> Vec<Square> {
        let Some(cur) = self.current() else { return Vec::new() };
        KNIGHT_OFFSETS.iter().filter_map(|&off| self.open_target(cur, off)).collect()
    }

    /// `possible_moves` sorted by how many onward moves each target leaves.
    pub fn warnsdorff_moves(&self) -> Vec<Square> {
        let mut moves = self.possible_moves();
        moves.sort_by_key(|&sq| self.degree(sq));
        moves
    }

    /// Manual jump. `from` must be the most recently visited square.
    pub fn move_knight(&mut self, from: Square, to: Square) -> Result<bool> {
        self.lc.ensure_initialized("move")?;
        if self.lc.is_solved() || !from.in_bounds(self.size) || !to.in_bounds(self.size) {
            return Ok(false);
        }
        if self.current() != Some(from) || self.grid[self.idx(to)].is_some() || !is_knight_step(from, to) {
            return Ok(false);
        }
        self.visit(to);
        self.lc.record_step();
        if self.is_complete() && self.is_valid_solution() { self.complete(); }
        Ok(true)
    }

    fn cells(&self) -> usize { self.size * self.size }

    fn idx(&self, sq: Square) -> usize { sq.y * self.size + sq.x }

    fn open_target(&self, from: Square, off: (i32, i32)) -> Option<Square> {
        from.offset(off, self.size).filter(|&t| self.grid[self.idx(t)].is_none())
    }

    fn degree(&self, sq: Square) -> usize {
        KNIGHT_OFFSETS.iter().filter(|&&off| self.open_target(sq, off).is_some()).count()
    }

    fn frame(&self, square: Square) -> Frame {
        let mut order = [0, 1, 2, 3, 4, 5, 6, 7];
        if self.ordering == TourOrdering::Warnsdorff {
            // Dead jumps sort last; they are still attempted and counted.
            order.sort_by_key(|&i| {
                self.open_target(square, KNIGHT_OFFSETS[i as usize]).map_or(usize::MAX, |t| self.degree(t))
            });
        }
        Frame { square, order, next: 0 }
    }

    fn visit(&mut self, sq: Square) {
        let i = self.idx(sq);
        self.grid[i] = Some(self.path.len());
        // Entered square counts as visited before its own onward degrees are measured.
        let frame = self.frame(sq);
        self.path.push(frame);
    }

    fn lay_out(&mut self) {
        self.grid = vec![None; self.cells()];
        self.path.clear();
        self.visit(self.start);
    }

    fn complete(&mut self) {
        self.lc.mark_completed();
        info!("knight: {}x{} tour from {} found in {} steps", self.size, self.size, self.start, self.lc.steps());
    }

    fn advance(&mut self) -> Advance {
        let Some(top) = self.path.last_mut() else { return Advance::Exhausted };
        if (top.next as usize) < top.order.len() {
            let off = KNIGHT_OFFSETS[top.order[top.next as usize] as usize];
            top.next += 1;
            let from = top.square;
            self.lc.record_step();
            return match self.open_target(from, off) {
                Some(to) => {
                    self.visit(to);
                    Advance::Moved
                }
                None => Advance::Missed,
            };
        }
        if self.path.len() == 1 { return Advance::Exhausted; }
        if let Some(dead) = self.path.pop() {
            let i = self.idx(dead.square);
            self.grid[i] = None;
            trace!("knight: backtrack from {} at depth {}", dead.square, self.path.len());
        }
        Advance::Backtracked
    }
}

impl Puzzle for KnightEngine {
    fn kind(&self) -> PuzzleKind { PuzzleKind::Knight }

    fn initialize(&mut self, params: &PuzzleParams) -> Result<()> {
        let PuzzleParams::Knight { board_size, start } = *params else {
            return Err(PuzzleError::ParamsMismatch { expected: "knight", got: params.kind().name() });
        };
        if !KNIGHT_SIZES.contains(&board_size) {
            return Err(PuzzleError::out_of_range("board size", board_size, &KNIGHT_SIZES));
        }
        let on_board = 0..=board_size - 1;
        if !on_board.contains(&start.x) {
            return Err(PuzzleError::out_of_range("start x", start.x, &on_board));
        }
        if !on_board.contains(&start.y) {
            return Err(PuzzleError::out_of_range("start y", start.y, &on_board));
        }
        self.size = board_size;
        self.start = start;
        self.lay_out();
        self.lc.initialize();
        debug!("knight: initialized {board_size}x{board_size} board from {start}");
        Ok(())
    }

    fn step(&mut self) -> Result<bool> {
        if !self.lc.begin_step("step")? { return Ok(false); }
        match self.advance() {
            Advance::Exhausted => Ok(false),
            Advance::Moved => {
                if self.is_complete() { self.complete(); }
                Ok(true)
            }
            Advance::Missed | Advance::Backtracked => Ok(true),
        }
    }

    fn solve(&mut self) -> Result<bool> {
        if !self.lc.begin_step("solve")? { return Ok(false); }
        debug!("knight: solving {}x{} from {} ({:?})", self.size, self.size, self.start, self.ordering);
        self.lay_out();
        loop {
            match self.advance() {
                Advance::Moved if self.is_complete() => {
                    self.complete();
                    return Ok(true);
                }
                Advance::Exhausted => {
                    debug!("knight: no tour from {} after {} steps", self.start, self.lc.steps());
                    return Ok(false);
                }
                _ => {}
            }
        }
    }

    fn is_valid_solution(&self) -> bool {
        if self.size == 0 { return false; }
        let cells = self.cells();
        let mut by_index: Vec<Option<Square>> = vec![None; cells];
        for (i, v) in self.grid.iter().enumerate() {
            match *v {
                Some(n) if n < cells && by_index[n].is_none() => {
                    by_index[n] = Some(Square::new(i % self.size, i / self.size));
                }
                _ => return false,
            }
        }
        by_index.windows(2).all(|w| match (w[0], w[1]) {
            (Some(a), Some(b)) => is_knight_step(a, b),
            _ => false,
        })
    }

    fn reset(&mut self) {
        let ordering = self.ordering;
        *self = Self::default();
        self.ordering = ordering;
        debug!("knight: reset");
    }

    fn lifecycle(&self) -> &Lifecycle { &self.lc }

    fn create_summary(&self, completed: bool) -> PuzzleSummary {
        PuzzleSummary::from_lifecycle(
            &self.lc,
            completed,
            SummaryDetails::Knight { board_size: self.size, start: self.start, total_moves: self.total_moves() },
        )
    }

    fn render(&self) -> String { self.to_string() }
}

impl fmt::Display for KnightEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.visit_order() {
            let cells: Vec<String> = row
                .iter()
                .map(|v| v.map_or_else(|| "..".to_string(), |n| format!("{n:2}")))
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
