use log::{debug, info};
use std::fmt;

use crate::board::{HanoiMove, Tower, TOWER_COUNT};
use crate::error::{PuzzleError, Result};
use crate::lifecycle::Lifecycle;
use crate::puzzle::{Puzzle, PuzzleKind, PuzzleParams, HANOI_DISKS};
use crate::summary::{PuzzleSummary, SummaryDetails};

const SOURCE: usize = 0;
const SPARE: usize = 1;
const TARGET: usize = 2;

/// The canonical `2^n - 1` move sequence taking `n` disks from tower 0 to tower 2.
pub fn optimal_plan(n: usize) -> Vec<HanoiMove> {
    let mut out = Vec::with_capacity((1usize << n).saturating_sub(1));
    plan_into(n, SOURCE, TARGET, SPARE, &mut out);
    out
}

fn plan_into(n: usize, from: usize, to: usize, aux: usize, out: &mut Vec<HanoiMove>) {
    if n == 0 { return; }
    if n == 1 {
        out.push(HanoiMove::new(from, to, 1));
        return;
    }
    plan_into(n - 1, from, aux, to, out);
    out.push(HanoiMove::new(from, to, n));
    plan_into(n - 1, aux, to, from, out);
}

/// Three-peg Tower of Hanoi.
///
/// Free-form `move_disk` calls and the scripted replay behind `step`/`solve`
/// go through the same rule check, so they can be mixed.
#[derive(Debug, Clone)]
pub struct HanoiEngine {
    lc: Lifecycle,
    disks: usize,
    towers: [Tower; TOWER_COUNT],
    moves: Vec<HanoiMove>,
    plan: Vec<HanoiMove>,
    cursor: usize,
}

impl Default for HanoiEngine {
    fn default() -> Self {
        Self {
            lc: Lifecycle::new(),
            disks: 0,
            towers: [Tower::new(0), Tower::new(1), Tower::new(2)],
            moves: Vec::new(),
            plan: Vec::new(),
            cursor: 0,
        }
    }
}

impl HanoiEngine {
    pub fn new() -> Self { Self::default() }

    pub fn with_disks(n: usize) -> Result<Self> {
        let mut e = Self::new();
        e.initialize(&PuzzleParams::Hanoi { disks: n })?;
        Ok(e)
    }

    pub fn disk_count(&self) -> usize { self.disks }
    pub fn towers(&self) -> &[Tower] { &self.towers }
    pub fn tower(&self, id: usize) -> Option<&Tower> { self.towers.get(id) }
    pub fn moves(&self) -> &[HanoiMove] { &self.moves }
    pub fn optimal_solution(&self) -> &[HanoiMove] { &self.plan }

    /// Index of the next scripted move `step` will replay.
    pub fn plan_position(&self) -> usize { self.cursor }

    pub fn minimum_moves(&self) -> u64 {
        if self.disks == 0 { 0 } else { (1u64 << self.disks) - 1 }
    }

    pub fn is_optimal_solution(&self) -> bool { self.moves.len() as u64 == self.minimum_moves() }

    /// Disk count conserved and every tower strictly decreasing upwards.
    pub fn is_valid_configuration(&self) -> bool {
        let total: usize = self.towers.iter().map(Tower::len).sum();
        total == self.disks && self.towers.iter().all(Tower::is_ordered)
    }

    /// Moves the top disk of `from` onto `to`.
    /// Returns `Ok(false)`, changing nothing, when the move breaks a rule.
    pub fn move_disk(&mut self, from: usize, to: usize) -> Result<bool> {
        self.lc.ensure_initialized("move_disk")?;
        if self.lc.is_solved() || !self.apply(from, to) { return Ok(false); }
        if self.towers[TARGET].len() == self.disks { self.complete(); }
        Ok(true)
    }

    fn apply(&mut self, from: usize, to: usize) -> bool {
        if from >= TOWER_COUNT || to >= TOWER_COUNT || from == to { return false; }
        let Some(disk) = self.towers[from].peek() else { return false };
        if !self.towers[to].can_place(disk) { return false; }
        let moved = self.towers[from].pop().is_some_and(|d| self.towers[to].push(d));
        debug_assert!(moved, "checked move {} -> {} was refused by the towers", from + 1, to + 1);
        self.moves.push(HanoiMove::new(from, to, disk.size()));
        self.lc.record_step();
        true
    }

    fn lay_out(&mut self) {
        self.towers = [Tower::full(SOURCE, self.disks), Tower::new(SPARE), Tower::new(TARGET)];
        self.moves.clear();
        self.cursor = 0;
    }

    fn complete(&mut self) {
        if self.lc.is_solved() { return; }
        self.lc.mark_completed();
        info!("hanoi: {} disks moved in {} moves (minimum {})", self.disks, self.moves.len(), self.minimum_moves());
    }
}

impl Puzzle for HanoiEngine {
    fn kind(&self) -> PuzzleKind { PuzzleKind::Hanoi }

    fn initialize(&mut self, params: &PuzzleParams) -> Result<()> {
        let PuzzleParams::Hanoi { disks } = *params else {
            return Err(PuzzleError::ParamsMismatch { expected: "hanoi", got: params.kind().name() });
        };
        if !HANOI_DISKS.contains(&disks) {
            return Err(PuzzleError::out_of_range("disk count", disks, &HANOI_DISKS));
        }
        self.disks = disks;
        self.lay_out();
        self.plan = optimal_plan(disks);
        self.lc.initialize();
        debug!("hanoi: initialized with {disks} disks, plan of {} moves", self.plan.len());
        Ok(())
    }

    /// Replays the next move of the optimal plan through `move_disk`.
    /// The plan advances on every call, even when manual moves left that
    /// transfer illegal; `Ok(false)` means the plan is used up.
    fn step(&mut self) -> Result<bool> {
        if !self.lc.begin_step("step")? { return Ok(false); }
        let Some(mv) = self.plan.get(self.cursor).copied() else { return Ok(false) };
        self.cursor += 1;
        if !self.move_disk(mv.from, mv.to)? {
            debug!("hanoi: scripted {mv} skipped, towers no longer allow it");
        }
        Ok(true)
    }

    fn solve(&mut self) -> Result<bool> {
        if !self.lc.begin_step("solve")? { return Ok(false); }
        debug!("hanoi: replaying optimal plan for {} disks", self.disks);
        self.lay_out();
        for i in 0..self.plan.len() {
            let mv = self.plan[i];
            let applied = self.apply(mv.from, mv.to);
            debug_assert!(applied, "optimal plan rejected {mv}");
        }
        self.cursor = self.plan.len();
        self.complete();
        Ok(true)
    }

    fn is_valid_solution(&self) -> bool {
        let target = &self.towers[TARGET];
        self.disks > 0
            && target.len() == self.disks
            && target.disks().iter().enumerate().all(|(i, d)| d.size() == self.disks - i)
    }

    fn reset(&mut self) {
        *self = Self::default();
        debug!("hanoi: reset");
    }

    fn lifecycle(&self) -> &Lifecycle { &self.lc }

    fn create_summary(&self, completed: bool) -> PuzzleSummary {
        PuzzleSummary::from_lifecycle(
            &self.lc,
            completed,
            SummaryDetails::Hanoi {
                disks: self.disks,
                moves: self.moves.len(),
                minimum_moves: self.minimum_moves(),
                optimal: self.is_optimal_solution(),
            },
        )
    }

    fn render(&self) -> String { self.to_string() }
}

impl fmt::Display for HanoiEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in &self.towers { writeln!(f, "{t}")?; }
        Ok(())
    }
}
