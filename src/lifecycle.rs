use chrono::{DateTime, Duration, Local};

use crate::error::{PuzzleError, Result};

/// Progress bookkeeping shared by every engine.
///
/// Each engine owns one of these. `finished_at` is set exactly when the
/// puzzle is solved, and `steps` only grows until `reset`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lifecycle {
    initialized: bool,
    solved: bool,
    steps: u64,
    started_at: Option<DateTime<Local>>,
    finished_at: Option<DateTime<Local>>,
}

impl Lifecycle {
    pub fn new() -> Self { Self::default() }

    pub fn initialize(&mut self) {
        self.initialized = true;
        self.solved = false;
        self.steps = 0;
        self.started_at = Some(Local::now());
        self.finished_at = None;
    }

    /// Gate for `step`-like calls: errors before `initialize`, `Ok(false)` once solved.
    pub fn begin_step(&self, operation: &'static str) -> Result<bool> {
        self.ensure_initialized(operation)?;
        Ok(!self.solved)
    }

    pub fn ensure_initialized(&self, operation: &'static str) -> Result<()> {
        if self.initialized { Ok(()) } else { Err(PuzzleError::NotInitialized { operation }) }
    }

    pub fn record_step(&mut self) { self.steps += 1; }

    pub fn mark_completed(&mut self) {
        if self.solved { return; }
        self.solved = true;
        self.finished_at = Some(Local::now());
    }

    pub fn reset(&mut self) { *self = Self::default(); }

    pub fn is_initialized(&self) -> bool { self.initialized }
    pub fn is_solved(&self) -> bool { self.solved }
    pub fn steps(&self) -> u64 { self.steps }
    pub fn started_at(&self) -> Option<DateTime<Local>> { self.started_at }
    pub fn finished_at(&self) -> Option<DateTime<Local>> { self.finished_at }

    /// Time from start to finish, or to now while the puzzle is still running.
    pub fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(start) => self.finished_at.unwrap_or_else(Local::now) - start,
            None => Duration::zero(),
        }
    }

    pub fn elapsed_seconds(&self) -> i64 { self.elapsed().num_seconds().max(0) }
}
