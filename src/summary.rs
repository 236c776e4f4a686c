//! Immutable result records handed to whatever stores finished games.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::board::Square;
use crate::lifecycle::Lifecycle;
use crate::puzzle::PuzzleKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleSummary {
    pub kind: PuzzleKind,
    pub steps: u64,
    pub completed: bool,
    pub started_at: Option<DateTime<Local>>,
    pub finished_at: Option<DateTime<Local>>,
    pub elapsed_seconds: i64,
    pub details: SummaryDetails,
}

/// Fields specific to each puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SummaryDetails {
    Queens {
        board_size: usize,
    },
    Knight {
        board_size: usize,
        start: Square,
        total_moves: usize,
    },
    Hanoi {
        disks: usize,
        moves: usize,
        minimum_moves: u64,
        optimal: bool,
    },
}

impl SummaryDetails {
    pub fn kind(&self) -> PuzzleKind {
        match self {
            SummaryDetails::Queens { .. } => PuzzleKind::Queens,
            SummaryDetails::Knight { .. } => PuzzleKind::Knight,
            SummaryDetails::Hanoi { .. } => PuzzleKind::Hanoi,
        }
    }
}

impl PuzzleSummary {
    pub(crate) fn from_lifecycle(lc: &Lifecycle, completed: bool, details: SummaryDetails) -> Self {
        let elapsed_seconds = match (lc.started_at(), lc.finished_at()) {
            (Some(start), Some(end)) => (end - start).num_seconds().max(0),
            _ => 0,
        };
        Self {
            kind: details.kind(),
            steps: lc.steps(),
            completed,
            started_at: lc.started_at(),
            finished_at: lc.finished_at(),
            elapsed_seconds,
            details,
        }
    }
}
