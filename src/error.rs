//! Error types for the puzzle engines.
//!
//! Only programmer errors live here. A move that breaks a puzzle rule is not
//! an error: move operations report it as `Ok(false)` and leave the engine untouched.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// A parameter handed to `initialize` is outside its documented domain.
    #[error("invalid {param}: {value} (expected {expected})")]
    Validation {
        param: &'static str,
        value: i64,
        expected: String,
    },

    /// Parameters for a different puzzle were handed to `initialize`.
    #[error("parameters for {got} cannot initialize {expected}")]
    ParamsMismatch {
        expected: &'static str,
        got: &'static str,
    },

    /// A mutating call was made before `initialize`.
    #[error("{operation} called before the puzzle was initialized")]
    NotInitialized { operation: &'static str },
}

impl PuzzleError {
    pub(crate) fn out_of_range(param: &'static str, value: usize, range: &std::ops::RangeInclusive<usize>) -> Self {
        PuzzleError::Validation {
            param,
            value: value as i64,
            expected: format!("{}..={}", range.start(), range.end()),
        }
    }

    /// True for faults caused by bad parameters rather than call order.
    pub fn is_validation(&self) -> bool {
        matches!(self, PuzzleError::Validation { .. } | PuzzleError::ParamsMismatch { .. })
    }
}

pub type Result<T> = std::result::Result<T, PuzzleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_the_domain() {
        let e = PuzzleError::out_of_range("board size", 3, &(4..=12));
        assert_eq!(e.to_string(), "invalid board size: 3 (expected 4..=12)");
        assert!(e.is_validation());
    }

    #[test]
    fn state_fault_is_not_validation() {
        let e = PuzzleError::NotInitialized { operation: "step" };
        assert!(!e.is_validation());
        assert_eq!(e.to_string(), "step called before the puzzle was initialized");
    }
}
