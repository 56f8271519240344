//! Error taxonomy
//!
//! Every error here is a rejected request: the session is left exactly as it
//! was before the call.

use thiserror::Error;

use crate::types::{Disk, Peg, MAX_DISKS, MIN_DISKS};

/// Why a move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("peg index {0} is out of range (expected 0-2)")]
    InvalidPeg(usize),
    #[error("source and destination are the same peg ({0})")]
    SamePeg(Peg),
    #[error("no disk on the {0} peg")]
    SourceEmpty(Peg),
    #[error("disk {disk} cannot be placed on smaller disk {onto}")]
    SizeViolation { disk: Disk, onto: Disk },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UndoError {
    #[error("nothing to undo")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("auto-solve is only available at the start or after a reset")]
    NotPermitted,
    #[error("auto-solve is already running")]
    AlreadyRunning,
    #[error("no auto-solve in progress")]
    Idle,
}

/// Errors surfaced by [`crate::controller::GameController`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("puzzle already solved; reset to play again")]
    AlreadyWon,
    #[error("auto-solve in progress; cancel it first")]
    SolverRunning,
    #[error("disk count {0} is outside {min}..={max}", min = MIN_DISKS, max = MAX_DISKS)]
    DiskCount(u8),
    #[error("arrangement is not a valid puzzle state")]
    InvalidArrangement,
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error(transparent)]
    Undo(#[from] UndoError),
    #[error(transparent)]
    Solver(#[from] SolverError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            MoveError::SizeViolation { disk: 2, onto: 1 }.to_string(),
            "disk 2 cannot be placed on smaller disk 1"
        );
        assert_eq!(
            GameError::DiskCount(9).to_string(),
            "disk count 9 is outside 3..=7"
        );
        assert_eq!(
            GameError::from(UndoError::Empty).to_string(),
            "nothing to undo"
        );
    }
}
