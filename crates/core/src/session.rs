//! Game session - puzzle state plus its move log
//!
//! A session owns the pegs, the disk count, the move counter, the undo
//! history, and the auto-solve gate. It is the only place where disks
//! actually move: [`GameSession::apply`] (validate, transfer, count, record)
//! and [`GameSession::undo`] (the exact reverse). Both are all-or-nothing.

use tracing::debug;

use crate::error::{GameError, MoveError, UndoError};
use crate::history::History;
use crate::pegs::Pegs;
use crate::types::{Move, MoveOrigin, Peg, MAX_DISKS, MIN_DISKS};
use crate::validator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pegs: Pegs,
    disks: u8,
    moves: u32,
    history: History,
    /// Cleared by the first manual move; only a fresh session re-opens it.
    auto_solve_permitted: bool,
}

impl GameSession {
    /// Fresh session with `disks` disks on the left peg.
    ///
    /// `disks` must be within `MIN_DISKS..=MAX_DISKS`.
    pub fn new(disks: u8) -> Result<Self, GameError> {
        if !(MIN_DISKS..=MAX_DISKS).contains(&disks) {
            return Err(GameError::DiskCount(disks));
        }
        Ok(Self::fresh(disks))
    }

    /// Fresh session without bounds checking (capped at peg capacity).
    pub(crate) fn fresh(disks: u8) -> Self {
        let disks = disks.min(MAX_DISKS);
        Self {
            pegs: Pegs::initial(disks),
            disks,
            moves: 0,
            history: History::new(),
            auto_solve_permitted: true,
        }
    }

    /// Session starting from an arbitrary arrangement.
    ///
    /// The arrangement must satisfy both puzzle invariants for the number of
    /// disks it holds (at least one). Auto-solve is only permitted when the
    /// arrangement is the standard starting one.
    pub fn with_arrangement(pegs: Pegs) -> Result<Self, GameError> {
        let disks = u8::try_from(pegs.disk_count()).map_err(|_| GameError::InvalidArrangement)?;
        if disks == 0 || !pegs.is_well_formed(disks) {
            return Err(GameError::InvalidArrangement);
        }
        let auto_solve_permitted = pegs == Pegs::initial(disks);
        Ok(Self {
            pegs,
            disks,
            moves: 0,
            history: History::new(),
            auto_solve_permitted,
        })
    }

    pub fn pegs(&self) -> &Pegs {
        &self.pegs
    }

    pub fn disks(&self) -> u8 {
        self.disks
    }

    pub fn move_count(&self) -> u32 {
        self.moves
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn auto_solve_permitted(&self) -> bool {
        self.auto_solve_permitted
    }

    pub(crate) fn close_auto_solve(&mut self) {
        self.auto_solve_permitted = false;
    }

    /// All disks are on the goal peg
    pub fn is_solved(&self) -> bool {
        self.pegs.len(Peg::GOAL) == self.disks as usize
    }

    /// Execute one move.
    ///
    /// Validates first; on failure nothing changes. On success the disk is
    /// transferred, the counter incremented, and the move recorded. Manual
    /// moves close the auto-solve gate.
    pub fn apply(&mut self, from: Peg, to: Peg, origin: MoveOrigin) -> Result<Move, MoveError> {
        let disk = validator::check(&self.pegs, from, to)?;

        let popped = self.pegs.pop(from);
        debug_assert_eq!(popped, Some(disk));
        let pushed = self.pegs.push(to, disk);
        debug_assert!(pushed, "peg capacity covers every disk");

        let mv = Move::new(disk, from, to);
        self.moves += 1;
        self.history.push(mv);
        if origin == MoveOrigin::Manual {
            self.auto_solve_permitted = false;
        }

        debug!(disk, from = %from, to = %to, ?origin, moves = self.moves, "move applied");
        Ok(mv)
    }

    /// Reverse the most recent move.
    ///
    /// The reverse transfer is always legal since it recreates a state that
    /// already existed. Undo never re-opens the auto-solve gate.
    pub fn undo(&mut self) -> Result<Move, UndoError> {
        let mv = self.history.pop().ok_or(UndoError::Empty)?;

        let popped = self.pegs.pop(mv.to);
        debug_assert_eq!(popped, Some(mv.disk));
        let pushed = self.pegs.push(mv.from, mv.disk);
        debug_assert!(pushed);
        self.moves -= 1;

        debug!(disk = mv.disk, from = %mv.to, to = %mv.from, moves = self.moves, "move undone");
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bounds() {
        assert_eq!(GameSession::new(2), Err(GameError::DiskCount(2)));
        assert_eq!(GameSession::new(8), Err(GameError::DiskCount(8)));
        let s = GameSession::new(3).unwrap();
        assert_eq!(s.disks(), 3);
        assert_eq!(s.move_count(), 0);
        assert!(s.auto_solve_permitted());
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_apply_updates_everything() {
        let mut s = GameSession::new(3).unwrap();
        let mv = s.apply(Peg::Left, Peg::Right, MoveOrigin::Manual).unwrap();

        assert_eq!(mv, Move::new(1, Peg::Left, Peg::Right));
        assert_eq!(s.move_count(), 1);
        assert_eq!(s.history().as_slice(), &[mv]);
        assert_eq!(s.pegs().top(Peg::Right), Some(1));
        assert!(!s.auto_solve_permitted());
    }

    #[test]
    fn test_solver_moves_keep_gate_open() {
        let mut s = GameSession::new(3).unwrap();
        s.apply(Peg::Left, Peg::Right, MoveOrigin::Solver).unwrap();
        assert!(s.auto_solve_permitted());
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut s = GameSession::with_arrangement(Pegs::from_stacks([&[2], &[1], &[]]).unwrap())
            .unwrap();
        let before = s.clone();

        let err = s.apply(Peg::Left, Peg::Middle, MoveOrigin::Manual).unwrap_err();
        assert_eq!(err, MoveError::SizeViolation { disk: 2, onto: 1 });
        assert_eq!(s, before);
    }

    #[test]
    fn test_undo_round_trip() {
        let mut s = GameSession::new(4).unwrap();
        s.apply(Peg::Left, Peg::Middle, MoveOrigin::Manual).unwrap();
        let before = s.clone();

        let mv = s.apply(Peg::Left, Peg::Right, MoveOrigin::Manual).unwrap();
        assert_eq!(s.undo(), Ok(mv));

        assert_eq!(s.pegs(), before.pegs());
        assert_eq!(s.move_count(), before.move_count());
        assert_eq!(s.history(), before.history());
    }

    #[test]
    fn test_undo_empty() {
        let mut s = GameSession::new(3).unwrap();
        assert_eq!(s.undo(), Err(UndoError::Empty));
    }

    #[test]
    fn test_undo_does_not_reopen_gate() {
        let mut s = GameSession::new(3).unwrap();
        s.apply(Peg::Left, Peg::Right, MoveOrigin::Manual).unwrap();
        s.undo().unwrap();
        assert_eq!(s.pegs(), &Pegs::initial(3));
        assert!(!s.auto_solve_permitted());
    }

    #[test]
    fn test_with_arrangement_validation() {
        let bad = Pegs::from_stacks([&[1, 2], &[], &[]]).unwrap();
        assert_eq!(
            GameSession::with_arrangement(bad),
            Err(GameError::InvalidArrangement)
        );
        assert_eq!(
            GameSession::with_arrangement(Pegs::new()),
            Err(GameError::InvalidArrangement)
        );

        let mid = GameSession::with_arrangement(Pegs::from_stacks([&[3], &[2, 1], &[]]).unwrap())
            .unwrap();
        assert_eq!(mid.disks(), 3);
        assert!(!mid.auto_solve_permitted());

        let start = GameSession::with_arrangement(Pegs::initial(2)).unwrap();
        assert!(start.auto_solve_permitted());
    }

    #[test]
    fn test_is_solved() {
        let s = GameSession::with_arrangement(Pegs::from_stacks([&[], &[], &[3, 2, 1]]).unwrap())
            .unwrap();
        assert!(s.is_solved());
        assert!(!GameSession::new(3).unwrap().is_solved());
    }
}
