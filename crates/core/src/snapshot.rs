//! Host-facing game state
//!
//! A [`GameSnapshot`] is plain data copied out of the controller, so a host
//! can render or serialize it without holding any lock.

use serde::{Deserialize, Serialize};

use crate::pegs::PegStack;
use crate::types::{Disk, GamePhase, Move, Peg, PEG_COUNT};

/// Everything a host needs to draw one frame or report progress
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub pegs: [PegStack; PEG_COUNT],
    pub disks: u8,
    pub moves: u32,
    pub optimal_moves: u64,
    pub phase: GamePhase,
    pub auto_solve_permitted: bool,
    pub solving: bool,
    pub last_move: Option<Move>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        for peg in self.pegs.iter_mut() {
            peg.clear();
        }
        self.disks = 0;
        self.moves = 0;
        self.optimal_moves = 0;
        self.phase = GamePhase::Setup;
        self.auto_solve_permitted = false;
        self.solving = false;
        self.last_move = None;
    }

    pub fn peg(&self, peg: Peg) -> &[Disk] {
        &self.pegs[peg.index()]
    }

    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    /// Manual input is accepted in this state
    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Playing && !self.solving
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            pegs: Default::default(),
            disks: 0,
            moves: 0,
            optimal_moves: 0,
            phase: GamePhase::Setup,
            auto_solve_permitted: false,
            solving: false,
            last_move: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::GameController;

    #[test]
    fn test_default_is_empty_setup() {
        let s = GameSnapshot::default();
        assert!(s.pegs.iter().all(|p| p.is_empty()));
        assert_eq!(s.disks, 0);
        assert_eq!(s.phase, GamePhase::Setup);
        assert!(!s.is_won());
        assert!(!s.playable());
    }

    #[test]
    fn test_clear_matches_default() {
        let mut game = GameController::new(3).unwrap();
        game.try_move(0, 2).unwrap();
        let mut s = game.snapshot();
        assert_eq!(s.peg(Peg::Right), &[1]);

        s.clear();
        assert_eq!(s, GameSnapshot::default());
    }
}
