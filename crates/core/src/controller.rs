//! Game controller - lifecycle and the operations a host invokes
//!
//! Ties the session (pegs, counter, history) to the game phase and the
//! optional in-progress auto-solve.
//!
//! # Lifecycle
//!
//! ```text
//! new / reset -> Setup -> Playing --(goal peg holds all disks)--> Won
//!                            ^                                     |
//!                            +--------------- reset ---------------+
//! ```
//!
//! The win check runs after every successful move, whether it came from the
//! host or from the solver. `Won` is terminal until a reset or new game.
//!
//! # Auto-solve
//!
//! [`GameController::start_auto_solve`] only arms the solver; each
//! [`GameController::step_auto_solve`] applies exactly one canonical move.
//! Hosts pace the steps however they like (see `hanoi-engine` for an async
//! driver) and may [`GameController::cancel_auto_solve`] between any two of
//! them. While a solve is armed, manual moves and undo are refused.

use tracing::{info, warn};

use crate::error::{GameError, MoveError, SolverError};
use crate::pegs::Pegs;
use crate::session::GameSession;
use crate::snapshot::GameSnapshot;
use crate::solver::{AutoSolver, SolveStep};
use crate::types::{optimal_moves, GamePhase, Move, MoveOrigin, Peg, PEG_COUNT};
use crate::validator;

use arrayvec::ArrayVec;

#[derive(Debug, Clone)]
pub struct GameController {
    session: GameSession,
    phase: GamePhase,
    solver: Option<AutoSolver>,
}

impl GameController {
    /// Start a new game with `disks` disks (`MIN_DISKS..=MAX_DISKS`)
    pub fn new(disks: u8) -> Result<Self, GameError> {
        let session = GameSession::new(disks)?;
        Ok(Self::enter(session))
    }

    /// Start from an arbitrary valid arrangement (puzzle editors, tests)
    pub fn from_arrangement(pegs: Pegs) -> Result<Self, GameError> {
        let session = GameSession::with_arrangement(pegs)?;
        Ok(Self::enter(session))
    }

    fn enter(session: GameSession) -> Self {
        let mut controller = Self {
            session,
            phase: GamePhase::Setup,
            solver: None,
        };
        controller.phase = if controller.session.is_solved() {
            GamePhase::Won
        } else {
            GamePhase::Playing
        };
        info!(
            disks = controller.session.disks(),
            phase = controller.phase.as_str(),
            "game ready"
        );
        controller
    }

    /// Replace the whole game with a fresh one of `disks` disks.
    ///
    /// On error the current game is kept as is.
    pub fn new_game(&mut self, disks: u8) -> Result<(), GameError> {
        *self = Self::new(disks)?;
        Ok(())
    }

    /// Fresh game with the same disk count; cancels any auto-solve
    pub fn reset(&mut self) {
        *self = Self::enter(GameSession::fresh(self.session.disks()));
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn pegs(&self) -> &Pegs {
        self.session.pegs()
    }

    pub fn disks(&self) -> u8 {
        self.session.disks()
    }

    pub fn move_count(&self) -> u32 {
        self.session.move_count()
    }

    pub fn optimal_moves(&self) -> u64 {
        optimal_moves(self.session.disks())
    }

    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    pub fn is_solving(&self) -> bool {
        self.solver.is_some()
    }

    pub fn auto_solve_permitted(&self) -> bool {
        self.session.auto_solve_permitted()
    }

    pub fn auto_solver(&self) -> Option<&AutoSolver> {
        self.solver.as_ref()
    }

    /// Manual move between host-facing peg indices (0-2)
    pub fn try_move(&mut self, from: usize, to: usize) -> Result<Move, GameError> {
        let from_peg = Peg::from_index(from).ok_or(MoveError::InvalidPeg(from))?;
        let to_peg = Peg::from_index(to).ok_or(MoveError::InvalidPeg(to))?;
        self.move_disk(from_peg, to_peg)
    }

    /// Manual move between pegs
    pub fn move_disk(&mut self, from: Peg, to: Peg) -> Result<Move, GameError> {
        self.ensure_manual_input()?;
        let mv = self.session.apply(from, to, MoveOrigin::Manual)?;
        self.check_win();
        Ok(mv)
    }

    /// Take back the most recent move (manual or solver)
    pub fn undo(&mut self) -> Result<Move, GameError> {
        self.ensure_manual_input()?;
        Ok(self.session.undo()?)
    }

    /// Pegs the top disk of peg `from` may move to right now.
    ///
    /// Empty when `from` is out of range or input is not currently accepted.
    pub fn legal_targets(&self, from: usize) -> ArrayVec<Peg, PEG_COUNT> {
        match Peg::from_index(from) {
            Some(peg) if self.ensure_manual_input().is_ok() => {
                validator::legal_targets(self.session.pegs(), peg)
            }
            _ => ArrayVec::new(),
        }
    }

    /// Arm the canonical solver.
    ///
    /// Only allowed from a fresh arrangement: any manual move since the last
    /// reset closes the gate (undo does not re-open it).
    pub fn start_auto_solve(&mut self) -> Result<(), GameError> {
        if self.is_won() {
            return Err(GameError::AlreadyWon);
        }
        if self.solver.is_some() {
            return Err(SolverError::AlreadyRunning.into());
        }
        if !self.session.auto_solve_permitted() {
            return Err(SolverError::NotPermitted.into());
        }

        let solver = AutoSolver::new(self.session.disks());
        info!(
            disks = self.session.disks(),
            planned = solver.remaining(),
            "auto-solve started"
        );
        self.solver = Some(solver);
        Ok(())
    }

    /// Apply the next canonical move.
    ///
    /// Returns [`SolveStep::Solved`] for the move that wins the game; the
    /// solver is disarmed at that point.
    pub fn step_auto_solve(&mut self) -> Result<SolveStep, GameError> {
        let Some(solver) = self.solver.as_mut() else {
            return Err(SolverError::Idle.into());
        };

        let Some(planned) = solver.next_move() else {
            // plan ran out without reaching the goal
            warn!("auto-solve plan exhausted before the goal was reached");
            self.solver = None;
            return Err(SolverError::Idle.into());
        };

        let mv = match self
            .session
            .apply(planned.from, planned.to, MoveOrigin::Solver)
        {
            Ok(mv) => {
                solver.record_applied();
                mv
            }
            Err(e) => {
                warn!(error = %e, planned = %planned, "auto-solve step rejected");
                self.solver = None;
                self.session.close_auto_solve();
                return Err(e.into());
            }
        };

        self.check_win();
        if self.is_won() {
            self.solver = None;
            Ok(SolveStep::Solved(mv))
        } else {
            Ok(SolveStep::Moved(mv))
        }
    }

    /// Stop an in-progress solve between moves.
    ///
    /// Applied moves stay in history. If any were applied the auto-solve gate
    /// closes, since the live arrangement is no longer the fresh one the plan
    /// starts from. Returns false when no solve was running.
    pub fn cancel_auto_solve(&mut self) -> bool {
        let Some(solver) = self.solver.take() else {
            return false;
        };
        if solver.applied() > 0 {
            self.session.close_auto_solve();
        }
        info!(
            applied = solver.applied(),
            remaining = solver.remaining(),
            "auto-solve cancelled"
        );
        true
    }

    /// Arm the solver and run it to the end with no pacing.
    ///
    /// Returns the number of moves applied.
    pub fn solve_now(&mut self) -> Result<u32, GameError> {
        self.start_auto_solve()?;
        let mut applied = 0;
        loop {
            applied += 1;
            if self.step_auto_solve()?.is_solved() {
                return Ok(applied);
            }
        }
    }

    /// Current state for the host
    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.pegs = self.session.pegs().stacks().clone();
        out.disks = self.session.disks();
        out.moves = self.session.move_count();
        out.optimal_moves = self.optimal_moves();
        out.phase = self.phase;
        out.auto_solve_permitted = self.session.auto_solve_permitted();
        out.solving = self.is_solving();
        out.last_move = self.session.history().last().copied();
    }

    fn ensure_manual_input(&self) -> Result<(), GameError> {
        if self.is_won() {
            return Err(GameError::AlreadyWon);
        }
        if self.solver.is_some() {
            return Err(GameError::SolverRunning);
        }
        Ok(())
    }

    fn check_win(&mut self) {
        if self.phase == GamePhase::Playing && self.session.is_solved() {
            self.phase = GamePhase::Won;
            info!(
                moves = self.session.move_count(),
                optimal = self.optimal_moves(),
                "puzzle solved"
            );
        }
    }
}
