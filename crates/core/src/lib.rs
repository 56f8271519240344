//! Core puzzle logic - pure, deterministic, and testable
//!
//! This crate contains the Tower of Hanoi rules, state management, undo, and
//! the canonical solver. It has **no dependencies** on rendering, input, or
//! async runtimes, making it:
//!
//! - **Deterministic**: the same calls always produce the same state
//! - **Testable**: every rule is covered by unit tests next to its code
//! - **Portable**: terminal, web, or desktop hosts drive the same engine
//! - **Allocation-light**: pegs are fixed-capacity inline stacks
//!
//! # Module Structure
//!
//! - [`pegs`]: the three disk stacks (bookkeeping only)
//! - [`validator`]: legal-move checks, side-effect free
//! - [`history`]: executed-move log for undo
//! - [`session`]: move execution and undo over pegs + counter + history
//! - [`solver`]: lazy canonical solution and auto-solve progress
//! - [`controller`]: game lifecycle (`Setup -> Playing -> Won`) and host operations
//! - [`snapshot`]: plain-data view of a game for hosts
//! - [`error`]: rejected-request taxonomy
//!
//! # Game Rules
//!
//! - Only the top disk of a peg moves, one at a time
//! - A disk may only land on an empty peg or a larger disk
//! - The game is won once the right peg holds every disk
//! - Auto-solve is available from a fresh arrangement only; any manual move
//!   closes it until reset
//!
//! # Example
//!
//! ```
//! use hanoi_core::{GameController, GameError, SolverError};
//! use hanoi_types::GamePhase;
//!
//! let mut game = GameController::new(3).unwrap();
//! game.try_move(0, 2).unwrap();
//! game.try_move(0, 1).unwrap();
//! assert_eq!(game.move_count(), 2);
//!
//! // manual play closes the auto-solve gate
//! assert_eq!(
//!     game.start_auto_solve(),
//!     Err(GameError::Solver(SolverError::NotPermitted))
//! );
//!
//! game.reset();
//! assert_eq!(game.solve_now().unwrap(), 7);
//! assert_eq!(game.phase(), GamePhase::Won);
//! ```

pub mod controller;
pub mod error;
pub mod history;
pub mod pegs;
pub mod session;
pub mod snapshot;
pub mod solver;
pub mod validator;

pub use hanoi_types as types;

// Re-export commonly used types for convenience
pub use controller::GameController;
pub use error::{GameError, MoveError, SolverError, UndoError};
pub use history::History;
pub use pegs::{PegStack, Pegs};
pub use session::GameSession;
pub use snapshot::GameSnapshot;
pub use solver::{canonical_moves, AutoSolver, SolveStep, Solution};
