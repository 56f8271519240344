//! Async engine - a shared game session with a paced, cancellable auto-solve
//!
//! The core crate is synchronous: [`hanoi_core::GameController`] arms the
//! solver and applies one canonical move per `step_auto_solve` call. This
//! crate turns that into something a UI can drive:
//!
//! 1. **Sharing**: [`SharedGame`] puts the controller behind a tokio mutex so
//!    a UI event loop and the solver task can both reach it
//! 2. **Pacing**: [`SharedGame::start_auto_solve`] spawns a task that waits
//!    [`SolveConfig::delay`] before each move, so the host can animate
//! 3. **Streaming**: each applied move is published as a [`SolveEvent`]
//!    carrying the snapshot right after it
//! 4. **Cancelling**: [`SolveHandle::cancel`] (or reset / new game) stops the
//!    task between moves; applied moves stay in history
//!
//! # Example
//!
//! ```
//! use hanoi_engine::{SharedGame, SolveConfig, SolveOutcome};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let game = SharedGame::new(3).unwrap();
//! let mut handle = game.start_auto_solve(&SolveConfig::immediate()).await.unwrap();
//!
//! let mut frames = 0;
//! while let Some(event) = handle.next_event().await {
//!     frames += 1;
//!     if event.step.is_solved() {
//!         break;
//!     }
//! }
//! assert_eq!(frames, 7);
//! assert_eq!(handle.wait().await.unwrap(), SolveOutcome::Solved { moves: 7 });
//! # });
//! ```
//!
//! # Environment Variables
//!
//! See [`config`]: `HANOI_DISKS`, `HANOI_SOLVE_DELAY_MS`, `HANOI_SOLVE_BUFFER`.

pub mod config;
pub mod shared;
pub mod solve;

pub use hanoi_core as core;
pub use hanoi_types as types;

pub use config::{EngineConfig, SolveConfig};
pub use shared::SharedGame;
pub use solve::{SolveEvent, SolveHandle, SolveOutcome};
