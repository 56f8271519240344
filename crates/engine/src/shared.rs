//! Shared game handle
//!
//! One [`GameController`] behind a tokio mutex. Every operation, manual or
//! solver, holds the lock for exactly one atomic step and never across an
//! await point that waits on the host, so a manual move can never interleave
//! with half of an auto-solve move.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard, Notify};
use tracing::info;

use hanoi_core::{GameController, GameError, GameSnapshot};

use crate::config::SolveConfig;
use crate::solve::{drive, SolveHandle};

/// The auto-solve task currently allowed to step the game
#[derive(Debug)]
pub(crate) struct ActiveRun {
    pub(crate) id: u64,
    pub(crate) cancel: Arc<Notify>,
}

#[derive(Debug)]
pub(crate) struct Inner {
    pub(crate) game: GameController,
    pub(crate) active: Option<ActiveRun>,
    next_run: u64,
}

impl Inner {
    /// Forget the active run and wake its task if it is pacing
    pub(crate) fn release_run(&mut self) {
        if let Some(run) = self.active.take() {
            run.cancel.notify_one();
        }
    }

    pub(crate) fn is_active(&self, run: u64) -> bool {
        self.active.as_ref().map(|a| a.id) == Some(run)
    }
}

/// Cloneable handle to one game session
#[derive(Debug, Clone)]
pub struct SharedGame {
    inner: Arc<Mutex<Inner>>,
}

impl SharedGame {
    /// New game with `disks` disks
    pub fn new(disks: u8) -> Result<Self, GameError> {
        Ok(Self::from_controller(GameController::new(disks)?))
    }

    pub fn from_controller(game: GameController) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                game,
                active: None,
                next_run: 0,
            })),
        }
    }

    pub(crate) async fn lock_inner(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().await
    }

    /// Run `f` against the controller under the lock.
    ///
    /// Use this for reads that the snapshot does not cover.
    pub async fn with<R>(&self, f: impl FnOnce(&GameController) -> R) -> R {
        let inner = self.inner.lock().await;
        f(&inner.game)
    }

    /// Current state
    pub async fn snapshot(&self) -> GameSnapshot {
        self.inner.lock().await.game.snapshot()
    }

    /// Replace the game with a fresh one of `disks` disks.
    ///
    /// Cancels any auto-solve. On error the current game is kept.
    pub async fn new_game(&self, disks: u8) -> Result<GameSnapshot, GameError> {
        let mut inner = self.inner.lock().await;
        inner.game.new_game(disks)?;
        inner.release_run();
        Ok(inner.game.snapshot())
    }

    /// Fresh game with the same disk count; cancels any auto-solve
    pub async fn reset(&self) -> GameSnapshot {
        let mut inner = self.inner.lock().await;
        inner.game.reset();
        inner.release_run();
        inner.game.snapshot()
    }

    /// Manual move between peg indices (0-2)
    pub async fn try_move(&self, from: usize, to: usize) -> Result<GameSnapshot, GameError> {
        let mut inner = self.inner.lock().await;
        inner.game.try_move(from, to)?;
        Ok(inner.game.snapshot())
    }

    pub async fn undo(&self) -> Result<GameSnapshot, GameError> {
        let mut inner = self.inner.lock().await;
        inner.game.undo()?;
        Ok(inner.game.snapshot())
    }

    /// Arm the solver and spawn a task that applies one move per `config.delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn start_auto_solve(&self, config: &SolveConfig) -> Result<SolveHandle, GameError> {
        let (run, cancel) = {
            let mut inner = self.inner.lock().await;
            inner.game.start_auto_solve()?;
            inner.next_run += 1;
            let run = inner.next_run;
            let cancel = Arc::new(Notify::new());
            inner.active = Some(ActiveRun {
                id: run,
                cancel: Arc::clone(&cancel),
            });
            (run, cancel)
        };

        info!(run, delay = ?config.delay, "auto-solve task spawned");
        let (handle, events_tx) = SolveHandle::channel(self.clone(), run, config.buffer);
        let task = tokio::spawn(drive(self.clone(), run, cancel, config.delay, events_tx));
        Ok(handle.with_task(task))
    }

    /// Cancel whichever auto-solve is running.
    ///
    /// Takes effect between moves; returns false if none was running.
    pub async fn cancel_auto_solve(&self) -> bool {
        let mut inner = self.inner.lock().await;
        let cancelled = inner.game.cancel_auto_solve();
        inner.release_run();
        cancelled
    }

    /// Cancel only if `run` is still the active auto-solve
    pub(crate) async fn cancel_run(&self, run: u64) -> bool {
        let mut inner = self.inner.lock().await;
        if !inner.is_active(run) {
            return false;
        }
        let cancelled = inner.game.cancel_auto_solve();
        inner.release_run();
        cancelled
    }
}
