//! Paced auto-solve task
//!
//! The task loops: wait `delay` (or yield when zero), take the lock, apply one
//! canonical move, release the lock, publish the new state. A cancel request
//! wakes the wait early; the task then sees that its run is no longer active
//! and stops without touching the game. Since the lock is only taken for a
//! single step, cancellation always lands between two moves.
//!
//! Pacing never changes the result: any delay, including zero, applies the
//! same moves in the same order.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Notify};
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info, warn};

use hanoi_core::{GameError, GameSnapshot, SolveStep};

use crate::shared::SharedGame;

/// One applied auto-solve move and the state right after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveEvent {
    pub step: SolveStep,
    pub snapshot: GameSnapshot,
}

/// How an auto-solve task ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Every planned move was applied and the game is won
    Solved { moves: u32 },
    /// Stopped between moves by cancel, reset, or new game
    Cancelled { applied: u32 },
    /// The game refused a planned move
    Failed { applied: u32, error: GameError },
}

/// Host side of a running auto-solve
#[derive(Debug)]
pub struct SolveHandle {
    run: u64,
    shared: SharedGame,
    events: mpsc::Receiver<SolveEvent>,
    task: Option<JoinHandle<SolveOutcome>>,
}

impl SolveHandle {
    pub(crate) fn channel(
        shared: SharedGame,
        run: u64,
        buffer: usize,
    ) -> (Self, mpsc::Sender<SolveEvent>) {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        let handle = Self {
            run,
            shared,
            events: rx,
            task: None,
        };
        (handle, tx)
    }

    pub(crate) fn with_task(mut self, task: JoinHandle<SolveOutcome>) -> Self {
        self.task = Some(task);
        self
    }

    /// Id of this run, unique per shared game
    pub fn run_id(&self) -> u64 {
        self.run
    }

    /// Next intermediate state; `None` once the task has finished
    pub async fn next_event(&mut self) -> Option<SolveEvent> {
        self.events.recv().await
    }

    /// Request cancellation.
    ///
    /// The move in flight, if any, completes first. Returns false when this
    /// run had already finished or been replaced.
    pub async fn cancel(&self) -> bool {
        self.shared.cancel_run(self.run).await
    }

    /// Wait for the task to finish, discarding events not yet read
    pub async fn wait(mut self) -> Result<SolveOutcome, JoinError> {
        self.events.close();
        match self.task.take() {
            Some(task) => task.await,
            None => Ok(SolveOutcome::Cancelled { applied: 0 }),
        }
    }

    /// Read every remaining event, then wait for the task
    pub async fn collect(mut self) -> Result<(Vec<SolveEvent>, SolveOutcome), JoinError> {
        let mut events = Vec::new();
        while let Some(ev) = self.events.recv().await {
            events.push(ev);
        }
        let outcome = self.wait().await?;
        Ok((events, outcome))
    }
}

async fn pace(delay: Duration, cancel: &Notify) {
    if delay.is_zero() {
        tokio::task::yield_now().await;
        return;
    }
    tokio::select! {
        _ = tokio::time::sleep(delay) => {}
        _ = cancel.notified() => {}
    }
}

pub(crate) async fn drive(
    shared: SharedGame,
    run: u64,
    cancel: Arc<Notify>,
    delay: Duration,
    events: mpsc::Sender<SolveEvent>,
) -> SolveOutcome {
    let mut applied: u32 = 0;

    loop {
        pace(delay, &cancel).await;

        let event = {
            let mut inner = shared.lock_inner().await;
            if !inner.is_active(run) || !inner.game.is_solving() {
                info!(run, applied, "auto-solve stopped");
                return SolveOutcome::Cancelled { applied };
            }
            match inner.game.step_auto_solve() {
                Ok(step) => {
                    if step.is_solved() {
                        inner.active = None;
                    }
                    SolveEvent {
                        step,
                        snapshot: inner.game.snapshot(),
                    }
                }
                Err(error) => {
                    warn!(run, applied, %error, "auto-solve aborted");
                    inner.active = None;
                    return SolveOutcome::Failed { applied, error };
                }
            }
        };

        applied += 1;
        let solved = event.step.is_solved();
        debug!(run, applied, mv = %event.step.mv(), "auto-solve step");

        // a host that dropped the stream still gets the outcome
        let _ = events.send(event).await;

        if solved {
            info!(run, moves = applied, "auto-solve finished");
            return SolveOutcome::Solved { moves: applied };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolveConfig;
    use hanoi_core::canonical_moves;

    #[tokio::test]
    async fn test_immediate_solve_emits_every_move() {
        let game = SharedGame::new(3).unwrap();
        let handle = game.start_auto_solve(&SolveConfig::immediate()).await.unwrap();
        let (events, outcome) = handle.collect().await.unwrap();

        assert_eq!(outcome, SolveOutcome::Solved { moves: 7 });
        let moves: Vec<_> = events.iter().map(|e| e.step.mv()).collect();
        assert_eq!(moves, canonical_moves(3));
        assert!(events.last().unwrap().snapshot.is_won());
        assert!(events[..6].iter().all(|e| !e.step.is_solved()));
    }

    #[tokio::test]
    async fn test_wait_without_reading_events() {
        let game = SharedGame::new(5).unwrap();
        let config = SolveConfig {
            buffer: 1,
            ..SolveConfig::immediate()
        };
        let handle = game.start_auto_solve(&config).await.unwrap();
        assert_eq!(handle.wait().await.unwrap(), SolveOutcome::Solved { moves: 31 });
        assert!(game.snapshot().await.is_won());
    }
}
