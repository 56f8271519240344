//! Optimal solution generator
//!
//! The classic recursion, moving `n` disks from `from` to `to` via the spare
//! peg:
//!
//! ```text
//! solve(0, ..)           = nothing
//! solve(n, from, to, via) = solve(n-1, from, via, to)
//!                           move disk n from -> to
//!                           solve(n-1, via, to, from)
//! ```
//!
//! yields exactly `2^n - 1` moves, and that exact order is the canonical
//! sequence. [`Solution`] produces it lazily with an explicit stack (depth
//! `O(n)`), so a driver can apply one move, hand control back to the host,
//! and resume later.
//!
//! # Example
//!
//! ```
//! use hanoi_core::solver::canonical_moves;
//!
//! let moves: Vec<(usize, usize)> = canonical_moves(2).iter().map(|m| m.indices()).collect();
//! assert_eq!(moves, vec![(0, 1), (0, 2), (1, 2)]);
//! ```

use std::iter::FusedIterator;

use crate::types::{optimal_moves, Disk, Move, Peg};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Solve { disks: Disk, from: Peg, to: Peg, via: Peg },
    Transfer(Move),
}

/// Lazy canonical move sequence for one `(n, from, to)`
#[derive(Debug, Clone)]
pub struct Solution {
    stack: Vec<Task>,
    remaining: u64,
}

impl Solution {
    /// Plan moving the top `disks` disks of `from` onto `to`.
    ///
    /// Moving onto the same peg is an empty plan.
    pub fn new(disks: Disk, from: Peg, to: Peg) -> Self {
        if from == to || disks == 0 {
            return Self {
                stack: Vec::new(),
                remaining: 0,
            };
        }

        let mut stack = Vec::with_capacity(2 * disks as usize + 1);
        stack.push(Task::Solve {
            disks,
            from,
            to,
            via: Peg::spare(from, to),
        });
        Self {
            stack,
            remaining: optimal_moves(disks),
        }
    }

    /// Moves not yet produced
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl Iterator for Solution {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        while let Some(task) = self.stack.pop() {
            match task {
                Task::Solve { disks: 0, .. } => {}
                Task::Solve {
                    disks,
                    from,
                    to,
                    via,
                } => {
                    // pushed in reverse so the first half pops first
                    self.stack.push(Task::Solve {
                        disks: disks - 1,
                        from: via,
                        to,
                        via: from,
                    });
                    self.stack.push(Task::Transfer(Move::new(disks, from, to)));
                    self.stack.push(Task::Solve {
                        disks: disks - 1,
                        from,
                        to: via,
                        via: to,
                    });
                }
                Task::Transfer(mv) => {
                    self.remaining = self.remaining.saturating_sub(1);
                    return Some(mv);
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Solution {}

/// Canonical solution of a fresh `disks`-disk game (left peg to right peg)
pub fn canonical_moves(disks: Disk) -> Vec<Move> {
    Solution::new(disks, Peg::START, Peg::GOAL).collect()
}

/// Outcome of one auto-solve step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStep {
    /// A move was applied and more remain
    Moved(Move),
    /// The final move was applied; the puzzle is won
    Solved(Move),
}

impl SolveStep {
    pub fn mv(&self) -> Move {
        match *self {
            SolveStep::Moved(mv) | SolveStep::Solved(mv) => mv,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SolveStep::Solved(_))
    }
}

/// An in-progress automatic solve: the remaining plan plus progress so far
#[derive(Debug, Clone)]
pub struct AutoSolver {
    plan: Solution,
    applied: u32,
}

impl AutoSolver {
    /// Plan the full solve of a fresh `disks`-disk game
    pub fn new(disks: Disk) -> Self {
        Self {
            plan: Solution::new(disks, Peg::START, Peg::GOAL),
            applied: 0,
        }
    }

    /// Next planned move, if any
    pub(crate) fn next_move(&mut self) -> Option<Move> {
        self.plan.next()
    }

    pub(crate) fn record_applied(&mut self) {
        self.applied += 1;
    }

    /// Moves applied so far by this solve
    pub fn applied(&self) -> u32 {
        self.applied
    }

    /// Moves still to apply
    pub fn remaining(&self) -> u64 {
        self.plan.remaining()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(moves: &[Move]) -> Vec<(usize, usize)> {
        moves.iter().map(|m| m.indices()).collect()
    }

    #[test]
    fn test_canonical_one_disk() {
        assert_eq!(indices(&canonical_moves(1)), vec![(0, 2)]);
    }

    #[test]
    fn test_canonical_two_disks() {
        assert_eq!(indices(&canonical_moves(2)), vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_canonical_three_disks() {
        assert_eq!(
            indices(&canonical_moves(3)),
            vec![(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)]
        );
    }

    #[test]
    fn test_canonical_disk_sizes() {
        let disks: Vec<Disk> = canonical_moves(3).iter().map(|m| m.disk).collect();
        assert_eq!(disks, vec![1, 2, 1, 3, 1, 2, 1]);
    }

    #[test]
    fn test_move_count_is_optimal() {
        for n in 0..=10u8 {
            assert_eq!(canonical_moves(n).len() as u64, optimal_moves(n));
        }
    }

    #[test]
    fn test_remaining_and_size_hint() {
        let mut s = Solution::new(4, Peg::Left, Peg::Right);
        assert_eq!(s.remaining(), 15);
        assert_eq!(s.size_hint(), (15, Some(15)));
        s.next();
        assert_eq!(s.remaining(), 14);
        assert_eq!(s.by_ref().count(), 14);
        assert_eq!(s.remaining(), 0);
        assert_eq!(s.next(), None);
    }

    #[test]
    fn test_other_pegs() {
        let moves = Solution::new(2, Peg::Right, Peg::Left).collect::<Vec<_>>();
        assert_eq!(indices(&moves), vec![(2, 1), (2, 0), (1, 0)]);
    }

    #[test]
    fn test_empty_plans() {
        assert_eq!(Solution::new(3, Peg::Middle, Peg::Middle).count(), 0);
        assert_eq!(Solution::new(0, Peg::Left, Peg::Right).count(), 0);
    }

    #[test]
    fn test_auto_solver_tracks_progress() {
        let mut solver = AutoSolver::new(3);
        assert_eq!(solver.remaining(), 7);
        let first = solver.next_move().unwrap();
        solver.record_applied();
        assert_eq!(first, Move::new(1, Peg::Left, Peg::Right));
        assert_eq!(solver.applied(), 1);
        assert_eq!(solver.remaining(), 6);
    }
}
