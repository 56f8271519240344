//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no behavior beyond conversions, making them
//! usable in any context (core logic, async pacing, host front ends).
//!
//! # Puzzle Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PEG_COUNT` | 3 | Number of pegs (only the classic variant is supported) |
//! | `MIN_DISKS` | 3 | Smallest disk count a game can be created with |
//! | `MAX_DISKS` | 7 | Largest disk count a game can be created with |
//! | `DEFAULT_DISKS` | 3 | Disk count used when the host does not choose one |
//! | `DEFAULT_SOLVE_DELAY_MS` | 400 | Pause between auto-solve moves |
//!
//! Disks are numbered `1..=N`; a larger number is a physically larger disk.
//! Every game starts with all disks on [`Peg::Left`] and is won when they are
//! all on [`Peg::Right`].
//!
//! # Examples
//!
//! ```
//! use hanoi_types::{optimal_moves, Move, Peg};
//!
//! let peg = Peg::from_index(2).unwrap();
//! assert_eq!(peg, Peg::Right);
//! assert_eq!(Peg::spare(Peg::Left, Peg::Right), Peg::Middle);
//!
//! let mv = Move::new(1, Peg::Left, Peg::Right);
//! assert_eq!(mv.reversed(), Move::new(1, Peg::Right, Peg::Left));
//!
//! assert_eq!(optimal_moves(3), 7);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of pegs on the board
pub const PEG_COUNT: usize = 3;

/// Smallest disk count accepted for a new game
pub const MIN_DISKS: u8 = 3;

/// Largest disk count accepted for a new game (also the per-peg capacity)
pub const MAX_DISKS: u8 = 7;

/// Disk count used when none is configured
pub const DEFAULT_DISKS: u8 = 3;

/// Default pause between auto-solve moves in milliseconds
pub const DEFAULT_SOLVE_DELAY_MS: u64 = 400;

/// Disk size, `1..=N`
pub type Disk = u8;

/// Minimum number of moves needed to solve `disks` disks (`2^n - 1`).
///
/// ```
/// use hanoi_types::optimal_moves;
///
/// assert_eq!(optimal_moves(0), 0);
/// assert_eq!(optimal_moves(1), 1);
/// assert_eq!(optimal_moves(7), 127);
/// ```
pub fn optimal_moves(disks: u8) -> u64 {
    if disks >= 64 {
        return u64::MAX;
    }
    (1u64 << disks) - 1
}

/// The three pegs, left to right
///
/// - **Left**: index 0, where every game starts
/// - **Middle**: index 1, the spare peg of the canonical solve
/// - **Right**: index 2, the goal peg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Peg {
    Left,
    Middle,
    Right,
}

impl Peg {
    /// All pegs in index order
    pub const ALL: [Peg; PEG_COUNT] = [Peg::Left, Peg::Middle, Peg::Right];

    /// Peg where every game starts
    pub const START: Peg = Peg::Left;

    /// Peg that must hold every disk to win
    pub const GOAL: Peg = Peg::Right;

    /// Look up a peg by its host-facing index (0-2)
    ///
    /// # Examples
    ///
    /// ```
    /// use hanoi_types::Peg;
    ///
    /// assert_eq!(Peg::from_index(0), Some(Peg::Left));
    /// assert_eq!(Peg::from_index(1), Some(Peg::Middle));
    /// assert_eq!(Peg::from_index(3), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Host-facing index (0-2)
    pub fn index(self) -> usize {
        match self {
            Peg::Left => 0,
            Peg::Middle => 1,
            Peg::Right => 2,
        }
    }

    /// The peg that is neither `a` nor `b`.
    ///
    /// When `a == b` the result is the next peg to the right (wrapping), which
    /// keeps the function total; the solver never asks for that case.
    pub fn spare(a: Peg, b: Peg) -> Peg {
        // indices sum to 3 across all pegs
        match 3usize
            .checked_sub(a.index() + b.index())
            .and_then(Peg::from_index)
        {
            Some(p) if p != a && p != b => p,
            _ => Peg::ALL[(a.index() + 1) % PEG_COUNT],
        }
    }

    /// Parse a peg from a string: an index ("0"-"2") or a name
    /// ("left" | "l", "middle" | "m", "right" | "r"), case-insensitive.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "0" | "left" | "l" => Some(Peg::Left),
            "1" | "middle" | "m" => Some(Peg::Middle),
            "2" | "right" | "r" => Some(Peg::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Peg::Left => "left",
            Peg::Middle => "middle",
            Peg::Right => "right",
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who asked for a move
///
/// Manual moves close the auto-solve gate; solver moves do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrigin {
    Manual,
    Solver,
}

/// One executed (or planned) single-disk transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub disk: Disk,
    pub from: Peg,
    pub to: Peg,
}

impl Move {
    pub fn new(disk: Disk, from: Peg, to: Peg) -> Self {
        Self { disk, from, to }
    }

    /// The move that undoes this one
    pub fn reversed(&self) -> Self {
        Self {
            disk: self.disk,
            from: self.to,
            to: self.from,
        }
    }

    /// `(from, to)` as host-facing indices
    pub fn indices(&self) -> (usize, usize) {
        (self.from.index(), self.to.index())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "disk {} {} -> {}", self.disk, self.from, self.to)
    }
}

/// Lifecycle of one game
///
/// `Setup` is only observable inside construction/reset; a live game is
/// either `Playing` or `Won`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    Setup,
    Playing,
    Won,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Setup => "setup",
            GamePhase::Playing => "playing",
            GamePhase::Won => "won",
        }
    }
}
