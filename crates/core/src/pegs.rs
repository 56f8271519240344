//! Peg module - the three disk stacks
//!
//! Each peg is a fixed-capacity stack read bottom-to-top (last element is the
//! top disk). Capacity is `MAX_DISKS`, so the whole arrangement lives inline
//! with no heap allocation.
//!
//! This module is pure bookkeeping: `push`/`pop` do not check the ordering
//! rule. Legality is decided by [`crate::validator`] and mutation only happens
//! through [`crate::session::GameSession`], which validates first.

use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::{Disk, Peg, MAX_DISKS, PEG_COUNT};

/// One peg's disks, bottom to top
pub type PegStack = ArrayVec<Disk, { MAX_DISKS as usize }>;

/// The three pegs of a puzzle
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pegs {
    stacks: [PegStack; PEG_COUNT],
}

impl Pegs {
    /// Create three empty pegs
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting arrangement: every disk on the left peg, largest at the bottom
    pub fn initial(disks: u8) -> Self {
        let mut pegs = Self::new();
        for disk in (1..=disks.min(MAX_DISKS)).rev() {
            pegs.stacks[Peg::START.index()].push(disk);
        }
        pegs
    }

    /// Build an arbitrary arrangement, bottom to top per peg.
    ///
    /// Returns `None` if a peg exceeds capacity. The result is not checked
    /// against the ordering rule; see [`Pegs::is_well_formed`].
    pub fn from_stacks(stacks: [&[Disk]; PEG_COUNT]) -> Option<Self> {
        let mut pegs = Self::new();
        for (slot, disks) in pegs.stacks.iter_mut().zip(stacks) {
            slot.try_extend_from_slice(disks).ok()?;
        }
        Some(pegs)
    }

    /// Top disk of `peg`, if any
    pub fn top(&self, peg: Peg) -> Option<Disk> {
        self.stacks[peg.index()].last().copied()
    }

    /// Number of disks on `peg`
    pub fn len(&self, peg: Peg) -> usize {
        self.stacks[peg.index()].len()
    }

    pub fn is_empty(&self, peg: Peg) -> bool {
        self.stacks[peg.index()].is_empty()
    }

    /// Disks on `peg`, bottom to top
    pub fn stack(&self, peg: Peg) -> &[Disk] {
        &self.stacks[peg.index()]
    }

    pub fn stacks(&self) -> &[PegStack; PEG_COUNT] {
        &self.stacks
    }

    /// Total number of disks across all pegs
    pub fn disk_count(&self) -> usize {
        self.stacks.iter().map(|s| s.len()).sum()
    }

    /// Place `disk` on top of `peg`. Returns false if the peg is full.
    pub(crate) fn push(&mut self, peg: Peg, disk: Disk) -> bool {
        self.stacks[peg.index()].try_push(disk).is_ok()
    }

    /// Remove and return the top disk of `peg`
    pub(crate) fn pop(&mut self, peg: Peg) -> Option<Disk> {
        self.stacks[peg.index()].pop()
    }

    /// Check both puzzle invariants for a game of `disks` disks:
    ///
    /// - every peg strictly decreases from bottom to top
    /// - the union of all pegs is exactly `{1..=disks}`, each once
    pub fn is_well_formed(&self, disks: u8) -> bool {
        let ordered = self
            .stacks
            .iter()
            .all(|s| s.windows(2).all(|w| w[1] < w[0]));
        if !ordered || self.disk_count() != disks as usize {
            return false;
        }

        // bit i set = disk i seen
        let mut seen: u32 = 0;
        for &disk in self.stacks.iter().flatten() {
            if disk == 0 || disk > disks {
                return false;
            }
            let bit = 1u32 << disk;
            if seen & bit != 0 {
                return false;
            }
            seen |= bit;
        }
        true
    }
}

impl fmt::Display for Pegs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stack) in self.stacks.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str("[")?;
            for (j, disk) in stack.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", disk)?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_arrangement() {
        let pegs = Pegs::initial(4);
        assert_eq!(pegs.stack(Peg::Left), &[4, 3, 2, 1]);
        assert!(pegs.is_empty(Peg::Middle));
        assert!(pegs.is_empty(Peg::Right));
        assert_eq!(pegs.top(Peg::Left), Some(1));
        assert_eq!(pegs.disk_count(), 4);
        assert!(pegs.is_well_formed(4));
    }

    #[test]
    fn test_push_pop_are_bookkeeping_only() {
        let mut pegs = Pegs::initial(3);
        assert_eq!(pegs.pop(Peg::Left), Some(1));
        assert!(pegs.push(Peg::Right, 1));
        assert_eq!(pegs.top(Peg::Right), Some(1));
        assert_eq!(pegs.len(Peg::Left), 2);
        assert!(pegs.is_well_formed(3));

        assert_eq!(pegs.pop(Peg::Middle), None);
    }

    #[test]
    fn test_push_respects_capacity() {
        let mut pegs = Pegs::initial(MAX_DISKS);
        assert!(!pegs.push(Peg::Left, 1));
        assert_eq!(pegs.len(Peg::Left), MAX_DISKS as usize);
    }

    #[test]
    fn test_from_stacks() {
        let pegs = Pegs::from_stacks([&[2], &[1], &[]]).unwrap();
        assert_eq!(pegs.top(Peg::Left), Some(2));
        assert_eq!(pegs.top(Peg::Middle), Some(1));
        assert!(pegs.is_well_formed(2));

        let too_tall = [8, 7, 6, 5, 4, 3, 2, 1];
        assert!(Pegs::from_stacks([&too_tall, &[], &[]]).is_none());
    }

    #[test]
    fn test_well_formed_rejects_bad_order() {
        let pegs = Pegs::from_stacks([&[1, 2], &[3], &[]]).unwrap();
        assert!(!pegs.is_well_formed(3));
    }

    #[test]
    fn test_well_formed_rejects_duplicates_and_gaps() {
        let dup = Pegs::from_stacks([&[3, 1], &[1], &[]]).unwrap();
        assert!(!dup.is_well_formed(3));

        let gap = Pegs::from_stacks([&[4, 1], &[2], &[]]).unwrap();
        assert!(!gap.is_well_formed(3));

        let missing = Pegs::from_stacks([&[3, 2], &[], &[]]).unwrap();
        assert!(!missing.is_well_formed(3));
    }

    #[test]
    fn test_display() {
        let pegs = Pegs::from_stacks([&[3, 2], &[], &[1]]).unwrap();
        assert_eq!(pegs.to_string(), "[3 2] [] [1]");
    }
}
