//! Move validation
//!
//! Pure functions over [`Pegs`]; nothing here mutates state, so hosts can call
//! them freely (e.g. to highlight legal destinations).

use arrayvec::ArrayVec;

use crate::error::MoveError;
use crate::pegs::Pegs;
use crate::types::{Disk, Peg, PEG_COUNT};

/// Check a move and return the disk that would travel.
///
/// Rules, in order:
/// 1. source and destination differ
/// 2. source peg has a disk
/// 3. destination is empty or its top disk is larger
pub fn check(pegs: &Pegs, from: Peg, to: Peg) -> Result<Disk, MoveError> {
    if from == to {
        return Err(MoveError::SamePeg(from));
    }

    let disk = pegs.top(from).ok_or(MoveError::SourceEmpty(from))?;

    match pegs.top(to) {
        Some(onto) if onto < disk => Err(MoveError::SizeViolation { disk, onto }),
        _ => Ok(disk),
    }
}

pub fn is_legal(pegs: &Pegs, from: Peg, to: Peg) -> bool {
    check(pegs, from, to).is_ok()
}

/// Pegs the top disk of `from` may currently move to
pub fn legal_targets(pegs: &Pegs, from: Peg) -> ArrayVec<Peg, PEG_COUNT> {
    Peg::ALL
        .into_iter()
        .filter(|&to| is_legal(pegs, from, to))
        .collect()
}

/// Every legal `(from, to)` pair in the current arrangement
pub fn legal_moves(pegs: &Pegs) -> ArrayVec<(Peg, Peg), 6> {
    let mut out = ArrayVec::new();
    for from in Peg::ALL {
        for to in legal_targets(pegs, from) {
            out.push((from, to));
        }
    }
    out
}
