//! Property tests: random play never breaks the puzzle invariants

use proptest::prelude::*;

use hanoi::core::{validator, GameController, GameError};
use hanoi::types::{GamePhase, Peg, MAX_DISKS, MIN_DISKS};

fn disks() -> impl Strategy<Value = u8> {
    MIN_DISKS..=MAX_DISKS
}

fn requests() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..3, 0usize..3), 0..200)
}

proptest! {
    #[test]
    fn test_random_requests_keep_state_well_formed(n in disks(), reqs in requests()) {
        let mut game = GameController::new(n).unwrap();

        for (from, to) in reqs {
            let before = game.pegs().clone();
            let count = game.move_count();
            let legal = validator::is_legal(&before, Peg::ALL[from], Peg::ALL[to]);

            match game.try_move(from, to) {
                Ok(mv) => {
                    prop_assert!(legal);
                    prop_assert_eq!(game.move_count(), count + 1);
                    prop_assert_eq!(game.session().history().last(), Some(&mv));
                }
                Err(GameError::AlreadyWon) => {
                    prop_assert_eq!(game.phase(), GamePhase::Won);
                    prop_assert_eq!(game.pegs(), &before);
                }
                Err(_) => {
                    prop_assert!(!legal);
                    prop_assert_eq!(game.pegs(), &before);
                    prop_assert_eq!(game.move_count(), count);
                }
            }

            prop_assert!(game.pegs().is_well_formed(n));
            prop_assert_eq!(game.move_count() as usize, game.session().history().len());
            prop_assert_eq!(game.is_won(), game.pegs().len(Peg::Right) == n as usize);
        }
    }

    #[test]
    fn test_move_then_undo_restores_state(n in disks(), reqs in requests(), pick in 0usize..6) {
        let mut game = GameController::new(n).unwrap();
        for (from, to) in reqs {
            let _ = game.try_move(from, to);
        }
        prop_assume!(!game.is_won());

        let legal = validator::legal_moves(game.pegs());
        let (from, to) = legal[pick % legal.len()];
        let before = game.pegs().clone();
        let count = game.move_count();

        let mv = game.move_disk(from, to).unwrap();
        prop_assume!(!game.is_won());
        prop_assert_eq!(game.undo(), Ok(mv));
        prop_assert_eq!(game.pegs(), &before);
        prop_assert_eq!(game.move_count(), count);
    }

    #[test]
    fn test_undo_everything_returns_to_start(n in disks(), reqs in requests()) {
        let mut game = GameController::new(n).unwrap();
        for (from, to) in reqs {
            let _ = game.try_move(from, to);
        }
        prop_assume!(!game.is_won());

        while game.undo().is_ok() {}
        prop_assert_eq!(game.move_count(), 0);
        prop_assert_eq!(game.pegs(), &hanoi::core::Pegs::initial(n));
    }
}
