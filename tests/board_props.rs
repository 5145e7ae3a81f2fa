use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{random_board, Board, FireOutcome, BOARD_SIZE, NUM_SHIPS};

fn seeded_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    random_board(&mut rng)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fire_never_leaves_the_three_outcomes(
        seed in any::<u64>(),
        row in 0..2 * BOARD_SIZE,
        col in 0..2 * BOARD_SIZE,
    ) {
        let mut board = seeded_board(seed);
        let outcome = board.fire((row, col));
        prop_assert!(matches!(
            outcome,
            FireOutcome::Hit | FireOutcome::Sunk | FireOutcome::Miss
        ));
    }

    #[test]
    fn unoccupied_cells_always_miss(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
    ) {
        let mut board = seeded_board(seed);
        let occupied = board
            .ships()
            .iter()
            .any(|s| s.deck(row, col).is_some());
        let outcome = board.fire((row, col));
        if occupied {
            prop_assert_ne!(outcome, FireOutcome::Miss);
        } else {
            prop_assert_eq!(outcome, FireOutcome::Miss);
            prop_assert_eq!(board.fire((row, col)), FireOutcome::Miss);
        }
    }

    #[test]
    fn firing_every_cell_sinks_the_fleet(seed in any::<u64>()) {
        let mut board = seeded_board(seed);
        let mut sunk = 0;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if board.fire((row, col)) == FireOutcome::Sunk {
                    sunk += 1;
                }
            }
        }
        // each cell is fired once, so every ship reports sunk exactly once
        prop_assert_eq!(sunk, NUM_SHIPS);
        prop_assert!(board.ships().iter().all(|s| s.is_sunk()));
    }

    #[test]
    fn sunk_is_sticky(seed in any::<u64>(), extra_row in 0..BOARD_SIZE, extra_col in 0..BOARD_SIZE) {
        let mut board = seeded_board(seed);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                board.fire((row, col));
            }
        }
        board.fire((extra_row, extra_col));
        prop_assert!(board.ships().iter().all(|s| s.is_sunk()));
    }
}
