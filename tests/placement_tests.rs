use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{random_board, random_fleet, Board, NUM_SHIPS, TOTAL_SHIP_CELLS};

#[test]
fn test_random_fleet_always_validates() {
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let specs = random_fleet(&mut rng);
        assert_eq!(specs.len(), NUM_SHIPS);
        Board::new(&specs).unwrap_or_else(|e| panic!("seed {}: {}", seed, e));
    }
}

#[test]
fn test_random_board_composition() {
    let mut rng = SmallRng::seed_from_u64(7);
    let board = random_board(&mut rng);

    let mut counts = [0usize; 4];
    for ship in board.ships() {
        counts[ship.len() - 1] += 1;
    }
    assert_eq!(counts, [4, 3, 2, 1]);
    assert_eq!(
        board.ships().iter().map(|s| s.len()).sum::<usize>(),
        TOTAL_SHIP_CELLS
    );
}

#[test]
fn test_random_fleet_is_deterministic_per_seed() {
    let mut a = SmallRng::seed_from_u64(42);
    let mut b = SmallRng::seed_from_u64(42);
    assert_eq!(random_fleet(&mut a), random_fleet(&mut b));
}
