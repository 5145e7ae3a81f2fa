//! Random generation of valid fleets.

use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::common::Coord;
use crate::config::{BOARD_SIZE, FLEET};

const MAX_ATTEMPTS: usize = 100;

/// Generate endpoint pairs for a random fleet that satisfies validation.
///
/// Ships are placed longest first. Each placement samples an orientation
/// and origin, rejecting spots whose surrounding halo touches an already
/// occupied cell; if a ship cannot be placed within a bounded number of
/// attempts the whole fleet is restarted.
pub fn random_fleet<R: Rng>(rng: &mut R) -> Vec<(Coord, Coord)> {
    'fleet: loop {
        let mut occupied = [[false; BOARD_SIZE]; BOARD_SIZE];
        let mut specs = Vec::new();
        for class in FLEET.iter().rev() {
            for _ in 0..class.count() {
                match place_one(rng, &occupied, class.length()) {
                    Some((start, end)) => {
                        for (row, column) in cells(start, end) {
                            occupied[row][column] = true;
                        }
                        specs.push((start, end));
                    }
                    None => {
                        debug!("no room for a {}-deck ship, restarting fleet", class.length());
                        continue 'fleet;
                    }
                }
            }
        }
        return specs;
    }
}

/// Generate a random board directly.
pub fn random_board<R: Rng>(rng: &mut R) -> Board {
    loop {
        if let Ok(board) = Board::new(&random_fleet(rng)) {
            return board;
        }
    }
}

fn place_one<R: Rng>(
    rng: &mut R,
    occupied: &[[bool; BOARD_SIZE]; BOARD_SIZE],
    len: usize,
) -> Option<(Coord, Coord)> {
    for _ in 0..MAX_ATTEMPTS {
        let horizontal = rng.random::<bool>();
        let (max_row, max_col) = if horizontal {
            (BOARD_SIZE - 1, BOARD_SIZE - len)
        } else {
            (BOARD_SIZE - len, BOARD_SIZE - 1)
        };
        let row = rng.random_range(0..=max_row);
        let column = rng.random_range(0..=max_col);
        let (start, end) = if horizontal {
            ((row, column), (row, column + len - 1))
        } else {
            ((row, column), (row + len - 1, column))
        };
        if halo_free(occupied, start, end) {
            return Some((start, end));
        }
    }
    None
}

/// The cells of the inclusive range between two axis-aligned endpoints.
fn cells(start: Coord, end: Coord) -> Vec<Coord> {
    if start.0 == end.0 {
        (start.1..=end.1).map(|column| (start.0, column)).collect()
    } else {
        (start.0..=end.0).map(|row| (row, start.1)).collect()
    }
}

/// Check that no cell of the candidate ship, nor any of its neighbors,
/// is already occupied.
fn halo_free(
    occupied: &[[bool; BOARD_SIZE]; BOARD_SIZE],
    start: Coord,
    end: Coord,
) -> bool {
    for (row, column) in cells(start, end) {
        for row_offset in -1i64..=1 {
            for col_offset in -1i64..=1 {
                let r = row as i64 + row_offset;
                let c = column as i64 + col_offset;
                if r < 0 || c < 0 || r >= BOARD_SIZE as i64 || c >= BOARD_SIZE as i64 {
                    continue;
                }
                if occupied[r as usize][c as usize] {
                    return false;
                }
            }
        }
    }
    true
}
