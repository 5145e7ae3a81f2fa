//! Board state: ship ownership, placement validation, fire dispatch.

use std::collections::HashMap;

use core::fmt;
use log::debug;

use crate::common::{BoardError, Coord, FireOutcome};
use crate::config::{BOARD_SIZE, FLEET, NUM_SHIPS};
use crate::render::Cell;
use crate::ship::Ship;

/// Serializable board snapshot for saving or syncing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub ships: Vec<Ship>,
}

/// A full board: the fleet plus a cell-to-ship lookup built at construction.
///
/// Shape is immutable after construction; only deck alive/sunk state changes,
/// through [`Board::fire`].
#[derive(Debug, Clone)]
pub struct Board {
    ships: Vec<Ship>,
    index: HashMap<Coord, usize>,
}

impl Board {
    /// Build a board from `(start, end)` endpoint pairs, one per ship.
    ///
    /// Every ship is constructed and indexed first, then the fleet is
    /// validated as a whole: ship count, composition by deck count, and the
    /// no-touching rule. The first failing check wins; on any failure no
    /// board value is produced.
    pub fn new(specs: &[(Coord, Coord)]) -> Result<Self, BoardError> {
        let mut ships = Vec::with_capacity(specs.len());
        let mut index = HashMap::new();
        for &(start, end) in specs {
            let ship = Ship::new(start, end)?;
            let id = ships.len();
            for deck in ship.decks() {
                // last write wins; overlaps surface in validation below
                index.insert((deck.row(), deck.column()), id);
            }
            ships.push(ship);
        }
        let board = Self { ships, index };
        board.validate()?;
        debug!("board constructed: {} ships, {} cells", board.ships.len(), board.index.len());
        Ok(board)
    }

    /// Immutable view of the fleet.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Resolve a shot at `location` and report the outcome.
    ///
    /// Occupied cells delegate to the owning ship; anything else, including
    /// out-of-range coordinates, is a miss. Never fails, and a cell may be
    /// fired any number of times.
    pub fn fire(&mut self, location: Coord) -> FireOutcome {
        let outcome = match self.index.get(&location) {
            Some(&id) => self.ships[id].fire(location.0, location.1),
            None => FireOutcome::Miss,
        };
        debug!("fire at {:?}: {}", location, outcome);
        outcome
    }

    /// Row-major grid of presentation cells.
    ///
    /// Live decks render as [`Cell::Ship`], dead decks as [`Cell::Hit`]
    /// until their ship sinks, then as [`Cell::Sunk`]. Decks lying outside
    /// the grid window are skipped; bounds are never validated, so the
    /// caller may have placed some.
    pub fn grid(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = [[Cell::Water; BOARD_SIZE]; BOARD_SIZE];
        for ship in &self.ships {
            for deck in ship.decks() {
                if deck.row() >= BOARD_SIZE || deck.column() >= BOARD_SIZE {
                    continue;
                }
                grid[deck.row()][deck.column()] = if deck.is_alive() {
                    Cell::Ship
                } else if ship.is_sunk() {
                    Cell::Sunk
                } else {
                    Cell::Hit
                };
            }
        }
        grid
    }

    fn validate(&self) -> Result<(), BoardError> {
        if self.ships.len() != NUM_SHIPS {
            return Err(BoardError::WrongShipCount {
                found: self.ships.len(),
            });
        }

        // tally ships by deck count; lengths outside the table are not
        // tallied, which forces a composition mismatch
        let mut found = [0usize; 4];
        for ship in &self.ships {
            let len = ship.len();
            if (1..=4).contains(&len) {
                found[len - 1] += 1;
            }
        }
        let mut expected = [0usize; 4];
        for class in FLEET {
            expected[class.length() - 1] = class.count();
        }
        if found != expected {
            return Err(BoardError::WrongFleetComposition { found });
        }

        // scan the 3x3 block around every deck; the center probe is what
        // catches two ships stacked on one cell
        for (id, ship) in self.ships.iter().enumerate() {
            for deck in ship.decks() {
                for row_offset in -1i64..=1 {
                    for col_offset in -1i64..=1 {
                        let row = deck.row() as i64 + row_offset;
                        let column = deck.column() as i64 + col_offset;
                        if row < 0 || column < 0 {
                            continue;
                        }
                        let neighbor = (row as usize, column as usize);
                        if let Some(&other) = self.index.get(&neighbor) {
                            if other != id {
                                return Err(BoardError::AdjacentShips {
                                    a: (deck.row(), deck.column()),
                                    b: neighbor,
                                });
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::render(self))
    }
}

impl From<&Board> for BoardState {
    fn from(board: &Board) -> Self {
        BoardState {
            ships: board.ships.clone(),
        }
    }
}

impl From<BoardState> for Board {
    /// Rebuild a board from a snapshot. The index is reconstructed from the
    /// deck positions; the snapshot came from a validated board, so
    /// validation is not rerun.
    fn from(state: BoardState) -> Self {
        let mut index = HashMap::new();
        for (id, ship) in state.ships.iter().enumerate() {
            for deck in ship.decks() {
                index.insert((deck.row(), deck.column()), id);
            }
        }
        Board {
            ships: state.ships,
            index,
        }
    }
}
