//! Ship and deck definitions, built from endpoint coordinate pairs.

use crate::common::{BoardError, Coord, FireOutcome};

/// One entry of the fleet composition table: how many ships of a length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    length: usize,
    count: usize,
}

impl ShipClass {
    /// Create a new fleet entry.
    pub const fn new(length: usize, count: usize) -> Self {
        Self { length, count }
    }

    /// Deck count of ships in this class.
    pub fn length(&self) -> usize {
        self.length
    }

    /// How many ships of this class the fleet requires.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// A single cell occupied by a ship segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    row: usize,
    column: usize,
    alive: bool,
}

impl Deck {
    fn new(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            alive: true,
        }
    }

    /// Row of the cell.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column of the cell.
    pub fn column(&self) -> usize {
        self.column
    }

    /// `false` once the deck has been hit.
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

/// A straight line of decks between two endpoints, with sunk tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    decks: Vec<Deck>,
    sunk: bool,
}

impl Ship {
    /// Build a ship spanning the inclusive range between `start` and `end`.
    ///
    /// Endpoints must share a row or a column, ordered start-to-end along
    /// the varying axis. Anything else would yield a phantom ship with no
    /// decks, so it is rejected up front.
    pub fn new(start: Coord, end: Coord) -> Result<Self, BoardError> {
        let mut decks = Vec::new();
        if start.0 == end.0 {
            for column in start.1..=end.1 {
                decks.push(Deck::new(start.0, column));
            }
        } else if start.1 == end.1 {
            for row in start.0..=end.0 {
                decks.push(Deck::new(row, start.1));
            }
        }
        if decks.is_empty() {
            return Err(BoardError::InvalidShipGeometry { start, end });
        }
        Ok(Self { decks, sunk: false })
    }

    /// The deck at (`row`, `column`), if this ship occupies that cell.
    pub fn deck(&self, row: usize, column: usize) -> Option<&Deck> {
        self.decks
            .iter()
            .find(|d| d.row == row && d.column == column)
    }

    /// All decks, in order from start endpoint to end endpoint.
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// Number of decks.
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    /// `true` if the ship has no decks. Construction guarantees at least one.
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// `true` once every deck is dead. Never resets.
    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Resolve a shot at (`row`, `column`).
    ///
    /// Kills the matching deck, then re-evaluates the whole ship: all decks
    /// dead reports `Sunk`, otherwise `Hit`. The outcome is recomputed on
    /// every call, so re-firing a dead deck of a fully dead ship still
    /// reports `Sunk`. A cell this ship does not occupy reports `Miss`,
    /// though the board only dispatches mapped cells here.
    pub fn fire(&mut self, row: usize, column: usize) -> FireOutcome {
        match self
            .decks
            .iter_mut()
            .find(|d| d.row == row && d.column == column)
        {
            Some(deck) => {
                deck.alive = false;
                if self.decks.iter().all(|d| !d.alive) {
                    self.sunk = true;
                    FireOutcome::Sunk
                } else {
                    FireOutcome::Hit
                }
            }
            None => FireOutcome::Miss,
        }
    }
}
