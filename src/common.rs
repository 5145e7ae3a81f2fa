//! Common types for the board model: coordinates, fire outcomes, errors.

use core::fmt;

/// A board cell address as `(row, column)`, 0-based.
pub type Coord = (usize, usize);

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FireOutcome {
    /// Shot hit a ship segment that still has live segments elsewhere.
    Hit,
    /// Shot left the ship with no live segments.
    Sunk,
    /// Shot landed on open water.
    Miss,
}

impl FireOutcome {
    /// The literal outcome string reported to callers.
    pub fn as_str(&self) -> &'static str {
        match self {
            FireOutcome::Hit => "Hit!",
            FireOutcome::Sunk => "Sunk!",
            FireOutcome::Miss => "Miss!",
        }
    }
}

impl fmt::Display for FireOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by Board construction. Nothing after construction fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Total ship count differs from the required fleet size.
    WrongShipCount { found: usize },
    /// Tally of ships by deck count does not match the fleet table.
    /// `found[i]` is the number of ships with `i + 1` decks.
    WrongFleetComposition { found: [usize; 4] },
    /// Two distinct ships occupy touching cells (diagonals included).
    AdjacentShips { a: Coord, b: Coord },
    /// Ship endpoints are not an axis-aligned, non-empty inclusive range.
    InvalidShipGeometry { start: Coord, end: Coord },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::WrongShipCount { found } => {
                write!(
                    f,
                    "fleet must have {} ships, got {}",
                    crate::config::NUM_SHIPS,
                    found
                )
            }
            BoardError::WrongFleetComposition { found } => write!(
                f,
                "invalid deck counts: {}x1, {}x2, {}x3, {}x4",
                found[0], found[1], found[2], found[3]
            ),
            BoardError::AdjacentShips { a, b } => write!(
                f,
                "ships must not occupy neighboring cells: {:?} touches {:?}",
                a, b
            ),
            BoardError::InvalidShipGeometry { start, end } => write!(
                f,
                "ship endpoints {:?}..{:?} are not a straight inclusive range",
                start, end
            ),
        }
    }
}

impl std::error::Error for BoardError {}
