//! Text presentation of board state.

use crate::board::Board;

/// Presentation state of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Unoccupied water.
    Water,
    /// Live ship segment.
    Ship,
    /// Dead segment of a ship that still floats.
    Hit,
    /// Segment of a fully sunk ship.
    Sunk,
}

impl Cell {
    /// Single-character marker used in text rendering.
    pub fn marker(&self) -> char {
        match self {
            Cell::Water => '~',
            Cell::Ship => '□',
            Cell::Hit => '*',
            Cell::Sunk => 'x',
        }
    }
}

/// Render the board as marker rows joined by single spaces, one line per row.
pub fn render(board: &Board) -> String {
    board
        .grid()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.marker().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
