use crate::ship::ShipClass;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 10;

/// Required fleet composition: four single-deck ships up to one four-decker.
pub const FLEET: [ShipClass; 4] = [
    ShipClass::new(1, 4),
    ShipClass::new(2, 3),
    ShipClass::new(3, 2),
    ShipClass::new(4, 1),
];

pub const TOTAL_SHIP_CELLS: usize = 20;
