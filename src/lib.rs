//! In-memory Battleship board model: ship placement validation, shot
//! resolution, and textual rendering. No I/O loop, networking, or opponent
//! logic lives here; an external caller supplies placements and fire
//! coordinates.

mod board;
mod common;
mod config;
mod logging;
mod placement;
mod render;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use logging::init_logging;
pub use placement::*;
pub use render::*;
pub use ship::*;
