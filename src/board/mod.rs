//! The board: addressing, static terrain and the occupant grid.
//!
//! Terrain never changes after construction. The occupant grid is mutated
//! by every accepted action.

pub mod coord;
pub mod terrain;
pub mod grid;

pub use coord::{CastleDoor, Coordinate, Direction, BOARD_SIZE};
pub use terrain::{Terrain, TerrainBoard};
pub use grid::{Identity, Occupant, OccupantGrid};
