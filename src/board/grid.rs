//! Occupants and the mutable occupant grid.
//!
//! Every cell holds exactly one [`Occupant`], `Empty` included. The grid is
//! backed by an `im::Vector`, so cloning a whole match state for batch
//! validation costs O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::coord::{Coordinate, Direction, BOARD_SIZE};
use super::terrain::TerrainBoard;
use crate::core::error::ConfigError;

/// A villager's name. Assassins are villagers whose identity was designated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(pub String);

impl Identity {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// What stands on a cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occupant {
    #[default]
    Empty,
    King,
    Knight,
    /// A revealed assassin. Keeps the identity it was revealed under.
    Assassin(Identity),
    /// A villager whose role is still hidden.
    Villager(Identity),
}

impl Occupant {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Occupant::Empty)
    }

    /// Pawns of the population (villagers and revealed assassins).
    #[must_use]
    pub fn is_population(&self) -> bool {
        matches!(self, Occupant::Villager(_) | Occupant::Assassin(_))
    }

    /// Only hidden villagers can be shoved by a knight.
    #[must_use]
    pub fn is_pushable(&self) -> bool {
        matches!(self, Occupant::Villager(_))
    }

    /// The villager identity, if this is a hidden villager.
    #[must_use]
    pub fn villager(&self) -> Option<&Identity> {
        match self {
            Occupant::Villager(id) => Some(id),
            _ => None,
        }
    }
}

impl std::fmt::Display for Occupant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Occupant::Empty => f.write_str("empty"),
            Occupant::King => f.write_str("king"),
            Occupant::Knight => f.write_str("knight"),
            Occupant::Assassin(id) => write!(f, "assassin {id}"),
            Occupant::Villager(id) => write!(f, "villager {id}"),
        }
    }
}

/// 10×10 grid of occupants, row-major.
///
/// Always exactly 100 cells; a deserialized grid of any other size is refused.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct OccupantGrid {
    cells: Vector<Occupant>,
}

#[derive(Deserialize)]
struct RawGrid {
    cells: Vector<Occupant>,
}

impl TryFrom<RawGrid> for OccupantGrid {
    type Error = ConfigError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        if raw.cells.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(ConfigError::GridSize(raw.cells.len()));
        }
        Ok(Self { cells: raw.cells })
    }
}

impl Default for OccupantGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl OccupantGrid {
    /// An empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: (0..BOARD_SIZE * BOARD_SIZE).map(|_| Occupant::Empty).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, at: Coordinate) -> &Occupant {
        &self.cells[at.index()]
    }

    /// Replace the occupant at `at`, returning the previous one.
    pub fn set(&mut self, at: Coordinate, occupant: Occupant) -> Occupant {
        self.cells.set(at.index(), occupant)
    }

    /// Empty the cell, returning what was there.
    pub fn take(&mut self, at: Coordinate) -> Occupant {
        self.set(at, Occupant::Empty)
    }

    #[must_use]
    pub fn is_free(&self, at: Coordinate) -> bool {
        self.get(at).is_empty()
    }

    /// Swap the occupants of two cells.
    pub fn swap(&mut self, a: Coordinate, b: Coordinate) {
        self.cells.swap(a.index(), b.index());
    }

    /// Iterate over `(coordinate, occupant)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &Occupant)> {
        Coordinate::all().zip(self.cells.iter())
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|o| !o.is_empty()).count()
    }

    /// Number of kings on the grid.
    #[must_use]
    pub fn king_count(&self) -> usize {
        self.cells.iter().filter(|o| **o == Occupant::King).count()
    }

    /// Where the king stands, if on the grid.
    #[must_use]
    pub fn find_king(&self) -> Option<Coordinate> {
        self.iter().find(|(_, o)| **o == Occupant::King).map(|(c, _)| c)
    }

    /// Where the hidden villager `identity` stands.
    #[must_use]
    pub fn find_villager(&self, identity: &Identity) -> Option<Coordinate> {
        self.iter()
            .find(|(_, o)| o.villager() == Some(identity))
            .map(|(c, _)| c)
    }

    /// First free cell past a run of pushable villagers.
    ///
    /// Scanning starts one step beyond `origin` and continues while cells are
    /// occupied. Returns `None` if the scan leaves the board, meets a pawn
    /// that can't be pushed, or would land a villager on a roof (every
    /// scanned cell after the first must be ground).
    #[must_use]
    pub fn find_next_free(
        &self,
        terrain: &TerrainBoard,
        origin: Coordinate,
        direction: Direction,
    ) -> Option<Coordinate> {
        let first = origin.step(direction)?;
        let mut cursor = first;
        loop {
            if cursor != first && terrain.is_roof(cursor) {
                return None;
            }
            let occupant = self.get(cursor);
            if occupant.is_empty() {
                return Some(cursor);
            }
            if !occupant.is_pushable() {
                return None;
            }
            cursor = cursor.step(direction)?;
        }
    }

    /// Slide the run between `origin` and `free` one cell towards `free`.
    ///
    /// After the shift `origin` is empty. `free` must be the result of
    /// [`Self::find_next_free`] for the same origin and direction.
    pub fn shift_run(&mut self, origin: Coordinate, free: Coordinate, direction: Direction) {
        let back = direction.opposite();
        let mut cursor = free;
        while cursor != origin {
            let Some(prev) = cursor.step(back) else {
                break;
            };
            let moved = self.take(prev);
            self.set(cursor, moved);
            cursor = prev;
        }
    }
}
