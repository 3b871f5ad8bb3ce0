//! Static terrain.
//!
//! The terrain board is built once from the configuration and never changes.
//! Rows are written as strings of `G` (ground) and `R` (roof).

use serde::{Deserialize, Serialize};

use super::coord::{Coordinate, BOARD_SIZE};
use crate::core::error::ConfigError;

/// Terrain kind of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Ground,
    Roof,
}

impl Terrain {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'G' => Some(Terrain::Ground),
            'R' => Some(Terrain::Roof),
            _ => None,
        }
    }
}

/// Immutable 10×10 terrain grid, row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTerrain")]
pub struct TerrainBoard {
    cells: Vec<Terrain>,
}

#[derive(Deserialize)]
struct RawTerrain {
    cells: Vec<Terrain>,
}

impl TryFrom<RawTerrain> for TerrainBoard {
    type Error = ConfigError;

    fn try_from(raw: RawTerrain) -> Result<Self, Self::Error> {
        if raw.cells.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(ConfigError::TerrainShape(format!(
                "expected {} cells, found {}",
                BOARD_SIZE * BOARD_SIZE,
                raw.cells.len()
            )));
        }
        Ok(Self { cells: raw.cells })
    }
}

impl TerrainBoard {
    /// Parse ten rows of ten `G`/`R` characters.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, ConfigError> {
        if rows.len() != BOARD_SIZE {
            return Err(ConfigError::TerrainShape(format!(
                "expected {BOARD_SIZE} rows, found {}",
                rows.len()
            )));
        }

        let mut cells = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != BOARD_SIZE {
                return Err(ConfigError::TerrainShape(format!(
                    "row {r} has {} cells, expected {BOARD_SIZE}",
                    row.chars().count()
                )));
            }
            for c in row.chars() {
                let terrain = Terrain::from_char(c).ok_or_else(|| {
                    ConfigError::TerrainShape(format!("row {r} has unknown terrain '{c}'"))
                })?;
                cells.push(terrain);
            }
        }

        Ok(Self { cells })
    }

    /// Terrain at a cell.
    #[must_use]
    pub fn get(&self, at: Coordinate) -> Terrain {
        self.cells[at.index()]
    }

    #[must_use]
    pub fn is_roof(&self, at: Coordinate) -> bool {
        self.get(at) == Terrain::Roof
    }
}
