//! Match configuration.
//!
//! `GameConfig` holds every fixed datum of a match: terrain, starting
//! positions, population names, castle doors, the card catalog and the
//! deck-exhaustion tie-break. `GameConfig::standard()` is the published
//! board; tests and variants build their own with the `with_*` methods or
//! load one from JSON.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::faction::Faction;
use crate::board::{CastleDoor, Coordinate, Direction, TerrainBoard};
use crate::cards::{Card, STANDARD_CATALOG};

/// Standard terrain, `G` = ground, `R` = roof.
pub const STANDARD_TERRAIN: [&str; 10] = [
    "RRRRRGGRRR",
    "RRRRRGGRRR",
    "RGGGGGGGGR",
    "RGGGGGGGGG",
    "RGGGGRRGGG",
    "GGGGGRRGGG",
    "RRGGGRRGGG",
    "RRGGGRRGGG",
    "RRGGGGGGGG",
    "RRGGGGGGGG",
];

/// Standard population, in catalog order (placement order is shuffled).
pub const STANDARD_POPULATION: [&str; 12] = [
    "monk",
    "plumwoman",
    "appleman",
    "hooker",
    "fishwoman",
    "butcher",
    "blacksmith",
    "shepherd",
    "squire",
    "carpenter",
    "witchhunter",
    "farmer",
];

const STANDARD_KING: Coordinate = cell(9, 9);

const STANDARD_KNIGHTS: [Coordinate; 7] = [
    cell(1, 3),
    cell(3, 0),
    cell(7, 8),
    cell(8, 7),
    cell(8, 8),
    cell(8, 9),
    cell(9, 8),
];

const STANDARD_VILLAGERS: [Coordinate; 12] = [
    cell(1, 7),
    cell(2, 1),
    cell(3, 4),
    cell(3, 6),
    cell(5, 2),
    cell(5, 5),
    cell(5, 7),
    cell(5, 9),
    cell(7, 1),
    cell(7, 5),
    cell(8, 3),
    cell(9, 5),
];

const STANDARD_DOORS: [(Coordinate, Direction); 2] = [(cell(3, 2), Direction::North), (cell(4, 1), Direction::West)];

/// Number of villagers secretly designated as assassins.
pub const ASSASSIN_COUNT: usize = 3;

/// Board cell for the constant tables above; an off-board entry fails to compile.
const fn cell(row: usize, col: usize) -> Coordinate {
    match Coordinate::new(row, col) {
        Some(at) => at,
        None => panic!("standard board coordinate is off the board"),
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Ten rows of ten `G`/`R` characters.
    pub terrain: Vec<String>,

    /// Starting cell of the king.
    pub king: Coordinate,

    /// Starting cells of the knights.
    pub knights: Vec<Coordinate>,

    /// Villager cells, filled in order with the shuffled population.
    pub villager_cells: Vec<Coordinate>,

    /// Population identity names. Must cover every villager cell.
    pub population: Vec<String>,

    /// Castle doors; the cell beyond each is a winning cell for the king.
    pub castle_doors: Vec<CastleDoor>,

    /// Tempo cards, shuffled once per match.
    pub catalog: Vec<Card>,

    /// Who wins when the deck runs out.
    pub deck_exhaustion_winner: Faction,

    /// Who wins once all three assassins are arrested or killed.
    pub neutralized_winner: Faction,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl GameConfig {
    /// The published King & Assassins setup.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            terrain: STANDARD_TERRAIN.iter().map(|r| (*r).to_string()).collect(),
            king: STANDARD_KING,
            knights: STANDARD_KNIGHTS.to_vec(),
            villager_cells: STANDARD_VILLAGERS.to_vec(),
            population: STANDARD_POPULATION.iter().map(|n| (*n).to_string()).collect(),
            castle_doors: STANDARD_DOORS
                .iter()
                .map(|&(at, facing)| CastleDoor::new(at, facing))
                .collect(),
            catalog: STANDARD_CATALOG.to_vec(),
            deck_exhaustion_winner: Faction::Assassins,
            neutralized_winner: Faction::Assassins,
        }
    }

    /// Load and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the terrain rows.
    #[must_use]
    pub fn with_terrain<S: AsRef<str>>(mut self, rows: &[S]) -> Self {
        self.terrain = rows.iter().map(|r| r.as_ref().to_string()).collect();
        self
    }

    /// Move the king's starting cell.
    #[must_use]
    pub fn with_king(mut self, king: Coordinate) -> Self {
        self.king = king;
        self
    }

    /// Replace the knights' starting cells.
    #[must_use]
    pub fn with_knights(mut self, knights: Vec<Coordinate>) -> Self {
        self.knights = knights;
        self
    }

    /// Replace the villager cells.
    #[must_use]
    pub fn with_villager_cells(mut self, cells: Vec<Coordinate>) -> Self {
        self.villager_cells = cells;
        self
    }

    /// Replace the population names.
    #[must_use]
    pub fn with_population<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.population = names.iter().map(|n| n.as_ref().to_string()).collect();
        self
    }

    /// Replace the castle doors.
    #[must_use]
    pub fn with_castle_doors(mut self, doors: Vec<CastleDoor>) -> Self {
        self.castle_doors = doors;
        self
    }

    /// Replace the card catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Vec<Card>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Set who wins when the deck runs out.
    #[must_use]
    pub fn with_deck_exhaustion_winner(mut self, winner: Faction) -> Self {
        self.deck_exhaustion_winner = winner;
        self
    }

    /// Set who wins once every assassin is neutralized.
    #[must_use]
    pub fn with_neutralized_winner(mut self, winner: Faction) -> Self {
        self.neutralized_winner = winner;
        self
    }

    /// Parse the terrain rows.
    pub fn terrain_board(&self) -> Result<TerrainBoard, ConfigError> {
        TerrainBoard::parse(&self.terrain)
    }

    /// Check that the configuration describes a legal starting position.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.terrain_board()?;

        let mut taken: FxHashSet<Coordinate> = FxHashSet::default();
        let pieces = std::iter::once(&self.king)
            .chain(&self.knights)
            .chain(&self.villager_cells);
        for &at in pieces {
            if !taken.insert(at) {
                return Err(ConfigError::Overlap(at.row(), at.col()));
            }
        }

        for door in &self.castle_doors {
            if door.target().is_none() {
                return Err(ConfigError::OutOfBounds(door.at.row(), door.at.col()));
            }
        }

        if self.villager_cells.len() < ASSASSIN_COUNT {
            return Err(ConfigError::TooFewVillagers(self.villager_cells.len()));
        }
        if self.population.len() < self.villager_cells.len() {
            return Err(ConfigError::NotEnoughNames {
                cells: self.villager_cells.len(),
                names: self.population.len(),
            });
        }
        let mut names: FxHashSet<&str> = FxHashSet::default();
        for name in &self.population {
            if !names.insert(name.as_str()) {
                return Err(ConfigError::DuplicateName(name.clone()));
            }
        }

        if self.catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        Ok(())
    }
}
