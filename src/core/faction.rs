//! Faction identification.
//!
//! ## Faction
//!
//! The game has exactly two sides. Wire messages and error texts refer to
//! them by index (`player 0`, `player 1`), so the enum keeps a stable
//! 0/1 mapping.

use serde::{Deserialize, Serialize};

/// One of the two sides of a match.
///
/// - `Assassins` (index 0): moves the population and the hidden assassins.
/// - `King` (index 1): moves the king and the knights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    /// The Assassins' faction, player 0.
    Assassins,
    /// The King's faction, player 1.
    King,
}

impl Faction {
    /// Both factions in seat order.
    pub const ALL: [Faction; 2] = [Faction::Assassins, Faction::King];

    /// Get the seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Faction::Assassins => 0,
            Faction::King => 1,
        }
    }

    /// The other faction.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Faction::Assassins => Faction::King,
            Faction::King => Faction::Assassins,
        }
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {}", self.index())
    }
}
