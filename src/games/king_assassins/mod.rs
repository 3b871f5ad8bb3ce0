//! King & Assassins.
//!
//! Two factions on a 10x10 town board:
//! - The King's faction escorts the king to a castle door with his knights
//! - The Assassins' faction hides three assassins in the crowd of villagers
//!
//! The assassins move first by secretly designating three villagers. After
//! that each faction submits one batch of actions per turn. Every assassin
//! batch draws the next tempo card, and an empty deck ends the match in favor
//! of the configured side.

mod game;

pub use game::{KingAndAssassins, KingAndAssassinsBuilder};
