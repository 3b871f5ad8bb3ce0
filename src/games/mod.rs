//! Concrete games built on the rules engine.

pub mod king_assassins;

pub use king_assassins::{KingAndAssassins, KingAndAssassinsBuilder};
