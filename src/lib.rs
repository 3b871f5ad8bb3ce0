//! # king-assassins
//!
//! Rules engine for King & Assassins, a two-faction hidden-role board game.
//!
//! ## Design Principles
//!
//! 1. **Closed vocabulary**: occupants, directions and actions are enums, so
//!    every rule is an exhaustive match.
//!
//! 2. **Atomic batches**: a faction's batch is applied to a copy of the state
//!    and committed only if every action is legal.
//!
//! 3. **Reproducible setup**: villager order and deck order come from seeded
//!    context streams of one `GameRng`.
//!
//! ## Architecture
//!
//! - **Visible / hidden split**: `VisibleState` is what both sides see;
//!   `HiddenState` holds the assassin identities and the deck order.
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs` for the grid,
//!   arrests and history.
//!
//! ## Modules
//!
//! - `core`: Factions, RNG, actions, configuration, state, errors
//! - `board`: Coordinates, terrain and the occupant grid
//! - `cards`: Tempo cards and the deck
//! - `rules`: RulesEngine trait, per-action execution, win evaluation
//! - `games`: The King & Assassins game (builder, turn order)
//! - `protocol`: JSON submissions

pub mod core;
pub mod board;
pub mod cards;
pub mod rules;
pub mod games;
pub mod protocol;

// Re-export commonly used types
pub use crate::core::{
    Faction,
    GameRng, GameRngState,
    GameConfig,
    Action, ActionBatch, ActionKind, ActionRecord,
    GameState, VisibleState, HiddenState, KingHealth, Killed, Snapshot,
    InvalidMove, Rejection, DesignationError, ConfigError,
};

pub use crate::board::{CastleDoor, Coordinate, Direction, Identity, Occupant, OccupantGrid, Terrain, TerrainBoard};

pub use crate::cards::{Card, Deck, STANDARD_CATALOG};

pub use crate::rules::{GameResult, RulesEngine, WinReason};

pub use crate::games::{KingAndAssassins, KingAndAssassinsBuilder};

pub use crate::protocol::Submission;
