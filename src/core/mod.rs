//! Core engine types: factions, RNG, actions, configuration, state, errors.
//!
//! Everything here is board-game plumbing that the rules build on; the
//! legality of individual actions lives in `rules`.

pub mod faction;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use faction::Faction;
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
pub use action::{Action, ActionBatch, ActionKind, ActionRecord};
pub use state::{GameState, HiddenState, Killed, KingHealth, Snapshot, VisibleState};
pub use error::{ConfigError, DesignationError, InvalidMove, Rejection};
