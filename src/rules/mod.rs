//! Rules: the engine trait, per-action execution and win evaluation.
//!
//! `RulesEngine` is the seam between a concrete game and its callers.
//! `moves` holds the legality checks and effects of each action kind;
//! `winner` is the pure win evaluator.

pub mod engine;
pub mod moves;
pub mod winner;

pub use engine::{GameResult, RulesEngine, WinReason};
