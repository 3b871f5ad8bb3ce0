//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - Whether an action is legal, and what it does
//! - What happens when a faction finishes its batch
//! - Win conditions

use tracing::{debug, info};

use crate::core::action::Action;
use crate::core::config::GameConfig;
use crate::core::error::InvalidMove;
use crate::core::faction::Faction;
use crate::core::state::GameState;

/// Why a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WinReason {
    /// The king stands on a castle door's winning cell.
    CastleReached,
    /// All three assassins were arrested or killed.
    AssassinsNeutralized,
    /// The tempo deck ran out.
    DeckExhausted,
    /// The king was attacked to death.
    KingKilled,
}

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameResult {
    pub winner: Faction,
    pub reason: WinReason,
}

impl GameResult {
    #[must_use]
    pub const fn new(winner: Faction, reason: WinReason) -> Self {
        Self { winner, reason }
    }

    /// Check if a faction won.
    #[must_use]
    pub fn is_winner(&self, faction: Faction) -> bool {
        self.winner == faction
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_action`: Must leave the state untouched when it fails
/// - `finish_batch`: Runs once per accepted batch, after its actions
/// - `winner`: Pure; return `None` while the match is undecided
pub trait RulesEngine {
    /// Get the match configuration.
    fn config(&self) -> &GameConfig;

    /// Check and apply one action on behalf of `faction`.
    fn apply_action(&self, state: &mut GameState, faction: Faction, action: &Action) -> Result<(), InvalidMove>;

    /// Bookkeeping after a batch (tempo draws and the like).
    fn finish_batch(&self, state: &mut GameState, faction: Faction);

    /// Evaluate win conditions.
    fn winner(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Apply a whole batch atomically.
    ///
    /// The batch runs against a copy of `state`; the copy replaces `state`
    /// only if every action succeeds. On failure the error carries the index
    /// of the offending action and `state` is unchanged.
    fn apply_batch(&self, state: &mut GameState, faction: Faction, actions: &[Action]) -> Result<(), InvalidMove> {
        let mut scratch = state.clone();

        for (index, action) in actions.iter().enumerate() {
            self.apply_action(&mut scratch, faction, action)
                .map_err(|e| e.at_index(index))?;
            debug!(faction = %faction, action = %action, "action applied");
        }

        scratch.visible.record_batch(faction, actions);
        self.finish_batch(&mut scratch, faction);
        *state = scratch;

        info!(faction = %faction, actions = actions.len(), "batch committed");
        Ok(())
    }

    /// Check if the match is over.
    fn is_terminal(&self, state: &GameState) -> bool {
        self.winner(state).is_some()
    }
}
