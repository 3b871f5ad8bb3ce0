//! King & Assassins implementation.

use tracing::{info, warn};

use crate::board::Identity;
use crate::core::{Action, ConfigError, Faction, GameConfig, GameState, InvalidMove};
use crate::protocol::{parse_submission, Submission};
use crate::rules::{moves, winner, GameResult, RulesEngine};

/// The King & Assassins rules, bound to one configuration.
#[derive(Clone, Debug)]
pub struct KingAndAssassins {
    config: GameConfig,
}

/// Builder for creating a match.
#[derive(Clone, Debug, Default)]
pub struct KingAndAssassinsBuilder {
    config: GameConfig,
}

impl KingAndAssassinsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom configuration instead of the standard board.
    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Set who wins when the deck runs out.
    #[must_use]
    pub fn deck_exhaustion_winner(mut self, winner: Faction) -> Self {
        self.config.deck_exhaustion_winner = winner;
        self
    }

    /// Set who wins once all three assassins are arrested or killed.
    #[must_use]
    pub fn neutralized_winner(mut self, winner: Faction) -> Self {
        self.config.neutralized_winner = winner;
        self
    }

    /// Build the rules and the initial state.
    ///
    /// The seed fixes the villager order and the deck order.
    pub fn build(self, seed: u64) -> Result<(KingAndAssassins, GameState), ConfigError> {
        let state = GameState::new(&self.config, seed)?;
        info!(seed, "match created");
        Ok((KingAndAssassins { config: self.config }, state))
    }
}

impl KingAndAssassins {
    /// Accept a submission from `faction`.
    ///
    /// Enforces turn order, designation-first and game-over, then applies
    /// the designation or the batch and hands the turn over. Returns the
    /// result if the submission decided the match.
    pub fn submit(
        &self,
        state: &mut GameState,
        faction: Faction,
        submission: Submission,
    ) -> Result<Option<GameResult>, InvalidMove> {
        let outcome = self.try_submit(state, faction, submission);
        match &outcome {
            Ok(Some(result)) => info!(winner = %result.winner, reason = ?result.reason, "match decided"),
            Ok(None) => {}
            Err(e) => warn!(faction = %faction, error = %e, "submission rejected"),
        }
        outcome
    }

    /// Decode a JSON payload and submit it.
    pub fn apply_message(
        &self,
        state: &mut GameState,
        faction: Faction,
        json: &str,
    ) -> Result<Option<GameResult>, InvalidMove> {
        let submission = parse_submission(state, json).inspect_err(|e| {
            warn!(faction = %faction, error = %e, "malformed submission");
        })?;
        self.submit(state, faction, submission)
    }

    fn try_submit(
        &self,
        state: &mut GameState,
        faction: Faction,
        submission: Submission,
    ) -> Result<Option<GameResult>, InvalidMove> {
        if self.is_terminal(state) {
            return Err(InvalidMove::GameOver);
        }
        let active = state.visible.active_faction;
        if faction != active {
            return Err(InvalidMove::OutOfTurn { faction, active });
        }

        match submission {
            Submission::Designate(names) => self.designate(state, &names)?,
            Submission::Batch(actions) => {
                if state.is_initial() {
                    return Err(InvalidMove::NotDesignated);
                }
                self.apply_batch(state, faction, &actions)?;
            }
        }

        state.visible.advance_turn();
        Ok(self.winner(state))
    }

    fn designate(&self, state: &mut GameState, names: &[Identity]) -> Result<(), InvalidMove> {
        if !state.is_initial() {
            return Err(InvalidMove::AlreadyDesignated);
        }
        state.designate(names)?;
        Ok(())
    }
}

impl RulesEngine for KingAndAssassins {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn apply_action(&self, state: &mut GameState, faction: Faction, action: &Action) -> Result<(), InvalidMove> {
        if state.is_initial() {
            return Err(InvalidMove::NotDesignated);
        }
        moves::execute(state, faction, action)
    }

    fn finish_batch(&self, state: &mut GameState, faction: Faction) {
        // Only the assassins' batches advance the tempo.
        if faction == Faction::Assassins {
            state.draw_card();
        }
    }

    fn winner(&self, state: &GameState) -> Option<GameResult> {
        winner::evaluate(state, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Coordinate, Direction, Occupant};
    use crate::core::action::ActionBatch;
    use crate::rules::WinReason;

    fn at(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    fn names_at(state: &GameState, cells: &[Coordinate]) -> Vec<Identity> {
        cells
            .iter()
            .map(|&c| state.visible.grid.get(c).villager().cloned().unwrap())
            .collect()
    }

    fn batch(actions: &[Action]) -> Submission {
        Submission::Batch(ActionBatch::from_slice(actions))
    }

    fn started(seed: u64) -> (KingAndAssassins, GameState) {
        let (game, mut state) = KingAndAssassinsBuilder::new().build(seed).unwrap();
        let names = names_at(&state, &[at(2, 1), at(5, 5), at(7, 5)]);
        game.submit(&mut state, Faction::Assassins, Submission::Designate(names))
            .unwrap();
        (game, state)
    }

    #[test]
    fn test_game_creation() {
        let (game, state) = KingAndAssassinsBuilder::new().build(42).unwrap();
        assert!(state.is_initial());
        assert_eq!(game.config().deck_exhaustion_winner, Faction::Assassins);
        assert_eq!(game.config().neutralized_winner, Faction::Assassins);
        assert_eq!(game.winner(&state), None);
    }

    #[test]
    fn test_designation_passes_turn() {
        let (_, state) = started(42);
        assert!(!state.is_initial());
        assert!(state.visible.card.is_some());
        assert_eq!(state.visible.active_faction, Faction::King);
        assert_eq!(state.visible.turn_number, 2);
    }

    #[test]
    fn test_batch_before_designation() {
        let (game, mut state) = KingAndAssassinsBuilder::new().build(42).unwrap();
        let result = game.submit(&mut state, Faction::Assassins, batch(&[]));
        assert_eq!(result, Err(InvalidMove::NotDesignated));
        let result = game.apply_action(&mut state, Faction::Assassins, &Action::Reveal(at(5, 5)));
        assert_eq!(result, Err(InvalidMove::NotDesignated));
    }

    #[test]
    fn test_second_designation_rejected() {
        let (game, mut state) = started(42);
        game.submit(&mut state, Faction::King, batch(&[])).unwrap();
        let names = names_at(&state, &[at(1, 7), at(3, 4), at(3, 6)]);
        let result = game.submit(&mut state, Faction::Assassins, Submission::Designate(names));
        assert_eq!(result, Err(InvalidMove::AlreadyDesignated));
    }

    #[test]
    fn test_out_of_turn() {
        let (game, mut state) = started(42);
        let result = game.submit(&mut state, Faction::Assassins, batch(&[]));
        assert_eq!(
            result,
            Err(InvalidMove::OutOfTurn {
                faction: Faction::Assassins,
                active: Faction::King,
            })
        );
    }

    #[test]
    fn test_tempo_only_on_assassin_batches() {
        let (game, mut state) = started(42);
        let remaining = state.hidden().deck().len();

        game.submit(&mut state, Faction::King, batch(&[Action::Move(at(1, 3), Direction::East)]))
            .unwrap();
        assert_eq!(state.hidden().deck().len(), remaining);

        game.submit(&mut state, Faction::Assassins, batch(&[])).unwrap();
        assert_eq!(state.hidden().deck().len(), remaining - 1);
    }

    #[test]
    fn test_failed_batch_is_atomic() {
        let (game, mut state) = started(42);
        let before = state.clone();

        let result = game.submit(
            &mut state,
            Faction::King,
            batch(&[
                Action::Move(at(1, 3), Direction::East),
                Action::Move(at(5, 5), Direction::North),
            ]),
        );

        match result {
            Err(InvalidMove::Rejected { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_history_and_last_move() {
        let (game, mut state) = started(42);
        let step = Action::Move(at(1, 3), Direction::East);
        game.submit(&mut state, Faction::King, batch(&[step])).unwrap();

        assert_eq!(state.visible.last_move, vec![step]);
        let record = state.visible.history.back().unwrap();
        assert_eq!(record.faction, Faction::King);
        assert_eq!(record.turn, 2);
    }

    #[test]
    fn test_game_over_rejects_submissions() {
        let (game, mut state) = started(42);
        state.visible.grid.take(at(9, 9));
        state.visible.grid.set(at(2, 3), Occupant::King);

        let result = game
            .submit(&mut state, Faction::King, batch(&[Action::Move(at(2, 3), Direction::West)]))
            .unwrap();
        assert_eq!(result, Some(GameResult::new(Faction::King, WinReason::CastleReached)));

        let result = game.submit(&mut state, Faction::Assassins, batch(&[]));
        assert_eq!(result, Err(InvalidMove::GameOver));
    }

    #[test]
    fn test_builder_win_overrides() {
        let (game, _) = KingAndAssassinsBuilder::new()
            .deck_exhaustion_winner(Faction::King)
            .neutralized_winner(Faction::King)
            .build(42)
            .unwrap();
        assert_eq!(game.config().deck_exhaustion_winner, Faction::King);
        assert_eq!(game.config().neutralized_winner, Faction::King);
    }

    #[test]
    fn test_apply_message() {
        let (game, mut state) = KingAndAssassinsBuilder::new().build(42).unwrap();
        let names = names_at(&state, &[at(2, 1), at(5, 5), at(7, 5)]);
        let json = crate::protocol::designation_message(&names).to_string();

        game.apply_message(&mut state, Faction::Assassins, &json).unwrap();
        assert!(!state.is_initial());

        game.apply_message(&mut state, Faction::King, r#"{"actions": [["move", 1, 3, "E"]]}"#)
            .unwrap();
        assert_eq!(state.visible.grid.get(at(1, 4)), &Occupant::Knight);
    }
}
