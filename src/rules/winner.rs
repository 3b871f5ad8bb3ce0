//! Win evaluation.
//!
//! Conditions are checked in a fixed priority order, so a king reaching the
//! castle on the same turn the deck runs out still wins:
//!
//! 1. King on a castle door's winning cell: King's faction.
//! 2. All three assassins arrested or killed: `neutralized_winner`
//!    (Assassins' faction unless configured otherwise).
//! 3. Deck exhausted: `deck_exhaustion_winner`.
//! 4. King dead: Assassins' faction.

use super::engine::{GameResult, WinReason};
use crate::core::config::{GameConfig, ASSASSIN_COUNT};
use crate::core::faction::Faction;
use crate::core::state::{GameState, KingHealth};

/// Evaluate the win conditions. `None` while the match is undecided.
#[must_use]
pub fn evaluate(state: &GameState, config: &GameConfig) -> Option<GameResult> {
    let visible = &state.visible;

    if visible.king_at_castle() {
        return Some(GameResult::new(Faction::King, WinReason::CastleReached));
    }
    if state.neutralized_assassins() >= ASSASSIN_COUNT {
        return Some(GameResult::new(config.neutralized_winner, WinReason::AssassinsNeutralized));
    }
    if state.hidden().deck().is_empty() {
        return Some(GameResult::new(config.deck_exhaustion_winner, WinReason::DeckExhausted));
    }
    if visible.king == KingHealth::Dead {
        return Some(GameResult::new(Faction::Assassins, WinReason::KingKilled));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Coordinate, Identity, Occupant};
    use crate::cards::Card;

    fn at(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    fn designated(config: &GameConfig) -> (GameState, Vec<Identity>) {
        let mut state = GameState::new(config, 9).unwrap();
        let names: Vec<Identity> = [at(2, 1), at(5, 5), at(7, 5)]
            .iter()
            .map(|&c| state.visible.grid.get(c).villager().cloned().unwrap())
            .collect();
        state.designate(&names).unwrap();
        (state, names)
    }

    fn king_to(state: &mut GameState, target: Coordinate) {
        let king = state.visible.grid.find_king().unwrap();
        state.visible.grid.take(king);
        state.visible.grid.set(target, Occupant::King);
    }

    fn one_card() -> GameConfig {
        GameConfig::standard().with_catalog(vec![Card::new(1, 5, false, 4)])
    }

    #[test]
    fn test_pending_at_start() {
        let config = GameConfig::standard();
        let state = GameState::new(&config, 9).unwrap();
        assert_eq!(evaluate(&state, &config), None);
        let (state, _) = designated(&config);
        assert_eq!(evaluate(&state, &config), None);
    }

    #[test]
    fn test_castle_reached() {
        let config = GameConfig::standard();
        let (mut state, _) = designated(&config);
        king_to(&mut state, at(2, 2));
        assert_eq!(
            evaluate(&state, &config),
            Some(GameResult::new(Faction::King, WinReason::CastleReached))
        );

        king_to(&mut state, at(4, 0));
        assert_eq!(evaluate(&state, &config).map(|r| r.winner), Some(Faction::King));

        // The door cell itself is not the winning cell.
        king_to(&mut state, at(3, 2));
        assert_eq!(evaluate(&state, &config), None);
    }

    #[test]
    fn test_castle_beats_everything() {
        let config = one_card();
        let (mut state, names) = designated(&config);
        assert!(state.hidden().deck().is_empty());
        state.visible.king = KingHealth::Dead;
        state.visible.arrested.extend(names);
        king_to(&mut state, at(2, 2));

        assert_eq!(
            evaluate(&state, &config),
            Some(GameResult::new(Faction::King, WinReason::CastleReached))
        );
    }

    #[test]
    fn test_assassins_neutralized() {
        let config = GameConfig::standard();
        let (mut state, names) = designated(&config);
        state.visible.arrested.push_back(names[0].clone());
        state.visible.arrested.push_back(names[1].clone());
        assert_eq!(evaluate(&state, &config), None);

        state.visible.killed.assassins = 1;
        assert_eq!(
            evaluate(&state, &config),
            Some(GameResult::new(Faction::Assassins, WinReason::AssassinsNeutralized))
        );

        let king_rule = config.with_neutralized_winner(Faction::King);
        assert_eq!(
            evaluate(&state, &king_rule),
            Some(GameResult::new(Faction::King, WinReason::AssassinsNeutralized))
        );
    }

    #[test]
    fn test_neutralized_beats_deck_exhaustion() {
        let config = one_card().with_neutralized_winner(Faction::King);
        let (mut state, names) = designated(&config);
        state.visible.arrested.extend(names);

        assert_eq!(
            evaluate(&state, &config).map(|r| r.reason),
            Some(WinReason::AssassinsNeutralized)
        );
    }

    #[test]
    fn test_innocent_arrests_do_not_count() {
        let config = GameConfig::standard();
        let (mut state, _) = designated(&config);
        for name in ["x", "y", "z"] {
            state.visible.arrested.push_back(Identity::new(name));
        }
        assert_eq!(evaluate(&state, &config), None);
    }

    #[test]
    fn test_deck_exhausted_uses_tie_break() {
        let config = one_card();
        let (state, _) = designated(&config);

        assert_eq!(
            evaluate(&state, &config),
            Some(GameResult::new(Faction::Assassins, WinReason::DeckExhausted))
        );
        assert_eq!(
            evaluate(&state, &config.with_deck_exhaustion_winner(Faction::King)),
            Some(GameResult::new(Faction::King, WinReason::DeckExhausted))
        );
    }

    #[test]
    fn test_king_killed() {
        let config = GameConfig::standard();
        let (mut state, _) = designated(&config);
        state.visible.king = KingHealth::Injured;
        assert_eq!(evaluate(&state, &config), None);
        state.visible.king = KingHealth::Dead;
        assert_eq!(
            evaluate(&state, &config),
            Some(GameResult::new(Faction::Assassins, WinReason::KingKilled))
        );
    }
}
