//! Per-action legality and execution.
//!
//! Each handler checks everything first and only then touches the grid, so
//! a refused action never leaves a half-applied state behind.

use crate::board::{Coordinate, Direction, Occupant};
use crate::core::action::Action;
use crate::core::error::{InvalidMove, Rejection};
use crate::core::faction::Faction;
use crate::core::state::GameState;

/// Check and apply `action` for `faction`.
pub fn execute(state: &mut GameState, faction: Faction, action: &Action) -> Result<(), InvalidMove> {
    let outcome = match *action {
        Action::Move(origin, d) => move_pawn(state, faction, origin, d),
        Action::Arrest(origin, d) => arrest(state, faction, origin, d),
        Action::Kill(origin, d) => kill(state, faction, origin, d),
        Action::Attack(origin, d) => attack(state, faction, origin, d),
        Action::Reveal(origin) => reveal(state, faction, origin),
    };
    outcome.map_err(|reason| InvalidMove::rejected(*action, reason))
}

fn move_pawn(state: &mut GameState, faction: Faction, origin: Coordinate, d: Direction) -> Result<(), Rejection> {
    let visible = &mut state.visible;
    let mover = visible.grid.get(origin).clone();

    match mover {
        Occupant::Empty => return Err(Rejection::NoOneToMove),
        Occupant::Villager(_) | Occupant::Assassin(_) if faction != Faction::Assassins => {
            return Err(Rejection::PopulationIsAssassinsOnly);
        }
        Occupant::King | Occupant::Knight if faction != Faction::King => {
            return Err(Rejection::KingsMenAreKingOnly);
        }
        _ => {}
    }

    let dest = origin.step(d).ok_or(Rejection::OffBoard)?;

    if visible.grid.is_free(dest) {
        if mover == Occupant::King && visible.terrain.is_roof(dest) {
            return Err(Rejection::KingOnRoof);
        }
        visible.grid.swap(origin, dest);
        return Ok(());
    }

    if mover != Occupant::Knight {
        return Err(Rejection::CellNotFree);
    }

    let free = visible
        .grid
        .find_next_free(&visible.terrain, origin, d)
        .ok_or(Rejection::PushBlocked)?;
    visible.grid.shift_run(origin, free, d);
    Ok(())
}

fn arrest(state: &mut GameState, faction: Faction, origin: Coordinate, d: Direction) -> Result<(), Rejection> {
    if faction != Faction::King {
        return Err(Rejection::ArrestIsKingOnly);
    }
    let visible = &mut state.visible;
    if *visible.grid.get(origin) != Occupant::Knight {
        return Err(Rejection::ArresterNotKnight);
    }

    let target = origin.step(d).ok_or(Rejection::OffBoard)?;
    if visible.grid.get(target).villager().is_none() {
        return Err(Rejection::OnlyVillagersArrested);
    }

    if let Occupant::Villager(identity) = visible.grid.take(target) {
        visible.arrested.push_back(identity);
    }
    Ok(())
}

fn kill(state: &mut GameState, faction: Faction, origin: Coordinate, d: Direction) -> Result<(), Rejection> {
    let visible = &mut state.visible;
    let killer = visible.grid.get(origin);

    match killer {
        Occupant::Assassin(_) if faction != Faction::Assassins => {
            return Err(Rejection::AssassinKillIsAssassinsOnly);
        }
        Occupant::Knight if faction != Faction::King => {
            return Err(Rejection::KnightKillIsKingOnly);
        }
        _ => {}
    }

    let target = origin.step(d).ok_or(Rejection::OffBoard)?;
    let victim = visible.grid.get(target);
    if victim.is_empty() {
        return Err(Rejection::NoOneToKill);
    }

    match (killer, victim) {
        (Occupant::Assassin(_), Occupant::Knight) => visible.killed.knights += 1,
        (Occupant::Knight, Occupant::Assassin(_)) => visible.killed.assassins += 1,
        _ => return Err(Rejection::ForbiddenKill),
    }
    visible.grid.take(target);
    Ok(())
}

fn attack(state: &mut GameState, faction: Faction, origin: Coordinate, d: Direction) -> Result<(), Rejection> {
    if faction != Faction::Assassins {
        return Err(Rejection::AttackIsAssassinsOnly);
    }
    let visible = &mut state.visible;
    if !matches!(visible.grid.get(origin), Occupant::Assassin(_)) {
        return Err(Rejection::AttackerNotAssassin);
    }

    let target = origin.step(d).ok_or(Rejection::OffBoard)?;
    if *visible.grid.get(target) != Occupant::King {
        return Err(Rejection::OnlyKingAttacked);
    }

    visible.king = visible.king.wounded();
    Ok(())
}

fn reveal(state: &mut GameState, faction: Faction, origin: Coordinate) -> Result<(), Rejection> {
    if faction != Faction::Assassins {
        return Err(Rejection::RevealIsAssassinsOnly);
    }

    let identity = match state.visible.grid.get(origin) {
        Occupant::Villager(id) if state.hidden().is_assassin(id) => id.clone(),
        _ => return Err(Rejection::NotAnAssassin),
    };

    state.visible.grid.set(origin, Occupant::Assassin(identity));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Identity;
    use crate::core::config::GameConfig;
    use crate::core::state::KingHealth;

    fn at(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    /// Standard match with the villagers at (2,1), (5,5) and (7,5) designated.
    fn designated() -> GameState {
        let mut state = GameState::new(&GameConfig::standard(), 42).unwrap();
        let names: Vec<Identity> = [at(2, 1), at(5, 5), at(7, 5)]
            .iter()
            .map(|&c| state.visible.grid.get(c).villager().cloned().unwrap())
            .collect();
        state.designate(&names).unwrap();
        state
    }

    fn reason(result: Result<(), InvalidMove>) -> Rejection {
        match result {
            Err(InvalidMove::Rejected { reason, .. }) => reason,
            other => panic!("expected a rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_knight_step() {
        let mut state = designated();
        execute(&mut state, Faction::King, &Action::Move(at(1, 3), Direction::East)).unwrap();
        assert!(state.visible.grid.is_free(at(1, 3)));
        assert_eq!(state.visible.grid.get(at(1, 4)), &Occupant::Knight);
    }

    #[test]
    fn test_move_empty_origin() {
        let mut state = designated();
        let result = execute(&mut state, Faction::King, &Action::Move(at(0, 0), Direction::East));
        assert_eq!(reason(result), Rejection::NoOneToMove);
    }

    #[test]
    fn test_move_wrong_faction() {
        let mut state = designated();
        let result = execute(&mut state, Faction::King, &Action::Move(at(5, 5), Direction::North));
        assert_eq!(reason(result), Rejection::PopulationIsAssassinsOnly);

        let result = execute(&mut state, Faction::Assassins, &Action::Move(at(1, 3), Direction::East));
        assert_eq!(reason(result), Rejection::KingsMenAreKingOnly);
    }

    #[test]
    fn test_move_off_board() {
        let mut state = designated();
        let result = execute(&mut state, Faction::King, &Action::Move(at(9, 9), Direction::East));
        assert_eq!(reason(result), Rejection::OffBoard);
    }

    #[test]
    fn test_villager_cannot_move_onto_occupied() {
        let mut state = designated();
        state.visible.grid.set(at(4, 5), Occupant::Knight);
        let result = execute(&mut state, Faction::Assassins, &Action::Move(at(5, 5), Direction::North));
        assert_eq!(reason(result), Rejection::CellNotFree);
    }

    #[test]
    fn test_king_cannot_step_on_roof() {
        let mut state = designated();
        state.visible.grid.take(at(9, 9));
        state.visible.grid.set(at(9, 2), Occupant::King);
        let result = execute(&mut state, Faction::King, &Action::Move(at(9, 2), Direction::West));
        assert_eq!(reason(result), Rejection::KingOnRoof);
        assert_eq!(state.visible.grid.get(at(9, 2)), &Occupant::King);
    }

    #[test]
    fn test_knight_push_blocked_leaves_grid_untouched() {
        let mut state = designated();
        // Knight (8,8) north is (7,8) knight: not pushable.
        let before = state.visible.grid.clone();
        let result = execute(&mut state, Faction::King, &Action::Move(at(8, 8), Direction::North));
        assert_eq!(reason(result), Rejection::PushBlocked);
        assert_eq!(state.visible.grid, before);
    }

    #[test]
    fn test_arrest() {
        let mut state = designated();
        state.visible.grid.set(at(5, 1), Occupant::Knight);
        let villager = state.visible.grid.get(at(5, 2)).villager().cloned().unwrap();

        execute(&mut state, Faction::King, &Action::Arrest(at(5, 1), Direction::East)).unwrap();

        assert!(state.visible.grid.is_free(at(5, 2)));
        assert_eq!(state.visible.arrested.back(), Some(&villager));
    }

    #[test]
    fn test_arrest_rules() {
        let mut state = designated();
        let result = execute(&mut state, Faction::Assassins, &Action::Arrest(at(1, 3), Direction::East));
        assert_eq!(reason(result), Rejection::ArrestIsKingOnly);

        let result = execute(&mut state, Faction::King, &Action::Arrest(at(9, 9), Direction::West));
        assert_eq!(reason(result), Rejection::ArresterNotKnight);

        let result = execute(&mut state, Faction::King, &Action::Arrest(at(8, 8), Direction::North));
        assert_eq!(reason(result), Rejection::OnlyVillagersArrested);
    }

    #[test]
    fn test_reveal_then_kill_knight() {
        let mut state = designated();
        state.visible.grid.set(at(5, 6), Occupant::Knight);

        execute(&mut state, Faction::Assassins, &Action::Reveal(at(5, 5))).unwrap();
        assert!(matches!(state.visible.grid.get(at(5, 5)), Occupant::Assassin(_)));

        execute(&mut state, Faction::Assassins, &Action::Kill(at(5, 5), Direction::East)).unwrap();
        assert!(state.visible.grid.is_free(at(5, 6)));
        assert_eq!(state.visible.killed.knights, 1);
    }

    #[test]
    fn test_knight_kills_revealed_assassin() {
        let mut state = designated();
        execute(&mut state, Faction::Assassins, &Action::Reveal(at(2, 1))).unwrap();
        state.visible.grid.set(at(2, 2), Occupant::Knight);

        execute(&mut state, Faction::King, &Action::Kill(at(2, 2), Direction::West)).unwrap();
        assert!(state.visible.grid.is_free(at(2, 1)));
        assert_eq!(state.visible.killed.assassins, 1);
    }

    #[test]
    fn test_kill_rules() {
        let mut state = designated();
        let result = execute(&mut state, Faction::Assassins, &Action::Kill(at(1, 3), Direction::East));
        assert_eq!(reason(result), Rejection::KnightKillIsKingOnly);

        let result = execute(&mut state, Faction::King, &Action::Kill(at(1, 3), Direction::East));
        assert_eq!(reason(result), Rejection::NoOneToKill);

        // A knight can't kill a hidden villager.
        state.visible.grid.set(at(5, 4), Occupant::Knight);
        let result = execute(&mut state, Faction::King, &Action::Kill(at(5, 4), Direction::East));
        assert_eq!(reason(result), Rejection::ForbiddenKill);

        execute(&mut state, Faction::Assassins, &Action::Reveal(at(5, 5))).unwrap();
        let result = execute(&mut state, Faction::King, &Action::Kill(at(5, 5), Direction::West));
        assert_eq!(reason(result), Rejection::AssassinKillIsAssassinsOnly);
    }

    #[test]
    fn test_attack_king() {
        let mut state = designated();
        state.visible.grid.take(at(9, 9));
        state.visible.grid.set(at(7, 6), Occupant::King);
        execute(&mut state, Faction::Assassins, &Action::Reveal(at(7, 5))).unwrap();

        let strike = Action::Attack(at(7, 5), Direction::East);
        execute(&mut state, Faction::Assassins, &strike).unwrap();
        assert_eq!(state.visible.king, KingHealth::Injured);
        execute(&mut state, Faction::Assassins, &strike).unwrap();
        assert_eq!(state.visible.king, KingHealth::Dead);
    }

    #[test]
    fn test_attack_rules() {
        let mut state = designated();
        let result = execute(&mut state, Faction::King, &Action::Attack(at(7, 5), Direction::East));
        assert_eq!(reason(result), Rejection::AttackIsAssassinsOnly);

        let result = execute(&mut state, Faction::Assassins, &Action::Attack(at(7, 5), Direction::East));
        assert_eq!(reason(result), Rejection::AttackerNotAssassin);

        execute(&mut state, Faction::Assassins, &Action::Reveal(at(7, 5))).unwrap();
        let result = execute(&mut state, Faction::Assassins, &Action::Attack(at(7, 5), Direction::East));
        assert_eq!(reason(result), Rejection::OnlyKingAttacked);
    }

    #[test]
    fn test_reveal_rules() {
        let mut state = designated();
        let result = execute(&mut state, Faction::King, &Action::Reveal(at(5, 5)));
        assert_eq!(reason(result), Rejection::RevealIsAssassinsOnly);

        let result = execute(&mut state, Faction::Assassins, &Action::Reveal(at(1, 7)));
        assert_eq!(reason(result), Rejection::NotAnAssassin);

        let result = execute(&mut state, Faction::Assassins, &Action::Reveal(at(0, 0)));
        assert_eq!(reason(result), Rejection::NotAnAssassin);
    }
}
