//! Game state: visible and hidden information.
//!
//! ## VisibleState
//!
//! Observable by both factions:
//! - Terrain, occupant grid, castle doors
//! - Current card, king health, arrests and kills
//! - Turn order and action history
//!
//! ## HiddenState
//!
//! Private to the Assassins' faction (and the engine):
//! - The designated assassin identities
//! - The remaining deck order
//!
//! ## GameState
//!
//! Owns both halves. Cloning is cheap: the grid, arrest list and history are
//! persistent `im` structures, which is what lets a whole batch be tried on
//! a copy before it is committed.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::action::{Action, ActionRecord};
use super::config::{GameConfig, ASSASSIN_COUNT};
use super::error::{ConfigError, DesignationError};
use super::faction::Faction;
use super::rng::GameRng;
use crate::board::{CastleDoor, Identity, Occupant, OccupantGrid, TerrainBoard};
use crate::cards::{Card, Deck};

/// Health of the king. Each successful attack moves one step down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KingHealth {
    #[default]
    Healthy,
    Injured,
    Dead,
}

impl KingHealth {
    /// Health after one more attack. Dead stays dead.
    #[must_use]
    pub const fn wounded(self) -> Self {
        match self {
            KingHealth::Healthy => KingHealth::Injured,
            KingHealth::Injured | KingHealth::Dead => KingHealth::Dead,
        }
    }
}

/// Pawns removed by kills.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Killed {
    pub knights: u32,
    pub assassins: u32,
}

/// Public game state - observable by both factions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleState {
    /// Static terrain.
    pub terrain: TerrainBoard,

    /// Pawn positions.
    pub grid: OccupantGrid,

    /// Castle doors (fixed).
    pub castle_doors: Vec<CastleDoor>,

    /// Most recently drawn card. `None` until the assassins are designated.
    pub card: Option<Card>,

    pub king: KingHealth,

    /// Arrested villagers, in arrest order.
    pub arrested: Vector<Identity>,

    pub killed: Killed,

    /// Faction whose submission is expected next.
    pub active_faction: Faction,

    /// Turn number (starts at 1, one per accepted submission).
    pub turn_number: u32,

    /// Actions of the most recent accepted batch.
    pub last_move: Vec<Action>,

    /// Every accepted action.
    pub history: Vector<ActionRecord>,
}

impl VisibleState {
    /// Number of pawns currently on the grid.
    #[must_use]
    pub fn pawns_on_grid(&self) -> usize {
        self.grid.occupied_count()
    }

    /// Pawns on the grid plus every pawn removed by arrest or kill.
    ///
    /// Constant for the whole match.
    #[must_use]
    pub fn pawn_total(&self) -> usize {
        self.pawns_on_grid() + self.arrested.len() + self.killed.knights as usize + self.killed.assassins as usize
    }

    /// Whether the king stands on a castle door's winning cell.
    #[must_use]
    pub fn king_at_castle(&self) -> bool {
        self.castle_doors
            .iter()
            .filter_map(CastleDoor::target)
            .any(|target| *self.grid.get(target) == Occupant::King)
    }

    /// Record an accepted batch in the history.
    pub fn record_batch(&mut self, faction: Faction, actions: &[Action]) {
        for (sequence, action) in actions.iter().enumerate() {
            self.history.push_back(ActionRecord::new(
                faction,
                *action,
                self.turn_number,
                sequence as u32,
            ));
        }
        self.last_move = actions.to_vec();
    }

    /// Hand the turn to the other faction.
    pub fn advance_turn(&mut self) {
        self.active_faction = self.active_faction.opponent();
        self.turn_number += 1;
    }
}

/// Private game state: assassin identities and deck order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenState {
    /// `None` until designated; fixed afterwards.
    assassins: Option<FxHashSet<Identity>>,

    deck: Deck,
}

impl HiddenState {
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self { assassins: None, deck }
    }

    /// True until the assassins have been designated.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.assassins.is_none()
    }

    /// The designated identities, if set.
    #[must_use]
    pub fn assassins(&self) -> Option<&FxHashSet<Identity>> {
        self.assassins.as_ref()
    }

    #[must_use]
    pub fn is_assassin(&self, identity: &Identity) -> bool {
        self.assassins.as_ref().is_some_and(|set| set.contains(identity))
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Fix the assassin identities.
    ///
    /// Exactly three distinct names, each a villager standing on `grid`.
    pub fn designate(&mut self, names: &[Identity], grid: &OccupantGrid) -> Result<(), DesignationError> {
        if names.len() != ASSASSIN_COUNT {
            return Err(DesignationError::WrongCount(names.len()));
        }

        let mut set = FxHashSet::default();
        for name in names {
            if grid.find_villager(name).is_none() {
                return Err(DesignationError::UnknownVillager(name.to_string()));
            }
            if !set.insert(name.clone()) {
                return Err(DesignationError::Duplicate(name.to_string()));
            }
        }

        self.assassins = Some(set);
        Ok(())
    }

    fn draw(&mut self) -> Option<Card> {
        self.deck.draw()
    }
}

/// Full game state including hidden information.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Public state (observable by both factions).
    pub visible: VisibleState,

    hidden: HiddenState,
}

impl GameState {
    /// Set up a match: fixed pieces, seeded villager order, seeded deck.
    pub fn new(config: &GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = GameRng::new(seed);

        let mut grid = OccupantGrid::new();
        grid.set(config.king, Occupant::King);
        for &knight in &config.knights {
            grid.set(knight, Occupant::Knight);
        }

        let mut names: Vec<Identity> = config.population.iter().map(|n| Identity::new(n.as_str())).collect();
        rng.for_context("villagers").shuffle(&mut names);
        for (&at, name) in config.villager_cells.iter().zip(names) {
            grid.set(at, Occupant::Villager(name));
        }

        let deck = Deck::shuffled(&config.catalog, &mut rng.for_context("deck"));

        let visible = VisibleState {
            terrain: config.terrain_board()?,
            grid,
            castle_doors: config.castle_doors.clone(),
            card: None,
            king: KingHealth::Healthy,
            arrested: Vector::new(),
            killed: Killed::default(),
            active_faction: Faction::Assassins,
            turn_number: 1,
            last_move: Vec::new(),
            history: Vector::new(),
        };

        Ok(Self {
            visible,
            hidden: HiddenState::new(deck),
        })
    }

    /// Assemble a state from parts (for replays and tests).
    #[must_use]
    pub fn from_parts(visible: VisibleState, hidden: HiddenState) -> Self {
        Self { visible, hidden }
    }

    #[must_use]
    pub fn hidden(&self) -> &HiddenState {
        &self.hidden
    }

    /// True until the assassins have been designated.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.hidden.is_initial()
    }

    /// Designate the assassins and draw the first card.
    pub fn designate(&mut self, names: &[Identity]) -> Result<(), DesignationError> {
        self.hidden.designate(names, &self.visible.grid)?;
        info!("assassins designated");
        self.draw_card();
        Ok(())
    }

    /// Tempo: draw the next card into `visible.card`.
    ///
    /// With an empty deck the current card is kept and `None` is returned.
    pub fn draw_card(&mut self) -> Option<Card> {
        let card = self.hidden.draw()?;
        self.visible.card = Some(card);
        info!(card = %card, remaining = self.hidden.deck.len(), "card drawn");
        Some(card)
    }

    /// Number of designated assassins arrested or killed.
    #[must_use]
    pub fn neutralized_assassins(&self) -> usize {
        let Some(assassins) = self.hidden.assassins() else {
            return 0;
        };
        let arrested: FxHashSet<&Identity> = self
            .visible
            .arrested
            .iter()
            .filter(|id| assassins.contains(*id))
            .collect();
        self.visible.killed.assassins as usize + arrested.len()
    }

    /// Read-only view for rendering and observers. Never exposes hidden data.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            visible: self.visible.clone(),
            cards_remaining: self.hidden.deck.len(),
            initial: self.is_initial(),
        }
    }
}

/// Serializable public view of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub visible: VisibleState,
    pub cards_remaining: usize,
    pub initial: bool,
}
