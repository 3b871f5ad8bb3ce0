//! Action representation.
//!
//! Actions are a closed set of verbs, each anchored at the cell of the pawn
//! performing it. Every verb except `Reveal` also names the direction of its
//! target cell.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::faction::Faction;
use crate::board::{Coordinate, Direction};

/// The verb of an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Move,
    Arrest,
    Kill,
    Attack,
    Reveal,
}

impl ActionKind {
    /// The wire name (`move`, `arrest`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::Move => "move",
            ActionKind::Arrest => "arrest",
            ActionKind::Kill => "kill",
            ActionKind::Attack => "attack",
            ActionKind::Reveal => "reveal",
        }
    }

    /// Parse a wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "move" => Some(ActionKind::Move),
            "arrest" => Some(ActionKind::Arrest),
            "kill" => Some(ActionKind::Kill),
            "attack" => Some(ActionKind::Attack),
            "reveal" => Some(ActionKind::Reveal),
            _ => None,
        }
    }

    /// Whether actions of this kind carry a direction.
    #[must_use]
    pub const fn needs_direction(self) -> bool {
        !matches!(self, ActionKind::Reveal)
    }
}

/// A single game action.
///
/// ## Example
///
/// ```
/// use king_assassins::board::{Coordinate, Direction};
/// use king_assassins::core::Action;
///
/// let origin = Coordinate::new(1, 3).unwrap();
/// let step = Action::Move(origin, Direction::East);
/// assert_eq!(step.to_string(), "move (1, 3) E");
///
/// let reveal = Action::Reveal(Coordinate::new(2, 1).unwrap());
/// assert_eq!(reveal.direction(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Step one cell; a knight may push a run of villagers.
    Move(Coordinate, Direction),
    /// A knight arrests the adjacent villager.
    Arrest(Coordinate, Direction),
    /// An assassin kills an adjacent knight, or a knight an adjacent assassin.
    Kill(Coordinate, Direction),
    /// An assassin strikes the adjacent king.
    Attack(Coordinate, Direction),
    /// Unmask the villager at the cell as an assassin.
    Reveal(Coordinate),
}

impl Action {
    /// Build an action from its parts.
    ///
    /// Returns `None` when a direction is missing for a directed verb.
    /// A direction given to `Reveal` is ignored.
    #[must_use]
    pub fn from_parts(kind: ActionKind, origin: Coordinate, direction: Option<Direction>) -> Option<Self> {
        match kind {
            ActionKind::Reveal => Some(Action::Reveal(origin)),
            ActionKind::Move => direction.map(|d| Action::Move(origin, d)),
            ActionKind::Arrest => direction.map(|d| Action::Arrest(origin, d)),
            ActionKind::Kill => direction.map(|d| Action::Kill(origin, d)),
            ActionKind::Attack => direction.map(|d| Action::Attack(origin, d)),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Action::Move(..) => ActionKind::Move,
            Action::Arrest(..) => ActionKind::Arrest,
            Action::Kill(..) => ActionKind::Kill,
            Action::Attack(..) => ActionKind::Attack,
            Action::Reveal(_) => ActionKind::Reveal,
        }
    }

    /// The cell of the acting pawn.
    #[must_use]
    pub const fn origin(&self) -> Coordinate {
        match *self {
            Action::Move(c, _)
            | Action::Arrest(c, _)
            | Action::Kill(c, _)
            | Action::Attack(c, _)
            | Action::Reveal(c) => c,
        }
    }

    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        match *self {
            Action::Move(_, d) | Action::Arrest(_, d) | Action::Kill(_, d) | Action::Attack(_, d) => Some(d),
            Action::Reveal(_) => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind().name(), self.origin())?;
        if let Some(d) = self.direction() {
            write!(f, " {d}")?;
        }
        Ok(())
    }
}

/// An ordered batch of actions submitted by one faction.
///
/// Most turns fit inline without a heap allocation.
pub type ActionBatch = SmallVec<[Action; 8]>;

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The faction that played this action.
    pub faction: Faction,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Position within the batch.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(faction: Faction, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            faction,
            action,
            turn,
            sequence,
        }
    }
}
