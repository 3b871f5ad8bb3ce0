//! Error types.
//!
//! `InvalidMove` is the single condition reported to a submitting faction.
//! It is never fatal: the caller rejects the submission and the match goes
//! on. `ConfigError` is only produced while building a match.

use thiserror::Error;

use super::action::Action;
use super::faction::Faction;

/// Why a single action was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("there is no one to move")]
    NoOneToMove,
    #[error("villagers and assassins can only be moved by player 0")]
    PopulationIsAssassinsOnly,
    #[error("the king and knights can only be moved by player 1")]
    KingsMenAreKingOnly,
    #[error("the target cell is outside the board")]
    OffBoard,
    #[error("cannot move on a cell that is not free")]
    CellNotFree,
    #[error("the king cannot move on a roof")]
    KingOnRoof,
    #[error("cannot move-and-push in the given direction")]
    PushBlocked,
    #[error("arrest action only possible for player 1")]
    ArrestIsKingOnly,
    #[error("the arrester is not a knight")]
    ArresterNotKnight,
    #[error("only villagers can be arrested")]
    OnlyVillagersArrested,
    #[error("kill action for assassin only possible for player 0")]
    AssassinKillIsAssassinsOnly,
    #[error("kill action for knight only possible for player 1")]
    KnightKillIsKingOnly,
    #[error("there is no one to kill")]
    NoOneToKill,
    #[error("forbidden kill")]
    ForbiddenKill,
    #[error("attack action only possible for player 0")]
    AttackIsAssassinsOnly,
    #[error("the attacker is not an assassin")]
    AttackerNotAssassin,
    #[error("only the king can be attacked")]
    OnlyKingAttacked,
    #[error("reveal action only possible for player 0")]
    RevealIsAssassinsOnly,
    #[error("the specified villager is not an assassin")]
    NotAnAssassin,
}

/// Why an assassin designation was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DesignationError {
    #[error("exactly 3 assassins must be designated, got {0}")]
    WrongCount(usize),
    #[error("assassin designated twice: {0}")]
    Duplicate(String),
    #[error("Unknown villager: {0}")]
    UnknownVillager(String),
}

/// A refused submission.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidMove {
    /// An action in a batch broke a rule. Nothing in the batch was applied.
    #[error("{action}: {reason}")]
    Rejected {
        /// Position of the offending action in its batch.
        index: usize,
        action: Action,
        reason: Rejection,
    },

    /// The payload could not be decoded.
    #[error("{0}")]
    Malformed(String),

    #[error(transparent)]
    Designation(#[from] DesignationError),

    #[error("the assassins must be designated first")]
    NotDesignated,

    #[error("the assassins have already been designated")]
    AlreadyDesignated,

    #[error("{faction} cannot play now, waiting for {active}")]
    OutOfTurn { faction: Faction, active: Faction },

    #[error("the game is over")]
    GameOver,
}

impl InvalidMove {
    /// Reject a single action.
    #[must_use]
    pub fn rejected(action: Action, reason: Rejection) -> Self {
        InvalidMove::Rejected {
            index: 0,
            action,
            reason,
        }
    }

    /// Re-anchor a rejection at its position in a batch.
    #[must_use]
    pub fn at_index(self, index: usize) -> Self {
        match self {
            InvalidMove::Rejected { action, reason, .. } => InvalidMove::Rejected {
                index,
                action,
                reason,
            },
            other => other,
        }
    }

    /// The textual reason, without the offending action.
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            InvalidMove::Rejected { reason, .. } => reason.to_string(),
            other => other.to_string(),
        }
    }

    /// The offending action, for per-action rejections.
    #[must_use]
    pub fn action(&self) -> Option<&Action> {
        match self {
            InvalidMove::Rejected { action, .. } => Some(action),
            _ => None,
        }
    }
}

/// A configuration that can't describe a legal starting position.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("bad terrain: {0}")]
    TerrainShape(String),
    #[error("coordinate ({0}, {1}) is outside the board")]
    OutOfBounds(usize, usize),
    #[error("occupant grid has {0} cells, expected 100")]
    GridSize(usize),
    #[error("two pieces start on ({0}, {1})")]
    Overlap(usize, usize),
    #[error("{cells} villager cells but only {names} population names")]
    NotEnoughNames { cells: usize, names: usize },
    #[error("at least 3 villagers are needed, found {0}")]
    TooFewVillagers(usize),
    #[error("duplicate population name: {0}")]
    DuplicateName(String),
    #[error("the card catalog is empty")]
    EmptyCatalog,
    #[error("invalid config json: {0}")]
    Json(String),
}
