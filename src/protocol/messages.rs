//! JSON boundary messages.
//!
//! Two payloads cross the boundary:
//!
//! - Designation: `{"assassins": ["monk", "farmer", "squire"]}`
//! - Action batch: `{"actions": [["move", 1, 3, "E"], ["reveal", 2, 1]]}`
//!
//! Decoding goes through `serde_json::Value` rather than derived structs so
//! each malformed shape gets its own reason.

use serde_json::{json, Value};

use crate::board::{Coordinate, Direction, Identity};
use crate::core::action::{Action, ActionBatch, ActionKind};
use crate::core::error::InvalidMove;
use crate::core::state::GameState;

/// A decoded submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Secretly pick the three assassins.
    Designate(Vec<Identity>),
    /// An ordered batch of actions.
    Batch(ActionBatch),
}

fn malformed(reason: impl Into<String>) -> InvalidMove {
    InvalidMove::Malformed(reason.into())
}

fn parse_object(json: &str) -> Result<serde_json::Map<String, Value>, InvalidMove> {
    match serde_json::from_str::<Value>(json) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(malformed("A valid move must be a dictionary")),
    }
}

/// Decode a designation message.
///
/// Only the shape is checked here; count and identities are checked when
/// the designation is applied.
pub fn parse_designation(json: &str) -> Result<Vec<Identity>, InvalidMove> {
    let map = parse_object(json)?;
    let value = map
        .get("assassins")
        .ok_or_else(|| malformed("The dictionary must contain an \"assassins\" key"))?;
    let list = value
        .as_array()
        .ok_or_else(|| malformed("The value of the \"assassins\" key must be a list"))?;

    list.iter()
        .map(|name| {
            name.as_str()
                .map(Identity::from)
                .ok_or_else(|| malformed("The \"assassins\" must be identified by their name"))
        })
        .collect()
}

/// Decode an action batch message.
pub fn parse_batch(json: &str) -> Result<ActionBatch, InvalidMove> {
    let map = parse_object(json)?;
    let list = map
        .get("actions")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed("The dictionary must contain an \"actions\" list"))?;

    list.iter()
        .enumerate()
        .map(|(i, entry)| parse_action(entry).map_err(|reason| malformed(format!("action {i}: {reason}"))))
        .collect()
}

/// Decode whichever message the match expects next.
pub fn parse_submission(state: &GameState, json: &str) -> Result<Submission, InvalidMove> {
    if state.is_initial() {
        parse_designation(json).map(Submission::Designate)
    } else {
        parse_batch(json).map(Submission::Batch)
    }
}

fn parse_action(entry: &Value) -> Result<Action, String> {
    let parts = entry
        .as_array()
        .ok_or_else(|| "an action must be a list".to_string())?;

    let name = parts
        .first()
        .and_then(Value::as_str)
        .ok_or_else(|| "an action must start with its kind".to_string())?;
    let kind = ActionKind::from_name(name).ok_or_else(|| format!("unknown action kind '{name}'"))?;

    let expected = if kind.needs_direction() { 4 } else { 3 };
    if parts.len() != expected {
        return Err(format!("'{name}' takes {} arguments, got {}", expected - 1, parts.len() - 1));
    }

    let row = parse_index(&parts[1])?;
    let col = parse_index(&parts[2])?;
    let origin = Coordinate::from_signed(row, col).ok_or_else(|| format!("({row}, {col}) is outside the board"))?;

    let direction = if kind.needs_direction() {
        let letter = parts[3]
            .as_str()
            .ok_or_else(|| "the direction must be one of N, E, S, W".to_string())?;
        Some(Direction::from_letter(letter).ok_or_else(|| format!("unknown direction '{letter}'"))?)
    } else {
        None
    };

    Action::from_parts(kind, origin, direction).ok_or_else(|| format!("'{name}' needs a direction"))
}

/// Coordinates arrive as integers, or as numeric strings from lenient clients.
fn parse_index(value: &Value) -> Result<i64, String> {
    value
        .as_i64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
        .ok_or_else(|| format!("coordinate {value} is not an integer"))
}

/// Encode a designation message.
#[must_use]
pub fn designation_message(names: &[Identity]) -> Value {
    json!({ "assassins": names.iter().map(Identity::as_str).collect::<Vec<_>>() })
}

/// Encode an action batch message.
#[must_use]
pub fn batch_message(actions: &[Action]) -> Value {
    let entries: Vec<Value> = actions
        .iter()
        .map(|action| {
            let origin = action.origin();
            match action.direction() {
                Some(d) => json!([action.kind().name(), origin.row(), origin.col(), d.letter().to_string()]),
                None => json!([action.kind().name(), origin.row(), origin.col()]),
            }
        })
        .collect();
    json!({ "actions": entries })
}
