//! Board addressing: coordinates and compass directions.
//!
//! Stepping never wraps. `Coordinate::step` returns `None` when the result
//! would leave the 10×10 board, so an out-of-range cell can't be indexed.

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 10;

/// A cell address, `(row, col)` with both in `0..BOARD_SIZE`.
///
/// The fields are private so every value in circulation is on the board;
/// deserialization goes through the same bounds check as [`Coordinate::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    row: u8,
    col: u8,
}

/// Unchecked wire form of a coordinate.
#[derive(Deserialize)]
struct RawCoordinate {
    row: u8,
    col: u8,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = ConfigError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.row.into(), raw.col.into())
            .ok_or(ConfigError::OutOfBounds(raw.row.into(), raw.col.into()))
    }
}

impl Coordinate {
    /// Create a coordinate, or `None` if it is off the board.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Create a coordinate from signed components, or `None` if off the board.
    #[must_use]
    pub fn from_signed(row: i64, col: i64) -> Option<Self> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        Self::new(row, col)
    }

    /// Row, 0 at the top.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column, 0 at the left.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index into a flat 100-cell array.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// The neighbouring cell in `direction`, or `None` at the board edge.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        Self::from_signed(i64::from(self.row) + dr, i64::from(self.col) + dc)
    }

    /// Iterate over every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE * BOARD_SIZE).map(|i| Coordinate {
            row: (i / BOARD_SIZE) as u8,
            col: (i % BOARD_SIZE) as u8,
        })
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Compass direction. North is towards row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Direction {
    /// All four directions, clockwise from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit `(row, col)` delta.
    #[must_use]
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Parse the single-letter wire form (`N`, `E`, `S`, `W`).
    #[must_use]
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "N" => Some(Direction::North),
            "E" => Some(Direction::East),
            "S" => Some(Direction::South),
            "W" => Some(Direction::West),
            _ => None,
        }
    }

    /// The single-letter wire form.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A door in the castle wall.
///
/// The cell one step beyond the door, in the direction it faces, is where
/// the king must stand to win.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastleDoor {
    pub at: Coordinate,
    pub facing: Direction,
}

impl CastleDoor {
    #[must_use]
    pub const fn new(at: Coordinate, facing: Direction) -> Self {
        Self { at, facing }
    }

    /// The king's winning cell, or `None` if the door faces off the board.
    #[must_use]
    pub fn target(&self) -> Option<Coordinate> {
        self.at.step(self.facing)
    }
}
