use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

/// Square board of tile values, row-major. `0` marks an empty cell.
pub type Grid = Vec<Vec<u32>>;

/// A cell coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Direction of a move. Serialized as the lowercase tags `up`, `down`,
/// `left` and `right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Map a key press to a direction.
    ///
    /// Accepts browser key names (`ArrowUp`, ...), the ANSI escape sequences
    /// a terminal sends for arrow keys, and `w`/`a`/`s`/`d`.
    pub fn from_key(key: &str) -> Option<Direction> {
        match key {
            "ArrowUp" | "\x1b[A" | "w" | "W" => Some(Direction::Up),
            "ArrowDown" | "\x1b[B" | "s" | "S" => Some(Direction::Down),
            "ArrowLeft" | "\x1b[D" | "a" | "A" => Some(Direction::Left),
            "ArrowRight" | "\x1b[C" | "d" | "D" => Some(Direction::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when text is not one of `up`, `down`, `left`, `right`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError {
    input: String,
}

impl ParseDirectionError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid direction '{}': expected one of up, down, left, right",
            self.input
        )
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(ParseDirectionError { input: s.to_string() }),
        }
    }
}

/// Lifecycle of a game as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Active,
    Won,
    Over,
    WonAndOver,
}
