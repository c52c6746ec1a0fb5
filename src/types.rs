use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::board::{BOARD_SIZE, NUM_SQUARES};

/// A board coordinate, always on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Returns `None` when either coordinate is off the board.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index < NUM_SQUARES {
            Some(Self {
                row: (index / BOARD_SIZE) as u8,
                col: (index % BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Square index in `0..64` (`row * 8 + col`).
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Steps one cell in `(dr, dc)`, returning `None` off the board.
    pub(crate) fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }
}

/// Algebraic form: `(2, 3)` is `d3`.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePositionError(String);

impl fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid square {:?}: expected a1..h8", self.0)
    }
}

impl std::error::Error for ParsePositionError {}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError(s.to_string());
        let mut chars = s.trim().chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file.to_ascii_lowercase(), rank),
            _ => return Err(err()),
        };
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(err());
        }
        Position::new(rank as u8 - b'1', file as u8 - b'a').ok_or_else(err)
    }
}

/// Stone totals; empty cells are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoneCount {
    pub black: u8,
    pub white: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Black,
    White,
    Draw,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: Winner,
    pub black_count: u8,
    pub white_count: u8,
}

impl GameResult {
    /// Strictly more stones wins; equal counts are a draw.
    pub fn from_count(count: StoneCount) -> Self {
        let winner = if count.black > count.white {
            Winner::Black
        } else if count.white > count.black {
            Winner::White
        } else {
            Winner::Draw
        };
        Self {
            winner,
            black_count: count.black,
            white_count: count.white,
        }
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// 64 cells, 0=empty, 1=black, 2=white.
    pub board: Vec<u8>,
    /// 1=black, 2=white, 0 once the game is over.
    pub current_player: u8,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the latest move left the opponent without a move.
    /// - `false` otherwise.
    pub is_pass: bool,
    /// Square indices the latest move flipped; empty at game start.
    pub flipped: Vec<u8>,
    pub last_move: Option<u8>,
    pub legal_moves: Vec<u8>,
    pub message: String,
}
