use std::fmt;
use std::str::FromStr;

use crate::types::{Position, StoneCount};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
/// Unit steps scanned for flips: vertical, horizontal, then the diagonals.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Cell code used across the JS boundary: 1=black, 2=white.
    pub fn to_u8(self) -> u8 {
        match self {
            Color::Black => 1,
            Color::White => 2,
        }
    }
}

/// Othello board state represented by two disjoint bitboards.
///
/// Bit `row * 8 + col` is set in `black` or `white` when that cell holds a
/// stone of the color. The type is `Copy`; applying a move yields a new board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// Creates the initial board:
    /// d4=white, e4=black, d5=black, e5=white.
    pub fn new() -> Self {
        Self {
            black: bit(28) | bit(35),
            white: bit(27) | bit(36),
        }
    }

    pub fn empty() -> Self {
        Self { black: 0, white: 0 }
    }

    /// Builds a board from raw masks. Bits present in both masks are cleared.
    pub fn from_bitboards(black: u64, white: u64) -> Self {
        let both = black & white;
        Self {
            black: black & !both,
            white: white & !both,
        }
    }

    /// Returns `(black, white)` masks.
    pub fn bitboards(&self) -> (u64, u64) {
        (self.black, self.white)
    }

    pub fn get(&self, pos: Position) -> Option<Color> {
        let square = bit(pos.index());
        if (self.black & square) != 0 {
            Some(Color::Black)
        } else if (self.white & square) != 0 {
            Some(Color::White)
        } else {
            None
        }
    }

    /// Opponent stones bracketed by `color` when scanning from `pos` along `dir`.
    ///
    /// The origin itself is skipped and never inspected. The walk fails (empty
    /// result) on an empty cell or when it leaves the board before reaching a
    /// stone of `color`. Stones are returned in scan order.
    pub fn stones_to_flip(&self, pos: Position, color: Color, dir: (i32, i32)) -> Vec<Position> {
        let (me, opp) = self.sides(color);
        let mut stones = Vec::new();
        let mut cursor = pos.offset(dir.0, dir.1);

        while let Some(cell) = cursor {
            let square = bit(cell.index());
            if (opp & square) != 0 {
                stones.push(cell);
            } else if (me & square) != 0 {
                return stones;
            } else {
                return Vec::new();
            }
            cursor = cell.offset(dir.0, dir.1);
        }

        Vec::new()
    }

    /// Legality predicate: empty target that flips at least one stone.
    pub fn can_place(&self, pos: Position, color: Color) -> bool {
        self.flips(pos, color) != 0
    }

    pub fn has_valid_move(&self, color: Color) -> bool {
        self.legal_moves(color) != 0
    }

    /// Returns legal move mask for the given side.
    pub fn legal_moves(&self, color: Color) -> u64 {
        let (me, opp) = self.sides(color);
        let occupied = me | opp;
        let mut legal = 0u64;

        for pos in 0..NUM_SQUARES {
            let move_bit = bit(pos);
            if (occupied & move_bit) != 0 {
                continue;
            }
            if Self::collect_flips(pos, me, opp) != 0 {
                legal |= move_bit;
            }
        }

        legal
    }

    pub fn legal_positions(&self, color: Color) -> Vec<Position> {
        mask_to_positions(self.legal_moves(color))
    }

    /// Union of flips over all eight directions; 0 when the move is illegal.
    pub fn flips(&self, pos: Position, color: Color) -> u64 {
        let (me, opp) = self.sides(color);
        Self::collect_flips(pos.index(), me, opp)
    }

    /// Places one stone and flips captured stones.
    /// Returns flipped bit mask. Returns 0 when move is illegal.
    pub fn place(&mut self, pos: Position, color: Color) -> u64 {
        let (me, opp) = self.sides(color);

        let flips = Self::collect_flips(pos.index(), me, opp);
        if flips == 0 {
            return 0;
        }

        let next_me = me | bit(pos.index()) | flips;
        let next_opp = opp & !flips;

        match color {
            Color::Black => {
                self.black = next_me;
                self.white = next_opp;
            }
            Color::White => {
                self.white = next_me;
                self.black = next_opp;
            }
        }

        flips
    }

    /// Copy-on-write form of [`Board::place`]: the new board and the flipped
    /// mask, or `None` for an illegal move.
    pub fn with_move(&self, pos: Position, color: Color) -> Option<(Board, u64)> {
        let mut next = *self;
        let flips = next.place(pos, color);
        (flips != 0).then_some((next, flips))
    }

    pub fn count_stones(&self) -> StoneCount {
        StoneCount {
            black: self.black.count_ones() as u8,
            white: self.white.count_ones() as u8,
        }
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        NUM_SQUARES as u8 - (self.black | self.white).count_ones() as u8
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (pos, cell) in board.iter_mut().enumerate() {
            let square = bit(pos);
            *cell = if (self.black & square) != 0 {
                1
            } else if (self.white & square) != 0 {
                2
            } else {
                0
            };
        }
        board
    }

    fn sides(&self, color: Color) -> (u64, u64) {
        match color {
            Color::Black => (self.black, self.white),
            Color::White => (self.white, self.black),
        }
    }

    fn collect_flips(pos: usize, me: u64, opp: u64) -> u64 {
        if pos >= NUM_SQUARES {
            return 0;
        }

        let move_bit = bit(pos);
        if ((me | opp) & move_bit) != 0 {
            return 0;
        }

        let (row, col) = pos_to_row_col(pos);
        let mut flips = 0u64;

        for (dr, dc) in DIRECTIONS {
            let mut r = row + dr;
            let mut c = col + dc;
            let mut line = 0u64;

            while in_bounds(r, c) {
                let square = bit((r as usize) * BOARD_SIZE + c as usize);
                if (opp & square) != 0 {
                    line |= square;
                } else {
                    if (me & square) != 0 {
                        flips |= line;
                    }
                    break;
                }

                r += dr;
                c += dc;
            }
        }

        flips
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Eight rows of `X` (black), `O` (white) and `-` (empty), top row first.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, cell) in self.to_array().iter().enumerate() {
            let ch = match cell {
                1 => 'X',
                2 => 'O',
                _ => '-',
            };
            write!(f, "{ch}")?;
            if pos % BOARD_SIZE == BOARD_SIZE - 1 && pos + 1 < NUM_SQUARES {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    InvalidCell(char),
    WrongLength(usize),
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoardError::InvalidCell(ch) => {
                write!(f, "invalid cell {ch:?}: expected X, O, - or .")
            }
            ParseBoardError::WrongLength(len) => {
                write!(f, "expected {NUM_SQUARES} cells, got {len}")
            }
        }
    }
}

impl std::error::Error for ParseBoardError {}

/// Whitespace is ignored, so both the `Display` grid and a single
/// 64-character line parse.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut black = 0u64;
        let mut white = 0u64;
        let mut len = 0usize;

        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            let square = bit(len);
            match ch {
                'X' | 'x' => black |= square,
                'O' | 'o' => white |= square,
                '-' | '.' => {}
                other => return Err(ParseBoardError::InvalidCell(other)),
            }
            len += 1;
        }

        if len != NUM_SQUARES {
            return Err(ParseBoardError::WrongLength(len));
        }
        Ok(Self { black, white })
    }
}

pub(crate) fn mask_to_positions(mask: u64) -> Vec<Position> {
    let mut bits = mask;
    let mut out = Vec::with_capacity(bits.count_ones() as usize);

    while bits != 0 {
        if let Some(pos) = Position::from_index(bits.trailing_zeros() as usize) {
            out.push(pos);
        }
        bits &= bits - 1;
    }

    out
}

fn bit(pos: usize) -> u64 {
    if pos < NUM_SQUARES { 1u64 << pos } else { 0 }
}

fn pos_to_row_col(pos: usize) -> (i32, i32) {
    ((pos / BOARD_SIZE) as i32, (pos % BOARD_SIZE) as i32)
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}
