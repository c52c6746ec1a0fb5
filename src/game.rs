use std::fmt;

use crate::board::{Board, Color, mask_to_positions};
use crate::message::{self, Locale};
use crate::types::{GameResult, GameView, Position, StoneCount};

/// Where the game stands after the latest transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress { turn: Color },
    Terminal { result: GameResult },
}

/// Why a placement was refused. [`GameState::place_stone`] swallows these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    GameOver,
    Occupied,
    NoFlips,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "game is already over"),
            MoveError::Occupied => write!(f, "illegal move: cell is occupied"),
            MoveError::NoFlips => write!(f, "illegal move: no stones to flip"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Immutable snapshot of one game. Every accepted move yields a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    status: Status,
    last_move: Option<Position>,
    flipped: u64,
    /// Side skipped by the latest transition, if any.
    passed: Option<Color>,
}

impl GameState {
    /// Initial board, black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: Status::InProgress { turn: Color::Black },
            last_move: None,
            flipped: 0,
            passed: None,
        }
    }

    /// Starts from an arbitrary position with `turn` to move.
    ///
    /// The status is resolved the same way as after a move, so a side without
    /// a legal move is passed and a dead position is terminal right away.
    pub fn from_position(board: Board, turn: Color) -> Self {
        let (status, passed) = if board.has_valid_move(turn) {
            (Status::InProgress { turn }, None)
        } else {
            next_status(&board, turn.opponent())
        };
        Self {
            board,
            status,
            last_move: None,
            flipped: 0,
            passed,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Side to move, `None` once the game is over.
    pub fn turn(&self) -> Option<Color> {
        match self.status {
            Status::InProgress { turn } => Some(turn),
            Status::Terminal { .. } => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.status, Status::Terminal { .. })
    }

    pub fn result(&self) -> Option<GameResult> {
        match self.status {
            Status::InProgress { .. } => None,
            Status::Terminal { result } => Some(result),
        }
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn flipped(&self) -> Vec<Position> {
        mask_to_positions(self.flipped)
    }

    pub fn passed(&self) -> Option<Color> {
        self.passed
    }

    pub fn count_stones(&self) -> StoneCount {
        self.board.count_stones()
    }

    /// Cells the side to move may play; empty once terminal.
    pub fn legal_moves(&self) -> Vec<Position> {
        self.turn()
            .map(|turn| self.board.legal_positions(turn))
            .unwrap_or_default()
    }

    pub fn can_place(&self, pos: Position) -> bool {
        self.turn()
            .is_some_and(|turn| self.board.can_place(pos, turn))
    }

    /// Applies a move for the side to move and resolves the next turn.
    pub fn try_place_stone(&self, pos: Position) -> Result<Self, MoveError> {
        let Status::InProgress { turn } = self.status else {
            return Err(MoveError::GameOver);
        };
        if self.board.get(pos).is_some() {
            return Err(MoveError::Occupied);
        }

        let (board, flipped) = self
            .board
            .with_move(pos, turn)
            .ok_or(MoveError::NoFlips)?;
        let (status, passed) = next_status(&board, turn);

        Ok(Self {
            board,
            status,
            last_move: Some(pos),
            flipped,
            passed,
        })
    }

    /// Same as [`GameState::try_place_stone`], but an illegal move or a move
    /// after game over returns the state unchanged.
    pub fn place_stone(&self, pos: Position) -> Self {
        self.try_place_stone(pos).unwrap_or(*self)
    }

    pub fn message(&self, locale: Locale) -> String {
        match (self.status, self.passed) {
            (Status::Terminal { result }, _) => message::game_over_message(locale, &result),
            (Status::InProgress { turn }, Some(passed)) => {
                message::pass_message(locale, passed, turn)
            }
            (Status::InProgress { turn }, None) => message::turn_message(locale, turn),
        }
    }

    pub fn to_view(&self, locale: Locale) -> GameView {
        let count = self.board.count_stones();
        GameView {
            board: self.board.to_array().to_vec(),
            current_player: self.turn().map_or(0, Color::to_u8),
            black_count: count.black,
            white_count: count.white,
            is_game_over: self.is_terminal(),
            is_pass: self.passed.is_some(),
            flipped: self.flipped().iter().map(|p| p.index() as u8).collect(),
            last_move: self.last_move.map(|p| p.index() as u8),
            legal_moves: self
                .legal_moves()
                .iter()
                .map(|p| p.index() as u8)
                .collect(),
            message: self.message(locale),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed initial state, regardless of what came before.
pub fn reset() -> GameState {
    GameState::new()
}

/// Resolves who moves after `mover` has played onto `board`.
///
/// The opponent moves if it can; otherwise `mover` goes again and the
/// opponent is reported as passed; when neither side can move the game is
/// over and scored.
pub fn next_status(board: &Board, mover: Color) -> (Status, Option<Color>) {
    let next = mover.opponent();
    if board.has_valid_move(next) {
        (Status::InProgress { turn: next }, None)
    } else if board.has_valid_move(mover) {
        (Status::InProgress { turn: mover }, Some(next))
    } else {
        let result = GameResult::from_count(board.count_stones());
        (Status::Terminal { result }, None)
    }
}
