use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::console_log;
use crate::game::{self, GameState};
use crate::types::Position;

/// Handle the page keeps for one browser session.
///
/// Holds the current [`GameState`] plus every earlier accepted state so the
/// page can step back.
#[wasm_bindgen]
pub struct Game {
    state: GameState,
    history: Vec<GameState>,
    moves: Vec<Position>,
    config: GameConfig,
}

#[wasm_bindgen]
impl Game {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<Game, JsValue> {
        console_error_panic_hook::set_once();
        Ok(Self::with_config(GameConfig::from_js(config)?))
    }

    pub fn board(&self) -> Vec<u8> {
        self.state.board().to_array().to_vec()
    }

    /// Square indices to highlight for the side to move.
    pub fn legal_moves(&self) -> Vec<u8> {
        self.state
            .legal_moves()
            .iter()
            .map(|pos| pos.index() as u8)
            .collect()
    }

    pub fn can_place(&self, row: u8, col: u8) -> bool {
        Position::new(row, col).is_some_and(|pos| self.state.can_place(pos))
    }

    /// Plays for the side to move. Returns `false` and changes nothing when
    /// the click is off the board, illegal, or the game is over.
    pub fn place(&mut self, row: u8, col: u8) -> bool {
        let Some(pos) = Position::new(row, col) else {
            return false;
        };
        let next = match self.state.try_place_stone(pos) {
            Ok(next) => next,
            Err(_) => return false,
        };

        self.history.push(self.state);
        self.moves.push(pos);
        self.state = next;

        if let Some(passed) = self.state.passed() {
            console_log!("{:?} has no legal move after {pos}", passed);
        }
        if self.state.is_terminal() {
            console_log!("{}", self.state.message(self.config.locale));
        }
        true
    }

    pub fn reset(&mut self) {
        console_log!("reset after {} moves", self.moves.len());
        self.state = game::reset();
        self.history.clear();
        self.moves.clear();
    }

    /// Steps back one accepted move. Returns `false` at the start.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.state = previous;
                self.moves.pop();
                true
            }
            None => false,
        }
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Accepted moves in algebraic form, e.g. `d3c5f6`.
    pub fn transcript(&self) -> String {
        self.moves.iter().map(Position::to_string).collect()
    }

    /// 1=black, 2=white, 0 once the game is over.
    pub fn current_player(&self) -> u8 {
        self.state.turn().map_or(0, |turn| turn.to_u8())
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn is_pass(&self) -> bool {
        self.state.passed().is_some()
    }

    /// `[black, white]`.
    pub fn score(&self) -> Vec<u8> {
        let count = self.state.count_stones();
        vec![count.black, count.white]
    }

    pub fn message(&self) -> String {
        self.state.message(self.config.locale)
    }

    /// Full snapshot for rendering.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        let view = self.state.to_view(self.config.locale);
        serde_wasm_bindgen::to_value(&view).map_err(JsValue::from)
    }

    /// Final result, or `null` while the game is running.
    pub fn result(&self) -> Result<JsValue, JsValue> {
        match self.state.result() {
            Some(result) => serde_wasm_bindgen::to_value(&result).map_err(JsValue::from),
            None => Ok(JsValue::NULL),
        }
    }
}

impl Game {
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            state: GameState::new(),
            history: Vec::new(),
            moves: Vec::new(),
            config,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.state
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Locale;

    #[test]
    fn place_reports_whether_state_changed() {
        let mut game = Game::default();

        assert!(!game.place(0, 0));
        assert!(!game.place(9, 9));
        assert_eq!(game.move_count(), 0);

        assert!(game.place(2, 3));
        assert_eq!(game.current_player(), 2);
        assert_eq!(game.score(), vec![4, 1]);
        assert_eq!(game.transcript(), "d3");
    }

    #[test]
    fn off_board_click_does_not_alias_onto_a_real_square() {
        let mut game = Game::default();

        // 1 * 8 + 11 would be d3, a legal opening move.
        assert!(!game.place(1, 11));
        assert!(!game.can_place(1, 11));
        assert_eq!(game.game_state(), &GameState::new());
        assert_eq!(game.transcript(), "");
    }

    #[test]
    fn undo_walks_back_through_history() {
        let mut game = Game::default();
        assert!(game.place(2, 3));
        assert!(game.place(2, 2));
        assert_eq!(game.transcript(), "d3c3");

        assert!(game.undo());
        assert_eq!(game.transcript(), "d3");
        assert_eq!(game.current_player(), 2);

        assert!(game.undo());
        assert_eq!(game.game_state(), &GameState::new());
        assert!(!game.undo());
    }

    #[test]
    fn reset_clears_history() {
        let mut game = Game::with_config(GameConfig { locale: Locale::En });
        game.place(2, 3);
        game.reset();

        assert_eq!(game.move_count(), 0);
        assert!(!game.undo());
        assert_eq!(game.board(), GameState::new().board().to_array().to_vec());
        assert_eq!(game.message(), "Black's turn");
    }

    #[test]
    fn legal_moves_feed_highlighting() {
        let game = Game::default();

        let mut legal = game.legal_moves();
        legal.sort_unstable();
        assert_eq!(legal, vec![19, 26, 37, 44]);
        assert!(game.can_place(2, 3));
        assert!(!game.can_place(3, 3));
        assert!(!game.can_place(8, 0));
    }
}
