use wasm_bindgen::prelude::*;

pub mod bindings;
pub mod board;
pub mod config;
pub mod game;
#[doc(hidden)]
pub mod log;
pub mod message;
pub mod types;

pub use bindings::Game;
pub use board::{Board, Color};
pub use game::{GameState, MoveError, Status};
pub use types::{GameResult, Position, StoneCount, Winner};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
