use serde::Deserialize;

use crate::board::Color;
use crate::types::{GameResult, Winner};

/// Language of the status line shown under the board.
///
/// `Ja` names the sides 黒/白 in every message, including the turn and pass
/// lines that the first page build printed with English color names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

pub fn turn_message(locale: Locale, turn: Color) -> String {
    match locale {
        Locale::Ja => format!("{}のターン", color_name(locale, turn)),
        Locale::En => format!("{}'s turn", color_name(locale, turn)),
    }
}

/// `passed` has no move, so `mover` plays again.
pub fn pass_message(locale: Locale, passed: Color, mover: Color) -> String {
    match locale {
        Locale::Ja => format!(
            "{}はパス！もう一度{}のターン",
            color_name(locale, passed),
            color_name(locale, mover)
        ),
        Locale::En => format!(
            "{} passes! {} moves again",
            color_name(locale, passed),
            color_name(locale, mover)
        ),
    }
}

pub fn game_over_message(locale: Locale, result: &GameResult) -> String {
    let (black, white) = (result.black_count, result.white_count);
    match locale {
        Locale::Ja => {
            let outcome = match result.winner {
                Winner::Black => "黒の勝ち！",
                Winner::White => "白の勝ち！",
                Winner::Draw => "引き分け！",
            };
            format!("ゲーム終了！{outcome} (黒:{black} 白:{white})")
        }
        Locale::En => {
            let outcome = match result.winner {
                Winner::Black => "Black wins!",
                Winner::White => "White wins!",
                Winner::Draw => "Draw!",
            };
            format!("Game over! {outcome} (Black: {black}, White: {white})")
        }
    }
}

fn color_name(locale: Locale, color: Color) -> &'static str {
    match (locale, color) {
        (Locale::Ja, Color::Black) => "黒",
        (Locale::Ja, Color::White) => "白",
        (Locale::En, Color::Black) => "Black",
        (Locale::En, Color::White) => "White",
    }
}
