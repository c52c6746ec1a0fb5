//! End-to-end games played through the public rules API.

use othello::game::{self, next_status};
use othello::message::Locale;
use othello::{Board, Color, GameState, Position, Status, StoneCount, Winner};
use proptest::prelude::*;

fn at(row: u8, col: u8) -> Position {
    Position::new(row, col).unwrap()
}

fn all_positions() -> impl Iterator<Item = Position> {
    (0..64).filter_map(Position::from_index)
}

/// Checks one accepted move against the turn/pass/terminal rules.
fn check_transition(before: &GameState, after: &GameState, pos: Position) {
    let mover = before.turn().expect("move accepted while game over");

    assert_eq!(after.board().get(pos), Some(mover));
    for flipped in after.flipped() {
        assert_eq!(before.board().get(flipped), Some(mover.opponent()));
        assert_eq!(after.board().get(flipped), Some(mover));
    }
    let changed = after.flipped().len() + 1;
    let unchanged = all_positions()
        .filter(|&p| before.board().get(p) == after.board().get(p))
        .count();
    assert_eq!(unchanged + changed, 64);

    match (after.status(), after.passed()) {
        (Status::InProgress { turn }, None) => {
            assert_eq!(turn, mover.opponent());
        }
        (Status::InProgress { turn }, Some(passed)) => {
            assert_eq!(turn, mover);
            assert_eq!(passed, mover.opponent());
            assert!(!after.board().has_valid_move(passed));
        }
        (Status::Terminal { .. }, passed) => {
            assert_eq!(passed, None);
            assert!(!after.board().has_valid_move(Color::Black));
            assert!(!after.board().has_valid_move(Color::White));
        }
    }
}

fn assert_final_message(state: &GameState) {
    let result = state.result().unwrap();
    let StoneCount { black, white } = state.count_stones();
    let outcome = if black > white {
        "黒の勝ち！"
    } else if white > black {
        "白の勝ち！"
    } else {
        "引き分け！"
    };

    assert_eq!((result.black_count, result.white_count), (black, white));
    assert_eq!(
        state.message(Locale::Ja),
        format!("ゲーム終了！{outcome} (黒:{black} 白:{white})")
    );
}

#[test]
fn standard_opening_d3() {
    let state = GameState::new();

    let after = state.place_stone(at(2, 3));

    assert_eq!(after.count_stones(), StoneCount { black: 4, white: 1 });
    assert_eq!(after.flipped(), vec![at(3, 3)]);
    assert_eq!(after.turn(), Some(Color::White));
    check_transition(&state, &after, at(2, 3));
}

#[test]
fn first_legal_move_playthrough_reaches_terminal() {
    let mut state = GameState::new();
    let mut moves = 0u8;

    while let Some(&pos) = state.legal_moves().first() {
        let next = state.place_stone(pos);
        check_transition(&state, &next, pos);
        state = next;
        moves += 1;
        assert!(moves <= 60);
    }

    assert!(state.is_terminal());
    let count = state.count_stones();
    assert_eq!(count.black + count.white, moves + 4);
    assert!(count.black + count.white <= 64);
    assert_final_message(&state);

    assert_eq!(game::reset(), GameState::new());
}

#[test]
fn white_wins_when_it_holds_more_stones() {
    let board: Board = "
        OX------
        --------
        --------
        --------
        --------
        --------
        --------
        ------XX"
        .parse()
        .unwrap();
    let over = GameState::from_position(board, Color::White).place_stone(at(0, 2));

    assert_eq!(over.result().map(|r| r.winner), Some(Winner::White));
    assert_eq!(over.message(Locale::En), "Game over! White wins! (Black: 2, White: 3)");
    assert_final_message(&over);
}

#[test]
fn next_status_on_full_board_is_terminal() {
    let board = Board::from_bitboards(u64::MAX, 0);

    let (status, passed) = next_status(&board, Color::White);

    assert_eq!(passed, None);
    match status {
        Status::Terminal { result } => {
            assert_eq!(result.winner, Winner::Black);
            assert_eq!(result.black_count, 64);
        }
        Status::InProgress { .. } => panic!("full board must be terminal"),
    }
}

proptest! {
    #[test]
    fn random_games_obey_transition_rules(choices in prop::collection::vec(any::<usize>(), 60)) {
        let mut state = GameState::new();
        let mut moves = 0u8;

        for choice in choices {
            let legal = state.legal_moves();
            if legal.is_empty() {
                break;
            }

            for pos in all_positions().filter(|p| !legal.contains(p)) {
                prop_assert_eq!(state.place_stone(pos), state);
            }

            let pos = legal[choice % legal.len()];
            let next = state.place_stone(pos);
            check_transition(&state, &next, pos);
            state = next;
            moves += 1;
        }

        let count = state.count_stones();
        prop_assert_eq!(count.black + count.white, moves + 4);
        if state.is_terminal() {
            assert_final_message(&state);
            for pos in all_positions() {
                prop_assert_eq!(state.place_stone(pos), state);
            }
        }
    }
}
