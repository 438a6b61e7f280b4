//! Tests for the typestate game lifecycle.

use gridmoji_core::{
    GameInProgress, GameResult, GameSetup, Move, MoveError, Outcome, Player, Position,
};

#[test]
fn test_typestate_lifecycle() {
    let game = GameSetup::new();
    let game = game.start(Player::X);
    assert_eq!(game.to_move(), Player::X);

    let result = game
        .make_move(Move::new(Player::X, Position::Center))
        .expect("valid move");

    let game = match result {
        GameResult::InProgress(g) => g,
        GameResult::Finished(_) => panic!("game shouldn't finish after one move"),
    };

    assert_eq!(game.to_move(), Player::O);
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_occupied_square_rejected() {
    let game = GameSetup::new().start(Player::X);

    let result = game.make_move(Move::new(Player::X, Position::Center));
    let game = match result.unwrap() {
        GameResult::InProgress(g) => g,
        GameResult::Finished(_) => panic!("unexpected finish"),
    };

    let result = game.make_move(Move::new(Player::O, Position::Center));
    assert!(matches!(result, Err(MoveError::SquareOccupied(_))));
}

#[test]
fn test_wrong_player_rejected() {
    let game = GameSetup::new().start(Player::X);

    let result = game.make_move(Move::new(Player::O, Position::Center));
    assert!(matches!(result, Err(MoveError::WrongPlayer(_))));
}

#[test]
fn test_start_with_second_player_first() {
    let game = GameSetup::new().start(Player::O);
    assert_eq!(game.to_move(), Player::O);
    assert_eq!(game.first_player(), Player::O);

    let result = game.make_move(Move::new(Player::O, Position::Center));
    assert!(result.is_ok());
}

#[test]
fn test_replay_from_history() {
    let moves = vec![
        Move::new(Player::X, Position::Center),
        Move::new(Player::O, Position::TopLeft),
        Move::new(Player::X, Position::BottomRight),
        Move::new(Player::O, Position::TopRight),
        Move::new(Player::X, Position::BottomLeft),
    ];

    let result = GameInProgress::replay(&moves).expect("valid replay");

    match result {
        GameResult::InProgress(game) => {
            assert_eq!(game.history().len(), 5);
            assert_eq!(game.to_move(), Player::O);
        }
        GameResult::Finished(_) => panic!("game shouldn't finish"),
    }
}

#[test]
fn test_win_detection_and_highlight() {
    // X takes the top row.
    let moves = vec![
        Move::new(Player::X, Position::TopLeft),
        Move::new(Player::O, Position::Center),
        Move::new(Player::X, Position::TopCenter),
        Move::new(Player::O, Position::BottomLeft),
        Move::new(Player::X, Position::TopRight),
    ];

    match GameInProgress::replay(&moves).expect("valid replay") {
        GameResult::Finished(game) => {
            assert_eq!(*game.outcome(), Outcome::Winner(Player::X));
            assert_eq!(
                game.winning_line(),
                Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
            );
        }
        GameResult::InProgress(_) => panic!("expected a finished game"),
    }
}

#[test]
fn test_draw_detection() {
    // X O X / X O O / O X X - fills the board with no winner.
    let moves = vec![
        Move::new(Player::X, Position::TopLeft),
        Move::new(Player::O, Position::TopCenter),
        Move::new(Player::X, Position::TopRight),
        Move::new(Player::O, Position::Center),
        Move::new(Player::X, Position::MiddleLeft),
        Move::new(Player::O, Position::MiddleRight),
        Move::new(Player::X, Position::BottomCenter),
        Move::new(Player::O, Position::BottomLeft),
        Move::new(Player::X, Position::BottomRight),
    ];

    match GameInProgress::replay(&moves).expect("valid replay") {
        GameResult::Finished(game) => {
            assert_eq!(*game.outcome(), Outcome::Draw);
            assert!(game.outcome().is_draw());
            assert_eq!(game.winning_line(), None);
        }
        GameResult::InProgress(_) => panic!("expected a finished game"),
    }
}

#[test]
fn test_no_moves_after_finish() {
    // The type system enforces this: GameFinished has no make_move.
    // What we can check at runtime is that a finished game restarts
    // into a clean setup.
    let moves = vec![
        Move::new(Player::X, Position::TopLeft),
        Move::new(Player::O, Position::Center),
        Move::new(Player::X, Position::TopCenter),
        Move::new(Player::O, Position::BottomLeft),
        Move::new(Player::X, Position::TopRight),
    ];

    let finished = match GameInProgress::replay(&moves).expect("valid replay") {
        GameResult::Finished(game) => game,
        GameResult::InProgress(_) => panic!("expected a finished game"),
    };

    let fresh = finished.restart();
    assert!(Position::valid_moves(fresh.board()).len() == 9);
}

#[test]
fn test_move_serde_round_trip() {
    let mov = Move::new(Player::O, Position::BottomCenter);
    let json = serde_json::to_string(&mov).expect("serialize");
    let back: Move = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(mov, back);
}
