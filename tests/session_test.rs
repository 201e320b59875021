//! End-to-end games through the session API.

use gridtoe::{
    Board, Coord, GameError, GameSession, LineFamily, MoveError, Outcome, Player, check_line,
};

fn session(size: usize) -> GameSession {
    GameSession::new(
        size,
        Player::new("Hai", 'x').unwrap(),
        Player::new("Ha", 'o').unwrap(),
    )
    .unwrap()
}

fn play(session: &mut GameSession, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        let result = session.attempt_move(row, col);
        assert!(result.accepted, "move ({}, {}) was rejected", row, col);
    }
}

#[test]
fn test_top_row_win_on_three() {
    let mut session = session(3);
    play(&mut session, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(session.outcome(), &Outcome::InProgress);

    let result = session.attempt_move(0, 2);
    assert!(result.accepted);
    assert_eq!(result.outcome.winner().map(|p| p.name()), Some("Hai"));

    let line = session.winning_line().unwrap();
    assert_eq!(line.family, LineFamily::Rows);
    assert_eq!(
        line.coords,
        vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]
    );
}

#[test]
fn test_full_board_without_run_is_tie() {
    let mut session = session(3);
    play(
        &mut session,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );
    assert_eq!(session.outcome(), &Outcome::Tie);
    assert!(session.winning_line().is_none());
    assert_eq!(session.history().len(), 9);
}

#[test]
fn test_descending_diagonal_win_on_ten() {
    let mut session = session(10);
    assert_eq!(session.threshold(), 5);
    play(
        &mut session,
        &[
            (2, 2),
            (0, 9),
            (3, 3),
            (1, 9),
            (4, 4),
            (2, 9),
            (5, 5),
            (3, 8),
        ],
    );
    assert_eq!(session.outcome(), &Outcome::InProgress);

    session.attempt_move(6, 6);
    assert!(matches!(session.outcome(), Outcome::Win(p) if p.mark() == 'x'));
    let line = session.winning_line().unwrap();
    assert_eq!(line.family, LineFamily::DiagonalsA);
    assert_eq!(line.coords.first(), Some(&Coord::new(2, 2)));
    assert_eq!(line.coords.last(), Some(&Coord::new(6, 6)));
}

#[test]
fn test_four_in_a_row_does_not_win_on_large_board() {
    let mut session = session(6);
    play(&mut session, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3)]);
    assert_eq!(session.outcome(), &Outcome::InProgress);
}

#[test]
fn test_out_of_range_move_keeps_turn() {
    let mut session = session(3);
    let result = session.attempt_move(5, 5);
    assert!(!result.accepted);
    assert_eq!(
        result.rejection,
        Some(MoveError::OutOfRange {
            row: 5,
            col: 5,
            size: 3
        })
    );
    assert_eq!(result.outcome, Outcome::InProgress);
    assert_eq!(session.turn_index(), 0);
    assert_eq!(session.current_player().name(), "Hai");
}

#[test]
fn test_occupied_cell_keeps_turn() {
    let mut session = session(3);
    play(&mut session, &[(1, 1)]);
    let result = session.attempt_move(1, 1);
    assert_eq!(
        result.rejection,
        Some(MoveError::CellOccupied { row: 1, col: 1 })
    );
    assert_eq!(session.current_player().name(), "Ha");
    assert_eq!(session.renderable_board().get(1, 1), Some('x'));
}

#[test]
fn test_moves_after_win_rejected() {
    let mut session = session(3);
    play(&mut session, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let before = session.renderable_board();
    let result = session.attempt_move(2, 2);
    assert_eq!(result.rejection, Some(MoveError::GameOver));
    assert_eq!(session.renderable_board(), before);
}

#[test]
fn test_reset_is_idempotent() {
    let mut session = session(4);
    play(&mut session, &[(0, 0), (3, 3), (2, 1)]);
    session.reset();
    let once = session.renderable_board();
    session.reset();
    assert_eq!(session.renderable_board(), once);
    assert_eq!(once, gridtoe::BoardSnapshot::from(&Board::new(4).unwrap()));
    assert_eq!(session.turn_index(), 0);
    assert!(session.history().is_empty());
}

#[test]
fn test_resize_and_rename() {
    let mut session = session(3);
    session.rename_player(1, "Hoa").unwrap();
    assert_eq!(session.players()[1].name(), "Hoa");

    play(&mut session, &[(0, 0)]);
    assert_eq!(session.rename_player(0, "Late"), Err(GameError::SessionStarted));

    session.resize(7).unwrap();
    assert_eq!(session.board().size(), 7);
    assert_eq!(session.threshold(), 5);
    assert_eq!(session.turn_index(), 0);
    assert_eq!(session.resize(0), Err(GameError::InvalidBoardSize(0)));
    assert_eq!(session.board().size(), 7);
}

#[test]
fn test_check_line_threshold_depends_on_size() {
    let mut board = Board::new(6).unwrap();
    let x = Player::new("X", 'x').unwrap();
    for col in 0..4 {
        board.mark(0, col, &x);
    }
    assert_eq!(check_line(&board.rows()[0], 6), None);
    board.mark(0, 4, &x);
    assert_eq!(check_line(&board.rows()[0], 6), Some('x'));
    // The same run of three would already win on a small board.
    assert_eq!(check_line(&board.rows()[0], 3), Some('x'));
    assert_eq!(check_line(&board.rows()[1], 6), None);
}

#[test]
fn test_winning_line_serializes() {
    let mut session = session(3);
    play(&mut session, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
    let json = serde_json::to_value(session.winning_line().unwrap()).unwrap();
    assert_eq!(json["family"], "DiagonalsA");
    assert_eq!(json["mark"], "x");
    assert_eq!(json["coords"][2], serde_json::json!({ "row": 2, "col": 2 }));
}
