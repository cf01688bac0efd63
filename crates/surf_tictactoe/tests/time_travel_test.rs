//! Scenario tests for move history and time travel.

use surf_tictactoe::{
    Board, GameState, GameStatus, InvariantSet, Phase, Player, Position, Rejection, Square,
    SurfInvariants, LINES, is_draw, winner, winning_line,
};

fn play(indices: &[usize]) -> GameState {
    indices
        .iter()
        .map(|&i| Position::from_index(i).expect("index 0-8"))
        .fold(GameState::new(), |state, pos| state.advance(pos))
}

#[test]
fn test_first_move_places_x() {
    let state = play(&[0]);

    let expected: Board = "X../.../...".parse().unwrap();
    assert_eq!(state.board(), &expected);
    assert!(!state.next_is_first_player());
    assert_eq!(state.to_move(), Player::O);
    assert_eq!(state.history().len(), 2);
}

#[test]
fn test_diagonal_win_halts_game() {
    // X: 0, 4, 8 / O: 1, 3
    let state = play(&[0, 1, 4, 3, 8]);
    assert_eq!(winning_line(state.board()), Some(LINES[6]));

    assert_eq!(winner(state.board()), Some(Player::X));
    assert_eq!(state.status(), GameStatus::Winner(Player::X));
    assert_eq!(state.phase(), Phase::Won(Player::X));

    let after = state.advance(Position::TopRight);
    assert_eq!(after, state);
    assert_eq!(
        state.try_advance(Position::TopRight),
        Err(Rejection::GameAlreadyDecided(Player::X))
    );
}

#[test]
fn test_full_board_without_line_is_draw() {
    let state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(state.history().len(), 10);
    assert!(is_draw(state.board()));
    assert_eq!(state.status(), GameStatus::Draw);
    assert_eq!(state.phase(), Phase::Drawn);
}

#[test]
fn test_jump_restores_earlier_board() {
    let state = play(&[0, 4, 8]);
    let jumped = state.jump_to(1);

    let expected: Board = "X../.../...".parse().unwrap();
    assert_eq!(jumped.board(), &expected);
    assert!(!jumped.next_is_first_player());
    assert_eq!(jumped.history(), state.history());
}

#[test]
fn test_out_of_range_jump_is_noop() {
    let state = play(&[0, 4, 8]);
    assert_eq!(state.history().len(), 4);

    assert_eq!(state.jump_to(99), state);
    assert_eq!(state.jump_to(4), state);
    assert!(matches!(
        state.try_jump_to(99),
        Err(Rejection::OutOfRangeStep { step: 99, len: 4 })
    ));
}

#[test]
fn test_move_after_rewind_discards_future() {
    let state = play(&[0, 4]);
    let previous_step = state.current_step();

    let advanced = state.advance(Position::BottomRight);
    let rewound = advanced.jump_to(previous_step);
    let branched = rewound.advance(Position::TopRight);

    assert_eq!(branched.history().len(), previous_step + 2);
    assert_eq!(branched.board().get(Position::BottomRight), Square::Empty);
    assert_eq!(branched.board().get(Position::TopRight), Square::Occupied(Player::X));
    assert_eq!(branched.current_step(), branched.latest_step());
}

#[test]
fn test_rewind_then_occupied_move_keeps_future() {
    // A refused move after a rewind leaves the recorded future alone.
    let state = play(&[0, 4, 8]).jump_to(1);
    let after = state.advance(Position::TopLeft);

    assert_eq!(after, state);
    assert_eq!(after.history().len(), 4);
}

#[test]
fn test_jump_after_advance_restores_board() {
    let state = play(&[4, 0]);
    for pos in Position::valid_moves(state.board()) {
        let round_trip = state.advance(pos).jump_to(state.current_step());
        assert_eq!(round_trip.board(), state.board());
        assert_eq!(round_trip.to_move(), state.to_move());
    }
}

#[test]
fn test_status_follows_cursor() {
    let state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(state.jump_to(0).status(), GameStatus::Next(Player::X));
    assert!(state.jump_to(0).status().is_opening(0));
    assert_eq!(state.jump_to(3).status(), GameStatus::Next(Player::O));
    // One ply short of the draw the full history reaches.
    assert_eq!(state.jump_to(8).status(), GameStatus::Next(Player::X));
    assert_eq!(state.status(), GameStatus::Draw);
}

#[test]
fn test_turn_flag_matches_parity_everywhere() {
    let state = play(&[0, 1, 4, 3, 8]);
    for step in 0..state.history().len() {
        let jumped = state.jump_to(step);
        assert_eq!(jumped.next_is_first_player(), step % 2 == 0);
        assert!(SurfInvariants::check_all(&jumped).is_ok());
    }
}

#[test]
fn test_new_game_after_win_starts_fresh() {
    let won = play(&[0, 3, 1, 4, 2]);
    assert!(won.phase().is_terminal());

    let fresh = GameState::new();
    assert_eq!(fresh.history().len(), 1);
    assert_eq!(fresh.status(), GameStatus::Next(Player::X));
}
