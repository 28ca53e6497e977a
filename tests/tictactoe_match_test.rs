//! Tests for the match state machine, driven without any presenter.

use tictactoe_match::{
    DrawStarter, EngineError, GameRng, HeuristicSelector, MatchConfig, MatchPhase, MatchState,
    Marker, MoveError, Players, Position, Role, RoundOutcome, Score,
};

fn pos(n: u8) -> Position {
    Position::from_number(n).unwrap()
}

fn start(config: MatchConfig, starter: Role) -> MatchState {
    MatchState::new(config, Players::from_human_marker(Marker::X), starter).unwrap()
}

/// Plays squares in order, alternating from whoever is to move.
fn play(mut state: MatchState, squares: &[u8]) -> MatchState {
    for &n in squares {
        state = state.place(pos(n)).unwrap();
    }
    state
}

fn outcome(state: &MatchState) -> RoundOutcome {
    match state.phase() {
        MatchPhase::RoundOver { outcome, .. } => *outcome,
        other => panic!("expected a finished round, got {other:?}"),
    }
}

/// Human (starting) takes the top row while the computer plays 4 and 5.
const HUMAN_TOP_ROW: [u8; 5] = [1, 4, 2, 5, 3];

/// X: 1 2 6 7 8, O: 3 4 5 9 with X moving first. No line is ever completed.
const DRAW_X_FIRST: [u8; 9] = [1, 5, 2, 3, 7, 4, 6, 9, 8];

#[test]
fn test_completed_line_ends_round_without_reply() {
    let state = start(MatchConfig::default(), Role::Human);
    let state = play(state, &[1, 4, 2, 5]);
    assert_eq!(state.to_move(), Some(Role::Human));

    let state = state.place(pos(3)).unwrap();
    assert_eq!(outcome(&state), RoundOutcome::HumanWin);
    assert_eq!(state.to_move(), None);
    assert_eq!(*state.score(), Score::new(1, 0));

    let rejected = state.place(pos(9)).unwrap_err();
    assert!(matches!(rejected.error, EngineError::OutOfPhase(_)));
    assert_eq!(outcome(&rejected.state), RoundOutcome::HumanWin);
}

#[test]
fn test_five_human_wins_end_match() {
    let mut state = start(MatchConfig::default(), Role::Human);
    for round in 1..=5 {
        state = play(state, &HUMAN_TOP_ROW);
        assert_eq!(outcome(&state), RoundOutcome::HumanWin);
        assert_eq!(*state.starter(), Role::Human);
        assert_eq!(state.is_decided(), round == 5);
        state = state.next_round(true).unwrap();
        if round < 5 {
            assert_eq!(state.board().open_positions().len(), 9);
            assert_eq!(state.to_move(), Some(Role::Human));
        }
    }
    assert!(state.is_over());
    assert_eq!(*state.score(), Score::new(5, 0));
    assert_eq!(state.champion(), Some(Role::Human));
    assert_eq!(*state.rounds_played(), 5);
}

#[test]
fn test_computer_win_makes_computer_starter() {
    let state = start(MatchConfig::default(), Role::Human);
    // Computer takes 4-5-6.
    let state = play(state, &[1, 4, 2, 5, 9, 6]);
    assert_eq!(outcome(&state), RoundOutcome::ComputerWin);
    assert_eq!(*state.score(), Score::new(0, 1));
    assert_eq!(*state.starter(), Role::Computer);

    let state = state.next_round(true).unwrap();
    assert_eq!(state.to_move(), Some(Role::Computer));
}

#[test]
fn test_draw_hands_first_move_to_other_side() {
    let state = start(MatchConfig::default(), Role::Human);
    let state = play(state, &DRAW_X_FIRST);
    assert_eq!(outcome(&state), RoundOutcome::Draw);
    assert_eq!(*state.score(), Score::new(0, 0));
    assert_eq!(*state.rounds_played(), 1);
    assert_eq!(*state.starter(), Role::Computer);

    // The starter made the ninth move, so the other side opens the next round.
    let state = state.next_round(true).unwrap();
    assert_eq!(state.to_move(), Some(Role::Computer));
}

#[test]
fn test_draw_keeps_starter_when_configured() {
    let config = MatchConfig::default().with_draw_starter(DrawStarter::Keep);
    let state = start(config, Role::Human);
    let state = play(state, &DRAW_X_FIRST);
    assert_eq!(outcome(&state), RoundOutcome::Draw);
    assert_eq!(*state.starter(), Role::Human);

    let state = state.next_round(true).unwrap();
    assert_eq!(state.to_move(), Some(Role::Human));
}

#[test]
fn test_stop_before_threshold() {
    let state = play(start(MatchConfig::default(), Role::Human), &HUMAN_TOP_ROW);
    let state = state.next_round(false).unwrap();
    assert!(state.is_over());
    assert_eq!(state.champion(), None);
    // The last board is kept for display.
    assert!(state.board().has_winner());
}

#[test]
fn test_decided_match_ignores_continue() {
    let config = MatchConfig::default().with_win_threshold(1);
    let state = play(start(config, Role::Human), &HUMAN_TOP_ROW);
    assert!(state.is_decided());
    assert!(state.next_round(true).unwrap().is_over());
}

#[test]
fn test_occupied_square_is_invalid_move() {
    let state = play(start(MatchConfig::default(), Role::Human), &[5]);
    assert!(state.check_open(pos(5)).is_err());
    let (state, error) = state.place(pos(5)).unwrap_err().into_parts();
    assert_eq!(error, EngineError::InvalidMove(MoveError::Occupied(Position::Center)));
    assert!(state.check_open(pos(1)).is_ok());
}

#[test]
fn test_refused_move_keeps_round_playable() {
    let state = play(start(MatchConfig::default(), Role::Human), &HUMAN_TOP_ROW);
    let state = state.next_round(true).unwrap();
    let state = play(state, &[5]);

    let (state, error) = state.place(pos(5)).unwrap_err().into_parts();
    assert!(matches!(error, EngineError::InvalidMove(_)));
    assert_eq!(state.to_move(), Some(Role::Computer));
    assert_eq!(*state.score(), Score::new(1, 0));
    assert_eq!(*state.rounds_played(), 1);
    assert_eq!(state.board().occupied_positions(), vec![Position::Center]);

    // Same round carries on: computer 1, human 2, computer 3, human 8 wins 2-5-8.
    let state = play(*state, &[1, 2, 3, 8]);
    assert_eq!(outcome(&state), RoundOutcome::HumanWin);
    assert_eq!(*state.score(), Score::new(2, 0));
}

#[test]
fn test_next_round_requires_round_over() {
    let state = start(MatchConfig::default(), Role::Human);
    assert!(matches!(state.next_round(true), Err(EngineError::OutOfPhase(_))));
}

#[test]
fn test_computer_move_only_on_computer_turn() {
    let selector = HeuristicSelector::default();
    let mut rng = GameRng::new(9);

    let human_turn = start(MatchConfig::default(), Role::Human);
    assert!(matches!(
        human_turn.computer_move(&selector, &mut rng),
        Err(EngineError::OutOfPhase(_))
    ));

    let computer_turn = start(MatchConfig::default(), Role::Computer);
    assert_eq!(computer_turn.computer_move(&selector, &mut rng), Ok(Position::Center));
    let state = computer_turn.place(pos(5)).unwrap();
    assert_eq!(state.board().cell(Position::Center).marker(), Some(Marker::O));
}

#[test]
fn test_zero_threshold_is_invalid_configuration() {
    let config = MatchConfig::default().with_win_threshold(0);
    let err = MatchState::new(config, Players::from_human_marker(Marker::O), Role::Human)
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidConfiguration(_)));
}

#[test]
fn test_round_history_recorded() {
    let state = play(start(MatchConfig::default(), Role::Human), &HUMAN_TOP_ROW);
    match state.phase() {
        MatchPhase::RoundOver { history, .. } => {
            let squares: Vec<u8> = history.iter().map(|m| m.position.number()).collect();
            assert_eq!(squares, HUMAN_TOP_ROW.to_vec());
            assert!(history.iter().step_by(2).all(|m| m.marker == Marker::X));
        }
        other => panic!("unexpected phase {other:?}"),
    }
}
