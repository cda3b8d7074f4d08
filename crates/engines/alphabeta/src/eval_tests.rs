use super::*;
use ponder_core::GameConfig;

fn play(state: &mut GameState, from: &str, to: &str) {
    let o = state.orientation();
    let from = o.square_from_name(from).unwrap();
    let to = o.square_from_name(to).unwrap();
    let mv = state
        .find_move(from, to)
        .expect("expected move to be legal");
    state.make_move(mv);
}

#[test]
fn test_startpos_is_balanced() {
    let state = GameState::new(GameConfig::default());
    assert!(evaluate(&state).abs() < 1e-9);
}

#[test]
fn test_material_advantage_scores_positive() {
    // White has an extra queen-side rook.
    let state =
        GameState::from_fen("4k3/pppppppp/8/8/8/8/PPPPPPPP/R3K3 w - - 0 1").unwrap();
    assert!(evaluate(&state) > 0.0);
}

#[test]
fn test_bishop_pair_and_development_terms() {
    // Two white bishops on c1/f1, kings on e1/e8, nothing else.
    let state = GameState::from_fen("4k3/8/8/8/8/8/8/2B1KB2 w - - 0 1").unwrap();
    // Material 2 * 3.2, table term 2 * (-1 * 0.05), bishop bonus
    // 2 * 0.25, minus the no-pawn-moved damping of 2.
    let expected = 2.0 * 3.2 - 2.0 * 0.05 + 0.5 - 2.0;
    assert!((evaluate(&state) - expected).abs() < 1e-9);
}

#[test]
fn test_checkmate_sentinels() {
    // Scholar's mate: black is mated, white wins.
    let mut state = GameState::new(GameConfig::default());
    for (from, to) in [
        ("e2", "e4"),
        ("e7", "e5"),
        ("f1", "c4"),
        ("b8", "c6"),
        ("d1", "h5"),
        ("g8", "f6"),
        ("h5", "f7"),
    ] {
        play(&mut state, from, to);
    }
    assert!(state.get_valid_moves().is_empty());
    assert_eq!(evaluate(&state), CHECKMATE);

    // Fool's mate: white is mated.
    let mut state = GameState::new(GameConfig::default());
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        play(&mut state, from, to);
    }
    assert!(state.get_valid_moves().is_empty());
    assert_eq!(evaluate(&state), -CHECKMATE);
}

#[test]
fn test_stalemate_sentinel() {
    let mut state = GameState::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    state.get_valid_moves();
    assert!(state.stalemate());
    assert_eq!(evaluate(&state), STALEMATE);
}

#[test]
fn test_draw_override_when_score_favors_mover() {
    // Black runs the clock out; the resulting draw leaves white to move
    // a full rook up, so the draw reads as the stalemate sentinel.
    let mut state =
        GameState::from_fen("4k3/8/8/8/8/8/3R4/4K3 b - - 49 40").unwrap();
    play(&mut state, "e8", "f7");
    assert!(state.drawn());
    assert_eq!(evaluate(&state), STALEMATE);
}

#[test]
fn test_draw_keeps_raw_score_for_losing_mover() {
    // Same draw, but the side to move is behind: no override.
    let mut state =
        GameState::from_fen("4k3/8/8/8/8/8/r7/4K3 b - - 49 40").unwrap();
    play(&mut state, "a2", "b2");
    assert!(state.drawn());
    assert!(evaluate(&state) < 0.0);
}

#[test]
fn test_castling_bonus() {
    let mut state =
        GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let before = evaluate(&state);
    play(&mut state, "e1", "g1");
    state.get_valid_moves();
    let after = evaluate(&state);
    // Castling adds the bonus on top of whatever the king/rook table
    // shift contributes.
    assert!(after > before);
}

#[test]
fn test_repetition_penalty() {
    let mut state = GameState::new(GameConfig::default());
    play(&mut state, "g1", "f3");
    play(&mut state, "b8", "c6");
    play(&mut state, "f3", "g1");
    play(&mut state, "c6", "b8");
    play(&mut state, "g1", "f3");
    state.get_valid_moves();
    assert!(state.has_repeated_move(Color::White));
    assert!(evaluate(&state) < 0.0);
}
