use super::*;
use crate::config::{GameConfig, Orientation};
use crate::state::GameState;

fn names(state: &GameState, moves: &[Move]) -> Vec<String> {
    let o = state.orientation();
    moves
        .iter()
        .map(|m| format!("{}{}", o.square_name(m.from), o.square_name(m.to)))
        .collect()
}

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
fn test_startpos_has_twenty_moves() {
    let mut state = GameState::new(GameConfig::default());
    assert_eq!(state.get_valid_moves().len(), 20);
}

#[test]
fn test_startpos_flipped_orientation_has_twenty_moves() {
    let mut state =
        GameState::new(GameConfig::with_orientation(Orientation::BlackAtBottom));
    let moves = state.get_valid_moves();
    assert_eq!(moves.len(), 20);
    // White sits at the top edge and advances toward higher rows.
    assert!(moves.iter().all(|m| m.to.row > m.from.row));
}

#[test]
fn test_kiwipete_move_count() {
    // Complex middle-game position exercising castles, pins and
    // en-passant bookkeeping at once.
    let mut state = GameState::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    )
    .unwrap();
    assert_eq!(state.get_valid_moves().len(), 48);
}

#[test]
fn test_double_check_allows_only_king_moves() {
    let mut state =
        GameState::from_fen("k3r3/8/8/8/8/3n4/8/4K3 w - - 0 1").unwrap();
    let moves = state.get_valid_moves();
    assert!(moves.iter().all(|m| m.piece.kind == PieceKind::King));
    let mut dests = names(&state, &moves);
    dests.sort();
    assert_eq!(dests, vec!["e1d1", "e1d2", "e1f1"]);
}

#[test]
fn test_single_check_block_or_capture() {
    // Rook on e8 checks the e1 king; bishop can block on e3, knight can
    // capture nothing; king can step aside.
    let mut state =
        GameState::from_fen("k3r3/8/8/8/8/8/8/2B1K3 w - - 0 1").unwrap();
    let moves = state.get_valid_moves();
    for m in &moves {
        if m.piece.kind != PieceKind::King {
            // Non-king moves must land on the checking ray.
            assert_eq!(m.to.col, 4, "move {:?} does not block", m);
        }
    }
    let labels = names(&state, &moves);
    assert!(labels.contains(&"c1e3".to_string()));
}

#[test]
fn test_file_pinned_pawn_may_advance() {
    let mut state =
        GameState::from_fen("3r4/8/8/8/8/8/3P4/3K4 w - - 0 1").unwrap();
    let moves = state.get_valid_moves();
    let labels = names(&state, &moves);
    assert!(labels.contains(&"d2d3".to_string()));
    assert!(labels.contains(&"d2d4".to_string()));
}

#[test]
fn test_diagonally_pinned_pawn_cannot_move() {
    let mut state =
        GameState::from_fen("4k3/8/8/8/7b/8/5P2/4K3 w - - 0 1").unwrap();
    let moves = state.get_valid_moves();
    let o = state.orientation();
    let f2 = o.square_from_name("f2").unwrap();
    assert!(moves.iter().all(|m| m.from != f2));
}

#[test]
fn test_pinned_knight_is_frozen() {
    let mut state =
        GameState::from_fen("4k3/8/8/8/8/4r3/4N3/4K3 w - - 0 1").unwrap();
    let moves = state.get_valid_moves();
    let o = state.orientation();
    let e2 = o.square_from_name("e2").unwrap();
    assert!(moves.iter().all(|m| m.from != e2));
}

#[test]
fn test_pinned_slider_moves_along_axis_only() {
    // Rook d2 pinned on the d-file may slide along it, nowhere else.
    let mut state =
        GameState::from_fen("3r4/8/8/8/8/8/3R4/3K4 w - - 0 1").unwrap();
    let moves = state.get_valid_moves();
    let o = state.orientation();
    let d2 = o.square_from_name("d2").unwrap();
    for m in moves.iter().filter(|m| m.from == d2) {
        assert_eq!(m.to.col, d2.col);
    }
    // Sliding up to capture the pinning rook is included.
    assert!(names(&state, &moves).contains(&"d2d8".to_string()));
}

#[test]
fn test_en_passant_window_lasts_one_ply() {
    let mut state = GameState::new(GameConfig::default());
    play(&mut state, "e2", "e4");
    play(&mut state, "a7", "a6");
    play(&mut state, "e4", "e5");
    play(&mut state, "d7", "d5");
    let moves = state.get_valid_moves();
    assert!(moves.iter().any(|m| m.is_en_passant));

    play(&mut state, "h2", "h3");
    play(&mut state, "h7", "h6");
    let moves = state.get_valid_moves();
    assert!(moves.iter().all(|m| !m.is_en_passant));
}

#[test]
fn test_en_passant_discovered_check_is_excluded() {
    // Taking en passant would clear the fifth rank between the white
    // king and the black queen.
    let mut state =
        GameState::from_fen("7k/8/8/K2pP2q/8/8/8/8 w - d6 0 1").unwrap();
    let moves = state.get_valid_moves();
    assert!(moves.iter().all(|m| !m.is_en_passant));
}

#[test]
fn test_en_passant_allowed_with_blocker_on_rank() {
    // Same geometry, but a knight between the pawns and the queen
    // keeps the king safe.
    let mut state =
        GameState::from_fen("7k/8/8/K2pP1Nq/8/8/8/8 w - d6 0 1").unwrap();
    let moves = state.get_valid_moves();
    assert!(moves.iter().any(|m| m.is_en_passant));
}

#[test]
fn test_castling_both_sides_available() {
    let mut state =
        GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let moves = state.get_valid_moves();
    let castles: Vec<&Move> = moves.iter().filter(|m| m.is_castle).collect();
    assert_eq!(castles.len(), 2);
}

#[test]
fn test_castling_blocked_by_attacked_transit_square() {
    // Black rook on f8 covers f1: kingside is out, queenside remains.
    let mut state =
        GameState::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    let moves = state.get_valid_moves();
    let castles: Vec<&Move> = moves.iter().filter(|m| m.is_castle).collect();
    assert_eq!(castles.len(), 1);
    assert_eq!(castles[0].to.col, 2);
}

#[test]
fn test_castling_gone_after_king_moved() {
    let mut state =
        GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    play(&mut state, "e1", "e2");
    play(&mut state, "e8", "e7");
    play(&mut state, "e2", "e1");
    play(&mut state, "e7", "e8");
    let moves = state.get_valid_moves();
    assert!(moves.iter().all(|m| !m.is_castle));
}

#[test]
fn test_castling_gone_after_rook_moved() {
    let mut state =
        GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    play(&mut state, "h1", "g1");
    play(&mut state, "a8", "b8");
    play(&mut state, "g1", "h1");
    play(&mut state, "b8", "a8");
    let moves = state.get_valid_moves();
    let castles: Vec<&Move> = moves.iter().filter(|m| m.is_castle).collect();
    assert_eq!(castles.len(), 1);
    assert_eq!(castles[0].to.col, 2);
}

#[test]
fn test_no_castling_while_in_check() {
    let mut state =
        GameState::from_fen("4k3/8/8/8/8/8/4r3/R3K2R w KQ - 0 1").unwrap();
    let moves = state.get_valid_moves();
    assert!(moves.iter().all(|m| !m.is_castle));
}

#[test]
fn test_checkmate_and_stalemate_flags() {
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
    let moves = state.get_valid_moves();
    assert!(moves.is_empty());
    assert!(state.checkmate());
    assert!(!state.stalemate());

    let mut state = GameState::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    let moves = state.get_valid_moves();
    assert!(moves.is_empty());
    assert!(state.stalemate());
    assert!(!state.checkmate());
    assert!(!state.in_check());
}

#[test]
fn test_zero_moves_iff_mate_or_stalemate() {
    let mut state = GameState::new(GameConfig::default());
    let moves = state.get_valid_moves();
    assert!(!moves.is_empty());
    assert!(!state.checkmate() && !state.stalemate());
}
