use super::*;
use crate::state::GameState;

fn legal(state: &mut GameState, from: &str, to: &str) -> Move {
    let o = state.orientation();
    let from = o.square_from_name(from).unwrap();
    let to = o.square_from_name(to).unwrap();
    state
        .find_move(from, to)
        .expect("expected move to be legal")
}

#[test]
fn test_mvv_lva_prefers_valuable_victims() {
    // Pawn takes queen must order ahead of queen takes pawn.
    let mut state =
        GameState::from_fen("4k3/8/8/3q4/2P5/8/8/3QK3 w - - 0 1").unwrap();
    let pawn_takes_queen = legal(&mut state, "c4", "d5");
    let queen_takes_queen = legal(&mut state, "d1", "d5");
    assert!(pawn_takes_queen.ordering_score > queen_takes_queen.ordering_score);
    assert!(pawn_takes_queen.ordering_score > 100);

    let quiet = legal(&mut state, "e1", "e2");
    assert!(quiet.ordering_score <= 100);
}

#[test]
fn test_equality_distinguishes_flags() {
    let mut state = GameState::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
    let push = legal(&mut state, "e2", "e3");
    let mut ghost = push;
    ghost.is_en_passant = true;
    assert!(push.same_squares(&ghost));
    assert_ne!(push, ghost);
}

#[test]
fn test_pawn_and_piece_notation() {
    let mut state = GameState::new(crate::config::GameConfig::default());
    let o = state.orientation();
    assert_eq!(legal(&mut state, "e2", "e4").notation(o), "e4");
    assert_eq!(legal(&mut state, "g1", "f3").notation(o), "Nf3");
}

#[test]
fn test_capture_notation() {
    let mut state =
        GameState::from_fen("4k3/8/8/3p4/2P5/8/8/4K3 w - - 0 1").unwrap();
    let o = state.orientation();
    assert_eq!(legal(&mut state, "c4", "d5").notation(o), "cxd5");
}

#[test]
fn test_castle_notation() {
    let mut state =
        GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let o = state.orientation();
    assert_eq!(legal(&mut state, "e1", "g1").notation(o), "0-0");
    assert_eq!(legal(&mut state, "e1", "c1").notation(o), "0-0-0");
}

#[test]
fn test_promotion_notation() {
    let mut state = GameState::from_fen("8/P6k/8/8/8/8/8/6K1 w - - 0 1").unwrap();
    let o = state.orientation();
    let promo = legal(&mut state, "a7", "a8");
    assert!(promo.is_promotion);
    assert_eq!(promo.notation(o), "a8=Q");
}

#[test]
fn test_en_passant_notation() {
    let mut state =
        GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let o = state.orientation();
    let ep = legal(&mut state, "e5", "d6");
    assert!(ep.is_en_passant);
    assert_eq!(ep.notation(o), "exd6 e.p.");
}

#[test]
fn test_knight_disambiguation_by_file() {
    // Knights on b1 and f1 both reach d2.
    let mut state =
        GameState::from_fen("4k3/8/8/8/8/8/8/1N1K1N2 w - - 0 1").unwrap();
    let o = state.orientation();
    assert_eq!(legal(&mut state, "b1", "d2").notation(o), "Nbd2");
    assert_eq!(legal(&mut state, "f1", "d2").notation(o), "Nfd2");
}

#[test]
fn test_knight_disambiguation_by_rank() {
    // Knights on b1 and b5 share c3 and share the b-file.
    let mut state =
        GameState::from_fen("4k3/8/8/1N6/8/8/8/1N2K3 w - - 0 1").unwrap();
    let o = state.orientation();
    assert_eq!(legal(&mut state, "b1", "c3").notation(o), "N1c3");
    assert_eq!(legal(&mut state, "b5", "c3").notation(o), "N5c3");
}
