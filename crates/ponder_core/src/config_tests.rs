use super::*;

#[test]
fn test_square_names_white_at_bottom() {
    let o = Orientation::WhiteAtBottom;
    assert_eq!(o.square_name(Square::new(7, 0)), "a1");
    assert_eq!(o.square_name(Square::new(0, 7)), "h8");
    assert_eq!(o.square_name(Square::new(4, 4)), "e4");
    assert_eq!(o.square_from_name("e4"), Some(Square::new(4, 4)));
    assert_eq!(o.square_from_name("z9"), None);
}

#[test]
fn test_square_names_black_at_bottom() {
    let o = Orientation::BlackAtBottom;
    assert_eq!(o.square_name(Square::new(0, 0)), "a1");
    assert_eq!(o.square_name(Square::new(7, 7)), "h8");
    assert_eq!(o.square_from_name("a1"), Some(Square::new(0, 0)));
}

#[test]
fn test_pawn_geometry_follows_orientation() {
    let o = Orientation::WhiteAtBottom;
    assert_eq!(o.home_row(Color::White), 7);
    assert_eq!(o.pawn_dir(Color::White), -1);
    assert_eq!(o.pawn_start_row(Color::White), 6);
    assert_eq!(o.promotion_row(Color::White), 0);

    let f = Orientation::BlackAtBottom;
    assert_eq!(f.home_row(Color::White), 0);
    assert_eq!(f.pawn_dir(Color::White), 1);
    assert_eq!(f.pawn_start_row(Color::White), 1);
    assert_eq!(f.promotion_row(Color::White), 7);
}
