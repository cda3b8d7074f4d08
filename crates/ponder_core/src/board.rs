use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::config::Orientation;
use crate::types::{Color, Piece, PieceKind, Square};

/// The 8x8 grid. A cell either holds exactly one piece or is empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    pub fn empty() -> Board {
        Board {
            grid: [[None; 8]; 8],
        }
    }

    /// Standard starting layout for the given orientation.
    pub fn standard(orientation: Orientation) -> Board {
        let mut board = Board::empty();
        for color in [Color::White, Color::Black] {
            let home = orientation.home_row(color);
            let pawns = orientation.pawn_start_row(color);
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                board.set(Square::new(home, col as u8), Some(Piece::new(color, kind)));
            }
            for col in 0..8 {
                board.set(
                    Square::new(pawns, col),
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }
        board
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.row as usize][sq.col as usize]
    }

    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.grid[sq.row as usize][sq.col as usize] = piece;
    }

    /// Iterate every square, top row first.
    pub fn squares() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::new(row, col)))
    }

    /// Locate the king of `color`.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Board::squares().find(|&sq| self.piece_at(sq) == Some(Piece::new(color, PieceKind::King)))
    }

    /// Number of pieces of the given color and kind on the board.
    pub fn count(&self, color: Color, kind: PieceKind) -> u32 {
        Board::squares()
            .filter(|&sq| self.piece_at(sq) == Some(Piece::new(color, kind)))
            .count() as u32
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Option<Piece> {
        &self.grid[sq.row as usize][sq.col as usize]
    }
}
