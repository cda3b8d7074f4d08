use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::config::Orientation;
use crate::types::{Color, Piece, PieceKind, Square};

/// Marker recorded by the move generator when several pieces of the
/// same kind can reach the same destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disambiguation {
    #[default]
    None,
    /// Prefix the start file letter (default case).
    ByFile,
    /// Prefix the start rank digit (knights/rooks sharing a file).
    ByRank,
}

/// One move, immutable once generated. Captures everything the move
/// touches so make/undo and notation need no further lookups.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// The piece being moved.
    pub piece: Piece,
    /// The piece displaced by this move, if any. For en passant this is
    /// the pawn behind the destination square.
    pub captured: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castle: bool,
    pub is_promotion: bool,
    /// MVV-LVA ordering score; captures of valuable pieces by cheap
    /// attackers sort first.
    pub ordering_score: i32,
    pub disambiguation: Disambiguation,
}

/// Equality covers the coordinate 4-tuple and the move-kind flags, so
/// two structurally different moves over the same squares never compare
/// equal. Use [`Move::same_squares`] for plain coordinate matching.
impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.same_squares(other)
            && self.is_en_passant == other.is_en_passant
            && self.is_castle == other.is_castle
            && self.is_promotion == other.is_promotion
    }
}
impl Eq for Move {}

fn victim_value(kind: Option<PieceKind>) -> i32 {
    match kind {
        Some(PieceKind::Queen) => 500,
        Some(PieceKind::Rook) => 400,
        Some(PieceKind::Bishop) => 350,
        Some(PieceKind::Knight) => 300,
        Some(PieceKind::King) => 200,
        Some(PieceKind::Pawn) => 100,
        None => 0,
    }
}

impl Move {
    /// Build a move against the board it was generated from.
    pub(crate) fn from_board(
        board: &Board,
        orientation: Orientation,
        from: Square,
        to: Square,
        is_en_passant: bool,
        is_castle: bool,
    ) -> Move {
        let piece = board.piece_at(from).expect("no piece on start square");
        let captured = if is_en_passant {
            Some(Piece::new(piece.color.other(), PieceKind::Pawn))
        } else {
            board.piece_at(to)
        };
        let is_promotion =
            piece.kind == PieceKind::Pawn && to.row == orientation.promotion_row(piece.color);
        let ordering_score =
            victim_value(captured.map(|p| p.kind)) + 6 - victim_value(Some(piece.kind)) / 100;
        Move {
            from,
            to,
            piece,
            captured,
            is_en_passant,
            is_castle,
            is_promotion,
            ordering_score,
            disambiguation: Disambiguation::None,
        }
    }

    /// Coordinate-only correspondence: same start and end squares,
    /// flags ignored.
    pub fn same_squares(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Algebraic notation for this move, without the check suffix (which
    /// depends on the position after the move; `GameState::make_move`
    /// appends it when recording the notation log).
    pub fn notation(&self, orientation: Orientation) -> String {
        if self.is_castle {
            return if self.to.col == 6 {
                "0-0".to_string()
            } else {
                "0-0-0".to_string()
            };
        }

        if self.is_en_passant {
            return format!(
                "{}x{} e.p.",
                orientation.file_char(self.from.col),
                orientation.square_name(self.to)
            );
        }

        let mut s = String::new();
        if self.piece.kind == PieceKind::Pawn {
            if self.is_capture() {
                s.push(orientation.file_char(self.from.col));
                s.push('x');
            }
        } else {
            s.push(self.piece.kind.letter());
            match self.disambiguation {
                Disambiguation::None => {}
                Disambiguation::ByFile => s.push(orientation.file_char(self.from.col)),
                Disambiguation::ByRank => s.push(orientation.rank_char(self.from.row)),
            }
            if self.is_capture() {
                s.push('x');
            }
        }
        s.push_str(&orientation.square_name(self.to));
        if self.is_promotion {
            s.push_str("=Q");
        }
        s
    }
}

/// Color of the mover, for callers that only hold the move.
impl Move {
    pub fn mover(&self) -> Color {
        self.piece.color
    }
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
