//! Position signatures and FEN.
//!
//! The repetition signature is the FEN subset that identifies a
//! position for the threefold rule: piece placement, side to move,
//! castle rights and en-passant square. `fen` extends it with the
//! clocks for export; `from_fen` parses test positions and imports.

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::FenError;
use crate::state::{CastleRights, GameState};
use crate::types::{Color, Piece, PieceKind, Square};

impl GameState {
    fn placement_field(&self) -> String {
        let orientation = self.orientation();
        let mut field = String::new();
        // FEN lists rank 8 first.
        let rows: Vec<u8> = match orientation.rank_char(0) {
            '8' => (0..8).collect(),
            _ => (0..8).rev().collect(),
        };
        for (i, &row) in rows.iter().enumerate() {
            let mut empties = 0;
            for col in 0..8 {
                match self.board.piece_at(Square::new(row, col)) {
                    None => empties += 1,
                    Some(piece) => {
                        if empties > 0 {
                            field.push((b'0' + empties) as char);
                            empties = 0;
                        }
                        field.push(piece.fen_char());
                    }
                }
            }
            if empties > 0 {
                field.push((b'0' + empties) as char);
            }
            if i != 7 {
                field.push('/');
            }
        }
        field
    }

    fn castling_field(&self) -> String {
        let rights = self.castle_rights();
        let mut field = String::new();
        if rights.wks {
            field.push('K');
        }
        if rights.wqs {
            field.push('Q');
        }
        if rights.bks {
            field.push('k');
        }
        if rights.bqs {
            field.push('q');
        }
        if field.is_empty() {
            field.push('-');
        }
        field
    }

    /// Canonical signature for repetition detection.
    pub(crate) fn signature(&self) -> String {
        let side = match self.side_to_move() {
            Color::White => 'w',
            Color::Black => 'b',
        };
        let ep = match self.en_passant_target() {
            Some(sq) => self.orientation().square_name(sq),
            None => "-".to_string(),
        };
        format!(
            "{} {} {} {}",
            self.placement_field(),
            side,
            self.castling_field(),
            ep
        )
    }

    /// Full FEN for the current position.
    pub fn fen(&self) -> String {
        let fullmove = self.fullmove_base + self.notation_log().len() as u32 / 2;
        format!("{} {} {}", self.signature(), self.halfmove_clock(), fullmove)
    }

    /// Parse a FEN string into a fresh state (white-at-bottom
    /// orientation). Used for test positions and board imports.
    pub fn from_fen(fen: &str) -> Result<GameState, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields(parts.len()));
        }

        let config = GameConfig::default();
        let mut board = Board::empty();
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::BadRankCount);
        }
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0u8;
            for c in rank.chars() {
                if let Some(d) = c.to_digit(10) {
                    col += d as u8;
                } else {
                    let kind =
                        PieceKind::from_letter(c).ok_or(FenError::BadPieceChar(c))?;
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if col >= 8 {
                        return Err(FenError::BadFileCount(col as usize + 1));
                    }
                    board.set(Square::new(row as u8, col), Some(Piece::new(color, kind)));
                    col += 1;
                }
            }
            if col != 8 {
                return Err(FenError::BadFileCount(col as usize));
            }
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::BadSideToMove(other.to_string())),
        };

        let mut rights = CastleRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => rights.wks = true,
                    'Q' => rights.wqs = true,
                    'k' => rights.bks = true,
                    'q' => rights.bqs = true,
                    _ => return Err(FenError::BadCastlingChar(c)),
                }
            }
        }

        let en_passant = if parts[3] == "-" {
            None
        } else {
            Some(
                config
                    .orientation
                    .square_from_name(parts[3])
                    .ok_or_else(|| FenError::BadEnPassant(parts[3].to_string()))?,
            )
        };

        let halfmove_clock: u32 = parts
            .get(4)
            .copied()
            .unwrap_or("0")
            .parse()
            .map_err(|_| FenError::BadClock(parts[4].to_string()))?;
        let fullmove: u32 = parts
            .get(5)
            .copied()
            .unwrap_or("1")
            .parse()
            .map_err(|_| FenError::BadClock(parts[5].to_string()))?;

        if board.count(Color::White, PieceKind::King) != 1
            || board.count(Color::Black, PieceKind::King) != 1
        {
            return Err(FenError::KingCount);
        }

        Ok(GameState::assemble(
            board,
            side_to_move,
            rights,
            en_passant,
            halfmove_clock,
            fullmove,
            config,
        ))
    }
}

#[cfg(test)]
#[path = "signature_tests.rs"]
mod signature_tests;
