use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::config::{GameConfig, Orientation};
use crate::error::{FenError, MoveError};
use crate::moves::Move;
use crate::types::{Color, Piece, PieceKind, Square};

/// Castling rights. Monotonically non-increasing over a game: a right
/// once lost only returns through `undo_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastleRights {
    pub wks: bool,
    pub bks: bool,
    pub wqs: bool,
    pub bqs: bool,
}

impl CastleRights {
    pub fn all() -> CastleRights {
        CastleRights {
            wks: true,
            bks: true,
            wqs: true,
            bqs: true,
        }
    }

    pub fn none() -> CastleRights {
        CastleRights {
            wks: false,
            bks: false,
            wqs: false,
            bqs: false,
        }
    }

    pub fn kingside(&self, color: Color) -> bool {
        match color {
            Color::White => self.wks,
            Color::Black => self.bks,
        }
    }

    pub fn queenside(&self, color: Color) -> bool {
        match color {
            Color::White => self.wqs,
            Color::Black => self.bqs,
        }
    }

    fn clear_kingside(&mut self, color: Color) {
        match color {
            Color::White => self.wks = false,
            Color::Black => self.bks = false,
        }
    }

    fn clear_queenside(&mut self, color: Color) {
        match color {
            Color::White => self.wqs = false,
            Color::Black => self.bqs = false,
        }
    }
}

/// The authoritative game state: board, side to move, and every piece
/// of bookkeeping needed to make and exactly undo moves.
///
/// One instance lives for the whole game. The deterministic search
/// engines recurse on this single instance through strictly nested
/// `make_move`/`undo_move` pairs; the state is never cloned for search.
#[derive(Clone, Debug)]
pub struct GameState {
    pub board: Board,
    config: GameConfig,
    side_to_move: Color,
    white_king: Square,
    black_king: Square,
    rights: CastleRights,
    rights_log: Vec<CastleRights>,
    en_passant: Option<Square>,
    en_passant_log: Vec<Option<Square>>,
    halfmove_clock: u32,
    clock_log: Vec<u32>,
    /// Position signatures seen so far, for threefold repetition.
    signatures: Vec<String>,
    move_log: Vec<Move>,
    notation_log: Vec<String>,
    pub(crate) fullmove_base: u32,
    checkmate: bool,
    stalemate: bool,
    drawn: bool,
    /// Indexed by color; set when a side castles, cleared on undo.
    castled: [bool; 2],
    /// Indexed by color; sticky flag set when a side plays a move whose
    /// coordinates it already played earlier in the game.
    repeated_move: [bool; 2],
    /// Indexed by color; count of pawn moves played, for the
    /// development term of the evaluation.
    pawn_moves: [u32; 2],
}

impl GameState {
    /// Standard starting position.
    pub fn new(config: GameConfig) -> GameState {
        let board = Board::standard(config.orientation);
        GameState::assemble(
            board,
            Color::White,
            CastleRights::all(),
            None,
            0,
            1,
            config,
        )
    }

    /// Build a state from a collaborator-supplied setup (board import).
    /// Validates that each side has exactly one king.
    pub fn from_setup(
        board: Board,
        side_to_move: Color,
        rights: CastleRights,
        en_passant: Option<Square>,
        config: GameConfig,
    ) -> Result<GameState, FenError> {
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
            0,
            1,
            config,
        ))
    }

    pub(crate) fn assemble(
        board: Board,
        side_to_move: Color,
        rights: CastleRights,
        en_passant: Option<Square>,
        halfmove_clock: u32,
        fullmove_base: u32,
        config: GameConfig,
    ) -> GameState {
        let white_king = board.king_square(Color::White).expect("white king missing");
        let black_king = board.king_square(Color::Black).expect("black king missing");
        let mut state = GameState {
            board,
            config,
            side_to_move,
            white_king,
            black_king,
            rights,
            rights_log: vec![rights],
            en_passant,
            en_passant_log: vec![en_passant],
            halfmove_clock,
            clock_log: vec![halfmove_clock],
            signatures: Vec::new(),
            move_log: Vec::new(),
            notation_log: Vec::new(),
            fullmove_base,
            checkmate: false,
            stalemate: false,
            drawn: false,
            castled: [false; 2],
            repeated_move: [false; 2],
            pawn_moves: [0; 2],
        };
        let sig = state.signature();
        state.signatures.push(sig);
        state
    }

    // ------------------------------------------------------------------
    // Read-only views
    // ------------------------------------------------------------------

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    pub fn castle_rights(&self) -> CastleRights {
        self.rights
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn checkmate(&self) -> bool {
        self.checkmate
    }

    pub fn stalemate(&self) -> bool {
        self.stalemate
    }

    pub fn drawn(&self) -> bool {
        self.drawn
    }

    pub fn has_castled(&self, color: Color) -> bool {
        self.castled[color.idx()]
    }

    pub fn has_repeated_move(&self, color: Color) -> bool {
        self.repeated_move[color.idx()]
    }

    pub fn pawn_has_moved(&self, color: Color) -> bool {
        self.pawn_moves[color.idx()] > 0
    }

    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    /// Rendered notation of every move played, check suffixes included.
    pub fn notation_log(&self) -> &[String] {
        &self.notation_log
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Apply a move from the current legal-move list after validating
    /// membership. External callers go through here; the search engines
    /// use `make_move` directly on moves they obtained from
    /// `get_valid_moves`.
    pub fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        if !self.get_valid_moves().contains(&mv) {
            return Err(MoveError::IllegalMove(
                mv.from.row, mv.from.col, mv.to.row, mv.to.col,
            ));
        }
        self.make_move(mv);
        Ok(())
    }

    /// Find the legal move over the given coordinates, if any.
    pub fn find_move(&mut self, from: Square, to: Square) -> Option<Move> {
        self.get_valid_moves()
            .into_iter()
            .find(|m| m.from == from && m.to == to)
    }

    /// Apply the move and update every piece of bookkeeping. Guaranteed
    /// to be exactly reversed by `undo_move`.
    pub fn make_move(&mut self, mv: Move) {
        let mover = self.side_to_move;

        // Coordinate-level repeat detection feeding the evaluator.
        if self.move_log.iter().any(|m| m.same_squares(&mv)) {
            self.repeated_move[mover.idx()] = true;
        }

        self.board.set(mv.from, None);
        self.board.set(mv.to, Some(mv.piece));

        if mv.piece.kind == PieceKind::Pawn || mv.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if mv.piece.kind == PieceKind::Pawn {
            self.pawn_moves[mover.idx()] += 1;
        }

        if mv.piece.kind == PieceKind::King {
            self.set_king_square(mover, mv.to);
        }

        if mv.is_promotion {
            self.board
                .set(mv.to, Some(Piece::new(mover, PieceKind::Queen)));
        }

        if mv.is_en_passant {
            self.board.set(Square::new(mv.from.row, mv.to.col), None);
        }

        // A double step opens an en-passant window for exactly one ply.
        self.en_passant = if mv.piece.kind == PieceKind::Pawn
            && mv.from.row.abs_diff(mv.to.row) == 2
        {
            Some(Square::new((mv.from.row + mv.to.row) / 2, mv.to.col))
        } else {
            None
        };

        if mv.is_castle {
            let row = mv.to.row;
            if mv.to.col > mv.from.col {
                let rook = self.board.piece_at(Square::new(row, 7));
                self.board.set(Square::new(row, 5), rook);
                self.board.set(Square::new(row, 7), None);
            } else {
                let rook = self.board.piece_at(Square::new(row, 0));
                self.board.set(Square::new(row, 3), rook);
                self.board.set(Square::new(row, 0), None);
            }
            self.castled[mover.idx()] = true;
        }

        self.rights = self.updated_rights(&mv);
        self.rights_log.push(self.rights);
        self.en_passant_log.push(self.en_passant);
        self.clock_log.push(self.halfmove_clock);

        self.side_to_move = mover.other();

        let mut san = mv.notation(self.config.orientation);
        if self.in_check() {
            san.push('+');
        }
        self.notation_log.push(san);
        self.move_log.push(mv);

        let sig = self.signature();
        let occurrences = self.signatures.iter().filter(|s| **s == sig).count() + 1;
        self.signatures.push(sig);
        if occurrences >= 3 || self.halfmove_clock >= 50 {
            self.drawn = true;
        }
    }

    /// Pop the most recent move and restore every field `make_move`
    /// touched. Safe no-op when the move log is empty.
    pub fn undo_move(&mut self) {
        let Some(mv) = self.move_log.pop() else { return };
        self.notation_log.pop();
        self.signatures.pop();
        self.drawn = false;
        self.checkmate = false;
        self.stalemate = false;

        let mover = self.side_to_move.other();
        self.side_to_move = mover;

        self.board.set(mv.from, Some(mv.piece));
        self.board.set(mv.to, mv.captured);

        if mv.piece.kind == PieceKind::King {
            self.set_king_square(mover, mv.from);
        }
        if mv.piece.kind == PieceKind::Pawn {
            self.pawn_moves[mover.idx()] -= 1;
        }

        if mv.is_en_passant {
            self.board.set(mv.to, None);
            self.board
                .set(Square::new(mv.from.row, mv.to.col), mv.captured);
        }

        self.en_passant_log.pop();
        self.en_passant = *self.en_passant_log.last().expect("en-passant log seeded");
        self.rights_log.pop();
        self.rights = *self.rights_log.last().expect("rights log seeded");
        self.clock_log.pop();
        self.halfmove_clock = *self.clock_log.last().expect("clock log seeded");

        if mv.is_castle {
            let row = mv.to.row;
            if mv.to.col > mv.from.col {
                let rook = self.board.piece_at(Square::new(row, 5));
                self.board.set(Square::new(row, 7), rook);
                self.board.set(Square::new(row, 5), None);
            } else {
                let rook = self.board.piece_at(Square::new(row, 3));
                self.board.set(Square::new(row, 0), rook);
                self.board.set(Square::new(row, 3), None);
            }
            self.castled[mover.idx()] = false;
        }
    }

    pub(crate) fn set_king_square(&mut self, color: Color, sq: Square) {
        match color {
            Color::White => self.white_king = sq,
            Color::Black => self.black_king = sq,
        }
    }

    pub(crate) fn set_mate_flags(&mut self, checkmate: bool, stalemate: bool) {
        self.checkmate = checkmate;
        self.stalemate = stalemate;
    }

    pub(crate) fn signature_history(&self) -> &[String] {
        &self.signatures
    }

    /// Rights snapshot after this move: a king move clears both of the
    /// mover's flags; a rook leaving its home square, or a rook being
    /// captured on its home square, clears the matching flag.
    fn updated_rights(&self, mv: &Move) -> CastleRights {
        let mut rights = self.rights;
        let orientation = self.config.orientation;

        if let Some(captured) = mv.captured {
            if captured.kind == PieceKind::Rook && !mv.is_en_passant {
                let home = orientation.home_row(captured.color);
                if mv.to == Square::new(home, 0) {
                    rights.clear_queenside(captured.color);
                } else if mv.to == Square::new(home, 7) {
                    rights.clear_kingside(captured.color);
                }
            }
        }

        match mv.piece.kind {
            PieceKind::King => {
                rights.clear_kingside(mv.piece.color);
                rights.clear_queenside(mv.piece.color);
            }
            PieceKind::Rook => {
                let home = orientation.home_row(mv.piece.color);
                if mv.from == Square::new(home, 0) {
                    rights.clear_queenside(mv.piece.color);
                } else if mv.from == Square::new(home, 7) {
                    rights.clear_kingside(mv.piece.color);
                }
            }
            _ => {}
        }
        rights
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
