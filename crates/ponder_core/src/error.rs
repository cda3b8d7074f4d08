use thiserror::Error;

/// Errors raised by the validated move interface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The move is not in the current legal-move list. Moves must be
    /// sourced from `GameState::get_valid_moves`.
    #[error("move ({0},{1}) -> ({2},{3}) is not in the legal move list")]
    IllegalMove(u8, u8, u8, u8),
}

/// Errors raised while building a state from FEN or a supplied setup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 whitespace-separated fields, found {0}")]
    MissingFields(usize),
    #[error("board section must describe exactly 8 ranks")]
    BadRankCount,
    #[error("rank describes {0} files, expected 8")]
    BadFileCount(usize),
    #[error("invalid piece character '{0}'")]
    BadPieceChar(char),
    #[error("invalid side-to-move field '{0}'")]
    BadSideToMove(String),
    #[error("invalid castling-rights character '{0}'")]
    BadCastlingChar(char),
    #[error("invalid en-passant field '{0}'")]
    BadEnPassant(String),
    #[error("invalid clock field '{0}'")]
    BadClock(String),
    #[error("missing king or multiple kings found")]
    KingCount,
}
