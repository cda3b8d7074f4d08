//! Explicit configuration for a game.
//!
//! The board orientation used to be ambient mutable state in earlier
//! designs; it is a plain value here so independent games can coexist
//! and an orientation change never affects a game already in flight.

use serde::{Deserialize, Serialize};

use crate::types::{Color, Square};

/// Which color's home rank sits at the bottom edge of the grid.
///
/// Orientation mirrors ranks only: files always run a..h from column 0
/// to column 7, so castling geometry is identical in both orientations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    WhiteAtBottom,
    BlackAtBottom,
}

impl Orientation {
    /// Row of `color`'s back rank.
    pub fn home_row(self, color: Color) -> u8 {
        match (self, color) {
            (Orientation::WhiteAtBottom, Color::White) => 7,
            (Orientation::WhiteAtBottom, Color::Black) => 0,
            (Orientation::BlackAtBottom, Color::White) => 0,
            (Orientation::BlackAtBottom, Color::Black) => 7,
        }
    }

    /// Row delta of an advancing pawn of `color`.
    pub fn pawn_dir(self, color: Color) -> i8 {
        if self.home_row(color) == 7 { -1 } else { 1 }
    }

    /// Row a pawn of `color` starts on (double-step rank).
    pub fn pawn_start_row(self, color: Color) -> u8 {
        (self.home_row(color) as i8 + self.pawn_dir(color)) as u8
    }

    /// Row a pawn of `color` promotes on.
    pub fn promotion_row(self, color: Color) -> u8 {
        self.home_row(color.other())
    }

    /// File letter for a column ('a'..='h'); orientation-independent.
    pub fn file_char(self, col: u8) -> char {
        (b'a' + col) as char
    }

    /// Rank digit for a row ('1'..='8').
    pub fn rank_char(self, row: u8) -> char {
        match self {
            Orientation::WhiteAtBottom => (b'0' + (8 - row)) as char,
            Orientation::BlackAtBottom => (b'1' + row) as char,
        }
    }

    /// Coordinate name of a square, e.g. "e4".
    pub fn square_name(self, sq: Square) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.file_char(sq.col));
        s.push(self.rank_char(sq.row));
        s
    }

    /// Parse a coordinate name back into a square.
    pub fn square_from_name(self, name: &str) -> Option<Square> {
        let b = name.as_bytes();
        if b.len() != 2 {
            return None;
        }
        if !(b'a'..=b'h').contains(&b[0]) || !(b'1'..=b'8').contains(&b[1]) {
            return None;
        }
        let col = b[0] - b'a';
        let row = match self {
            Orientation::WhiteAtBottom => 8 - (b[1] - b'0'),
            Orientation::BlackAtBottom => b[1] - b'1',
        };
        Some(Square::new(row, col))
    }
}

/// Per-game configuration handed to `GameState` constructors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub orientation: Orientation,
}

impl GameConfig {
    pub fn with_orientation(orientation: Orientation) -> GameConfig {
        GameConfig { orientation }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
