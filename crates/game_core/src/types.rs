use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Search and evaluation score, always from White's point of view.
pub type Score = f64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "B")]
    Black,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Score of a finished game won by this player.
    pub fn top_score(self) -> Score {
        match self {
            Player::White => 1.0,
            Player::Black => -1.0,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    /// Single-letter name used in board dumps and snapshots.
    pub fn letter(self) -> char {
        match self {
            Player::White => 'W',
            Player::Black => 'B',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A (row, column) coordinate, both 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Square reached by stepping `(dr, dc)`, or `None` when it leaves an
    /// `size`×`size` board.
    pub fn offset(self, dr: i8, dc: i8, size: u8) -> Option<Square> {
        let r = self.row as i8 + dr;
        let c = self.col as i8 + dc;
        if (0..size as i8).contains(&r) && (0..size as i8).contains(&c) {
            Some(Square::new(r as u8, c as u8))
        } else {
            None
        }
    }

    /// Algebraic coordinate: file letter from the column, rank from the row.
    pub fn to_coord(self) -> String {
        let f = (b'a' + self.col) as char;
        let r = (b'1' + self.row) as char;
        format!("{f}{r}")
    }

    pub fn from_coord(c: &str) -> Option<Square> {
        let b = c.as_bytes();
        if b.len() != 2 {
            return None;
        }
        let f = b[0];
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return None;
        }
        Some(Square::new(r - b'1', f - b'a'))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_coord())
    }
}

impl FromStr for Square {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_coord(s).ok_or_else(|| GameError::InvalidSquare(s.to_string()))
    }
}

impl From<(u8, u8)> for Square {
    fn from((row, col): (u8, u8)) -> Self {
        Square::new(row, col)
    }
}

/// A piece relocation from one square to another.
///
/// Side effects (castling rook, jumped draughts piece, promotion) are derived
/// from the squares and the moving piece when the move is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Row and column distance covered by the move.
    pub fn delta(self) -> (i8, i8) {
        (
            self.to.row as i8 - self.from.row as i8,
            self.to.col as i8 - self.from.col as i8,
        )
    }
}

impl From<((u8, u8), (u8, u8))> for Move {
    fn from((from, to): ((u8, u8), (u8, u8))) -> Self {
        Move::new(from.into(), to.into())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(GameError::InvalidMove(s.to_string()));
        }
        let from = Square::from_coord(&s[0..2]);
        let to = Square::from_coord(&s[2..4]);
        match (from, to) {
            (Some(from), Some(to)) => Ok(Move::new(from, to)),
            _ => Err(GameError::InvalidMove(s.to_string())),
        }
    }
}
