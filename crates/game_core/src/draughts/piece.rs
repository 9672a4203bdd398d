use serde::{Deserialize, Serialize};

use crate::board::PieceCatalog;
use crate::types::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DraughtsPiece {
    WhiteMan,
    BlackMan,
    WhiteKing,
    BlackKing,
    Empty,
}

const FORWARD_WHITE: [(i8, i8); 2] = [(1, 1), (1, -1)];
const FORWARD_BLACK: [(i8, i8); 2] = [(-1, -1), (-1, 1)];
const ALL_DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

static ALL: [DraughtsPiece; 5] = [
    DraughtsPiece::WhiteMan,
    DraughtsPiece::BlackMan,
    DraughtsPiece::WhiteKing,
    DraughtsPiece::BlackKing,
    DraughtsPiece::Empty,
];

impl DraughtsPiece {
    pub fn is_king(self) -> bool {
        matches!(self, DraughtsPiece::WhiteKing | DraughtsPiece::BlackKing)
    }

    /// Diagonal unit steps this piece may travel along.
    pub fn directions(self) -> &'static [(i8, i8)] {
        match self {
            DraughtsPiece::WhiteMan => &FORWARD_WHITE,
            DraughtsPiece::BlackMan => &FORWARD_BLACK,
            DraughtsPiece::WhiteKing | DraughtsPiece::BlackKing => &ALL_DIAGONALS,
            DraughtsPiece::Empty => &[],
        }
    }
}

impl PieceCatalog for DraughtsPiece {
    const EMPTY: Self = DraughtsPiece::Empty;

    fn all() -> &'static [Self] {
        &ALL
    }

    fn owner(self) -> Option<Player> {
        match self {
            DraughtsPiece::WhiteMan | DraughtsPiece::WhiteKing => Some(Player::White),
            DraughtsPiece::BlackMan | DraughtsPiece::BlackKing => Some(Player::Black),
            DraughtsPiece::Empty => None,
        }
    }

    fn promotes_to(self) -> Self {
        match self {
            DraughtsPiece::WhiteMan => DraughtsPiece::WhiteKing,
            DraughtsPiece::BlackMan => DraughtsPiece::BlackKing,
            other => other,
        }
    }

    fn promotion_rank(self) -> Option<u8> {
        match self {
            DraughtsPiece::WhiteMan => Some(7),
            DraughtsPiece::BlackMan => Some(0),
            _ => None,
        }
    }

    fn value(self) -> u32 {
        match self {
            DraughtsPiece::WhiteMan | DraughtsPiece::BlackMan => 1,
            DraughtsPiece::WhiteKing | DraughtsPiece::BlackKing => 2,
            DraughtsPiece::Empty => 0,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            DraughtsPiece::WhiteMan => "W",
            DraughtsPiece::BlackMan => "B",
            DraughtsPiece::WhiteKing => "WK",
            DraughtsPiece::BlackKing => "BK",
            DraughtsPiece::Empty => "E",
        }
    }
}
