//! Tic-tac-toe: the smallest game behind the [`Board`] trait.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Grid, PieceCatalog};
use crate::types::{Player, Score, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    White,
    Black,
    Empty,
}

static ALL: [Mark; 3] = [Mark::White, Mark::Black, Mark::Empty];

impl Mark {
    pub fn of(player: Player) -> Mark {
        match player {
            Player::White => Mark::White,
            Player::Black => Mark::Black,
        }
    }
}

impl PieceCatalog for Mark {
    const EMPTY: Self = Mark::Empty;

    fn all() -> &'static [Self] {
        &ALL
    }

    fn owner(self) -> Option<Player> {
        match self {
            Mark::White => Some(Player::White),
            Mark::Black => Some(Player::Black),
            Mark::Empty => None,
        }
    }

    fn promotes_to(self) -> Self {
        self
    }

    fn promotion_rank(self) -> Option<u8> {
        None
    }

    fn value(self) -> u32 {
        match self {
            Mark::Empty => 0,
            _ => 1,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Mark::White => "W",
            Mark::Black => "B",
            Mark::Empty => "E",
        }
    }
}

pub type TicTacToePosition = Grid<Mark, 3>;

const LINES: [[(u8, u8); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TicTacToeBoard {
    pub position: TicTacToePosition,
    pub player_to_move: Player,
}

impl TicTacToeBoard {
    pub fn new(position: TicTacToePosition, player_to_move: Player) -> Self {
        Self {
            position,
            player_to_move,
        }
    }

    pub fn startpos() -> Self {
        Self::new(TicTacToePosition::empty(), Player::White)
    }
}

impl Default for TicTacToeBoard {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board for TicTacToeBoard {
    /// The square to mark.
    type Move = Square;

    fn player_to_move(&self) -> Player {
        self.player_to_move
    }

    fn legal_moves(&self) -> Vec<Square> {
        if self.winner().is_some() {
            return Vec::new();
        }
        self.position
            .iter()
            .filter(|(_, mark)| mark.is_empty())
            .map(|(sq, _)| sq)
            .collect()
    }

    fn make_move(&self, sq: Square) -> TicTacToeBoard {
        assert!(self.position.get(sq).is_empty(), "square {sq} is already marked");
        let mut position = self.position.clone();
        position.set(sq, Mark::of(self.player_to_move));
        TicTacToeBoard::new(position, self.player_to_move.other())
    }

    fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|line| {
            let [a, b, c] = line.map(|sq| self.position.get(sq.into()));
            if a == b && b == c { a.owner() } else { None }
        })
    }

    fn evaluation(&self) -> Score {
        0.0
    }
}

impl fmt::Display for TicTacToeBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.position, self.player_to_move)
    }
}

#[cfg(test)]
#[path = "tictactoe_tests.rs"]
mod tictactoe_tests;
