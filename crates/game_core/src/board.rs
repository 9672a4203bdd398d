use std::fmt;

use crate::error::GameError;
use crate::types::{Player, Score, Square};

/// Static metadata shared by every piece of a kind.
///
/// Each game defines a closed enum of piece kinds (including an empty marker)
/// and answers these lookups from a fixed table.
pub trait PieceCatalog: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Marker for an unoccupied square.
    const EMPTY: Self;

    /// Every kind, empty marker included.
    fn all() -> &'static [Self];

    fn owner(self) -> Option<Player>;

    /// Kind this piece becomes on its promotion rank (itself if it never promotes).
    fn promotes_to(self) -> Self;

    fn promotion_rank(self) -> Option<u8>;

    fn value(self) -> u32;

    /// Short name used in board dumps and snapshots, e.g. `WK` or `E`.
    fn symbol(self) -> &'static str;

    fn from_symbol(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.symbol() == s)
    }

    fn is_empty(self) -> bool {
        self == Self::EMPTY
    }
}

/// Total mapping from every square of an `N`×`N` board to a piece.
///
/// Unoccupied squares hold `P::EMPTY`, so no square is ever absent.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<P, const N: usize> {
    cells: [[P; N]; N],
}

impl<P: PieceCatalog, const N: usize> Grid<P, N> {
    pub const SIZE: u8 = N as u8;

    pub fn empty() -> Self {
        Self {
            cells: [[P::EMPTY; N]; N],
        }
    }

    /// Builds a grid from the occupied squares; everything else is empty.
    pub fn from_pieces<I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = (Square, P)>,
    {
        let mut grid = Self::empty();
        for (sq, piece) in pieces {
            grid.set(sq, piece);
        }
        grid
    }

    #[inline]
    pub fn get(&self, sq: Square) -> P {
        self.cells[sq.row as usize][sq.col as usize]
    }

    #[inline]
    pub fn set(&mut self, sq: Square, piece: P) {
        self.cells[sq.row as usize][sq.col as usize] = piece;
    }

    pub fn owner_at(&self, sq: Square) -> Option<Player> {
        self.get(sq).owner()
    }

    /// Bounded step from `sq`.
    #[inline]
    pub fn offset(sq: Square, dr: i8, dc: i8) -> Option<Square> {
        sq.offset(dr, dc, Self::SIZE)
    }

    /// All squares in row-major order starting at (0, 0).
    pub fn squares() -> impl Iterator<Item = Square> {
        (0..Self::SIZE).flat_map(|row| (0..Self::SIZE).map(move |col| Square::new(row, col)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Square, P)> + '_ {
        Self::squares().map(move |sq| (sq, self.get(sq)))
    }

    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Square, P)> + '_ {
        self.iter().filter(move |(_, p)| p.owner() == Some(player))
    }

    pub fn count(&self, piece: P) -> usize {
        self.iter().filter(|&(_, p)| p == piece).count()
    }

    pub fn find(&self, piece: P) -> Vec<Square> {
        self.iter()
            .filter(|&(_, p)| p == piece)
            .map(|(sq, _)| sq)
            .collect()
    }

    /// Moves the piece on `from` to `to`, promoting it if `to` is on its
    /// promotion rank. Returns the piece that landed.
    pub fn relocate(&mut self, from: Square, to: Square) -> P {
        let moving = self.get(from);
        let landing = if moving.promotion_rank() == Some(to.row) {
            moving.promotes_to()
        } else {
            moving
        };
        self.set(to, landing);
        self.set(from, P::EMPTY);
        landing
    }
}

impl<P: PieceCatalog, const N: usize> fmt::Display for Grid<P, N> {
    /// Rows from the top (highest row) down, one bracketed line each.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..Self::SIZE).rev() {
            let cells: Vec<String> = (0..Self::SIZE)
                .map(|col| format!("{:<2}", self.get(Square::new(row, col)).symbol()))
                .collect();
            write!(f, "[ {} ]", cells.join(" "))?;
            if row > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Capabilities every game board offers to callers and to the search.
///
/// Boards are immutable snapshots: `make_move` returns a new board and never
/// touches the receiver.
pub trait Board: Clone + fmt::Debug + fmt::Display + Send + Sync + Sized {
    type Move: Copy + Eq + fmt::Debug + fmt::Display + Send + Sync;

    fn player_to_move(&self) -> Player;

    /// Legal moves in a stable generation order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Applies a move taken from `legal_moves()`. Behaviour for any other move
    /// is unspecified; use [`Board::try_make_move`] to check first.
    fn make_move(&self, mv: Self::Move) -> Self;

    fn winner(&self) -> Option<Player>;

    /// Static score from White's perspective.
    fn evaluation(&self) -> Score;

    fn game_over(&self) -> bool {
        self.winner().is_some() || self.legal_moves().is_empty()
    }

    fn try_make_move(&self, mv: Self::Move) -> Result<Self, GameError> {
        if self.legal_moves().contains(&mv) {
            Ok(self.make_move(mv))
        } else {
            Err(GameError::IllegalMove(mv.to_string()))
        }
    }

    /// Resolves move text (`e2e4`, `b2`) against the legal moves.
    fn parse_move(&self, text: &str) -> Result<Self::Move, GameError> {
        let wanted = text.trim().to_ascii_lowercase();
        self.legal_moves()
            .into_iter()
            .find(|mv| mv.to_string() == wanted)
            .ok_or(GameError::IllegalMove(wanted))
    }
}
