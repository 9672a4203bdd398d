use std::fmt;

use tracing::trace;

use super::eval::evaluate;
use super::movegen::{captures_from, jumped_square, legal_moves};
use super::piece::DraughtsPiece;
use crate::board::{Board, Grid};
use crate::types::{Move, Player, Score, Square};

pub type DraughtsPosition = Grid<DraughtsPiece, 8>;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DraughtsBoard {
    pub position: DraughtsPosition,
    pub player_to_move: Player,
    /// Piece that must keep capturing before the turn passes.
    pub capturing_piece: Option<Square>,
}

impl DraughtsBoard {
    pub fn new(position: DraughtsPosition, player_to_move: Player) -> Self {
        Self {
            position,
            player_to_move,
            capturing_piece: None,
        }
    }

    /// Resumes a capture chain for the piece on `sq`.
    pub fn with_capturing_piece(mut self, sq: Option<Square>) -> Self {
        self.capturing_piece = sq;
        self
    }

    /// Men on the dark squares of the three rows nearest each player.
    pub fn startpos() -> Self {
        let mut position = DraughtsPosition::empty();
        for sq in DraughtsPosition::squares() {
            if (sq.row + sq.col) % 2 == 1 {
                if sq.row <= 2 {
                    position.set(sq, DraughtsPiece::WhiteMan);
                } else if sq.row >= 5 {
                    position.set(sq, DraughtsPiece::BlackMan);
                }
            }
        }
        Self::new(position, Player::White)
    }

    pub fn piece_count(&self, player: Player) -> usize {
        self.position.pieces_of(player).count()
    }
}

impl Default for DraughtsBoard {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board for DraughtsBoard {
    type Move = Move;

    fn player_to_move(&self) -> Player {
        self.player_to_move
    }

    fn legal_moves(&self) -> Vec<Move> {
        legal_moves(self)
    }

    /// Relocates (and possibly crowns) the piece, removes a jumped piece, and
    /// keeps the turn with the mover while the same piece can jump again.
    fn make_move(&self, mv: Move) -> DraughtsBoard {
        let mover = self.player_to_move;
        let mut position = self.position.clone();
        assert_eq!(
            position.owner_at(mv.from),
            Some(mover),
            "no {mover} piece on from-square {}",
            mv.from
        );

        position.relocate(mv.from, mv.to);

        let Some(jumped) = jumped_square(mv) else {
            return DraughtsBoard::new(position, mover.other());
        };
        assert_eq!(
            position.owner_at(jumped),
            Some(mover.other()),
            "jump {mv} does not pass over an opposing piece"
        );
        position.set(jumped, DraughtsPiece::Empty);

        if captures_from(&position, mv.to, mover).is_empty() {
            DraughtsBoard::new(position, mover.other())
        } else {
            trace!(%mv, "capture chain continues");
            DraughtsBoard::new(position, mover).with_capturing_piece(Some(mv.to))
        }
    }

    /// A side wins once the other has no pieces left.
    fn winner(&self) -> Option<Player> {
        let white = self.piece_count(Player::White);
        let black = self.piece_count(Player::Black);
        match (white, black) {
            (0, b) if b > 0 => Some(Player::Black),
            (w, 0) if w > 0 => Some(Player::White),
            _ => None,
        }
    }

    fn evaluation(&self) -> Score {
        evaluate(&self.position)
    }
}

impl fmt::Display for DraughtsBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) ({:.3})",
            self.position,
            self.player_to_move,
            self.evaluation()
        )
    }
}
