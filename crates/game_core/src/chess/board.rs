use std::fmt;

use serde::{Deserialize, Serialize};

use super::eval::evaluate;
use super::movegen::{in_check, legal_moves};
use super::piece::{ChessPiece, PieceKind};
use crate::board::{Board, Grid, PieceCatalog};
use crate::types::{Move, Player, Score, Square};

pub type ChessPosition = Grid<ChessPiece, 8>;

/// One flag per side and wing. Flags only ever go from true to false.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastlingRights {
    #[serde(rename = "WKS")]
    pub wk: bool,
    #[serde(rename = "WQS")]
    pub wq: bool,
    #[serde(rename = "BKS")]
    pub bk: bool,
    #[serde(rename = "BQS")]
    pub bq: bool,
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wing {
    King,
    Queen,
}

/// Fixed squares involved in one castling move.
pub(crate) struct CastleRoute {
    pub player: Player,
    pub wing: Wing,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook.
    pub between: &'static [Square],
}

const fn s(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

pub(crate) static CASTLE_ROUTES: [CastleRoute; 4] = [
    CastleRoute {
        player: Player::White,
        wing: Wing::King,
        king_from: s(0, 4),
        king_to: s(0, 6),
        rook_from: s(0, 7),
        rook_to: s(0, 5),
        between: &[s(0, 5), s(0, 6)],
    },
    CastleRoute {
        player: Player::White,
        wing: Wing::Queen,
        king_from: s(0, 4),
        king_to: s(0, 2),
        rook_from: s(0, 0),
        rook_to: s(0, 3),
        between: &[s(0, 3), s(0, 2), s(0, 1)],
    },
    CastleRoute {
        player: Player::Black,
        wing: Wing::King,
        king_from: s(7, 4),
        king_to: s(7, 6),
        rook_from: s(7, 7),
        rook_to: s(7, 5),
        between: &[s(7, 5), s(7, 6)],
    },
    CastleRoute {
        player: Player::Black,
        wing: Wing::Queen,
        king_from: s(7, 4),
        king_to: s(7, 2),
        rook_from: s(7, 0),
        rook_to: s(7, 3),
        between: &[s(7, 3), s(7, 2), s(7, 1)],
    },
];

impl CastlingRights {
    pub fn none() -> Self {
        Self {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        }
    }

    pub fn get(&self, player: Player, wing: Wing) -> bool {
        match (player, wing) {
            (Player::White, Wing::King) => self.wk,
            (Player::White, Wing::Queen) => self.wq,
            (Player::Black, Wing::King) => self.bk,
            (Player::Black, Wing::Queen) => self.bq,
        }
    }

    pub fn revoke(&mut self, player: Player, wing: Wing) {
        match (player, wing) {
            (Player::White, Wing::King) => self.wk = false,
            (Player::White, Wing::Queen) => self.wq = false,
            (Player::Black, Wing::King) => self.bk = false,
            (Player::Black, Wing::Queen) => self.bq = false,
        }
    }

    /// Names of the revoked flags, in `WKS WQS BKS BQS` order.
    pub fn revoked(&self) -> Vec<&'static str> {
        [
            (self.wk, "WKS"),
            (self.wq, "WQS"),
            (self.bk, "BKS"),
            (self.bq, "BQS"),
        ]
        .into_iter()
        .filter(|(flag, _)| !flag)
        .map(|(_, name)| name)
        .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChessBoard {
    pub position: ChessPosition,
    pub player_to_move: Player,
    pub castling: CastlingRights,
}

impl ChessBoard {
    pub fn new(position: ChessPosition, player_to_move: Player, castling: CastlingRights) -> Self {
        Self {
            position,
            player_to_move,
            castling,
        }
    }

    /// Board with default (all granted) castling rights.
    pub fn from_position(position: ChessPosition, player_to_move: Player) -> Self {
        Self::new(position, player_to_move, CastlingRights::default())
    }

    pub fn startpos() -> Self {
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut position = ChessPosition::empty();
        for (col, &kind) in back.iter().enumerate() {
            let col = col as u8;
            position.set(Square::new(0, col), ChessPiece::new(Player::White, kind));
            position.set(Square::new(1, col), ChessPiece::WhitePawn);
            position.set(Square::new(6, col), ChessPiece::BlackPawn);
            position.set(Square::new(7, col), ChessPiece::new(Player::Black, kind));
        }
        Self::from_position(position, Player::White)
    }

    /// Square of `player`'s king.
    ///
    /// Panics unless exactly one such king is on the board: a missing or
    /// duplicated king means move generation went wrong.
    pub fn king_square(&self, player: Player) -> Square {
        let kings = self.position.find(ChessPiece::new(player, PieceKind::King));
        assert!(
            kings.len() == 1,
            "expected exactly one {player} king, found {}",
            kings.len()
        );
        kings[0]
    }

    pub fn in_check(&self, player: Player) -> bool {
        in_check(self, player)
    }

    /// Castling route for `mv` if it is the two-file king move from home.
    pub(crate) fn castle_route(moving: ChessPiece, mv: Move) -> Option<&'static CastleRoute> {
        CASTLE_ROUTES.iter().find(|route| {
            moving.is(route.player, PieceKind::King)
                && mv.from == route.king_from
                && mv.to == route.king_to
        })
    }
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board for ChessBoard {
    type Move = Move;

    fn player_to_move(&self) -> Player {
        self.player_to_move
    }

    fn legal_moves(&self) -> Vec<Move> {
        legal_moves(self)
    }

    fn make_move(&self, mv: Move) -> ChessBoard {
        let mover = self.player_to_move;
        let mut position = self.position.clone();
        let moving = position.get(mv.from);
        assert_eq!(
            moving.owner(),
            Some(mover),
            "no {mover} piece on from-square {}",
            mv.from
        );

        position.relocate(mv.from, mv.to);

        if let Some(route) = Self::castle_route(moving, mv) {
            let rook = position.get(route.rook_from);
            position.set(route.rook_to, rook);
            position.set(route.rook_from, ChessPiece::Empty);
        }

        let mut castling = self.castling.clone();
        if moving.kind() == Some(PieceKind::King) {
            castling.revoke(mover, Wing::King);
            castling.revoke(mover, Wing::Queen);
        }
        // A rook leaving its corner, or anything landing there, ends that wing.
        for route in &CASTLE_ROUTES {
            if mv.from == route.rook_from || mv.to == route.rook_from {
                castling.revoke(route.player, route.wing);
            }
        }

        ChessBoard {
            position,
            player_to_move: mover.other(),
            castling,
        }
    }

    /// Checkmate: the side to move is in check and has no legal reply.
    fn winner(&self) -> Option<Player> {
        let stm = self.player_to_move;
        if self.in_check(stm) && self.legal_moves().is_empty() {
            Some(stm.other())
        } else {
            None
        }
    }

    fn evaluation(&self) -> Score {
        evaluate(&self.position)
    }
}

impl fmt::Display for ChessBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) ({:.3}) ({:?})",
            self.position,
            self.player_to_move,
            self.evaluation(),
            self.castling.revoked()
        )
    }
}
