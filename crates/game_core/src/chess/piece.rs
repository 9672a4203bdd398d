use serde::{Deserialize, Serialize};

use crate::board::PieceCatalog;
use crate::types::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChessPiece {
    WhiteKing,
    WhiteQueen,
    WhiteBishop,
    WhiteKnight,
    WhiteRook,
    WhitePawn,
    BlackKing,
    BlackQueen,
    BlackBishop,
    BlackKnight,
    BlackRook,
    BlackPawn,
    Empty,
}

pub struct PieceInfo {
    pub owner: Option<Player>,
    pub kind: Option<PieceKind>,
    pub promotes_to: ChessPiece,
    pub promotion_rank: Option<u8>,
    pub value: u32,
    pub symbol: &'static str,
}

const fn info(
    owner: Option<Player>,
    kind: Option<PieceKind>,
    promotes_to: ChessPiece,
    promotion_rank: Option<u8>,
    value: u32,
    symbol: &'static str,
) -> PieceInfo {
    PieceInfo {
        owner,
        kind,
        promotes_to,
        promotion_rank,
        value,
        symbol,
    }
}

const W: Option<Player> = Some(Player::White);
const B: Option<Player> = Some(Player::Black);

// Indexed by discriminant; order must match `ChessPiece`.
static CATALOG: [PieceInfo; 13] = {
    use ChessPiece::*;
    use PieceKind::*;
    [
        info(W, Some(King), WhiteKing, None, 999, "WK"),
        info(W, Some(Queen), WhiteQueen, None, 9, "WQ"),
        info(W, Some(Bishop), WhiteBishop, None, 3, "WB"),
        info(W, Some(Knight), WhiteKnight, None, 3, "WN"),
        info(W, Some(Rook), WhiteRook, None, 5, "WR"),
        info(W, Some(Pawn), WhiteQueen, Some(7), 1, "WP"),
        info(B, Some(King), BlackKing, None, 999, "BK"),
        info(B, Some(Queen), BlackQueen, None, 9, "BQ"),
        info(B, Some(Bishop), BlackBishop, None, 3, "BB"),
        info(B, Some(Knight), BlackKnight, None, 3, "BN"),
        info(B, Some(Rook), BlackRook, None, 5, "BR"),
        info(B, Some(Pawn), BlackQueen, Some(0), 1, "BP"),
        info(None, None, Empty, None, 0, "E"),
    ]
};

static ALL: [ChessPiece; 13] = [
    ChessPiece::WhiteKing,
    ChessPiece::WhiteQueen,
    ChessPiece::WhiteBishop,
    ChessPiece::WhiteKnight,
    ChessPiece::WhiteRook,
    ChessPiece::WhitePawn,
    ChessPiece::BlackKing,
    ChessPiece::BlackQueen,
    ChessPiece::BlackBishop,
    ChessPiece::BlackKnight,
    ChessPiece::BlackRook,
    ChessPiece::BlackPawn,
    ChessPiece::Empty,
];

impl ChessPiece {
    pub fn new(player: Player, kind: PieceKind) -> ChessPiece {
        use ChessPiece::*;
        match (player, kind) {
            (Player::White, PieceKind::King) => WhiteKing,
            (Player::White, PieceKind::Queen) => WhiteQueen,
            (Player::White, PieceKind::Bishop) => WhiteBishop,
            (Player::White, PieceKind::Knight) => WhiteKnight,
            (Player::White, PieceKind::Rook) => WhiteRook,
            (Player::White, PieceKind::Pawn) => WhitePawn,
            (Player::Black, PieceKind::King) => BlackKing,
            (Player::Black, PieceKind::Queen) => BlackQueen,
            (Player::Black, PieceKind::Bishop) => BlackBishop,
            (Player::Black, PieceKind::Knight) => BlackKnight,
            (Player::Black, PieceKind::Rook) => BlackRook,
            (Player::Black, PieceKind::Pawn) => BlackPawn,
        }
    }

    #[inline]
    pub fn info(self) -> &'static PieceInfo {
        &CATALOG[self as usize]
    }

    pub fn kind(self) -> Option<PieceKind> {
        self.info().kind
    }

    pub fn is(self, player: Player, kind: PieceKind) -> bool {
        self == ChessPiece::new(player, kind)
    }
}

impl PieceCatalog for ChessPiece {
    const EMPTY: Self = ChessPiece::Empty;

    fn all() -> &'static [Self] {
        &ALL
    }

    fn owner(self) -> Option<Player> {
        self.info().owner
    }

    fn promotes_to(self) -> Self {
        self.info().promotes_to
    }

    fn promotion_rank(self) -> Option<u8> {
        self.info().promotion_rank
    }

    fn value(self) -> u32 {
        self.info().value
    }

    fn symbol(self) -> &'static str {
        self.info().symbol
    }
}
