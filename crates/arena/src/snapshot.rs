//! JSON board snapshots
//!
//! A snapshot is the transport form of a board: every square keyed as
//! `S{row}{col}` with its piece symbol, the side to move, the move that led
//! here and, for chess, the castling rights.
//!
//! ```json
//! {"position": {"S00": "WR", "S01": "WN", ...},
//!  "player_to_move": "B",
//!  "previous_move": "S14_S34",
//!  "can_castle": {"WKS": true, "WQS": true, "BKS": true, "BQS": true},
//!  "winner": null}
//! ```
//!
//! A request to play a move carries it in an extra `move` field.

use std::collections::BTreeMap;

use game_core::chess::{CastlingRights, ChessPiece, PieceKind};
use game_core::draughts::{DraughtsPosition, captures_from};
use game_core::{
    Board, ChessBoard, DraughtsBoard, GameError, Grid, Move, PieceCatalog, Player, Square, TicTacToeBoard,
    pick_best_move,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::SnapshotError;

const NO_MOVE: &str = "none";

fn no_move() -> String {
    NO_MOVE.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub position: BTreeMap<String, String>,
    pub player_to_move: Player,
    #[serde(default = "no_move")]
    pub previous_move: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_castle: Option<CastlingRights>,
    /// Draughts piece in the middle of a capture chain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capturing_piece: Option<String>,
    /// Filled on output, ignored on input
    #[serde(default)]
    pub winner: Option<Player>,
    #[serde(default, rename = "move", skip_serializing_if = "Option::is_none")]
    pub requested_move: Option<String>,
}

impl Snapshot {
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }
}

// =============================================================================
// Move text
// =============================================================================

/// Square and move encodings used inside snapshots.
pub trait MoveText: Sized {
    fn to_text(&self) -> String;
    fn from_text(text: &str) -> Result<Self, SnapshotError>;
}

impl MoveText for Square {
    fn to_text(&self) -> String {
        format!("S{}{}", self.row, self.col)
    }

    fn from_text(text: &str) -> Result<Self, SnapshotError> {
        let digits = text.strip_prefix('S').ok_or_else(|| SnapshotError::BadMove(text.to_string()))?;
        let mut chars = digits.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(c), None) => match (r.to_digit(10), c.to_digit(10)) {
                (Some(r), Some(c)) => Ok(Square::new(r as u8, c as u8)),
                _ => Err(SnapshotError::BadMove(text.to_string())),
            },
            _ => Err(SnapshotError::BadMove(text.to_string())),
        }
    }
}

impl MoveText for Move {
    fn to_text(&self) -> String {
        format!("{}_{}", self.from.to_text(), self.to.to_text())
    }

    fn from_text(text: &str) -> Result<Self, SnapshotError> {
        let (from, to) = text
            .split_once('_')
            .ok_or_else(|| SnapshotError::BadMove(text.to_string()))?;
        Ok(Move::new(Square::from_text(from)?, Square::from_text(to)?))
    }
}

// =============================================================================
// Board codecs
// =============================================================================

/// Boards that convert to and from snapshots.
pub trait SnapshotBoard: Board<Move: MoveText> + Sized {
    fn to_snapshot(&self, previous_move: Option<&Self::Move>) -> Snapshot;
    fn from_snapshot(snapshot: &Snapshot) -> Result<Self, SnapshotError>;
}

fn encode_position<P: PieceCatalog, const N: usize>(grid: &Grid<P, N>) -> BTreeMap<String, String> {
    grid.iter()
        .map(|(sq, piece)| (sq.to_text(), piece.symbol().to_string()))
        .collect()
}

/// Every square must be present exactly once with a known piece name.
fn decode_position<P: PieceCatalog, const N: usize>(
    position: &BTreeMap<String, String>,
) -> Result<Grid<P, N>, SnapshotError> {
    for key in position.keys() {
        let sq = Square::from_text(key).map_err(|_| SnapshotError::UnknownSquare(key.clone()))?;
        if sq.row >= Grid::<P, N>::SIZE || sq.col >= Grid::<P, N>::SIZE {
            return Err(SnapshotError::UnknownSquare(key.clone()));
        }
    }

    let mut grid = Grid::empty();
    for sq in Grid::<P, N>::squares() {
        let key = sq.to_text();
        let name = position.get(&key).ok_or_else(|| SnapshotError::MissingSquare(key.clone()))?;
        let piece = P::from_symbol(name).ok_or_else(|| SnapshotError::UnknownPiece {
            square: key.clone(),
            piece: name.clone(),
        })?;
        grid.set(sq, piece);
    }
    Ok(grid)
}

fn snapshot_of<B: SnapshotBoard>(board: &B, position: BTreeMap<String, String>, previous: Option<&B::Move>) -> Snapshot {
    Snapshot {
        position,
        player_to_move: board.player_to_move(),
        previous_move: previous.map(MoveText::to_text).unwrap_or_else(no_move),
        can_castle: None,
        capturing_piece: None,
        winner: board.winner(),
        requested_move: None,
    }
}

impl SnapshotBoard for ChessBoard {
    fn to_snapshot(&self, previous_move: Option<&Move>) -> Snapshot {
        let mut snapshot = snapshot_of(self, encode_position(&self.position), previous_move);
        snapshot.can_castle = Some(self.castling.clone());
        snapshot
    }

    fn from_snapshot(snapshot: &Snapshot) -> Result<Self, SnapshotError> {
        let position = decode_position(&snapshot.position)?;
        for player in [Player::White, Player::Black] {
            let kings = position.count(ChessPiece::new(player, PieceKind::King));
            if kings != 1 {
                return Err(SnapshotError::InvalidPosition(format!(
                    "expected one {player} king, found {kings}"
                )));
            }
        }
        let castling = snapshot.can_castle.clone().unwrap_or_default();
        let board = ChessBoard::new(position, snapshot.player_to_move, castling);

        // The side that just moved cannot have left its own king attacked
        let waiting = snapshot.player_to_move.other();
        if board.in_check(waiting) {
            return Err(SnapshotError::InvalidPosition(format!(
                "{waiting} king is in check but it is {} to move",
                snapshot.player_to_move
            )));
        }
        Ok(board)
    }
}

impl SnapshotBoard for DraughtsBoard {
    fn to_snapshot(&self, previous_move: Option<&Move>) -> Snapshot {
        let mut snapshot = snapshot_of(self, encode_position(&self.position), previous_move);
        snapshot.capturing_piece = self.capturing_piece.map(|sq| sq.to_text());
        snapshot
    }

    fn from_snapshot(snapshot: &Snapshot) -> Result<Self, SnapshotError> {
        let position = decode_position(&snapshot.position)?;
        let player = snapshot.player_to_move;
        let capturing = snapshot
            .capturing_piece
            .as_deref()
            .map(|text| chain_square(&position, player, text))
            .transpose()?;
        Ok(DraughtsBoard::new(position, player).with_capturing_piece(capturing))
    }
}

/// A chain square must hold a piece of the side to move that can still jump.
fn chain_square(position: &DraughtsPosition, player: Player, text: &str) -> Result<Square, SnapshotError> {
    let sq = Square::from_text(text)?;
    if sq.row >= DraughtsPosition::SIZE || sq.col >= DraughtsPosition::SIZE {
        return Err(SnapshotError::InvalidPosition(format!("capturing piece {text} is off the board")));
    }
    if position.owner_at(sq) != Some(player) {
        return Err(SnapshotError::InvalidPosition(format!(
            "capturing piece {text} is not a {player} piece"
        )));
    }
    if captures_from(position, sq, player).is_empty() {
        return Err(SnapshotError::InvalidPosition(format!(
            "capturing piece {text} has nothing to capture"
        )));
    }
    Ok(sq)
}

impl SnapshotBoard for TicTacToeBoard {
    fn to_snapshot(&self, previous_move: Option<&Square>) -> Snapshot {
        snapshot_of(self, encode_position(&self.position), previous_move)
    }

    fn from_snapshot(snapshot: &Snapshot) -> Result<Self, SnapshotError> {
        Ok(TicTacToeBoard::new(decode_position(&snapshot.position)?, snapshot.player_to_move))
    }
}

// =============================================================================
// Requests
// =============================================================================

/// Plays the best move for the side to move and returns the new snapshot.
///
/// Fails with [`GameError::NoLegalMoves`] on a finished game.
pub fn best_reply<B: SnapshotBoard>(snapshot: &Snapshot, depth: Option<u8>) -> Result<Snapshot, SnapshotError> {
    let board = B::from_snapshot(snapshot)?;
    let mut nodes = 0;
    let (mv, score) = pick_best_move(&board, depth, &mut nodes).ok_or(GameError::NoLegalMoves)?;
    debug!(%mv, score, nodes, "best reply");
    Ok(board.make_move(mv).to_snapshot(Some(&mv)))
}

/// Plays the snapshot's requested move if it is legal; otherwise the
/// snapshot comes back unchanged apart from the dropped request.
pub fn apply_requested<B: SnapshotBoard>(snapshot: &Snapshot) -> Result<Snapshot, SnapshotError> {
    let text = snapshot.requested_move.as_deref().ok_or(SnapshotError::MissingMove)?;
    let mv = B::Move::from_text(text)?;
    let board = B::from_snapshot(snapshot)?;

    if board.legal_moves().contains(&mv) {
        return Ok(board.make_move(mv).to_snapshot(Some(&mv)));
    }

    warn!(requested = text, "move is not legal, returning the original position");
    let mut echo = board.to_snapshot(None);
    echo.previous_move = snapshot.previous_move.clone();
    Ok(echo)
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod snapshot_tests;
