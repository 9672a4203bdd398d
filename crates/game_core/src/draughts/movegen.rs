use super::board::{DraughtsBoard, DraughtsPosition};
use crate::board::PieceCatalog;
use crate::types::{Move, Player, Square};

/// Legal moves for the side to move.
///
/// Inside a capture chain only the chaining piece may move, and only by
/// capturing. Otherwise captures anywhere on the board suppress every quiet
/// move.
pub fn legal_moves(board: &DraughtsBoard) -> Vec<Move> {
    let pos = &board.position;
    let player = board.player_to_move;
    if let Some(from) = board.capturing_piece {
        return captures_from(pos, from, player);
    }

    let mut quiet = Vec::new();
    let mut captures = Vec::new();
    for (from, _) in pos.pieces_of(player) {
        gen_piece(pos, from, player, &mut quiet, &mut captures);
    }
    if captures.is_empty() { quiet } else { captures }
}

/// Jumps available to the piece on `from`.
pub fn captures_from(pos: &DraughtsPosition, from: Square, player: Player) -> Vec<Move> {
    let mut quiet = Vec::new();
    let mut captures = Vec::new();
    gen_piece(pos, from, player, &mut quiet, &mut captures);
    captures
}

fn gen_piece(
    pos: &DraughtsPosition,
    from: Square,
    player: Player,
    quiet: &mut Vec<Move>,
    captures: &mut Vec<Move>,
) {
    let piece = pos.get(from);
    if piece.owner() != Some(player) {
        return;
    }
    for &(dr, dc) in piece.directions() {
        let Some(step) = DraughtsPosition::offset(from, dr, dc) else {
            continue;
        };
        if pos.get(step).is_empty() {
            quiet.push(Move::new(from, step));
        } else if pos.owner_at(step) == Some(player.other())
            && let Some(landing) = DraughtsPosition::offset(step, dr, dc)
            && pos.get(landing).is_empty()
        {
            captures.push(Move::new(from, landing));
        }
    }
}

/// Square of the piece jumped by `mv`, if it is a two-step diagonal jump.
pub fn jumped_square(mv: Move) -> Option<Square> {
    let (dr, dc) = mv.delta();
    if dr.abs() == 2 && dc.abs() == 2 {
        Some(Square::new(
            (mv.from.row + mv.to.row) / 2,
            (mv.from.col + mv.to.col) / 2,
        ))
    } else {
        None
    }
}
