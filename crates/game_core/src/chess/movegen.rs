use super::board::{CASTLE_ROUTES, ChessBoard, ChessPosition};
use super::piece::{ChessPiece, PieceKind};
use crate::board::{Board, PieceCatalog};
use crate::types::{Move, Player, Square};

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
const STRAIGHTS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, -2),
    (-1, 2),
];
const KING_STEPS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// Legal moves for the side to move: pseudo-legal moves that do not leave
/// the mover's king capturable.
pub fn legal_moves(board: &ChessBoard) -> Vec<Move> {
    let mut out = pseudo_moves(board, board.player_to_move);
    out.retain(|&mv| !exposes_king(board, mv));
    out
}

/// Plays `mv` on a trial board and checks whether any opponent reply lands
/// on the mover's king.
pub fn exposes_king(board: &ChessBoard, mv: Move) -> bool {
    let mover = board.player_to_move;
    let trial = board.make_move(mv);
    attacks(&trial, mover.other(), trial.king_square(mover))
}

pub fn in_check(board: &ChessBoard, player: Player) -> bool {
    attacks(board, player.other(), board.king_square(player))
}

fn attacks(board: &ChessBoard, by: Player, target: Square) -> bool {
    pseudo_moves(board, by).iter().any(|mv| mv.to == target)
}

/// Geometry- and occupancy-valid moves for `player`, square order first,
/// then direction order. King safety is not considered.
pub fn pseudo_moves(board: &ChessBoard, player: Player) -> Vec<Move> {
    let pos = &board.position;
    let mut out = Vec::with_capacity(64);
    for (from, pc) in pos.pieces_of(player) {
        let Some(kind) = pc.kind() else { continue };
        match kind {
            PieceKind::Pawn => gen_pawn(pos, from, player, &mut out),
            PieceKind::Knight => gen_steps(pos, from, player, &KNIGHT_JUMPS, &mut out),
            PieceKind::Bishop => gen_slider(pos, from, player, &DIAGONALS, &mut out),
            PieceKind::Rook => gen_slider(pos, from, player, &STRAIGHTS, &mut out),
            PieceKind::Queen => {
                gen_slider(pos, from, player, &DIAGONALS, &mut out);
                gen_slider(pos, from, player, &STRAIGHTS, &mut out);
            }
            PieceKind::King => {
                gen_steps(pos, from, player, &KING_STEPS, &mut out);
                gen_castle(board, from, player, &mut out);
            }
        }
    }
    out
}

fn gen_pawn(pos: &ChessPosition, from: Square, c: Player, out: &mut Vec<Move>) {
    let (dir, start_row): (i8, u8) = match c {
        Player::White => (1, 1),
        Player::Black => (-1, 6),
    };

    // forward 1, then 2 from the home rank through an empty square
    if let Some(to) = ChessPosition::offset(from, dir, 0)
        && pos.get(to).is_empty()
    {
        out.push(Move::new(from, to));
        if from.row == start_row
            && let Some(to2) = ChessPosition::offset(from, 2 * dir, 0)
            && pos.get(to2).is_empty()
        {
            out.push(Move::new(from, to2));
        }
    }

    // captures
    for dc in [1, -1] {
        if let Some(to) = ChessPosition::offset(from, dir, dc)
            && pos.owner_at(to) == Some(c.other())
        {
            out.push(Move::new(from, to));
        }
    }
}

fn gen_steps(pos: &ChessPosition, from: Square, c: Player, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in deltas {
        if let Some(to) = ChessPosition::offset(from, dr, dc)
            && pos.owner_at(to) != Some(c)
        {
            out.push(Move::new(from, to));
        }
    }
}

fn gen_slider(pos: &ChessPosition, from: Square, c: Player, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(to) = ChessPosition::offset(cur, dr, dc) {
            match pos.owner_at(to) {
                None => out.push(Move::new(from, to)),
                Some(owner) if owner != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            cur = to;
        }
    }
}

/// Two-file king move when the wing's right is intact, its rook is home and
/// the squares between are empty. Attacked transit squares are not checked.
fn gen_castle(board: &ChessBoard, from: Square, c: Player, out: &mut Vec<Move>) {
    let pos = &board.position;
    let rook = ChessPiece::new(c, PieceKind::Rook);
    for route in CASTLE_ROUTES.iter().filter(|r| r.player == c) {
        if from == route.king_from
            && board.castling.get(c, route.wing)
            && pos.get(route.rook_from) == rook
            && route.between.iter().all(|&sq| pos.get(sq).is_empty())
        {
            out.push(Move::new(route.king_from, route.king_to));
        }
    }
}
