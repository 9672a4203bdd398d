use crate::board::Board;

/// Pure perft node count.
/// Counts all legal move sequences from `board` down to `depth` plies.
pub fn perft<B: Board>(board: &B, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = board.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .into_iter()
        .map(|mv| perft(&board.make_move(mv), depth - 1))
        .sum()
}

/// Per-move subtree counts at `depth`, in generation order.
pub fn divide<B: Board>(board: &B, depth: u8) -> Vec<(B::Move, u64)> {
    assert!(depth > 0, "divide needs at least one ply");
    board
        .legal_moves()
        .into_iter()
        .map(|mv| (mv, perft(&board.make_move(mv), depth - 1)))
        .collect()
}
