use tracing::{debug, trace};

use crate::board::Board;
use crate::types::{Player, Score};

/// Scores `mv` played on `board` by plain minimax.
///
/// `depth` is the number of further plies to expand after `mv`; `None`
/// searches to the end of the game. Scores are always White-positive:
/// terminal positions score the winner's `top_score()`, exhausted depth
/// scores the static evaluation, and a side without moves scores 0.
/// Otherwise the replies are scored one ply shallower and combined with the
/// minimum when White made `mv`, the maximum when Black did.
pub fn minimax<B: Board>(board: &B, mv: B::Move, depth: Option<u8>, nodes: &mut u64) -> Score {
    *nodes += 1;
    let mover = board.player_to_move();
    let new_board = board.make_move(mv);

    if let Some(winner) = new_board.winner() {
        assert_eq!(
            winner, mover,
            "{winner} won after a move by {mover}; move generation is broken"
        );
        return winner.top_score();
    }

    if depth == Some(0) {
        return new_board.evaluation();
    }

    let moves = new_board.legal_moves();
    if moves.is_empty() {
        return 0.0;
    }

    let next = depth.map(|d| d - 1);
    let scores = moves
        .into_iter()
        .map(|reply| minimax(&new_board, reply, next, nodes));

    // Layer polarity follows the mover, also inside a draughts capture chain
    // where the mover keeps the turn.
    match mover {
        Player::White => scores.fold(Score::INFINITY, Score::min),
        Player::Black => scores.fold(Score::NEG_INFINITY, Score::max),
    }
}

/// Best legal move and its score, or `None` when the side to move has no
/// moves. White takes the highest score, Black the lowest; ties keep the
/// earliest move in generation order.
pub fn pick_best_move<B: Board>(
    board: &B,
    depth: Option<u8>,
    nodes: &mut u64,
) -> Option<(B::Move, Score)> {
    let moves = board.legal_moves();
    let player = board.player_to_move();

    let mut best: Option<(B::Move, Score)> = None;
    for mv in moves {
        let score = minimax(board, mv, depth, nodes);
        trace!(%mv, score, "scored move");
        let better = match best {
            None => true,
            Some((_, best_score)) => match player {
                Player::White => score > best_score,
                Player::Black => score < best_score,
            },
        };
        if better {
            best = Some((mv, score));
        }
    }

    if let Some((mv, score)) = best {
        debug!(%player, %mv, score, nodes = *nodes, ?depth, "best move");
    }
    best
}

/// Best move for the side to move.
///
/// # Panics
/// If the board has no legal moves; check `legal_moves()` or `game_over()`
/// first, or use [`pick_best_move`].
pub fn best_move<B: Board>(board: &B, depth: Option<u8>) -> B::Move {
    let mut nodes = 0;
    pick_best_move(board, depth, &mut nodes)
        .map(|(mv, _)| mv)
        .expect("best_move called on a board without legal moves")
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
