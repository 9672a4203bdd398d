use rayon::prelude::*;

use game_core::{Board, ChessBoard, DraughtsBoard, TicTacToeBoard, divide, perft};

const FULL_PERFT_ENV: &str = "FULL_PERFT";

/// Subtree counts summed in parallel, one task per root move.
fn parallel_perft<B: Board>(board: &B, depth: u8) -> u64 {
    board
        .legal_moves()
        .par_iter()
        .map(|&mv| perft(&board.make_move(mv), depth - 1))
        .sum()
}

#[test]
fn test_chess_startpos_perft_shallow() {
    // No en passant, castling or promotion can occur this early, so the
    // standard counts apply.
    let b = ChessBoard::startpos();
    assert_eq!(perft(&b, 1), 20);
    assert_eq!(perft(&b, 2), 400);
    assert_eq!(parallel_perft(&b, 3), 8_902);
}

#[test]
fn test_chess_startpos_perft_deep() {
    if std::env::var(FULL_PERFT_ENV).is_err() {
        eprintln!("skipping depth-4 perft; set {FULL_PERFT_ENV}=1 to run it");
        return;
    }
    let b = ChessBoard::startpos();
    assert_eq!(parallel_perft(&b, 4), 197_281);
}

#[test]
fn test_divide_sums_to_perft() {
    let b = ChessBoard::startpos();
    let split = divide(&b, 2);
    assert_eq!(split.len(), 20);
    assert!(split.iter().all(|&(_, n)| n == 20));
    assert_eq!(split.iter().map(|&(_, n)| n).sum::<u64>(), perft(&b, 2));
}

#[test]
fn test_draughts_opening_perft() {
    // Every opening move leaves Black seven replies
    let b = DraughtsBoard::startpos();
    assert_eq!(perft(&b, 1), 7);
    assert_eq!(perft(&b, 2), 49);
}

#[test]
fn test_tictactoe_game_count() {
    // Distinct finished games of tic-tac-toe
    fn games(b: &TicTacToeBoard) -> u64 {
        let moves = b.legal_moves();
        if moves.is_empty() {
            return 1;
        }
        moves.iter().map(|&mv| games(&b.make_move(mv))).sum()
    }
    assert_eq!(games(&TicTacToeBoard::startpos()), 255_168);
    assert_eq!(perft(&TicTacToeBoard::startpos(), 2), 72);
}
