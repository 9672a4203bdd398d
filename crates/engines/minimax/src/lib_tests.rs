use super::*;
use game_core::chess::{ChessPiece, ChessPosition};
use game_core::{ChessBoard, DraughtsBoard, Move, Player, Square, TicTacToeBoard};

#[test]
fn minimax_engine_returns_legal_move() {
    let mut engine = MinimaxEngine::new();
    let board = DraughtsBoard::startpos();

    let result = engine.search(&board, SearchLimits::depth(2));

    let mv = result.best_move.expect("opening position has moves");
    assert!(board.legal_moves().contains(&mv));
    assert_eq!(result.depth, Some(2));
    assert_eq!(result.nodes, engine.nodes());
    assert!(result.nodes > 7);
}

#[test]
fn minimax_engine_plays_mate_in_one() {
    let mut engine = MinimaxEngine::new();
    let position = ChessPosition::from_pieces([
        (Square::new(0, 6), ChessPiece::WhiteKing),
        (Square::new(0, 0), ChessPiece::WhiteRook),
        (Square::new(7, 6), ChessPiece::BlackKing),
        (Square::new(6, 5), ChessPiece::BlackPawn),
        (Square::new(6, 6), ChessPiece::BlackPawn),
        (Square::new(6, 7), ChessPiece::BlackPawn),
    ]);
    let board = ChessBoard::from_position(position, Player::White);

    let result = engine.search(&board, SearchLimits::depth(1));

    assert_eq!(result.best_move, Some(Move::from(((0, 0), (7, 0)))));
    assert_eq!(result.score, 1.0);
}

#[test]
fn minimax_engine_handles_finished_game() {
    let mut engine = MinimaxEngine::new();
    let mut board = TicTacToeBoard::startpos();
    for mv in ["a1", "a2", "b1", "b2", "c1"] {
        board = board.make_move(board.parse_move(mv).unwrap());
    }

    let result = engine.search(&board, SearchLimits::unbounded());

    assert!(result.best_move.is_none());
    assert_eq!(result.score, 0.0);
    assert_eq!(result.nodes, 0);
}
