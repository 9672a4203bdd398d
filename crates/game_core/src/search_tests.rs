use super::*;
use crate::chess::{ChessBoard, ChessPiece, ChessPosition};
use crate::draughts::{DraughtsBoard, DraughtsPiece, DraughtsPosition};
use crate::tictactoe::{Mark, TicTacToeBoard, TicTacToePosition};
use crate::types::{Move, Square};

fn ttt(marks: &[((u8, u8), Mark)], player: Player) -> TicTacToeBoard {
    TicTacToeBoard::new(
        TicTacToePosition::from_pieces(marks.iter().map(|&(sq, m)| (sq.into(), m))),
        player,
    )
}

#[test]
fn test_takes_immediate_win() {
    use Mark::*;
    // W W . / B B . / . . .
    let b = ttt(
        &[((0, 0), White), ((0, 1), White), ((1, 0), Black), ((1, 1), Black)],
        Player::White,
    );
    let mut nodes = 0;
    let (mv, score) = pick_best_move(&b, None, &mut nodes).unwrap();
    assert_eq!(mv, Square::new(0, 2));
    assert_eq!(score, 1.0);
    assert!(nodes > 0);
}

#[test]
fn test_black_blocks_or_wins() {
    use Mark::*;
    // W W . / . B . / . . .  with Black to move: only c1 avoids losing
    let b = ttt(
        &[((0, 0), White), ((0, 1), White), ((1, 1), Black)],
        Player::Black,
    );
    assert_eq!(best_move(&b, None), Square::new(0, 2));
}

#[test]
fn test_full_game_tree_is_a_draw_and_ties_keep_first_move() {
    let b = TicTacToeBoard::startpos();
    let mut nodes = 0;
    let (mv, score) = pick_best_move(&b, None, &mut nodes).unwrap();
    assert_eq!(score, 0.0);
    assert_eq!(mv, Square::new(0, 0));
    assert_eq!(nodes, 549_945);
}

#[test]
fn test_depth_zero_uses_static_evaluation() {
    use ChessPiece::*;
    let position = ChessPosition::from_pieces([
        (Square::new(0, 6), WhiteKing),
        (Square::new(3, 3), WhiteQueen),
        (Square::new(7, 6), BlackKing),
        (Square::new(6, 3), BlackRook),
    ]);
    let b = ChessBoard::from_position(position, Player::White);
    let capture = Move::from(((3, 3), (6, 3)));
    let mut nodes = 0;
    // Only kings and the queen are left after the capture
    assert_eq!(minimax(&b, capture, Some(0), &mut nodes), 1.0);
    assert_eq!(nodes, 1);
    assert_eq!(best_move(&b, Some(0)), capture);
}

#[test]
fn test_finds_back_rank_mate() {
    use ChessPiece::*;
    let position = ChessPosition::from_pieces([
        (Square::new(0, 6), WhiteKing),
        (Square::new(0, 0), WhiteRook),
        (Square::new(7, 6), BlackKing),
        (Square::new(6, 5), BlackPawn),
        (Square::new(6, 6), BlackPawn),
        (Square::new(6, 7), BlackPawn),
    ]);
    let b = ChessBoard::from_position(position, Player::White);
    let mate = Move::from(((0, 0), (7, 0)));
    let mut nodes = 0;
    assert_eq!(minimax(&b, mate, Some(0), &mut nodes), 1.0);
    assert_eq!(best_move(&b, Some(0)), mate);
}

#[test]
fn test_black_minimises() {
    use ChessPiece::*;
    let position = ChessPosition::from_pieces([
        (Square::new(0, 6), WhiteKing),
        (Square::new(1, 3), WhiteRook),
        (Square::new(7, 6), BlackKing),
        (Square::new(4, 3), BlackQueen),
    ]);
    let b = ChessBoard::from_position(position, Player::Black);
    // Queen takes the rook on d2
    assert_eq!(best_move(&b, Some(0)), Move::from(((4, 3), (1, 3))));
}

#[test]
fn test_draughts_prefers_the_double_jump() {
    use DraughtsPiece::*;
    let position = DraughtsPosition::from_pieces([
        (Square::new(2, 2), WhiteMan),
        (Square::new(3, 3), BlackMan),
        (Square::new(5, 5), BlackMan),
        (Square::new(0, 4), WhiteMan),
        (Square::new(1, 5), BlackMan),
    ]);
    let b = DraughtsBoard::new(position, Player::White);
    let mut nodes = 0;
    let (mv, score) = pick_best_move(&b, Some(1), &mut nodes).unwrap();
    assert_eq!(mv, Move::from(((2, 2), (4, 4))));
    assert!((score - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_capture_chain_layer_follows_the_mover() {
    use DraughtsPiece::*;
    let position = DraughtsPosition::from_pieces([
        (Square::new(2, 2), WhiteMan),
        (Square::new(3, 3), BlackMan),
        (Square::new(5, 5), BlackKing),
        (Square::new(5, 3), BlackMan),
        (Square::new(7, 0), BlackMan),
    ]);
    let b = DraughtsBoard::new(position, Player::White);
    let first_jump = Move::from(((2, 2), (4, 4)));

    // White keeps the turn with two ways on: over the king (-1/3) or over
    // the man on d6 (-1/2). The layer White made is still a min layer.
    let after = b.make_move(first_jump);
    assert_eq!(after.player_to_move, Player::White);
    assert_eq!(after.legal_moves().len(), 2);

    let mut nodes = 0;
    let score = minimax(&b, first_jump, Some(1), &mut nodes);
    assert!((score + 0.5).abs() < 1e-12, "got {score}");
    assert_eq!(nodes, 3);
}

#[test]
fn test_search_leaves_board_untouched() {
    let b = ChessBoard::startpos();
    let before = b.clone();
    let mut nodes = 0;
    assert!(pick_best_move(&b, Some(1), &mut nodes).is_some());
    assert_eq!(b, before);
}

#[test]
fn test_no_move_on_finished_board() {
    use Mark::*;
    let b = ttt(
        &[((0, 0), White), ((0, 1), White), ((0, 2), White), ((1, 0), Black), ((1, 1), Black)],
        Player::Black,
    );
    let mut nodes = 0;
    assert!(pick_best_move(&b, Some(3), &mut nodes).is_none());
    assert_eq!(nodes, 0);
}

#[test]
#[should_panic(expected = "without legal moves")]
fn test_best_move_requires_legal_moves() {
    use Mark::*;
    let b = ttt(
        &[((0, 0), White), ((0, 1), White), ((0, 2), White), ((1, 0), Black), ((1, 1), Black)],
        Player::Black,
    );
    best_move(&b, None);
}
