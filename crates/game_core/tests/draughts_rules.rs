//! Rule-level tests for draughts
//!
//! - Mandatory capture
//! - Multi-capture chains
//! - Immutability of boards

use game_core::draughts::{DraughtsPiece, DraughtsPosition};
use game_core::{Board, DraughtsBoard, Move, Player, Square};

use DraughtsPiece::{BlackMan, WhiteMan};

fn m(from: (u8, u8), to: (u8, u8)) -> Move {
    Move::from((from, to))
}

fn board(pieces: &[((u8, u8), DraughtsPiece)]) -> DraughtsBoard {
    let position = DraughtsPosition::from_pieces(pieces.iter().map(|&(sq, p)| (sq.into(), p)));
    DraughtsBoard::new(position, Player::White)
}

fn sorted(mut moves: Vec<Move>) -> Vec<Move> {
    moves.sort_by_key(|mv| (mv.from, mv.to));
    moves
}

#[test]
fn test_simple_capture() {
    let b = board(&[((2, 2), WhiteMan), ((3, 3), BlackMan)]);
    let capture = m((2, 2), (4, 4));
    assert_eq!(b.legal_moves(), vec![capture]);

    let nb = b.make_move(capture);
    assert_eq!(nb.player_to_move, Player::Black);
    assert_eq!(nb.position.get(Square::new(3, 3)), DraughtsPiece::Empty);
}

#[test]
fn test_capture_suppresses_quiet_moves_elsewhere() {
    let b = board(&[
        ((2, 2), WhiteMan),
        ((3, 3), BlackMan),
        ((0, 6), WhiteMan),
        ((7, 0), BlackMan),
    ]);
    assert_eq!(b.legal_moves(), vec![m((2, 2), (4, 4))]);
}

#[test]
fn test_simple_multi_capture() {
    let b = board(&[((2, 2), WhiteMan), ((3, 3), BlackMan), ((5, 5), BlackMan)]);

    let first_capture = m((2, 2), (4, 4));
    assert_eq!(b.legal_moves(), vec![first_capture]);
    let nb = b.make_move(first_capture);
    assert_eq!(nb.player_to_move, Player::White);
    assert_eq!(nb.capturing_piece, Some(Square::new(4, 4)));

    let second_capture = m((4, 4), (6, 6));
    assert_eq!(nb.legal_moves(), vec![second_capture]);
    let nb2 = nb.make_move(second_capture);
    assert_eq!(nb2.player_to_move, Player::Black);
    assert_eq!(nb2.capturing_piece, None);
    assert_eq!(nb2.winner(), Some(Player::White));
}

#[test]
fn test_complex_multi_capture() {
    let b = board(&[
        ((2, 2), WhiteMan), // c3
        ((3, 3), BlackMan), // d4
        ((5, 5), BlackMan), // f6
        ((0, 4), WhiteMan), // e1
        ((1, 5), BlackMan), // f2
    ]);

    let capture11 = m((2, 2), (4, 4)); // c3-e5
    let capture12 = m((4, 4), (6, 6)); // e5-g7
    let capture2 = m((0, 4), (2, 6)); // e1-g3
    assert_eq!(sorted(b.legal_moves()), sorted(vec![capture11, capture2]));

    let nb = b.make_move(capture11);
    assert_eq!(nb.player_to_move, Player::White);
    // The unrelated capture on e1 waits until the chain is over
    assert_eq!(nb.legal_moves(), vec![capture12]);

    let nb2 = nb.make_move(capture12);
    assert_eq!(nb2.player_to_move, Player::Black);
}

#[test]
fn test_chain_can_continue_after_crowning() {
    // White man jumps onto the back row, is crowned and jumps back out
    let b = board(&[((5, 1), WhiteMan), ((6, 2), BlackMan), ((6, 4), BlackMan)]);
    let nb = b.make_move(m((5, 1), (7, 3)));
    assert_eq!(nb.position.get(Square::new(7, 3)), DraughtsPiece::WhiteKing);
    assert_eq!(nb.player_to_move, Player::White);
    assert_eq!(nb.legal_moves(), vec![m((7, 3), (5, 5))]);
}

#[test]
fn test_make_move_leaves_receiver_unchanged() {
    let b = DraughtsBoard::startpos();
    let before = b.clone();
    let mv = b.legal_moves()[0];
    let nb = b.make_move(mv);
    assert_eq!(b, before);
    assert_ne!(nb.position, before.position);
    assert_eq!(b.legal_moves(), before.legal_moves());
}

#[test]
fn test_game_over_matches_winner_or_no_moves() {
    let mut b = DraughtsBoard::startpos();
    for ply in 0..200 {
        let moves = b.legal_moves();
        assert_eq!(b.game_over(), b.winner().is_some() || moves.is_empty());
        if moves.is_empty() {
            break;
        }
        b = b.make_move(moves[(ply * 5 + 1) % moves.len()]);
    }
}
