//! Request flow as a front end drives it: start position, a human move,
//! then the engine's reply, all through JSON text.

use arena::{Snapshot, SnapshotBoard, SnapshotError, apply_requested, best_reply};
use game_core::{Board, ChessBoard, DraughtsBoard, Player, TicTacToeBoard};

fn with_move(json: &str, mv: &str) -> Snapshot {
    let mut snapshot = Snapshot::from_json(json).unwrap();
    snapshot.requested_move = Some(mv.to_string());
    snapshot
}

#[test]
fn test_chess_human_move_then_engine_reply() {
    let initial = ChessBoard::startpos().to_snapshot(None).to_json().unwrap();

    let after_human = apply_requested::<ChessBoard>(&with_move(&initial, "S06_S25")).unwrap();
    assert_eq!(after_human.player_to_move, Player::Black);
    assert_eq!(after_human.position["S25"], "WN");

    let after_engine = best_reply::<ChessBoard>(&after_human, Some(1)).unwrap();
    assert_eq!(after_engine.player_to_move, Player::White);
    assert_ne!(after_engine.previous_move, "none");

    // The reply decodes to a board where the engine's move was legal
    let before = ChessBoard::from_snapshot(&after_human).unwrap();
    let after = ChessBoard::from_snapshot(&after_engine).unwrap();
    assert!(
        before
            .legal_moves()
            .into_iter()
            .any(|mv| before.make_move(mv) == after)
    );
}

#[test]
fn test_castling_rights_travel_with_the_snapshot() {
    let mut b = ChessBoard::startpos();
    for mv in ["g1f3", "g8f6", "h1g1"] {
        b = b.make_move(b.parse_move(mv).unwrap());
    }
    let json = b.to_snapshot(None).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["can_castle"]["WKS"], false);
    assert_eq!(value["can_castle"]["WQS"], true);

    let decoded = ChessBoard::from_snapshot(&Snapshot::from_json(&json).unwrap()).unwrap();
    assert_eq!(decoded.castling, b.castling);
}

#[test]
fn test_snapshot_without_castling_field_defaults_to_full_rights() {
    let mut snapshot = ChessBoard::startpos().to_snapshot(None);
    snapshot.can_castle = None;
    let json = snapshot.to_json().unwrap();
    assert!(!json.contains("can_castle"));

    let decoded = ChessBoard::from_snapshot(&Snapshot::from_json(&json).unwrap()).unwrap();
    assert_eq!(decoded, ChessBoard::startpos());
}

#[test]
fn test_draughts_engine_reply_keeps_turn_during_chain() {
    let initial = DraughtsBoard::startpos().to_snapshot(None);
    let reply = best_reply::<DraughtsBoard>(&initial, Some(2)).unwrap();
    assert_eq!(reply.player_to_move, Player::Black);
    assert_eq!(reply.capturing_piece, None);
}

#[test]
fn test_tictactoe_game_played_through_snapshots() {
    let mut snapshot = TicTacToeBoard::startpos().to_snapshot(None);
    while snapshot.winner.is_none() {
        match best_reply::<TicTacToeBoard>(&snapshot, None) {
            Ok(next) => snapshot = next,
            Err(SnapshotError::Game(_)) => break,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    // Perfect play on both sides
    assert_eq!(snapshot.winner, None);
    assert!(snapshot.position.values().all(|mark| mark != "E"));
}
