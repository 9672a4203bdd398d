use super::board::DraughtsPosition;
use crate::board::PieceCatalog;
use crate::types::{Player, Score};

/// (white - black) / (white + black) with kings counted double.
/// An empty board scores 0.
pub fn evaluate(pos: &DraughtsPosition) -> Score {
    let mut weight = [0u32; 2];
    for (_, pc) in pos.iter() {
        if let Some(owner) = pc.owner() {
            weight[owner.idx()] += pc.value();
        }
    }
    let white = weight[Player::White.idx()] as Score;
    let black = weight[Player::Black.idx()] as Score;
    if white + black == 0.0 {
        return 0.0;
    }
    (white - black) / (white + black)
}
