use super::board::ChessPosition;
use super::piece::PieceKind;
use crate::board::PieceCatalog;
use crate::types::{Player, Score};

/// Material balance from White's perspective, normalised to [-1, 1].
///
/// Kings are left out of the count; a board with nothing but kings scores 0.
pub fn evaluate(pos: &ChessPosition) -> Score {
    let mut material = [0u32; 2];
    for (_, pc) in pos.iter() {
        if let (Some(owner), Some(kind)) = (pc.owner(), pc.kind())
            && kind != PieceKind::King
        {
            material[owner.idx()] += pc.value();
        }
    }
    let white = material[Player::White.idx()] as Score;
    let black = material[Player::Black.idx()] as Score;
    if white + black == 0.0 {
        return 0.0;
    }
    (white - black) / (white + black)
}
