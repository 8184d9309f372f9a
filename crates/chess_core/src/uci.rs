use crate::{
    board::{Move, Position},
    error::{ChessError, Result},
    rules::Rules,
};

pub fn move_to_uci(mv: &Move) -> String {
    mv.to_string()
}

/// Resolves long algebraic text ("e2e4", "e7e8q", "e1g1") against the legal
/// moves of `pos`, so castling and en-passant come out with the right shape.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    let txt = txt.trim().to_ascii_lowercase();
    if txt.len() < 4 {
        return None;
    }
    pos.legal_moves()
        .into_iter()
        .find(|m| move_to_uci(m) == txt)
}

/// Plays a sequence of UCI moves onto `pos` and commits them.
pub fn play_uci_moves<S: AsRef<str>>(pos: &mut Position, moves: &[S]) -> Result<()> {
    for txt in moves {
        let txt = txt.as_ref();
        let mv = parse_uci_move(pos, txt).ok_or_else(|| ChessError::UnknownMove(txt.to_string()))?;
        pos.make_move(&mv)?;
    }
    pos.commit();
    Ok(())
}
