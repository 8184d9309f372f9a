//! Best-of-one-ply: evaluate every reply-free child and keep the best.

use chess_core::{is_center, ChessMove, Result, Rules};

use crate::eval::{Evaluator, Score};

pub const CAPTURE_BONUS: Score = 5;
pub const CENTER_BONUS: Score = 3;

/// Heuristic bonus for `mv`, judged in the position before it is played.
/// A capture earns the capture bonus alone, even when it lands centrally.
pub fn move_bonus<R: Rules>(pos: &R, mv: &R::Move) -> Score {
    if pos.is_capture(mv) {
        CAPTURE_BONUS
    } else if is_center(mv.to_square()) {
        CENTER_BONUS
    } else {
        0
    }
}

/// Returns the move maximizing `evaluate(child) + move_bonus` and its score.
/// Ties keep the earliest move in enumeration order.
pub fn best_of_one_ply<R: Rules>(
    pos: &mut R,
    evaluator: &Evaluator,
) -> Result<Option<(R::Move, Score)>> {
    let mut best: Option<(R::Move, Score)> = None;

    for mv in pos.legal_moves() {
        let bonus = move_bonus(pos, &mv);
        let score = {
            let child = pos.apply_scoped(&mv)?;
            evaluator.evaluate(&*child)
        } + bonus;

        if best.as_ref().map_or(true, |(_, s)| score > *s) {
            best = Some((mv, score));
        }
    }

    Ok(best)
}
