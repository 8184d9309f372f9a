//! Capture-first heuristic with no lookahead.

use chess_core::{is_center, ChessMove, Rules};
use rand::{seq::SliceRandom, Rng};
use serde::Serialize;

/// Which preference bucket the chosen move came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GreedyTier {
    Capture,
    Center,
    Any,
}

/// Prefers captures, then moves landing on d4/e4/d5/e5, then anything.
/// Within a tier the pick is uniform.
pub fn greedy_move<R, G>(pos: &R, rng: &mut G) -> Option<(R::Move, GreedyTier)>
where
    R: Rules,
    G: Rng + ?Sized,
{
    let moves = pos.legal_moves();

    let captures: Vec<&R::Move> = moves.iter().filter(|mv| pos.is_capture(mv)).collect();
    if let Some(mv) = captures.choose(rng) {
        return Some(((*mv).clone(), GreedyTier::Capture));
    }

    let central: Vec<&R::Move> = moves
        .iter()
        .filter(|mv| is_center(mv.to_square()))
        .collect();
    if let Some(mv) = central.choose(rng) {
        return Some(((*mv).clone(), GreedyTier::Center));
    }

    moves.choose(rng).cloned().map(|mv| (mv, GreedyTier::Any))
}
