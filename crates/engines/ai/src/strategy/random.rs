use chess_core::Rules;
use rand::{seq::SliceRandom, Rng};

/// Picks one legal move uniformly at random.
pub fn random_move<R, G>(pos: &R, rng: &mut G) -> Option<R::Move>
where
    R: Rules,
    G: Rng + ?Sized,
{
    pos.legal_moves().choose(rng).cloned()
}
