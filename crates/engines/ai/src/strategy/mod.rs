//! Move-selection strategies, one per difficulty.
//!
//! Every strategy reads the position through [`chess_core::Rules`]; the
//! search-based ones apply and undo moves in place and hand the position
//! back unchanged.

pub mod greedy;
pub mod minimax;
pub mod one_ply;
pub mod random;

pub use greedy::{greedy_move, GreedyTier};
pub use minimax::{Minimax, SearchOutcome, SearchStats, SEARCH_DEPTH};
pub use one_ply::{best_of_one_ply, move_bonus, CAPTURE_BONUS, CENTER_BONUS};
pub use random::random_move;
