//! Computer opponent for Czess.
//!
//! An [`AiPlayer`] is configured once per game with a side and a
//! [`Difficulty`] and then asked for a move each time its side is to move:
//!
//! - `easy`: a uniformly random legal move
//! - `medium`: a random capture if any, else a random move into the centre
//! - `hard`: the best static evaluation one ply ahead, with small bonuses
//! - `deep`: minimax to [`SEARCH_DEPTH`] plies
//!
//! Positions are reached through the [`chess_core::Rules`] contract, so the
//! same code runs against the real board and against scripted game trees.

pub mod config;
pub mod difficulty;
pub mod error;
pub mod eval;
pub mod player;
pub mod recorder;
pub mod strategy;
pub mod worker;

use chess_core::Rules;

pub use config::AiConfig;
pub use difficulty::Difficulty;
pub use error::AiError;
pub use eval::{Evaluator, MateScoring, Score, MATE_SCORE};
pub use player::AiPlayer;
pub use recorder::{AiEvent, MemoryRecorder, NoopRecorder, Recorder, TracingRecorder};
pub use strategy::{GreedyTier, Minimax, SearchOutcome, SearchStats, SEARCH_DEPTH};
pub use worker::{think, Thought};

/// Anything that can pick a move for the side to move.
pub trait Engine<R: Rules> {
    fn select_move(&mut self, position: &mut R) -> Result<Option<R::Move>, AiError>;
}

impl<R: Rules> Engine<R> for AiPlayer {
    fn select_move(&mut self, position: &mut R) -> Result<Option<R::Move>, AiError> {
        AiPlayer::select_move(self, position)
    }
}
