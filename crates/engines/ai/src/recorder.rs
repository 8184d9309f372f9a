//! Observation hooks for AI decisions.
//!
//! A recorder sees every turn the player takes. It never influences the
//! chosen move.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chess_core::Side;
use tracing::{debug, info, warn};

use crate::difficulty::Difficulty;
use crate::eval::Score;
use crate::strategy::{GreedyTier, SearchStats};

#[derive(Clone, Debug, PartialEq)]
pub enum AiEvent {
    TurnStarted {
        side: Side,
        difficulty: Difficulty,
        legal_moves: usize,
    },
    NoLegalMoves {
        side: Side,
    },
    WrongSide {
        expected: Side,
        actual: Side,
    },
    MoveSelected {
        side: Side,
        difficulty: Difficulty,
        mv: String,
        score: Option<Score>,
        tier: Option<GreedyTier>,
        stats: Option<SearchStats>,
    },
}

pub trait Recorder: Send {
    fn record(&mut self, event: &AiEvent);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopRecorder;

impl Recorder for NoopRecorder {
    fn record(&mut self, _event: &AiEvent) {}
}

/// Forwards events to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingRecorder;

impl Recorder for TracingRecorder {
    fn record(&mut self, event: &AiEvent) {
        match event {
            AiEvent::TurnStarted {
                side,
                difficulty,
                legal_moves,
            } => debug!(%side, %difficulty, legal_moves, "AI turn started"),
            AiEvent::NoLegalMoves { side } => info!(%side, "AI has no legal moves"),
            AiEvent::WrongSide { expected, actual } => {
                warn!(%expected, %actual, "AI asked to move out of turn")
            }
            AiEvent::MoveSelected {
                side,
                difficulty,
                mv,
                score,
                tier,
                stats,
            } => info!(
                %side,
                %difficulty,
                mv = %mv,
                score = ?score,
                tier = ?tier,
                nodes = stats.map(|s| s.nodes),
                "AI selected move"
            ),
        }
    }
}

/// Keeps events in memory. Clones share the same buffer.
#[derive(Clone, Debug, Default)]
pub struct MemoryRecorder {
    events: Arc<Mutex<Vec<AiEvent>>>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AiEvent> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<AiEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Recorder for MemoryRecorder {
    fn record(&mut self, event: &AiEvent) {
        self.lock().push(event.clone());
    }
}
