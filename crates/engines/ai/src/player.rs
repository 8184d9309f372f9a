use chess_core::{ChessMove, Rules, Side};
use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;

use crate::config::AiConfig;
use crate::difficulty::Difficulty;
use crate::error::AiError;
use crate::eval::{Evaluator, MateScoring, Score};
use crate::recorder::{AiEvent, NoopRecorder, Recorder};
use crate::strategy::{
    best_of_one_ply, greedy_move, random_move, GreedyTier, Minimax, SearchStats, SEARCH_DEPTH,
};

/// A computer opponent bound to one side for the length of a game.
pub struct AiPlayer {
    side: Side,
    difficulty: Difficulty,
    evaluator: Evaluator,
    rng: StdRng,
    recorder: Box<dyn Recorder>,
}

struct Decision<M> {
    mv: Option<M>,
    score: Option<Score>,
    tier: Option<GreedyTier>,
    stats: Option<SearchStats>,
}

impl<M> Decision<M> {
    fn plain(mv: Option<M>) -> Self {
        Self {
            mv,
            score: None,
            tier: None,
            stats: None,
        }
    }
}

impl AiPlayer {
    pub fn new(side: Side, difficulty: Difficulty) -> Self {
        Self {
            side,
            difficulty,
            evaluator: Evaluator::new(side, MateScoring::default()),
            rng: StdRng::from_entropy(),
            recorder: Box::new(NoopRecorder),
        }
    }

    pub fn from_config(config: &AiConfig) -> Self {
        let player = Self::new(config.side, config.difficulty).with_mate_scoring(config.mate_scoring);
        match config.seed {
            Some(seed) => player.with_seed(seed),
            None => player,
        }
    }

    /// Makes the random strategies reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_mate_scoring(mut self, mate_scoring: MateScoring) -> Self {
        self.evaluator = Evaluator::new(self.side, mate_scoring);
        self
    }

    pub fn with_recorder(mut self, recorder: impl Recorder + 'static) -> Self {
        self.recorder = Box::new(recorder);
        self
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Chooses a legal move for the side to move.
    ///
    /// Returns `Ok(None)` only when there are no legal moves. The position is
    /// handed back exactly as it came in. If a rules call fails mid-search
    /// the error is returned and the position should not be trusted.
    pub fn select_move<R: Rules>(&mut self, pos: &mut R) -> Result<Option<R::Move>, AiError> {
        let to_move = pos.side_to_move();
        if to_move != self.side {
            self.recorder.record(&AiEvent::WrongSide {
                expected: self.side,
                actual: to_move,
            });
            return Err(AiError::WrongSide {
                expected: self.side,
                actual: to_move,
            });
        }

        let legal_moves = pos.legal_moves().len();
        self.recorder.record(&AiEvent::TurnStarted {
            side: self.side,
            difficulty: self.difficulty,
            legal_moves,
        });
        if legal_moves == 0 {
            self.recorder.record(&AiEvent::NoLegalMoves { side: self.side });
            return Ok(None);
        }

        let decision = match self.difficulty {
            Difficulty::Easy => Decision::plain(random_move(pos, &mut self.rng)),
            Difficulty::Medium => match greedy_move(pos, &mut self.rng) {
                Some((mv, tier)) => Decision {
                    tier: Some(tier),
                    ..Decision::plain(Some(mv))
                },
                None => Decision::plain(None),
            },
            Difficulty::Hard => match best_of_one_ply(pos, &self.evaluator)? {
                Some((mv, score)) => Decision {
                    score: Some(score),
                    ..Decision::plain(Some(mv))
                },
                None => Decision::plain(None),
            },
            Difficulty::Deep => {
                let outcome = Minimax::new(&self.evaluator, SEARCH_DEPTH).search(pos)?;
                Decision {
                    mv: outcome.best_move,
                    score: Some(outcome.score),
                    tier: None,
                    stats: Some(outcome.stats),
                }
            }
        };

        if let Some(mv) = &decision.mv {
            debug!(side = %self.side, difficulty = %self.difficulty, mv = %mv, to = mv.to_square(), "move chosen");
            self.recorder.record(&AiEvent::MoveSelected {
                side: self.side,
                difficulty: self.difficulty,
                mv: mv.to_string(),
                score: decision.score,
                tier: decision.tier,
                stats: decision.stats,
            });
        }
        Ok(decision.mv)
    }
}

impl std::fmt::Debug for AiPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiPlayer")
            .field("side", &self.side)
            .field("difficulty", &self.difficulty)
            .field("mate_scoring", &self.evaluator.mate_scoring())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod player_tests;
