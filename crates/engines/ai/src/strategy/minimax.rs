//! Fixed-depth minimax without pruning.
//!
//! The root maximizes for the evaluator's perspective and plies alternate
//! from there, whatever side is actually to move at a node. Leaves are nodes
//! at depth zero or terminal positions below the root; the root itself is
//! always expanded while it has legal moves, so a move comes back whenever
//! one exists.

use chess_core::{Result, Rules};
use serde::Serialize;
use tracing::trace;

use crate::eval::{Evaluator, Score};

/// Lookahead used by the deep difficulty, in plies.
pub const SEARCH_DEPTH: u8 = 3;

/// Counters gathered during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Positions visited, root included.
    pub nodes: u64,
    /// Positions scored by the evaluator.
    pub leaves: u64,
    /// Deepest ply reached below the root.
    pub max_ply: u8,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome<M> {
    pub best_move: Option<M>,
    pub score: Score,
    pub stats: SearchStats,
}

pub struct Minimax<'e> {
    evaluator: &'e Evaluator,
    depth: u8,
    stats: SearchStats,
}

impl<'e> Minimax<'e> {
    pub fn new(evaluator: &'e Evaluator, depth: u8) -> Self {
        Self {
            evaluator,
            depth,
            stats: SearchStats::default(),
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn search<R: Rules>(mut self, pos: &mut R) -> Result<SearchOutcome<R::Move>> {
        let (best_move, score) = self.minimax(pos, self.depth, true, 0)?;
        trace!(
            depth = self.depth,
            nodes = self.stats.nodes,
            leaves = self.stats.leaves,
            score,
            "minimax finished"
        );
        Ok(SearchOutcome {
            best_move,
            score,
            stats: self.stats,
        })
    }

    fn minimax<R: Rules>(
        &mut self,
        pos: &mut R,
        depth: u8,
        maximizing: bool,
        ply: u8,
    ) -> Result<(Option<R::Move>, Score)> {
        self.stats.nodes += 1;
        self.stats.max_ply = self.stats.max_ply.max(ply);

        if depth == 0 || (ply > 0 && pos.is_game_over()) {
            return Ok((None, self.leaf(pos)));
        }

        let moves = pos.legal_moves();
        if moves.is_empty() {
            return Ok((None, self.leaf(pos)));
        }

        let mut best_move = None;
        let mut best_score = if maximizing { Score::MIN } else { Score::MAX };

        for mv in moves {
            let (_, score) = {
                let mut child = pos.apply_scoped(&mv)?;
                self.minimax(&mut *child, depth - 1, !maximizing, ply + 1)?
            };

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                best_move = Some(mv);
            }
        }

        Ok((best_move, best_score))
    }

    #[inline]
    fn leaf<R: Rules>(&mut self, pos: &R) -> Score {
        self.stats.leaves += 1;
        self.evaluator.evaluate(pos)
    }
}
