//! Static evaluation from a fixed side's point of view.
//!
//! Material uses whole-pawn units and the positional term is a per-piece
//! table indexed by rank only. Scores never flip with the side to move: the
//! evaluator always answers "how good is this for `perspective`".

use chess_core::{rank_of, Piece, PieceKind, Rules, Side, Square};
use serde::{Deserialize, Serialize};

pub type Score = i32;

/// Magnitude returned for a checkmated position.
pub const MATE_SCORE: Score = 10_000;

/// Material values indexed by `PieceKind::idx()`.
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [Score; 6] = [1, 3, 3, 5, 9, 0];

/// Rank bonuses indexed by `PieceKind::idx()` then rank 0..7.
const RANK_TABLES: [[Score; 8]; 6] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [-5, -4, -3, -3, -3, -3, -4, -5],
    [-4, -2, -1, -1, -1, -1, -2, -4],
    [-2, -1, 0, 0, 0, 0, -1, -2],
    [-1, 0, 0, 0, 0, 0, 0, -1],
    [0, 1, 1, 3, 3, 1, 1, 0],
];

/// How a checkmate on the board is scored.
///
/// `Absolute` scores a mate as +10000 whenever Dark is the mated side and
/// -10000 when Light is, whatever side the evaluator plays. An AI playing
/// Dark therefore steers towards getting itself mated. `Relative` scores a
/// mate as +10000 whenever the opponent of `perspective` is mated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MateScoring {
    #[default]
    Absolute,
    Relative,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluator {
    perspective: Side,
    mate_scoring: MateScoring,
}

impl Evaluator {
    pub fn new(perspective: Side, mate_scoring: MateScoring) -> Self {
        Self {
            perspective,
            mate_scoring,
        }
    }

    pub fn perspective(&self) -> Side {
        self.perspective
    }

    pub fn mate_scoring(&self) -> MateScoring {
        self.mate_scoring
    }

    /// Scores `pos` for `perspective`, independent of whose turn it is.
    pub fn evaluate<R: Rules>(&self, pos: &R) -> Score {
        if pos.is_checkmate() {
            return self.mate_score(pos.side_to_move());
        }
        if pos.is_stalemate() || pos.is_insufficient_material() {
            return 0;
        }

        let pieces = pos.piece_map();
        self.material(&pieces) + self.positional(&pieces)
    }

    /// Score of a position in which `mated` has been checkmated.
    pub fn mate_score(&self, mated: Side) -> Score {
        let favourable = match self.mate_scoring {
            MateScoring::Absolute => mated == Side::Dark,
            MateScoring::Relative => mated != self.perspective,
        };
        if favourable {
            MATE_SCORE
        } else {
            -MATE_SCORE
        }
    }

    pub fn material(&self, pieces: &[(Square, Piece)]) -> Score {
        pieces
            .iter()
            .map(|(_, pc)| self.sign(pc.side) * piece_value(pc.kind))
            .sum()
    }

    pub fn positional(&self, pieces: &[(Square, Piece)]) -> Score {
        pieces
            .iter()
            .map(|&(sq, pc)| self.sign(pc.side) * rank_bonus(pc.kind, sq))
            .sum()
    }

    #[inline]
    fn sign(&self, side: Side) -> Score {
        if side == self.perspective {
            1
        } else {
            -1
        }
    }
}

#[inline]
pub fn piece_value(kind: PieceKind) -> Score {
    PIECE_VALUES[kind.idx()]
}

/// Table value for a piece of `kind` standing on `sq`, looked up by rank.
#[inline]
pub fn rank_bonus(kind: PieceKind, sq: Square) -> Score {
    RANK_TABLES[kind.idx()][rank_of(sq) as usize]
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
