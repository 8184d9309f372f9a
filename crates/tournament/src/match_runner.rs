//! Match runner for playing games between AI difficulties

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use ai_engine::{AiPlayer, Difficulty, MateScoring, TracingRecorder};
use chess_core::{play_uci_moves, Position, Rules, Side};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, info};

use crate::error::{Result, TournamentError};
use crate::results::{GameRecord, GameResult, MatchResult, Termination};

/// One participant: a difficulty plus how it scores mates.
///
/// Written as `deep` or `deep:relative`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineSpec {
    pub difficulty: Difficulty,
    pub mate_scoring: MateScoring,
}

impl EngineSpec {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            mate_scoring: MateScoring::default(),
        }
    }

    /// Every difficulty with default mate scoring, weakest first.
    pub fn all() -> Vec<EngineSpec> {
        Difficulty::ALL.into_iter().map(EngineSpec::new).collect()
    }

    fn player(&self, side: Side, seed: Option<u64>) -> AiPlayer {
        let player = AiPlayer::new(side, self.difficulty)
            .with_mate_scoring(self.mate_scoring)
            .with_recorder(TracingRecorder);
        match seed {
            Some(seed) => player.with_seed(seed),
            None => player,
        }
    }
}

impl fmt::Display for EngineSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mate_scoring {
            MateScoring::Absolute => write!(f, "{}", self.difficulty),
            MateScoring::Relative => write!(f, "{}:relative", self.difficulty),
        }
    }
}

impl FromStr for EngineSpec {
    type Err = TournamentError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, scoring) = match s.split_once(':') {
            Some((name, scoring)) => (name, Some(scoring)),
            None => (s, None),
        };
        let difficulty: Difficulty = name.parse()?;
        let mate_scoring = match scoring.map(|m| m.trim().to_ascii_lowercase()) {
            None => MateScoring::Absolute,
            Some(m) if m == "absolute" => MateScoring::Absolute,
            Some(m) if m == "relative" => MateScoring::Relative,
            Some(other) => {
                return Err(TournamentError::BadEngine {
                    spec: s.to_string(),
                    reason: format!("unknown mate scoring '{other}'"),
                })
            }
        };
        Ok(Self {
            difficulty,
            mate_scoring,
        })
    }
}

impl Serialize for EngineSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EngineSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Plies per game before declaring a draw
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Starting position (None = standard start)
    pub start_fen: Option<String>,
    /// UCI moves played from the start position before the engines take over
    pub opening: Vec<String>,
    /// Base seed for the random difficulties (None = fresh entropy)
    pub seed: Option<u64>,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_moves: 200,
            alternate_colors: true,
            start_fen: None,
            opening: Vec::new(),
            seed: None,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Start position with the opening already played.
    pub fn start_position(&self) -> Result<Position> {
        let mut pos = match &self.start_fen {
            Some(fen) => Position::from_fen(fen)?,
            None => Position::startpos(),
        };
        play_uci_moves(&mut pos, &self.opening)?;
        Ok(pos)
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &EngineSpec, engine2: &EngineSpec) -> Result<MatchResult> {
        let mut result = MatchResult::new();
        let mut seeder = self.config.seed.map(StdRng::seed_from_u64);

        info!(%engine1, %engine2, games = self.config.num_games, "match started");

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;
            let seeds = seeder.as_mut().map(|rng| (rng.gen::<u64>(), rng.gen::<u64>()));

            let (white, black) = if engine1_white {
                (engine1, engine2)
            } else {
                (engine2, engine1)
            };
            let record = self.play_game(white, black, seeds)?;

            // Flip result when engine1 is black
            let game_result = if engine1_white {
                record.result
            } else {
                record.result.flipped()
            };
            result.record(game_result);

            if self.config.verbose {
                let color = if engine1_white { "W" } else { "B" };
                println!(
                    "Game {}/{}: {} ({}) {:?} after {} moves - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    record.result.notation(),
                    color,
                    record.termination,
                    record.moves.len(),
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
            result.games.push(record);
        }

        info!(
            %engine1,
            %engine2,
            wins = result.wins,
            losses = result.losses,
            draws = result.draws,
            "match finished"
        );
        Ok(result)
    }

    /// Play a single game, the record's result is from white's perspective
    pub fn play_game(
        &self,
        white: &EngineSpec,
        black: &EngineSpec,
        seeds: Option<(u64, u64)>,
    ) -> Result<GameRecord> {
        let mut pos = self.config.start_position()?;
        let mut players = [
            white.player(Side::Light, seeds.map(|s| s.0)),
            black.player(Side::Dark, seeds.map(|s| s.1)),
        ];
        let mut moves = Vec::new();
        let mut seen = HashMap::new();
        let mut occurrences = visit(&mut seen, &pos);

        let finish = |pos: &Position, moves: Vec<String>, result, termination| GameRecord {
            white: *white,
            black: *black,
            result,
            termination,
            moves,
            final_fen: pos.fen(),
        };

        for _ply in 0..self.config.max_moves {
            if let Some((result, termination)) = adjudicate(&pos, occurrences) {
                debug!(?termination, plies = moves.len(), "game over");
                return Ok(finish(&pos, moves, result, termination));
            }

            let side = pos.side_to_move();
            let mv = players[side.idx()]
                .select_move(&mut pos)?
                .ok_or(TournamentError::NoMove { side })?;
            pos.make_move(&mv)?;
            // Games are never rewound; drop the undo stack
            pos.commit();
            moves.push(mv.to_string());
            occurrences = visit(&mut seen, &pos);
        }

        // The last move may have ended the game on the final ply
        if let Some((result, termination)) = adjudicate(&pos, occurrences) {
            return Ok(finish(&pos, moves, result, termination));
        }

        // Max moves reached
        Ok(finish(&pos, moves, GameResult::Draw, Termination::MoveLimit))
    }
}

/// Counts one more occurrence of `pos` in the game and returns the total.
fn visit(seen: &mut HashMap<String, u32>, pos: &Position) -> u32 {
    let count = seen.entry(pos.repetition_key()).or_insert(0);
    *count += 1;
    *count
}

/// Terminal state of `pos`, with the result from white's perspective.
///
/// `occurrences` is how many times the current position has appeared in the
/// game, itself included. Only automatic endings are applied: the 75-move
/// rule and fivefold repetition, never the claimable 50-move or threefold
/// draws. Checkmate is checked first so a mate on the 150th half-move still
/// counts.
pub fn adjudicate(pos: &Position, occurrences: u32) -> Option<(GameResult, Termination)> {
    if pos.is_checkmate() {
        let result = match pos.side_to_move() {
            Side::Light => GameResult::Loss,
            Side::Dark => GameResult::Win,
        };
        return Some((result, Termination::Checkmate));
    }
    if pos.is_insufficient_material() {
        return Some((GameResult::Draw, Termination::InsufficientMaterial));
    }
    if pos.is_stalemate() {
        return Some((GameResult::Draw, Termination::Stalemate));
    }
    if pos.is_seventy_five_move_draw() {
        return Some((GameResult::Draw, Termination::SeventyFiveMoveRule));
    }
    if occurrences >= 5 {
        return Some((GameResult::Draw, Termination::FivefoldRepetition));
    }
    None
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
