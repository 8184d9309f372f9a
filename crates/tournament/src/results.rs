//! Game outcomes, match tallies and tournament storage

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::match_runner::{EngineSpec, MatchConfig};

/// Result of a single game from one player's point of view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }

    /// Result notation from White's point of view.
    pub fn notation(self) -> &'static str {
        match self {
            GameResult::Win => "1-0",
            GameResult::Loss => "0-1",
            GameResult::Draw => "1/2-1/2",
        }
    }
}

/// Why a game stopped
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoveRule,
    FivefoldRepetition,
    MoveLimit,
}

/// One finished game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameRecord {
    pub white: EngineSpec,
    pub black: EngineSpec,
    /// From White's point of view
    pub result: GameResult,
    pub termination: Termination,
    /// Moves chosen by the engines in UCI notation, opening excluded
    pub moves: Vec<String>,
    pub final_fen: String,
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    #[serde(default)]
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }
}

/// A single match entry in the tournament
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEntry {
    pub engine1: EngineSpec,
    pub engine2: EngineSpec,
    pub result: MatchResult,
}

/// Tournament configuration as read from TOML
///
/// ```toml
/// name = "nightly"
/// participants = ["easy", "medium", "hard", "deep"]
///
/// [match]
/// num_games = 4
/// max_moves = 120
/// seed = 7
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TournamentConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub participants: Vec<EngineSpec>,
    #[serde(default, rename = "match")]
    pub games: MatchConfig,
}

fn default_name() -> String {
    "Czess tournament".to_string()
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            participants: Vec::new(),
            games: MatchConfig::default(),
        }
    }
}

impl TournamentConfig {
    pub fn from_toml_str(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path)?;
        Self::from_toml_str(&src)
    }
}

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Participating engines
    pub participants: Vec<EngineSpec>,
    /// All match results
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: MatchConfig,
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<EngineSpec>, config: MatchConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    /// Add a match result
    pub fn add_match(&mut self, engine1: &EngineSpec, engine2: &EngineSpec, result: MatchResult) {
        self.matches.push(MatchEntry {
            engine1: *engine1,
            engine2: *engine2,
            result,
        });
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Points per participant over every match, highest first
    pub fn standings(&self) -> Vec<(EngineSpec, f64, u32)> {
        let mut table: Vec<(EngineSpec, f64, u32)> = self
            .participants
            .iter()
            .map(|p| (*p, 0.0, 0))
            .collect();

        let mut credit = |engine: &EngineSpec, points: f64, games: u32| {
            if let Some(row) = table.iter_mut().find(|(p, _, _)| p == engine) {
                row.1 += points;
                row.2 += games;
            }
        };
        for entry in &self.matches {
            let r = &entry.result;
            let games = r.total_games();
            let points1 = r.wins as f64 + 0.5 * r.draws as f64;
            credit(&entry.engine1, points1, games);
            credit(&entry.engine2, games as f64 - points1, games);
        }

        table.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        table
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        let names: Vec<String> = self.participants.iter().map(|p| p.to_string()).collect();
        report.push_str(&format!("Participants: {}\n", names.join(", ")));
        report.push_str(&format!(
            "Config: {} games/match, max {} moves\n\n",
            self.config.num_games, self.config.max_moves
        ));

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<20} vs {:<20} {:>5}-{:<5}-{:<5}\n",
            "Engine 1", "Engine 2", "W", "L", "D"
        ));
        report.push_str(&"-".repeat(60));
        report.push('\n');

        for entry in &self.matches {
            report.push_str(&format!(
                "{:<20} vs {:<20} {:>5}-{:<5}-{:<5}\n",
                entry.engine1.to_string(),
                entry.engine2.to_string(),
                entry.result.wins,
                entry.result.losses,
                entry.result.draws
            ));
        }

        report.push_str("\nStandings:\n");
        for (engine, points, games) in self.standings() {
            report.push_str(&format!(
                "{:<20} {:>6.1} / {:<4}\n",
                engine.to_string(),
                points,
                games
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
