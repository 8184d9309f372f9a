//! Tournament CLI
//!
//! Play AI difficulties against each other and report the results.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use tournament::{
    EngineSpec, MatchConfig, MatchRunner, TournamentConfig, TournamentResults,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tournament", version, about = "Czess AI tournament runner")]
struct Cli {
    /// TOML file with a name, participants and a [match] table
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play two engines against each other, e.g. `match deep hard:relative`
    Match {
        engine1: EngineSpec,
        engine2: EngineSpec,
        #[command(flatten)]
        opts: MatchArgs,
    },
    /// Play one engine against every difficulty
    Gauntlet {
        challenger: EngineSpec,
        #[command(flatten)]
        opts: MatchArgs,
    },
    /// Play every pair of participants from the config (all difficulties by default)
    RoundRobin {
        #[command(flatten)]
        opts: MatchArgs,
    },
    /// Print the report of a saved results file
    Report { path: PathBuf },
}

#[derive(Args, Debug)]
struct MatchArgs {
    /// Number of games per match
    #[arg(short, long)]
    games: Option<u32>,
    /// Plies per game before adjudicating a draw
    #[arg(long)]
    max_moves: Option<u32>,
    /// Base seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,
    /// Start position instead of the initial position
    #[arg(long)]
    fen: Option<String>,
    /// Opening moves in UCI notation, comma separated
    #[arg(long, value_delimiter = ',')]
    opening: Vec<String>,
    /// Write results as JSON to this file
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Only print the final report
    #[arg(short, long)]
    quiet: bool,
}

impl MatchArgs {
    fn apply(&self, mut config: MatchConfig) -> MatchConfig {
        if let Some(games) = self.games {
            config.num_games = games;
        }
        if let Some(max_moves) = self.max_moves {
            config.max_moves = max_moves;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.fen.is_some() {
            config.start_fen = self.fen.clone();
        }
        if !self.opening.is_empty() {
            config.opening = self.opening.clone();
        }
        if self.quiet {
            config.verbose = false;
        }
        config
    }
}

fn run_pairs(
    name: &str,
    participants: Vec<EngineSpec>,
    pairs: &[(EngineSpec, EngineSpec)],
    config: MatchConfig,
    out: Option<&Path>,
) -> anyhow::Result<()> {
    let runner = MatchRunner::new(config.clone());
    let mut results = TournamentResults::new(name, participants, config);

    for (engine1, engine2) in pairs {
        println!("\n--- {} vs {} ---", engine1, engine2);
        let result = runner
            .run_match(engine1, engine2)
            .with_context(|| format!("match {engine1} vs {engine2} failed"))?;
        println!(
            "Result: {}-{}-{} (Score: {:.1}%)",
            result.wins,
            result.losses,
            result.draws,
            result.score() * 100.0
        );
        results.add_match(engine1, engine2, result);
    }

    println!();
    results.print_report();

    if let Some(path) = out {
        results
            .save(path)
            .with_context(|| format!("cannot save results to {}", path.display()))?;
        println!("Results written to {}", path.display());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let file_config = match &cli.config {
        Some(path) => TournamentConfig::load(path)
            .with_context(|| format!("cannot load config {}", path.display()))?,
        None => TournamentConfig::default(),
    };

    match cli.command {
        Command::Match {
            engine1,
            engine2,
            opts,
        } => {
            let config = opts.apply(file_config.games);
            println!("=== Match: {} vs {} ===", engine1, engine2);
            println!("Games: {}, Max moves: {}", config.num_games, config.max_moves);
            run_pairs(
                &format!("Match: {engine1} vs {engine2}"),
                vec![engine1, engine2],
                &[(engine1, engine2)],
                config,
                opts.out.as_deref(),
            )
        }
        Command::Gauntlet { challenger, opts } => {
            let config = opts.apply(file_config.games);
            let opponents: Vec<EngineSpec> = EngineSpec::all()
                .into_iter()
                .filter(|e| *e != challenger)
                .collect();
            println!("=== Gauntlet: {} vs all ===", challenger);
            let pairs: Vec<_> = opponents.iter().map(|o| (challenger, *o)).collect();
            let participants = std::iter::once(challenger).chain(opponents).collect();
            run_pairs(
                &format!("Gauntlet: {challenger}"),
                participants,
                &pairs,
                config,
                opts.out.as_deref(),
            )
        }
        Command::RoundRobin { opts } => {
            let config = opts.apply(file_config.games);
            let participants = if file_config.participants.is_empty() {
                EngineSpec::all()
            } else {
                file_config.participants
            };
            if participants.len() < 2 {
                bail!("a round robin needs at least two participants");
            }
            let mut pairs = Vec::new();
            for (i, a) in participants.iter().enumerate() {
                for b in &participants[i + 1..] {
                    pairs.push((*a, *b));
                }
            }
            run_pairs(
                &file_config.name,
                participants.clone(),
                &pairs,
                config,
                opts.out.as_deref(),
            )
        }
        Command::Report { path } => {
            let results = TournamentResults::load(&path)
                .with_context(|| format!("cannot read results from {}", path.display()))?;
            results.print_report();
            Ok(())
        }
    }
}
