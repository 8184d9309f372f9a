//! Tournament runner for Czess AI difficulties
//!
//! This crate plays whole games between [`ai_engine::AiPlayer`]s headlessly:
//! - Running matches between two difficulties with alternating colours
//! - Detecting checkmate, stalemate, insufficient material, the 75-move rule
//!   and fivefold repetition
//! - Saving results as JSON and printing text reports
//!
//! # Usage
//!
//! ```bash
//! # Ten games of minimax against the one-ply player
//! cargo run -p tournament -- match deep hard --games 10
//!
//! # Relative mate scoring against every difficulty
//! cargo run -p tournament -- gauntlet deep:relative --games 4
//! ```

mod error;
mod match_runner;
mod results;

pub use error::{Result, TournamentError};
pub use match_runner::*;
pub use results::*;
