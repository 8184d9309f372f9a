use ai_engine::AiError;
use chess_core::{ChessError, Side};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TournamentError {
    #[error(transparent)]
    Ai(#[from] AiError),

    #[error(transparent)]
    Chess(#[from] ChessError),

    #[error("{side} engine returned no move in a position with legal moves")]
    NoMove { side: Side },

    #[error("cannot parse engine '{spec}': {reason}")]
    BadEngine { spec: String, reason: String },

    #[error("invalid tournament config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("results file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TournamentError>;
