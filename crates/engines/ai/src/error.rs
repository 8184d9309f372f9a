use chess_core::{ChessError, Side};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("unknown difficulty '{0}' (expected easy, medium, hard or deep)")]
    UnknownDifficulty(String),

    #[error("AI plays {expected} but {actual} is to move")]
    WrongSide { expected: Side, actual: Side },

    #[error(transparent)]
    Rules(#[from] ChessError),

    #[error("invalid AI config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("cannot read AI config: {0}")]
    Io(#[from] std::io::Error),

    #[error("AI worker failed: {0}")]
    Worker(String),
}
