//! Error types for chess_core

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("illegal position '{fen}': {reason}")]
    IllegalPosition { fen: String, reason: String },

    #[error("illegal move {mv}: {reason}")]
    IllegalMove { mv: String, reason: String },

    #[error("unknown move '{0}' in this position")]
    UnknownMove(String),
}

pub type Result<T> = std::result::Result<T, ChessError>;
