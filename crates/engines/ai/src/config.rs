use std::path::Path;

use chess_core::Side;
use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;
use crate::error::AiError;
use crate::eval::MateScoring;

/// Settings for one AI player, usually read from a TOML table:
///
/// ```toml
/// side = "dark"
/// difficulty = "deep"
/// mate_scoring = "relative"   # optional, defaults to "absolute"
/// seed = 42                   # optional
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AiConfig {
    pub side: Side,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub mate_scoring: MateScoring,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl AiConfig {
    pub fn new(side: Side, difficulty: Difficulty) -> Self {
        Self {
            side,
            difficulty,
            mate_scoring: MateScoring::default(),
            seed: None,
        }
    }

    pub fn from_toml_str(src: &str) -> Result<Self, AiError> {
        Ok(toml::from_str(src)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AiError> {
        let src = std::fs::read_to_string(path)?;
        Self::from_toml_str(&src)
    }
}
