//! Runs a move selection off the async executor.
//!
//! Search is CPU bound and may take a while at the deep level, so callers on
//! a tokio runtime hand the player and a private copy of the position to a
//! blocking thread and get both back with the result.

use chess_core::Rules;
use tracing::error;

use crate::error::AiError;
use crate::player::AiPlayer;

/// What a background search hands back.
#[derive(Debug)]
pub struct Thought<R: Rules> {
    pub player: AiPlayer,
    pub position: R,
    pub best_move: Option<R::Move>,
}

pub async fn think<R>(mut player: AiPlayer, mut position: R) -> Result<Thought<R>, AiError>
where
    R: Rules + Send + 'static,
    R::Move: Send + 'static,
{
    let (player, position, result) = tokio::task::spawn_blocking(move || {
        let result = player.select_move(&mut position);
        (player, position, result)
    })
    .await
    .map_err(|e| {
        error!("AI worker task failed: {e}");
        AiError::Worker(e.to_string())
    })?;

    Ok(Thought {
        player,
        position,
        best_move: result?,
    })
}
