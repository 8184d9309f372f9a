use crate::{error::Result, rules::Rules};

/// Pure perft node count.
/// Counts all legal move sequences of exactly `depth` plies by walking the
/// tree with apply/undo, which also exercises the undo stack of `pos`.
pub fn perft<R: Rules>(pos: &mut R, depth: u8) -> Result<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let mut nodes = 0u64;
    for mv in pos.legal_moves() {
        if depth == 1 {
            nodes += 1;
            continue;
        }
        let mut child = pos.apply_scoped(&mv)?;
        nodes += perft(&mut *child, depth - 1)?;
    }
    Ok(nodes)
}
