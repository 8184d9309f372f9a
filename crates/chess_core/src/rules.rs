//! The rules contract the AI engine is written against.
//!
//! Anything that can enumerate legal moves, apply and revert them in LIFO
//! order, and report terminal states can be searched. [`crate::Position`] is
//! the production binding; tests plug in scripted game trees.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::error::Result;
use crate::types::{Piece, Side, Square};

/// A move produced by a [`Rules`] implementation.
pub trait ChessMove: Clone + PartialEq + fmt::Debug + fmt::Display {
    /// Destination square. Castling reports the king's destination.
    fn to_square(&self) -> Square;
}

/// Legal-move enumeration and in-place apply/undo over one game state.
pub trait Rules {
    type Move: ChessMove;

    /// All legal moves for the side to move, in a stable enumeration order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Applies `mv` in place and passes the turn.
    fn make_move(&mut self, mv: &Self::Move) -> Result<()>;

    /// Reverts the most recent `make_move`. Calls must mirror applies in
    /// strict LIFO order.
    ///
    /// An undo with no matching apply is a caller bug. Implementations may
    /// panic in debug builds and ignore it in release builds.
    fn unmake_move(&mut self, mv: &Self::Move);

    fn is_game_over(&self) -> bool;
    fn is_checkmate(&self) -> bool;
    fn is_stalemate(&self) -> bool;
    fn is_insufficient_material(&self) -> bool;

    /// Whether `mv` captures an opponent piece in the current state.
    fn is_capture(&self, mv: &Self::Move) -> bool;

    /// Every occupied square with the piece standing on it.
    fn piece_map(&self) -> Vec<(Square, Piece)>;

    fn side_to_move(&self) -> Side;

    /// Applies `mv` and returns a guard that reverts it when dropped.
    fn apply_scoped(&mut self, mv: &Self::Move) -> Result<AppliedMove<'_, Self>>
    where
        Self: Sized,
    {
        AppliedMove::new(self, mv)
    }
}

/// A move applied to a position for the lifetime of the guard.
///
/// The move is undone on drop, so early returns through `?` and panics
/// unwinding out of a recursive search still leave the position as it was.
pub struct AppliedMove<'a, R: Rules> {
    position: &'a mut R,
    mv: R::Move,
}

impl<'a, R: Rules> AppliedMove<'a, R> {
    pub fn new(position: &'a mut R, mv: &R::Move) -> Result<Self> {
        position.make_move(mv)?;
        Ok(Self {
            position,
            mv: mv.clone(),
        })
    }

    pub fn applied(&self) -> &R::Move {
        &self.mv
    }
}

impl<R: Rules> Deref for AppliedMove<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.position
    }
}

impl<R: Rules> DerefMut for AppliedMove<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.position
    }
}

impl<R: Rules> Drop for AppliedMove<'_, R> {
    fn drop(&mut self) {
        self.position.unmake_move(&self.mv);
    }
}
