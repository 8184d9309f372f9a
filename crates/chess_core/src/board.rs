//! Standard chess position backed by `shakmaty`.
//!
//! `shakmaty` positions are persistent values, so undo is an explicit stack of
//! prior states: `make_move` pushes the current state and `unmake_move` pops it
//! back. A balanced apply/undo sequence restores the exact previous value.

use std::fmt;

use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, File, Role, Square as ShakSquare};
use shakmaty::Position as _;

use crate::error::{ChessError, Result};
use crate::rules::{ChessMove, Rules};
use crate::types::*;

pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A legal move in a [`Position`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move(shakmaty::Move);

impl Move {
    pub fn inner(&self) -> &shakmaty::Move {
        &self.0
    }

    pub fn from_square(&self) -> Option<Square> {
        self.0.from().map(to_index)
    }

    pub fn promotion(&self) -> Option<PieceKind> {
        self.0.promotion().map(kind_of)
    }
}

impl ChessMove for Move {
    fn to_square(&self) -> Square {
        match &self.0 {
            shakmaty::Move::Castle { king, rook } => to_index(castle_target(*king, *rook)),
            other => to_index(other.to()),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.0;
        let promo = match m.promotion() {
            Some(Role::Queen) => "q",
            Some(Role::Rook) => "r",
            Some(Role::Bishop) => "b",
            Some(Role::Knight) => "n",
            _ => "",
        };
        match m {
            shakmaty::Move::Castle { king, rook } => {
                write!(f, "{}{}", king, castle_target(*king, *rook))
            }
            shakmaty::Move::Put { role, to } => write!(f, "{}@{}", role.upper_char(), to),
            other => match other.from() {
                Some(from) => write!(f, "{}{}{}", from, other.to(), promo),
                None => write!(f, "{}{}", other.to(), promo),
            },
        }
    }
}

impl From<shakmaty::Move> for Move {
    fn from(m: shakmaty::Move) -> Self {
        Move(m)
    }
}

/// King destination for a castling move encoded as king-takes-rook.
fn castle_target(king: ShakSquare, rook: ShakSquare) -> ShakSquare {
    if rook.file() > king.file() {
        ShakSquare::from_coords(File::G, king.rank())
    } else {
        ShakSquare::from_coords(File::C, king.rank())
    }
}

fn to_index(s: ShakSquare) -> Square {
    s as u8
}

fn side_of(c: Color) -> Side {
    match c {
        Color::White => Side::Light,
        Color::Black => Side::Dark,
    }
}

fn kind_of(r: Role) -> PieceKind {
    match r {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

#[derive(Clone, Debug)]
pub struct Position {
    chess: Chess,
    history: Vec<Chess>,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn startpos() -> Self {
        Position {
            chess: Chess::default(),
            history: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        let parsed: Fen = fen.trim().parse().map_err(|e| ChessError::InvalidFen {
            fen: fen.to_string(),
            reason: format!("{e}"),
        })?;
        let chess: Chess =
            parsed
                .into_position(CastlingMode::Standard)
                .map_err(|e| ChessError::IllegalPosition {
                    fen: fen.to_string(),
                    reason: format!("{e}"),
                })?;
        Ok(Position {
            chess,
            history: Vec::new(),
        })
    }

    pub fn fen(&self) -> String {
        Fen::from_position(&self.chess, EnPassantMode::Legal).to_string()
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if sq >= 64 {
            return None;
        }
        self.chess
            .board()
            .piece_at(ShakSquare::new(u32::from(sq)))
            .map(|p| Piece::new(side_of(p.color), kind_of(p.role)))
    }

    pub fn in_check(&self) -> bool {
        self.chess.is_check()
    }

    /// Plies since the last capture or pawn move.
    pub fn halfmove_clock(&self) -> u32 {
        self.chess.halfmoves()
    }

    /// Automatic draw after 75 moves by each side without a capture or pawn
    /// move. The 50-move mark only allows a claim and is not checked here.
    pub fn is_seventy_five_move_draw(&self) -> bool {
        self.halfmove_clock() >= 150
    }

    /// FEN without the move counters: placement, turn, castling rights and
    /// legal en-passant square. Positions with equal keys are repetitions.
    pub fn repetition_key(&self) -> String {
        self.fen().split_whitespace().take(4).collect::<Vec<_>>().join(" ")
    }

    /// Number of moves currently applied and not yet undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Makes the current state the new base, dropping the undo stack.
    ///
    /// Game loops call this after committing a move so that the stack only
    /// ever holds search-time applies.
    pub fn commit(&mut self) {
        self.history.clear();
    }
}

impl Rules for Position {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        self.chess.legal_moves().into_iter().map(Move).collect()
    }

    fn make_move(&mut self, mv: &Move) -> Result<()> {
        let next = self
            .chess
            .clone()
            .play(mv.0.clone())
            .map_err(|e| ChessError::IllegalMove {
                mv: mv.to_string(),
                reason: format!("{e}"),
            })?;
        let prev = std::mem::replace(&mut self.chess, next);
        self.history.push(prev);
        Ok(())
    }

    fn unmake_move(&mut self, _mv: &Move) {
        let prev = self.history.pop();
        debug_assert!(prev.is_some(), "unmake_move without a matching make_move");
        if let Some(prev) = prev {
            self.chess = prev;
        }
    }

    fn is_game_over(&self) -> bool {
        self.chess.is_game_over()
    }

    fn is_checkmate(&self) -> bool {
        self.chess.is_checkmate()
    }

    fn is_stalemate(&self) -> bool {
        self.chess.is_stalemate()
    }

    fn is_insufficient_material(&self) -> bool {
        self.chess.is_insufficient_material()
    }

    fn is_capture(&self, mv: &Move) -> bool {
        mv.0.is_capture()
    }

    fn piece_map(&self) -> Vec<(Square, Piece)> {
        let board = self.chess.board();
        board
            .occupied()
            .into_iter()
            .filter_map(|s| {
                board
                    .piece_at(s)
                    .map(|p| (to_index(s), Piece::new(side_of(p.color), kind_of(p.role))))
            })
            .collect()
    }

    fn side_to_move(&self) -> Side {
        side_of(self.chess.turn())
    }
}
