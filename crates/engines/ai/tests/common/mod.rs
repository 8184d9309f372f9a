//! Scripted game trees behind the `Rules` contract.
//!
//! Each node carries a static score in pawns from Light's point of view.
//! The fixture reports it to the evaluator as that many surplus pawns for
//! the leading side, so material is the only term that varies.

#![allow(dead_code)]

use std::fmt;

use chess_core::{ChessError, ChessMove, Piece, PieceKind, Rules, Side, Square};

#[derive(Clone, Debug)]
pub struct Node {
    pub score: i32,
    pub mated: bool,
    pub children: Vec<Node>,
}

impl Node {
    pub fn leaf(score: i32) -> Self {
        Self {
            score,
            mated: false,
            children: Vec::new(),
        }
    }

    pub fn branch(score: i32, children: Vec<Node>) -> Self {
        Self {
            score,
            mated: false,
            children,
        }
    }

    pub fn mate() -> Self {
        Self {
            score: 0,
            mated: true,
            children: Vec::new(),
        }
    }

    /// Full tree of the given branching factor and depth with zero scores.
    pub fn uniform(branching: usize, depth: usize) -> Self {
        if depth == 0 {
            return Self::leaf(0);
        }
        Self::branch(0, (0..branching).map(|_| Self::uniform(branching, depth - 1)).collect())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeMove(pub usize);

impl fmt::Display for TreeMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl ChessMove for TreeMove {
    fn to_square(&self) -> Square {
        // Corner squares: never central.
        0
    }
}

pub struct TreeBoard {
    root: Node,
    path: Vec<usize>,
    fail_at: Option<Vec<usize>>,
    pub applies: usize,
    pub undos: usize,
    pub deepest: usize,
}

impl TreeBoard {
    pub fn new(root: Node) -> Self {
        Self {
            root,
            path: Vec::new(),
            fail_at: None,
            applies: 0,
            undos: 0,
            deepest: 0,
        }
    }

    /// Makes applying the move that would reach `path` fail.
    pub fn failing_at(mut self, path: Vec<usize>) -> Self {
        self.fail_at = Some(path);
        self
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    fn node(&self) -> &Node {
        self.path
            .iter()
            .fold(&self.root, |node, &i| &node.children[i])
    }
}

impl Rules for TreeBoard {
    type Move = TreeMove;

    fn legal_moves(&self) -> Vec<TreeMove> {
        (0..self.node().children.len()).map(TreeMove).collect()
    }

    fn make_move(&mut self, mv: &TreeMove) -> chess_core::Result<()> {
        if mv.0 >= self.node().children.len() {
            return Err(ChessError::IllegalMove {
                mv: mv.to_string(),
                reason: "no such branch".to_string(),
            });
        }
        let mut next = self.path.clone();
        next.push(mv.0);
        if self.fail_at.as_ref() == Some(&next) {
            return Err(ChessError::IllegalMove {
                mv: mv.to_string(),
                reason: "scripted failure".to_string(),
            });
        }
        self.path = next;
        self.applies += 1;
        self.deepest = self.deepest.max(self.path.len());
        Ok(())
    }

    fn unmake_move(&mut self, _mv: &TreeMove) {
        self.path.pop();
        self.undos += 1;
    }

    fn is_game_over(&self) -> bool {
        self.node().mated
    }

    fn is_checkmate(&self) -> bool {
        self.node().mated
    }

    fn is_stalemate(&self) -> bool {
        false
    }

    fn is_insufficient_material(&self) -> bool {
        false
    }

    fn is_capture(&self, _mv: &TreeMove) -> bool {
        false
    }

    fn piece_map(&self) -> Vec<(Square, Piece)> {
        let score = self.node().score;
        let side = if score >= 0 { Side::Light } else { Side::Dark };
        (0..score.unsigned_abs() as Square)
            .map(|i| (8 + i, Piece::new(side, PieceKind::Pawn)))
            .collect()
    }

    fn side_to_move(&self) -> Side {
        if self.path.len() % 2 == 0 {
            Side::Light
        } else {
            Side::Dark
        }
    }
}
