//! Terminal state detection through the `Rules` contract
//!
//! - Checkmate
//! - Stalemate
//! - Seventy-five-move rule
//! - Repetition keys
//! - Insufficient material

use chess_core::{play_uci_moves, Position, Rules, Side};

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).expect("fixture FEN must parse")
}

// =============================================================================
// Checkmate Tests
// =============================================================================

#[test]
fn test_checkmate_dark_is_mated() {
    // Scholar's mate, black to move and mated
    let p = pos("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");
    assert!(p.is_checkmate());
    assert!(p.is_game_over());
    assert_eq!(p.side_to_move(), Side::Dark);
    assert!(p.legal_moves().is_empty());
}

#[test]
fn test_back_rank_mate() {
    let p = pos("4Q1k1/5ppp/8/8/8/8/5PPP/6K1 b - - 1 1");
    assert!(p.is_checkmate());
    assert!(!p.is_stalemate());
}

// =============================================================================
// Stalemate Tests
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    // Black king in corner, white queen stalemates
    let p = pos("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");
    assert!(p.legal_moves().is_empty());
    assert!(p.is_stalemate());
    assert!(!p.is_checkmate());
    assert!(p.is_game_over());
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    let p = pos("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1");
    assert!(p.is_stalemate());
    assert!(!p.in_check());
}

// =============================================================================
// Seventy-Five-Move Rule Tests
// =============================================================================

#[test]
fn test_seventy_five_move_rule_at_150_halfmoves() {
    let p = pos("8/8/8/4k3/8/4K3/8/4R3 w - - 150 90");
    assert!(p.is_seventy_five_move_draw());
}

#[test]
fn test_seventy_five_move_rule_not_at_claimable_mark() {
    // 100 plies only allows a claim
    let p = pos("8/8/8/4k3/8/4K3/8/4R3 w - - 100 60");
    assert!(!p.is_seventy_five_move_draw());
    let p = pos("8/8/8/4k3/8/4K3/8/4R3 w - - 149 90");
    assert!(!p.is_seventy_five_move_draw());
}

// =============================================================================
// Repetition Key Tests
// =============================================================================

#[test]
fn test_repetition_key_ignores_move_counters() {
    let mut p = Position::startpos();
    let start = p.repetition_key();
    play_uci_moves(&mut p, &["g1f3", "g8f6", "f3g1", "f6g8"]).unwrap();
    assert_eq!(p.repetition_key(), start);
    assert_ne!(p.fen(), Position::startpos().fen());
}

#[test]
fn test_repetition_key_includes_castling_rights() {
    let mut p = Position::startpos();
    play_uci_moves(&mut p, &["e2e4", "e7e5"]).unwrap();
    let before = p.repetition_key();
    play_uci_moves(&mut p, &["e1e2", "e8e7", "e2e1", "e7e8"]).unwrap();
    // Same placement and turn, but both sides lost castling rights
    assert_ne!(p.repetition_key(), before);
    assert!(p.repetition_key().ends_with(" w - -"));
}

// =============================================================================
// Insufficient Material Tests
// =============================================================================

#[test]
fn test_insufficient_material_king_vs_king() {
    let p = pos("8/8/8/4k3/8/4K3/8/8 w - - 0 1");
    assert!(p.is_insufficient_material());
    assert!(p.is_game_over());
    // moves still exist; the game is over on material alone
    assert!(!p.legal_moves().is_empty());
}

#[test]
fn test_insufficient_material_king_knight_vs_king() {
    let p = pos("8/8/8/4k3/8/4K3/8/6N1 w - - 0 1");
    assert!(p.is_insufficient_material());
}

#[test]
fn test_sufficient_material_with_pawn() {
    let p = pos("8/8/8/4k3/8/4K3/4P3/8 w - - 0 1");
    assert!(!p.is_insufficient_material());
    assert!(!p.is_game_over());
}
