use super::*;

#[test]
fn test_parse_and_format_uci() {
    let pos = Position::startpos();
    let mv = parse_uci_move(&pos, "g1f3").unwrap();
    assert_eq!(move_to_uci(&mv), "g1f3");
    assert!(parse_uci_move(&pos, "e2e5").is_none());
    assert!(parse_uci_move(&pos, "e2").is_none());
}

#[test]
fn test_play_uci_moves_commits() {
    let mut pos = Position::startpos();
    play_uci_moves(&mut pos, &["e2e4", "e7e5", "g1f3"]).unwrap();
    assert_eq!(pos.side_to_move(), Side::Dark);
    assert_eq!(pos.history_len(), 0);
    assert_eq!(
        pos.fen(),
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
    );
}

#[test]
fn test_play_uci_moves_rejects_unknown() {
    let mut pos = Position::startpos();
    let err = play_uci_moves(&mut pos, &["e2e4", "e2e4"]).unwrap_err();
    assert_eq!(err, ChessError::UnknownMove("e2e4".to_string()));
}
