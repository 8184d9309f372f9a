use chess_core::{Position, Rules, Side, STARTPOS_FEN};

use super::*;
use crate::recorder::MemoryRecorder;

const HANGING_QUEEN: &str = "4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1";

#[test]
fn test_difficulty_parsing() {
    assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
    assert_eq!(" Medium ".parse::<Difficulty>().unwrap(), Difficulty::Medium);
    assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    assert_eq!("deep".parse::<Difficulty>().unwrap(), Difficulty::Deep);
    assert_eq!("fales".parse::<Difficulty>().unwrap(), Difficulty::Deep);

    let err = "impossible".parse::<Difficulty>().unwrap_err();
    assert!(matches!(err, AiError::UnknownDifficulty(ref s) if s == "impossible"));
    assert!("".parse::<Difficulty>().is_err());

    for d in Difficulty::ALL {
        assert_eq!(d.to_string().parse::<Difficulty>().unwrap(), d);
    }
}

#[test]
fn test_wrong_side_is_rejected() {
    let recorder = MemoryRecorder::new();
    let mut ai = AiPlayer::new(Side::Dark, Difficulty::Easy).with_recorder(recorder.clone());
    let mut pos = Position::startpos();

    let err = ai.select_move(&mut pos).unwrap_err();
    assert!(matches!(
        err,
        AiError::WrongSide {
            expected: Side::Dark,
            actual: Side::Light
        }
    ));
    assert_eq!(
        recorder.events(),
        vec![AiEvent::WrongSide {
            expected: Side::Dark,
            actual: Side::Light
        }]
    );
    assert_eq!(pos.fen(), STARTPOS_FEN);
}

#[test]
fn test_every_difficulty_returns_legal_move_and_restores_position() {
    let fens = [
        STARTPOS_FEN,
        HANGING_QUEEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/4P3/8/8/8/k7/8/K7 w - - 0 1",
    ];
    for fen in fens {
        for difficulty in Difficulty::ALL {
            let mut pos = Position::from_fen(fen).unwrap();
            let legal = pos.legal_moves();
            let mut ai = AiPlayer::new(Side::Light, difficulty).with_seed(1);
            let mv = ai.select_move(&mut pos).unwrap().unwrap();
            assert!(legal.contains(&mv), "{difficulty} chose {mv} in {fen}");
            assert_eq!(pos.fen(), fen, "{difficulty} left {fen} modified");
            assert_eq!(pos.history_len(), 0);
        }
    }
}

#[test]
fn test_no_legal_moves_returns_none() {
    let stalemate = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1";
    for difficulty in Difficulty::ALL {
        let recorder = MemoryRecorder::new();
        let mut pos = Position::from_fen(stalemate).unwrap();
        let mut ai = AiPlayer::new(Side::Dark, difficulty).with_recorder(recorder.clone());
        assert!(ai.select_move(&mut pos).unwrap().is_none());
        assert_eq!(
            recorder.events().last(),
            Some(&AiEvent::NoLegalMoves { side: Side::Dark })
        );
    }
}

#[test]
fn test_search_difficulties_are_deterministic() {
    for difficulty in [Difficulty::Hard, Difficulty::Deep] {
        let mut first = AiPlayer::new(Side::Light, difficulty);
        let mut second = AiPlayer::new(Side::Light, difficulty);
        let mut pos = Position::startpos();
        let a = first.select_move(&mut pos).unwrap();
        let b = second.select_move(&mut pos).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_seeded_random_difficulties_repeat() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium] {
        let picks = |seed| {
            let mut ai = AiPlayer::new(Side::Light, difficulty).with_seed(seed);
            let mut pos = Position::startpos();
            (0..10)
                .map(|_| ai.select_move(&mut pos).unwrap().unwrap().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(42), picks(42));
    }
}

#[test]
fn test_hard_and_deep_take_the_queen() {
    for difficulty in [Difficulty::Hard, Difficulty::Deep] {
        let mut pos = Position::from_fen(HANGING_QUEEN).unwrap();
        let mut ai = AiPlayer::new(Side::Light, difficulty);
        let mv = ai.select_move(&mut pos).unwrap().unwrap();
        assert_eq!(mv.to_string(), "d2d5", "{difficulty}");
    }
}

#[test]
fn test_recorder_sees_search_details() {
    let recorder = MemoryRecorder::new();
    let mut ai = AiPlayer::new(Side::Light, Difficulty::Deep).with_recorder(recorder.clone());
    let mut pos = Position::from_fen(HANGING_QUEEN).unwrap();
    ai.select_move(&mut pos).unwrap();

    let events = recorder.events();
    assert_eq!(events.len(), 2);
    assert!(matches!(
        events[0],
        AiEvent::TurnStarted {
            side: Side::Light,
            difficulty: Difficulty::Deep,
            ..
        }
    ));
    match &events[1] {
        AiEvent::MoveSelected {
            mv, score, stats, ..
        } => {
            assert_eq!(mv, "d2d5");
            assert!(score.is_some());
            let stats = stats.unwrap();
            assert_eq!(stats.max_ply, 3);
            assert!(stats.nodes > stats.leaves);
        }
        other => panic!("unexpected event {other:?}"),
    }

    recorder.clear();
    let mut medium = AiPlayer::new(Side::Light, Difficulty::Medium)
        .with_seed(2)
        .with_recorder(recorder.clone());
    medium.select_move(&mut pos).unwrap();
    assert!(matches!(
        recorder.events().last(),
        Some(AiEvent::MoveSelected {
            tier: Some(GreedyTier::Capture),
            ..
        })
    ));
}

#[test]
fn test_from_config() {
    let cfg = AiConfig::from_toml_str(
        "side = \"dark\"\ndifficulty = \"hard\"\nmate_scoring = \"relative\"\nseed = 3",
    )
    .unwrap();
    let ai = AiPlayer::from_config(&cfg);
    assert_eq!(ai.side(), Side::Dark);
    assert_eq!(ai.difficulty(), Difficulty::Hard);
    assert_eq!(ai.evaluator().mate_scoring(), MateScoring::Relative);
    assert_eq!(ai.evaluator().perspective(), Side::Dark);
}

#[test]
fn test_engine_trait_dispatch() {
    fn pick<E: crate::Engine<Position>>(engine: &mut E, pos: &mut Position) -> Option<chess_core::Move> {
        engine.select_move(pos).unwrap()
    }
    let mut ai = AiPlayer::new(Side::Light, Difficulty::Hard);
    let mut pos = Position::from_fen(HANGING_QUEEN).unwrap();
    assert_eq!(pick(&mut ai, &mut pos).unwrap().to_string(), "d2d5");
}
