use square_chess::chess::board::Board;
use square_chess::chess::legality::is_legal_move;
use square_chess::chess::moves::Move;
use square_chess::chess::piece::{Color, PieceKind};
use square_chess::config::GameConfig;
use square_chess::core::square::Square;
use square_chess::engine::picker::Picker;
use square_chess::game::{Game, TurnOutcome};

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

#[test]
fn short_scripted_game() {
    let mut game = Game::new();
    for (text, expect_capture) in [
        ("E2 E4", false),
        ("D7 D5", false),
        ("E4 D5", true),
        ("D8 D5", true),
        ("B1 C3", false),
    ] {
        let out = game.play(mv(text)).unwrap();
        match out {
            TurnOutcome::Moved { captured } => assert_eq!(captured.is_some(), expect_capture),
            TurnOutcome::Illegal => panic!("{text} rejected"),
        }
    }
    assert_eq!(game.to_move(), Color::Black);
    assert_eq!(game.history().len(), 5);
    assert_eq!(game.captured_points(Color::White), 1);
    assert_eq!(game.captured_points(Color::Black), 1);
    assert!(!game.is_over());

    assert_eq!(game.play(mv("D5 E5")).unwrap(), TurnOutcome::Moved { captured: None });
}

#[test]
fn self_check_is_not_prevented() {
    let mut board = Board::empty();
    let sq = |s: &str| Square::parse(s).unwrap();
    board.place(PieceKind::King, Color::White, sq("E1"));
    board.place(PieceKind::Rook, Color::White, sq("E2"));
    board.place(PieceKind::Rook, Color::Black, sq("E8"));
    board.place(PieceKind::King, Color::Black, sq("A8"));

    // Moving the pinned rook exposes the king; the engine still allows it.
    assert!(is_legal_move(&board, sq("E2"), sq("A2")));
    let mut game = Game::from_board(board, Color::White);
    assert!(matches!(game.play(mv("E2 A2")).unwrap(), TurnOutcome::Moved { .. }));
    assert!(matches!(
        game.play(mv("E8 E1")).unwrap(),
        TurnOutcome::Moved { captured: Some(p) } if p.kind() == PieceKind::King
    ));
    assert!(game.is_over());
    assert_eq!(game.winner(), Some(Color::Black));
}

#[test]
fn computer_self_play_stays_pseudo_legal() {
    let mut game = Game::new();
    let mut pickers = [
        Picker::seeded(Color::White, 24, 11),
        Picker::seeded(Color::Black, 24, 12),
    ];

    for _ in 0..120 {
        if game.is_over() {
            break;
        }
        let side = game.to_move();
        let Some(chosen) = pickers[side.index()].choose(game.board()).unwrap() else {
            break;
        };
        assert!(is_legal_move(game.board(), chosen.mv.from, chosen.mv.to));
        let out = game.play(chosen.mv).unwrap();
        assert!(matches!(out, TurnOutcome::Moved { .. }));
    }

    let white_kings = game.board().count(PieceKind::King, Color::White);
    let black_kings = game.board().count(PieceKind::King, Color::Black);
    assert!(white_kings <= 1 && black_kings <= 1);
}

#[test]
fn config_setup_drives_a_game() {
    let cfg = GameConfig::from_json(
        r#"{
            "seed": 5,
            "samples": 1000,
            "to_move": "b",
            "setup": [
                { "kind": "K", "color": "w", "square": "H1" },
                { "kind": "K", "color": "b", "square": "A8" },
                { "kind": "Q", "color": "b", "square": "H8" }
            ]
        }"#,
    )
    .unwrap();

    let mut game = Game::from_board(cfg.initial_board(), cfg.to_move);
    assert_eq!(game.to_move(), Color::Black);

    let mut picker = Picker::seeded(Color::Black, cfg.samples, cfg.seed.unwrap());
    let chosen = picker.choose(game.board()).unwrap().unwrap();
    // Taking the white king is worth more than anything else on the board.
    assert_eq!(chosen.mv, mv("H8 H1"));
    game.play(chosen.mv).unwrap();
    assert!(game.is_over());
    assert_eq!(game.winner(), Some(Color::Black));
}
