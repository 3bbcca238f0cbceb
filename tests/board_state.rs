use square_chess::chess::board::Board;
use square_chess::chess::moves::Move;
use square_chess::chess::piece::{Color, PieceKind};
use square_chess::core::square::Square;
use square_chess::engine::eval::score_move;
use square_chess::error::ChessError;

fn sq(s: &str) -> Square {
    Square::parse(s).unwrap()
}

#[test]
fn square_labels_round_trip_and_reject_garbage() {
    for file in 'A'..='H' {
        for rank in 1..=8 {
            let label = format!("{file}{rank}");
            let parsed = Square::parse(&label).unwrap();
            assert_eq!(parsed.to_string(), label);
            assert_eq!(parsed.row(), 8 - rank);
            assert_eq!(parsed.col(), (file as u8 - b'A') as i8);
        }
    }
    for bad in ["I4", "@4", "A0", "A9", "h8", "", "A", "A10"] {
        assert!(matches!(
            Square::parse(bad),
            Err(ChessError::InvalidSquare { .. })
        ));
    }
}

#[test]
fn commit_moves_marks_and_captures() {
    let mut board = Board::empty();
    board.place(PieceKind::Rook, Color::White, sq("A1"));
    board.place(PieceKind::Knight, Color::Black, sq("A6"));

    let captured = board.commit_move(sq("A1"), sq("A6")).unwrap();
    let captured = captured.unwrap();
    assert_eq!((captured.kind(), captured.color()), (PieceKind::Knight, Color::Black));

    let rook = board.piece_at(sq("A6")).unwrap();
    assert_eq!(rook.kind(), PieceKind::Rook);
    assert!(rook.has_moved());
    assert!(board.piece_at(sq("A1")).is_none());
    assert_eq!(board.pieces().count(), 1);
}

#[test]
fn commit_is_not_idempotent() {
    let mut board = Board::standard();
    assert_eq!(board.commit_move(sq("G1"), sq("F3")).unwrap(), None);

    let after = board.clone();
    let err = board.commit_move(sq("G1"), sq("F3")).unwrap_err();
    assert!(matches!(err, ChessError::EmptyOrigin { square } if square == sq("G1")));
    assert_eq!(board, after);
}

#[test]
fn clone_is_independent() {
    let original = Board::standard();
    let mut copy = original.clone();

    copy.commit_move(sq("E2"), sq("E4")).unwrap();
    copy.place(PieceKind::Queen, Color::Black, sq("D4"));
    copy.remove(sq("A1"));

    assert_eq!(original, Board::standard());
    assert!(!original.piece_at(sq("E2")).unwrap().has_moved());
    assert!(copy.piece_at(sq("E4")).unwrap().has_moved());
    assert!(original.piece_at(sq("D4")).is_none());
    assert!(original.piece_at(sq("A1")).is_some());
}

#[test]
fn has_moved_survives_clone_and_reset_clears_it() {
    let mut board = Board::standard();
    board.commit_move(sq("B1"), sq("C3")).unwrap();
    let copy = board.clone();
    assert!(copy.piece_at(sq("C3")).unwrap().has_moved());

    board.reset();
    assert!(board.pieces().all(|(_, p)| !p.has_moved()));
}

#[test]
fn evaluation_leaves_the_live_board_alone() {
    let live = Board::standard();
    let mv = Move::new(sq("E2"), sq("E4"));
    let score = score_move(live.clone(), mv, Color::White).unwrap();
    assert_eq!(score, 0);
    assert_eq!(live, Board::standard());
    assert!(!live.piece_at(sq("E2")).unwrap().has_moved());
}

#[test]
fn point_values_by_kind() {
    let values: Vec<i32> = PieceKind::ALL.iter().map(|k| k.point_value()).collect();
    assert_eq!(values, vec![1, 3, 3, 5, 9, 100]);
}
