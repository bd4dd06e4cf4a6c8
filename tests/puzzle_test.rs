use tess::core::{ChessBoard, Puzzle, PuzzleError, Rules};
use tess::engine::{PuzzleLoop, PuzzleState, Screen, ScriptedConsole, Session, SessionOutcome};
use tess::term::{BoardView, DisplayMode, GlyphSet, Palette, Viewport};
use tess::types::Side;

const FEN: &str = "3r3k/8/8/8/8/8/8/3QK3 w - - 0 1";

fn steps(s: &[&str]) -> Vec<String> {
    s.iter().map(|s| s.to_string()).collect()
}

fn puzzle() -> Puzzle {
    let board = ChessBoard::from_fen(FEN).unwrap();
    Puzzle::new("t1", Some(1400), board, steps(&["d1a4", "d8d7", "a4e4"])).unwrap()
}

#[test]
fn puzzle_session_solved() {
    let session = Session::puzzle(BoardView::default(), puzzle());
    let mut console = ScriptedConsole::new(Viewport::new(80, 40), ["D1A4", "a4e4"]);

    let outcome = session.run(&mut console).unwrap();

    assert_eq!(outcome, SessionOutcome::Solved);
    assert_eq!(console.remaining(), 0);
    assert_eq!(console.acks(), 1);
    assert!(console.frames()[0].starts_with("Puzzle t1 (rating 1400)"));
    assert!(console.frames()[0].contains("Enter White's move in UCI (e.g., e2e4):"));
}

#[test]
fn puzzle_loop_state_trace_and_moves() {
    let (mut board, solution) = puzzle().into_parts();
    let mut console = ScriptedConsole::new(Viewport::new(80, 40), ["d1a4", "A4E4"]);
    let mut puzzle_loop = PuzzleLoop::new(Screen::new(BoardView::default(), "Puzzle"), Side::White);

    let outcome = puzzle_loop.run(&mut board, &solution, &mut console).unwrap();

    assert_eq!(outcome, SessionOutcome::Solved);
    assert_eq!(
        puzzle_loop.trace(),
        [
            PuzzleState::AutoPlay,
            PuzzleState::Prompting,
            PuzzleState::AutoPlay,
            PuzzleState::Prompting,
            PuzzleState::Solved,
        ]
    );
    let played: Vec<String> = board
        .history()
        .iter()
        .map(|mv| board.coordinate_text(mv))
        .collect();
    assert_eq!(played, solution);
}

#[test]
fn puzzle_mismatch_fails_without_checking_legality() {
    let (mut board, solution) = puzzle().into_parts();
    let mut console = ScriptedConsole::new(Viewport::new(80, 40), ["d1a4", "e4e5", "a4e4"]);
    let mut puzzle_loop = PuzzleLoop::new(Screen::new(BoardView::default(), "Puzzle"), Side::White);

    let outcome = puzzle_loop.run(&mut board, &solution, &mut console).unwrap();

    assert!(matches!(outcome, SessionOutcome::Failed { ref expected, .. } if expected == "a4e4"));
    assert_eq!(puzzle_loop.state(), PuzzleState::Failed);
    // The solver's first move and the scripted reply.
    assert_eq!(board.ply_count(), 2);
    assert_eq!(console.remaining(), 1);
    assert_eq!(console.acks(), 1);
}

#[test]
fn puzzle_renders_in_simple_mode() {
    let view = BoardView::new(GlyphSet::new(DisplayMode::Simple), Palette::default());
    let session = Session::puzzle(view, puzzle());
    let mut console = ScriptedConsole::new(Viewport::new(40, 30), Vec::<String>::new());

    assert_eq!(session.run(&mut console).unwrap(), SessionOutcome::Aborted);
    let frame = &console.frames()[0];
    assert!(frame.contains('♕'));
    assert!(frame.contains('♜'));
}

#[test]
fn puzzle_rejects_unplayable_solution_up_front() {
    let board = ChessBoard::from_fen(FEN).unwrap();
    let err = Puzzle::new("bad", None, board, steps(&["d1a4", "h8h1"])).unwrap_err();
    assert!(matches!(err, PuzzleError::BadStep { index: 1, .. }));

    let board = ChessBoard::from_fen(FEN).unwrap();
    assert!(matches!(
        Puzzle::new("empty", None, board, Vec::new()),
        Err(PuzzleError::EmptySolution)
    ));
}
