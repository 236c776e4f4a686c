use logic_arcade::board::{is_knight_step, Square};
use logic_arcade::{KnightEngine, Puzzle, PuzzleError, PuzzleParams, TourOrdering};
use pretty_assertions::assert_eq;

fn warnsdorff(size: usize, start: Square) -> KnightEngine {
    let mut e = KnightEngine::new();
    e.set_ordering(TourOrdering::Warnsdorff);
    e.initialize(&PuzzleParams::Knight { board_size: size, start }).unwrap();
    e
}

fn assert_tour(e: &KnightEngine) {
    let n = e.board_size();
    let path = e.path();
    assert_eq!(path.len(), n * n);
    assert_eq!(path[0], e.start());
    for w in path.windows(2) {
        assert!(is_knight_step(w[0], w[1]), "{} -> {} is not a knight jump", w[0], w[1]);
    }
    let grid = e.visit_order();
    for (i, sq) in path.iter().enumerate() {
        assert_eq!(grid[sq.y][sq.x], Some(i));
    }
}

#[test]
fn five_by_five_from_corner_with_fixed_order() {
    let mut e = KnightEngine::with_start(5, Square::new(0, 0)).unwrap();
    assert_eq!(e.ordering(), TourOrdering::Fixed);
    assert!(e.solve().unwrap());
    assert!(e.is_solved());
    assert!(e.is_valid_solution());
    assert_eq!(e.total_moves(), 25);
    assert_tour(&e);
}

#[test]
fn warnsdorff_tours_every_supported_size() {
    for n in 5..=8 {
        let mut e = warnsdorff(n, Square::new(0, 0));
        assert!(e.solve().unwrap(), "no tour on {n}x{n}");
        assert!(e.is_valid_solution());
        assert_tour(&e);
        assert_eq!(e.moves().len(), n * n - 1);
    }
}

#[test]
fn warnsdorff_needs_no_backtracking_on_small_boards() {
    // every attempt either lands or is one of the dead jumps sorted last
    let mut e = warnsdorff(6, Square::new(0, 0));
    assert!(e.solve().unwrap());
    assert!(e.steps() < 6 * 6 * 8);
}

#[test]
fn manual_moves_follow_knight_rules() {
    let mut e = KnightEngine::with_start(5, Square::new(0, 0)).unwrap();
    let a = Square::new(0, 0);
    let b = Square::new(2, 1);

    assert!(e.move_knight(a, b).unwrap());
    // stale origin
    assert!(!e.move_knight(a, Square::new(1, 2)).unwrap());
    // knight jump back onto a visited square
    assert!(!e.move_knight(b, a).unwrap());
    // not an L-shape
    assert!(!e.move_knight(b, Square::new(2, 2)).unwrap());
    // off the board
    assert!(!e.move_knight(b, Square::new(4, 5)).unwrap());

    assert_eq!(e.total_moves(), 2);
    assert_eq!(e.steps(), 1);
    assert_eq!(e.current(), Some(b));

    assert!(e.move_knight(b, Square::new(3, 3)).unwrap());
    assert_eq!(e.visit_order()[3][3], Some(2));
    assert_eq!(e.moves().last().map(|m| m.index), Some(2));
}

#[test]
fn possible_moves_skip_visited_squares() {
    let mut e = KnightEngine::with_start(5, Square::new(0, 0)).unwrap();
    assert!(e.move_knight(Square::new(0, 0), Square::new(1, 2)).unwrap());
    let moves = e.possible_moves();
    assert!(!moves.contains(&Square::new(0, 0)));
    assert!(moves.iter().all(|&t| is_knight_step(Square::new(1, 2), t)));
    let mut sorted = e.warnsdorff_moves();
    sorted.sort();
    let mut plain = moves.clone();
    plain.sort();
    assert_eq!(sorted, plain);
}

#[test]
fn stepping_continues_from_a_manual_opening() {
    let mut e = warnsdorff(6, Square::new(0, 0));
    assert!(e.move_knight(Square::new(0, 0), Square::new(1, 2)).unwrap());
    let mut guard = 0;
    while e.step().unwrap() {
        guard += 1;
        assert!(guard < 1_000_000, "stepping did not terminate");
    }
    assert!(e.is_solved());
    assert_eq!(e.path()[1], Square::new(1, 2));
    assert_tour(&e);
}

#[test]
fn invalid_sizes_and_starts_are_rejected() {
    for n in [0, 4, 9] {
        let err = KnightEngine::with_start(n, Square::new(0, 0)).unwrap_err();
        assert!(matches!(err, PuzzleError::Validation { param: "board size", .. }), "n={n}: {err}");
    }
    let err = KnightEngine::with_start(5, Square::new(5, 0)).unwrap_err();
    assert!(matches!(err, PuzzleError::Validation { param: "start x", value: 5, .. }));
    let err = KnightEngine::with_start(6, Square::new(2, 6)).unwrap_err();
    assert!(matches!(err, PuzzleError::Validation { param: "start y", value: 6, .. }));
}

#[test]
fn reset_keeps_ordering_but_clears_the_board() {
    let mut e = warnsdorff(5, Square::new(0, 0));
    assert!(e.solve().unwrap());
    e.reset();
    assert_eq!(e.ordering(), TourOrdering::Warnsdorff);
    assert!(!e.lifecycle().is_initialized());
    assert_eq!(e.total_moves(), 0);
    assert!(e.visit_order().is_empty());
    assert!(!e.is_valid_solution());
    assert!(matches!(e.step(), Err(PuzzleError::NotInitialized { .. })));
}

#[test]
fn reset_and_initialize_restore_the_start_square_only() {
    let params = PuzzleParams::Knight { board_size: 5, start: Square::new(2, 2) };
    let mut e = KnightEngine::new();
    e.initialize(&params).unwrap();
    let fresh = e.visit_order();
    assert!(e.solve().unwrap());
    e.reset();
    e.initialize(&params).unwrap();
    assert_eq!(e.visit_order(), fresh);
    assert_eq!(e.path(), vec![Square::new(2, 2)]);
    assert_eq!(e.steps(), 0);
}
