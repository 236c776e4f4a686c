use logic_arcade::board::Square;
use logic_arcade::{Puzzle, PuzzleError, PuzzleKind, PuzzleParams};

fn small(kind: PuzzleKind) -> PuzzleParams {
    match kind {
        PuzzleKind::Queens => PuzzleParams::Queens { board_size: 6 },
        PuzzleKind::Knight => PuzzleParams::Knight { board_size: 5, start: Square::new(0, 0) },
        PuzzleKind::Hanoi => PuzzleParams::Hanoi { disks: 4 },
    }
}

#[test]
fn calls_before_initialize_are_state_faults() {
    for kind in PuzzleKind::ALL {
        let mut e = kind.create();
        assert!(matches!(e.step(), Err(PuzzleError::NotInitialized { .. })), "{kind}");
        assert!(matches!(e.solve(), Err(PuzzleError::NotInitialized { .. })), "{kind}");
        assert!(!e.is_solved());
        assert!(!e.is_valid_solution());
        assert_eq!(e.steps(), 0);
    }
}

#[test]
fn foreign_params_are_refused() {
    for kind in PuzzleKind::ALL {
        for other in PuzzleKind::ALL.into_iter().filter(|&k| k != kind) {
            let mut e = kind.create();
            let err = e.initialize(&small(other)).unwrap_err();
            assert!(matches!(err, PuzzleError::ParamsMismatch { .. }), "{kind} <- {other}: {err}");
            assert!(err.is_validation());
            assert!(!e.lifecycle().is_initialized());
        }
    }
}

#[test]
fn failed_reinitialize_keeps_the_running_game() {
    let bad = [
        PuzzleParams::Queens { board_size: 3 },
        PuzzleParams::Knight { board_size: 9, start: Square::new(0, 0) },
        PuzzleParams::Hanoi { disks: 11 },
    ];
    for (kind, bad) in PuzzleKind::ALL.into_iter().zip(bad) {
        let mut e = kind.create();
        e.initialize(&small(kind)).unwrap();
        assert!(e.step().unwrap());
        let before = e.render();
        assert!(e.initialize(&bad).is_err());
        assert!(e.lifecycle().is_initialized());
        assert_eq!(e.steps(), 1, "{kind}");
        assert_eq!(e.render(), before);
    }
}

#[test]
fn solve_then_reset_round_trip() {
    for kind in PuzzleKind::ALL {
        let mut e = kind.create();
        e.initialize(&small(kind)).unwrap();
        assert!(e.lifecycle().started_at().is_some());
        assert!(e.lifecycle().finished_at().is_none());

        assert!(e.solve().unwrap(), "{kind}");
        assert!(e.is_solved());
        assert!(e.is_valid_solution());
        assert!(e.steps() > 0);
        let lc = e.lifecycle();
        assert!(lc.finished_at() >= lc.started_at());
        assert!(lc.elapsed_seconds() >= 0);

        // solved games ignore further driving
        let steps = e.steps();
        assert!(!e.step().unwrap());
        assert!(!e.solve().unwrap());
        assert_eq!(e.steps(), steps);

        e.reset();
        assert!(!e.lifecycle().is_initialized());
        assert!(!e.is_solved());
        assert_eq!(e.steps(), 0);
        assert!(e.lifecycle().started_at().is_none());
        assert!(matches!(e.step(), Err(PuzzleError::NotInitialized { .. })));

        e.initialize(&small(kind)).unwrap();
        assert!(!e.is_solved());
    }
}

#[test]
fn default_params_initialize_every_kind() {
    for kind in PuzzleKind::ALL {
        let mut e = kind.create();
        e.initialize(&kind.default_params()).unwrap();
        assert_eq!(e.kind(), kind);
        assert!(!e.is_solved());
    }
}

#[test]
fn reset_then_initialize_reproduces_the_first_layout() {
    for kind in PuzzleKind::ALL {
        let mut e = kind.create();
        e.initialize(&small(kind)).unwrap();
        let fresh = e.render();
        for _ in 0..5 { e.step().unwrap(); }
        assert_ne!(e.render(), fresh, "{kind} did not move");
        e.reset();
        e.initialize(&small(kind)).unwrap();
        assert_eq!(e.render(), fresh, "{kind}");
        assert_eq!(e.steps(), 0);
    }
}
