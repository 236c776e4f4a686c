use logic_arcade::{Puzzle, PuzzleKind, PuzzleParams, PuzzleRegistry};

#[test]
fn engines_are_created_once_per_kind() {
    let mut reg = PuzzleRegistry::new();
    assert!(reg.is_empty());
    reg.get(PuzzleKind::Hanoi).initialize(&PuzzleParams::Hanoi { disks: 3 }).unwrap();
    assert!(reg.contains(PuzzleKind::Hanoi));
    assert!(!reg.contains(PuzzleKind::Queens));

    // same engine comes back
    assert!(reg.get(PuzzleKind::Hanoi).lifecycle().is_initialized());
    assert!(reg.get(PuzzleKind::Hanoi).solve().unwrap());
    assert!(reg.get(PuzzleKind::Hanoi).is_solved());
    assert_eq!(reg.len(), 1);
}

#[test]
fn reset_all_keeps_entries_but_clears_state() {
    let mut reg = PuzzleRegistry::new();
    for kind in PuzzleKind::ALL {
        let params = match kind {
            PuzzleKind::Queens => PuzzleParams::Queens { board_size: 4 },
            _ => kind.default_params(),
        };
        reg.get(kind).initialize(&params).unwrap();
    }
    assert_eq!(reg.len(), 3);
    reg.reset_all();
    assert_eq!(reg.len(), 3);
    for kind in PuzzleKind::ALL {
        assert!(!reg.get(kind).lifecycle().is_initialized(), "{kind}");
    }
}

#[test]
fn remove_and_clear() {
    let mut reg = PuzzleRegistry::new();
    reg.get(PuzzleKind::Queens);
    reg.get(PuzzleKind::Knight);
    let removed = reg.remove(PuzzleKind::Queens).expect("queens was registered");
    assert_eq!(removed.kind(), PuzzleKind::Queens);
    assert!(reg.remove(PuzzleKind::Queens).is_none());
    reg.clear();
    assert!(reg.is_empty());
}
