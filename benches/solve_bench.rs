use criterion::{criterion_group, criterion_main, Criterion, black_box};
use logic_arcade::board::Square;
use logic_arcade::{HanoiEngine, KnightEngine, Puzzle, QueensEngine, TourOrdering};

fn bench_queens(c: &mut Criterion) {
    let mut group = c.benchmark_group("queens_solve");
    for n in [8usize, 10, 12] {
        group.bench_function(format!("queens_{n}"), |ben| {
            ben.iter(|| {
                let mut e = QueensEngine::with_size(black_box(n)).unwrap();
                black_box(e.solve().unwrap())
            })
        });
    }
    group.finish();
}

fn bench_knight(c: &mut Criterion) {
    c.bench_function("knight_5_fixed_corner", |ben| {
        ben.iter(|| {
            let mut e = KnightEngine::with_start(5, black_box(Square::new(0, 0))).unwrap();
            black_box(e.solve().unwrap())
        })
    });
    c.bench_function("knight_8_warnsdorff_corner", |ben| {
        ben.iter(|| {
            let mut e = KnightEngine::new();
            e.set_ordering(TourOrdering::Warnsdorff);
            e.initialize(&logic_arcade::PuzzleParams::Knight { board_size: 8, start: Square::new(0, 0) }).unwrap();
            black_box(e.solve().unwrap())
        })
    });
}

fn bench_hanoi(c: &mut Criterion) {
    c.bench_function("hanoi_10_solve", |ben| {
        ben.iter(|| {
            let mut e = HanoiEngine::with_disks(black_box(10)).unwrap();
            black_box(e.solve().unwrap())
        })
    });
}

criterion_group!(benches, bench_queens, bench_knight, bench_hanoi);
criterion_main!(benches);
