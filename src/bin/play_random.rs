use clap::Parser;
use logic_arcade::board::{Square, TOWER_COUNT};
use logic_arcade::{HanoiEngine, KnightEngine, Puzzle, PuzzleKind, PuzzleParams, QueensEngine};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[derive(Parser, Debug)]
#[command(name = "arcade-random", about = "Play random manual moves against a puzzle engine")]
struct Args {
    /// queens, knight or hanoi
    #[arg(long, default_value = "hanoi")]
    puzzle: PuzzleKind,
    /// Board size or disk count (defaults per puzzle)
    #[arg(long)]
    size: Option<usize>,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Stop after this many attempted moves
    #[arg(long, default_value_t = 500)]
    max_moves: usize,
    /// Print every attempt, including rejected ones
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

fn play_hanoi(e: &mut HanoiEngine, rng: &mut SmallRng, args: &Args) -> anyhow::Result<usize> {
    let mut rejected = 0;
    for _ in 0..args.max_moves {
        if e.is_solved() { break; }
        let from = rng.gen_range(0..TOWER_COUNT);
        let to = rng.gen_range(0..TOWER_COUNT);
        let ok = e.move_disk(from, to)?;
        if !ok { rejected += 1; }
        if args.verbose { println!("tower {} -> tower {}: {}", from + 1, to + 1, if ok { "ok" } else { "rejected" }); }
    }
    Ok(rejected)
}

fn play_knight(e: &mut KnightEngine, rng: &mut SmallRng, args: &Args) -> anyhow::Result<usize> {
    let size = e.board_size();
    let mut rejected = 0;
    for _ in 0..args.max_moves {
        let Some(from) = e.current() else { break };
        if e.is_solved() || e.possible_moves().is_empty() { break; }
        // Aim at any square; most attempts are not knight jumps and get rejected.
        let to = Square::new(rng.gen_range(0..size), rng.gen_range(0..size));
        let ok = e.move_knight(from, to)?;
        if !ok { rejected += 1; }
        if args.verbose { println!("{from} -> {to}: {}", if ok { "ok" } else { "rejected" }); }
    }
    Ok(rejected)
}

fn play_queens(e: &mut QueensEngine, rng: &mut SmallRng, args: &Args) -> anyhow::Result<usize> {
    let n = e.board_size();
    let mut rejected = 0;
    let mut rows: Vec<usize> = (0..n).collect();
    for _ in 0..args.max_moves {
        if e.is_solved() { break; }
        rows.shuffle(rng);
        let (row, col) = (rows[0], rng.gen_range(0..n));
        let ok = e.place_queen(row, col)?;
        if !ok { rejected += 1; }
        if args.verbose { println!("queen ({row},{col}): {}", if ok { "ok" } else { "rejected" }); }
    }
    Ok(rejected)
}

// Board size is checked by the engine before a start square is drawn.
fn random_knight(n: usize, rng: &mut SmallRng) -> anyhow::Result<KnightEngine> {
    let mut e = KnightEngine::with_start(n, Square::new(0, 0))?;
    let start = Square::new(rng.gen_range(0..n), rng.gen_range(0..n));
    e.initialize(&PuzzleParams::Knight { board_size: n, start })?;
    Ok(e)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut rng = SmallRng::seed_from_u64(args.seed);
    println!("{} (random play, seed {})", args.puzzle.name(), args.seed);
    println!("{}", args.puzzle.description());

    let (engine, rejected): (Box<dyn Puzzle>, usize) = match args.puzzle {
        PuzzleKind::Hanoi => {
            let mut e = HanoiEngine::with_disks(args.size.unwrap_or(3))?;
            let r = play_hanoi(&mut e, &mut rng, &args)?;
            (Box::new(e), r)
        }
        PuzzleKind::Knight => {
            let mut e = random_knight(args.size.unwrap_or(5), &mut rng)?;
            let r = play_knight(&mut e, &mut rng, &args)?;
            (Box::new(e), r)
        }
        PuzzleKind::Queens => {
            let mut e = QueensEngine::with_size(args.size.unwrap_or(6))?;
            let r = play_queens(&mut e, &mut rng, &args)?;
            (Box::new(e), r)
        }
    };

    print!("\n{}", engine.render());
    println!(
        "accepted: {} rejected: {} solved: {} valid: {}",
        engine.steps(),
        rejected,
        engine.is_solved(),
        engine.is_valid_solution()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_knight_size_is_an_error_not_a_panic() {
        let mut rng = SmallRng::seed_from_u64(7);
        for n in [0, 4, 9] {
            assert!(random_knight(n, &mut rng).is_err(), "n={n}");
        }
    }

    #[test]
    fn random_start_lies_on_the_board() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..20 {
            let e = random_knight(5, &mut rng).unwrap();
            assert!(e.start().in_bounds(5));
            assert_eq!(e.current(), Some(e.start()));
            assert_eq!(e.total_moves(), 1);
        }
    }
}
