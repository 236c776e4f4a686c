use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use logic_arcade::board::Square;
use logic_arcade::puzzle::{HANOI_DISKS, KNIGHT_SIZES, QUEENS_SIZES};
use logic_arcade::{KnightEngine, Puzzle, PuzzleKind, PuzzleParams, TourOrdering};
use rayon::prelude::*;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "arcade-survey", about = "Solve every supported instance size and report search effort")]
struct Args {
    /// Number of worker threads
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Use fixed jump order for every knight board (slow beyond 6x6)
    #[arg(long, default_value_t = false)]
    fixed_knight: bool,
    /// Only survey this puzzle
    #[arg(long)]
    only: Option<PuzzleKind>,
    /// Emit one JSON summary per line instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,
}

struct Row {
    params: PuzzleParams,
    solved: bool,
    steps: u64,
    millis: f64,
    summary: logic_arcade::PuzzleSummary,
}

fn instances(only: Option<PuzzleKind>) -> Vec<PuzzleParams> {
    let mut out = Vec::new();
    if only.map_or(true, |k| k == PuzzleKind::Queens) {
        out.extend(QUEENS_SIZES.map(|n| PuzzleParams::Queens { board_size: n }));
    }
    if only.map_or(true, |k| k == PuzzleKind::Knight) {
        out.extend(KNIGHT_SIZES.map(|n| PuzzleParams::Knight { board_size: n, start: Square::new(0, 0) }));
    }
    if only.map_or(true, |k| k == PuzzleKind::Hanoi) {
        out.extend(HANOI_DISKS.map(|n| PuzzleParams::Hanoi { disks: n }));
    }
    out
}

fn engine_for(params: &PuzzleParams, fixed_knight: bool) -> Box<dyn Puzzle + Send> {
    match *params {
        PuzzleParams::Knight { board_size, .. } => {
            let mut k = KnightEngine::new();
            // Fixed order is quick on 5x5 only.
            if !fixed_knight && board_size > 5 { k.set_ordering(TourOrdering::Warnsdorff); }
            Box::new(k)
        }
        _ => params.kind().create(),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let work = instances(args.only);

    let pb = ProgressBar::new(work.len() as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")?);
    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let rows: Vec<anyhow::Result<Row>> = pool.install(|| {
        work.par_iter()
            .map(|params| -> anyhow::Result<Row> {
                let mut engine = engine_for(params, args.fixed_knight);
                engine.initialize(params)?;
                let t0 = Instant::now();
                let solved = engine.solve()?;
                let millis = t0.elapsed().as_secs_f64() * 1000.0;
                pb.inc(1);
                Ok(Row { params: *params, solved, steps: engine.steps(), millis, summary: engine.create_summary(solved) })
            })
            .collect()
    });
    pb.finish_and_clear();

    for row in rows {
        let row = row?;
        if args.json {
            println!("{}", serde_json::to_string(&row.summary)?);
            continue;
        }
        let label = match row.params {
            PuzzleParams::Queens { board_size } => format!("queens {board_size}x{board_size}"),
            PuzzleParams::Knight { board_size, start } => format!("knight {board_size}x{board_size} from {start}"),
            PuzzleParams::Hanoi { disks } => format!("hanoi {disks} disks"),
        };
        println!("{:<28} solved={:<5} steps={:<10} elapsed={:.3}ms", label, row.solved, row.steps, row.millis);
    }
    Ok(())
}
