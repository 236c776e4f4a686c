use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use log::info;
use logic_arcade::board::Square;
use logic_arcade::puzzle::{DEFAULT_HANOI_DISKS, DEFAULT_KNIGHT_SIZE, DEFAULT_QUEENS_SIZE};
use logic_arcade::{HanoiEngine, KnightEngine, Puzzle, PuzzleKind, PuzzleParams, QueensEngine, TourOrdering};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "arcade", version, about = "Drive the N-Queens, Knight's Tour and Tower of Hanoi engines", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Print the result summary as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Advance with single steps instead of a full solve
    #[arg(long, global = true)]
    step: bool,

    /// While stepping, print the board every N steps (0 = only at the end)
    #[arg(long, global = true, default_value_t = 0)]
    every: u64,

    /// While stepping, stop after this many steps
    #[arg(long, global = true)]
    max_steps: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available puzzles
    List,
    /// N-Queens
    Queens {
        /// Board size
        #[arg(long, default_value_t = DEFAULT_QUEENS_SIZE)]
        size: usize,
        /// Manual placement "row,col" applied before driving the engine (repeatable)
        #[arg(long = "place", value_parser = parse_pair)]
        place: Vec<(usize, usize)>,
    },
    /// Knight's Tour
    Knight {
        /// Board size
        #[arg(long, default_value_t = DEFAULT_KNIGHT_SIZE)]
        size: usize,
        /// Start square "x,y"
        #[arg(long, value_parser = parse_pair, default_value = "0,0")]
        start: (usize, usize),
        /// Order jumps by fewest onward moves
        #[arg(long)]
        warnsdorff: bool,
        /// Manual jump to "x,y" from the knight's square (repeatable)
        #[arg(long = "jump", value_parser = parse_pair)]
        jumps: Vec<(usize, usize)>,
    },
    /// Tower of Hanoi
    Hanoi {
        /// Number of disks
        #[arg(long, default_value_t = DEFAULT_HANOI_DISKS)]
        disks: usize,
        /// Manual move "from,to" with 0-based towers (repeatable)
        #[arg(long = "move", value_parser = parse_pair)]
        moves: Vec<(usize, usize)>,
    },
    /// Initialize from a JSON parameter file, e.g. {"kind":"hanoi","disks":4}
    Run {
        path: PathBuf,
    },
}

fn parse_pair(s: &str) -> std::result::Result<(usize, usize), String> {
    let (a, b) = s.split_once(',').ok_or_else(|| format!("expected two numbers like 1,2, got '{s}'"))?;
    let a = a.trim().parse::<usize>().map_err(|e| format!("'{a}': {e}"))?;
    let b = b.trim().parse::<usize>().map_err(|e| format!("'{b}': {e}"))?;
    Ok((a, b))
}

fn build(command: Command) -> Result<Option<Box<dyn Puzzle + Send>>> {
    let engine: Box<dyn Puzzle + Send> = match command {
        Command::List => {
            for kind in PuzzleKind::ALL {
                println!("{:<15} {}", kind.name(), kind.description());
            }
            return Ok(None);
        }
        Command::Queens { size, place } => {
            let mut e = QueensEngine::with_size(size)?;
            for (row, col) in place {
                if !e.place_queen(row, col)? { println!("rejected: queen at row {row} col {col}"); }
            }
            Box::new(e)
        }
        Command::Knight { size, start, warnsdorff, jumps } => {
            let mut e = KnightEngine::new();
            if warnsdorff { e.set_ordering(TourOrdering::Warnsdorff); }
            e.initialize(&PuzzleParams::Knight { board_size: size, start: Square::new(start.0, start.1) })?;
            for (x, y) in jumps {
                let from = e.current().ok_or_else(|| anyhow!("knight has no position"))?;
                let to = Square::new(x, y);
                if !e.move_knight(from, to)? { println!("rejected: jump {from} -> {to}"); }
            }
            Box::new(e)
        }
        Command::Hanoi { disks, moves } => {
            let mut e = HanoiEngine::with_disks(disks)?;
            for (from, to) in moves {
                if !e.move_disk(from, to)? { println!("rejected: tower {from} -> tower {to}"); }
            }
            Box::new(e)
        }
        Command::Run { path } => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            let params: PuzzleParams = serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
            let mut e = params.kind().create();
            e.initialize(&params)?;
            e
        }
    };
    Ok(Some(engine))
}

fn run_steps(engine: &mut (dyn Puzzle + Send), every: u64, max_steps: Option<u64>) -> Result<u64> {
    let mut taken = 0u64;
    while max_steps.map_or(true, |m| taken < m) {
        if !engine.step()? { break; }
        taken += 1;
        if every > 0 && taken % every == 0 {
            println!("after {taken} steps:\n{}", engine.render());
        }
    }
    Ok(taken)
}

// The engine moves onto a worker thread for the search and comes back with the result.
fn run_solve(engine: Box<dyn Puzzle + Send>) -> Result<(Box<dyn Puzzle + Send>, bool)> {
    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("solving {}", engine.kind()));
    pb.enable_steady_tick(Duration::from_millis(100));
    let worker = thread::spawn(move || {
        let mut engine = engine;
        let solved = engine.solve();
        (engine, solved)
    });
    let (engine, solved) = worker.join().map_err(|_| anyhow!("solver thread panicked"))?;
    pb.finish_and_clear();
    Ok((engine, solved?))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.every > 0 && !args.step {
        bail!("--every only applies together with --step");
    }

    let Some(mut engine) = build(args.command)? else { return Ok(()) };
    let kind = engine.kind();

    let solved = if args.step {
        let taken = run_steps(engine.as_mut(), args.every, args.max_steps)?;
        info!("{kind}: {taken} steps taken");
        engine.is_solved()
    } else {
        let (e, solved) = run_solve(engine)?;
        engine = e;
        solved
    };

    print!("{}", engine.render());
    let summary = engine.create_summary(solved);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{}: {} | steps: {} | valid: {} | elapsed: {}s",
            kind.name(),
            if solved { "solved" } else { "not solved" },
            summary.steps,
            engine.is_valid_solution(),
            summary.elapsed_seconds
        );
    }
    Ok(())
}
