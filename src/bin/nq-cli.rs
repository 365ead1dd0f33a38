use clap::{Args, Parser, Subcommand};
use nqueens_rs::{solve_with_rng, SearchLimits, SolveOutcome};
use rand::{rngs::StdRng, SeedableRng};
use std::process;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        MainCommand::Solve(args) => execute_solve(args),
    }
}

fn execute_solve(args: SolveArgs) -> Result<(), String> {
    let num_queens = args.queens.unwrap_or(args.size);
    let limits = SearchLimits {
        max_moves_per_restart: args.max_moves,
        max_restarts: args.max_restarts,
    };

    let outcome = match args.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            solve_with_rng(args.size, num_queens, limits, &mut rng)
        }
        None => {
            let mut rng = rand::rng();
            solve_with_rng(args.size, num_queens, limits, &mut rng)
        }
    }
    .map_err(|err| err.to_string())?;

    match outcome {
        SolveOutcome::Solved { board, stats } => {
            println!("{board}");
            println!(
                "Solved after {} restart(s) and {} move(s).",
                stats.restarts, stats.moves
            );
        }
        SolveOutcome::Exhausted { stats } => {
            println!("No solution found after {} restart(s).", stats.restarts);
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(name = "nq-cli", version, about = "N-queens local search CLI")]
struct Cli {
    #[command(subcommand)]
    command: MainCommand,
}

#[derive(Subcommand)]
enum MainCommand {
    /// Solve an N-queens placement using random-restart hill climbing
    Solve(SolveArgs),
}

#[derive(Args)]
struct SolveArgs {
    /// Side length of the board (the board is SIZE x SIZE).
    #[arg()]
    size: usize,

    /// Number of queens to place (default: the board size).
    #[arg(long)]
    queens: Option<usize>,

    /// Random restarts to attempt before giving up.
    #[arg(long, default_value_t = 100)]
    max_restarts: usize,

    /// Successor moves per restart before reseeding the board.
    #[arg(long, default_value_t = 1000)]
    max_moves: usize,

    /// Seed for a reproducible run (default: thread-local entropy).
    #[arg(long)]
    seed: Option<u64>,
}
