//! 8-Puzzle Solver
//!
//! Command-line driver for the sliding tile solver: solve a board with one
//! strategy, check whether it is solvable, or compare every strategy.

use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use eight_puzzle::solvability::inversions;
use eight_puzzle::{
    format_path, is_solvable, Board, Heuristic, SolveError, Solution, Solver, Strategy,
    DEFAULT_DEPTH_LIMIT,
};

/// Boards solved when no subcommand is given: one solvable, one not.
const DEMO_BOARDS: [&str; 2] = ["478 365 120", "812 043 765"];

/// Solves the 8-puzzle with informed and uninformed search strategies.
#[derive(Parser)]
#[command(name = "eight-puzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a board and print the path.
    Solve {
        /// Nine tiles in row-major order, e.g. "478 365 120" (0, . or _ is the blank).
        board: Board,
        #[arg(short, long, value_enum, default_value_t = StrategyArg::Astar)]
        strategy: StrategyArg,
        /// Heuristic used by A*.
        #[arg(long, value_enum, default_value_t = HeuristicArg::Manhattan)]
        heuristic: HeuristicArg,
        /// Deepest bound tried by iterative deepening.
        #[arg(long, default_value_t = DEFAULT_DEPTH_LIMIT)]
        depth_limit: u32,
        /// Print only the summary, not every step.
        #[arg(short, long)]
        quiet: bool,
    },
    /// Show the inversion count and whether a board can be solved.
    Check { board: Board },
    /// Run every strategy on a board and compare moves and expansions.
    Compare {
        board: Board,
        #[arg(long, default_value_t = DEFAULT_DEPTH_LIMIT)]
        depth_limit: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Astar,
    Bfs,
    Dfs,
    Backtracking,
    Dfid,
}

#[derive(Clone, Copy, ValueEnum)]
enum HeuristicArg {
    Manhattan,
    Misplaced,
}

impl From<HeuristicArg> for Heuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Manhattan => Heuristic::Manhattan,
            HeuristicArg::Misplaced => Heuristic::Misplaced,
        }
    }
}

impl StrategyArg {
    fn with_heuristic(self, heuristic: Heuristic) -> Strategy {
        match self {
            StrategyArg::Astar => Strategy::AStar(heuristic),
            StrategyArg::Bfs => Strategy::BreadthFirst,
            StrategyArg::Dfs => Strategy::DepthFirst,
            StrategyArg::Backtracking => Strategy::Backtracking,
            StrategyArg::Dfid => Strategy::IterativeDeepening,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Solve {
            board,
            strategy,
            heuristic,
            depth_limit,
            quiet,
        }) => {
            let strategy = strategy.with_heuristic(heuristic.into());
            run_solve(&Solver::new().with_depth_limit(depth_limit), &board, strategy, !quiet);
        }
        Some(Command::Check { board }) => run_check(&board),
        Some(Command::Compare { board, depth_limit }) => {
            run_compare(&Solver::new().with_depth_limit(depth_limit), &board)
        }
        None => run_demo(),
    }
}

/// Solves the demo boards with the default strategy.
fn run_demo() {
    let solver = Solver::new();
    for (i, text) in DEMO_BOARDS.iter().enumerate() {
        let board: Board = match text.parse() {
            Ok(board) => board,
            Err(e) => {
                eprintln!("Invalid demo board {text:?}: {e}");
                continue;
            }
        };
        println!("Test {}:", i + 1);
        run_solve(&solver, &board, Strategy::default(), true);
        println!();
    }
}

/// Solves one board and prints the report.
fn run_solve(solver: &Solver, board: &Board, strategy: Strategy, show_path: bool) {
    info!("solving with {strategy}");
    println!("Start:\n{board}\n");
    let result = solver.solve(board, strategy);
    if let Err(e) = &result {
        info!("{strategy} failed: {e}");
    }
    println!("{}", report(strategy, &result, show_path));
}

/// Prints the parity check result.
fn run_check(board: &Board) {
    let count = inversions(board);
    if is_solvable(board) {
        println!("{count} inversions: solvable");
    } else {
        println!("{count} inversions: not solvable");
    }
}

/// Runs every strategy and prints one line per strategy.
fn run_compare(solver: &Solver, board: &Board) {
    println!("{:<22} {:>7} {:>10} {:>10}", "strategy", "moves", "expanded", "generated");
    for strategy in Strategy::ALL {
        match solver.solve(board, strategy) {
            Ok(solution) => {
                let stats = solution.stats();
                println!(
                    "{:<22} {:>7} {:>10} {:>10}",
                    strategy.to_string(),
                    solution.move_count(),
                    stats.expanded,
                    stats.generated
                );
            }
            Err(e) => println!("{:<22} {e}", strategy.to_string()),
        }
    }
}

/// Formats the outcome of one solve.
fn report(strategy: Strategy, result: &Result<Solution, SolveError>, show_path: bool) -> String {
    let mut output = format!("Strategy: {strategy}\n");
    match result {
        Ok(solution) => {
            output.push_str(&format!(
                "{solution} ({} nodes expanded)",
                solution.stats().expanded
            ));
            if show_path {
                output.push('\n');
                output.push_str(&format_path(solution.path()));
            }
        }
        Err(e) => output.push_str(&e.to_string()),
    }
    output
}
