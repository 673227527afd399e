//! lemke CLI - Command-line interface for the lemke solver
//!
//! Loads or builds bimatrix games, runs Lemke-Howson and prints the
//! equilibrium. Set `LEMKE_LOG=debug` (or `trace` for every pivot) for
//! solver logging.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::{info, LevelFilter};

use lemke_engine::{solve_batch, BatchSummary, Game, LemkeHowson, Player, SolverSettings};
use lemke_games::{by_name, random_games, read_game, render_game, NAMES};

fn cli() -> Command {
    Command::new("lemke")
        .version(clap::crate_version!())
        .about("Nash equilibria of two-player games via Lemke-Howson")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("tolerance")
                .long("tolerance")
                .global(true)
                .value_parser(clap::value_parser!(f64))
                .help("Pivot and strategy-mass tolerance [default: 1e-9]"),
        )
        .arg(
            Arg::new("max_pivots")
                .long("max-pivots")
                .global(true)
                .value_parser(clap::value_parser!(usize))
                .help("Fail a path after this many pivots instead of running until it closes"),
        )
        .subcommand(
            Command::new("solve")
                .about("Solve a game read from a bimatrix text file")
                .arg(
                    Arg::new("file")
                        .help("Path to the game: rows of A, a blank line, rows of B")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("example")
                .about("Solve a built-in textbook game")
                .arg(
                    Arg::new("name")
                        .help("Catalog game name")
                        .default_value("reference"),
                )
                .arg(
                    Arg::new("list")
                        .long("list")
                        .action(ArgAction::SetTrue)
                        .help("List catalog game names and exit"),
                ),
        )
        .subcommand(
            Command::new("random")
                .about("Solve a batch of random games in parallel")
                .arg(
                    Arg::new("rows")
                        .long("rows")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("cols")
                        .long("cols")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("count")
                        .long("count")
                        .default_value("1")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .default_value("0")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
}

fn settings(matches: &ArgMatches) -> SolverSettings {
    let mut settings = SolverSettings::default();
    if let Some(&tolerance) = matches.get_one::<f64>("tolerance") {
        settings.tolerance = tolerance;
    }
    settings.max_pivots = matches.get_one::<usize>("max_pivots").copied();
    settings
}

fn format_strategy(strategy: &[f64]) -> String {
    let parts: Vec<String> = strategy.iter().map(|p| format!("{:.6}", p)).collect();
    format!("[{}]", parts.join(", "))
}

fn print_solution(solver: &LemkeHowson, game: &Game) -> Result<()> {
    match solver.solve(game).context("solver failed")? {
        Some(eq) => {
            let (u1, u2) = eq.payoffs(game);
            println!("Nash Equilibrium Found:");
            println!("  Player 1 Strategy: {}", format_strategy(eq.strategy(Player::Row)));
            println!("  Player 2 Strategy: {}", format_strategy(eq.strategy(Player::Column)));
            println!("  Expected payoffs:  ({:.6}, {:.6})", u1, u2);
            println!("  Pivots: {} (label {})", eq.pivots, eq.label);
            if !eq.is_nash(game, 1e-6) {
                println!("  Warning: profile fails the best-response check (regret {:.3e})", eq.regret(game));
            }
        }
        None => println!("No Nash Equilibrium Found."),
    }
    Ok(())
}

fn run_random(solver: &LemkeHowson, matches: &ArgMatches) -> Result<()> {
    let rows = *matches.get_one::<usize>("rows").context("missing --rows")?;
    let cols = *matches.get_one::<usize>("cols").context("missing --cols")?;
    let count = *matches.get_one::<usize>("count").context("missing --count")?;
    let seed = *matches.get_one::<u64>("seed").context("missing --seed")?;

    let games = random_games(seed, count, rows, cols).context("could not generate games")?;
    info!("solving {} random {}x{} games (seed {})", count, rows, cols, seed);

    let start = Instant::now();
    let results = solve_batch(solver, &games);
    let elapsed = start.elapsed();

    let summary = BatchSummary::from_results(&results);
    println!("Games:      {}", summary.total());
    println!("  found:     {}", summary.found);
    println!("  not found: {}", summary.not_found);
    println!("  failed:    {}", summary.failed);
    if summary.found > 0 {
        println!("  avg pivots: {:.2}", summary.pivots as f64 / summary.found as f64);
    }
    println!("Duration:   {} ms", elapsed.as_millis());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("LEMKE_LOG", "warn"))
        .init();

    let matches = cli().get_matches();
    let solver = LemkeHowson::new(settings(&matches)).context("invalid solver settings")?;

    match matches.subcommand() {
        Some(("solve", sub)) => {
            let path = sub.get_one::<PathBuf>("file").context("missing game file")?;
            let game = read_game(path).with_context(|| format!("could not load {}", path.display()))?;
            print_solution(&solver, &game)
        }
        Some(("example", sub)) => {
            if sub.get_flag("list") {
                for name in NAMES {
                    println!("{}", name);
                }
                return Ok(());
            }
            let name = sub.get_one::<String>("name").context("missing game name")?;
            let game = by_name(name).with_context(|| {
                format!("unknown game {:?}; choose one of: {}", name, NAMES.join(", "))
            })?;
            print!("{}", render_game(&game));
            println!();
            print_solution(&solver, &game)
        }
        Some(("random", sub)) => run_random(&solver, sub),
        _ => unreachable!("subcommand_required is set"),
    }
}
