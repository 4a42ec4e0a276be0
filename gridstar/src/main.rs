use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use gridstar_core::Dims;
use gridstar_lib::{
    CliError, CliResult, Overrides, Session, Settings, load_board, log_builder, random, render,
    script,
};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A* paths between two cells of a grid with blocked cells.
#[derive(Parser, Debug)]
#[command(name = "gridstar", version = gridstar_lib::VERSION, about)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// JSON settings file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Update the cost of cells found again through a cheaper neighbor
    #[arg(long, global = true)]
    relax: bool,

    /// Give up after closing this many cells
    #[arg(long, global = true, value_name = "N")]
    max_expansions: Option<usize>,

    /// Print row and column numbers around boards
    #[arg(long, global = true)]
    ruler: bool,

    /// Log filter (error, warn, info, debug, trace); overrides RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the path on an ASCII map (`.` open, `#` blocked, `S` start, `G` goal)
    Solve {
        /// Map file
        map: PathBuf,
    },
    /// Search a randomly blocked board from the top-left to the bottom-right corner
    Random {
        #[arg(long, default_value_t = 10)]
        rows: i32,
        #[arg(long, default_value_t = 10)]
        cols: i32,
        /// Probability of a cell being blocked
        #[arg(long, default_value_t = 0.3)]
        density: f64,
        /// Seed for a reproducible board
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Apply an action script to a map, printing the board after each action
    Replay {
        /// Map file
        map: PathBuf,
        /// Actions such as "s 0 0; s 4 4; b 2 2; clear"
        actions: String,
        /// Stop at the first refused action
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    log_builder(env_logger::Env::default(), args.log_level.as_deref()).init();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("gridstar: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> CliResult<ExitCode> {
    let overrides = Overrides {
        relax: args.relax,
        max_expansions: args.max_expansions,
        ruler: args.ruler,
    };
    let settings = Settings::resolve(args.config.as_deref(), overrides)?;
    debug!("settings: {settings:?}");

    match args.command {
        Command::Solve { map } => {
            let session = Session::new(load_board(&map)?, settings.search);
            print(&session, settings.ruler);
            Ok(exit_code(&session))
        }
        Command::Random {
            rows,
            cols,
            density,
            seed,
        } => {
            if rows <= 0 || cols <= 0 {
                return Err(CliError::InvalidArgument(format!(
                    "board must have at least one cell, got {rows}x{cols}"
                )));
            }
            if !(0.0..=1.0).contains(&density) {
                return Err(CliError::InvalidArgument(format!(
                    "density must be within [0, 1], got {density}"
                )));
            }
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let board = random::board(Dims::new(rows, cols), density, &mut rng)?;
            let session = Session::new(board, settings.search);
            print(&session, settings.ruler);
            Ok(exit_code(&session))
        }
        Command::Replay {
            map,
            actions,
            strict,
        } => {
            let actions = script::parse(&actions)?;
            let mut session = Session::new(load_board(&map)?, settings.search);
            print(&session, settings.ruler);
            for (i, action) in actions.into_iter().enumerate() {
                println!();
                println!("> {action}");
                if let Err(source) = session.apply(action) {
                    if strict {
                        return Err(CliError::Action {
                            index: i + 1,
                            action: action.to_string(),
                            source,
                        });
                    }
                    debug!("refused {action}: {source}");
                    println!("refused: {source}");
                    continue;
                }
                print(&session, settings.ruler);
            }
            Ok(exit_code(&session))
        }
    }
}

fn print(session: &Session, ruler: bool) {
    print!("{}", render::board(session.board(), session.path(), ruler));
    println!("{}", render::summary(session.result()));
    let stats = session.stats();
    debug!(
        "expanded {}, pushed {}, stale {}",
        stats.expanded, stats.pushed, stats.stale
    );
}

fn exit_code(session: &Session) -> ExitCode {
    ExitCode::from(session.exit_status())
}
