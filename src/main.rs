//! Xordle - CLI
//!
//! Two-target word game with TUI and line-based modes, plus tools to inspect
//! and verify generated puzzles.

use anyhow::{Context, Result, bail, ensure};
use clap::{Parser, Subcommand};
use log::info;
use rand::Rng;
use std::path::{Path, PathBuf};
use xordle::{
    commands::{SimpleOptions, describe_puzzle, run_simple, run_verify},
    config::{GameConfig, GameMode},
    core::DEFAULT_MAX_DRAWS,
    game::{DEFAULT_MAX_GUESSES, JsonFileStore, MemoryStore, RoundStore, Session},
    output::{print_puzzle_report, print_verify_statistics},
    wordlists::{Catalog, DEFAULT_CUTOFF, DICTIONARY, TARGETS, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "xordle",
    about = "Find two hidden words at once; every tile shows the better of two clues",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Daily puzzle number (default: today)
    #[arg(
        long,
        global = true,
        value_parser = clap::value_parser!(u32).range(1..),
        conflicts_with = "practice"
    )]
    day: Option<u32>,

    /// Practice puzzle; a random session number is picked if none is given
    #[arg(long, global = true, num_args = 0..=1, value_name = "SESSION")]
    practice: Option<Option<u32>>,

    /// Guess budget, opening guess included
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Rarest target word puzzles may use
    #[arg(long, global = true, default_value = DEFAULT_CUTOFF)]
    cutoff: String,

    /// Cap on generator draws per puzzle
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DRAWS)]
    max_draws: usize,

    /// Blue/orange tiles and share glyphs
    #[arg(long, global = true)]
    color_blind: bool,

    /// Rank-ordered target list (one word per line)
    #[arg(long, global = true)]
    targets: Option<PathBuf>,

    /// Extra accepted guesses (one word per line)
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Where daily rounds are saved (default: ~/.xordle.json)
    #[arg(long, global = true)]
    store: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Show the puzzle for a day or practice session
    Puzzle {
        /// Reveal the targets
        #[arg(long)]
        cheat: bool,
    },

    /// Generate puzzles for a range of seeds and check them
    Verify {
        /// First seed to check
        #[arg(long, default_value_t = 1)]
        from: u32,

        /// Number of seeds to check
        #[arg(short = 'n', long, default_value_t = 1000)]
        count: u32,
    },
}

#[derive(Clone, Copy)]
enum Interface {
    Tui,
    Lines,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    run(Cli::parse())
}

fn run(mut cli: Cli) -> Result<()> {
    let command = cli.command.take().unwrap_or(Commands::Play);
    let config = game_config(&cli)?;
    let catalog = load_catalog(&cli, &config)?;
    let mode = resolve_mode(&cli);

    match command {
        Commands::Play => run_play_command(&cli, &config, &catalog, mode, Interface::Tui),
        Commands::Simple => run_play_command(&cli, &config, &catalog, mode, Interface::Lines),
        Commands::Puzzle { cheat } => {
            let report = describe_puzzle(&config, &catalog, mode)
                .with_context(|| format!("failed to generate {}", mode.label()))?;
            print_puzzle_report(&report, cheat, config.color_blind);
            Ok(())
        }
        Commands::Verify { from, count } => run_verify_command(&config, &catalog, from, count),
    }
}

fn game_config(cli: &Cli) -> Result<GameConfig> {
    // The opening guess is on the board before the player types anything
    ensure!(
        cli.max_guesses > 1,
        "--max-guesses must leave room for a guess after the opening one"
    );
    Ok(GameConfig {
        max_guesses: cli.max_guesses,
        cutoff: cli.cutoff.clone(),
        max_draws: cli.max_draws,
        color_blind: cli.color_blind,
    })
}

fn resolve_mode(cli: &Cli) -> GameMode {
    match (cli.practice, cli.day) {
        (Some(session), _) => GameMode::Practice {
            session: session.unwrap_or_else(|| rand::rng().random_range(1..=999_999)),
        },
        (None, Some(day)) => GameMode::Daily { day },
        (None, None) => GameMode::today(),
    }
}

/// Build the catalog from the embedded lists or the files given on the command line
fn load_catalog(cli: &Cli, config: &GameConfig) -> Result<Catalog> {
    if cli.targets.is_none() && cli.dictionary.is_none() {
        return Catalog::embedded(&config.cutoff).context("failed to build embedded catalog");
    }

    let targets = match &cli.targets {
        Some(path) => read_list(path)?,
        None => TARGETS.iter().map(ToString::to_string).collect(),
    };
    let dictionary = match &cli.dictionary {
        Some(path) => read_list(path)?,
        None => DICTIONARY.iter().map(ToString::to_string).collect(),
    };
    Catalog::new(&targets, &dictionary, &config.cutoff).context("failed to build catalog")
}

fn read_list(path: &Path) -> Result<Vec<String>> {
    let words = load_from_file(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

fn default_store_path() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map_or_else(|| PathBuf::from(".xordle.json"), |home| {
            PathBuf::from(home).join(".xordle.json")
        })
}

fn run_play_command(
    cli: &Cli,
    config: &GameConfig,
    catalog: &Catalog,
    mode: GameMode,
    interface: Interface,
) -> Result<()> {
    // Practice rounds are never written to disk
    if mode.is_daily() {
        let path = cli.store.clone().unwrap_or_else(default_store_path);
        let store = JsonFileStore::open(&path)
            .with_context(|| format!("failed to open store {}", path.display()))?;
        info!("saving daily rounds to {}", store.path().display());
        play(config, catalog, mode, interface, store)
    } else {
        play(config, catalog, mode, interface, MemoryStore::new())
    }
}

fn play<S: RoundStore>(
    config: &GameConfig,
    catalog: &Catalog,
    mode: GameMode,
    interface: Interface,
    store: S,
) -> Result<()> {
    use xordle::interactive::{App, run_tui};

    let puzzle = config
        .generate(catalog, mode)
        .with_context(|| format!("failed to generate {}", mode.label()))?
        .puzzle;
    let mut session = Session::open(puzzle, config.max_guesses, mode.round_id(), store);

    match interface {
        Interface::Tui => {
            let app = App::new(session, catalog, mode.label(), config.color_blind);
            run_tui(app)
        }
        Interface::Lines => {
            let options = SimpleOptions {
                label: mode.label(),
                color_blind: config.color_blind,
            };
            run_simple(&mut session, catalog, &options).context("failed to run simple mode")
        }
    }
}

fn run_verify_command(config: &GameConfig, catalog: &Catalog, from: u32, count: u32) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Puzzle Generator Verification ");
    println!("{}", "═".repeat(70));
    println!(
        "\nChecking seeds {from}..{} over {} eligible words (cutoff '{}')\n",
        from.saturating_add(count),
        catalog.eligible().len(),
        config.cutoff
    );

    let stats = run_verify(&config.generator(catalog), from, count, true);
    print_verify_statistics(&stats);

    if !stats.failures.is_empty() {
        bail!("{} of {} seeds failed", stats.failures.len(), stats.checked);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("xordle").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_play() {
        let cli = parse(&["--day", "4"]);
        assert!(cli.command.is_none());
        assert!(matches!(resolve_mode(&cli), GameMode::Daily { day: 4 }));
    }

    #[test]
    fn practice_session_is_parsed() {
        let cli = parse(&["--practice", "7", "puzzle"]);
        assert!(matches!(resolve_mode(&cli), GameMode::Practice { session: 7 }));

        let cli = parse(&["--practice"]);
        assert!(matches!(resolve_mode(&cli), GameMode::Practice { .. }));
    }

    #[test]
    fn day_conflicts_with_practice() {
        let result = Cli::try_parse_from(["xordle", "--day", "2", "--practice", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn single_guess_budget_is_rejected() {
        let err = game_config(&parse(&["--max-guesses", "1"])).unwrap_err();
        assert!(err.to_string().contains("--max-guesses"));

        let config = game_config(&parse(&["--max-guesses", "2"])).unwrap();
        assert_eq!(config.max_guesses, 2);
    }

    #[test]
    fn puzzle_command_runs() {
        run(parse(&["--day", "3", "puzzle", "--cheat"])).unwrap();
    }

    #[test]
    fn verify_command_runs() {
        run(parse(&["verify", "--from", "1", "-n", "5"])).unwrap();
    }

    #[test]
    fn bad_budget_stops_dispatch() {
        assert!(run(parse(&["--max-guesses", "1", "puzzle"])).is_err());
    }
}
