//! Interactive Flip 7 round at the terminal.
//!
//! Player names come from repeated `--player` flags or, when absent,
//! from interactive prompts. Events go to the console and, unless
//! `--no-log` is set, to a per-game file under `--log-dir`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use flip7::io::{ConsoleSink, FileLogger, StdinDecisions};
use flip7::{GameSetup, MultiSink};

#[derive(Debug, Parser)]
#[command(name = "flip7", about = "Play one round of Flip 7 at the terminal")]
struct Args {
    /// Player name (repeat for several players). Prompts interactively
    /// when omitted.
    #[arg(long = "player", value_name = "NAME")]
    players: Vec<String>,

    /// Seed for the deck shuffle; omit for a random deal.
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for the per-game event log.
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,

    /// Skip writing the event log file.
    #[arg(long)]
    no_log: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(args) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let names = if args.players.is_empty() {
        prompt_for_players()?
    } else {
        args.players
    };

    let mut setup = GameSetup::new(names).context("invalid player setup")?;
    if let Some(seed) = args.seed {
        setup = setup.with_seed(seed);
    }

    let mut events = MultiSink::new();
    events.push(Box::new(ConsoleSink::new()));
    if !args.no_log {
        // A missing log file is a degraded game, not a failed one.
        match FileLogger::open(&args.log_dir) {
            Ok(logger) => {
                log::info!("logging events to {}", logger.path().display());
                events.push(Box::new(logger));
            }
            Err(err) => log::warn!("event log unavailable: {err}"),
        }
    }

    let mut controller = setup.into_controller();
    let mut decisions = StdinDecisions::new();
    controller.play(&mut decisions, &mut events);

    Ok(())
}

/// Ask for a player count and that many names, re-prompting until the
/// answers are usable.
fn prompt_for_players() -> anyhow::Result<Vec<String>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let count = loop {
        let answer = ask(&mut lines, "Number of players: ")?;
        match answer.parse::<usize>() {
            Ok(n) if n > 0 => break n,
            _ => println!("please enter a positive number"),
        }
    };

    let mut names = Vec::with_capacity(count);
    for i in 0..count {
        let name = loop {
            let answer = ask(&mut lines, &format!("Name of player {}: ", i + 1))?;
            if answer.is_empty() {
                println!("names must not be empty");
            } else {
                break answer;
            }
        };
        names.push(name);
    }

    Ok(names)
}

fn ask(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush stdout")?;

    match lines.next() {
        Some(line) => Ok(line.context("failed to read input")?.trim().to_string()),
        None => bail!("input closed during setup"),
    }
}
