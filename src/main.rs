//! Console Indigo against the computer.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};
use indigo::console::{Printer, Prompt};
use indigo::{Computer, Event, Game, GameError, GameOptions, Reporter, Side};

/// Play Indigo against the computer.
#[derive(Debug, Parser)]
#[command(name = "indigo", version, about)]
struct Args {
    /// Seed for the shuffle and the computer's choices [default: current time].
    #[arg(long)]
    seed: Option<u64>,
    /// Who plays first; asked interactively when omitted.
    #[arg(long, value_enum)]
    first: Option<First>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum First {
    Human,
    Computer,
}

impl From<First> for Side {
    fn from(first: First) -> Self {
        match first {
            First::Human => Self::Human,
            First::Computer => Self::Computer,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), GameError> {
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());
    let mut printer = Printer::new(io::stdout());

    writeln!(io::stdout(), "Indigo Card Game")?;
    let first = match args.first {
        Some(first) => Side::from(first),
        None => match prompt.ask_play_first()? {
            Some(true) => Side::Human,
            Some(false) => Side::Computer,
            None => {
                printer.report(&Event::GameOver)?;
                return Ok(());
            }
        },
    };

    let mut game = Game::new(GameOptions::default().with_first(first), seed);
    game.run(&mut prompt, &mut Computer, &mut printer)?;

    Ok(())
}
