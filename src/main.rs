//! Wordle - CLI
//!
//! Guess the hidden word in the terminal.
//! Exit status: 0 won, 1 bad arguments, 2 dictionary unavailable, 3 lost,
//! 4 terminal I/O failure.

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;
use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wordle::{
    commands::run_play, config::GameConfig, dictionary::DEFAULT_DICTIONARY, game::GameExit,
    output::USAGE,
};

#[derive(Parser, Debug)]
#[command(
    name = "wordle",
    about = "Guess the hidden word with letter-by-letter hints",
    version
)]
struct Cli {
    /// Number of letters per word (3-9)
    #[arg(
        short = 'l',
        long = "len",
        value_name = "word-length",
        default_value_t = 5,
        value_parser = clap::value_parser!(u8).range(3..=9)
    )]
    len: u8,

    /// Number of scored guesses allowed
    #[arg(
        short = 'm',
        long = "max",
        value_name = "max-guesses",
        default_value = "6"
    )]
    max: NonZeroU32,

    /// Seed for answer selection, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Word list to play from
    #[arg(env = "WORDLE_DICTIONARY", default_value = DEFAULT_DICTIONARY)]
    dictionary: PathBuf,
}

impl Cli {
    fn into_config(self) -> GameConfig {
        GameConfig {
            word_length: usize::from(self.len),
            max_attempts: self.max,
            dictionary: self.dictionary,
            seed: self.seed,
        }
    }
}

/// What the command line asked for
#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    /// Play a game with these settings
    Play(GameConfig),
    /// Help or version text was printed
    Info,
    /// Arguments were rejected and the usage line printed
    Usage,
}

/// Accept the classic single-dash spellings `-len` and `-max`
fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| {
            if arg == "-len" {
                OsString::from("--len")
            } else if arg == "-max" {
                OsString::from("--max")
            } else {
                arg
            }
        })
        .collect()
}

/// Parse arguments, printing help to `out` or the usage line to `err`
///
/// The usage line is only coloured when `color` is set, so redirected stderr
/// gets the exact text.
fn parse_invocation<W, E>(
    args: impl IntoIterator<Item = OsString>,
    out: &mut W,
    err: &mut E,
    color: bool,
) -> io::Result<Invocation>
where
    W: Write + ?Sized,
    E: Write + ?Sized,
{
    let error = match Cli::try_parse_from(normalize_args(args)) {
        Ok(cli) => return Ok(Invocation::Play(cli.into_config())),
        Err(error) => error,
    };

    if matches!(
        error.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    ) {
        write!(out, "{}", error.render())?;
        out.flush()?;
        return Ok(Invocation::Info);
    }

    debug!(%error, "invalid arguments");
    if color {
        writeln!(err, "{}", USAGE.yellow())?;
    } else {
        writeln!(err, "{USAGE}")?;
    }
    err.flush()?;
    Ok(Invocation::Usage)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Exit status for a game run; a failed run is a terminal I/O failure
fn exit_status(result: Result<GameExit>) -> GameExit {
    result.unwrap_or_else(|error| {
        eprintln!("{} {error:#}", "error:".red().bold());
        GameExit::Io
    })
}

fn main() -> ExitCode {
    init_tracing();

    // colored only looks at stdout; everything coloured here goes to stderr
    let color = io::stderr().is_terminal();
    colored::control::set_override(color);

    let invocation = parse_invocation(
        std::env::args_os(),
        &mut io::stdout(),
        &mut io::stderr(),
        color,
    );

    let config = match invocation {
        Ok(Invocation::Play(config)) => config,
        Ok(Invocation::Info) => return ExitCode::SUCCESS,
        Ok(Invocation::Usage) => return GameExit::Usage.into(),
        Err(error) => {
            eprintln!("{} cannot write to terminal: {error}", "error:".red().bold());
            return GameExit::Io.into();
        }
    };

    exit_status(play(&config)).into()
}

fn play(config: &GameConfig) -> Result<GameExit> {
    debug!(?config, "starting game");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut input = stdin.lock();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    run_play(config, &mut input, &mut out, &mut err).context("game aborted")
}
