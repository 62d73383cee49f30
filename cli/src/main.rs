use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use sapper_core::{BoardView, PlayEngine};

use crate::command::{Command, USAGE};
use crate::config::ConfigOverrides;

mod command;
mod config;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Play minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with `rows`, `cols` and `mines`
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: ConfigOverrides,

    /// Print a JSON snapshot of the board after each change instead of a grid
    #[arg(long)]
    json: bool,
}

/// Seed from the wall clock, good enough to vary layouts between runs.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn draw(out: &mut impl Write, engine: &PlayEngine, json: bool) -> io::Result<()> {
    let view = BoardView::from_engine(engine);
    if json {
        render::draw_json(out, &view)
    } else {
        render::draw_text(out, &view)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let config = config::resolve(args.config.as_deref(), args.overrides)?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    log::info!("seed: {}, config: {:?}", seed, config);

    let mut engine = PlayEngine::new(config, seed).context("could not start game")?;

    let mut out = io::stdout().lock();
    if !args.json {
        writeln!(out, "{USAGE}")?;
    }
    draw(&mut out, &engine, args.json)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("could not read input")?;

        let signal = match Command::parse(&line) {
            Ok(Command::Signal(signal)) => signal,
            Ok(Command::Empty) => continue,
            Ok(Command::Quit) => break,
            Err(err) => {
                writeln!(out, "{err}\n{USAGE}")?;
                continue;
            }
        };

        match engine.apply(signal) {
            Ok(update) if update.changed => draw(&mut out, &engine, args.json)?,
            Ok(_) => log::debug!("{:?} changed nothing", signal),
            Err(err) => writeln!(out, "{err}")?,
        }
        out.flush()?;
    }

    Ok(())
}
