mod consts;
mod error;
mod food;
mod game;
mod geometry;
mod input;
mod snake;
mod state;
mod term;

use std::fs::File;
use std::path::Path;
use std::sync::mpsc::channel;

use anyhow::{Context, Result};
use log::{error, info, LevelFilter};
use simplelog::{Config, WriteLogger};

use crate::consts::{HEIGHT, LOG_FILE, TICK_PERIOD, WIDTH};
use crate::food::FoodPlacer;
use crate::game::Session;
use crate::geometry::Bounds;
use crate::term::TermRenderer;

pub type TermInt = u16;

fn main() -> Result<()> {
    // Set up logging before the terminal is taken over. The game runs
    // without it if the file can't be written.
    if let Err(err) = init_logging(Path::new(LOG_FILE)) {
        eprintln!("running without a log file: {:#}", err);
    }
    info!("starting snake on a {}x{} board", WIDTH, HEIGHT);

    let mut term = TermRenderer::setup()?;

    let result = play(&mut term);

    term.restore();
    match &result {
        Ok(()) => info!("quit"),
        Err(err) => error!("fatal: {:#}", err),
    }
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let log_file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    WriteLogger::init(LevelFilter::Info, Config::default(), log_file).context("failed to initialize logging")
}

fn play(term: &mut TermRenderer) -> Result<()> {
    let (tx, rx) = channel();
    // The reader blocks on the terminal forever; it dies with the process.
    input::spawn_reader(tx)?;

    let placer = FoodPlacer::from_entropy(Bounds::new(WIDTH, HEIGHT));
    Session::new(placer, TICK_PERIOD).run(&rx, term)
}
