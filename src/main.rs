use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use tile_merge::config::GameConfig;
use tile_merge::game::Game;
use tile_merge::grid::Tile;
use tile_merge::moves::Move;
use tile_merge::session::{Command, InputSource, Renderer, Session, SessionError, SessionState};

#[derive(Debug, Parser)]
#[command(name = "tile-merge", version, about = "Play the sliding-tile merge puzzle in a terminal")]
struct Args {
    /// TOML file with `size`, `target` and `seed`; flags below override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Grid side length (default 4)
    #[arg(long)]
    size: Option<usize>,

    /// Tile value that wins the game (default 2048)
    #[arg(long)]
    target: Option<Tile>,

    /// Seed for tile spawns (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn resolve(&self) -> anyhow::Result<GameConfig> {
        let mut cfg = match &self.config {
            Some(path) => GameConfig::from_toml(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => GameConfig::default(),
        };
        if let Some(size) = self.size { cfg.size = size; }
        if let Some(target) = self.target { cfg.target = target; }
        if self.seed.is_some() { cfg.seed = self.seed; }
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Reads one command per line; unknown input is ignored and read again.
struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn next_command(&mut self) -> Result<Command, SessionError> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(Command::Quit);
            }
            let key = line.trim();
            if key.eq_ignore_ascii_case("q") || key.eq_ignore_ascii_case("quit") {
                return Ok(Command::Quit);
            }
            if let Ok(dir) = key.parse::<Move>() {
                return Ok(Command::Move(dir));
            }
        }
    }
}

struct TextRenderer<W> {
    out: W,
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, game: &Game, state: SessionState) -> Result<(), SessionError> {
        writeln!(self.out, "\n{}", game)?;
        match state.outcome_message() {
            Some(msg) => writeln!(self.out, "{}", msg)?,
            None => write!(self.out, "[w/a/s/d or h/j/k/l, q to quit] > ")?,
        }
        self.out.flush()?;
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let cfg = args.resolve()?;

    let mut session = Session::from_config(&cfg)?;
    let stdin = io::stdin();
    let mut input = LineInput { reader: stdin.lock() };
    let mut renderer = TextRenderer { out: io::stdout() };
    session.run(&mut input, &mut renderer).context("game session failed")?;

    println!("Moves: {}, highest tile: {}", session.moves(), session.game().grid().highest_tile());
    Ok(())
}
