#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use std::{error::Error, io::Write, path::PathBuf};

use bsp_dungeon::{
    input::{command_for, Command},
    render::LevelView,
    DungeonRng, GameSession, LevelConfig,
};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute, queue,
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Generate BSP dungeon levels, and optionally walk them.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with level settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<i32>,

    #[arg(long)]
    height: Option<i32>,

    /// Partition depth
    #[arg(short, long)]
    depth: Option<u32>,

    /// Seed for reproducible levels
    #[arg(short, long)]
    seed: Option<u64>,

    /// Walk the level interactively
    #[arg(short, long)]
    play: bool,

    /// Log generation details
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn level_config(&self) -> Result<LevelConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => LevelConfig::load(path)?,
            None => LevelConfig::default(),
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = args.level_config()?;
    let rng = args.seed.map_or_else(DungeonRng::from_entropy, DungeonRng::new);
    let mut session = GameSession::new(config, rng)?;

    if args.play {
        play(&mut session)?;
    } else {
        println!("seed {}", session.seed());
        println!("{}", LevelView::new(session.level(), session.player()));
    }
    Ok(())
}

fn play(session: &mut GameSession) -> Result<(), Box<dyn Error>> {
    let mut stdout = std::io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let result = game_loop(session, &mut stdout);

    execute!(stdout, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result?;
    println!("levels completed: {}", session.levels_completed());
    Ok(())
}

fn game_loop(session: &mut GameSession, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    loop {
        draw(session, out)?;
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match command_for(key.code) {
            Some(Command::Move(direction)) => {
                session.step(direction)?;
            }
            Some(Command::Quit) => return Ok(()),
            None => {}
        }
    }
}

fn draw(session: &GameSession, out: &mut impl Write) -> std::io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    let view = LevelView::new(session.level(), session.player()).to_string();
    for line in view.lines() {
        // Raw mode does not translate '\n' into a carriage return.
        write!(out, "{line}\r\n")?;
    }
    write!(
        out,
        "seed {}  levels {}  arrows/hjklyubn move, q quits\r\n",
        session.seed(),
        session.levels_completed()
    )?;
    out.flush()
}
