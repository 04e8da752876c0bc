use std::fs::File;
use std::io::{stdout, BufWriter, Stdout, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use room_games::combat::Arena;
use room_games::config::GameConfig;
use room_games::controller::RoomGame;
use room_games::display::TerminalSurface;
use room_games::error::Result;
use room_games::input::InputState;
use room_games::levels;
use room_games::render::{render_arena, render_room_game};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum GameKind {
    /// Walk through four rooms collecting gems
    Explorer,
    /// Click-only scene with a key, a chest and a locked door
    Adventure,
    /// Rooms to explore plus objects to click
    Hybrid,
    /// Clear the arena of bouncing enemies
    Arena,
}

impl GameKind {
    fn title(self) -> &'static str {
        match self {
            GameKind::Explorer => "Multi-Room Top-Down Game",
            GameKind::Adventure => "Point & Click Adventure Demo",
            GameKind::Hybrid => "Hybrid Point & Click + Top-Down Adventure",
            GameKind::Arena => "Top-Down Combat Game",
        }
    }
}

/// Small room-based terminal games
#[derive(Parser, Debug)]
#[command(name = "room_games")]
#[command(version, about = "Explore rooms, click objects, clear the arena", long_about = None)]
struct Args {
    /// Which game to play
    #[arg(value_enum)]
    game: GameKind,

    /// Seed for level generation and enemy spawns
    #[arg(long)]
    seed: Option<u64>,

    /// Target frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the log
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ── Terminal session ──────────────────────────────────────────────────────────

/// Owns the terminal for the lifetime of a game.  Dropping it always
/// restores the terminal, even on an error path.
struct TerminalSession {
    out: BufWriter<Stdout>,
    keyboard_enhanced: bool,
}

impl TerminalSession {
    fn start(title: &str) -> Result<Self> {
        // Built first so a failure below still runs the restore in `drop`.
        let mut session = TerminalSession {
            out: BufWriter::new(stdout()),
            keyboard_enhanced: false,
        };

        terminal::enable_raw_mode()?;
        session.out.execute(terminal::EnterAlternateScreen)?;
        session.out.execute(cursor::Hide)?;
        session.out.execute(EnableMouseCapture)?;
        session.out.execute(terminal::SetTitle(title))?;

        // Request key-release (and key-repeat) events from the terminal.
        // kitty-protocol terminals support this; others fall back gracefully.
        session.keyboard_enhanced = session
            .out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();

        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.keyboard_enhanced {
            let _ = self.out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = self.out.execute(DisableMouseCapture);
        let _ = self.out.execute(cursor::Show);
        let _ = self.out.execute(terminal::LeaveAlternateScreen);
        let _ = self.out.flush();
        let _ = terminal::disable_raw_mode();
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum Game {
    Rooms(RoomGame),
    Arena { arena: Arena, rng: StdRng },
}

impl Game {
    fn new(kind: GameKind, mut rng: StdRng) -> Self {
        match kind {
            GameKind::Explorer => Game::Rooms(levels::explorer(&mut rng)),
            GameKind::Adventure => Game::Rooms(levels::adventure()),
            GameKind::Hybrid => Game::Rooms(levels::hybrid(&mut rng)),
            GameKind::Arena => Game::Arena {
                arena: Arena::new(&mut rng),
                rng,
            },
        }
    }
}

fn game_loop<W: Write>(
    surface: &mut TerminalSurface<W>,
    game: &mut Game,
    config: &GameConfig,
    rx: &mpsc::Receiver<Event>,
) -> Result<()> {
    let frame_time = config.frame_duration();
    let mut input = InputState::new(config.hold_window, surface.size());

    loop {
        let frame_start = Instant::now();
        input.begin_frame();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            if let Event::Resize(cols, rows) = ev {
                surface.resize(cols, rows);
            }
            input.handle_event(&ev);
        }
        let frame = input.take_frame();
        if frame.quit {
            info!(frame = input.frame(), "quit requested");
            return Ok(());
        }

        match game {
            Game::Rooms(rooms) => {
                rooms.update(frame.keys, &frame.clicks)?;
                render_room_game(surface, rooms)?;
            }
            Game::Arena { arena, rng } => {
                if frame.restart {
                    arena.restart(rng);
                }
                arena.update(frame.keys, frame.attack);
                render_arena(surface, arena)?;
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(path: &Path) {
    let file = match File::create(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("logging disabled: cannot create {}: {}", path.display(), e);
            return;
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(fps) = args.fps {
        config.fps = fps;
    }
    if let Some(path) = &args.log_file {
        config.log_file = path.clone();
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;
    init_logging(&config.log_file);

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(game = ?args.game, seed = ?config.seed, fps = config.fps, "starting");

    let mut game = Game::new(args.game, rng);

    let result = {
        let mut session = TerminalSession::start(args.game.title())?;
        let (cols, rows) = terminal::size()?;

        // Dedicate a thread exclusively to blocking event reads, sending them
        // through a channel so the game loop never has to block on I/O.
        let (tx, rx) = mpsc::channel::<Event>();
        thread::spawn(move || loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
                Err(e) => {
                    warn!(error = %e, "input thread stopped");
                    break;
                }
            }
        });

        let mut surface = TerminalSurface::new(&mut session.out, cols, rows);
        game_loop(&mut surface, &mut game, &config, &rx)
    };

    if let Err(e) = &result {
        error!(error = %e, "fatal");
    }
    result
}
