use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event},
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use frog_jump::audio::TerminalBell;
use frog_jump::compute::{attempt_jump, init_state, tick};
use frog_jump::config::{GameConfig, SCREEN_TITLE};
use frog_jump::display::{self, atlas::GlyphAtlas, Viewport, C_SKY};
use frog_jump::input::{translate, Command};
use frog_jump::logger;
use frog_jump::physics::PlatformerPhysics;

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

#[derive(Debug, Parser)]
#[command(name = "frog_jump", about = "Jump the frog, squash the flies.")]
struct Args {
    /// TOML file overriding the default game constants.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    /// Write tracing output to this file.
    #[arg(long)]
    log: Option<PathBuf>,

    /// Disable the terminal bell.
    #[arg(long)]
    mute: bool,
}

// ── Menu ──────────────────────────────────────────────────────────────────────

enum MenuResult {
    Start,
    Quit,
}

fn show_menu<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<MenuResult> {
    out.queue(style::SetBackgroundColor(C_SKY))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let lines: &[(&str, Color)] = &[
        ("~  FROG  JUMP  ~", Color::Green),
        ("", Color::White),
        ("SPACE / ↑ : Jump   R : Restart   Q : Quit", Color::White),
        ("Squash flies mid-air to score.", Color::DarkGrey),
        ("", Color::White),
        ("Press SPACE to start", Color::Yellow),
    ];

    let start_row = cy.saturating_sub(lines.len() as u16 / 2 + 1);
    for (i, (msg, color)) in lines.iter().enumerate() {
        out.queue(cursor::MoveTo(
            cx.saturating_sub(msg.chars().count() as u16 / 2),
            start_row + i as u16,
        ))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    out.queue(style::ResetColor)?;
    out.flush()?;

    // Block until the user makes a choice
    loop {
        let Ok(event) = rx.recv() else {
            return Ok(MenuResult::Quit);
        };
        if let Event::Key(key) = event {
            match translate(&key) {
                Some(Command::Jump) => return Ok(MenuResult::Start),
                Some(Command::Quit) => return Ok(MenuResult::Quit),
                _ => {}
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum Outcome {
    Quit,
    Restart,
}

/// Runs one session until the player quits or restarts.  Returns the
/// outcome and the final score.
fn game_loop<W: Write>(
    out: &mut W,
    config: &GameConfig,
    atlas: &GlyphAtlas,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<(Outcome, u32)> {
    let physics = PlatformerPhysics::new(config.gravity);
    let mut audio = TerminalBell::new(!config.sound);
    let mut state = init_state(config.clone(), rng);
    let dt = FRAME.as_secs_f32();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(event) = rx.try_recv() {
            let Event::Key(key) = event else { continue };
            match translate(&key) {
                Some(Command::Jump) => state = attempt_jump(&state, &physics, &mut audio),
                Some(Command::Restart) => return Ok((Outcome::Restart, state.score)),
                Some(Command::Quit) => return Ok((Outcome::Quit, state.score)),
                None => {}
            }
        }

        state = tick(&state, dt, &physics, &mut audio, rng);

        let (cols, rows) = terminal::size()?;
        let view = Viewport::new(cols, rows, config.width, config.height);
        display::render(out, &state, atlas, view)?;
        audio.flush(out)?;
        out.flush()?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log {
        logger::init(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
    }

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if args.mute {
        config.sound = false;
    }
    let atlas = GlyphAtlas::with_overrides(&config.glyphs).context("invalid glyph table")?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    let result = enter_terminal(&mut out).and_then(|()| {
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
                Err(_) => break,
            }
        });

        run(&mut out, &config, &atlas, &mut rng, &rx)
    });

    // Always restore the terminal, even if entering it failed half-way
    let _ = out.execute(style::ResetColor);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("terminal i/o failed")
}

fn enter_terminal<W: Write>(out: &mut W) -> std::io::Result<()> {
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(terminal::SetTitle(SCREEN_TITLE))?;
    out.execute(cursor::Hide)?;
    Ok(())
}

fn run<W: Write>(
    out: &mut W,
    config: &GameConfig,
    atlas: &GlyphAtlas,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    if Viewport::new(cols, rows, config.width, config.height).is_too_small() {
        warn!(cols, rows, "terminal is smaller than the playfield needs");
    }

    if let MenuResult::Quit = show_menu(out, rx)? {
        return Ok(());
    }

    loop {
        info!("session started");
        let (outcome, score) = game_loop(out, config, atlas, rng, rx)?;
        info!(score, "session ended");

        if let Outcome::Quit = outcome {
            break;
        }
    }
    Ok(())
}
