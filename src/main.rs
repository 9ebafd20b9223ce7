//! Rect Pong entry point
//!
//! Headless by default: runs a match with no player input, printing every
//! point and the final frame. With `--realtime` the match is played live in
//! the terminal: Q/A move the left paddle, Up/Down the right one, Escape
//! quits.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use clap::Parser;
use crossterm::event;

use rect_pong::Settings;
use rect_pong::consts::TICK_RATE;
use rect_pong::platform::terminal::{TerminalInput, TerminalSession, draw_canvas};
use rect_pong::platform::{Controls, FrameClock};
use rect_pong::renderer::{TextCanvas, draw_match};
use rect_pong::sim::{Match, MatchPhase, Player, TickInput, TickOutcome, tick};

/// Default run length: one minute of play
const DEFAULT_TICKS: u64 = 60 * 60;
const TEXT_COLS: usize = 96;
const TEXT_ROWS: usize = 27;

#[derive(Parser)]
#[command(version, about = "Two-player rectangle Pong")]
struct Cli {
    /// Settings file (JSON); defaults are used if it is missing or invalid
    settings: Option<PathBuf>,
    /// Stop after this many ticks
    #[arg(long, default_value_t = DEFAULT_TICKS)]
    ticks: u64,
    /// Play live in the terminal at the fixed tick rate
    #[arg(long)]
    realtime: bool,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Simulate as fast as possible with both paddles idle
fn run_headless(state: &mut Match, max_ticks: u64) {
    let input = TickInput::default();
    for _ in 0..max_ticks {
        match tick(state, &input) {
            TickOutcome::Scored { player, score } => println!(
                "Round {}: point to {:?} ({} - {})",
                state.round_number - 1,
                player,
                score.get(Player::One),
                score.get(Player::Two)
            ),
            TickOutcome::MatchWon { .. } => break,
            TickOutcome::Continued(_) | TickOutcome::Idle => {}
        }
    }
}

/// Play in the terminal until the tick limit, a quit key, or a won match
fn run_realtime(state: &mut Match, max_ticks: u64) -> io::Result<()> {
    let session = TerminalSession::enter()?;
    let mut keys = TerminalInput::new(session.reports_release());
    let mut controls = Controls::new();
    let mut canvas = TextCanvas::new(&state.playfield, TEXT_COLS, TEXT_ROWS);
    let mut clock = FrameClock::default();
    let mut out = io::stdout();
    let mut last_frame = Instant::now();
    let mut ticks_run = 0u64;

    draw_match(state, &mut canvas);
    draw_canvas(&mut out, &canvas)?;

    while ticks_run < max_ticks && !controls.quit_requested() && !state.is_finished() {
        std::thread::sleep(clock.until_next_tick());
        let now = Instant::now();

        while event::poll(Duration::ZERO)? {
            if let Some(key) = keys.translate(&event::read()?, now) {
                controls.handle(key);
            }
        }
        controls.handle_all(keys.expire(now));

        let due = clock.advance(now - last_frame);
        last_frame = now;
        for _ in 0..due {
            ticks_run += 1;
            if let TickOutcome::MatchWon { .. } = tick(state, &controls.snapshot()) {
                break;
            }
        }

        if due > 0 {
            draw_match(state, &mut canvas);
            draw_canvas(&mut out, &canvas)?;
        }
    }

    if controls.quit_requested() {
        log::info!("Stopped by player after {} ticks", ticks_run);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Rect Pong starting...");

    let settings = match &cli.settings {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    let seed = settings.seed.unwrap_or_else(clock_seed);
    let mut state = Match::new(settings, seed);

    if cli.realtime {
        if let Err(err) = run_realtime(&mut state, cli.ticks) {
            log::error!("Terminal session failed: {}", err);
        }
    } else {
        run_headless(&mut state, cli.ticks);
    }

    let mut canvas = TextCanvas::new(&state.playfield, TEXT_COLS, TEXT_ROWS);
    draw_match(&state, &mut canvas);
    println!("{canvas}");

    let score = state.score();
    match state.phase {
        MatchPhase::Finished { winner } => println!(
            "{:?} wins {} - {}",
            winner,
            score.get(Player::One),
            score.get(Player::Two)
        ),
        MatchPhase::Playing => println!(
            "Final score after {} ticks ({:.1}s of play): {} - {}",
            state.time_ticks,
            state.time_ticks as f64 / TICK_RATE as f64,
            score.get(Player::One),
            score.get(Player::Two)
        ),
    }
}
