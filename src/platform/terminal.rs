//! Terminal backend for the native binary
//!
//! Translates crossterm key events into [`KeyEvent`]s, writes a
//! [`TextCanvas`] in color, and owns the raw-mode session.
//!
//! Most terminals only report presses (and auto-repeats), never releases.
//! When the terminal cannot report releases, a held key is treated as
//! released once no repeat for it has arrived within [`HOLD_TIMEOUT`].

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};

use super::input::{Key, KeyEvent};
use crate::renderer::{Style, TextCanvas, colors};

/// Longest gap between auto-repeats before a key counts as released
pub const HOLD_TIMEOUT: Duration = Duration::from_millis(500);

/// Game key bound to a terminal key code
pub fn key_for(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Key::from_name(c.encode_utf8(&mut [0; 4])),
        KeyCode::Up => Key::from_name("up"),
        KeyCode::Down => Key::from_name("down"),
        KeyCode::Esc => Key::from_name("escape"),
        _ => None,
    }
}

/// Turns terminal events into game key events
#[derive(Debug, Clone)]
pub struct TerminalInput {
    reports_release: bool,
    /// Direction keys believed held, with the time of their last press
    held: Vec<(Key, Instant)>,
}

impl TerminalInput {
    pub fn new(reports_release: bool) -> Self {
        Self {
            reports_release,
            held: Vec::new(),
        }
    }

    /// Translate one terminal event; `None` for anything the game ignores
    pub fn translate(&mut self, event: &Event, now: Instant) -> Option<KeyEvent> {
        let Event::Key(ev) = event else {
            return None;
        };

        // Raw mode swallows SIGINT, so Ctrl+C arrives as a key
        if ev.modifiers.contains(KeyModifiers::CONTROL) && ev.code == KeyCode::Char('c') {
            return (ev.kind != KeyEventKind::Release).then_some(KeyEvent::CloseRequested);
        }

        let key = key_for(ev.code)?;
        match ev.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if !self.reports_release && key.player().is_some() {
                    // A new press replaces whatever that player was holding
                    self.held.retain(|(held, _)| held.player() != key.player());
                    self.held.push((key, now));
                }
                Some(KeyEvent::Pressed(key))
            }
            KeyEventKind::Release => Some(KeyEvent::Released(key)),
        }
    }

    /// Synthetic releases for keys whose repeats have stopped
    pub fn expire(&mut self, now: Instant) -> Vec<KeyEvent> {
        let mut released = Vec::new();
        self.held.retain(|&(key, pressed_at)| {
            let live = now.saturating_duration_since(pressed_at) < HOLD_TIMEOUT;
            if !live {
                released.push(KeyEvent::Released(key));
            }
            live
        });
        released
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb { r, g, b }
}

/// Write the canvas from the top-left corner, one colored run per style.
///
/// Lines end with an explicit cursor move since raw mode does not turn `\n`
/// into a carriage return.
pub fn draw_canvas<W: Write>(out: &mut W, canvas: &TextCanvas) -> io::Result<()> {
    queue!(
        out,
        SetBackgroundColor(rgb(colors::BACKGROUND)),
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    for row in 0..canvas.rows() {
        let mut current: Option<Style> = None;
        for col in 0..canvas.cols() {
            let style = canvas.style_at(col, row);
            if style != current {
                if let Some(style) = style {
                    queue!(out, SetForegroundColor(rgb(style.color())))?;
                }
                current = style;
            }
            queue!(out, Print(canvas.get(col, row).unwrap_or(' ')))?;
        }
        queue!(out, cursor::MoveToNextLine(1))?;
    }

    queue!(out, ResetColor)?;
    out.flush()
}

/// Raw mode plus the alternate screen; restored on drop
#[derive(Debug)]
pub struct TerminalSession {
    reports_release: bool,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // From here on, dropping the session undoes whatever was set up
        let mut session = Self {
            reports_release: false,
        };

        let mut out = io::stdout();
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
            session.reports_release = true;
        }
        log::debug!(
            "Terminal session started (key releases reported: {})",
            session.reports_release
        );
        Ok(session)
    }

    /// True if the terminal sends key release events
    pub fn reports_release(&self) -> bool {
        self.reports_release
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if self.reports_release {
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(out, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        if let Err(err) = terminal::disable_raw_mode() {
            log::warn!("Failed to restore terminal: {}", err);
        }
    }
}
