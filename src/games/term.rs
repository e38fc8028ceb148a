use crate::error::PortalError;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};
use std::time::Duration;

pub const FRAME_MS: u64 = 33;

pub struct TerminalGuard
{
    stdout: Stdout,
}

impl TerminalGuard
{
    pub fn enter() -> io::Result<Self>
    {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide)?;
        Ok(Self { stdout })
    }

    /// Replaces the screen with `lines`.
    pub fn present(&mut self, lines: &[String]) -> Result<(), PortalError>
    {
        let output = format!("{}\r\n", lines.join("\r\n"));
        queue!(self.stdout, MoveTo(0, 0), Clear(ClearType::All))?;
        self.stdout.write_all(output.as_bytes())?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalGuard
{
    fn drop(&mut self)
    {
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb
{
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb
{
    pub const fn new(r: u8, g: u8, b: u8) -> Self
    {
        Self { r, g, b }
    }
}

pub fn fg(color: Rgb, text: &str) -> String
{
    format!("\x1b[38;2;{};{};{}m{}\x1b[0m", color.r, color.g, color.b, text)
}

pub fn bg(color: Rgb, text: &str) -> String
{
    format!("\x1b[48;2;{};{};{}m{}\x1b[0m", color.r, color.g, color.b, text)
}

pub fn theme_color(theme: &str) -> Rgb
{
    match theme {
        "emerald" => Rgb::new(16, 185, 129),
        "amber" => Rgb::new(245, 158, 11),
        "rose" => Rgb::new(244, 63, 94),
        "blue" => Rgb::new(59, 130, 246),
        "yellow" => Rgb::new(234, 179, 8),
        _ => Rgb::new(212, 212, 216),
    }
}

pub fn icon_glyph(icon: &str) -> char
{
    match icon {
        "Zap" => '~',
        "Grid3X3" => '#',
        "Cpu" => '*',
        "Puzzle" => '+',
        "Circle" => 'o',
        _ => '?',
    }
}

/// Turns a raw key event into the code the games react to.
///
/// Releases are dropped. Ctrl-C comes back as `KeyCode::Esc` so every screen
/// quits the same way.
pub fn map_key(event: KeyEvent) -> Option<KeyCode>
{
    if event.kind == KeyEventKind::Release {
        return None;
    }
    match event.code {
        KeyCode::Char('c') | KeyCode::Char('C') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyCode::Esc)
        }
        code => Some(code),
    }
}

/// Drains pending key presses without blocking.
pub fn poll_keys() -> Result<Vec<KeyCode>, PortalError>
{
    let mut keys = Vec::new();
    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(key) = event::read()? {
            keys.extend(map_key(key));
        }
    }
    Ok(keys)
}

/// Blocks until SPACE, ESC or Ctrl-C is pressed.
pub fn wait_for_space() -> Result<(), PortalError>
{
    while event::poll(Duration::from_millis(0))? {
        let _ = event::read()?;
    }

    loop {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(KeyCode::Char(' ') | KeyCode::Esc) = map_key(key) {
                    break;
                }
            }
        }
    }
    Ok(())
}
