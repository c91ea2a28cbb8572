use std::convert::TryFrom;
use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::ClearType;
use crossterm::{cursor, execute, queue, style, terminal};
use tracing::{error, info};

use crate::coords::Coords;
use crate::io::{InputSource, Renderer};
use crate::snake::Direction::{self, *};

/// Draws on the real terminal. Coordinates map directly to (column, row).
pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }

    pub fn setup(&mut self) -> crossterm::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.stdout, terminal::Clear(ClearType::All), cursor::Hide, cursor::DisableBlinking)?;
        info!("Terminal ready");
        Ok(())
    }

    /// Gives the terminal back, leaving the cursor on `park_row` so the board stays visible.
    pub fn restore(&mut self, park_row: u16) -> crossterm::Result<()> {
        execute!(self.stdout, cursor::MoveTo(0, park_row), cursor::Show, cursor::EnableBlinking)?;
        terminal::disable_raw_mode()?;
        println!();
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_at<T: std::fmt::Display + Clone>(&mut self, pos: Coords, content: T) {
        let (x, y) = match (u16::try_from(pos.x), u16::try_from(pos.y)) {
            (Ok(x), Ok(y)) => (x, y),
            _ => {
                error!(x = pos.x, y = pos.y, "Position off screen, skipping write");
                return;
            }
        };

        if let Err(e) = queue!(self.stdout, cursor::MoveTo(x, y), style::Print(content)) {
            error!("Error writing to terminal: {}", e);
        }
    }
}

impl Renderer for TermManager {
    fn write_symbol(&mut self, at: Coords, symbol: char) {
        self.print_at(at, symbol);
    }

    fn write_text(&mut self, at: Coords, text: &str) {
        self.print_at(at, text);
    }

    fn flush(&mut self) {
        if let Err(e) = self.stdout.flush() {
            error!("Error flushing terminal: {}", e);
        }
    }
}

/// Reads keys from the terminal. A Ctrl+C seen while polling is remembered as a quit request.
#[derive(Default)]
pub struct KeyReader {
    quit: bool,
}

impl KeyReader {
    pub fn new() -> Self {
        KeyReader::default()
    }

    fn read_key_blocking(&self) -> Option<KeyEvent> {
        loop {
            match read() {
                Ok(Event::Key(ev)) => return Some(ev),
                Ok(_) => {}
                Err(e) => {
                    error!("Error reading key: {}", e);
                    return None;
                }
            }
        }
    }

    fn next_queued_key(&self) -> Option<KeyEvent> {
        loop {
            match poll(Duration::from_millis(0)) {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => {
                    error!("Error polling keys: {}", e);
                    return None;
                }
            }

            match read() {
                Ok(Event::Key(ev)) => return Some(ev),
                Ok(_) => {}
                Err(e) => {
                    error!("Error reading key: {}", e);
                    return None;
                }
            }
        }
    }
}

impl InputSource for KeyReader {
    fn try_read_direction(&mut self) -> Option<Direction> {
        let ev = self.next_queued_key()?;

        if is_ctrl_c(&ev) {
            info!("Quit requested");
            self.quit = true;
            return None;
        }

        key_direction(&ev)
    }

    fn read_confirmation(&mut self, accepted: &[char]) -> bool {
        match self.read_key_blocking() {
            Some(KeyEvent { code: KeyCode::Char(c), .. }) => accepted.contains(&c),
            _ => false,
        }
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }
}

fn key_direction(ev: &KeyEvent) -> Option<Direction> {
    match ev.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Up),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(Left),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Down),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(Right),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn test_arrows_and_wasd() {
        assert_eq!(key_direction(&key(KeyCode::Up)), Some(Up));
        assert_eq!(key_direction(&key(KeyCode::Char('a'))), Some(Left));
        assert_eq!(key_direction(&key(KeyCode::Char('S'))), Some(Down));
        assert_eq!(key_direction(&key(KeyCode::Right)), Some(Right));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(key_direction(&key(KeyCode::Char('x'))), None);
        assert_eq!(key_direction(&key(KeyCode::Esc)), None);
        assert_eq!(key_direction(&key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_ctrl_c_detection() {
        let ctrl_c = KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
        assert!(is_ctrl_c(&ctrl_c));
        assert!(!is_ctrl_c(&key(KeyCode::Char('c'))));
    }
}
