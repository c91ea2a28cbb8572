//! Capabilities the game needs from the outside world: drawing cells and reading keys.

use crate::coords::Coords;
use crate::snake::Direction;

pub trait Renderer {
    fn write_symbol(&mut self, at: Coords, symbol: char);

    fn write_text(&mut self, at: Coords, text: &str);

    /// Pushes queued writes to the screen. Called once per tick.
    fn flush(&mut self) {}
}

pub trait InputSource {
    /// Returns the next queued direction key, if any. Must never block.
    fn try_read_direction(&mut self) -> Option<Direction>;

    /// Blocks for exactly one keypress and reports whether it is one of `accepted`.
    /// Comparison is case-sensitive; pass several characters to take e.g. both `y` and `Y`
    /// from that single keypress.
    fn read_confirmation(&mut self, accepted: &[char]) -> bool;

    /// Whether the player asked to leave mid-game.
    fn quit_requested(&self) -> bool {
        false
    }
}
