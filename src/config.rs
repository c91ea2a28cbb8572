use std::time::Duration;

use crate::playground::Playground;

const GRID_WIDTH: i32 = 40;
const GRID_HEIGHT: i32 = 20;
const TICK_INTERVAL_MS: u64 = 100;
const FOOD_COUNT: usize = 5;
const INITIAL_GROWTH: usize = 5;
const SPAWN_ATTEMPT_CAP: usize = 1000;

/// Fixed at construction; nothing here changes while the game runs.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub playground: Playground,
    /// Pause between two ticks
    pub tick_interval: Duration,
    /// Food items kept on the board
    pub food_count: usize,
    /// Steps the snake grows from its head before play starts
    pub initial_growth: usize,
    /// Random draws tried before food placement scans for a free cell
    pub spawn_attempt_cap: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            playground: Playground::new(GRID_WIDTH, GRID_HEIGHT).expect("reference playground is valid"),
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            food_count: FOOD_COUNT,
            initial_growth: INITIAL_GROWTH,
            spawn_attempt_cap: SPAWN_ATTEMPT_CAP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.playground.width(), 40);
        assert_eq!(config.playground.height(), 20);
        assert_eq!(config.tick_interval, Duration::from_millis(100));
        assert_eq!(config.food_count, 5);
        assert_eq!(config.initial_growth, 5);
    }
}
