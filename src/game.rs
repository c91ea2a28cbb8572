use std::thread::sleep;

use rand::Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::coords::Coords;
use crate::error::Result;
use crate::food::{generate_random_food, FoodMap};
use crate::io::{InputSource, Renderer};
use crate::snake::{Direction, Snake};

const WALL_CHAR: char = '\u{25A0}';
const SNAKE_CHAR: char = '\u{25CF}';
const BLANK_CHAR: char = ' ';

const RESTART_KEYS: [char; 2] = ['y', 'Y'];
const LABEL_PADDING: usize = 10;
const PROMPT_WIDTH: usize = 50;

/// State of one play session. Dropped and rebuilt on restart.
#[derive(Debug)]
pub struct Session {
    snake: Snake,
    food: FoodMap,
    score: u32,
}

impl Session {
    pub fn score(&self) -> u32 {
        self.score
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate { score: u32 },
    Crashed,
    BoardFull,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Crashed,
    BoardFull,
    Quit,
}

pub struct SnakeGame<W, I, R> {
    config: GameConfig,
    renderer: W,
    input: I,
    rng: R,
}

impl<W: Renderer, I: InputSource, R: Rng> SnakeGame<W, I, R> {
    pub fn new(config: GameConfig, renderer: W, input: I, rng: R) -> Self {
        SnakeGame { config, renderer, input, rng }
    }

    pub fn renderer_mut(&mut self) -> &mut W {
        &mut self.renderer
    }

    /// Plays sessions until the player declines a restart.
    pub fn run(&mut self) -> Result<()> {
        self.draw_walls();

        loop {
            let mut session = self.new_session()?;
            let end = self.play(&mut session)?;

            if !self.finish(session, end) {
                break;
            }
        }

        Ok(())
    }

    pub fn new_session(&mut self) -> Result<Session> {
        let playground = self.config.playground;
        let mut snake = Snake::new(playground.origin(), Direction::Right.vector())?;
        self.renderer.write_symbol(snake.head(), SNAKE_CHAR);

        for _ in 0..self.config.initial_growth {
            // Tiny boards can't fit the full starting length
            if !playground.is_within(snake.head() + snake.direction()) || !snake.grow() {
                break;
            }
            self.renderer.write_symbol(snake.head(), SNAKE_CHAR);
        }

        let mut session = Session { snake, food: FoodMap::new(), score: 0 };

        for _ in 0..self.config.food_count {
            if !self.add_food(&mut session) {
                break;
            }
        }

        self.write_score_label(session.score);
        self.renderer.flush();

        info!(length = session.snake.len(), food = session.food.len(), "Session started");
        Ok(session)
    }

    pub fn play(&mut self, session: &mut Session) -> Result<SessionEnd> {
        loop {
            match self.tick(session)? {
                TickOutcome::Moved | TickOutcome::Ate { .. } => {}
                TickOutcome::Crashed => return Ok(SessionEnd::Crashed),
                TickOutcome::BoardFull => return Ok(SessionEnd::BoardFull),
                TickOutcome::Quit => return Ok(SessionEnd::Quit),
            }

            sleep(self.config.tick_interval);
        }
    }

    pub fn tick(&mut self, session: &mut Session) -> Result<TickOutcome> {
        self.try_change_direction(&mut session.snake)?;

        if self.input.quit_requested() {
            return Ok(TickOutcome::Quit);
        }

        let snake = &mut session.snake;
        if !snake.grow() || !self.config.playground.is_within(snake.head()) {
            debug!(hit_wall = self.config.playground.is_wall(snake.head()), "Snake crashed");
            return Ok(TickOutcome::Crashed);
        }

        let head = snake.head();
        self.renderer.write_symbol(head, SNAKE_CHAR);

        let outcome = match session.food.remove(head) {
            Some(eaten) => {
                session.score += eaten.score();
                debug!(score = session.score, gained = eaten.score(), "Food eaten");
                self.write_score_label(session.score);

                if !self.add_food(session) && session.food.is_empty() {
                    TickOutcome::BoardFull
                } else {
                    TickOutcome::Ate { score: eaten.score() }
                }
            }
            None => {
                let tail = session.snake.shorten()?;
                self.renderer.write_symbol(tail, BLANK_CHAR);
                TickOutcome::Moved
            }
        };

        self.renderer.flush();
        Ok(outcome)
    }

    /// Shows the end-of-session prompt and reads the player's answer.
    /// Returns whether a new session should start.
    pub fn finish(&mut self, session: Session, end: SessionEnd) -> bool {
        info!(score = session.score(), ?end, "Session ended");

        if end == SessionEnd::Quit {
            self.write_end_message();
            return false;
        }

        let prompt_pos = self.prompt_position();
        let headline = if end == SessionEnd::BoardFull { "You won!" } else { "Game over." };
        self.renderer.write_text(prompt_pos, &format!("{} If you want to restart, press Y.", headline));
        self.renderer.flush();

        let restart = self.input.read_confirmation(&RESTART_KEYS);

        self.renderer.write_text(prompt_pos, &" ".repeat(PROMPT_WIDTH));
        if restart {
            self.clear_board(&session);
        } else {
            self.write_end_message();
        }
        self.renderer.flush();

        info!(restart, "Restart prompt answered");
        restart
    }

    ///////////////////////////////////////////////////////////////////////////

    fn try_change_direction(&mut self, snake: &mut Snake) -> Result<()> {
        if let Some(dir) = self.input.try_read_direction() {
            let vector = dir.vector();

            // Turning straight back would run into the neck
            if vector != -snake.direction() {
                snake.set_direction(vector)?;
            }
        }

        Ok(())
    }

    fn add_food(&mut self, session: &mut Session) -> bool {
        let spawned = generate_random_food(
            &self.config.playground,
            &session.snake,
            &session.food,
            &mut self.rng,
            self.config.spawn_attempt_cap,
        );

        match spawned {
            Some(food) => {
                session.food.insert(food);
                self.renderer.write_symbol(food.position(), food.symbol());
                true
            }
            None => false,
        }
    }

    fn draw_walls(&mut self) {
        for pos in self.config.playground.wall_cells() {
            self.renderer.write_symbol(pos, WALL_CHAR);
        }
        self.renderer.flush();
    }

    fn clear_board(&mut self, session: &Session) {
        let playground = self.config.playground;

        // A head that crashed into the wall sits on a wall glyph
        for pos in session.snake.body().filter(|p| playground.is_within(*p)) {
            self.renderer.write_symbol(pos, BLANK_CHAR);
        }

        for pos in session.food.positions() {
            self.renderer.write_symbol(pos, BLANK_CHAR);
        }
    }

    fn write_score_label(&mut self, score: u32) {
        let pos = Coords::new(self.config.playground.width() + 5, 1);
        self.renderer.write_text(pos, &format!("Score: {}{}", score, " ".repeat(LABEL_PADDING)));
    }

    fn write_end_message(&mut self) {
        let pos = Coords::new(0, self.config.playground.height() + 3);
        self.renderer.write_text(pos, "Thank you for playing!");
    }

    fn prompt_position(&self) -> Coords {
        Coords::new(self.config.playground.width() + 5, 4)
    }
}
