//! Snake game data structures.
//!
//! Classic snake on a wrapping grid: eat food to grow, every fifth bite
//! speeds the game up, and running into your own body ends the run.

use crate::core::constants::*;
use crate::core::timer::{TimerHandle, TimerQueue};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// Tunables for a Snake game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Cells per side of the square grid.
    pub grid_size: i16,
    pub initial_interval_ms: u64,
    pub min_interval_ms: u64,
    /// Interval reduction per milestone reached.
    pub speed_step_ms: u64,
    /// Food eaten between speed-ups.
    pub milestone: u32,
    pub speed_up_banner_ms: u64,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            grid_size: SNAKE_GRID_SIZE,
            initial_interval_ms: SNAKE_INITIAL_INTERVAL_MS,
            min_interval_ms: SNAKE_MIN_INTERVAL_MS,
            speed_step_ms: SNAKE_SPEED_STEP_MS,
            milestone: SNAKE_MILESTONE,
            speed_up_banner_ms: SNAKE_SPEED_UP_BANNER_MS,
        }
    }
}

impl SnakeConfig {
    /// Grid side, clamped between the starting snake and `SNAKE_MAX_GRID_SIZE`.
    pub fn grid(&self) -> i16 {
        self.grid_size
            .clamp(SNAKE_INITIAL_LENGTH + 1, SNAKE_MAX_GRID_SIZE)
    }

    /// Tick interval for a given score. Never below 1 ms.
    pub fn interval_for_score(&self, score: u32) -> u64 {
        let milestones = (score / self.milestone.max(1)) as u64;
        self.initial_interval_ms
            .saturating_sub(milestones.saturating_mul(self.speed_step_ms))
            .max(self.min_interval_ms)
            .max(1)
    }
}

/// Cardinal direction for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) delta for this direction.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// A direction token that named no direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError(pub String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized direction token {:?}", self.0)
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts browser key names (`ArrowUp`) and plain words (`up`).
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_ascii_lowercase().as_str() {
            "arrowup" | "up" => Ok(Self::Up),
            "arrowdown" | "down" => Ok(Self::Down),
            "arrowleft" | "left" => Ok(Self::Left),
            "arrowright" | "right" => Ok(Self::Right),
            _ => Err(ParseDirectionError(token.to_string())),
        }
    }
}

/// A position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Step one cell in `direction`, wrapping at the edges of a `size`-square grid.
    pub fn step_wrapped(self, direction: Direction, size: i16) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: (self.x + dx).rem_euclid(size),
            y: (self.y + dy).rem_euclid(size),
        }
    }
}

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotStarted,
    Running,
    GameOver,
}

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeStatus {
    Snake,
    SpeedUp,
    GameOver,
}

impl SnakeStatus {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Snake => "SNAKE",
            Self::SpeedUp => "SPEED UP!",
            Self::GameOver => "GAME OVER!",
        }
    }
}

/// Deferred status changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeEvent {
    /// The "SPEED UP!" banner has been up long enough.
    ClearSpeedBanner,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct SnakeGame {
    pub config: SnakeConfig,
    pub grid_size: i16,
    pub run_state: RunState,
    pub status: SnakeStatus,

    /// Snake body segments. Head is at the front (index 0).
    pub snake: VecDeque<Position>,
    pub food: Position,
    /// Requested direction, committed on the next tick.
    pub velocity: Direction,
    /// Direction the snake moved on its most recent tick.
    pub last_direction: Direction,

    pub score: u32,
    /// True if the run ended because no free cell was left for food.
    pub board_filled: bool,

    /// Current delay between ticks.
    pub tick_interval_ms: u64,
    /// Time banked toward the next tick.
    pub accumulated_time_ms: u64,
    /// Ticks taken this run.
    pub tick_count: u64,

    pub(crate) timers: TimerQueue<SnakeEvent>,
    pub(crate) speed_banner: Option<TimerHandle>,
    pub(crate) rng: StdRng,
}

impl SnakeGame {
    /// Create an idle game seeded from OS entropy.
    pub fn new(config: SnakeConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a reproducible idle game.
    pub fn with_seed(config: SnakeConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SnakeConfig, mut rng: StdRng) -> Self {
        let grid_size = config.grid();
        let snake = initial_body(grid_size);
        let food = spawn_food(&snake, grid_size, &mut rng).unwrap_or(Position::new(0, 0));
        let tick_interval_ms = config.interval_for_score(0);

        Self {
            config,
            grid_size,
            run_state: RunState::NotStarted,
            status: SnakeStatus::Snake,
            snake,
            food,
            velocity: Direction::Right,
            last_direction: Direction::Right,
            score: 0,
            board_filled: false,
            tick_interval_ms,
            accumulated_time_ms: 0,
            tick_count: 0,
            timers: TimerQueue::new(),
            speed_banner: None,
            rng,
        }
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn head(&self) -> Position {
        self.snake[0]
    }

    /// Score as shown on the board, zero-padded to three digits.
    pub fn score_text(&self) -> String {
        format!("SCORE: {:03}", self.score)
    }

    /// Prompt under the board, if any.
    pub fn prompt(&self) -> Option<String> {
        match self.run_state {
            RunState::Running => None,
            RunState::NotStarted => Some("Press any Arrow Key to Start!".to_string()),
            RunState::GameOver => Some(format!(
                "GAME OVER! Score: {}. Press an Arrow Key to Restart.",
                self.score
            )),
        }
    }
}

/// Three segments centered on the grid, head rightmost.
pub fn initial_body(grid_size: i16) -> VecDeque<Position> {
    let center = grid_size / 2;
    (0..SNAKE_INITIAL_LENGTH)
        .map(|i| Position::new(center - i, center))
        .collect()
}

/// Pick a uniformly random cell not occupied by the snake.
///
/// Returns `None` when the body covers the whole grid.
pub fn spawn_food<R: Rng>(
    snake: &VecDeque<Position>,
    grid_size: i16,
    rng: &mut R,
) -> Option<Position> {
    let free: Vec<Position> = (0..grid_size)
        .flat_map(|y| (0..grid_size).map(move |x| Position::new(x, y)))
        .filter(|pos| !snake.contains(pos))
        .collect();
    free.choose(rng).copied()
}
