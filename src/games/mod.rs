//! Arcade minigames: Match-Up and Snake, side by side.

pub mod matchup;
pub mod snake;

pub use matchup::{MatchUpConfig, MatchUpGame, MatchUpInput};
pub use snake::{Direction, SnakeConfig, SnakeGame, SnakeInput};

/// Which arcade game receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcadeFocus {
    MatchUp,
    Snake,
}

impl ArcadeFocus {
    pub fn toggled(self) -> Self {
        match self {
            Self::MatchUp => Self::Snake,
            Self::Snake => Self::MatchUp,
        }
    }
}

/// Input routed to one of the arcade games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcadeInput {
    MatchUp(MatchUpInput),
    Snake(SnakeInput),
    SwitchFocus,
}

/// The arcade page: both games, each unaware of the other.
#[derive(Debug, Clone)]
pub struct Arcade {
    pub matchup: MatchUpGame,
    pub snake: SnakeGame,
    pub focus: ArcadeFocus,
}

impl Arcade {
    pub fn new(matchup: MatchUpConfig, snake: SnakeConfig, seed: Option<u64>) -> Self {
        let (matchup, snake) = match seed {
            Some(seed) => (
                MatchUpGame::with_seed(matchup, seed),
                // Distinct stream so the two games do not mirror each other.
                SnakeGame::with_seed(snake, seed.wrapping_add(1)),
            ),
            None => (MatchUpGame::new(matchup), SnakeGame::new(snake)),
        };
        Self {
            matchup,
            snake,
            focus: ArcadeFocus::MatchUp,
        }
    }

    /// Advance both games by host frame time. Returns true if either changed.
    pub fn advance(&mut self, dt_ms: u64) -> bool {
        let matchup_changed = self.matchup.tick(dt_ms);
        let snake_changed = self.snake.advance(dt_ms);
        matchup_changed || snake_changed
    }

    pub fn handle_input(&mut self, input: ArcadeInput) {
        match input {
            ArcadeInput::MatchUp(input) => matchup::process_input(&mut self.matchup, input),
            ArcadeInput::Snake(input) => snake::process_input(&mut self.snake, input),
            ArcadeInput::SwitchFocus => self.focus = self.focus.toggled(),
        }
    }

    /// Cancel every pending timer in both games.
    pub fn shutdown(&mut self) {
        self.matchup.shutdown();
        self.snake.shutdown();
    }
}
