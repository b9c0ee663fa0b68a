//! Snake game logic: run lifecycle, direction arbitration, ticking.

use super::types::*;
use crate::core::constants::MAX_FRAME_DT_MS;
use crate::log;

/// UI-agnostic input actions for Snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeInput {
    Turn(Direction),
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The run is not active; nothing moved.
    Idle,
    Moved,
    Ate,
    /// Ate and crossed a speed milestone.
    SpedUp,
    GameOver,
}

impl SnakeGame {
    /// Begin a fresh run. No-op while a run is in progress.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        self.timers.cancel_all();
        self.speed_banner = None;
        self.snake = initial_body(self.grid_size);
        self.board_filled = false;
        self.food = match spawn_food(&self.snake, self.grid_size, &mut self.rng) {
            Some(food) => food,
            None => self.snake[0],
        };
        self.velocity = Direction::Right;
        self.last_direction = Direction::Right;
        self.score = 0;
        self.tick_interval_ms = self.config.interval_for_score(0);
        self.accumulated_time_ms = 0;
        self.tick_count = 0;
        self.status = SnakeStatus::Snake;
        self.run_state = RunState::Running;
        log!("snake: run started");
    }

    /// Request a direction change, or start a run if none is active.
    ///
    /// A request opposite to the accepted velocity, or to the direction of
    /// the last move, is ignored. The request takes effect on the next tick.
    pub fn set_direction(&mut self, requested: Direction) {
        if !self.is_running() {
            self.start();
            return;
        }
        if requested == self.velocity.opposite() || requested == self.last_direction.opposite() {
            return;
        }
        if requested != self.velocity {
            self.velocity = requested;
        }
    }

    /// Advance by host frame time. Fires one tick per elapsed interval and
    /// returns true if anything visible changed.
    pub fn advance(&mut self, dt_ms: u64) -> bool {
        // Clamp so a stalled terminal cannot burst-simulate.
        let dt_ms = dt_ms.min(MAX_FRAME_DT_MS);
        let mut changed = self.apply_timers(dt_ms);

        if !self.is_running() {
            return changed;
        }

        self.accumulated_time_ms += dt_ms;
        while self.accumulated_time_ms >= self.tick_interval_ms {
            self.accumulated_time_ms -= self.tick_interval_ms;
            let outcome = self.step();
            changed = true;
            match outcome {
                TickOutcome::GameOver | TickOutcome::Idle => break,
                // New interval: the recurring tick restarts from zero.
                TickOutcome::SpedUp => self.accumulated_time_ms = 0,
                TickOutcome::Moved | TickOutcome::Ate => {}
            }
        }
        changed
    }

    fn apply_timers(&mut self, dt_ms: u64) -> bool {
        let mut changed = false;
        for event in self.timers.advance(dt_ms) {
            match event {
                SnakeEvent::ClearSpeedBanner => {
                    self.speed_banner = None;
                    if self.is_running() && self.status == SnakeStatus::SpeedUp {
                        self.status = SnakeStatus::Snake;
                        changed = true;
                    }
                }
            }
        }
        changed
    }

    /// One simulation step.
    pub fn step(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Idle;
        }

        self.tick_count += 1;
        self.last_direction = self.velocity;
        let new_head = self.head().step_wrapped(self.velocity, self.grid_size);

        if self.snake.contains(&new_head) {
            self.game_over();
            return TickOutcome::GameOver;
        }

        self.snake.push_front(new_head);

        if new_head != self.food {
            self.snake.pop_back();
            return TickOutcome::Moved;
        }

        self.score += 1;
        let sped_up = self.score % self.config.milestone.max(1) == 0;
        if sped_up {
            self.speed_up();
        }

        match spawn_food(&self.snake, self.grid_size, &mut self.rng) {
            Some(food) => self.food = food,
            None => {
                self.board_filled = true;
                self.game_over();
                return TickOutcome::GameOver;
            }
        }

        if sped_up {
            TickOutcome::SpedUp
        } else {
            TickOutcome::Ate
        }
    }

    fn speed_up(&mut self) {
        self.tick_interval_ms = self.config.interval_for_score(self.score);
        self.status = SnakeStatus::SpeedUp;
        if let Some(handle) = self.speed_banner.take() {
            self.timers.cancel(handle);
        }
        self.speed_banner = Some(
            self.timers
                .schedule(self.config.speed_up_banner_ms, SnakeEvent::ClearSpeedBanner),
        );
        log!(
            "snake: speed up at score {} ({}ms)",
            self.score,
            self.tick_interval_ms
        );
    }

    fn game_over(&mut self) {
        self.run_state = RunState::GameOver;
        self.status = SnakeStatus::GameOver;
        self.accumulated_time_ms = 0;
        self.timers.cancel_all();
        self.speed_banner = None;
        log!("snake: game over with score {}", self.score);
    }

    /// Halt the run and drop pending status changes.
    pub fn shutdown(&mut self) {
        self.timers.cancel_all();
        self.speed_banner = None;
        if self.is_running() {
            self.run_state = RunState::NotStarted;
        }
        self.accumulated_time_ms = 0;
    }
}

/// Process player input.
pub fn process_input(game: &mut SnakeGame, input: SnakeInput) {
    match input {
        SnakeInput::Turn(direction) => game.set_direction(direction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    const INTERVAL: u64 = 150;

    fn running_game() -> SnakeGame {
        let mut game = SnakeGame::with_seed(SnakeConfig::default(), 11);
        game.start();
        game
    }

    /// Put food somewhere the snake will not reach for a while.
    fn park_food(game: &mut SnakeGame) {
        game.food = Position::new(0, 0);
    }

    #[test]
    fn test_first_direction_starts_run() {
        let mut game = SnakeGame::with_seed(SnakeConfig::default(), 11);
        game.set_direction(Direction::Up);
        assert!(game.is_running());
        // The starting key does not steer.
        assert_eq!(game.velocity, Direction::Right);
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut game = running_game();
        park_food(&mut game);
        game.step();
        let body = game.snake.clone();
        game.start();
        assert_eq!(game.snake, body);
        assert_eq!(game.tick_count, 1);
    }

    #[test]
    fn test_reversal_rejected_turn_accepted() {
        let mut game = running_game();
        game.set_direction(Direction::Left);
        assert_eq!(game.velocity, Direction::Right);
        game.set_direction(Direction::Up);
        assert_eq!(game.velocity, Direction::Up);
    }

    #[test]
    fn test_two_turns_in_one_tick_cannot_reverse() {
        let mut game = running_game();
        park_food(&mut game);
        // Moving right: Up is accepted, then Left is still judged against
        // the committed direction (Right) and rejected.
        game.set_direction(Direction::Up);
        game.set_direction(Direction::Left);
        assert_eq!(game.velocity, Direction::Up);

        assert_eq!(game.step(), TickOutcome::Moved);
        assert_eq!(game.head(), Position::new(10, 9));
        assert!(game.is_running());
    }

    #[test]
    fn test_opposite_of_pending_turn_is_rejected() {
        let mut game = running_game();
        park_food(&mut game);
        game.set_direction(Direction::Up);
        game.set_direction(Direction::Down);
        assert_eq!(game.velocity, Direction::Up);

        game.step();
        assert_eq!(game.head(), Position::new(10, 9));
        assert!(game.is_running());
    }

    #[test]
    fn test_zero_interval_config_still_returns() {
        let config = SnakeConfig {
            initial_interval_ms: 0,
            min_interval_ms: 0,
            ..Default::default()
        };
        let mut game = SnakeGame::with_seed(config, 11);
        game.start();
        park_food(&mut game);
        assert_eq!(game.tick_interval_ms, 1);
        assert!(game.advance(16));
        assert!(game.tick_count <= 16);
    }

    #[test]
    fn test_direction_applies_on_tick_only() {
        let mut game = running_game();
        park_food(&mut game);
        game.set_direction(Direction::Down);
        assert_eq!(game.head(), Position::new(10, 10));
        assert_eq!(game.last_direction, Direction::Right);
        game.step();
        assert_eq!(game.head(), Position::new(10, 11));
        assert_eq!(game.last_direction, Direction::Down);
    }

    #[test]
    fn test_advance_ticks_once_per_interval() {
        let mut game = running_game();
        park_food(&mut game);
        assert!(!game.advance(INTERVAL - 1));
        assert_eq!(game.tick_count, 0);
        assert!(game.advance(1));
        assert_eq!(game.tick_count, 1);
        game.advance(INTERVAL * 2);
        assert_eq!(game.tick_count, 3);
    }

    #[test]
    fn test_advance_clamps_large_dt() {
        let mut game = running_game();
        park_food(&mut game);
        game.advance(60_000);
        // 500ms clamp at 150ms per tick.
        assert_eq!(game.tick_count, 3);
    }

    #[test]
    fn test_idle_game_does_not_tick() {
        let mut game = SnakeGame::with_seed(SnakeConfig::default(), 11);
        assert!(!game.advance(1000));
        assert_eq!(game.step(), TickOutcome::Idle);
        assert_eq!(game.tick_count, 0);
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut game = running_game();
        game.food = Position::new(11, 10);
        assert_eq!(game.step(), TickOutcome::Ate);
        assert_eq!(game.score, 1);
        assert_eq!(game.snake.len(), 4);
        assert!(!game.snake.contains(&game.food));
    }

    #[test]
    fn test_milestone_speeds_up_and_shows_banner() {
        let mut game = running_game();
        game.score = 4;
        game.food = Position::new(11, 10);
        assert_eq!(game.step(), TickOutcome::SpedUp);
        assert_eq!(game.tick_interval_ms, 140);
        assert_eq!(game.status, SnakeStatus::SpeedUp);

        park_food(&mut game);
        game.advance(499);
        assert_eq!(game.status, SnakeStatus::SpeedUp);
        game.advance(1);
        assert_eq!(game.status, SnakeStatus::Snake);
    }

    #[test]
    fn test_speed_up_reschedules_tick() {
        let mut game = running_game();
        game.score = 4;
        game.food = Position::new(11, 10);
        // First tick eats and speeds up; banked time is discarded.
        game.advance(INTERVAL + 100);
        assert_eq!(game.tick_count, 1);
        assert_eq!(game.tick_interval_ms, 140);
        park_food(&mut game);
        game.advance(139);
        assert_eq!(game.tick_count, 1);
        game.advance(1);
        assert_eq!(game.tick_count, 2);
    }

    #[test]
    fn test_self_collision_ends_run_without_mutation() {
        let mut game = running_game();
        park_food(&mut game);
        // A loop where the head's next cell is part of the body.
        game.snake = VecDeque::from(vec![
            Position::new(5, 5),
            Position::new(5, 6),
            Position::new(6, 6),
            Position::new(6, 5),
            Position::new(6, 4),
        ]);
        game.velocity = Direction::Right;
        game.last_direction = Direction::Up;

        let body = game.snake.clone();
        assert_eq!(game.step(), TickOutcome::GameOver);
        assert_eq!(game.run_state, RunState::GameOver);
        assert_eq!(game.status, SnakeStatus::GameOver);
        assert_eq!(game.snake, body);

        // Frozen until restarted.
        game.advance(10_000);
        assert_eq!(game.snake, body);
    }

    #[test]
    fn test_input_after_game_over_restarts() {
        let mut game = running_game();
        game.run_state = RunState::GameOver;
        game.score = 9;
        process_input(&mut game, SnakeInput::Turn(Direction::Down));
        assert!(game.is_running());
        assert_eq!(game.score, 0);
        assert_eq!(game.snake.len(), 3);
        assert_eq!(game.tick_interval_ms, 150);
    }

    #[test]
    fn test_banner_cleared_on_game_over_stays_game_over() {
        let mut game = running_game();
        game.score = 4;
        game.food = Position::new(11, 10);
        game.step();
        game.game_over();
        game.advance(1000);
        assert_eq!(game.status, SnakeStatus::GameOver);
    }

    #[test]
    fn test_filling_board_ends_run() {
        let config = SnakeConfig {
            grid_size: 4,
            ..Default::default()
        };
        let mut game = SnakeGame::with_seed(config, 3);
        game.start();
        // Body covers every cell except (3, 0), which holds the food; the
        // head at (2, 0) moves right onto it.
        let mut body: VecDeque<Position> = VecDeque::new();
        body.push_back(Position::new(2, 0));
        for y in 1..4 {
            for x in 0..4 {
                body.push_back(Position::new(x, y));
            }
        }
        body.push_back(Position::new(1, 0));
        body.push_back(Position::new(0, 0));
        game.snake = body;
        game.food = Position::new(3, 0);
        game.velocity = Direction::Right;
        game.last_direction = Direction::Right;

        assert_eq!(game.step(), TickOutcome::GameOver);
        assert!(game.board_filled);
        assert_eq!(game.score, 1);
    }

    #[test]
    fn test_shutdown_halts_run() {
        let mut game = running_game();
        game.shutdown();
        assert!(!game.is_running());
        assert!(!game.advance(1000));
    }
}
