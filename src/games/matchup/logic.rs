//! Match-Up logic: slot selection, pair resolution, completion.

use super::types::*;
use crate::log;

/// UI-agnostic input actions for Match-Up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchUpInput {
    Up,
    Down,
    Left,
    Right,
    /// Flip the card under the cursor (Enter/Space).
    Select,
    /// Deal a fresh game (R).
    Restart,
}

impl MatchUpGame {
    /// Reset every piece of game state and deal a freshly shuffled deck.
    pub fn start_new_game(&mut self) {
        self.timers.cancel_all();
        self.deck = shuffled_deck(self.config.pair_count(), &mut self.rng);
        self.flipped.clear();
        self.matched.clear();
        self.moves = 0;
        self.locked = false;
        self.completion = None;
        self.cursor = 0;
        self.games_started += 1;
        log!("match-up: new game #{} dealt", self.games_started);
    }

    /// Flip a slot face-up. Returns true if the flip was accepted.
    ///
    /// Ignored while locked, for a slot already flipped, for a slot whose
    /// symbol is matched, and for indices off the deck.
    pub fn select_slot(&mut self, index: usize) -> bool {
        let Some(&symbol) = self.deck.get(index) else {
            return false;
        };
        if self.locked || self.flipped.contains(&index) || self.matched.contains(&symbol) {
            return false;
        }
        if self.flipped.len() >= 2 {
            return false;
        }

        self.flipped.push(index);
        if self.flipped.len() == 2 {
            self.evaluate_pair();
        }
        true
    }

    /// Lock input, count the move, and schedule the delayed outcome.
    fn evaluate_pair(&mut self) {
        let (first, second) = (self.deck[self.flipped[0]], self.deck[self.flipped[1]]);
        self.locked = true;
        self.moves += 1;

        if first == second {
            self.timers
                .schedule(self.config.match_delay_ms, MatchUpEvent::ResolveMatch(first));
        } else {
            self.timers
                .schedule(self.config.mismatch_delay_ms, MatchUpEvent::ResolveMismatch);
        }
    }

    /// Advance delayed resolution and completion steps. Returns true if the
    /// visible state changed.
    pub fn tick(&mut self, dt_ms: u64) -> bool {
        let due = self.timers.advance(dt_ms);
        let changed = !due.is_empty();
        for event in due {
            self.apply_event(event);
        }
        changed
    }

    fn apply_event(&mut self, event: MatchUpEvent) {
        match event {
            MatchUpEvent::ResolveMatch(symbol) => {
                if !self.matched.contains(&symbol) {
                    self.matched.push(symbol);
                }
                self.flipped.clear();
                self.locked = false;
                log!(
                    "match-up: matched {} ({}/{})",
                    symbol.name(),
                    self.pairs_found(),
                    self.total_pairs()
                );
                if self.is_complete() {
                    self.timers
                        .schedule(self.config.completion_delay_ms, MatchUpEvent::ShowCompletion);
                }
            }
            MatchUpEvent::ResolveMismatch => {
                self.flipped.clear();
                self.locked = false;
            }
            MatchUpEvent::ShowCompletion => {
                if self.is_complete() {
                    log!("match-up: complete in {} moves", self.moves);
                    self.completion = Some(Completion::for_moves(self.moves));
                }
            }
        }
    }

    /// Cancel every pending step. Nothing mutates the game afterwards until
    /// the next call into it.
    pub fn shutdown(&mut self) {
        self.timers.cancel_all();
    }

    fn move_cursor(&mut self, dx: isize, dy: isize) {
        let len = self.deck.len();
        if len == 0 {
            return;
        }
        let columns = self.columns() as isize;
        let rows = self.rows() as isize;
        let col = (self.cursor as isize % columns + dx).clamp(0, columns - 1);
        let row = (self.cursor as isize / columns + dy).clamp(0, rows - 1);
        let target = (row * columns + col) as usize;
        if target < len {
            self.cursor = target;
        }
    }
}

/// Process player input.
pub fn process_input(game: &mut MatchUpGame, input: MatchUpInput) {
    // Completion modal: only "Play Again" is live.
    if game.completion.is_some() {
        if matches!(input, MatchUpInput::Select | MatchUpInput::Restart) {
            game.start_new_game();
        }
        return;
    }

    match input {
        MatchUpInput::Up => game.move_cursor(0, -1),
        MatchUpInput::Down => game.move_cursor(0, 1),
        MatchUpInput::Left => game.move_cursor(-1, 0),
        MatchUpInput::Right => game.move_cursor(1, 0),
        MatchUpInput::Select => {
            game.select_slot(game.cursor);
        }
        MatchUpInput::Restart => game.start_new_game(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game() -> MatchUpGame {
        MatchUpGame::with_seed(MatchUpConfig::default(), 42)
    }

    /// Slot indices of both copies of `symbol`.
    fn slots_of(game: &MatchUpGame, symbol: Symbol) -> (usize, usize) {
        let slots: Vec<usize> = game
            .deck
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == symbol)
            .map(|(i, _)| i)
            .collect();
        (slots[0], slots[1])
    }

    /// Two slots holding different symbols.
    fn mismatched_slots(game: &MatchUpGame) -> (usize, usize) {
        let second = (1..game.deck.len())
            .find(|&i| game.deck[i] != game.deck[0])
            .unwrap();
        (0, second)
    }

    #[test]
    fn test_single_flip_does_not_count_move() {
        let mut game = new_game();
        assert!(game.select_slot(0));
        assert_eq!(game.flipped, vec![0]);
        assert_eq!(game.moves, 0);
        assert!(!game.locked);
    }

    #[test]
    fn test_reselecting_flipped_slot_is_ignored() {
        let mut game = new_game();
        game.select_slot(3);
        assert!(!game.select_slot(3));
        assert_eq!(game.flipped, vec![3]);
    }

    #[test]
    fn test_out_of_range_slot_is_ignored() {
        let mut game = new_game();
        assert!(!game.select_slot(16));
        assert!(game.flipped.is_empty());
    }

    #[test]
    fn test_matching_pair_resolves_after_short_delay() {
        let mut game = new_game();
        let symbol = game.deck[0];
        let (a, b) = slots_of(&game, symbol);

        game.select_slot(a);
        game.select_slot(b);
        assert!(game.locked);
        assert_eq!(game.moves, 1);

        assert!(!game.tick(499));
        assert_eq!(game.flipped.len(), 2);

        assert!(game.tick(1));
        assert!(game.flipped.is_empty());
        assert!(!game.locked);
        assert_eq!(game.matched, vec![symbol]);
        assert_eq!(game.status(a), CardStatus::Matched);
        assert_eq!(game.status(b), CardStatus::Matched);
    }

    #[test]
    fn test_mismatch_hides_cards_after_long_delay() {
        let mut game = new_game();
        let (a, b) = mismatched_slots(&game);

        game.select_slot(a);
        game.select_slot(b);
        assert_eq!(game.moves, 1);

        game.tick(999);
        assert_eq!(game.flipped.len(), 2);
        game.tick(1);
        assert!(game.flipped.is_empty());
        assert!(game.matched.is_empty());
        assert_eq!(game.status(a), CardStatus::Hidden);
    }

    #[test]
    fn test_locked_board_rejects_flips() {
        let mut game = new_game();
        let (a, b) = mismatched_slots(&game);
        game.select_slot(a);
        game.select_slot(b);

        let other = (0..16).find(|i| *i != a && *i != b).unwrap();
        assert!(!game.select_slot(other));
        assert_eq!(game.flipped.len(), 2);
    }

    #[test]
    fn test_matched_slot_cannot_be_flipped_again() {
        let mut game = new_game();
        let symbol = game.deck[0];
        let (a, b) = slots_of(&game, symbol);
        game.select_slot(a);
        game.select_slot(b);
        game.tick(500);

        assert!(!game.select_slot(a));
        assert!(!game.select_slot(b));
        assert!(game.flipped.is_empty());
    }

    #[test]
    fn test_completion_fires_after_last_pair() {
        let mut game = new_game();
        for s in 0..8u8 {
            let (a, b) = slots_of(&game, Symbol(s));
            game.select_slot(a);
            game.select_slot(b);
            game.tick(500);
        }
        assert!(game.is_complete());
        assert!(game.completion.is_none());

        game.tick(500);
        let done = game.completion.as_ref().expect("completion modal");
        assert_eq!(done.moves, 8);
        assert_eq!(done.tier, PerformanceTier::Excellent);
    }

    #[test]
    fn test_restart_clears_pending_timers() {
        let mut game = new_game();
        let symbol = game.deck[0];
        let (a, b) = slots_of(&game, symbol);
        game.select_slot(a);
        game.select_slot(b);
        assert_eq!(game.pending_timers(), 1);

        game.start_new_game();
        assert_eq!(game.pending_timers(), 0);
        game.tick(5000);
        assert!(game.matched.is_empty());
        assert_eq!(game.moves, 0);
    }

    #[test]
    fn test_shutdown_stops_pending_resolution() {
        let mut game = new_game();
        let (a, b) = mismatched_slots(&game);
        game.select_slot(a);
        game.select_slot(b);

        game.shutdown();
        game.tick(5000);
        assert_eq!(game.flipped.len(), 2);
    }

    #[test]
    fn test_cursor_moves_and_clamps() {
        let mut game = new_game();
        process_input(&mut game, MatchUpInput::Left);
        process_input(&mut game, MatchUpInput::Up);
        assert_eq!(game.cursor, 0);

        process_input(&mut game, MatchUpInput::Right);
        process_input(&mut game, MatchUpInput::Down);
        assert_eq!(game.cursor, 5);

        for _ in 0..10 {
            process_input(&mut game, MatchUpInput::Right);
            process_input(&mut game, MatchUpInput::Down);
        }
        assert_eq!(game.cursor, 15);
    }

    #[test]
    fn test_select_input_flips_cursor_slot() {
        let mut game = new_game();
        process_input(&mut game, MatchUpInput::Right);
        process_input(&mut game, MatchUpInput::Select);
        assert_eq!(game.flipped, vec![1]);
    }

    #[test]
    fn test_modal_only_accepts_play_again() {
        let mut game = new_game();
        game.completion = Some(Completion::for_moves(30));

        process_input(&mut game, MatchUpInput::Right);
        assert_eq!(game.cursor, 0);
        assert!(game.completion.is_some());

        process_input(&mut game, MatchUpInput::Select);
        assert!(game.completion.is_none());
        assert_eq!(game.games_started, 2);
    }
}
