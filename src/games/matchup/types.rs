//! Match-Up data structures.
//!
//! A memory game: a shuffled deck holds every party symbol twice, the player
//! flips two cards at a time, and equal pairs stay revealed.

use crate::core::constants::*;
use crate::core::timer::TimerQueue;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Glyphs for the party symbols, in table order.
pub const PARTY_SYMBOLS: [&str; 8] = ["🎂", "🎁", "🎈", "🥳", "👑", "✨", "🍾", "🎶"];

/// Four-column ASCII names, used by the compact one-line card layout.
pub const PARTY_SYMBOL_NAMES: [&str; 8] = [
    "cake", "gift", "blln", "yay!", "crwn", "spkl", "fizz", "tune",
];

/// A symbol token: an index into [`PARTY_SYMBOLS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(pub u8);

impl Symbol {
    pub fn glyph(self) -> &'static str {
        PARTY_SYMBOLS[self.0 as usize % PARTY_SYMBOLS.len()]
    }

    pub fn name(self) -> &'static str {
        PARTY_SYMBOL_NAMES[self.0 as usize % PARTY_SYMBOL_NAMES.len()]
    }
}

/// Tunables for a Match-Up game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchUpConfig {
    /// Distinct pairs on the board (clamped to the symbol table size).
    pub pairs: usize,
    pub columns: usize,
    pub match_delay_ms: u64,
    pub mismatch_delay_ms: u64,
    pub completion_delay_ms: u64,
}

impl Default for MatchUpConfig {
    fn default() -> Self {
        Self {
            pairs: PARTY_SYMBOLS.len(),
            columns: MATCHUP_COLUMNS,
            match_delay_ms: MATCH_RESOLVE_DELAY_MS,
            mismatch_delay_ms: MISMATCH_RESOLVE_DELAY_MS,
            completion_delay_ms: COMPLETION_DELAY_MS,
        }
    }
}

impl MatchUpConfig {
    pub fn pair_count(&self) -> usize {
        self.pairs.clamp(1, PARTY_SYMBOLS.len())
    }

    pub fn column_count(&self) -> usize {
        self.columns.max(1)
    }
}

/// Derived display status of a card slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStatus {
    Hidden,
    Flipped,
    Matched,
}

/// How well the player did, by move count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceTier {
    Excellent,
    Good,
    KeepPracticing,
}

impl PerformanceTier {
    pub fn from_moves(moves: u32) -> Self {
        if moves <= EXCELLENT_MOVES {
            Self::Excellent
        } else if moves <= GOOD_MOVES {
            Self::Good
        } else {
            Self::KeepPracticing
        }
    }
}

/// Completion signal consumed by the display as a modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub title: String,
    pub message: String,
    pub moves: u32,
    pub tier: PerformanceTier,
}

impl Completion {
    pub fn for_moves(moves: u32) -> Self {
        let tier = PerformanceTier::from_moves(moves);
        let summary = format!("You completed the game in {} moves!", moves);
        let message = match tier {
            PerformanceTier::Excellent => format!(
                "🎉 Amazing memory! {} That's a party-level performance!",
                summary
            ),
            PerformanceTier::Good => format!("Nice job! {} You found all the gifts.", summary),
            PerformanceTier::KeepPracticing => format!(
                "Keep practicing! {} Try again for a better score!",
                summary
            ),
        };
        Self {
            title: "🥳 Match Found! 🍾".to_string(),
            message,
            moves,
            tier,
        }
    }
}

/// Deferred engine work, fired by the timer queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchUpEvent {
    /// The flipped pair matched; record the symbol.
    ResolveMatch(Symbol),
    /// The flipped pair differed; hide both again.
    ResolveMismatch,
    /// Every pair is matched; open the completion modal.
    ShowCompletion,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct MatchUpGame {
    pub config: MatchUpConfig,
    /// Each symbol exactly twice, in shuffled order.
    pub deck: Vec<Symbol>,
    /// Face-up, unresolved slot indices (at most 2).
    pub flipped: Vec<usize>,
    /// Symbols resolved as pairs.
    pub matched: Vec<Symbol>,
    /// Completed flip-pair evaluations.
    pub moves: u32,
    /// Set while a pair is being resolved.
    pub locked: bool,
    /// Open completion modal, if any.
    pub completion: Option<Completion>,
    /// Slot under the terminal cursor.
    pub cursor: usize,
    /// Games started on this engine, including restarts.
    pub games_started: u32,
    pub(crate) timers: TimerQueue<MatchUpEvent>,
    pub(crate) rng: StdRng,
}

impl MatchUpGame {
    /// Create a game seeded from OS entropy.
    pub fn new(config: MatchUpConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a reproducible game.
    pub fn with_seed(config: MatchUpConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: MatchUpConfig, mut rng: StdRng) -> Self {
        let deck = shuffled_deck(config.pair_count(), &mut rng);
        Self {
            config,
            deck,
            flipped: Vec::with_capacity(2),
            matched: Vec::new(),
            moves: 0,
            locked: false,
            completion: None,
            cursor: 0,
            games_started: 1,
            timers: TimerQueue::new(),
            rng,
        }
    }

    pub fn total_pairs(&self) -> usize {
        self.deck.len() / 2
    }

    pub fn pairs_found(&self) -> usize {
        self.matched.len()
    }

    pub fn is_complete(&self) -> bool {
        !self.deck.is_empty() && self.matched.len() == self.total_pairs()
    }

    pub fn columns(&self) -> usize {
        self.config.column_count()
    }

    pub fn rows(&self) -> usize {
        self.deck.len().div_ceil(self.columns())
    }

    /// Status of a slot, derived from the flipped and matched sets.
    pub fn status(&self, index: usize) -> CardStatus {
        match self.deck.get(index) {
            Some(symbol) if self.matched.contains(symbol) => CardStatus::Matched,
            Some(_) if self.flipped.contains(&index) => CardStatus::Flipped,
            _ => CardStatus::Hidden,
        }
    }

    /// Number of delayed steps still waiting to fire.
    pub fn pending_timers(&self) -> usize {
        self.timers.pending_count()
    }
}

/// Build a deck holding each of the first `pairs` symbols twice, shuffled
/// uniformly (Fisher–Yates).
pub fn shuffled_deck<R: Rng>(pairs: usize, rng: &mut R) -> Vec<Symbol> {
    let pairs = pairs.min(PARTY_SYMBOLS.len());
    let mut deck: Vec<Symbol> = (0..pairs as u8).chain(0..pairs as u8).map(Symbol).collect();
    deck.shuffle(rng);
    deck
}
