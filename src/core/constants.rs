// Host frame loop
pub const FRAME_POLL_MS: u64 = 16;
pub const MAX_FRAME_DT_MS: u64 = 500;

// Match-Up timing
pub const MATCH_RESOLVE_DELAY_MS: u64 = 500;
pub const MISMATCH_RESOLVE_DELAY_MS: u64 = 1000;
pub const COMPLETION_DELAY_MS: u64 = 500;
pub const MATCHUP_COLUMNS: usize = 4;

// Match-Up performance tiers (inclusive move ceilings)
pub const EXCELLENT_MOVES: u32 = 18;
pub const GOOD_MOVES: u32 = 26;

// Snake grid and pacing
pub const SNAKE_GRID_SIZE: i16 = 20;
pub const SNAKE_MAX_GRID_SIZE: i16 = 255;
pub const SNAKE_INITIAL_LENGTH: i16 = 3;
pub const SNAKE_INITIAL_INTERVAL_MS: u64 = 150;
pub const SNAKE_MIN_INTERVAL_MS: u64 = 50;
pub const SNAKE_SPEED_STEP_MS: u64 = 10;
pub const SNAKE_MILESTONE: u32 = 5;
pub const SNAKE_SPEED_UP_BANNER_MS: u64 = 500;

// Name gate
pub const GATE_INITIAL_DANCE_MS: u64 = 3000;
pub const GATE_SUBMIT_DANCE_MS: u64 = 2000;
pub const GATE_RETRY_DELAY_MS: u64 = 800;
pub const DEFAULT_VERIFY_ENDPOINT: &str = "http://localhost:5000/api/users/auth";
