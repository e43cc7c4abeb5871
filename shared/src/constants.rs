pub const HISTORY_STORAGE_KEY: &str = "drawHistory";
pub const PRIZE_SOURCE_PATH: &str = "/lottery.json";

// Cadence of the spin animation
pub const SPIN_INTERVAL_MS: u32 = 100;

pub const POOL_EXHAUSTED_NOTICE: &str = "The prize pool is empty!";
pub const NOTHING_TO_UNDO_NOTICE: &str = "There is no draw to undo!";
pub const IDLE_DISPLAY_TEXT: &str = "The draw has not started";
pub const PRIZE_SOURCE_ERROR: &str = "Could not load the prize list";
pub const STORAGE_ERROR: &str = "Could not save the draw history";
pub const INTERNAL_ERROR: &str = "The draw could not be recorded";
