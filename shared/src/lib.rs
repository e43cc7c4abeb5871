pub mod constants;
pub mod error;
pub mod prize_pool;
pub mod prize_source;
pub mod session;
pub mod spin;
pub mod storage;

pub use error::{LotteryError, StorageError};
pub use prize_pool::{DrawHistory, PrizeDefinition, PrizePool};
pub use session::LotterySession;
pub use spin::{CancelToken, CurrentPick, SpinController, SpinState};
pub use storage::{HistoryStore, MemoryStore};
