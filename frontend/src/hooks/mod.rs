pub mod local_storage;
pub mod use_lottery;

pub use local_storage::LocalStorageStore;
pub use use_lottery::*;
