use std::fmt;

use crate::constants::{
    INTERNAL_ERROR, NOTHING_TO_UNDO_NOTICE, POOL_EXHAUSTED_NOTICE, PRIZE_SOURCE_ERROR,
    STORAGE_ERROR,
};

/// Failures of the key-value store that holds the draw history.
#[derive(Debug)]
pub enum StorageError {
    Unavailable,
    Write(String),
    Read(String),
    Corrupt(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "Storage is not available"),
            Self::Write(e) => write!(f, "Storage write failed: {}", e),
            Self::Read(e) => write!(f, "Storage read failed: {}", e),
            Self::Corrupt(e) => write!(f, "Stored draw history is corrupt: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Corrupt(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Corrupt(err)
    }
}

#[derive(Debug)]
pub enum LotteryError {
    PoolExhausted,
    AlreadySpinning,
    NothingToUndo,
    DrawOutOfRange { index: usize, len: usize },
    DrawMismatch { index: usize, expected: String, found: String },
    Storage(StorageError),
    PrizeSource(String),
}

impl LotteryError {
    /// Text shown to the person running the draw.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::PoolExhausted => POOL_EXHAUSTED_NOTICE,
            Self::NothingToUndo => NOTHING_TO_UNDO_NOTICE,
            Self::AlreadySpinning => "",
            Self::DrawOutOfRange { .. } | Self::DrawMismatch { .. } => INTERNAL_ERROR,
            Self::Storage(_) => STORAGE_ERROR,
            Self::PrizeSource(_) => PRIZE_SOURCE_ERROR,
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Self::DrawOutOfRange { .. } | Self::DrawMismatch { .. })
    }
}

impl fmt::Display for LotteryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PoolExhausted => write!(f, "Prize pool is empty"),
            Self::AlreadySpinning => write!(f, "A spin is already running"),
            Self::NothingToUndo => write!(f, "Draw history is empty"),
            Self::DrawOutOfRange { index, len } => {
                write!(f, "Draw index {} is out of range for a pool of {}", index, len)
            }
            Self::DrawMismatch { index, expected, found } => write!(
                f,
                "Draw at index {} expected {:?} but the pool holds {:?}",
                index, expected, found
            ),
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::PrizeSource(e) => write!(f, "Prize source error: {}", e),
        }
    }
}

impl std::error::Error for LotteryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Storage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StorageError> for LotteryError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}

impl From<serde_json::Error> for LotteryError {
    fn from(err: serde_json::Error) -> Self {
        Self::PrizeSource(err.to_string())
    }
}

impl From<validator::ValidationErrors> for LotteryError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::PrizeSource(err.to_string())
    }
}
