//! Engine errors

use thiserror::Error;

/// Faults that end a session abnormally
#[derive(Debug, Error)]
pub enum GameError {
    #[error("no narrative for room {index} (table has {len} rooms)")]
    NarrativeOutOfRange { index: usize, len: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
