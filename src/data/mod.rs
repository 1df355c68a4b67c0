//! Data loading and external game content
//!
//! This module handles the run configuration and the narrative tables,
//! both of which can be supplied as RON files.

pub mod config;
pub mod loader;
pub mod narrative;

pub use config::{ConfigError, GameConfig, MAX_GRID_SIDE};
pub use loader::{export_default_narrative, load_narrative, read_narrative};
pub use narrative::{default_narrative, NarrativeTable, RoomText};
