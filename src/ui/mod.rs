//! User Interface module
//!
//! The engine talks to the outside world through two small traits: an
//! [`Input`] that yields one reply per prompt and an [`Output`] that
//! receives categorized narration lines.

pub mod console;
pub mod script;

pub use console::{ConsoleInput, ConsoleOutput};
pub use script::{MessageLog, ScriptedInput};

use std::io;

use crate::game::MessageCategory;

/// One answer from the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A line of text, without its trailing newline
    Line(String),
    /// The input source has no more lines
    Closed,
    /// The player asked to stop
    ///
    /// The console never yields this; Ctrl-C there is caught by the process
    /// hook in the binary. Headless inputs use it to end a run early.
    Interrupted,
}

/// Source of player replies
pub trait Input {
    /// Block until the next reply is available
    fn read_reply(&mut self) -> io::Result<Reply>;
}

/// Sink for narration lines
pub trait Output {
    fn emit(&mut self, category: MessageCategory, text: &str);
}
