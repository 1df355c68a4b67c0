//! Headless front end
//!
//! Canned replies and an in-memory message log, for tests and
//! unattended runs.

use std::collections::VecDeque;
use std::io;

use super::{Input, Output, Reply};
use crate::game::{GameMessage, MessageCategory};

/// Replies from a fixed list; closes once the list runs out
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    replies: VecDeque<Reply>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: lines.into_iter().map(|l| Reply::Line(l.into())).collect(),
        }
    }

    /// Queue an interrupt after the scripted lines
    pub fn then_interrupt(mut self) -> Self {
        self.replies.push_back(Reply::Interrupted);
        self
    }

    /// Replies not consumed yet
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

impl Input for ScriptedInput {
    fn read_reply(&mut self) -> io::Result<Reply> {
        Ok(self.replies.pop_front().unwrap_or(Reply::Closed))
    }
}

/// Every emitted message, in order
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    pub messages: Vec<GameMessage>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.text.contains(needle))
    }

    /// Number of messages containing `needle`
    pub fn count(&self, needle: &str) -> usize {
        self.messages.iter().filter(|m| m.text.contains(needle)).count()
    }

    pub fn last(&self) -> Option<&GameMessage> {
        self.messages.last()
    }

    pub fn in_category(&self, category: MessageCategory) -> impl Iterator<Item = &GameMessage> {
        self.messages.iter().filter(move |m| m.category == category)
    }
}

impl Output for MessageLog {
    fn emit(&mut self, category: MessageCategory, text: &str) {
        self.messages.push(GameMessage {
            text: text.to_string(),
            category,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_replies_then_closed() {
        let mut input = ScriptedInput::new(["yes", "2"]).then_interrupt();
        assert_eq!(input.remaining(), 3);

        assert_eq!(input.read_reply().unwrap(), Reply::Line("yes".to_string()));
        assert_eq!(input.read_reply().unwrap(), Reply::Line("2".to_string()));
        assert_eq!(input.remaining(), 1);
        assert_eq!(input.read_reply().unwrap(), Reply::Interrupted);
        assert_eq!(input.remaining(), 0);
        assert_eq!(input.read_reply().unwrap(), Reply::Closed);
        assert_eq!(input.read_reply().unwrap(), Reply::Closed);
    }

    #[test]
    fn test_message_log_queries() {
        let mut log = MessageLog::new();
        log.emit(MessageCategory::Lore, "A dusty chamber.");
        log.emit(MessageCategory::Warning, "Please enter 'yes'.");
        log.emit(MessageCategory::Warning, "Please enter 'yes'.");

        assert!(log.contains("dusty"));
        assert_eq!(log.count("Please enter"), 2);
        assert_eq!(log.in_category(MessageCategory::Lore).count(), 1);
        assert_eq!(log.last().map(|m| m.category), Some(MessageCategory::Warning));
    }
}
