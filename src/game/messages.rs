//! Game messages
//!
//! Every line of narration the engine produces is tagged with a category so
//! front ends can style or filter it.

/// Categories for message filtering/coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageCategory {
    /// Room descriptions and the welcome banner
    Lore,
    /// A question waiting for input
    Prompt,
    /// Room event outcomes
    Event,
    Combat,
    /// Loot and rewards
    Item,
    /// Door menus, endings, final stats
    System,
    /// Rejected input
    Warning,
}

/// A message to display in the game log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMessage {
    pub text: String,
    pub category: MessageCategory,
}
