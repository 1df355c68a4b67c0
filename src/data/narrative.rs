//! Room narrative
//!
//! Descriptions and choice prompts for each room, indexed by
//! `row * width + col`, plus the lines that announce an ambush.

use serde::{Deserialize, Serialize};

/// Text shown the first time a room is entered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomText {
    pub description: String,
    /// Asked as "Do you want to {choice} (yes/no)?"
    pub choice: String,
}

impl RoomText {
    pub fn new(description: impl Into<String>, choice: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            choice: choice.into(),
        }
    }
}

/// All narrative text for a maze
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeTable {
    pub rooms: Vec<RoomText>,
    #[serde(default)]
    pub ambush_lines: Vec<String>,
}

impl NarrativeTable {
    /// Text for the room at a flat index
    pub fn room(&self, index: usize) -> Option<&RoomText> {
        self.rooms.get(index)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl Default for NarrativeTable {
    fn default() -> Self {
        default_narrative()
    }
}

/// The built-in dungeon: 25 rooms, enough for the default 5x5 maze
pub fn default_narrative() -> NarrativeTable {
    let rooms = [
        ("A dusty chamber holds an old chest, faintly glowing with magic.", "Open the chest?"),
        ("A fountain bubbles with enchanted water in this dim room.", "Drink from the fountain?"),
        ("Skeletons of fallen warriors are scattered across the floor.", "Disturb the skeletons?"),
        ("Ancient tomes of forgotten lore line a library's shelves.", "Read a random tome?"),
        ("A small altar holds a glowing idol of a forgotten god.", "Touch the idol?"),
        ("Torchlight flickers on walls etched with arcane runes.", "Trace the runes?"),
        ("A trapdoor in the ceiling leads to unknown heights.", "Climb to the trapdoor?"),
        ("Glowing mushrooms grow in clusters on the damp floor.", "Eat a mushroom?"),
        ("An abandoned campfire smolders, left by recent travelers.", "Search the campfire ashes?"),
        ("Webs cover everything, hinting at giant spiders nearby.", "Clear the webs?"),
        ("A mirror reflects your image with a twist of illusion.", "Stare into the mirror?"),
        ("Barrels and crates are stacked, possibly hiding treasure.", "Search the barrels?"),
        ("A fierce dragon statue stands sentinel in the room.", "Examine the statue?"),
        ("Vines creep along the walls, pulsing with druidic magic.", "Pull the vines?"),
        ("Dripping water echoes in this cavernous chamber.", "Investigate the dripping?"),
        ("Rusty weapons rest on racks, some still sharp.", "Take a weapon?"),
        ("A puzzle box on a pedestal challenges your wits.", "Open the puzzle box?"),
        ("Ghostly whispers of restless spirits fill the air.", "Respond to the whispers?"),
        ("Enchanted flowers bloom in a vibrant bed.", "Pick a flower?"),
        ("Chains dangle from the ceiling, rattling softly.", "Rattle the chains?"),
        ("A map etched into the stone floor hints at dungeon secrets.", "Study the map?"),
        ("Candles burn brightly in a dark ritual circle.", "Blow out the candles?"),
        ("A pile of treasures glints temptingly in the corner.", "Dig into the treasures?"),
        ("A deep well descends into abyssal darkness.", "Drop a coin into the well?"),
        ("Shadows dance as if alive, hiding unseen threats.", "Confront the shadows?"),
    ];

    let ambush_lines = [
        "A goblin leaps from the shadows! Fight?",
        "A skeleton rises to attack! Engage?",
        "A giant rat lunges at you! Battle?",
        "A wraith forms from the shadows! Combat?",
    ];

    NarrativeTable {
        rooms: rooms
            .iter()
            .map(|(description, choice)| RoomText::new(*description, *choice))
            .collect(),
        ambush_lines: ambush_lines.iter().map(|s| s.to_string()).collect(),
    }
}
