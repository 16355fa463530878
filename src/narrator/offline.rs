//! # Offline Narrator
//!
//! Deterministic fallback content for NPC dialogue and ambient tips.
//!
//! Dialogue hints steer the player toward the level goal by compass
//! direction; tips are per-level atmosphere lines. Selection is keyed off the
//! turn counter so the fallback stays reproducible in tests.

use crate::{ApiStatus, Entity, EntityKind, GameState, Narrator, NarratorConfig, Position, Tile};

/// Per-direction hint lines spoken by NPCs.
const HINTS: &[(&str, &[&str])] = &[
    (
        "North",
        &[
            "I feel a cold draft from the North...",
            "The spirits whisper of something beyond the northern reach.",
            "Listen... the northern passage calls.",
            "Something stirs in the darkness to the North.",
        ],
    ),
    (
        "South",
        &[
            "The deeper chambers lie to the South.",
            "I sense warmth rising from the Southern depths.",
            "The path forward spirals down to the South.",
            "Ancient echoes reverberate from the South.",
        ],
    ),
    (
        "East",
        &[
            "Seek what lies to the East.",
            "The light grows stronger toward the East.",
            "I feel drawn toward the Eastern reaches.",
            "The way ahead turns East.",
        ],
    ),
    (
        "West",
        &[
            "The way is barred to the West... or is it?",
            "Something moves in the Western shadows.",
            "The West holds secrets yet untold.",
            "A path opens to the West.",
        ],
    ),
    (
        "North-East",
        &["The North-East winds carry whispers of your goal."],
    ),
    ("North-West", &["The North-West is shrouded in mystery."]),
    (
        "South-East",
        &["The South-East depths pulse with ancient power."],
    ),
    ("South-West", &["The South-West corner calls to you."]),
    (
        "very close by",
        &[
            "It is near... so very near.",
            "You stand almost upon it. Look around you.",
        ],
    ),
];

/// Per-level ambient tip lines, indexed by level id - 1.
const TIPS: [&[&str]; 5] = [
    &[
        "The cellar smells of damp earth and forgotten things.",
        "Drips echo through the silence of the Cellar.",
        "Mushrooms glow faintly in the moisture.",
        "The air grows colder as you venture deeper.",
    ],
    &[
        "The stench of the sewers fills your lungs.",
        "Rats skitter in the darkness of these passages.",
        "Water trickles unseen in the murk.",
        "The sewers pulse with forgotten life.",
    ],
    &[
        "Ancient tomes line the shelves of the Library.",
        "Dust motes dance in the pale light.",
        "Knowledge sleeps in these endless halls.",
        "The Library breathes with centuries of secrets.",
    ],
    &[
        "The Deep Dark swallows sound itself.",
        "Nothing survives here that shouldn't.",
        "Shadows writhe with intention.",
        "This place remembers when the world was young.",
    ],
    &[
        "The Sunken Garden awakens with your presence.",
        "Life stirs beneath the stone and soil.",
        "Flowers bloom impossibly in this forgotten place.",
        "The Golden Seed pulses with ancient power.",
    ],
];

/// Compass direction from the player toward a target, with a 3-tile dead
/// zone per axis.
pub fn compass_direction(from: Position, to: Position) -> String {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    let mut dir = String::new();
    if dy < -3 {
        dir.push_str("North");
    } else if dy > 3 {
        dir.push_str("South");
    }

    if dx < -3 {
        if dir.is_empty() {
            dir.push_str("West");
        } else {
            dir.push_str("-West");
        }
    } else if dx > 3 {
        if dir.is_empty() {
            dir.push_str("East");
        } else {
            dir.push_str("-East");
        }
    }

    if dir.is_empty() {
        "very close by".to_string()
    } else {
        dir
    }
}

/// Position of the level goal: the Golden Seed if present, else the stairs.
pub fn goal_position(state: &GameState) -> Position {
    if let Some(seed) = state
        .entities
        .iter()
        .find(|entity| entity.kind == EntityKind::Seed)
    {
        return seed.pos;
    }
    state.map.find(Tile::Stairs).unwrap_or(state.player_pos)
}

/// The deterministic fallback narrator.
///
/// # Examples
///
/// ```
/// use sprout::{NarratorConfig, Narrator, OfflineNarrator, ApiStatus};
///
/// let narrator = OfflineNarrator::new(NarratorConfig::offline());
/// assert_eq!(narrator.status(), ApiStatus::Missing);
/// ```
#[derive(Debug, Clone)]
pub struct OfflineNarrator {
    config: NarratorConfig,
}

impl OfflineNarrator {
    /// Creates the fallback narrator with an injected configuration.
    pub fn new(config: NarratorConfig) -> Self {
        Self { config }
    }

    fn pick<'a>(lines: &'a [&'a str], key: usize) -> &'a str {
        lines[key % lines.len()]
    }
}

impl Narrator for OfflineNarrator {
    fn request_dialogue(&self, _npc: &Entity, state: &GameState, _utterance: &str) -> String {
        let direction = compass_direction(state.player_pos, goal_position(state));
        let lines = HINTS
            .iter()
            .find(|(name, _)| *name == direction)
            .map(|(_, lines)| *lines)
            .unwrap_or(HINTS[1].1);
        Self::pick(lines, state.turn as usize).to_string()
    }

    fn request_ambient_tip(&self, state: &GameState) -> String {
        let index = (state.level.saturating_sub(1) as usize).min(TIPS.len() - 1);
        Self::pick(TIPS[index], state.turn as usize).to_string()
    }

    fn status(&self) -> ApiStatus {
        // The offline narrator never talks to the service; a configured key
        // still reports Ready so the host can surface it.
        self.config.status()
    }
}
