//! # Sprout
//!
//! A tile-based roguelike about recovering the lost Golden Seed.
//!
//! ## Architecture Overview
//!
//! Sprout is a turn-synchronous game core with a thin text front end. The
//! crate revolves around a few key pieces:
//!
//! - **Game State**: a single immutable-per-turn snapshot of the world;
//!   every accepted intent produces a new state
//! - **Dungeon Generator**: room-and-corridor layout with a post-hoc
//!   reachability check and a bounded retry loop
//! - **Fog Engine**: circular field of view with monotonic exploration memory
//! - **Quest Engine**: a per-level quest catalog driving a small state machine
//!   that gates descent through the dungeon
//! - **Narrator**: an LLM-backed dialogue collaborator with a deterministic
//!   offline fallback
//!
//! The presentation layer is deliberately minimal: the core exposes a
//! serializable [`Snapshot`] per turn and the bundled binary renders it as
//! plain text.

pub mod game;
pub mod generation;
pub mod input;
pub mod narrator;
pub mod quests;
pub mod rendering;

pub use game::{
    apply_intent, load_level, resolve_bump, send_chat, strike, BumpOutcome, BumpResolution,
    DialogueLine, DialogueSession, DialogueState, Direction, Entity, EntityId, EntityKind,
    EntityView, FogState, GameState, Intent, LogEntry, LogKind, MapGrid, PendingRemoval, Position,
    QuestId, QuestSummary, Snapshot, Speaker, Tile, UiMode,
};
pub use generation::{
    level_config, DungeonGenerator, EntityCounts, GeneratedLevel, Generator, LevelConfig,
    LevelTheme, LEVELS,
};
pub use narrator::{ApiStatus, Narrator, NarratorConfig, OfflineNarrator};
pub use quests::{
    Objective, Quest, QuestDialogue, QuestKind, QuestReward, QuestStatus,
};

/// Core error type for the Sprout game engine.
#[derive(thiserror::Error, Debug)]
pub enum SproutError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Level id has no entry in the level table
    #[error("Unknown level: {0}")]
    UnknownLevel(u32),

    /// Dungeon generation exhausted its retry budget
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the Sprout codebase.
pub type SproutResult<T> = Result<T, SproutError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Map width in tiles
    pub const MAP_WIDTH: usize = 25;

    /// Map height in tiles
    pub const MAP_HEIGHT: usize = 18;

    /// Circular field-of-view radius
    pub const VISIBILITY_RADIUS: i32 = 6;

    /// Maximum rooms placed per generation attempt
    pub const MAX_ROOMS: usize = 8;

    /// Minimum room side length
    pub const MIN_ROOM_SIZE: i32 = 3;

    /// Maximum room side length
    pub const MAX_ROOM_SIZE: i32 = 6;

    /// Full-layout generation attempts before giving up
    pub const GENERATION_ATTEMPTS: u32 = 10;

    /// Attempts to find an open tile when scattering entities
    pub const SCATTER_ATTEMPTS: u32 = 100;

    /// Probability of stamping one themed feature tile per room
    pub const FEATURE_TILE_CHANCE: f64 = 0.4;

    /// Player starting (and maximum) health
    pub const PLAYER_MAX_HEALTH: i32 = 20;

    /// Damage the player deals per strike
    pub const PLAYER_DAMAGE: i32 = 5;

    /// Retaliation damage dealt by a surviving rat
    pub const RAT_DAMAGE: i32 = 3;

    /// Rat starting health
    pub const RAT_MAX_HEALTH: i32 = 8;

    /// Ghost starting health
    pub const GHOST_MAX_HEALTH: i32 = 10;

    /// Health restored by drinking a potion
    pub const POTION_HEAL: i32 = 10;

    /// Health restored by resting one turn
    pub const WAIT_HEAL: i32 = 1;

    /// Probability that resting surfaces an ambient narrator tip
    pub const WAIT_TIP_CHANCE: f64 = 0.2;

    /// Turns a dying entity lingers before its scheduled removal is due
    pub const DEATH_LINGER_TURNS: u64 = 2;

    /// Bounded length of the recent message log
    pub const MAX_LOG_ENTRIES: usize = 20;

    /// The terminal level: the Golden Seed replaces the stairs here
    pub const FINAL_LEVEL: u32 = 5;
}
