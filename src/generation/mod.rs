//! # Generation Module
//!
//! Procedural dungeon generation and the static level table.
//!
//! The level table is input data: an ordered list of level descriptors giving
//! each level its tile theme and entity counts. The generator consumes one
//! descriptor and an injected random source, so layouts are reproducible from
//! a seed.

pub mod dungeon;

pub use dungeon::*;

use crate::{Entity, MapGrid, Position, SproutResult, Tile};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Tile theme for one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelTheme {
    pub floor: Tile,
    pub wall: Tile,
    /// Optional accent tile stamped into some rooms (water, grass).
    pub feature: Option<Tile>,
}

/// Entity population for one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCounts {
    pub ghosts: u32,
    pub rats: u32,
    pub potions: u32,
}

/// Static descriptor for one dungeon level. Never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelConfig {
    pub id: u32,
    pub name: &'static str,
    pub theme: LevelTheme,
    pub counts: EntityCounts,
    /// Name of the hidden fetch-quest artifact spawned on this level, if any.
    pub artifact: Option<&'static str>,
}

/// The five levels of the dungeon, in descent order.
pub const LEVELS: [LevelConfig; 5] = [
    LevelConfig {
        id: 1,
        name: "The Damp Cellar",
        theme: LevelTheme {
            floor: Tile::Floor,
            wall: Tile::Wall,
            feature: None,
        },
        counts: EntityCounts {
            ghosts: 1,
            rats: 0,
            potions: 1,
        },
        artifact: None,
    },
    LevelConfig {
        id: 2,
        name: "The Sewers",
        theme: LevelTheme {
            floor: Tile::Floor,
            wall: Tile::Wall,
            feature: Some(Tile::Water),
        },
        counts: EntityCounts {
            ghosts: 1,
            rats: 3,
            potions: 1,
        },
        artifact: None,
    },
    LevelConfig {
        id: 3,
        name: "The Ancient Library",
        theme: LevelTheme {
            floor: Tile::Floor,
            wall: Tile::Wall,
            feature: None,
        },
        counts: EntityCounts {
            ghosts: 1,
            rats: 0,
            potions: 1,
        },
        artifact: Some("The Lost Tome"),
    },
    LevelConfig {
        id: 4,
        name: "The Deep Dark",
        theme: LevelTheme {
            floor: Tile::Floor,
            wall: Tile::Wall,
            feature: None,
        },
        counts: EntityCounts {
            ghosts: 1,
            rats: 2,
            potions: 2,
        },
        artifact: None,
    },
    LevelConfig {
        id: 5,
        name: "The Sunken Garden",
        theme: LevelTheme {
            floor: Tile::Grass,
            wall: Tile::Wall,
            feature: Some(Tile::Water),
        },
        counts: EntityCounts {
            ghosts: 1,
            rats: 0,
            potions: 0,
        },
        artifact: None,
    },
];

/// Looks up a level descriptor by id.
///
/// # Examples
///
/// ```
/// use sprout::level_config;
///
/// assert_eq!(level_config(1).unwrap().name, "The Damp Cellar");
/// assert!(level_config(6).is_none());
/// ```
pub fn level_config(id: u32) -> Option<&'static LevelConfig> {
    LEVELS.iter().find(|config| config.id == id)
}

/// Output of a successful generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedLevel {
    pub map: MapGrid,
    pub entities: Vec<Entity>,
    /// Player spawn: the center of the left-most room.
    pub start_pos: Position,
    /// Stairs position, or the Golden Seed position on the terminal level.
    pub goal_pos: Position,
}

/// Trait for procedural generators.
///
/// Generators are deterministic given a random source; a caller that needs
/// reproducible output seeds the rng itself.
pub trait Generator<T> {
    /// Generates content for one level descriptor.
    fn generate(&self, config: &LevelConfig, rng: &mut StdRng) -> SproutResult<T>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Creates a seeded random number generator.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
