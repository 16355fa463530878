//! Integration tests for dungeon generation: connectivity, determinism, and
//! the bounded retry contract.

use proptest::prelude::*;
use sprout::generation::create_rng;
use sprout::{
    DungeonGenerator, EntityCounts, EntityKind, GeneratedLevel, Generator, LevelConfig,
    LevelTheme, Position, SproutError, Tile, LEVELS,
};
use std::collections::{HashSet, VecDeque};

/// Independent reachability check, mirroring the gameplay rules: walls and
/// ghost-occupied tiles block, rats and items do not.
fn path_exists(level: &GeneratedLevel) -> bool {
    let ghost_positions: HashSet<Position> = level
        .entities
        .iter()
        .filter(|entity| entity.kind == EntityKind::Ghost)
        .map(|entity| entity.pos)
        .collect();

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(level.start_pos);
    queue.push_back(level.start_pos);

    while let Some(pos) = queue.pop_front() {
        if pos == level.goal_pos {
            return true;
        }
        for next in pos.cardinal_adjacent_positions() {
            if !level.map.in_bounds(next)
                || visited.contains(&next)
                || level.map.get(next) == Some(Tile::Wall)
                || ghost_positions.contains(&next)
            {
                continue;
            }
            visited.insert(next);
            queue.push_back(next);
        }
    }
    false
}

proptest! {
    /// Every successfully generated dungeon is path-connected from spawn to
    /// goal under the combat-aware passability rules.
    #[test]
    fn prop_generated_dungeons_are_connected(seed in 0u64..500, level_index in 0usize..5) {
        let config = &LEVELS[level_index];
        let level = DungeonGenerator::new()
            .generate(config, &mut create_rng(seed))
            .expect("generation should succeed for the standard level table");

        prop_assert!(path_exists(&level), "seed {} level {} is disconnected", seed, config.id);
    }

    /// Scattered entities never land inside walls or on the stairs.
    #[test]
    fn prop_entities_spawn_on_open_tiles(seed in 0u64..200, level_index in 0usize..5) {
        let config = &LEVELS[level_index];
        let level = DungeonGenerator::new()
            .generate(config, &mut create_rng(seed))
            .expect("generation should succeed");

        for entity in &level.entities {
            let tile = level.map.get(entity.pos).expect("entity in bounds");
            prop_assert_ne!(tile, Tile::Wall, "{} spawned inside a wall", entity.id);
            if entity.kind != EntityKind::Seed {
                prop_assert_ne!(tile, Tile::Stairs, "{} spawned on the stairs", entity.id);
            }
        }
    }
}

#[test]
fn test_same_seed_reproduces_the_level() {
    let generator = DungeonGenerator::new();
    for config in &LEVELS {
        let first = generator
            .generate(config, &mut create_rng(2024))
            .expect("generation should succeed");
        let second = generator
            .generate(config, &mut create_rng(2024))
            .expect("generation should succeed");

        assert_eq!(first.map, second.map, "level {} maps diverged", config.id);
        assert_eq!(first.start_pos, second.start_pos);
        assert_eq!(
            first.entities.len(),
            second.entities.len(),
            "level {} entity counts diverged",
            config.id
        );
    }
}

#[test]
fn test_stairs_present_except_on_terminal_level() {
    let generator = DungeonGenerator::new();
    for config in &LEVELS {
        let level = generator
            .generate(config, &mut create_rng(7))
            .expect("generation should succeed");

        if config.id < 5 {
            assert_eq!(level.map.count(Tile::Stairs), 1, "level {}", config.id);
            assert_eq!(level.map.get(level.goal_pos), Some(Tile::Stairs));
        } else {
            assert_eq!(level.map.count(Tile::Stairs), 0, "terminal level has no stairs");
            assert!(level
                .entities
                .iter()
                .any(|entity| entity.kind == EntityKind::Seed && entity.pos == level.goal_pos));
        }
    }
}

#[test]
fn test_entity_population_matches_config() {
    let generator = DungeonGenerator::new();
    let config = &LEVELS[3]; // The Deep Dark: 1 ghost, 2 rats, 2 potions
    let level = generator
        .generate(config, &mut create_rng(99))
        .expect("generation should succeed");

    let count = |kind: EntityKind| {
        level
            .entities
            .iter()
            .filter(|entity| entity.kind == kind)
            .count() as u32
    };
    assert_eq!(count(EntityKind::Ghost), config.counts.ghosts);
    assert_eq!(count(EntityKind::Rat), config.counts.rats);
    assert_eq!(count(EntityKind::Potion), config.counts.potions);
}

#[test]
fn test_exhausted_retries_report_generation_failed() {
    // A population far larger than any layout's open area leaves the goal
    // sealed behind ghosts, so every attempt fails validation.
    let impossible = LevelConfig {
        id: 2,
        name: "The Sealed Vault",
        theme: LevelTheme {
            floor: Tile::Floor,
            wall: Tile::Wall,
            feature: None,
        },
        counts: EntityCounts {
            ghosts: 600,
            rats: 0,
            potions: 0,
        },
        artifact: None,
    };
    let generator = DungeonGenerator {
        max_attempts: 3,
        ..DungeonGenerator::new()
    };

    let result = generator.generate(&impossible, &mut create_rng(12345));
    match result {
        Err(SproutError::GenerationFailed(message)) => {
            assert!(message.contains("3 attempts"), "unexpected message: {}", message);
        }
        other => panic!("expected GenerationFailed, got {:?}", other.map(|_| ())),
    }
}
