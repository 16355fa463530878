//! # Dungeon Generation
//!
//! Room-and-corridor layout generation with post-hoc reachability validation.
//!
//! Rooms are placed by rejection sampling and corridors carved between
//! consecutive room centers. Connectivity is not guaranteed by construction;
//! a breadth-first search from the spawn to the goal is the actual
//! correctness check, and failed layouts are discarded and retried up to a
//! bounded number of attempts.

use crate::config;
use crate::{
    Entity, EntityKind, GeneratedLevel, Generator, LevelConfig, MapGrid, Position, SproutError,
    SproutResult, Tile,
};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::{HashSet, VecDeque};

/// A rectangular room candidate, tracked only during generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Room {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

impl Room {
    fn center(&self) -> Position {
        Position::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Axis-aligned overlap test; touching edges count as overlap so rooms
    /// keep at least one wall between them.
    fn overlaps(&self, other: &Room) -> bool {
        self.x <= other.x + other.w
            && self.x + self.w >= other.x
            && self.y <= other.y + other.h
            && self.y + self.h >= other.y
    }
}

/// Primary dungeon generator.
///
/// Each attempt starts from a solid wall grid, places up to `max_rooms`
/// non-overlapping rooms, connects consecutive rooms (sorted left to right)
/// with L-shaped corridors, places the stairs or goal, scatters entities, and
/// finally validates reachability.
#[derive(Debug, Clone)]
pub struct DungeonGenerator {
    /// Room candidates rolled per attempt
    pub max_rooms: usize,
    /// Minimum room side length
    pub min_room_size: i32,
    /// Maximum room side length
    pub max_room_size: i32,
    /// Full-layout attempts before reporting failure
    pub max_attempts: u32,
    /// Attempts to find an open tile per scattered entity
    pub scatter_attempts: u32,
}

impl DungeonGenerator {
    /// Creates a generator with the standard map parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprout::DungeonGenerator;
    ///
    /// let generator = DungeonGenerator::new();
    /// assert_eq!(generator.max_rooms, 8);
    /// ```
    pub fn new() -> Self {
        Self {
            max_rooms: config::MAX_ROOMS,
            min_room_size: config::MIN_ROOM_SIZE,
            max_room_size: config::MAX_ROOM_SIZE,
            max_attempts: config::GENERATION_ATTEMPTS,
            scatter_attempts: config::SCATTER_ATTEMPTS,
        }
    }

    /// Rolls room candidates, keeping the ones that fit without overlap, and
    /// carves them into the map.
    fn place_rooms(&self, map: &mut MapGrid, config: &LevelConfig, rng: &mut StdRng) -> Vec<Room> {
        let width = map.width() as i32;
        let height = map.height() as i32;
        let mut rooms: Vec<Room> = Vec::new();

        for _ in 0..self.max_rooms {
            let w = rng.gen_range(self.min_room_size..=self.max_room_size);
            let h = rng.gen_range(self.min_room_size..=self.max_room_size);
            let x = rng.gen_range(1..=(width - w - 1));
            let y = rng.gen_range(1..=(height - h - 1));
            let candidate = Room { x, y, w, h };

            if rooms.iter().any(|room| candidate.overlaps(room)) {
                continue;
            }

            self.carve_room(map, &candidate, config, rng);
            rooms.push(candidate);
        }

        rooms
    }

    /// Carves a room to the level's floor tile, optionally stamping one
    /// themed feature tile in its interior.
    fn carve_room(&self, map: &mut MapGrid, room: &Room, config: &LevelConfig, rng: &mut StdRng) {
        for y in room.y..(room.y + room.h) {
            for x in room.x..(room.x + room.w) {
                map.set(Position::new(x, y), config.theme.floor);
            }
        }

        if let Some(feature) = config.theme.feature {
            if rng.gen_bool(crate::config::FEATURE_TILE_CHANCE) {
                let fx = rng.gen_range((room.x + 1)..=(room.x + room.w - 2));
                let fy = rng.gen_range((room.y + 1)..=(room.y + room.h - 2));
                map.set(Position::new(fx, fy), feature);
            }
        }
    }

    /// Connects each consecutive pair of rooms with an L-shaped corridor
    /// between their centers, moving along x first and then y. Carving only
    /// overwrites walls, so room features and stairs survive intact.
    fn connect_rooms(&self, map: &mut MapGrid, rooms: &[Room], config: &LevelConfig) {
        for pair in rooms.windows(2) {
            let from = pair[0].center();
            let to = pair[1].center();

            let mut x = from.x;
            let mut y = from.y;

            while x != to.x {
                self.carve_corridor_tile(map, Position::new(x, y), config);
                x += if x < to.x { 1 } else { -1 };
            }
            while y != to.y {
                self.carve_corridor_tile(map, Position::new(x, y), config);
                y += if y < to.y { 1 } else { -1 };
            }
        }
    }

    fn carve_corridor_tile(&self, map: &mut MapGrid, pos: Position, config: &LevelConfig) {
        if map.get(pos) == Some(Tile::Wall) {
            map.set(pos, config.theme.floor);
        }
    }

    /// Finds an in-room tile that is not a wall, not the stairs, not the
    /// spawn, and not already occupied. Falls back to the spawn position if
    /// the attempt budget runs out.
    fn find_open_position(
        &self,
        map: &MapGrid,
        rooms: &[Room],
        start: Position,
        entities: &[Entity],
        rng: &mut StdRng,
    ) -> Position {
        for _ in 0..self.scatter_attempts {
            let room = rooms[rng.gen_range(0..rooms.len())];
            let pos = Position::new(
                rng.gen_range(room.x..(room.x + room.w)),
                rng.gen_range(room.y..(room.y + room.h)),
            );

            let tile = map.get(pos);
            if tile == Some(Tile::Wall) || tile == Some(Tile::Stairs) || pos == start {
                continue;
            }
            if entities.iter().any(|entity| entity.pos == pos) {
                continue;
            }
            return pos;
        }

        start
    }

    /// Scatters the configured entity population across the rooms.
    fn scatter_entities(
        &self,
        map: &MapGrid,
        rooms: &[Room],
        start: Position,
        goal: Position,
        config: &LevelConfig,
        rng: &mut StdRng,
    ) -> Vec<Entity> {
        let mut entities: Vec<Entity> = Vec::new();

        for index in 0..config.counts.ghosts {
            let pos = self.find_open_position(map, rooms, start, &entities, rng);
            entities.push(Entity::ghost(config.id, index, pos));
        }
        for index in 0..config.counts.rats {
            let pos = self.find_open_position(map, rooms, start, &entities, rng);
            entities.push(Entity::rat(config.id, index, pos));
        }
        for index in 0..config.counts.potions {
            let pos = self.find_open_position(map, rooms, start, &entities, rng);
            entities.push(Entity::potion(config.id, index, pos));
        }

        if let Some(name) = config.artifact {
            let pos = self.find_open_position(map, rooms, start, &entities, rng);
            entities.push(Entity::artifact(config.id, name, pos));
        }

        // On the terminal level the goal entity takes the stairs position.
        if config.id >= crate::config::FINAL_LEVEL {
            entities.push(Entity::golden_seed(goal));
        }

        entities
    }

    /// Breadth-first reachability check from spawn to goal.
    ///
    /// Walls and ghost-occupied tiles are impassable; rats are passable since
    /// combat can clear them. Items never block.
    fn validate_reachability(
        &self,
        map: &MapGrid,
        entities: &[Entity],
        start: Position,
        goal: Position,
    ) -> bool {
        let ghost_positions: HashSet<Position> = entities
            .iter()
            .filter(|entity| entity.kind == EntityKind::Ghost)
            .map(|entity| entity.pos)
            .collect();

        let mut visited: HashSet<Position> = HashSet::new();
        let mut queue: VecDeque<Position> = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(pos) = queue.pop_front() {
            if pos == goal {
                return true;
            }

            for next in pos.cardinal_adjacent_positions() {
                if !map.in_bounds(next) || visited.contains(&next) {
                    continue;
                }
                if map.get(next) == Some(Tile::Wall) {
                    continue;
                }
                if ghost_positions.contains(&next) {
                    continue;
                }
                visited.insert(next);
                queue.push_back(next);
            }
        }

        false
    }

    /// Builds one full layout candidate.
    fn build_attempt(&self, config: &LevelConfig, rng: &mut StdRng) -> Option<GeneratedLevel> {
        let mut map = MapGrid::filled(
            crate::config::MAP_WIDTH,
            crate::config::MAP_HEIGHT,
            Tile::Wall,
        );

        let mut rooms = self.place_rooms(&mut map, config, rng);
        if rooms.is_empty() {
            return None;
        }

        rooms.sort_by_key(|room| room.x);
        self.connect_rooms(&mut map, &rooms, config);

        let start_pos = rooms[0].center();
        let goal_pos = rooms[rooms.len() - 1].center();
        if config.id < crate::config::FINAL_LEVEL {
            map.set(goal_pos, Tile::Stairs);
        }

        let entities = self.scatter_entities(&map, &rooms, start_pos, goal_pos, config, rng);

        Some(GeneratedLevel {
            map,
            entities,
            start_pos,
            goal_pos,
        })
    }
}

impl Generator<GeneratedLevel> for DungeonGenerator {
    fn generate(&self, config: &LevelConfig, rng: &mut StdRng) -> SproutResult<GeneratedLevel> {
        for attempt in 1..=self.max_attempts {
            let Some(candidate) = self.build_attempt(config, rng) else {
                debug!("level {}: attempt {} placed no rooms", config.id, attempt);
                continue;
            };

            if self.validate_reachability(
                &candidate.map,
                &candidate.entities,
                candidate.start_pos,
                candidate.goal_pos,
            ) {
                info!(
                    "generated level {} ({}) in {} attempt(s): {} entities",
                    config.id,
                    config.name,
                    attempt,
                    candidate.entities.len()
                );
                return Ok(candidate);
            }

            debug!(
                "level {}: attempt {} failed reachability, retrying",
                config.id, attempt
            );
        }

        warn!(
            "level {}: exhausted {} generation attempts",
            config.id, self.max_attempts
        );
        Err(SproutError::GenerationFailed(format!(
            "no connected layout for level {} after {} attempts",
            config.id, self.max_attempts
        )))
    }

    fn generator_type(&self) -> &'static str {
        "DungeonGenerator"
    }
}

impl Default for DungeonGenerator {
    fn default() -> Self {
        Self::new()
    }
}
