//! # Entities
//!
//! Flat entity representation with a tagged kind variant.
//!
//! All entity data lives in one structure; combat, dialogue, and quest logic
//! branch on [`EntityKind`] explicitly rather than through trait objects or
//! inheritance-style hierarchies.

use crate::config;
use crate::{EntityId, Position, QuestId};
use serde::{Deserialize, Serialize};

/// Discriminant for everything that can occupy a tile besides the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Quest-giving spirit. Blocks movement, never retaliates.
    Ghost,
    /// Hostile vermin. Blocks movement and retaliates when struck.
    Rat,
    /// Healing pickup.
    Potion,
    /// The Golden Seed, the terminal goal.
    Seed,
    /// Quest fetch target, hidden until its quest starts.
    Artifact,
}

impl EntityKind {
    /// Whether bumping into this entity resolves as an attack.
    pub fn is_hostile(self) -> bool {
        matches!(self, EntityKind::Ghost | EntityKind::Rat)
    }

    /// Whether the entity is picked up from the same tile.
    pub fn is_item(self) -> bool {
        matches!(
            self,
            EntityKind::Potion | EntityKind::Seed | EntityKind::Artifact
        )
    }

    /// Damage dealt back to an attacker that leaves this entity alive.
    pub fn retaliation_damage(self) -> i32 {
        match self {
            EntityKind::Rat => config::RAT_DAMAGE,
            _ => 0,
        }
    }

    /// Display glyph.
    pub fn glyph(self) -> char {
        match self {
            EntityKind::Ghost => 'G',
            EntityKind::Rat => 'r',
            EntityKind::Potion => '!',
            EntityKind::Seed => '*',
            EntityKind::Artifact => '?',
        }
    }
}

/// NPC conversation posture, advanced by the quest engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogueState {
    Idle,
    QuestAvailable,
    QuestActive,
    QuestComplete,
    Done,
}

/// A single game object on the level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Stable id, unique within the level's lifetime.
    pub id: EntityId,
    pub kind: EntityKind,
    pub pos: Position,
    pub name: String,
    /// Present for combat-capable kinds only.
    pub health: Option<i32>,
    pub max_health: Option<i32>,
    /// Hidden entities are invisible and non-interactable until revealed.
    pub hidden: bool,
    /// Back-reference to the quest this entity gives, if any. No ownership.
    pub quest_id: Option<QuestId>,
    pub dialogue_state: DialogueState,
    /// Transient death marker; the entity is logically dead and awaits its
    /// scheduled removal.
    pub dying: bool,
}

impl Entity {
    fn base(id: EntityId, kind: EntityKind, pos: Position, name: &str) -> Self {
        Self {
            id,
            kind,
            pos,
            name: name.to_string(),
            health: None,
            max_health: None,
            hidden: false,
            quest_id: None,
            dialogue_state: DialogueState::Idle,
            dying: false,
        }
    }

    /// Creates a wandering spirit for the given level and spawn index.
    pub fn ghost(level_id: u32, index: u32, pos: Position) -> Self {
        let mut entity = Self::base(
            EntityId::new(format!("ghost-{}-{}", level_id, index)),
            EntityKind::Ghost,
            pos,
            "Wandering Spirit",
        );
        entity.health = Some(config::GHOST_MAX_HEALTH);
        entity.max_health = Some(config::GHOST_MAX_HEALTH);
        entity
    }

    /// Creates a dungeon rat for the given level and spawn index.
    pub fn rat(level_id: u32, index: u32, pos: Position) -> Self {
        let mut entity = Self::base(
            EntityId::new(format!("rat-{}-{}", level_id, index)),
            EntityKind::Rat,
            pos,
            "Dungeon Rat",
        );
        entity.health = Some(config::RAT_MAX_HEALTH);
        entity.max_health = Some(config::RAT_MAX_HEALTH);
        entity
    }

    /// Creates a potion pickup for the given level and spawn index.
    pub fn potion(level_id: u32, index: u32, pos: Position) -> Self {
        Self::base(
            EntityId::new(format!("potion-{}-{}", level_id, index)),
            EntityKind::Potion,
            pos,
            "Mysterious Potion",
        )
    }

    /// Creates a hidden quest artifact for the given level.
    pub fn artifact(level_id: u32, name: &str, pos: Position) -> Self {
        let mut entity = Self::base(
            EntityId::new(format!("artifact-level-{}", level_id)),
            EntityKind::Artifact,
            pos,
            name,
        );
        entity.hidden = true;
        entity
    }

    /// Creates the Golden Seed at the terminal level's goal position.
    pub fn golden_seed(pos: Position) -> Self {
        Self::base(
            EntityId::new("golden-seed"),
            EntityKind::Seed,
            pos,
            "The Golden Seed",
        )
    }

    /// A dead or dying entity is excluded from all further interaction.
    pub fn is_alive(&self) -> bool {
        !self.dying
    }

    /// Whether this entity currently blocks the player's movement.
    pub fn blocks_movement(&self) -> bool {
        self.kind.is_hostile() && !self.hidden && self.is_alive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_assign_deterministic_ids() {
        let ghost = Entity::ghost(2, 0, Position::new(3, 3));
        assert_eq!(ghost.id.as_str(), "ghost-2-0");
        assert_eq!(ghost.health, Some(config::GHOST_MAX_HEALTH));

        let rat = Entity::rat(2, 1, Position::new(4, 4));
        assert_eq!(rat.id.as_str(), "rat-2-1");
        assert_eq!(rat.max_health, Some(config::RAT_MAX_HEALTH));

        let seed = Entity::golden_seed(Position::new(1, 1));
        assert_eq!(seed.id.as_str(), "golden-seed");
        assert!(seed.health.is_none());
    }

    #[test]
    fn test_artifact_spawns_hidden() {
        let artifact = Entity::artifact(3, "The Lost Tome", Position::new(5, 5));
        assert!(artifact.hidden);
        assert_eq!(artifact.id.as_str(), "artifact-level-3");
        assert!(!artifact.blocks_movement());
    }

    #[test]
    fn test_hostility_and_retaliation() {
        assert!(EntityKind::Ghost.is_hostile());
        assert!(EntityKind::Rat.is_hostile());
        assert!(!EntityKind::Potion.is_hostile());

        assert_eq!(EntityKind::Rat.retaliation_damage(), config::RAT_DAMAGE);
        assert_eq!(EntityKind::Ghost.retaliation_damage(), 0);
    }

    #[test]
    fn test_dying_entity_stops_blocking() {
        let mut rat = Entity::rat(1, 0, Position::new(2, 2));
        assert!(rat.blocks_movement());
        rat.dying = true;
        assert!(!rat.is_alive());
        assert!(!rat.blocks_movement());
    }
}
