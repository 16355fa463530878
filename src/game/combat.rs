//! # Combat Resolution
//!
//! Bump-attack resolution and the talk-path strike.
//!
//! Combat is a simultaneous exchange: the player's damage and any retaliation
//! land in the same resolution step, not on alternating turns. A target at or
//! below zero health is marked dying; its actual removal is a scheduled effect
//! handled by the coordinator.

use crate::config;
use crate::Entity;
use serde::{Deserialize, Serialize};

/// What a single bump attack did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BumpOutcome {
    /// Target survived and did not fight back.
    Hit,
    /// Target survived and dealt retaliation damage to the attacker.
    HitWithRetaliation { damage: i32 },
    /// Target dropped to zero health and is now dying.
    Slain,
}

/// Result of resolving one bump attack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BumpResolution {
    /// The target with updated health and dying flag.
    pub target: Entity,
    /// Attacker health after any retaliation.
    pub attacker_health: i32,
    pub outcome: BumpOutcome,
}

/// Resolves a movement intent that landed on a hostile entity.
///
/// The player deals fixed damage. If the target survives and its kind
/// retaliates (rats do, ghosts never), the attacker takes that damage in the
/// same step. Whether a dead attacker ends the game is the coordinator's
/// concern.
///
/// # Examples
///
/// ```
/// use sprout::{resolve_bump, BumpOutcome, Entity, Position};
///
/// let rat = Entity::rat(2, 0, Position::new(4, 4));
/// let resolution = resolve_bump(20, &rat);
///
/// assert_eq!(resolution.target.health, Some(3));
/// assert_eq!(resolution.attacker_health, 17);
/// assert_eq!(resolution.outcome, BumpOutcome::HitWithRetaliation { damage: 3 });
/// ```
pub fn resolve_bump(attacker_health: i32, target: &Entity) -> BumpResolution {
    let mut updated = strike(target, config::PLAYER_DAMAGE);

    if updated.dying {
        return BumpResolution {
            target: updated,
            attacker_health,
            outcome: BumpOutcome::Slain,
        };
    }

    let retaliation = updated.kind.retaliation_damage();
    if retaliation > 0 {
        return BumpResolution {
            target: updated,
            attacker_health: attacker_health - retaliation,
            outcome: BumpOutcome::HitWithRetaliation {
                damage: retaliation,
            },
        };
    }

    BumpResolution {
        target: updated,
        attacker_health,
        outcome: BumpOutcome::Hit,
    }
}

/// Applies flat damage to an entity, marking it dying at zero health.
///
/// Used by both the bump path and the talk-path strike against hostile NPCs;
/// the talk path never triggers retaliation.
pub fn strike(target: &Entity, damage: i32) -> Entity {
    let mut updated = target.clone();
    let current = updated
        .health
        .or(updated.max_health)
        .unwrap_or(config::GHOST_MAX_HEALTH);
    let remaining = current - damage;

    updated.health = Some(remaining.max(0));
    if remaining <= 0 {
        updated.dying = true;
    }
    updated
}
