//! # Quest Catalog
//!
//! Per-level quest constructors, parameterized by which entities actually
//! spawned. A quest whose giver ghost or artifact failed to spawn is simply
//! omitted for that level, never synthesized from nothing.

use crate::{
    Entity, EntityKind, Objective, Quest, QuestDialogue, QuestId, QuestKind, QuestReward,
};

/// Builds the quest set for a freshly generated level.
pub fn quests_for_level(level_id: u32, entities: &[Entity]) -> Vec<Quest> {
    let ghost = entities
        .iter()
        .find(|entity| entity.kind == EntityKind::Ghost);
    let Some(ghost) = ghost else {
        return Vec::new();
    };

    match level_id {
        1 => vec![explore_quest(ghost)],
        2 => vec![kill_quest(level_id, ghost, entities)],
        3 => {
            let artifact = entities
                .iter()
                .find(|entity| entity.kind == EntityKind::Artifact);
            match artifact {
                Some(artifact) => vec![fetch_quest(level_id, ghost, artifact)],
                None => Vec::new(),
            }
        }
        4 => vec![escort_quest(level_id, ghost)],
        5 => vec![final_quest(ghost)],
        _ => Vec::new(),
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|line| line.to_string()).collect()
}

/// Level 1: introduction quest, explore a handful of tiles.
fn explore_quest(ghost: &Entity) -> Quest {
    Quest::new(
        QuestId::new("quest-explore-1"),
        1,
        QuestKind::ExploreRooms,
        ghost.id.clone(),
        "The Ghost's Plea",
        "A restless spirit calls out from the darkness. Listen to their story and explore the cellar.",
        vec![Objective::new("Explore the cellar", 5)],
        QuestReward {
            health: 5,
            unlock_stairs: true,
            ..QuestReward::default()
        },
        QuestDialogue {
            on_give: lines(&[
                "Welcome, traveler... I've been trapped in this cellar for so long...",
                "Please, explore these chambers. Help me understand what lies below.",
                "The darkness grows thin here. Perhaps you can help me find peace.",
            ]),
            on_active: lines(&[
                "Have you seen anything unusual in your travels?",
                "The further chambers hold secrets we must uncover.",
            ]),
            on_complete: lines(&[
                "Thank you for exploring. Now I understand what must be done.",
                "The path forward is revealed. Go deeper if you dare.",
            ]),
        },
    )
}

/// Level 2: cull most of the spawned rat population.
fn kill_quest(level_id: u32, ghost: &Entity, entities: &[Entity]) -> Quest {
    let rat_count = entities
        .iter()
        .filter(|entity| entity.kind == EntityKind::Rat)
        .count() as u32;
    let required = ((rat_count * 3 + 3) / 4).max(1);

    Quest::new(
        QuestId::new(format!("quest-kill-{}", level_id)),
        level_id,
        QuestKind::KillRats,
        ghost.id.clone(),
        "The Infestation",
        format!("Defeat {} corrupted rats to cleanse this level.", required),
        vec![Objective::new("Defeat rats", required)],
        QuestReward {
            health: 10,
            unlock_stairs: true,
            ..QuestReward::default()
        },
        QuestDialogue {
            on_give: lines(&[
                "These rats... they are not natural.",
                "The corruption has twisted them into something vile.",
                "Slay them and I can cleanse this area.",
            ]),
            on_active: lines(&[
                "The rats still skitter in the darkness.",
                "Come back when you've cleaned out this sewer!",
            ]),
            on_complete: lines(&[
                "The corruption weakens. I can feel the air clearing.",
                "You have earned passage below.",
            ]),
        },
    )
}

/// Level 3: find the hidden tome, revealed once the quest starts.
fn fetch_quest(level_id: u32, ghost: &Entity, artifact: &Entity) -> Quest {
    Quest::new(
        QuestId::new(format!("quest-fetch-{}", level_id)),
        level_id,
        QuestKind::FetchArtifact,
        ghost.id.clone(),
        "The Lost Tome",
        "An ancient scholar seeks a forbidden book lost in the library's depths.",
        vec![Objective::new("Find the Lost Tome", 1)],
        QuestReward {
            health: 15,
            unlock_stairs: true,
            reveal_map: true,
            ..QuestReward::default()
        },
        QuestDialogue {
            on_give: lines(&[
                "Ah, welcome! I've been searching for a tome... so very important.",
                "The knowledge within could unlock the path to the golden seed.",
                "Will you help me find it?",
            ]),
            on_active: lines(&[
                "The Tome is hidden somewhere in these shelves...",
                "It contains power beyond measure. Please find it.",
            ]),
            on_complete: lines(&[
                "You found it! The Lost Tome... it contains the secrets I needed.",
                "Now the path forward becomes clear.",
            ]),
        },
    )
    .with_revealed(vec![artifact.id.clone()])
}

/// Level 4: guide the lost spirit to the stairs.
fn escort_quest(level_id: u32, ghost: &Entity) -> Quest {
    Quest::new(
        QuestId::new(format!("quest-escort-{}", level_id)),
        level_id,
        QuestKind::EscortSpirit,
        ghost.id.clone(),
        "Guide the Lost Soul",
        "A trapped spirit needs guidance through the dark maze to find peace.",
        vec![Objective::new("Guide the spirit to the exit", 1)],
        QuestReward {
            health: 20,
            unlock_stairs: true,
            ..QuestReward::default()
        },
        QuestDialogue {
            on_give: lines(&[
                "I... I'm so lost in this darkness...",
                "Will you guide me through? I fear I cannot find the way alone.",
                "Please, help me reach the light above.",
            ]),
            on_active: lines(&[
                "This way? Or that way? Everything looks the same...",
                "Stay close to me. I feel safer near you.",
            ]),
            on_complete: lines(&[
                "We did it! I can feel the light now!",
                "Thank you for guiding me. I can finally rest.",
            ]),
        },
    )
}

/// Level 5: the Golden Seed, and the end of the descent.
fn final_quest(ghost: &Entity) -> Quest {
    Quest::new(
        QuestId::new("quest-final-seed"),
        5,
        QuestKind::FinalSeed,
        ghost.id.clone(),
        "The Golden Seed",
        "At last... the final chamber. The Golden Seed is within reach.",
        vec![Objective::new("Retrieve the Golden Seed", 1)],
        QuestReward {
            artifact: Some("The Golden Seed of Life".to_string()),
            ..QuestReward::default()
        },
        QuestDialogue {
            on_give: lines(&[
                "We've made it... to the heart of the dungeon.",
                "The Golden Seed lies ahead, guarded by ancient forces.",
                "This is your moment. Go forward and claim your destiny.",
            ]),
            on_active: lines(&[
                "The seed glows softly in this sacred place...",
                "Can you feel it? The power of life itself.",
            ]),
            on_complete: lines(&[
                "You did it! You've retrieved the seed!",
                "Nature will bloom again. The world is saved!",
            ]),
        },
    )
}
