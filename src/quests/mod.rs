//! # Quest Engine
//!
//! Quest lifecycle, objective progression, and reward application.
//!
//! Each quest is a small state machine: NOT_STARTED -> ACTIVE ->
//! {COMPLETED | FAILED}, with terminal states never transitioning further.
//! Operations that would violate a precondition return the input unchanged;
//! re-talking to a giver or double-completing a quest is expected gameplay,
//! not an error.

pub mod catalog;

pub use catalog::*;

use crate::game::state::LogKind;
use crate::{EntityId, EntityKind, GameState, QuestId};
use log::info;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestStatus {
    NotStarted,
    Active,
    Completed,
    Failed,
}

/// What kind of play drives a quest forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestKind {
    /// Find a hidden artifact revealed when the quest starts.
    FetchArtifact,
    /// Kill a number of rats on the level.
    KillRats,
    /// Explore a number of tiles; driven passively by movement.
    ExploreRooms,
    /// Guide the giver spirit to the stairs.
    EscortSpirit,
    /// Retrieve the Golden Seed; winning the game.
    FinalSeed,
}

/// One measurable sub-goal of a quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    pub description: String,
    pub current: u32,
    pub required: u32,
    pub completed: bool,
}

impl Objective {
    /// Creates an objective with progress at zero.
    pub fn new(description: impl Into<String>, required: u32) -> Self {
        Self {
            description: description.into(),
            current: 0,
            required,
            completed: false,
        }
    }
}

/// Rewards applied atomically when a quest completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestReward {
    /// Health restored, capped at the player's maximum.
    pub health: i32,
    /// Removes the blocking giver ghost from the level.
    pub unlock_stairs: bool,
    /// Marks every tile of the level explored.
    pub reveal_map: bool,
    /// Named keepsake, for flavor only.
    pub artifact: Option<String>,
}

/// The three dialogue-line sets carried by every quest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestDialogue {
    pub on_give: Vec<String>,
    pub on_active: Vec<String>,
    pub on_complete: Vec<String>,
}

/// A quest and its full definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub id: QuestId,
    pub level_id: u32,
    pub kind: QuestKind,
    pub title: String,
    pub description: String,
    /// Weak reference to the giver entity; the entity may be gone.
    pub giver: EntityId,
    pub status: QuestStatus,
    pub objectives: Vec<Objective>,
    pub reward: QuestReward,
    /// Entities unhidden when this quest starts. Weak references.
    pub revealed_entity_ids: Vec<EntityId>,
    pub dialogue: QuestDialogue,
}

impl Quest {
    /// Creates a quest in NOT_STARTED with all objective progress at zero.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: QuestId,
        level_id: u32,
        kind: QuestKind,
        giver: EntityId,
        title: impl Into<String>,
        description: impl Into<String>,
        objectives: Vec<Objective>,
        reward: QuestReward,
        dialogue: QuestDialogue,
    ) -> Self {
        Self {
            id,
            level_id,
            kind,
            title: title.into(),
            description: description.into(),
            giver,
            status: QuestStatus::NotStarted,
            objectives,
            reward,
            revealed_entity_ids: Vec::new(),
            dialogue,
        }
    }

    /// Sets the entities revealed when the quest starts.
    pub fn with_revealed(mut self, ids: Vec<EntityId>) -> Self {
        self.revealed_entity_ids = ids;
        self
    }

    /// Returns a copy with one objective's progress updated.
    ///
    /// The new value is clamped into `[0, required]` and the objective's
    /// completed flag recomputed. An out-of-range index returns the quest
    /// unchanged. When every objective is complete, the quest's status
    /// becomes COMPLETED as a side effect.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprout::{Objective, Quest, QuestDialogue, QuestId, QuestKind, QuestReward};
    /// use sprout::EntityId;
    ///
    /// let quest = Quest::new(
    ///     QuestId::new("quest-kill-2"),
    ///     2,
    ///     QuestKind::KillRats,
    ///     EntityId::new("ghost-2-0"),
    ///     "The Infestation",
    ///     "Deal with the rat problem.",
    ///     vec![Objective::new("Defeat rats", 3)],
    ///     QuestReward::default(),
    ///     QuestDialogue::default(),
    /// );
    ///
    /// let updated = quest.update_objective(0, -5);
    /// assert_eq!(updated.objectives[0].current, 0);
    ///
    /// let updated = quest.update_objective(0, 100);
    /// assert_eq!(updated.objectives[0].current, 3);
    /// assert!(updated.objectives[0].completed);
    /// ```
    pub fn update_objective(&self, index: usize, new_current: i64) -> Quest {
        if index >= self.objectives.len() {
            return self.clone();
        }

        let mut updated = self.clone();
        let objective = &mut updated.objectives[index];
        let clamped = new_current.clamp(0, i64::from(objective.required)) as u32;
        objective.current = clamped;
        objective.completed = clamped >= objective.required;

        if updated.all_objectives_completed() {
            updated.status = QuestStatus::Completed;
        }

        updated
    }

    /// True when every objective has reached its requirement.
    pub fn all_objectives_completed(&self) -> bool {
        self.objectives.iter().all(|objective| objective.completed)
    }

    /// Player-facing lines for unmet objectives, with progress counters.
    pub fn open_objective_lines(&self) -> Vec<String> {
        self.objectives
            .iter()
            .filter(|objective| !objective.completed)
            .map(|objective| {
                format!(
                    "{} ({}/{})",
                    objective.description, objective.current, objective.required
                )
            })
            .collect()
    }
}

/// Picks one line from a dialogue set at random.
pub fn pick_dialogue_line(lines: &[String], rng: &mut StdRng) -> String {
    if lines.is_empty() {
        return "I have nothing more to say...".to_string();
    }
    lines[rng.gen_range(0..lines.len())].clone()
}

/// Activates a NOT_STARTED quest: reveals its hidden entities, records it as
/// the active quest, and logs the start.
///
/// No-ops (returns the state unchanged) when the quest is missing, already
/// past NOT_STARTED, or another quest is currently active.
pub fn start_quest(mut state: GameState, quest_id: &QuestId) -> GameState {
    let Some(quest) = state.quest_by_id(quest_id).cloned() else {
        return state;
    };
    if quest.status != QuestStatus::NotStarted || state.active_quest_id.is_some() {
        return state;
    }

    for entity in &mut state.entities {
        if quest.revealed_entity_ids.contains(&entity.id) {
            entity.hidden = false;
        }
        if entity.id == quest.giver {
            entity.dialogue_state = crate::DialogueState::QuestActive;
        }
    }

    if let Some(stored) = state.quests.iter_mut().find(|q| q.id == *quest_id) {
        stored.status = QuestStatus::Active;
    }
    state.active_quest_id = Some(quest.id.clone());
    state.quest_log.push(format!("Quest Started: {}", quest.title));
    state.push_log(format!("Quest Started: {}", quest.title), LogKind::Success);
    info!("quest {} started on level {}", quest.id, quest.level_id);

    state
}

/// Completes a quest and applies its rewards atomically.
///
/// Accepts a quest that is ACTIVE, or one auto-completed by
/// [`Quest::update_objective`] but not yet recorded. NOT_STARTED and FAILED
/// quests, and quests already recorded in `completed_quest_ids`, leave the
/// state unchanged, so rewards are applied at most once.
pub fn complete_quest(mut state: GameState, quest_id: &QuestId) -> GameState {
    let Some(quest) = state.quest_by_id(quest_id).cloned() else {
        return state;
    };
    if matches!(quest.status, QuestStatus::NotStarted | QuestStatus::Failed)
        || state.completed_quest_ids.contains(quest_id)
    {
        return state;
    }

    if quest.reward.health > 0 {
        state.health = (state.health + quest.reward.health).min(state.max_health);
    }
    if quest.reward.unlock_stairs {
        state
            .entities
            .retain(|entity| !(entity.kind == EntityKind::Ghost && entity.id == quest.giver));
    }
    if quest.reward.reveal_map {
        for row in &mut state.explored {
            for cell in row.iter_mut() {
                *cell = true;
            }
        }
    }

    if let Some(stored) = state.quests.iter_mut().find(|q| q.id == *quest_id) {
        stored.status = QuestStatus::Completed;
    }
    for entity in &mut state.entities {
        if entity.id == quest.giver {
            entity.dialogue_state = crate::DialogueState::Done;
        }
    }

    state.completed_quest_ids.push(quest.id.clone());
    if state.active_quest_id.as_ref() == Some(quest_id) {
        state.active_quest_id = None;
    }
    state
        .quest_log
        .push(format!("Quest Completed: {}", quest.title));
    state.push_log(format!("Quest Completed: {}", quest.title), LogKind::Success);
    info!("quest {} completed on level {}", quest.id, quest.level_id);

    state
}

/// Fails an ACTIVE quest. Any other status leaves the state unchanged.
pub fn fail_quest(mut state: GameState, quest_id: &QuestId) -> GameState {
    let Some(quest) = state.quest_by_id(quest_id).cloned() else {
        return state;
    };
    if quest.status != QuestStatus::Active {
        return state;
    }

    if let Some(stored) = state.quests.iter_mut().find(|q| q.id == *quest_id) {
        stored.status = QuestStatus::Failed;
    }
    if state.active_quest_id.as_ref() == Some(quest_id) {
        state.active_quest_id = None;
    }
    state.quest_log.push(format!("Quest Failed: {}", quest.title));
    state.push_log(format!("Quest Failed: {}", quest.title), LogKind::Info);

    state
}

/// Routes a passive observation into a quest objective.
///
/// Updates the objective on an ACTIVE quest and, if that completes the quest,
/// immediately applies rewards through [`complete_quest`]. This is the single
/// pipeline used by exploration counting, rat kills, and pickups.
pub fn advance_objective(
    mut state: GameState,
    quest_id: &QuestId,
    index: usize,
    new_current: i64,
) -> GameState {
    let Some(quest) = state.quest_by_id(quest_id).cloned() else {
        return state;
    };
    if quest.status != QuestStatus::Active {
        return state;
    }

    let updated = quest.update_objective(index, new_current);
    let finished = updated.all_objectives_completed();
    if let Some(stored) = state.quests.iter_mut().find(|q| q.id == *quest_id) {
        *stored = updated;
    }

    if finished {
        complete_quest(state, quest_id)
    } else {
        state
    }
}
