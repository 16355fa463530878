//! # Game State Module
//!
//! Central game state and the coordinator that folds player intents into new
//! state snapshots.
//!
//! The state is the single source of truth and is replaced, never mutated in
//! place, on every transition: each accepted intent produces a fresh
//! `GameState`, with combat, fog, and quest effects folded in atomically.
//! Expected gameplay no-ops (walking into a wall, interacting with nothing,
//! descending too early) return the state unchanged apart from an
//! informational log line; only dungeon generation exhaustion is an error.

use crate::config;
use crate::game::fog::{compute_visibility, count_explored, uniform_grid, BoolGrid};
use crate::quests::{self, quests_for_level, pick_dialogue_line, QuestKind, QuestStatus};
use crate::{
    resolve_bump, strike, BumpOutcome, DialogueState, Direction, DungeonGenerator, Entity,
    EntityId, EntityKind, GeneratedLevel, Generator, LevelConfig, MapGrid, Narrator, Position,
    Quest, QuestId, SproutError, SproutResult, Tile,
};
use log::info;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of an in-game log message, used by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogKind {
    Info,
    Combat,
    Dialog,
    Success,
}

/// One entry in the bounded recent message log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub message: String,
    pub kind: LogKind,
}

/// Who spoke a dialogue line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    Player,
    Npc,
}

/// One line of an NPC conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueLine {
    pub sender: Speaker,
    pub text: String,
}

/// An open conversation with an NPC.
///
/// The session keeps its own clone of the speaker so a late narrator reply
/// can still be appended after the entity has left the level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueSession {
    pub speaker: Entity,
    pub history: Vec<DialogueLine>,
}

/// Blocking presentation modes. While any mode other than `Playing` is
/// active, player intents are rejected outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiMode {
    Intro,
    Tutorial,
    LevelStart,
    Dialogue(DialogueSession),
    Playing,
}

impl UiMode {
    /// Whether this mode swallows movement/interact/wait intents.
    pub fn blocks_input(&self) -> bool {
        !matches!(self, UiMode::Playing)
    }
}

/// A scheduled entity removal at a virtual time, drained whenever the turn
/// counter advances. Removing an already-gone entity is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRemoval {
    pub entity_id: EntityId,
    pub due_turn: u64,
}

/// A discrete player intent; one per input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Move(Direction),
    Interact,
    Wait,
}

/// The single source of truth for one running game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player_pos: Position,
    pub map: MapGrid,
    /// Fog of war: currently visible tiles.
    pub visible: BoolGrid,
    /// Exploration memory; grows monotonically within a level.
    pub explored: BoolGrid,
    pub entities: Vec<Entity>,
    pub health: i32,
    pub max_health: i32,
    pub level: u32,
    pub turn: u64,
    pub game_over: bool,
    pub game_won: bool,
    pub quests: Vec<Quest>,
    /// At most one quest is active at a time; this field is authoritative.
    pub active_quest_id: Option<QuestId>,
    pub completed_quest_ids: Vec<QuestId>,
    /// Append-only player-facing quest history.
    pub quest_log: Vec<String>,
    /// Bounded recent message log.
    pub log: Vec<LogEntry>,
    pub ui_mode: UiMode,
    pub pending_removals: Vec<PendingRemoval>,
}

/// The nearest qualifying interaction target, by priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Interaction {
    Pickup(EntityId),
    Descend,
    Talk(EntityId),
}

impl GameState {
    /// Starts a new game on the first level.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprout::GameState;
    /// use sprout::generation::create_rng;
    ///
    /// let state = GameState::new_game(&mut create_rng(42)).unwrap();
    /// assert_eq!(state.level, 1);
    /// assert_eq!(state.turn, 0);
    /// assert!(!state.game_over);
    /// ```
    pub fn new_game(rng: &mut StdRng) -> SproutResult<Self> {
        let config = crate::level_config(1).ok_or(SproutError::UnknownLevel(1))?;
        let generated = DungeonGenerator::new().generate(config, rng)?;
        let mut state = Self::from_generated(config, generated);

        state.ui_mode = UiMode::Intro;
        state.push_log(
            "Welcome to the Cellar. Use Arrow Keys/WASD to move.",
            LogKind::Info,
        );
        state.push_log(
            "Bump into enemies to attack. Talk to spirits for clues.",
            LogKind::Info,
        );
        Ok(state)
    }

    /// Builds a fresh level-1-style state around one generated level.
    fn from_generated(config: &LevelConfig, generated: GeneratedLevel) -> Self {
        let quests = quests_for_level(config.id, &generated.entities);
        let mut entities = generated.entities;
        attach_quest_givers(&mut entities, &quests);

        let width = generated.map.width();
        let height = generated.map.height();
        let fog = compute_visibility(
            &generated.map,
            generated.start_pos,
            config::VISIBILITY_RADIUS,
            &uniform_grid(width, height, false),
        );

        Self {
            player_pos: generated.start_pos,
            map: generated.map,
            visible: fog.visible,
            explored: fog.explored,
            entities,
            health: config::PLAYER_MAX_HEALTH,
            max_health: config::PLAYER_MAX_HEALTH,
            level: config.id,
            turn: 0,
            game_over: false,
            game_won: false,
            quests,
            active_quest_id: None,
            completed_quest_ids: Vec::new(),
            quest_log: Vec::new(),
            log: Vec::new(),
            ui_mode: UiMode::Playing,
            pending_removals: Vec::new(),
        }
    }

    /// Appends a message to the bounded recent log.
    pub fn push_log(&mut self, message: impl Into<String>, kind: LogKind) {
        self.log.push(LogEntry {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
        });
        let overflow = self.log.len().saturating_sub(config::MAX_LOG_ENTRIES);
        if overflow > 0 {
            self.log.drain(0..overflow);
        }
    }

    /// Looks up a quest by id.
    pub fn quest_by_id(&self, quest_id: &QuestId) -> Option<&Quest> {
        self.quests.iter().find(|quest| quest.id == *quest_id)
    }

    /// The currently active quest, if any.
    pub fn active_quest(&self) -> Option<&Quest> {
        let id = self.active_quest_id.as_ref()?;
        self.quest_by_id(id)
    }

    /// The current level's designated quest: its first catalog entry. Stairs
    /// stay inert until this quest completes.
    pub fn designated_quest(&self) -> Option<&Quest> {
        self.quests.iter().find(|quest| quest.level_id == self.level)
    }

    /// Looks up an entity by id.
    pub fn entity_by_id(&self, entity_id: &EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id == *entity_id)
    }

    /// Whether all input should currently be rejected.
    pub fn input_blocked(&self) -> bool {
        self.game_over || self.game_won || self.ui_mode.blocks_input()
    }

    /// Steps past the current overlay: intro rolls into the tutorial, every
    /// other overlay returns to play.
    pub fn dismiss_overlay(mut self) -> Self {
        self.ui_mode = match self.ui_mode {
            UiMode::Intro => UiMode::Tutorial,
            _ => UiMode::Playing,
        };
        self
    }

    /// Closes an open dialogue, if any.
    pub fn close_dialogue(mut self) -> Self {
        if matches!(self.ui_mode, UiMode::Dialogue(_)) {
            self.ui_mode = UiMode::Playing;
        }
        self
    }

    /// Serializes the state to JSON.
    pub fn to_json(&self) -> SproutResult<String> {
        serde_json::to_string_pretty(self).map_err(SproutError::from)
    }

    /// Restores a state from JSON.
    pub fn from_json(json: &str) -> SproutResult<Self> {
        serde_json::from_str(json).map_err(SproutError::from)
    }

    /// Builds the per-turn presentation snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            level: self.level,
            level_name: crate::level_config(self.level)
                .map(|config| config.name.to_string())
                .unwrap_or_default(),
            turn: self.turn,
            health: self.health,
            max_health: self.max_health,
            player_pos: self.player_pos,
            map: self.map.clone(),
            visible: self.visible.clone(),
            explored: self.explored.clone(),
            entities: self
                .entities
                .iter()
                .filter(|entity| !entity.hidden)
                .map(|entity| EntityView {
                    id: entity.id.clone(),
                    kind: entity.kind,
                    pos: entity.pos,
                    name: entity.name.clone(),
                    dying: entity.dying,
                })
                .collect(),
            active_quest: self.active_quest().map(|quest| QuestSummary {
                title: quest.title.clone(),
                description: quest.description.clone(),
                objectives: quest.open_objective_lines(),
            }),
            recent_log: self.log.clone(),
            game_over: self.game_over,
            game_won: self.game_won,
        }
    }
}

/// Everything the presentation layer needs to render one turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub level: u32,
    pub level_name: String,
    pub turn: u64,
    pub health: i32,
    pub max_health: i32,
    pub player_pos: Position,
    pub map: MapGrid,
    pub visible: BoolGrid,
    pub explored: BoolGrid,
    pub entities: Vec<EntityView>,
    pub active_quest: Option<QuestSummary>,
    pub recent_log: Vec<LogEntry>,
    pub game_over: bool,
    pub game_won: bool,
}

/// Renderable view of one entity; hidden entities are excluded upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub kind: EntityKind,
    pub pos: Position,
    pub name: String,
    pub dying: bool,
}

/// Active quest summary for the HUD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestSummary {
    pub title: String,
    pub description: String,
    /// Unmet objective descriptions with progress counters.
    pub objectives: Vec<String>,
}

/// Dispatches one player intent, producing the next state snapshot.
///
/// Intents are rejected outright (state returned unchanged) while a blocking
/// UI mode is active or the game has ended. Only level generation can fail;
/// every expected gameplay condition is an informational no-op.
pub fn apply_intent(
    state: GameState,
    intent: Intent,
    narrator: &dyn Narrator,
    rng: &mut StdRng,
) -> SproutResult<GameState> {
    if state.input_blocked() {
        return Ok(state);
    }

    match intent {
        Intent::Move(direction) => Ok(handle_move(state, direction)),
        Intent::Wait => Ok(handle_wait(state, narrator, rng)),
        Intent::Interact => handle_interact(state, narrator, rng),
    }
}

/// Advances virtual time by one turn and drains due scheduled removals.
fn advance_turn(mut state: GameState) -> GameState {
    state.turn += 1;
    let turn = state.turn;

    let due: Vec<EntityId> = state
        .pending_removals
        .iter()
        .filter(|removal| removal.due_turn <= turn)
        .map(|removal| removal.entity_id.clone())
        .collect();
    if !due.is_empty() {
        state.entities.retain(|entity| !due.contains(&entity.id));
        state.pending_removals.retain(|removal| removal.due_turn > turn);
    }

    state
}

/// Schedules a dying entity's removal a fixed number of turns out.
fn schedule_removal(mut state: GameState, entity_id: &EntityId) -> GameState {
    state.pending_removals.push(PendingRemoval {
        entity_id: entity_id.clone(),
        due_turn: state.turn + config::DEATH_LINGER_TURNS,
    });
    state
}

/// Counts one rat kill against an active KILL_RATS quest.
fn record_rat_kill(state: GameState) -> GameState {
    let target = state
        .active_quest()
        .filter(|quest| quest.kind == QuestKind::KillRats)
        .map(|quest| {
            let current = quest
                .objectives
                .first()
                .map(|objective| objective.current)
                .unwrap_or(0);
            (quest.id.clone(), current)
        });

    match target {
        Some((quest_id, current)) => {
            quests::advance_objective(state, &quest_id, 0, i64::from(current) + 1)
        }
        None => state,
    }
}

fn handle_move(mut state: GameState, direction: Direction) -> GameState {
    let target = state.player_pos + direction.to_delta();

    if !state.map.in_bounds(target) {
        return state;
    }
    if state.map.get(target) == Some(Tile::Wall) {
        state.push_log("You bumped into a wall.", LogKind::Info);
        return state;
    }

    // Bump attack: a hostile occupant converts the move into an attack.
    let blocking = state
        .entities
        .iter()
        .find(|entity| entity.blocks_movement() && entity.pos == target)
        .cloned();
    if let Some(entity) = blocking {
        let resolution = resolve_bump(state.health, &entity);
        if let Some(stored) = state.entities.iter_mut().find(|e| e.id == entity.id) {
            *stored = resolution.target;
        }
        state.health = resolution.attacker_health;

        match resolution.outcome {
            BumpOutcome::Slain => {
                state.push_log(
                    format!(
                        "You strike {} for {} damage! It falls.",
                        entity.name,
                        config::PLAYER_DAMAGE
                    ),
                    LogKind::Combat,
                );
                state = schedule_removal(state, &entity.id);
                if entity.kind == EntityKind::Rat {
                    state = record_rat_kill(state);
                }
            }
            BumpOutcome::HitWithRetaliation { damage } => {
                state.push_log(
                    format!(
                        "You strike {} for {} damage! It retaliates for {} damage.",
                        entity.name,
                        config::PLAYER_DAMAGE,
                        damage
                    ),
                    LogKind::Combat,
                );
            }
            BumpOutcome::Hit => {
                state.push_log(
                    format!("You strike {} for {} damage.", entity.name, config::PLAYER_DAMAGE),
                    LogKind::Combat,
                );
            }
        }

        // A dead attacker ends the game in the same transition.
        if state.health <= 0 {
            state.health = 0;
            state.game_over = true;
            state.push_log("You have perished in the deep dark...", LogKind::Combat);
        }
        return advance_turn(state);
    }

    // Plain relocation: move, recompute fog, feed passive quests.
    state.player_pos = target;
    let fog = compute_visibility(
        &state.map,
        target,
        config::VISIBILITY_RADIUS,
        &state.explored,
    );
    state.visible = fog.visible;
    state.explored = fog.explored;

    let explore_target = state
        .active_quest()
        .filter(|quest| quest.kind == QuestKind::ExploreRooms)
        .map(|quest| quest.id.clone());
    if let Some(quest_id) = explore_target {
        let explored = count_explored(&state.explored) as i64;
        state = quests::advance_objective(state, &quest_id, 0, explored);
    }

    if state.map.get(target) == Some(Tile::Stairs) {
        let escort_target = state
            .active_quest()
            .filter(|quest| quest.kind == QuestKind::EscortSpirit)
            .map(|quest| quest.id.clone());
        if let Some(quest_id) = escort_target {
            state = quests::advance_objective(state, &quest_id, 0, 1);
        }
    }

    advance_turn(state)
}

fn handle_wait(mut state: GameState, narrator: &dyn Narrator, rng: &mut StdRng) -> GameState {
    state.health = (state.health + config::WAIT_HEAL).min(state.max_health);
    state.push_log("You rest for a moment...", LogKind::Info);

    if rng.gen_bool(config::WAIT_TIP_CHANCE) {
        let tip = narrator.request_ambient_tip(&state);
        state.push_log(tip, LogKind::Info);
    }

    advance_turn(state)
}

/// Resolves the single nearest qualifying interaction target: same-tile
/// pickup or stairs first, then an adjacent (Chebyshev distance 1) NPC.
fn identify_interaction(state: &GameState) -> Option<Interaction> {
    let item = state.entities.iter().find(|entity| {
        entity.kind.is_item() && !entity.hidden && entity.is_alive() && entity.pos == state.player_pos
    });
    if let Some(item) = item {
        return Some(Interaction::Pickup(item.id.clone()));
    }

    if state.map.get(state.player_pos) == Some(Tile::Stairs) {
        return Some(Interaction::Descend);
    }

    let npc = state.entities.iter().find(|entity| {
        entity.kind.is_hostile()
            && !entity.hidden
            && entity.is_alive()
            && entity.pos.chebyshev_distance(state.player_pos) <= 1
    });
    if let Some(npc) = npc {
        return Some(Interaction::Talk(npc.id.clone()));
    }

    None
}

fn handle_interact(
    mut state: GameState,
    narrator: &dyn Narrator,
    rng: &mut StdRng,
) -> SproutResult<GameState> {
    match identify_interaction(&state) {
        None => {
            state.push_log("Nothing to interact with here.", LogKind::Info);
            Ok(state)
        }
        Some(Interaction::Pickup(entity_id)) => Ok(handle_pickup(state, &entity_id)),
        Some(Interaction::Descend) => handle_descend(state, rng),
        Some(Interaction::Talk(entity_id)) => Ok(handle_talk(state, &entity_id, narrator, rng)),
    }
}

fn handle_pickup(mut state: GameState, entity_id: &EntityId) -> GameState {
    let Some(entity) = state.entity_by_id(entity_id).cloned() else {
        return state;
    };
    state.entities.retain(|e| e.id != *entity_id);

    match entity.kind {
        EntityKind::Potion => {
            state.health = (state.health + config::POTION_HEAL).min(state.max_health);
            state.push_log("You drank the potion! Health restored.", LogKind::Success);
        }
        EntityKind::Artifact => {
            state.push_log(format!("You take {}.", entity.name), LogKind::Success);
            let fetch_target = state
                .active_quest()
                .filter(|quest| quest.kind == QuestKind::FetchArtifact)
                .map(|quest| quest.id.clone());
            if let Some(quest_id) = fetch_target {
                state = quests::advance_objective(state, &quest_id, 0, 1);
            }
        }
        EntityKind::Seed => {
            let final_target = state
                .active_quest()
                .filter(|quest| quest.kind == QuestKind::FinalSeed)
                .map(|quest| quest.id.clone());
            if let Some(quest_id) = final_target {
                state = quests::advance_objective(state, &quest_id, 0, 1);
            }
            state.game_won = true;
            state.push_log(
                "YOU FOUND THE GOLDEN SEED! NATURE IS RESTORED!",
                LogKind::Success,
            );
        }
        _ => {}
    }

    state
}

fn handle_descend(mut state: GameState, rng: &mut StdRng) -> SproutResult<GameState> {
    let gated = state
        .designated_quest()
        .map(|quest| quest.status != QuestStatus::Completed)
        .unwrap_or(false);
    if gated {
        state.push_log(
            "The path below is barred by a spectral force. Talk to the Spirit first.",
            LogKind::Info,
        );
        return Ok(state);
    }

    let next_level = state.level + 1;
    if crate::level_config(next_level).is_none() {
        state.push_log("There is no deeper level.", LogKind::Info);
        return Ok(state);
    }

    load_level(state, next_level, rng)
}

fn handle_talk(
    mut state: GameState,
    entity_id: &EntityId,
    narrator: &dyn Narrator,
    rng: &mut StdRng,
) -> GameState {
    let Some(entity) = state.entity_by_id(entity_id).cloned() else {
        return state;
    };

    // Talking at a rat is just more combat; no retaliation on this path.
    if entity.kind == EntityKind::Rat {
        let struck = strike(&entity, config::PLAYER_DAMAGE);
        let slain = struck.dying;
        let health = struck.health.unwrap_or(0);
        let max_health = struck.max_health.unwrap_or(0);
        if let Some(stored) = state.entities.iter_mut().find(|e| e.id == *entity_id) {
            *stored = struck;
        }

        if slain {
            state.push_log(
                format!(
                    "You hit the {} for {} damage! It dies.",
                    entity.name,
                    config::PLAYER_DAMAGE
                ),
                LogKind::Combat,
            );
            state = schedule_removal(state, entity_id);
            state = record_rat_kill(state);
        } else {
            state.push_log(
                format!(
                    "You hit the {} for {} damage! ({}/{})",
                    entity.name,
                    config::PLAYER_DAMAGE,
                    health,
                    max_health
                ),
                LogKind::Combat,
            );
        }
        return state;
    }

    // Ghosts run the quest conversation ladder.
    let quest = state
        .quests
        .iter()
        .find(|quest| quest.giver == entity.id)
        .cloned();

    match quest {
        Some(quest)
            if quest.status == QuestStatus::NotStarted && state.active_quest_id.is_none() =>
        {
            state = quests::start_quest(state, &quest.id);
            let line = pick_dialogue_line(&quest.dialogue.on_give, rng);
            open_dialogue(state, &entity, line)
        }
        Some(quest) if quest.status == QuestStatus::Active => {
            let line = pick_dialogue_line(&quest.dialogue.on_active, rng);
            open_dialogue(state, &entity, line)
        }
        Some(quest) if quest.status == QuestStatus::Completed => {
            let line = pick_dialogue_line(&quest.dialogue.on_complete, rng);
            open_dialogue(state, &entity, line)
        }
        _ => {
            let line = narrator.request_dialogue(&entity, &state, "Hello!");
            open_dialogue(state, &entity, line)
        }
    }
}

fn open_dialogue(mut state: GameState, speaker: &Entity, opening_line: String) -> GameState {
    state.push_log(format!("{}: {}", speaker.name, opening_line), LogKind::Dialog);
    state.ui_mode = UiMode::Dialogue(DialogueSession {
        speaker: speaker.clone(),
        history: vec![DialogueLine {
            sender: Speaker::Npc,
            text: opening_line,
        }],
    });
    state
}

/// Sends a freeform chat line into the open dialogue.
///
/// The narrator's reply is appended to whatever history currently exists; a
/// reply that arrives for a conversation the world has moved past still
/// lands, by design. No-op when no dialogue is open.
pub fn send_chat(mut state: GameState, message: &str, narrator: &dyn Narrator) -> GameState {
    let UiMode::Dialogue(session) = &state.ui_mode else {
        return state;
    };

    let mut session = session.clone();
    session.history.push(DialogueLine {
        sender: Speaker::Player,
        text: message.to_string(),
    });

    let reply = narrator.request_dialogue(&session.speaker, &state, message);
    session.history.push(DialogueLine {
        sender: Speaker::Npc,
        text: reply.clone(),
    });

    let speaker_name = session.speaker.name.clone();
    state.ui_mode = UiMode::Dialogue(session);
    state.push_log(format!("{}: {}", speaker_name, reply), LogKind::Dialog);
    state
}

/// Replaces the current level wholesale: new map, entities, fog, and the next
/// level's quest set appended to the running quest list.
///
/// Generation exhaustion propagates as a hard failure; no partial map is ever
/// installed.
pub fn load_level(mut state: GameState, level_id: u32, rng: &mut StdRng) -> SproutResult<GameState> {
    let config = crate::level_config(level_id).ok_or(SproutError::UnknownLevel(level_id))?;
    let generated = DungeonGenerator::new().generate(config, rng)?;

    let new_quests = quests_for_level(level_id, &generated.entities);
    let mut entities = generated.entities;
    attach_quest_givers(&mut entities, &new_quests);

    let width = generated.map.width();
    let height = generated.map.height();
    let fog = compute_visibility(
        &generated.map,
        generated.start_pos,
        config::VISIBILITY_RADIUS,
        &uniform_grid(width, height, false),
    );

    state.level = level_id;
    state.map = generated.map;
    state.entities = entities;
    state.player_pos = generated.start_pos;
    state.visible = fog.visible;
    state.explored = fog.explored;
    state.pending_removals.clear();
    state.quests.extend(new_quests);
    state.push_log(
        format!("You descend deeper into {}...", config.name),
        LogKind::Success,
    );
    state.ui_mode = UiMode::LevelStart;
    info!("descended to level {} ({})", config.id, config.name);

    Ok(state)
}

/// Wires quest back-references into the giver entities.
fn attach_quest_givers(entities: &mut [Entity], quests: &[Quest]) {
    for quest in quests {
        for entity in entities.iter_mut() {
            if entity.id == quest.giver {
                entity.quest_id = Some(quest.id.clone());
                entity.dialogue_state = DialogueState::QuestAvailable;
            }
        }
    }
}
