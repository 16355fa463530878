//! Integration tests for bump combat, deferred death removal, dialogue, and
//! fog-of-war behavior driven through the coordinator.

use proptest::prelude::*;
use sprout::game::fog::{count_explored, uniform_grid};
use sprout::generation::create_rng;
use sprout::{
    apply_intent, send_chat, Direction, Entity, GameState, Intent, MapGrid, Narrator,
    NarratorConfig, OfflineNarrator, Position, Speaker, Tile, UiMode,
};

const WIDTH: usize = 12;
const HEIGHT: usize = 9;

fn narrator() -> OfflineNarrator {
    OfflineNarrator::new(NarratorConfig::offline())
}

/// A small all-floor level with the player near the top-left corner.
fn bare_state() -> GameState {
    GameState {
        player_pos: Position::new(2, 2),
        map: MapGrid::filled(WIDTH, HEIGHT, Tile::Floor),
        visible: uniform_grid(WIDTH, HEIGHT, false),
        explored: uniform_grid(WIDTH, HEIGHT, false),
        entities: Vec::new(),
        health: 20,
        max_health: 20,
        level: 1,
        turn: 0,
        game_over: false,
        game_won: false,
        quests: Vec::new(),
        active_quest_id: None,
        completed_quest_ids: Vec::new(),
        quest_log: Vec::new(),
        log: Vec::new(),
        ui_mode: UiMode::Playing,
        pending_removals: Vec::new(),
    }
}

#[test]
fn test_bump_attack_is_a_simultaneous_exchange() {
    let mut state = bare_state();
    let rat = Entity::rat(1, 0, Position::new(3, 2)); // 8 health
    let rat_id = rat.id.clone();
    state.entities.push(rat);

    let after = apply_intent(
        state,
        Intent::Move(Direction::East),
        &narrator(),
        &mut create_rng(1),
    )
    .expect("move should not fail");

    let rat = after.entity_by_id(&rat_id).expect("rat survives");
    assert_eq!(rat.health, Some(3), "8 - 5 player damage");
    assert!(!rat.dying);
    assert_eq!(after.health, 17, "20 - 3 retaliation");
    assert_eq!(after.player_pos, Position::new(2, 2), "bump never relocates");
    assert_eq!(after.turn, 1);
}

#[test]
fn test_killed_rat_is_dying_then_absent() {
    let mut state = bare_state();
    let mut rat = Entity::rat(1, 0, Position::new(3, 2));
    rat.health = Some(4);
    let rat_id = rat.id.clone();
    state.entities.push(rat);

    let after = apply_intent(
        state,
        Intent::Move(Direction::East),
        &narrator(),
        &mut create_rng(1),
    )
    .expect("move should not fail");

    // Logically dead immediately: marked dying, no retaliation taken
    let rat = after.entity_by_id(&rat_id).expect("rat lingers while dying");
    assert!(rat.dying);
    assert_eq!(after.health, 20);

    // After the deferred delay the entity is gone from the list
    let after = apply_intent(after, Intent::Wait, &narrator(), &mut create_rng(2))
        .expect("wait should not fail");
    assert!(after.entity_by_id(&rat_id).is_none());
}

#[test]
fn test_dying_entity_no_longer_blocks_or_interacts() {
    let mut state = bare_state();
    let mut rat = Entity::rat(1, 0, Position::new(3, 2));
    rat.health = Some(4);
    let rat_pos = rat.pos;
    state.entities.push(rat);

    let after = apply_intent(
        state,
        Intent::Move(Direction::East),
        &narrator(),
        &mut create_rng(1),
    )
    .expect("move should not fail");

    // Moving again walks straight onto the corpse tile
    let after = apply_intent(
        after,
        Intent::Move(Direction::East),
        &narrator(),
        &mut create_rng(2),
    )
    .expect("move should not fail");
    assert_eq!(after.player_pos, rat_pos);
}

#[test]
fn test_fatal_retaliation_ends_the_game_atomically() {
    let mut state = bare_state();
    state.health = 3; // one retaliation kills
    let rat = Entity::rat(1, 0, Position::new(3, 2));
    state.entities.push(rat);

    let after = apply_intent(
        state,
        Intent::Move(Direction::East),
        &narrator(),
        &mut create_rng(1),
    )
    .expect("move should not fail");

    assert!(after.game_over);
    assert_eq!(after.health, 0);

    // No further intents are accepted once the game is over
    let frozen = after.clone();
    let rejected = apply_intent(after, Intent::Wait, &narrator(), &mut create_rng(2))
        .expect("rejected intents still return cleanly");
    assert_eq!(rejected, frozen);
}

#[test]
fn test_ghosts_take_bump_damage_without_retaliating() {
    let mut state = bare_state();
    let ghost = Entity::ghost(1, 0, Position::new(3, 2)); // 10 health
    let ghost_id = ghost.id.clone();
    state.entities.push(ghost);
    state.health = 9;

    let mut state = state;
    for seed in 0..2u64 {
        state = apply_intent(
            state,
            Intent::Move(Direction::East),
            &narrator(),
            &mut create_rng(seed),
        )
        .expect("move should not fail");
    }

    let ghost = state.entity_by_id(&ghost_id).expect("ghost lingers while dying");
    assert!(ghost.dying, "two strikes fell a 10-health ghost");
    assert_eq!(state.health, 9, "ghosts never deal retaliation damage");
}

#[test]
fn test_talk_path_strike_skips_the_turn_counter() {
    let mut state = bare_state();
    let rat = Entity::rat(1, 0, Position::new(3, 3)); // diagonal, Chebyshev 1
    let rat_id = rat.id.clone();
    state.entities.push(rat);

    let after = apply_intent(state, Intent::Interact, &narrator(), &mut create_rng(1))
        .expect("interact should not fail");

    assert_eq!(after.turn, 0, "interact never advances the turn");
    assert_eq!(after.entity_by_id(&rat_id).unwrap().health, Some(3));
}

#[test]
fn test_talking_to_a_plain_ghost_opens_narrated_dialogue() {
    let mut state = bare_state();
    let ghost = Entity::ghost(1, 0, Position::new(3, 2));
    state.entities.push(ghost);
    // No quest references the ghost, so the narrator answers

    let after = apply_intent(state, Intent::Interact, &narrator(), &mut create_rng(1))
        .expect("interact should not fail");

    let UiMode::Dialogue(session) = &after.ui_mode else {
        panic!("expected an open dialogue");
    };
    assert_eq!(session.history.len(), 1);
    assert_eq!(session.history[0].sender, Speaker::Npc);
    assert!(!session.history[0].text.is_empty());

    // Chat keeps appending to the same history
    let after = send_chat(after, "Which way?", &narrator());
    let UiMode::Dialogue(session) = &after.ui_mode else {
        panic!("dialogue should stay open");
    };
    assert_eq!(session.history.len(), 3);
    assert_eq!(session.history[1].sender, Speaker::Player);
    assert_eq!(session.history[2].sender, Speaker::Npc);
}

#[test]
fn test_narrator_fallback_contract_is_non_empty() {
    let state = bare_state();
    let narrator = narrator();
    let ghost = Entity::ghost(1, 0, Position::new(3, 2));

    assert!(!narrator.request_dialogue(&ghost, &state, "Hello!").is_empty());
    assert!(!narrator.request_ambient_tip(&state).is_empty());
}

#[test]
fn test_potion_pickup_heals_and_consumes() {
    let mut state = bare_state();
    state.health = 7;
    let potion = Entity::potion(1, 0, state.player_pos);
    let potion_id = potion.id.clone();
    state.entities.push(potion);

    let after = apply_intent(state, Intent::Interact, &narrator(), &mut create_rng(1))
        .expect("interact should not fail");

    assert_eq!(after.health, 17);
    assert!(after.entity_by_id(&potion_id).is_none());
}

#[test]
fn test_seed_pickup_wins_the_game() {
    let mut state = bare_state();
    state.level = 5;
    let seed = Entity::golden_seed(state.player_pos);
    state.entities.push(seed);

    let after = apply_intent(state, Intent::Interact, &narrator(), &mut create_rng(1))
        .expect("interact should not fail");

    assert!(after.game_won);
    assert!(after
        .log
        .last()
        .unwrap()
        .message
        .contains("GOLDEN SEED"));
}

proptest! {
    /// Explored tiles only ever accumulate across any walk within a level.
    #[test]
    fn prop_exploration_is_monotonic(seed in 0u64..100, walk in proptest::collection::vec(0u8..4, 1..30)) {
        let mut rng = create_rng(seed);
        let mut state = GameState::new_game(&mut rng).unwrap();
        state = state.dismiss_overlay().dismiss_overlay(); // intro, tutorial
        let narrator = narrator();

        for step in walk {
            let direction = match step {
                0 => Direction::North,
                1 => Direction::South,
                2 => Direction::East,
                _ => Direction::West,
            };
            let before = state.explored.clone();
            state = apply_intent(state, Intent::Move(direction), &narrator, &mut rng)
                .expect("moves never fail");

            prop_assert!(count_explored(&state.explored) >= count_explored(&before));
            for y in 0..before.len() {
                for x in 0..before[y].len() {
                    if before[y][x] {
                        prop_assert!(state.explored[y][x], "cell ({}, {}) was forgotten", x, y);
                    }
                }
            }
        }
    }
}
