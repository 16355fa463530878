//! # Sprout Main Entry Point
//!
//! Initializes logging, seeds the generator, and runs a line-based terminal
//! game loop over the core's snapshot/intents API.

use clap::Parser;
use log::info;
use sprout::input::{parse_command, Command};
use sprout::{
    apply_intent, generation::create_rng, rendering::render_frame, send_chat, GameState,
    NarratorConfig, OfflineNarrator, SproutResult, UiMode,
};
use std::io::{self, BufRead, Write};

/// Command line arguments for the Sprout roguelike.
#[derive(Parser, Debug)]
#[command(name = "sprout")]
#[command(about = "A tile-based roguelike about the lost Golden Seed")]
#[command(version)]
struct Args {
    /// Random seed for dungeon generation
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> SproutResult<()> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("starting Sprout v{} with seed {}", sprout::VERSION, seed);

    let mut rng = create_rng(seed);
    let narrator = OfflineNarrator::new(NarratorConfig::from_env());
    let mut state = GameState::new_game(&mut rng)?;

    println!("SPROUT — THE LOST SEED");
    println!("Keys: w/a/s/d move, e interact, . wait, q quit.");
    println!("Press Enter to step past overlays; `say <text>` talks in a dialogue.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", render_frame(&state.snapshot()));
        if state.game_over || state.game_won {
            break;
        }
        print!("{}", prompt(&state));
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match parse_command(&line) {
            Some(Command::Quit) => {
                info!("player quit");
                break;
            }
            Some(Command::Dismiss) => {
                state = state.dismiss_overlay();
            }
            Some(Command::Say(text)) => {
                state = send_chat(state, &text, &narrator);
            }
            Some(Command::Intent(intent)) => {
                state = apply_intent(state, intent, &narrator, &mut rng)?;
            }
            None => {
                println!("Unknown input. Keys: w/a/s/d, e, ., q.");
            }
        }
    }

    Ok(())
}

/// Context-sensitive input prompt.
fn prompt(state: &GameState) -> String {
    match &state.ui_mode {
        UiMode::Intro => "[intro — press Enter] ".to_string(),
        UiMode::Tutorial => "[tutorial — press Enter] ".to_string(),
        UiMode::LevelStart => "[press Enter to begin] ".to_string(),
        UiMode::Dialogue(session) => {
            format!("[talking to {} — `say <text>` or Enter to leave] ", session.speaker.name)
        }
        UiMode::Playing => "> ".to_string(),
    }
}
