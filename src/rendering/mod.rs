//! # Rendering Module
//!
//! Plain-text frame rendering over the per-turn [`Snapshot`].
//!
//! The core never renders; it exposes a snapshot and this module turns one
//! into a string for the terminal binary. Unexplored tiles are blank,
//! explored-but-dark tiles show terrain only, and entities appear only while
//! currently visible.

use crate::{Position, Snapshot};

/// Renders one full frame: map, HUD, active quest, and recent log lines.
pub fn render_frame(snapshot: &Snapshot) -> String {
    let mut frame = String::new();

    frame.push_str(&render_map(snapshot));
    frame.push('\n');
    frame.push_str(&format!(
        "HP {}/{}  D:{}  T:{}  — {}\n",
        snapshot.health, snapshot.max_health, snapshot.level, snapshot.turn, snapshot.level_name
    ));

    if let Some(quest) = &snapshot.active_quest {
        frame.push_str(&format!("Quest: {}\n", quest.title));
        for objective in &quest.objectives {
            frame.push_str(&format!("  - {}\n", objective));
        }
    }

    for entry in snapshot.recent_log.iter().rev().take(4).rev() {
        frame.push_str(&format!("> {}\n", entry.message));
    }

    if snapshot.game_won {
        frame.push_str("VICTORY! You have retrieved the Golden Seed.\n");
    } else if snapshot.game_over {
        frame.push_str("GAME OVER. You have perished in the deep dark...\n");
    }

    frame
}

/// Renders the map grid with fog of war applied.
pub fn render_map(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    for (y, row) in snapshot.map.rows().iter().enumerate() {
        for (x, tile) in row.iter().enumerate() {
            let pos = Position::new(x as i32, y as i32);
            let visible = snapshot.visible[y][x];
            let explored = snapshot.explored[y][x];

            let glyph = if pos == snapshot.player_pos {
                '@'
            } else if !explored {
                ' '
            } else if visible {
                snapshot
                    .entities
                    .iter()
                    .find(|entity| entity.pos == pos && !entity.dying)
                    .map(|entity| entity.kind.glyph())
                    .unwrap_or_else(|| tile.glyph())
            } else {
                tile.glyph()
            };
            out.push(glyph);
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::create_rng;
    use crate::GameState;

    #[test]
    fn test_frame_contains_player_and_hud() {
        let state = GameState::new_game(&mut create_rng(9)).unwrap();
        let frame = render_frame(&state.snapshot());

        assert!(frame.contains('@'));
        assert!(frame.contains("HP 20/20"));
        assert!(frame.contains("The Damp Cellar"));
    }

    #[test]
    fn test_unexplored_tiles_render_blank() {
        let state = GameState::new_game(&mut create_rng(9)).unwrap();
        let map = render_map(&state.snapshot());
        // A fresh level is mostly unexplored
        assert!(map.contains(' '));
    }

    #[test]
    fn test_map_dimensions_match_grid() {
        let state = GameState::new_game(&mut create_rng(9)).unwrap();
        let snapshot = state.snapshot();
        let map = render_map(&snapshot);
        let lines: Vec<&str> = map.lines().collect();

        assert_eq!(lines.len(), snapshot.map.height());
        assert!(lines.iter().all(|line| line.chars().count() == snapshot.map.width()));
    }
}
