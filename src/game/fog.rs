//! # Fog of War
//!
//! Circular field-of-view computation with monotonic exploration memory.
//!
//! Visibility is a pure function of the player's position: every tile within
//! the Euclidean radius is visible, with no line-of-sight occlusion by walls.
//! The explored grid is the running union of everything ever visible and only
//! resets on level transition.

use crate::{MapGrid, Position};
use serde::{Deserialize, Serialize};

/// Boolean per-tile grid, indexed `[y][x]`.
pub type BoolGrid = Vec<Vec<bool>>;

/// The visible and explored grids for one level.
///
/// Invariant: `visible[y][x]` implies `explored[y][x]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FogState {
    pub visible: BoolGrid,
    pub explored: BoolGrid,
}

/// A grid of the given dimensions with every cell set to `value`.
pub fn uniform_grid(width: usize, height: usize, value: bool) -> BoolGrid {
    vec![vec![value; width]; height]
}

/// Counts cells set to true.
pub fn count_explored(grid: &BoolGrid) -> usize {
    grid.iter()
        .flat_map(|row| row.iter())
        .filter(|&&cell| cell)
        .count()
}

/// Recomputes visibility from scratch around `origin`.
///
/// Returns a fresh visible grid plus the explored grid grown by the new
/// visible set. The prior explored state is never shrunk.
///
/// # Examples
///
/// ```
/// use sprout::{MapGrid, Position, Tile};
/// use sprout::game::fog::{compute_visibility, uniform_grid};
///
/// let map = MapGrid::filled(10, 10, Tile::Floor);
/// let prior = uniform_grid(10, 10, false);
/// let fog = compute_visibility(&map, Position::new(5, 5), 2, &prior);
///
/// assert!(fog.visible[5][5]);
/// assert!(fog.explored[5][5]);
/// assert!(!fog.visible[0][0]);
/// ```
pub fn compute_visibility(
    map: &MapGrid,
    origin: Position,
    radius: i32,
    prior_explored: &BoolGrid,
) -> FogState {
    let width = map.width();
    let height = map.height();

    let mut visible = uniform_grid(width, height, false);
    let mut explored = prior_explored.clone();

    for y in 0..height {
        for x in 0..width {
            let pos = Position::new(x as i32, y as i32);
            if origin.euclidean_distance(pos) <= radius as f64 {
                visible[y][x] = true;
                explored[y][x] = true;
            }
        }
    }

    FogState { visible, explored }
}
