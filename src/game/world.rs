//! # World Representation
//!
//! Tile types and the fixed-size map grid owned by the active level.

use crate::Position;
use serde::{Deserialize, Serialize};

/// Terrain tile kinds. Immutable once a map has been generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Wall,
    Floor,
    Water,
    Grass,
    Door,
    Stairs,
}

impl Tile {
    /// Display glyph for this tile.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprout::Tile;
    ///
    /// assert_eq!(Tile::Wall.glyph(), '#');
    /// assert_eq!(Tile::Stairs.glyph(), '>');
    /// ```
    pub fn glyph(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
            Tile::Water => '~',
            Tile::Grass => '"',
            Tile::Door => '+',
            Tile::Stairs => '>',
        }
    }

    /// Whether the player can stand on this tile.
    pub fn is_passable(self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

/// A fixed-dimension 2D grid of tiles.
///
/// The grid is owned exclusively by the active level's state and replaced
/// wholesale on level transition. All access goes through bounds-checked
/// methods; out-of-bounds positions are rejected before indexing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapGrid {
    width: usize,
    height: usize,
    tiles: Vec<Vec<Tile>>,
}

impl MapGrid {
    /// Creates a grid of the given dimensions filled with one tile kind.
    pub fn filled(width: usize, height: usize, tile: Tile) -> Self {
        Self {
            width,
            height,
            tiles: vec![vec![tile; width]; height],
        }
    }

    /// Grid width in tiles.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in tiles.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Checks whether a position lies inside the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprout::{MapGrid, Position, Tile};
    ///
    /// let map = MapGrid::filled(10, 8, Tile::Wall);
    /// assert!(map.in_bounds(Position::new(0, 0)));
    /// assert!(map.in_bounds(Position::new(9, 7)));
    /// assert!(!map.in_bounds(Position::new(10, 7)));
    /// assert!(!map.in_bounds(Position::new(-1, 0)));
    /// ```
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Returns the tile at a position, or `None` if out of bounds.
    pub fn get(&self, pos: Position) -> Option<Tile> {
        if self.in_bounds(pos) {
            Some(self.tiles[pos.y as usize][pos.x as usize])
        } else {
            None
        }
    }

    /// Sets the tile at a position. Out-of-bounds writes are ignored.
    pub fn set(&mut self, pos: Position, tile: Tile) {
        if self.in_bounds(pos) {
            self.tiles[pos.y as usize][pos.x as usize] = tile;
        }
    }

    /// Borrow of the raw tile rows, for rendering and iteration.
    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.tiles
    }

    /// Finds the first position holding the given tile, scanning row-major.
    pub fn find(&self, tile: Tile) -> Option<Position> {
        for (y, row) in self.tiles.iter().enumerate() {
            for (x, &t) in row.iter().enumerate() {
                if t == tile {
                    return Some(Position::new(x as i32, y as i32));
                }
            }
        }
        None
    }

    /// Counts tiles equal to the given kind.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&t| t == tile)
            .count()
    }
}
