//! The match grid: a fixed-size rectangle of tiles.

use serde::{Deserialize, Serialize};

use crate::entities::Position;
use crate::error::RulesError;
use crate::mechanics::{Direction, TileContent};

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    content: TileContent,
    position: Position,
}

impl Tile {
    pub fn new(content: TileContent, position: Position) -> Self {
        Self { content, position }
    }

    pub fn content(&self) -> TileContent {
        self.content
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// A player may stand here. Bombs do not block movement.
    pub fn is_available(&self) -> bool {
        matches!(self.content, TileContent::Free | TileContent::Bomb)
    }

    /// A bomb may be placed here.
    pub fn is_free(&self) -> bool {
        self.content == TileContent::Free
    }

    /// Put a bomb on a free tile. Returns false and leaves the tile alone
    /// if it is not free.
    pub fn put_bomb(&mut self) -> bool {
        if !self.is_free() {
            return false;
        }
        self.content = TileContent::Bomb;
        true
    }

    /// Clear the tile. Returns the content it held, or None if it was
    /// already free.
    pub fn destroy(&mut self) -> Option<TileContent> {
        if self.is_free() {
            return None;
        }
        Some(std::mem::replace(&mut self.content, TileContent::Free))
    }
}

/// Row-major rectangle of tiles, addressed by `(x, y)`.
///
/// The size is fixed for the lifetime of a match; tiles are mutated in
/// place and never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Build a grid from row-major contents (`contents[y * width + x]`).
    pub fn new(width: usize, height: usize, contents: &[TileContent]) -> Result<Self, RulesError> {
        let expected = Self::area(width, height)?;
        if contents.len() != expected {
            return Err(RulesError::MapSizeMismatch {
                width,
                height,
                expected,
                actual: contents.len(),
            });
        }

        let tiles = contents
            .iter()
            .enumerate()
            .map(|(i, content)| Tile::new(*content, Position::new(i % width, i / width)))
            .collect();

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Build a grid filled with free tiles.
    pub fn empty(width: usize, height: usize) -> Result<Self, RulesError> {
        let area = Self::area(width, height)?;
        Self::new(width, height, &vec![TileContent::Free; area])
    }

    /// Tile count of a `width` x `height` grid.
    fn area(width: usize, height: usize) -> Result<usize, RulesError> {
        if width == 0 || height == 0 {
            return Err(RulesError::EmptyGrid { width, height });
        }
        width
            .checked_mul(height)
            .ok_or(RulesError::GridTooLarge { width, height })
    }

    /// Build a grid from ASCII rows (see [`TileContent::glyph`]).
    ///
    /// Blank lines and surrounding whitespace are ignored; all rows must
    /// have the same width.
    pub fn from_ascii(map: &str) -> Result<Self, RulesError> {
        let rows: Vec<&str> = map
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut contents = Vec::with_capacity(width * rows.len());

        for (row, line) in rows.iter().enumerate() {
            let actual = line.chars().count();
            if actual != width {
                return Err(RulesError::RaggedRow {
                    row,
                    expected: width,
                    actual,
                });
            }
            for glyph in line.chars() {
                contents.push(TileContent::from_glyph(glyph)?);
            }
        }

        Self::new(width, rows.len(), &contents)
    }

    /// Render the grid as ASCII rows, one line per `y`.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.tiles.chunks(self.width) {
            out.extend(row.iter().map(|t| t.content.glyph()));
            out.push('\n');
        }
        out
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `position` lies inside the grid.
    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y * self.width + position.x)
    }

    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.index(position).map(|i| &self.tiles[i])
    }

    fn tile_mut(&mut self, position: Position) -> Option<&mut Tile> {
        self.index(position).map(move |i| &mut self.tiles[i])
    }

    /// Content at `position`, or None outside the grid.
    pub fn content(&self, position: Position) -> Option<TileContent> {
        self.tile(position).map(Tile::content)
    }

    /// The in-bounds cell `distance` steps from `from` in `direction`.
    pub fn offset(&self, from: Position, direction: Direction, distance: usize) -> Option<Position> {
        from.offset(direction, distance)
            .filter(|p| self.contains(*p))
    }

    /// The in-bounds neighbour of `from` in `direction`.
    pub fn neighbor(&self, from: Position, direction: Direction) -> Option<Position> {
        self.offset(from, direction, 1)
    }

    /// A player may stand at `position`. False outside the grid.
    pub fn is_available(&self, position: Position) -> bool {
        self.tile(position).is_some_and(Tile::is_available)
    }

    /// A bomb may be placed at `position`. False outside the grid.
    pub fn is_free(&self, position: Position) -> bool {
        self.tile(position).is_some_and(Tile::is_free)
    }

    /// Mark a free tile as holding a bomb. Registering the bomb itself is
    /// the caller's job.
    pub fn place_bomb(&mut self, position: Position) -> bool {
        self.tile_mut(position).is_some_and(Tile::put_bomb)
    }

    /// Clear the tile at `position`, returning what it held.
    pub fn destroy(&mut self, position: Position) -> Option<TileContent> {
        self.tile_mut(position).and_then(Tile::destroy)
    }

    /// Positions holding a bomb, scanning column by column (`x` outer).
    pub fn bomb_positions(&self) -> Vec<Position> {
        (0..self.width)
            .flat_map(|x| (0..self.height).map(move |y| Position::new(x, y)))
            .filter(|p| self.content(*p) == Some(TileContent::Bomb))
            .collect()
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Row-major copy of every tile's content.
    pub fn contents(&self) -> Vec<TileContent> {
        self.tiles.iter().map(Tile::content).collect()
    }

    /// Number of tiles holding `content`.
    pub fn count(&self, content: TileContent) -> usize {
        self.tiles.iter().filter(|t| t.content == content).count()
    }
}
