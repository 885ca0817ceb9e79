// Static collision map and tile layout loading

use glam::IVec2;

use crate::core::Rect;

/// Errors raised while building a collision map from a tile layout
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MapError {
    #[error("Layout contains no tiles")]
    Empty,

    #[error("Layout has no spawn marker '@'")]
    NoSpawn,

    #[error("Invalid tile {ch:?} at row {row}, column {col}")]
    InvalidTile { row: usize, col: usize, ch: char },

    #[error("Tile size must be positive, got {0}")]
    InvalidTileSize(i32),
}

/// Ordered, read-only set of static obstacles.
///
/// Controllers only ever borrow the map, so it has to outlive them.
#[derive(Debug, Clone, Default)]
pub struct CollisionMap {
    obstacles: Vec<Rect>,
    spawn: Option<IVec2>,
}

impl CollisionMap {
    /// Create a map from explicit obstacle rectangles
    pub fn new(obstacles: Vec<Rect>) -> Self {
        Self {
            obstacles,
            spawn: None,
        }
    }

    /// Create a map without any obstacles (everything free-falls)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a map from an ASCII tile layout.
    ///
    /// `#` is a solid tile, `.` or a space is empty and `@` marks the spawn
    /// tile. Consecutive solid tiles on a row are merged into one obstacle.
    pub fn from_layout(layout: &str, tile_size: i32) -> Result<Self, MapError> {
        if tile_size <= 0 {
            return Err(MapError::InvalidTileSize(tile_size));
        }

        let mut obstacles = Vec::new();
        let mut spawn = None;
        let mut saw_tile = false;

        for (row, line) in layout.lines().enumerate() {
            let y = row as i32 * tile_size;
            let mut run_start: Option<usize> = None;

            for (col, ch) in line.chars().enumerate() {
                saw_tile = true;
                match ch {
                    '#' => {
                        run_start.get_or_insert(col);
                    }
                    '.' | ' ' | '@' => {
                        if let Some(start) = run_start.take() {
                            obstacles.push(Self::run_rect(start, col, y, tile_size));
                        }
                        if ch == '@' {
                            spawn = Some(IVec2::new(col as i32 * tile_size, y));
                        }
                    }
                    _ => return Err(MapError::InvalidTile { row, col, ch }),
                }
            }

            if let Some(start) = run_start {
                obstacles.push(Self::run_rect(start, line.chars().count(), y, tile_size));
            }
        }

        if !saw_tile {
            return Err(MapError::Empty);
        }

        log::debug!(
            "Built collision map with {} obstacles (tile size {})",
            obstacles.len(),
            tile_size
        );

        Ok(Self { obstacles, spawn })
    }

    fn run_rect(start: usize, end: usize, y: i32, tile_size: i32) -> Rect {
        Rect::new(
            start as i32 * tile_size,
            y,
            (end - start) as i32 * tile_size,
            tile_size,
        )
    }

    /// All obstacles, in map order
    pub fn obstacles(&self) -> &[Rect] {
        &self.obstacles
    }

    /// Top-left corner of the spawn tile, if the layout had one
    pub fn spawn(&self) -> Option<IVec2> {
        self.spawn
    }

    /// Spawn tile corner, or an error if the layout had none
    pub fn require_spawn(&self) -> Result<IVec2, MapError> {
        self.spawn.ok_or(MapError::NoSpawn)
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}
