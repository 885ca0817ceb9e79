// Draw-call seam: the controller reports what to draw, a backend draws it

use glam::IVec2;

use crate::core::Rect;

/// Receives one draw call per sprite per frame
pub trait Renderer {
    /// Draw frame `frame` of `sheet` with its top-left corner at `screen_pos`
    fn draw_frame(&mut self, sheet: SheetId, screen_pos: IVec2, frame: u32);
}

/// The sprite sheets the game draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetId {
    Player,
    AttackEffectRight,
    AttackEffectLeft,
}

impl SheetId {
    pub const fn layout(self) -> SpriteSheet {
        match self {
            Self::Player => SpriteSheet::player(),
            Self::AttackEffectRight | Self::AttackEffectLeft => SpriteSheet::attack_effect(),
        }
    }
}

/// Layout of a fixed-grid sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSheet {
    /// Width of each cell in pixels
    pub frame_width: i32,
    /// Height of each cell in pixels
    pub frame_height: i32,
    /// Number of columns in the sheet
    pub columns: u32,
    /// Number of rows in the sheet
    pub rows: u32,
}

impl SpriteSheet {
    pub const fn new(frame_width: i32, frame_height: i32, columns: u32, rows: u32) -> Self {
        Self {
            frame_width,
            frame_height,
            columns,
            rows,
        }
    }

    /// The player sheet: 15 rows of 8 cells, 64x64 each
    pub const fn player() -> Self {
        Self::new(64, 64, 8, 15)
    }

    /// Attack hit flash: one row of 6 cells, 100x100 each
    pub const fn attack_effect() -> Self {
        Self::new(100, 100, 6, 1)
    }

    pub fn frame_count(&self) -> u32 {
        self.columns * self.rows
    }

    /// Source rectangle of a frame, or None if the index is outside the sheet
    pub fn frame_region(&self, frame: u32) -> Option<Rect> {
        if self.columns == 0 || frame >= self.frame_count() {
            return None;
        }
        let col = (frame % self.columns) as i32;
        let row = (frame / self.columns) as i32;
        Some(Rect::new(
            col * self.frame_width,
            row * self.frame_height,
            self.frame_width,
            self.frame_height,
        ))
    }
}

/// Logs draw calls at trace level instead of touching a GPU
#[derive(Debug, Default)]
pub struct TraceRenderer {
    draws: u64,
}

impl TraceRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total draw calls received
    pub fn draw_count(&self) -> u64 {
        self.draws
    }
}

impl Renderer for TraceRenderer {
    fn draw_frame(&mut self, sheet: SheetId, screen_pos: IVec2, frame: u32) {
        self.draws += 1;
        match sheet.layout().frame_region(frame) {
            Some(region) => log::trace!(
                "draw {:?} frame {} ({:?}) at {}",
                sheet,
                frame,
                region,
                screen_pos
            ),
            None => log::warn!("frame {} is outside the {:?} sheet", frame, sheet),
        }
    }
}
