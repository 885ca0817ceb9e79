// Short-lived visual effects spawned by a character

use glam::IVec2;

use crate::core::Rect;
use crate::engine::renderer::{Renderer, SheetId};

/// A transient sprite (e.g. an attack's hit flash) that plays its frames once
#[derive(Debug, Clone)]
pub struct Effect {
    sheet: SheetId,
    bounds: Rect,
    first_frame: u32,
    frame_count: u32,
    frame_time: f32,
    current_frame: u32,
    elapsed: f32,
    camera: IVec2,
    expired: bool,
}

impl Effect {
    pub fn new(
        sheet: SheetId,
        bounds: Rect,
        first_frame: u32,
        frame_count: u32,
        frame_time: f32,
    ) -> Self {
        Self {
            sheet,
            bounds,
            first_frame,
            frame_count: frame_count.max(1),
            frame_time,
            current_frame: 0,
            elapsed: 0.0,
            camera: IVec2::ZERO,
            expired: false,
        }
    }

    /// Follow the owner's camera offset
    pub fn set_camera(&mut self, camera: IVec2) {
        self.camera = camera;
    }

    /// Advance the animation; the effect expires after its last frame
    pub fn update(&mut self, dt: f32) {
        if self.expired {
            return;
        }
        self.elapsed += dt.max(0.0);
        while self.elapsed >= self.frame_time {
            self.elapsed -= self.frame_time;
            self.current_frame += 1;
            if self.current_frame >= self.frame_count {
                self.expired = true;
                return;
            }
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Sheet index of the frame on screen
    pub fn frame(&self) -> u32 {
        self.first_frame + self.current_frame.min(self.frame_count - 1)
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        if !self.expired {
            renderer.draw_frame(self.sheet, self.bounds.corner() - self.camera, self.frame());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::renderer::testing::RecordingRenderer;

    fn flash() -> Effect {
        Effect::new(SheetId::AttackEffectRight, Rect::new(100, 50, 100, 100), 0, 6, 0.05)
    }

    #[test]
    fn test_effect_plays_frames_then_expires() {
        let mut effect = flash();
        effect.update(0.05);
        assert_eq!(effect.frame(), 1);
        effect.update(0.2);
        assert!(!effect.is_expired());
        effect.update(0.06);
        assert!(effect.is_expired());
        assert_eq!(effect.frame(), 5);
    }

    #[test]
    fn test_large_step_expires_immediately() {
        let mut effect = flash();
        effect.update(10.0);
        assert!(effect.is_expired());
    }

    #[test]
    fn test_render_applies_camera_offset() {
        let mut effect = flash();
        effect.set_camera(IVec2::new(40, 10));
        let mut renderer = RecordingRenderer::default();
        effect.render(&mut renderer);
        assert_eq!(renderer.draws, vec![(SheetId::AttackEffectRight, IVec2::new(60, 40), 0)]);

        effect.update(1.0);
        effect.render(&mut renderer);
        assert_eq!(renderer.draws.len(), 1, "expired effects are not drawn");
    }
}
