use crate::{Params, Rect};
use glam::Vec2;

/// The fixed playfield
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new() -> Self {
        Self {
            width: Params::ARENA_WIDTH,
            height: Params::ARENA_HEIGHT,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Clamp a paddle's vertical extent into [0, height]
    pub fn clamp_paddle(&self, rect: &mut Rect) {
        if rect.top() < 0.0 {
            rect.y = 0.0;
        }
        if rect.bottom() > self.height {
            rect.y = self.height - rect.h;
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}
