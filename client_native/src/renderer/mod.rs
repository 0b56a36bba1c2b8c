pub mod canvas;
pub mod font;
pub mod scene;

use std::sync::Arc;

use game_core::{Params, Side};
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::error::ClientError;
use crate::game::Scene;
use canvas::Canvas;

pub const FRAME_WIDTH: u32 = Params::ARENA_WIDTH as u32;
pub const FRAME_HEIGHT: u32 = Params::ARENA_HEIGHT as u32;

/// Owns the presentation surface. The pixel buffer is fixed at the arena
/// resolution; the surface scales it to the window.
pub struct Renderer {
    pixels: Pixels<'static>,
}

impl Renderer {
    pub fn new(window: Arc<Window>) -> Result<Self, ClientError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(FRAME_WIDTH, FRAME_HEIGHT, surface_texture)?;
        Ok(Self { pixels })
    }

    /// Draw and present one frame
    pub fn render(&mut self, scene: &Scene) -> Result<(), ClientError> {
        let mut canvas = Canvas::new(self.pixels.frame_mut(), FRAME_WIDTH, FRAME_HEIGHT);
        scene::draw_scene(&mut canvas, scene);
        self.pixels.render()?;
        Ok(())
    }

    /// Draw and present the final frame with the winner banner on top
    pub fn render_game_over(&mut self, scene: &Scene, winner: Side) -> Result<(), ClientError> {
        let mut canvas = Canvas::new(self.pixels.frame_mut(), FRAME_WIDTH, FRAME_HEIGHT);
        scene::draw_scene(&mut canvas, scene);
        scene::draw_game_over(&mut canvas, winner);
        self.pixels.render()?;
        Ok(())
    }

    /// Track window resizes (the buffer resolution stays fixed)
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::warn!("Failed to resize surface: {err}");
        }
    }
}
