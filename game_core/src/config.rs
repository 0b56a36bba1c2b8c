use crate::{Rect, Side};
use glam::Vec2;

/// Game tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 60.0;
    pub const PADDLE_MARGIN: f32 = 30.0;
    pub const PADDLE_SPEED: f32 = 5.0;
    pub const AI_SPEED: f32 = 5.0;

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED: f32 = 5.0;

    // Score
    pub const WIN_SCORE: u8 = 5;

    // Loop
    pub const TICK_RATE: u32 = 60;
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ai_speed: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ai_speed: Params::AI_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X position of a paddle's left edge
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.arena_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Spawn rectangle for a paddle, vertically centered
    pub fn paddle_spawn(&self, side: Side) -> Rect {
        Rect::new(
            self.paddle_x(side),
            (self.arena_height - self.paddle_height) * 0.5,
            self.paddle_width,
            self.paddle_height,
        )
    }

    /// Spawn rectangle for the ball, centered in the arena
    pub fn ball_spawn(&self) -> Rect {
        Rect::from_center_size(
            Vec2::new(self.arena_width * 0.5, self.arena_height * 0.5),
            Vec2::splat(self.ball_size),
        )
    }
}
