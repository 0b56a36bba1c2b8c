//! Local game session
//!
//! Bundles the world and every simulation resource into one explicit
//! state struct that the loop driver owns and threads through each tick.

use game_core::{
    create_ball, create_paddle, step, Arena, Ball, Config, Events, InputState, MatchState, Paddle,
    Rect, Score, Side,
};
use glam::Vec2;
use hecs::World;

/// Everything the renderer needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct Scene {
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub ball: Rect,
    pub score_left: u8,
    pub score_right: u8,
}

pub struct LocalGame {
    pub world: World,
    pub config: Config,
    pub arena: Arena,
    pub score: Score,
    pub events: Events,
    pub state: MatchState,
}

impl LocalGame {
    pub fn new() -> Self {
        let config = Config::new();
        let mut world = World::new();

        create_paddle(&mut world, Side::Left, config.paddle_spawn(Side::Left));
        create_paddle(&mut world, Side::Right, config.paddle_spawn(Side::Right));
        create_ball(
            &mut world,
            config.ball_spawn(),
            Vec2::new(config.ball_speed, config.ball_speed),
        );

        Self {
            world,
            config,
            arena: Arena::new(),
            score: Score::new(),
            events: Events::new(),
            state: MatchState::new(),
        }
    }

    /// Run one simulation tick. The returned events are valid until the
    /// next call and drive the sound triggers.
    pub fn tick(&mut self, input: InputState) -> Events {
        step(
            &mut self.world,
            &self.config,
            &self.arena,
            &input,
            &mut self.score,
            &mut self.events,
            &mut self.state,
        );
        self.events
    }

    /// Extract the drawable state for this frame
    pub fn scene(&self) -> Scene {
        let mut left_paddle = self.config.paddle_spawn(Side::Left);
        let mut right_paddle = self.config.paddle_spawn(Side::Right);
        for (_e, (paddle, rect)) in self.world.query::<(&Paddle, &Rect)>().iter() {
            match paddle.side {
                Side::Left => left_paddle = *rect,
                Side::Right => right_paddle = *rect,
            }
        }

        let ball = self
            .world
            .query::<(&Ball, &Rect)>()
            .iter()
            .next()
            .map(|(_e, (_ball, rect))| *rect)
            .unwrap_or_else(|| self.config.ball_spawn());

        Scene {
            left_paddle,
            right_paddle,
            ball,
            score_left: self.score.left,
            score_right: self.score.right,
        }
    }
}

impl Default for LocalGame {
    fn default() -> Self {
        Self::new()
    }
}
