pub mod arena;
pub mod components;
pub mod config;
pub mod fsm;
pub mod rect;
pub mod resources;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use fsm::*;
pub use rect::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one fixed tick of the game simulation.
///
/// A tick is one discrete step: positions move by whole velocity steps, so
/// there is no dt anywhere in the core. Does nothing once the match has
/// ended.
pub fn step(
    world: &mut World,
    config: &Config,
    arena: &Arena,
    input: &InputState,
    score: &mut Score,
    events: &mut Events,
    state: &mut MatchState,
) {
    if !state.is_playing() {
        return;
    }

    // Clear events at start of tick
    events.clear();

    // 1. Move the player paddle from held keys
    move_player_paddle(world, input, arena, config);

    // 2. Steer the AI paddle toward the ball
    move_ai_paddle(world, arena, config);

    // 3. Advance the ball
    move_ball(world);

    // 4. Bounce off the top/bottom walls
    check_wall_collisions(world, arena, events);

    // 5. Bounce off the paddles
    check_paddle_collisions(world, events);

    // 6. Score side exits and reset the ball
    check_scoring(world, arena, config, score, events);

    // 7. End the match on the first tick a side reaches the threshold
    if let Some(winner) = score.winner(config.win_score) {
        state.finish(winner);
    }
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, rect: Rect) -> hecs::Entity {
    world.spawn((Paddle::new(side), rect))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, rect: Rect, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(vel), rect))
}
