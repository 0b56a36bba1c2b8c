use crate::{Ball, Rect};
use hecs::World;

/// Advance the ball by one velocity step
pub fn move_ball(world: &mut World) {
    for (_entity, (ball, rect)) in world.query_mut::<(&Ball, &mut Rect)>() {
        rect.x += ball.vel.x;
        rect.y += ball.vel.y;
    }
}
