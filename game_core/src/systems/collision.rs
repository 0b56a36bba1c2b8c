use crate::{Arena, Ball, Events, Paddle, Rect};
use hecs::World;

/// Bounce the ball off the top and bottom walls.
///
/// Only the velocity sign flips; the position is not corrected, so the
/// ball may overlap the boundary by up to one tick's travel before the
/// next step carries it back inside.
pub fn check_wall_collisions(world: &mut World, arena: &Arena, events: &mut Events) {
    for (_entity, (ball, rect)) in world.query_mut::<(&mut Ball, &Rect)>() {
        if rect.top() <= 0.0 || rect.bottom() >= arena.height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Bounce the ball off either paddle.
///
/// An inclusive rectangle overlap flips the horizontal velocity sign. The
/// test runs every tick with no overlap-exit tracking, so a ball that
/// stays inside a paddle rectangle across ticks flips again each tick.
pub fn check_paddle_collisions(world: &mut World, events: &mut Events) {
    // Collect paddle rects first to release the borrow before mutating
    let paddles: Vec<Rect> = world
        .query::<(&Paddle, &Rect)>()
        .iter()
        .map(|(_e, (_paddle, rect))| *rect)
        .collect();

    for (_entity, (ball, rect)) in world.query_mut::<(&mut Ball, &Rect)>() {
        if paddles.iter().any(|paddle| paddle.intersects(rect)) {
            ball.vel.x = -ball.vel.x;
            events.ball_hit_paddle = true;
        }
    }
}
