use crate::{Arena, Ball, Config, Paddle, Rect, Side};
use hecs::World;

/// Steer the AI paddle toward the ball's vertical center.
///
/// A plain reactive follower: one fixed step toward the ball per tick, no
/// prediction, no hysteresis. The two comparisons read the paddle center as
/// mutated so far within the tick, so a ball within one step of alignment
/// makes both branches fire and the paddle ends where it started. The
/// resulting jitter around alignment is the intended behavior.
pub fn move_ai_paddle(world: &mut World, arena: &Arena, config: &Config) {
    let ball_center_y = {
        let mut query = world.query::<(&Ball, &Rect)>();
        match query.iter().next() {
            Some((_e, (_ball, rect))) => rect.center().y,
            None => return,
        }
    };

    for (_entity, (paddle, rect)) in world.query_mut::<(&Paddle, &mut Rect)>() {
        if paddle.side != Side::Right {
            continue;
        }

        if ball_center_y < rect.center().y {
            rect.y -= config.ai_speed;
        }
        if ball_center_y > rect.center().y {
            rect.y += config.ai_speed;
        }

        arena.clamp_paddle(rect);
    }
}
