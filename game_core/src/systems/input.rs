use crate::{Arena, Config, InputState, Paddle, Rect, Side};
use hecs::World;

/// Move the player paddle from the held-key snapshot.
///
/// The up and down checks are independent: holding both keys mid-field is
/// a no-op because the two steps cancel, while holding both at a bound
/// moves the paddle away from the bound (only the inward step passes its
/// bound check). Each step is gated on the paddle not already touching the
/// bound it moves toward.
pub fn move_player_paddle(world: &mut World, input: &InputState, arena: &Arena, config: &Config) {
    for (_entity, (paddle, rect)) in world.query_mut::<(&Paddle, &mut Rect)>() {
        if paddle.side != Side::Left {
            continue;
        }

        if input.up && rect.top() > 0.0 {
            rect.y -= config.paddle_speed;
        }
        if input.down && rect.bottom() < arena.height {
            rect.y += config.paddle_speed;
        }

        arena.clamp_paddle(rect);
    }
}
