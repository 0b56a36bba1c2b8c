use crate::{Arena, Ball, Config, Events, Rect, Score};
use glam::Vec2;
use hecs::World;

/// Check if the ball left the arena and score the point.
///
/// The ball teleports back to the arena center and serves toward the side
/// that just conceded. The vertical component is reset to +ball_speed in
/// both cases regardless of its prior sign (serve direction rule).
pub fn check_scoring(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    for (_entity, (ball, rect)) in world.query_mut::<(&mut Ball, &mut Rect)>() {
        if rect.left() <= 0.0 {
            // Player 2 scores; serve toward the right
            score.increment_right();
            events.right_scored = true;
            rect.set_center(arena.center());
            ball.vel = Vec2::new(config.ball_speed, config.ball_speed);
        } else if rect.right() >= arena.width {
            // Player 1 scores; serve toward the left
            score.increment_left();
            events.left_scored = true;
            rect.set_center(arena.center());
            ball.vel = Vec2::new(-config.ball_speed, config.ball_speed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Arena, Config, Events, Score};

    fn setup() -> (hecs::World, Arena, Config, Score, Events) {
        let world = hecs::World::new();
        let arena = Arena::new();
        let config = Config::new();
        let score = Score::new();
        let events = Events::new();
        (world, arena, config, score, events)
    }

    fn ball_state(world: &hecs::World) -> (Rect, Vec2) {
        world
            .query::<(&Ball, &Rect)>()
            .iter()
            .next()
            .map(|(_e, (ball, rect))| (*rect, ball.vel))
            .unwrap()
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, arena, config, mut score, mut events) = setup();
        let mut rect = config.ball_spawn();
        rect.x = -2.0;
        create_ball(&mut world, rect, Vec2::new(-5.0, -5.0));

        check_scoring(&mut world, &arena, &config, &mut score, &mut events);

        assert_eq!(score.right, 1, "Player 2 should score");
        assert_eq!(score.left, 0, "Player 1 should not score");
        assert!(events.right_scored, "Should trigger right_scored event");

        let (rect, vel) = ball_state(&world);
        assert_eq!(rect.center(), arena.center(), "Ball resets to center");
        assert_eq!(
            vel,
            Vec2::new(5.0, 5.0),
            "Serve toward the right, vertical sign reset"
        );
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, arena, config, mut score, mut events) = setup();
        let mut rect = config.ball_spawn();
        rect.x = arena.width - rect.w + 2.0;
        create_ball(&mut world, rect, Vec2::new(5.0, -5.0));

        check_scoring(&mut world, &arena, &config, &mut score, &mut events);

        assert_eq!(score.left, 1, "Player 1 should score");
        assert_eq!(score.right, 0, "Player 2 should not score");
        assert!(events.left_scored, "Should trigger left_scored event");

        let (rect, vel) = ball_state(&world);
        assert_eq!(rect.center(), arena.center());
        assert_eq!(
            vel,
            Vec2::new(-5.0, 5.0),
            "Serve toward the left, vertical sign reset"
        );
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, arena, config, mut score, mut events) = setup();
        create_ball(&mut world, config.ball_spawn(), Vec2::new(5.0, 5.0));

        check_scoring(&mut world, &arena, &config, &mut score, &mut events);

        assert_eq!(score.left, 0, "No score when ball in bounds");
        assert_eq!(score.right, 0, "No score when ball in bounds");
        assert!(!events.left_scored && !events.right_scored, "No scoring events");
    }

    #[test]
    fn test_edge_touch_scores() {
        // Left edge exactly at zero counts as an exit
        let (mut world, arena, config, mut score, mut events) = setup();
        let mut rect = config.ball_spawn();
        rect.x = 0.0;
        create_ball(&mut world, rect, Vec2::new(-5.0, 5.0));

        check_scoring(&mut world, &arena, &config, &mut score, &mut events);

        assert_eq!(score.right, 1);
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, arena, config, mut score, mut events) = setup();
        let mut rect = config.ball_spawn();
        rect.x = arena.width;
        let entity = create_ball(&mut world, rect, Vec2::new(5.0, 5.0));

        check_scoring(&mut world, &arena, &config, &mut score, &mut events);
        events.clear();

        // Push the ball back over the right edge and score again
        world.get::<&mut Rect>(entity).unwrap().x = arena.width;
        check_scoring(&mut world, &arena, &config, &mut score, &mut events);

        assert_eq!(score.left, 2, "Scores should accumulate");
        assert_eq!(score.right, 0);
    }
}
