//! Frame composition
//!
//! Reads the scene snapshot each frame and redraws everything: both
//! paddles, the ball, the center divider and the score line. The winner
//! banner is drawn on top of the final frame.

use game_core::Side;

use super::canvas::{Canvas, BLACK, WHITE};
use super::font;
use crate::game::Scene;

const SCORE_SCALE: i32 = 10;
const SCORE_TOP: i32 = 20;
const BANNER_SCALE: i32 = 6;

pub fn draw_scene(canvas: &mut Canvas, scene: &Scene) {
    canvas.clear(BLACK);

    // Paddles
    for rect in [&scene.left_paddle, &scene.right_paddle] {
        canvas.fill_rect(
            rect.x as i32,
            rect.y as i32,
            rect.w as i32,
            rect.h as i32,
            WHITE,
        );
    }

    // Ball, drawn as a filled circle inscribed in its rect
    let center = scene.ball.center();
    canvas.fill_circle(
        center.x as i32,
        center.y as i32,
        (scene.ball.w * 0.5) as i32,
        WHITE,
    );

    // Center divider
    let mid_x = canvas.width() / 2;
    canvas.fill_rect(mid_x, 0, 1, canvas.height(), WHITE);

    // Score line
    let score_text = format!("{}  {}", scene.score_left, scene.score_right);
    font::draw_text_centered(canvas, mid_x, SCORE_TOP, &score_text, WHITE, SCORE_SCALE);
}

/// Overlay the centered winner banner on an already-drawn scene
pub fn draw_game_over(canvas: &mut Canvas, winner: Side) {
    let banner = format!("GAME OVER! PLAYER {} WINS!", winner.player_number());
    let y = (canvas.height() - font::text_height(BANNER_SCALE)) / 2;
    font::draw_text_centered(canvas, canvas.width() / 2, y, &banner, WHITE, BANNER_SCALE);
}
