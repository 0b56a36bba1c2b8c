use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u8,  // Player 1 score
    pub right: u8, // Player 2 score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    /// First side to reach `win_score`. The left player is checked first,
    /// which is the tie-break rule.
    pub fn winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Events that occurred during this tick. The client maps these to sound
/// triggers: wall bounce and scoring play the pulse tone, paddle hits play
/// the noise burst.
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}

/// Instantaneous held-key snapshot for the player paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_left() {
        let mut score = Score::new();
        assert_eq!(score.left, 0);
        score.increment_left();
        assert_eq!(score.left, 1);
        score.increment_left();
        assert_eq!(score.left, 2);
    }

    #[test]
    fn test_score_increment_right() {
        let mut score = Score::new();
        assert_eq!(score.right, 0);
        score.increment_right();
        assert_eq!(score.right, 1);
    }

    #[test]
    fn test_score_winner_left() {
        let mut score = Score::new();
        for _ in 0..5 {
            score.increment_left();
        }
        assert_eq!(score.winner(5), Some(Side::Left), "Player 1 wins at 5");
    }

    #[test]
    fn test_score_winner_right() {
        let mut score = Score::new();
        for _ in 0..5 {
            score.increment_right();
        }
        assert_eq!(score.winner(5), Some(Side::Right), "Player 2 wins at 5");
    }

    #[test]
    fn test_score_no_winner_below_threshold() {
        let mut score = Score::new();
        for _ in 0..4 {
            score.increment_left();
            score.increment_right();
        }
        assert_eq!(score.winner(5), None, "No winner below threshold");
    }

    #[test]
    fn test_score_winner_tie_break_prefers_left() {
        let score = Score { left: 5, right: 5 };
        assert_eq!(score.winner(5), Some(Side::Left));
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.left_scored = true;
        events.right_scored = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert!(!events.left_scored);
        assert!(!events.right_scored);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }
}
