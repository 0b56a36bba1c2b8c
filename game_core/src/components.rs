use glam::Vec2;

/// Which side of the arena a paddle defends. Left is the human player
/// (player 1), Right is the AI opponent (player 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// 1-based player number, as shown to the user
    pub fn player_number(&self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }
}

/// Paddle component - paired with a `Rect` on the paddle entity
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self { side }
    }
}

/// Ball component - velocity in pixels per tick, paired with a `Rect`
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub vel: Vec2,
}

impl Ball {
    pub fn new(vel: Vec2) -> Self {
        Self { vel }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_numbers() {
        assert_eq!(Side::Left.player_number(), 1);
        assert_eq!(Side::Right.player_number(), 2);
    }
}
