//! Keyboard input handling
//!
//! Player 1 moves with W (up) and S (down). winit delivers edge events,
//! so the tracker folds press/release into the held-key snapshot the
//! simulation reads once per tick.

use game_core::InputState;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Held state of the two mapped keys
#[derive(Debug, Default)]
pub struct InputTracker {
    up: bool,
    down: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one key event into the held state. Unmapped keys are ignored.
    pub fn on_key(&mut self, key: KeyCode, state: ElementState) {
        let held = state == ElementState::Pressed;
        match key {
            KeyCode::KeyW => self.up = held,
            KeyCode::KeyS => self.down = held,
            _ => {}
        }
    }

    /// Snapshot for the current tick
    pub fn state(&self) -> InputState {
        InputState {
            up: self.up,
            down: self.down,
        }
    }
}
