//! Loop driver
//!
//! Owns the window, pumps the event queue, and runs the simulation at a
//! fixed 60 ticks per second. A quit event ends the loop immediately in
//! any state; a finished match renders the winner banner, holds it for a
//! fixed pause and then exits on its own.

mod audio;
mod error;
mod game;
mod input;
mod renderer;

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use game_core::Params;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use audio::Audio;
use error::ClientError;
use game::LocalGame;
use input::InputTracker;
use renderer::Renderer;

const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / Params::TICK_RATE as u64);
const GAME_OVER_HOLD: Duration = Duration::from_secs(3);

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    audio: Option<Audio>,
    game: LocalGame,
    input: InputTracker,
    next_tick: Instant,
    init_error: Option<ClientError>,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            renderer: None,
            audio: None,
            game: LocalGame::new(),
            input: InputTracker::new(),
            next_tick: Instant::now(),
            init_error: None,
        }
    }

    /// Record a fatal startup error and stop the event loop
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: ClientError) {
        log::error!("Startup failed: {err}");
        self.init_error = Some(err);
        event_loop.exit();
    }

    /// One-time entry action of the terminal state: present the final
    /// frame with the winner banner, hold it, then leave the loop.
    fn finish_match(&mut self, event_loop: &ActiveEventLoop) {
        let Some(winner) = self.game.state.winner() else {
            return;
        };
        log::info!(
            "Player {} wins {}-{}",
            winner.player_number(),
            self.game.score.left,
            self.game.score.right
        );

        if let Some(renderer) = &mut self.renderer {
            if let Err(err) = renderer.render_game_over(&self.game.scene(), winner) {
                log::warn!("Render error: {err}");
            }
        }

        thread::sleep(GAME_OVER_HOLD);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("Pong Game")
            .with_inner_size(LogicalSize::new(
                Params::ARENA_WIDTH as f64,
                Params::ARENA_HEIGHT as f64,
            ))
            .with_resizable(false);

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => return self.fail(event_loop, err.into()),
        };

        let renderer = match Renderer::new(Arc::clone(&window)) {
            Ok(renderer) => renderer,
            Err(err) => return self.fail(event_loop, err),
        };

        let audio = match Audio::new() {
            Ok(audio) => audio,
            Err(err) => return self.fail(event_loop, err),
        };

        log::info!(
            "Ready: first to {} points wins, W/S to move",
            self.game.config.win_score
        );

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.audio = Some(audio);
        self.next_tick = Instant::now() + TICK_DURATION;
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() || !self.game.state.is_playing() {
            return;
        }

        let now = Instant::now();
        if now >= self.next_tick {
            let events = self.game.tick(self.input.state());
            if let Some(audio) = &self.audio {
                audio.play_events(&events);
            }

            if self.game.state.is_game_over() {
                self.finish_match(event_loop);
                return;
            }

            if let Some(window) = &self.window {
                window.request_redraw();
            }

            self.next_tick += TICK_DURATION;
            if self.next_tick < now {
                // Resynchronize after a long stall instead of replaying
                // the backlog at full speed
                self.next_tick = now + TICK_DURATION;
            }
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_tick));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => {
                self.input.on_key(code, state);
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(err) = renderer.render(&self.game.scene()) {
                        log::warn!("Render error: {err}");
                    }
                }
            }
            _ => {}
        }
    }
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ClientError> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    // Surface a startup failure as the process result
    match app.init_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
