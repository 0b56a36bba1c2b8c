//! Sound effect playback
//!
//! Two fixed buffers are synthesized at startup and played fire-and-forget
//! through a detached sink per trigger: nothing blocks the tick loop and
//! overlapping triggers mix.

pub mod synth;

use game_core::Events;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};

use crate::error::ClientError;
use synth::{CHANNELS, SAMPLE_RATE};

const PULSE_FREQ: f32 = 440.0;
const SFX_DURATION: f32 = 0.1;

/// The two retro effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sfx {
    /// Pulse tone: wall bounces and scoring
    Beep,
    /// Noise burst: paddle hits
    Hit,
}

struct SoundBank {
    beep: Vec<i16>,
    hit: Vec<i16>,
}

impl SoundBank {
    fn generate() -> Self {
        Self {
            beep: synth::pulse_wave(PULSE_FREQ, SFX_DURATION),
            hit: synth::white_noise(SFX_DURATION, &mut rand::thread_rng()),
        }
    }
}

pub struct Audio {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    bank: SoundBank,
}

impl Audio {
    pub fn new() -> Result<Self, ClientError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            bank: SoundBank::generate(),
        })
    }

    /// Enqueue one effect and forget it. A sink that cannot be created
    /// (e.g. the device went away mid-game) drops the trigger silently.
    pub fn play(&self, sfx: Sfx) {
        let samples = match sfx {
            Sfx::Beep => self.bank.beep.clone(),
            Sfx::Hit => self.bank.hit.clone(),
        };
        if let Ok(sink) = Sink::try_new(&self.handle) {
            sink.append(SamplesBuffer::new(CHANNELS, SAMPLE_RATE, samples));
            sink.detach();
        }
    }

    /// Map one tick's events onto triggers, one per event flag: a corner
    /// tick that bounces and scores plays the pulse twice.
    pub fn play_events(&self, events: &Events) {
        if events.ball_hit_wall {
            self.play(Sfx::Beep);
        }
        if events.ball_hit_paddle {
            self.play(Sfx::Hit);
        }
        if events.left_scored || events.right_scored {
            self.play(Sfx::Beep);
        }
    }
}
