//! Waveform generation
//!
//! Both effect buffers are generated once at startup. Samples are
//! interleaved stereo i16 at 44.1kHz, matching the output stream format.

use rand::Rng;

pub const SAMPLE_RATE: u32 = 44_100;
pub const CHANNELS: u16 = 2;

/// Square-wave amplitude: half the signed 16-bit range
pub const PULSE_AMPLITUDE: i16 = i16::MAX / 2;

/// 50% duty-cycle square wave at `frequency` Hz, both channels identical.
/// A sample landing exactly on a zero crossing stays at 0.
pub fn pulse_wave(frequency: f32, duration: f32) -> Vec<i16> {
    let frames = (SAMPLE_RATE as f32 * duration) as usize;
    let mut samples = Vec::with_capacity(frames * CHANNELS as usize);

    for i in 0..frames {
        let t = i as f32 / SAMPLE_RATE as f32;
        let phase = (std::f32::consts::TAU * frequency * t).sin();
        let value = if phase > 0.0 {
            PULSE_AMPLITUDE
        } else if phase < 0.0 {
            -PULSE_AMPLITUDE
        } else {
            0
        };
        samples.push(value);
        samples.push(value);
    }

    samples
}

/// Uniform white noise across the full signed 16-bit range, each channel
/// drawn independently.
pub fn white_noise(duration: f32, rng: &mut impl Rng) -> Vec<i16> {
    let frames = (SAMPLE_RATE as f32 * duration) as usize;
    (0..frames * CHANNELS as usize)
        .map(|_| rng.gen_range(-32767..32767))
        .collect()
}
