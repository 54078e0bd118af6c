//! Audio preview waveform.
//!
//! The preview is a fixed square-wave phrase (a C major arpeggio up and
//! back down) and does not depend on the NSF program data. Each note ramps
//! linearly from silence to the sustain level, holds, and ramps back to
//! silence at its end. Rests stay silent.

/// Gain held between attack and release.
pub const SUSTAIN_LEVEL: f32 = 0.15;
/// Attack ramp length in seconds.
pub const ATTACK_SECS: f32 = 0.01;
/// Release ramp length in seconds.
pub const RELEASE_SECS: f32 = 0.02;

/// One step of the preview phrase. A frequency of 0 is a rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewNote {
    pub freq_hz: f32,
    pub duration_secs: f32,
}

const fn note(freq_hz: f32, duration_secs: f32) -> PreviewNote {
    PreviewNote {
        freq_hz,
        duration_secs,
    }
}

const PHRASE: [PreviewNote; 9] = [
    note(261.63, 0.35), // C4
    note(329.63, 0.35), // E4
    note(392.00, 0.35), // G4
    note(523.25, 0.45), // C5
    note(0.0, 0.2),
    note(523.25, 0.35), // C5
    note(392.00, 0.35), // G4
    note(329.63, 0.35), // E4
    note(261.63, 0.45), // C4
];

/// The notes of the preview phrase in play order.
pub fn preview_notes() -> &'static [PreviewNote] {
    &PHRASE
}

/// Total length of the phrase in seconds.
pub fn preview_duration() -> f32 {
    PHRASE.iter().map(|n| n.duration_secs).sum()
}

/// Render the phrase as mono `f32` samples at `sample_rate`.
///
/// The returned buffer holds one sample per note-sample, so its length is
/// the sum of each note's `round(duration * sample_rate)`. All samples lie
/// within `[-SUSTAIN_LEVEL, SUSTAIN_LEVEL]`.
pub fn render_preview(sample_rate: u32) -> Vec<f32> {
    let rate = sample_rate as f32;
    let mut out = Vec::with_capacity((preview_duration() * rate).ceil() as usize + PHRASE.len());
    // Oscillator phase carries across notes like a single running oscillator.
    let mut phase = 0.0f32;

    for n in &PHRASE {
        let len = (n.duration_secs * rate).round() as usize;
        if n.freq_hz <= 0.0 {
            out.extend(std::iter::repeat_n(0.0, len));
            continue;
        }
        let step = n.freq_hz / rate;
        for i in 0..len {
            let t = i as f32 / rate;
            let square = if phase < 0.5 { 1.0 } else { -1.0 };
            out.push(square * envelope(t, n.duration_secs));
            phase = (phase + step).fract();
        }
    }
    out
}

fn envelope(t: f32, duration: f32) -> f32 {
    let release_start = duration - RELEASE_SECS;
    let gain = if t < ATTACK_SECS {
        SUSTAIN_LEVEL * t / ATTACK_SECS
    } else if t < release_start {
        SUSTAIN_LEVEL
    } else {
        SUSTAIN_LEVEL * (duration - t) / RELEASE_SECS
    };
    gain.clamp(0.0, SUSTAIN_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_shape() {
        assert_eq!(envelope(0.0, 0.35), 0.0);
        assert!((envelope(0.005, 0.35) - SUSTAIN_LEVEL / 2.0).abs() < 1e-6);
        assert_eq!(envelope(0.2, 0.35), SUSTAIN_LEVEL);
        assert!(envelope(0.349, 0.35) < SUSTAIN_LEVEL * 0.1);
    }
}
