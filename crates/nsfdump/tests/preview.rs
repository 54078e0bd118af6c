use nsfdump::preview::{SUSTAIN_LEVEL, preview_duration, preview_notes, render_preview};

#[test]
fn phrase_layout() {
    let notes = preview_notes();
    assert_eq!(notes.len(), 9);
    assert_eq!(notes[4].freq_hz, 0.0);
    assert!((notes[0].freq_hz - 261.63).abs() < 1e-3);
    assert!((preview_duration() - 3.2).abs() < 1e-4);
}

#[test]
fn render_length_matches_durations() {
    let rate = 44_100u32;
    let expected: usize = preview_notes()
        .iter()
        .map(|n| (n.duration_secs * rate as f32).round() as usize)
        .sum();
    let samples = render_preview(rate);
    assert_eq!(samples.len(), expected);
}

#[test]
fn samples_stay_within_sustain_level() {
    let samples = render_preview(22_050);
    assert!(samples.iter().all(|s| s.abs() <= SUSTAIN_LEVEL + f32::EPSILON));
    assert!(samples.iter().any(|s| s.abs() > SUSTAIN_LEVEL * 0.9));
}

#[test]
fn rest_is_silent() {
    let rate = 8_000u32;
    let samples = render_preview(rate);
    let start: usize = preview_notes()[..4]
        .iter()
        .map(|n| (n.duration_secs * rate as f32).round() as usize)
        .sum();
    let len = (preview_notes()[4].duration_secs * rate as f32).round() as usize;
    assert!(samples[start..start + len].iter().all(|&s| s == 0.0));
}
