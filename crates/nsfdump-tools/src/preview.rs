//! `preview` command: render the preview phrase to a WAV file.
use std::path::Path;

use anyhow::{Context, Result, ensure};

use nsfdump::preview::{preview_duration, render_preview};

use crate::input::decode_header;

/// Highest accepted output rate; bounds the rendered buffer size.
const MAX_SAMPLE_RATE: u32 = 384_000;

/// Write mono f32 samples as 16-bit PCM.
fn write_wav_file(path: &Path, samples: &[f32], sample_rate: u32) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("failed to create WAV file {}", path.display()))?;

    for &sample in samples {
        let sample_i16 = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        writer
            .write_sample(sample_i16)
            .context("failed to write sample")?;
    }

    writer.finalize().context("failed to finalize WAV file")?;
    Ok(())
}

/// Check that `bytes` is an NSF file, then write the preview to `output`.
pub fn write_preview(path: &Path, bytes: &[u8], output: &Path, sample_rate: u32) -> Result<()> {
    ensure!(sample_rate > 0, "sample rate must be positive");
    ensure!(
        sample_rate <= MAX_SAMPLE_RATE,
        "sample rate {} Hz exceeds the maximum of {} Hz",
        sample_rate,
        MAX_SAMPLE_RATE
    );
    let header = decode_header(path, bytes)?;

    let samples = render_preview(sample_rate);
    tracing::info!(
        title = header.title(),
        seconds = preview_duration(),
        samples = samples.len(),
        "rendering preview"
    );
    write_wav_file(output, &samples, sample_rate)?;
    tracing::info!(path = %output.display(), "wrote preview");
    Ok(())
}
