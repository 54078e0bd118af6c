//! `mml` command: write the simulated MML report for one song.
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use nsfdump::{SongSelection, render_mml, suggested_file_name};

use crate::input::decode_header;

/// Where the report goes.
#[derive(Debug, PartialEq)]
pub(crate) enum Destination {
    Stdout,
    File(PathBuf),
}

/// Resolve the `--output` argument: absent or `-` is stdout, an existing
/// directory receives `suggested` inside it, anything else is a file path.
pub(crate) fn resolve_destination(output: Option<&Path>, suggested: &str) -> Destination {
    match output {
        None => Destination::Stdout,
        Some(p) if p.as_os_str() == "-" => Destination::Stdout,
        Some(p) if p.is_dir() => Destination::File(p.join(suggested)),
        Some(p) => Destination::File(p.to_path_buf()),
    }
}

/// Pick the song from a one-based `--song` value, or the starting song.
pub(crate) fn select_song(
    header: &nsfdump::NsfHeader,
    song: Option<usize>,
) -> Result<SongSelection> {
    let mut sel = SongSelection::for_header(header);
    if let Some(number) = song {
        let index = number.checked_sub(1).context("song numbers start at 1")?;
        sel.select(index)
            .with_context(|| format!("cannot select song {}", number))?;
    }
    Ok(sel)
}

pub fn write_mml(
    path: &Path,
    bytes: &[u8],
    song: Option<usize>,
    output: Option<&Path>,
) -> Result<()> {
    let header = decode_header(path, bytes)?;
    let sel = select_song(&header, song)?;
    let text = render_mml(&header, sel);

    match resolve_destination(output, &suggested_file_name(&header, sel)) {
        Destination::Stdout => {
            let mut out = std::io::stdout().lock();
            writeln!(out, "{}", text).context("failed to write to stdout")?;
        }
        Destination::File(target) => {
            fs::write(&target, format!("{}\n", text))
                .with_context(|| format!("failed to write {}", target.display()))?;
            tracing::info!(
                song = sel.number(),
                path = %target.display(),
                "wrote MML report"
            );
        }
    }
    Ok(())
}
