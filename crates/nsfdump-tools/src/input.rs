//! File acquisition: read input bytes and decode the header.
use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use nsfdump::NsfHeader;

/// Read a file (or stdin for `-`) into memory.
pub fn read_nsf_as_vec(path: &Path) -> Result<Vec<u8>> {
    let data = if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        fs::read(path).with_context(|| format!("failed to read file: {}", path.display()))?
    };
    tracing::debug!(path = %path.display(), bytes = data.len(), "loaded input");
    if !has_nsf_extension(path) {
        tracing::info!(path = %path.display(), "input does not have an .nsf extension");
    }
    Ok(data)
}

/// Decode the header of `bytes`, naming `path` in the error.
pub fn decode_header(path: &Path, bytes: &[u8]) -> Result<NsfHeader> {
    let header = nsfdump::decode(bytes)
        .with_context(|| format!("\"{}\": not a usable NSF file", display_name(path)))?;
    tracing::debug!(
        path = %path.display(),
        songs = header.total_songs(),
        version = header.version(),
        "decoded header"
    );
    Ok(header)
}

fn has_nsf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.eq_ignore_ascii_case("nsf"))
        .unwrap_or(false)
}

/// Path as shown to the user; canonicalized when possible, `<stdin>` for `-`.
pub fn display_name(path: &Path) -> String {
    if path.as_os_str() == "-" {
        return "<stdin>".to_string();
    }
    match path.canonicalize() {
        Ok(p) => p.to_string_lossy().into_owned(),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}
