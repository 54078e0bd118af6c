//! NSF header handling used by this crate.
//!
//! This module exposes the decoded header type, the decoder entry points,
//! song selection state, and the MML report template that consumes a
//! decoded header.
mod header;
pub mod parser;
pub mod report;
mod song;

pub use header::{
    NSF_HEADER_SIZE, NSF_MAGIC, NsfHeader, NsfHeaderField, Region, Standard, UNKNOWN_TEXT,
    format_address, format_hex_bytes, format_speed,
};
pub use song::{SelectionError, SongSelection};
