#![doc = include_str!("../README.md")]
//! nsfdump — decoder for NSF (NES Sound Format) headers
//!
//! `nsfdump` reads the fixed 128-byte header at the start of an `.nsf`
//! file and exposes its fields as a typed, immutable `NsfHeader`.
//!
//! Key features:
//! - Total decoding: apart from a short buffer or a wrong signature, every
//!   header decodes. Zero song counts are raised to 1 and empty or `<?>`
//!   text fields become the `UNKNOWN_TEXT` sentinel.
//! - Bit-flag helpers for the PAL/NTSC byte (`Region`) and the
//!   expansion-audio byte (`ExpansionChip`), computed on demand from the
//!   raw bytes stored in the header.
//! - `SongSelection` keeps the selected song outside the header.
//! - `MmlReport` renders a simulated MML text for a song and
//!   `preview::render_preview` produces a short square-wave preview.
//!
//! Example: decoding a header
//!
//! ```rust
//! use nsfdump::{DecodeError, NsfHeader, UNKNOWN_TEXT};
//!
//! let mut bytes = vec![0u8; 128];
//! bytes[..5].copy_from_slice(b"NESM\x1A");
//! bytes[0x06] = 3; // three songs
//! bytes[0x08..0x0A].copy_from_slice(&0x8000u16.to_le_bytes());
//! bytes[0x0E..0x13].copy_from_slice(b"Intro");
//!
//! let header: NsfHeader = bytes.as_slice().try_into().expect("valid header");
//! assert_eq!(header.total_songs(), 3);
//! assert_eq!(header.starting_song(), 1);
//! assert_eq!(header.load_address(), 0x8000);
//! assert_eq!(header.title(), "Intro");
//! assert_eq!(header.artist(), UNKNOWN_TEXT);
//! assert_eq!(header.region().label(), "NTSC");
//!
//! assert_eq!(
//!     nsfdump::decode(&bytes[..64]),
//!     Err(DecodeError::TruncatedInput { available: 64 })
//! );
//! ```
//!
//! Example: rendering the report for the second song
//!
//! ```rust
//! use nsfdump::{SongSelection, render_mml};
//!
//! let mut bytes = vec![0u8; 128];
//! bytes[..5].copy_from_slice(b"NESM\x1A");
//! bytes[0x06] = 2;
//! let header = nsfdump::decode(&bytes).unwrap();
//!
//! let mut song = SongSelection::for_header(&header);
//! song.next();
//! let mml = render_mml(&header, song);
//! assert!(mml.starts_with("#TITLE N/A (Song 2/2)"));
//! ```
mod binutil;
pub mod chip;
pub mod nsf;
pub mod preview;

pub use binutil::DecodeError;
pub use chip::{ChipSupport, ExpansionChip};
pub use nsf::report::{MmlReport, render_mml, suggested_file_name};
pub use nsf::{
    NSF_HEADER_SIZE, NSF_MAGIC, NsfHeader, NsfHeaderField, Region, SelectionError,
    SongSelection, Standard, UNKNOWN_TEXT,
};

/// Decode the NSF header at the start of `bytes`.
///
/// Shorthand for `nsf::parser::decode_nsf_header`.
pub fn decode(bytes: &[u8]) -> Result<NsfHeader, DecodeError> {
    nsf::parser::decode_nsf_header(bytes)
}
