//! NSF header record and field layout
//!
//! This module defines `NsfHeader`, the in-memory representation of the
//! 128-byte NSF header, along with the `NsfHeaderField` offset table and
//! the `Region` interpretation of the PAL/NTSC flags byte.
//!
//! Notes:
//! - The three text regions are 32 bytes wide but start 24 and 30 bytes
//!   apart, so a title without a terminator runs into the artist field and
//!   the copyright field runs into the NTSC speed. Each field is decoded
//!   independently from its own offset.
//! - `NsfHeader` is produced only by the decoder and cannot be changed
//!   afterwards; accessors hand out copies or borrows.
use std::convert::TryFrom;
use std::fmt;

use crate::binutil::DecodeError;
use crate::chip::{self, ChipSupport, ExpansionChip};

/// Size in bytes of the fixed NSF header.
pub const NSF_HEADER_SIZE: usize = 0x80;

/// File signature: `NESM` followed by `0x1A`.
pub const NSF_MAGIC: [u8; 5] = *b"NESM\x1A";

/// Sentinel substituted for empty or `<?>` text fields.
pub const UNKNOWN_TEXT: &str = "N/A";

/// Enum identifying header fields and their on-disk offsets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NsfHeaderField {
    Magic,
    Version,
    TotalSongs,
    StartingSong,
    LoadAddress,
    InitAddress,
    PlayAddress,
    Title,
    Artist,
    Copyright,
    NtscSpeed,
    PalSpeed,
    RegionFlags,
    BankswitchInit,
    ExpansionFlags,
}

impl NsfHeaderField {
    /// All fields in the order they are listed for display.
    pub const ALL: [NsfHeaderField; 15] = [
        NsfHeaderField::Magic,
        NsfHeaderField::Version,
        NsfHeaderField::TotalSongs,
        NsfHeaderField::StartingSong,
        NsfHeaderField::LoadAddress,
        NsfHeaderField::InitAddress,
        NsfHeaderField::PlayAddress,
        NsfHeaderField::Title,
        NsfHeaderField::Artist,
        NsfHeaderField::Copyright,
        NsfHeaderField::NtscSpeed,
        NsfHeaderField::PalSpeed,
        NsfHeaderField::RegionFlags,
        NsfHeaderField::BankswitchInit,
        NsfHeaderField::ExpansionFlags,
    ];

    pub fn offset(self) -> usize {
        match self {
            NsfHeaderField::Magic => 0x000,
            NsfHeaderField::Version => 0x005,
            NsfHeaderField::TotalSongs => 0x006,
            NsfHeaderField::StartingSong => 0x007,
            NsfHeaderField::LoadAddress => 0x008,
            NsfHeaderField::InitAddress => 0x00A,
            NsfHeaderField::PlayAddress => 0x00C,
            NsfHeaderField::Title => 0x00E,
            NsfHeaderField::Artist => 0x026,
            NsfHeaderField::Copyright => 0x044,
            NsfHeaderField::NtscSpeed => 0x060,
            NsfHeaderField::PalSpeed => 0x06A,
            NsfHeaderField::RegionFlags => 0x06C,
            NsfHeaderField::BankswitchInit => 0x070,
            NsfHeaderField::ExpansionFlags => 0x07B,
        }
    }

    /// Return the length in bytes for this field as stored in the header.
    pub fn len(self) -> usize {
        match self {
            NsfHeaderField::Magic => 5,
            NsfHeaderField::Version => 1,
            NsfHeaderField::TotalSongs => 1,
            NsfHeaderField::StartingSong => 1,
            NsfHeaderField::LoadAddress => 2,
            NsfHeaderField::InitAddress => 2,
            NsfHeaderField::PlayAddress => 2,
            NsfHeaderField::Title => 32,
            NsfHeaderField::Artist => 32,
            NsfHeaderField::Copyright => 32,
            NsfHeaderField::NtscSpeed => 2,
            NsfHeaderField::PalSpeed => 2,
            NsfHeaderField::RegionFlags => 1,
            NsfHeaderField::BankswitchInit => 8,
            NsfHeaderField::ExpansionFlags => 1,
        }
    }

    /// Return true if this field occupies zero bytes (never for NSF).
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Byte range `start..end` of this field inside the header.
    pub fn range(self) -> std::ops::Range<usize> {
        self.offset()..self.offset() + self.len()
    }

    /// Label used when listing the field.
    pub fn label(self) -> &'static str {
        match self {
            NsfHeaderField::Magic => "Magic",
            NsfHeaderField::Version => "Version",
            NsfHeaderField::TotalSongs => "Total Songs",
            NsfHeaderField::StartingSong => "Starting Song",
            NsfHeaderField::LoadAddress => "Load Address",
            NsfHeaderField::InitAddress => "Init Address",
            NsfHeaderField::PlayAddress => "Play Address",
            NsfHeaderField::Title => "Song Title",
            NsfHeaderField::Artist => "Artist",
            NsfHeaderField::Copyright => "Copyright",
            NsfHeaderField::NtscSpeed => "NTSC Speed",
            NsfHeaderField::PalSpeed => "PAL Speed",
            NsfHeaderField::RegionFlags => "PAL/NTSC",
            NsfHeaderField::BankswitchInit => "Bankswitch Init",
            NsfHeaderField::ExpansionFlags => "Expansion Sound",
        }
    }
}

/// TV standard a tune prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standard {
    Ntsc,
    Pal,
}

/// Interpretation of the PAL/NTSC flags byte.
///
/// Bit 0 selects PAL as the preferred standard, bit 1 marks the tune as
/// playable on both. The remaining bits are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub preferred: Standard,
    pub dual: bool,
}

impl Region {
    pub fn from_flags(flags: u8) -> Self {
        Region {
            preferred: if flags & 0b01 != 0 {
                Standard::Pal
            } else {
                Standard::Ntsc
            },
            dual: flags & 0b10 != 0,
        }
    }

    pub fn label(self) -> &'static str {
        match (self.dual, self.preferred) {
            (false, Standard::Ntsc) => "NTSC",
            (false, Standard::Pal) => "PAL",
            (true, Standard::Ntsc) => "Dual (NTSC preferred)",
            (true, Standard::Pal) => "Dual (PAL preferred)",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decoded NSF header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NsfHeader {
    pub(crate) magic: [u8; 5],
    pub(crate) version: u8,
    pub(crate) total_songs: u8,
    pub(crate) starting_song: u8,
    pub(crate) load_address: u16,
    pub(crate) init_address: u16,
    pub(crate) play_address: u16,
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) copyright: String,
    pub(crate) ntsc_speed: u16,
    pub(crate) pal_speed: u16,
    pub(crate) region_flags: u8,
    pub(crate) bankswitch_init: [u8; 8],
    pub(crate) expansion_flags: u8,
    pub(crate) raw: [u8; NSF_HEADER_SIZE],
}

impl NsfHeader {
    pub fn magic(&self) -> [u8; 5] {
        self.magic
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    /// Number of songs, never less than 1.
    pub fn total_songs(&self) -> u8 {
        self.total_songs
    }

    /// One-based starting song, never less than 1.
    ///
    /// The value is not checked against `total_songs`; see
    /// `SongSelection::for_header` for the clamped selection.
    pub fn starting_song(&self) -> u8 {
        self.starting_song
    }

    pub fn load_address(&self) -> u16 {
        self.load_address
    }

    pub fn init_address(&self) -> u16 {
        self.init_address
    }

    pub fn play_address(&self) -> u16 {
        self.play_address
    }

    /// Song title, or [`UNKNOWN_TEXT`].
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Artist name, or [`UNKNOWN_TEXT`].
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Copyright holder, or [`UNKNOWN_TEXT`].
    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    /// NTSC play-routine interval in microseconds.
    pub fn ntsc_speed(&self) -> u16 {
        self.ntsc_speed
    }

    /// PAL play-routine interval in microseconds.
    pub fn pal_speed(&self) -> u16 {
        self.pal_speed
    }

    pub fn region_flags(&self) -> u8 {
        self.region_flags
    }

    pub fn bankswitch_init(&self) -> [u8; 8] {
        self.bankswitch_init
    }

    pub fn expansion_flags(&self) -> u8 {
        self.expansion_flags
    }

    /// The 128 header bytes exactly as read.
    pub fn raw_bytes(&self) -> &[u8; NSF_HEADER_SIZE] {
        &self.raw
    }

    pub fn region(&self) -> Region {
        Region::from_flags(self.region_flags)
    }

    /// All expansion chips with their support flag, in bit order.
    pub fn expansion_chips(&self) -> Vec<ChipSupport> {
        chip::expansion_chips(self.expansion_flags)
    }

    /// Only the flagged expansion chips, in bit order.
    pub fn supported_chips(&self) -> impl Iterator<Item = ExpansionChip> {
        chip::supported_chips(self.expansion_flags)
    }

    pub fn uses_chip(&self, chip: ExpansionChip) -> bool {
        chip.is_flagged(self.expansion_flags)
    }

    /// Play rate in Hz derived from the NTSC speed, `None` if the speed is 0.
    pub fn ntsc_rate_hz(&self) -> Option<f64> {
        rate_hz(self.ntsc_speed)
    }

    /// Play rate in Hz derived from the PAL speed, `None` if the speed is 0.
    pub fn pal_rate_hz(&self) -> Option<f64> {
        rate_hz(self.pal_speed)
    }
}

fn rate_hz(micros: u16) -> Option<f64> {
    (micros != 0).then(|| 1_000_000.0 / f64::from(micros))
}

/// Format a 16-bit address as `$XXXX`.
pub fn format_address(addr: u16) -> String {
    format!("${:04X}", addr)
}

/// Format a play interval as `N µs (R Hz)`, or `N µs (n/a)` for zero.
pub fn format_speed(micros: u16) -> String {
    match rate_hz(micros) {
        Some(hz) => format!("{} µs ({:.2} Hz)", micros, hz),
        None => format!("{} µs (n/a)", micros),
    }
}

/// Format bytes as space-separated upper-case hex pairs.
pub fn format_hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Attempt to decode a raw NSF byte slice into an `NsfHeader`.
impl TryFrom<&[u8]> for NsfHeader {
    type Error = DecodeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        crate::nsf::parser::decode_nsf_header(bytes)
    }
}
