//! NSF header decoder
//!
//! `decode_nsf_header(bytes)` reads the first 128 bytes of an NSF file into
//! an `NsfHeader`. Validation is limited to the buffer length and the
//! five-byte signature, checked in that order; every other field is
//! normalized instead of rejected:
//! - a song count or starting song of `0` becomes `1`,
//! - text fields that are empty or `<?>` become [`UNKNOWN_TEXT`].
//!
//! Bytes past the header (program data) are never looked at.
use crate::binutil::{DecodeError, read_array, read_slice, read_u8_at, read_u16_le_at};
use crate::nsf::header::{NSF_HEADER_SIZE, NSF_MAGIC, NsfHeader, NsfHeaderField, UNKNOWN_TEXT};

/// Placeholder the NSF format uses for unknown text fields.
const PLACEHOLDER_TEXT: &str = "<?>";
/// U+0085, which `char::is_whitespace` accepts but is kept as text.
const NEXT_LINE: char = '\u{85}';

/// Decode an NSF header located at the start of `bytes`.
///
/// Returns `DecodeError::TruncatedInput` when fewer than 128 bytes are
/// supplied and `DecodeError::BadMagic` when the signature does not match.
/// No partial header is ever returned.
pub fn decode_nsf_header(bytes: &[u8]) -> Result<NsfHeader, DecodeError> {
    if bytes.len() < NSF_HEADER_SIZE {
        return Err(DecodeError::TruncatedInput {
            available: bytes.len(),
        });
    }
    let view: [u8; NSF_HEADER_SIZE] = read_array(bytes, 0)?;

    let magic: [u8; 5] = read_array(&view, NsfHeaderField::Magic.offset())?;
    if magic != NSF_MAGIC {
        return Err(DecodeError::BadMagic(magic));
    }

    Ok(NsfHeader {
        magic,
        version: read_u8_at(&view, NsfHeaderField::Version.offset())?,
        total_songs: at_least_one(read_u8_at(&view, NsfHeaderField::TotalSongs.offset())?),
        starting_song: at_least_one(read_u8_at(&view, NsfHeaderField::StartingSong.offset())?),
        load_address: read_u16_le_at(&view, NsfHeaderField::LoadAddress.offset())?,
        init_address: read_u16_le_at(&view, NsfHeaderField::InitAddress.offset())?,
        play_address: read_u16_le_at(&view, NsfHeaderField::PlayAddress.offset())?,
        title: read_text_field(&view, NsfHeaderField::Title)?,
        artist: read_text_field(&view, NsfHeaderField::Artist)?,
        copyright: read_text_field(&view, NsfHeaderField::Copyright)?,
        ntsc_speed: read_u16_le_at(&view, NsfHeaderField::NtscSpeed.offset())?,
        pal_speed: read_u16_le_at(&view, NsfHeaderField::PalSpeed.offset())?,
        region_flags: read_u8_at(&view, NsfHeaderField::RegionFlags.offset())?,
        bankswitch_init: read_array(&view, NsfHeaderField::BankswitchInit.offset())?,
        expansion_flags: read_u8_at(&view, NsfHeaderField::ExpansionFlags.offset())?,
        raw: view,
    })
}

fn at_least_one(v: u8) -> u8 {
    v.max(1)
}

fn read_text_field(view: &[u8], field: NsfHeaderField) -> Result<String, DecodeError> {
    Ok(decode_text(read_slice(view, field.offset(), field.len())?))
}

/// Decode a fixed-length, nul-terminated single-byte text field.
///
/// Reading stops at the first zero byte. Each byte maps to the character
/// with the same code point, so arbitrary bytes never fail to decode. The
/// result is trimmed of whitespace other than U+0085 (NEL is kept as text);
/// empty text or `<?>` yields [`UNKNOWN_TEXT`].
pub fn decode_text(field: &[u8]) -> String {
    let text: String = field
        .iter()
        .take_while(|&&b| b != 0)
        .map(|&b| char::from(b))
        .collect();
    let trimmed = text.trim_matches(|c: char| c.is_whitespace() && c != NEXT_LINE);
    if trimmed.is_empty() || trimmed == PLACEHOLDER_TEXT {
        UNKNOWN_TEXT.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_text_stops_at_nul() {
        assert_eq!(decode_text(b"Hello\0World"), "Hello");
    }

    #[test]
    fn decode_text_maps_high_bytes() {
        assert_eq!(decode_text(&[0x41, 0xE9, 0x01, 0x42]), "A\u{e9}\u{1}B");
    }

    #[test]
    fn decode_text_sentinels() {
        assert_eq!(decode_text(&[0u8; 32]), UNKNOWN_TEXT);
        assert_eq!(decode_text(b"   \t "), UNKNOWN_TEXT);
        assert_eq!(decode_text(b" <?> \0junk"), UNKNOWN_TEXT);
        assert_eq!(decode_text(b"<?>?"), "<?>?");
    }

    #[test]
    fn decode_text_keeps_next_line_byte() {
        assert_eq!(decode_text(&[0x85]), "\u{85}");
        assert_eq!(decode_text(b" Song\x85 "), "Song\u{85}");
    }
}
