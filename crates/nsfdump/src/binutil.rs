//! Utilities used by the decoder: decode error type and byte readers.
use std::fmt;

/// Error type returned by the NSF header decoder.
///
/// Only two failures exist. Everything past the signature check is decoded
/// by normalizing values, never by rejecting them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input was shorter than the fixed 128-byte header.
    ///
    /// `available` is the length of the buffer that was supplied.
    TruncatedInput { available: usize },

    /// The first five bytes were not `NESM` followed by `0x1A`.
    ///
    /// The contained array is the raw five bytes that were read.
    BadMagic([u8; 5]),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::TruncatedInput { available } => write!(
                f,
                "input too short for NSF header: {} bytes (needed {})",
                available,
                crate::nsf::NSF_HEADER_SIZE
            ),
            DecodeError::BadMagic(found) => {
                write!(f, "invalid NSF magic: ")?;
                for (i, b) in found.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{:02X}", b)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for DecodeError {}

fn out_of_range(bytes: &[u8]) -> DecodeError {
    DecodeError::TruncatedInput {
        available: bytes.len(),
    }
}

/// Read a 16-bit little-endian unsigned integer from `bytes` at `off`.
///
/// Returns `Err(DecodeError::TruncatedInput)` when the buffer is too short.
pub fn read_u16_le_at(bytes: &[u8], off: usize) -> Result<u16, DecodeError> {
    Ok(u16::from_le_bytes(read_array::<2>(bytes, off)?))
}

/// Read a single byte from `bytes` at `off`.
pub fn read_u8_at(bytes: &[u8], off: usize) -> Result<u8, DecodeError> {
    bytes.get(off).copied().ok_or_else(|| out_of_range(bytes))
}

/// Return a borrowed slice of length `len` starting at `off` from `bytes`.
pub fn read_slice(bytes: &[u8], off: usize, len: usize) -> Result<&[u8], DecodeError> {
    off.checked_add(len)
        .and_then(|end| bytes.get(off..end))
        .ok_or_else(|| out_of_range(bytes))
}

/// Copy `N` bytes starting at `off` into a fixed-size array.
pub fn read_array<const N: usize>(bytes: &[u8], off: usize) -> Result<[u8; N], DecodeError> {
    let mut out = [0u8; N];
    out.copy_from_slice(read_slice(bytes, off, N)?);
    Ok(out)
}
