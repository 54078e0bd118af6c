//! Song selection state kept alongside a decoded header.
use std::fmt;

use crate::nsf::header::NsfHeader;

/// Error returned when a song index is outside `0..total_songs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    OutOfRange { index: usize, count: u8 },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::OutOfRange { index, count } => write!(
                f,
                "song index {} out of range (file has {} song{})",
                index,
                count,
                if *count == 1 { "" } else { "s" }
            ),
        }
    }
}

impl std::error::Error for SelectionError {}

/// Zero-based song index into a header's song list.
///
/// The header itself is never modified; changing the selected song only
/// changes this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SongSelection {
    index: usize,
    count: u8,
}

impl SongSelection {
    /// Start at the header's starting song, or the first song when the
    /// starting song lies past the song count.
    pub fn for_header(header: &NsfHeader) -> Self {
        let count = header.total_songs();
        let start = header.starting_song();
        let index = if (1..=count).contains(&start) {
            usize::from(start) - 1
        } else {
            0
        };
        SongSelection { index, count }
    }

    /// Selection at `index` (zero-based) for `header`.
    pub fn at(header: &NsfHeader, index: usize) -> Result<Self, SelectionError> {
        let mut sel = Self::for_header(header);
        sel.select(index)?;
        Ok(sel)
    }

    /// Select `index`; on error the current selection is kept.
    pub fn select(&mut self, index: usize) -> Result<(), SelectionError> {
        if index >= usize::from(self.count) {
            return Err(SelectionError::OutOfRange {
                index,
                count: self.count,
            });
        }
        self.index = index;
        Ok(())
    }

    /// Advance to the next song, wrapping to the first.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % usize::from(self.count);
    }

    /// Step back to the previous song, wrapping to the last.
    pub fn previous(&mut self) {
        let count = usize::from(self.count);
        self.index = (self.index + count - 1) % count;
    }

    /// Zero-based index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based song number as shown to users.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn count(&self) -> u8 {
        self.count
    }
}
