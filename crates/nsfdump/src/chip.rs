//! Expansion-audio chip flags stored in the NSF header.
//!
//! Byte `0x07B` carries one bit per optional sound-expansion chip. Bits 0..5
//! are assigned below; bits 6 and 7 are reserved and ignored. The order of
//! [`ExpansionChip::ALL`] follows the bit order and is the stable order used
//! for display and for the MML `#EXPANSION` line.

/// Optional sound-expansion chip an NSF may drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpansionChip {
    Vrc6,
    Vrc7,
    Fds,
    Mmc5,
    Namco163,
    Sunsoft5b,
}

impl ExpansionChip {
    /// All chips in bit order.
    pub const ALL: [ExpansionChip; 6] = [
        ExpansionChip::Vrc6,
        ExpansionChip::Vrc7,
        ExpansionChip::Fds,
        ExpansionChip::Mmc5,
        ExpansionChip::Namco163,
        ExpansionChip::Sunsoft5b,
    ];

    /// Bit position of this chip inside the expansion flags byte.
    pub fn bit(self) -> u8 {
        match self {
            ExpansionChip::Vrc6 => 0,
            ExpansionChip::Vrc7 => 1,
            ExpansionChip::Fds => 2,
            ExpansionChip::Mmc5 => 3,
            ExpansionChip::Namco163 => 4,
            ExpansionChip::Sunsoft5b => 5,
        }
    }

    /// Mask with only this chip's bit set.
    pub fn mask(self) -> u8 {
        1u8 << self.bit()
    }

    /// Human-readable name used in header listings.
    pub fn name(self) -> &'static str {
        match self {
            ExpansionChip::Vrc6 => "VRC6 Audio",
            ExpansionChip::Vrc7 => "VRC7 Audio",
            ExpansionChip::Fds => "FDS Sound",
            ExpansionChip::Mmc5 => "MMC5 Audio",
            ExpansionChip::Namco163 => "Namco 163",
            ExpansionChip::Sunsoft5b => "Sunsoft 5B (FME-07)",
        }
    }

    /// Short tag used in the MML report.
    pub fn tag(self) -> &'static str {
        match self {
            ExpansionChip::Vrc6 => "VRC6",
            ExpansionChip::Vrc7 => "VRC7",
            ExpansionChip::Fds => "FDS",
            ExpansionChip::Mmc5 => "MMC5",
            ExpansionChip::Namco163 => "N163",
            ExpansionChip::Sunsoft5b => "Sunsoft 5B",
        }
    }

    /// Return true when `flags` has this chip's bit set.
    pub fn is_flagged(self, flags: u8) -> bool {
        flags & self.mask() != 0
    }
}

/// One row of the expansion chip listing: a chip and whether it is flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipSupport {
    pub chip: ExpansionChip,
    pub supported: bool,
}

/// Expand a raw flags byte into all six chips with their support flag.
pub fn expansion_chips(flags: u8) -> Vec<ChipSupport> {
    ExpansionChip::ALL
        .iter()
        .map(|&chip| ChipSupport {
            chip,
            supported: chip.is_flagged(flags),
        })
        .collect()
}

/// Iterate only the chips flagged in `flags`, in bit order.
pub fn supported_chips(flags: u8) -> impl Iterator<Item = ExpansionChip> {
    ExpansionChip::ALL
        .into_iter()
        .filter(move |chip| chip.is_flagged(flags))
}
