// Region and expansion-chip flag interpretation.
use nsfdump::{ExpansionChip, NsfHeaderField, Region, Standard};

use super::HeaderBytes;

#[test]
fn region_labels() {
    assert_eq!(Region::from_flags(0b00).label(), "NTSC");
    assert_eq!(Region::from_flags(0b01).label(), "PAL");
    assert_eq!(Region::from_flags(0b10).label(), "Dual (NTSC preferred)");
    assert_eq!(Region::from_flags(0b11).label(), "Dual (PAL preferred)");
}

#[test]
fn region_from_header() {
    let h = HeaderBytes::new()
        .u8(NsfHeaderField::RegionFlags, 0b11)
        .decode();
    let region = h.region();
    assert_eq!(region.preferred, Standard::Pal);
    assert!(region.dual);
    assert_eq!(region.to_string(), "Dual (PAL preferred)");
    // the raw byte is kept as-is
    assert_eq!(h.region_flags(), 0b11);
}

#[test]
fn expansion_bits_zero_and_two() {
    let h = HeaderBytes::new()
        .u8(NsfHeaderField::ExpansionFlags, 0x05)
        .decode();

    let listing = h.expansion_chips();
    let flags: Vec<(ExpansionChip, bool)> =
        listing.iter().map(|c| (c.chip, c.supported)).collect();
    assert_eq!(
        flags,
        vec![
            (ExpansionChip::Vrc6, true),
            (ExpansionChip::Vrc7, false),
            (ExpansionChip::Fds, true),
            (ExpansionChip::Mmc5, false),
            (ExpansionChip::Namco163, false),
            (ExpansionChip::Sunsoft5b, false),
        ]
    );

    let supported: Vec<ExpansionChip> = h.supported_chips().collect();
    assert_eq!(supported, vec![ExpansionChip::Vrc6, ExpansionChip::Fds]);
    assert!(h.uses_chip(ExpansionChip::Fds));
    assert!(!h.uses_chip(ExpansionChip::Mmc5));
}

#[test]
fn expansion_names_in_bit_order() {
    let names: Vec<&str> = ExpansionChip::ALL.iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        vec![
            "VRC6 Audio",
            "VRC7 Audio",
            "FDS Sound",
            "MMC5 Audio",
            "Namco 163",
            "Sunsoft 5B (FME-07)",
        ]
    );
}

#[test]
fn reserved_expansion_bits_are_ignored() {
    let h = HeaderBytes::new()
        .u8(NsfHeaderField::ExpansionFlags, 0b1100_0000)
        .decode();
    assert_eq!(h.supported_chips().count(), 0);
    assert_eq!(h.expansion_chips().len(), 6);
}
