// Simulated MML report and its file name.
use nsfdump::{NsfHeaderField, SongSelection, render_mml, suggested_file_name};

use super::HeaderBytes;

fn sample() -> HeaderBytes {
    HeaderBytes::new()
        .u8(NsfHeaderField::TotalSongs, 4)
        .u16(NsfHeaderField::LoadAddress, 0x8000)
        .u16(NsfHeaderField::InitAddress, 0x8003)
        .u16(NsfHeaderField::PlayAddress, 0x0A0)
        .text(NsfHeaderField::Title, b"Moon Stage")
        .text(NsfHeaderField::Artist, b"Jane Doe")
        .u16(NsfHeaderField::NtscSpeed, 16639)
}

#[test]
fn report_header_lines() {
    let h = sample().decode();
    let mml = render_mml(&h, SongSelection::for_header(&h));
    let lines: Vec<&str> = mml.lines().collect();
    assert_eq!(lines[0], "#TITLE Moon Stage (Song 1/4)");
    assert_eq!(lines[1], "#ARTIST Jane Doe");
    assert_eq!(lines[2], "#COPYRIGHT N/A");
    assert!(lines[3].starts_with("#PROGRAMMER "));
    assert!(!mml.contains("#EXPANSION"));
    assert!(mml.contains("; Load Address: $8000\n"));
    assert!(mml.contains("; Init Address: $8003\n"));
    assert!(mml.contains("; Play Address: $00A0\n"));
    assert!(mml.contains("; NTSC Speed: 16639 µs (60.10 Hz)\n"));
    assert!(mml.contains("; PAL Speed: 0 µs (n/a)\n"));
    assert!(mml.ends_with("; --- End of Simulated MML for Song 1 ---"));
}

#[test]
fn report_varies_by_song() {
    let h = sample().decode();
    let first = render_mml(&h, SongSelection::at(&h, 0).unwrap());
    let second = render_mml(&h, SongSelection::at(&h, 1).unwrap());

    assert!(first.contains("A @0 t120 o4 l8 v12 EN@s0 MP@EP0"));
    assert!(first.contains("r4 cege fedc"));
    assert!(first.contains("E t120 l16 v8 m0 p1 @v0"));

    assert!(second.contains("#TITLE Moon Stage (Song 2/4)"));
    assert!(second.contains("A @0 t132 o5 l8 v12"));
    assert!(second.contains("B @1 t132 o4 l8 v10"));
    assert!(second.contains("C t132 o3 l4 v15"));
    assert!(second.contains("r4 dfaf fedc"));
    assert!(second.contains("E t132 l16 v9 m1 p2 @v0"));
}

#[test]
fn report_tempo_wraps() {
    let h = HeaderBytes::new()
        .u8(NsfHeaderField::TotalSongs, 10)
        .decode();
    // index 5: 5 * 12 % 60 == 0, octave 4 + 5 % 3 == 6
    let mml = render_mml(&h, SongSelection::at(&h, 5).unwrap());
    assert!(mml.contains("A @0 t120 o6 "));
}

#[test]
fn report_lists_expansion_chips() {
    let h = sample()
        .u8(NsfHeaderField::ExpansionFlags, 0b0011_0001)
        .decode();
    let mml = render_mml(&h, SongSelection::for_header(&h));
    assert!(mml.contains("#EXPANSION VRC6, N163, Sunsoft 5B\n"));
    assert!(mml.contains("; --- VRC6 Expansion Channels ---"));
    assert!(mml.contains("O t120 o2 l8 v12 @v1 ;(VRC6 SAWTOOTH)"));
}

#[test]
fn report_without_vrc6_has_no_vrc6_channels() {
    let h = sample()
        .u8(NsfHeaderField::ExpansionFlags, 0b0000_0100)
        .decode();
    let mml = render_mml(&h, SongSelection::for_header(&h));
    assert!(mml.contains("#EXPANSION FDS\n"));
    assert!(!mml.contains("VRC6 PULSE 1"));
    assert!(!mml.contains("@FM"));
}

#[test]
fn file_name_is_sanitized() {
    let h = sample().decode();
    let sel = SongSelection::at(&h, 2).unwrap();
    assert_eq!(suggested_file_name(&h, sel), "nsf_moon_stage_song3.mml");

    let h = HeaderBytes::new()
        .text(NsfHeaderField::Title, b"Boss #2: Fire/Ice")
        .decode();
    assert_eq!(
        suggested_file_name(&h, SongSelection::for_header(&h)),
        "nsf_boss__2__fire_ice_song1.mml"
    );

    // the sentinel title is sanitized like any other text
    let h = HeaderBytes::new().decode();
    assert_eq!(
        suggested_file_name(&h, SongSelection::for_header(&h)),
        "nsf_n_a_song1.mml"
    );
}
