// Song selection kept outside the decoded header.
use nsfdump::{NsfHeaderField, SelectionError, SongSelection};

use super::HeaderBytes;

#[test]
fn starts_at_starting_song() {
    let h = HeaderBytes::new()
        .u8(NsfHeaderField::TotalSongs, 5)
        .u8(NsfHeaderField::StartingSong, 3)
        .decode();
    let sel = SongSelection::for_header(&h);
    assert_eq!(sel.index(), 2);
    assert_eq!(sel.number(), 3);
    assert_eq!(sel.count(), 5);
}

#[test]
fn starting_song_past_count_falls_back_to_first() {
    let h = HeaderBytes::new()
        .u8(NsfHeaderField::TotalSongs, 2)
        .u8(NsfHeaderField::StartingSong, 7)
        .decode();
    // the header keeps the raw (normalized) value
    assert_eq!(h.starting_song(), 7);
    assert_eq!(SongSelection::for_header(&h).index(), 0);
}

#[test]
fn select_checks_range() {
    let h = HeaderBytes::new()
        .u8(NsfHeaderField::TotalSongs, 3)
        .decode();
    let mut sel = SongSelection::for_header(&h);
    assert!(sel.select(2).is_ok());
    assert_eq!(sel.index(), 2);

    let err = sel.select(3).unwrap_err();
    assert_eq!(err, SelectionError::OutOfRange { index: 3, count: 3 });
    assert_eq!(err.to_string(), "song index 3 out of range (file has 3 songs)");
    // unchanged after a rejected select
    assert_eq!(sel.index(), 2);

    assert!(SongSelection::at(&h, 1).is_ok());
    assert!(SongSelection::at(&h, 10).is_err());
}

#[test]
fn next_and_previous_wrap() {
    let h = HeaderBytes::new()
        .u8(NsfHeaderField::TotalSongs, 3)
        .decode();
    let mut sel = SongSelection::for_header(&h);
    sel.previous();
    assert_eq!(sel.index(), 2);
    sel.next();
    assert_eq!(sel.index(), 0);
    sel.next();
    sel.next();
    assert_eq!(sel.number(), 3);
}

#[test]
fn single_song_file() {
    let h = HeaderBytes::new().decode();
    let mut sel = SongSelection::for_header(&h);
    sel.next();
    sel.previous();
    assert_eq!(sel.index(), 0);
    assert_eq!(
        sel.select(1).unwrap_err().to_string(),
        "song index 1 out of range (file has 1 song)"
    );
}
