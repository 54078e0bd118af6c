//! `info` command: print the decoded header as tables.
use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, ContentArrangement, Table, presets::NOTHING};

use nsfdump::nsf::{format_address, format_hex_bytes, format_speed};
use nsfdump::{NSF_HEADER_SIZE, NsfHeader, NsfHeaderField, SongSelection};

use crate::input::{decode_header, display_name};

const BYTES_PER_LINE: usize = 16;

/// Replace control characters so header text cannot disturb the terminal.
fn printable(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { '.' } else { c })
        .collect()
}

/// Key/value rows for every header field, in display order.
pub(crate) fn summarize_header(header: &NsfHeader) -> Vec<(String, String)> {
    NsfHeaderField::ALL
        .iter()
        .map(|&field| {
            let value = match field {
                NsfHeaderField::Magic => format_hex_bytes(&header.magic()),
                NsfHeaderField::Version => format!("NSF {}", header.version()),
                NsfHeaderField::TotalSongs => header.total_songs().to_string(),
                NsfHeaderField::StartingSong => {
                    let sel = SongSelection::for_header(header);
                    if sel.number() == usize::from(header.starting_song()) {
                        header.starting_song().to_string()
                    } else {
                        format!(
                            "{} (out of range, using {})",
                            header.starting_song(),
                            sel.number()
                        )
                    }
                }
                NsfHeaderField::LoadAddress => format_address(header.load_address()),
                NsfHeaderField::InitAddress => format_address(header.init_address()),
                NsfHeaderField::PlayAddress => format_address(header.play_address()),
                NsfHeaderField::Title => printable(header.title()),
                NsfHeaderField::Artist => printable(header.artist()),
                NsfHeaderField::Copyright => printable(header.copyright()),
                NsfHeaderField::NtscSpeed => format_speed(header.ntsc_speed()),
                NsfHeaderField::PalSpeed => format_speed(header.pal_speed()),
                NsfHeaderField::RegionFlags => {
                    format!("{} (0x{:02X})", header.region(), header.region_flags())
                }
                NsfHeaderField::BankswitchInit => format_hex_bytes(&header.bankswitch_init()),
                NsfHeaderField::ExpansionFlags => {
                    let names: Vec<&str> = header.supported_chips().map(|c| c.name()).collect();
                    if names.is_empty() {
                        format!("(none) (0x{:02X})", header.expansion_flags())
                    } else {
                        format!("{} (0x{:02X})", names.join(", "), header.expansion_flags())
                    }
                }
            };
            (field.label().to_string(), value)
        })
        .collect()
}

/// Print the header summary and expansion chip table for one file.
pub fn info(path: &Path, bytes: &[u8], raw: bool) -> Result<()> {
    let header = decode_header(path, bytes)?;

    println!("\"{}\" ({} bytes)", display_name(path), bytes.len());

    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    for (k, v) in summarize_header(&header) {
        table.add_row(vec![Cell::new(k), Cell::new(v)]);
    }
    println!("{}", table);

    println!();
    let mut chips = Table::new();
    chips.load_preset(NOTHING);
    chips.set_header(vec!["bit", "expansion chip", "supported"]);
    for row in header.expansion_chips() {
        chips.add_row(vec![
            Cell::new(row.chip.bit()),
            Cell::new(row.chip.name()),
            Cell::new(if row.supported { "yes" } else { "no" }),
        ]);
    }
    println!("{}", chips);

    if raw {
        println!();
        for line in hex_dump(header.raw_bytes()) {
            println!("{}", line);
        }
    }
    Ok(())
}

/// 16-column hex dump of the header, annotated with the fields that start
/// on each line.
pub(crate) fn hex_dump(raw: &[u8; NSF_HEADER_SIZE]) -> Vec<String> {
    raw.chunks(BYTES_PER_LINE)
        .enumerate()
        .map(|(row, chunk)| {
            let base = row * BYTES_PER_LINE;
            let hex = format_hex_bytes(chunk);
            let ascii: String = chunk
                .iter()
                .map(|&b| {
                    if b.is_ascii_graphic() || b == b' ' {
                        char::from(b)
                    } else {
                        '.'
                    }
                })
                .collect();
            let fields: Vec<&str> = NsfHeaderField::ALL
                .iter()
                .filter(|f| (base..base + BYTES_PER_LINE).contains(&f.offset()))
                .map(|f| f.label())
                .collect();
            let line = format!("{:04X}  {}  {}", base, hex, ascii);
            if fields.is_empty() {
                line
            } else {
                format!("{}  ; {}", line, fields.join(", "))
            }
        })
        .collect()
}
