//! Simulated MML report for a decoded header.
//!
//! Real NSF to MML conversion needs a 6502 + 2A03 emulator and an analysis
//! of the APU register log. This module does neither: it fills a fixed
//! PPMCK-style template with the header's metadata and varies tempo,
//! octave and a few phrases by song index so different songs produce
//! different text.
use std::fmt;

use crate::chip::ExpansionChip;
use crate::nsf::header::{NsfHeader, format_address, format_speed};
use crate::nsf::song::SongSelection;

const DEFINITIONS: &[&str] = &[
    "@v0 = {15 14 13 12 11 10 9 8 7 6 5 4 3 2 1 0} ; Volume envelope (decay)",
    "@v1 = {0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15} ; Volume envelope (attack)",
    "@0 = {0} ; Duty Cycle 12.5% (Square 1)",
    "@1 = {1} ; Duty Cycle 25% (Square 2)",
    "@2 = {2} ; Duty Cycle 50% (VRC6 Pulse 1)",
    "@3 = {3} ; Duty Cycle 75% (VRC6 Pulse 2)",
    "@s0 = {0, 4, 7} ; Arpeggio (Major Chord)",
    "@s1 = {0, 3, 7} ; Arpeggio (Minor Chord)",
    "@EP0 = {0,1,2,3,4,3,2,1,0,-1,-2,-3,-4,-3,-2,-1} ; Pitch Envelope (Vibrato)",
    "@DPCM0 = {\"KICK.DMC\", 15, 1024, 0, 0} ; DPCM sample definition (placeholder)",
    "@DPCM1 = {\"SNARE.DMC\", 12, 512, 0, 0} ; DPCM sample definition (placeholder)",
];

/// Displayable MML report for one song of a header.
///
/// ```
/// # fn demo(header: &nsfdump::NsfHeader) {
/// use nsfdump::{MmlReport, SongSelection};
///
/// let song = SongSelection::for_header(header);
/// let text = MmlReport::new(header, song).to_string();
/// assert!(text.starts_with("#TITLE "));
/// # }
/// ```
pub struct MmlReport<'a> {
    header: &'a NsfHeader,
    song: SongSelection,
}

impl<'a> MmlReport<'a> {
    pub fn new(header: &'a NsfHeader, song: SongSelection) -> Self {
        MmlReport { header, song }
    }

    fn tempo(&self) -> usize {
        120 + (self.song.index() * 12 % 60)
    }

    fn base_octave(&self) -> usize {
        4 + self.song.index() % 3
    }
}

impl fmt::Display for MmlReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.header;
        let index = self.song.index();
        let number = self.song.number();
        let even = index % 2 == 0;
        let tempo = self.tempo();
        let oct = self.base_octave();

        writeln!(f, "#TITLE {} (Song {}/{})", h.title(), number, h.total_songs())?;
        writeln!(f, "#ARTIST {}", h.artist())?;
        writeln!(f, "#COPYRIGHT {}", h.copyright())?;
        writeln!(f, "#PROGRAMMER nsfdump (simulated output)")?;
        let tags: Vec<&str> = h.supported_chips().map(ExpansionChip::tag).collect();
        if !tags.is_empty() {
            writeln!(f, "#EXPANSION {}", tags.join(", "))?;
        }

        writeln!(f)?;
        writeln!(f, "; NSF Header Info (parsed):")?;
        writeln!(f, "; Load Address: {}", format_address(h.load_address()))?;
        writeln!(f, "; Init Address: {}", format_address(h.init_address()))?;
        writeln!(f, "; Play Address: {}", format_address(h.play_address()))?;
        writeln!(f, "; NTSC Speed: {}", format_speed(h.ntsc_speed()))?;
        writeln!(f, "; PAL Speed: {}", format_speed(h.pal_speed()))?;
        writeln!(f)?;

        for line in DEFINITIONS {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;

        // Pulse 1
        writeln!(f, "A @0 t{tempo} o{oct} l8 v12 EN@s0 MP@EP0 ;(PULSE 1 - Melody)")?;
        writeln!(
            f,
            "A cdef | gab>c< | r4 {} fedc | <bagf | edcr",
            if even { "cege" } else { "dfaf" }
        )?;
        writeln!(f)?;

        // Pulse 2
        writeln!(
            f,
            "B @1 t{tempo} o{} l8 v10 EN@s1 ;(PULSE 2 - Harmony/Counter-Melody)",
            oct - 1
        )?;
        writeln!(
            f,
            "B eg<c e | >bg e<c | r4 {}eg<c e | >bg e<c | r4",
            if even { "g<cec>g<" } else { "a<dfd>a<" }
        )?;
        writeln!(f)?;

        // Triangle
        writeln!(f, "C t{tempo} o{} l4 v15 ;(TRIANGLE - Bassline)", oct - 2)?;
        writeln!(f, "C c g <e g | c g <d f# | a d <f# a | >c <g e g | r2")?;
        writeln!(f)?;

        // Noise
        writeln!(
            f,
            "E t{tempo} l16 v{} m{} p{} @v0 ;(NOISE - Percussion)",
            8 + index % 5,
            index % 2,
            index % 15 + 1
        )?;
        writeln!(f, "E [n r n r]4 | [n n r r]4 | [n r n n]4 | [n n n r]4 | r8")?;
        writeln!(f)?;

        // DPCM
        writeln!(f, "D t{tempo} l16 v15 ;(DPCM - Drums/Samples)")?;
        writeln!(
            f,
            "D @DPCM0 d r d r @DPCM1 d r d r | @DPCM0 d @DPCM1 d @DPCM0 d @DPCM1 d | r8"
        )?;
        writeln!(f)?;

        if h.uses_chip(ExpansionChip::Vrc6) {
            writeln!(f, "; --- VRC6 Expansion Channels ---")?;
            writeln!(f, "M @2 t{tempo} o{oct} l8 v10 @v0 ;(VRC6 PULSE 1)")?;
            writeln!(f, "M c+d+fg+ | a+>c+<bg+ | r4 c+d+fg+ r4")?;
            writeln!(f)?;
            writeln!(f, "N @3 t{tempo} o{} l8 v10 @v0 ;(VRC6 PULSE 2)", oct - 1)?;
            writeln!(f, "N f+g+<c+d+ | >bg+f+<c+ | r4 f+g+<c+d+ r4")?;
            writeln!(f)?;
            writeln!(f, "O t{tempo} o{} l8 v12 @v1 ;(VRC6 SAWTOOTH)", oct - 2)?;
            writeln!(f, "O c<g>c<g | c<f>c<f | r4 c<g>c<g r4")?;
            writeln!(f)?;
        }
        // FDS and N163 only appear in #EXPANSION; they get no channel block.

        writeln!(f)?;
        write!(f, "; --- End of Simulated MML for Song {} ---", number)
    }
}

/// Render the MML report for `song` as a `String`.
pub fn render_mml(header: &NsfHeader, song: SongSelection) -> String {
    MmlReport::new(header, song).to_string()
}

/// File name to save the report under: `nsf_<title>_song<n>.mml`.
///
/// Every character of the title that is not an ASCII letter or digit is
/// replaced by `_` and the result is lower-cased.
pub fn suggested_file_name(header: &NsfHeader, song: SongSelection) -> String {
    let safe: String = header
        .title()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    let safe = if safe.is_empty() {
        "untitled".to_string()
    } else {
        safe
    };
    format!("nsf_{}_song{}.mml", safe, song.number())
}
