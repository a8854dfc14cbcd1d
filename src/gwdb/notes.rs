//! Note segmentation for GEDCOM continuation chains.
//!
//! A note is split first on hard breaks (`<br>` tags or newlines), then each
//! piece is cut into runs of at most [`NOTE_MAX_LEN`] code points:
//!
//! ```text
//! "first line<br/>second ... (80 chars) ..."
//!   → Note("first line")
//!     Continued("second ... first 71 chars")
//!     Concatenated("... remaining 9 chars")
//! ```

use std::sync::OnceLock;
use regex::Regex;

use super::types::models::{NoteKind, NoteSegment, SegmentedNote};

/// Maximum number of code points per GEDCOM note line.
pub const NOTE_MAX_LEN: usize = 71;

/// Matches `<br>`, `<BR/>`, `<br />` (optionally followed by one newline) or a bare newline.
static BREAK_PATTERN: OnceLock<Regex> = OnceLock::new();

fn break_regex() -> &'static Regex {
    BREAK_PATTERN.get_or_init(|| Regex::new(r"(?i)<br ?/?>\n?|\n").expect("Invalid note break regex pattern"))
}

/// Segments a note with the default line length bound.
pub fn segment_note(text: &str) -> SegmentedNote {
    segment_note_with_limit(text, NOTE_MAX_LEN)
}

/// Segments a note, cutting pieces into runs of at most `max_len` code points.
///
/// A `max_len` of 0 disables length chunking. Empty pieces are kept as a
/// single empty segment so the chain mirrors the line structure of the note.
pub fn segment_note_with_limit(text: &str, max_len: usize) -> SegmentedNote {
    let mut segments = Vec::new();

    for (i, piece) in break_regex().split(text).enumerate() {
        let kind = if i == 0 { NoteKind::Note } else { NoteKind::Continued };

        if piece.is_empty() || max_len == 0 {
            segments.push(NoteSegment {
                kind,
                text: piece.to_string(),
            });
            continue;
        }

        let chars: Vec<char> = piece.chars().collect();
        for (j, chunk) in chars.chunks(max_len).enumerate() {
            segments.push(NoteSegment {
                kind: if j == 0 { kind } else { NoteKind::Concatenated },
                text: chunk.iter().collect(),
            });
        }
    }

    segments
}
