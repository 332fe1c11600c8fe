//! Event block segmentation.
//!
//! Splits raw calendar text into the spans between `BEGIN:VEVENT` and
//! `END:VEVENT` markers, in source order. Calendar-level headers before the
//! first begin-marker are discarded.

/// Marker opening one event block.
pub const BEGIN_MARKER: &str = "BEGIN:VEVENT";

/// Marker closing one event block.
pub const END_MARKER: &str = "END:VEVENT";

/// Splits the raw text into event blocks.
///
/// A begin-marker with no matching end-marker yields a final block running
/// to the end of the input; later stages decode it best-effort. No markers
/// at all means "no events found", not an error.
pub fn split_event_blocks(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut rest = text;

    while let Some(begin) = rest.find(BEGIN_MARKER) {
        let after = &rest[begin + BEGIN_MARKER.len()..];
        match after.find(END_MARKER) {
            Some(end) => {
                blocks.push(&after[..end]);
                rest = &after[end + END_MARKER.len()..];
            }
            None => {
                blocks.push(after);
                break;
            }
        }
    }

    blocks
}
