//! Split a description into segments at question markers

/// Markdown bold marker, opens and closes a question
pub(crate) const BOLD: &[u8] = b"**";

/// HTML question opener
pub(crate) const STRONG_OPEN: &[u8] = b"<strong>";

/// HTML question closer
pub(crate) const STRONG_CLOSE: &[u8] = b"</strong>";

/// Where the scanner is relative to the current segment's question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Preface or answer text; any marker opens a new segment
    Prose,
    /// Inside `**...`, waiting for the closing `**`
    InBold,
    /// Inside `<strong>...`, waiting for `</strong>`
    InStrong,
}

/// Split `text` into segments, each starting at the marker that introduces it.
///
/// The text before the first marker is returned as its own segment. A `**`
/// that closes an open bold question does not start a new segment, so
/// `**Question**Answer` stays whole. `<strong>` always starts a new segment.
/// Markers are ASCII, so every split point is a char boundary.
pub(crate) fn split_segments(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut segments = Vec::new();
    let mut start = 0;
    let mut state = ScanState::Prose;
    let mut i = 0;

    while i < bytes.len() {
        let rest = &bytes[i..];

        if rest.starts_with(STRONG_OPEN) {
            if i > start {
                segments.push(&text[start..i]);
            }
            start = i;
            state = ScanState::InStrong;
            i += STRONG_OPEN.len();
            continue;
        }

        match state {
            ScanState::Prose if rest.starts_with(BOLD) => {
                if i > start {
                    segments.push(&text[start..i]);
                }
                start = i;
                state = ScanState::InBold;
                i += BOLD.len();
                continue;
            }
            // `****`: the opener has no question, so this `**` opens the next segment
            ScanState::InBold if rest.starts_with(BOLD) && i == start + BOLD.len() => {
                segments.push(&text[start..i]);
                start = i;
                i += BOLD.len();
                continue;
            }
            ScanState::InBold if rest.starts_with(BOLD) => {
                state = ScanState::Prose;
                i += BOLD.len();
                continue;
            }
            ScanState::InStrong if rest.starts_with(STRONG_CLOSE) => {
                state = ScanState::Prose;
                i += STRONG_CLOSE.len();
                continue;
            }
            _ => {}
        }

        i += 1;
    }

    if start < bytes.len() {
        segments.push(&text[start..]);
    }

    segments
}
