//! Fixed-width wrapping of plain text.
//!
//! Wrapping runs on raw text before colorization: escape sequences would
//! otherwise count against the width.

/// Splits `message` into consecutive segments of at most `width` characters.
///
/// Segments borrow from `message` and concatenate back to it. Splits fall on
/// character boundaries only and may land mid-word. A `width` of zero
/// disables wrapping.
pub fn wrap(message: &str, width: usize) -> Vec<&str> {
    if width == 0 || message.chars().count() <= width {
        return vec![message];
    }

    let mut segments = Vec::with_capacity(message.len() / width + 1);
    let mut start = 0;
    let mut count = 0;
    for (idx, _) in message.char_indices() {
        if count == width {
            segments.push(&message[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    segments.push(&message[start..]);
    segments
}
