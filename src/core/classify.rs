//! Decides whether a selection in an ERB template sits inside a Ruby code tag.
//!
//! This is a single backward scan over the text before the selection: it does
//! not validate tag balance, ignores tags inside string literals and never looks
//! past the selection start.

const OPEN_OUTPUT_TAG: &str = "<%=";
const OPEN_TAG: &str = "<%";
const CLOSE_TAG: &str = "%>";

/// Where a selection starts relative to embedded Ruby.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Inside an unclosed `<%` / `<%=` tag.
    Code,
    /// Literal markup text.
    Markup,
}

/// Classify the selection starting at byte offset `selection_start` of `text`.
///
/// The selection is in [`Region::Code`] iff the last opening tag before it
/// comes after the last closing tag.
pub fn classify(text: &str, selection_start: usize) -> Region {
    let end = clamp_to_char_boundary(text, selection_start);
    let before = &text[..end];

    let last_open = before
        .rfind(OPEN_OUTPUT_TAG)
        .into_iter()
        .chain(before.rfind(OPEN_TAG))
        .max();

    let Some(last_open) = last_open else {
        return Region::Markup;
    };

    match before.rfind(CLOSE_TAG) {
        Some(last_close) if last_close >= last_open => Region::Markup,
        _ => Region::Code,
    }
}

fn clamp_to_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
