// Character based string slicing. Context budgets are counted in characters, not bytes.

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

// The first `count` characters of the text.
pub fn first_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

// The last `count` characters of the text.
pub fn last_chars(text: &str, count: usize) -> &str {
    let skip = char_len(text).saturating_sub(count);
    skip_chars(text, skip)
}

// Everything after the first `count` characters.
pub fn skip_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((byte_index, _)) => &text[byte_index..],
        None => "",
    }
}
