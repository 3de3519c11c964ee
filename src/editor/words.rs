//! Word boundaries and word edits on a char column
//!
//! A word is a run of alphanumeric chars or underscores. Motions move past
//! any separators first, then past the word, the way readline does.

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Column just past the end of the next word
pub fn next_word_end(chars: &[char], col: usize) -> usize {
    let mut i = col.min(chars.len());
    while i < chars.len() && !is_word_char(chars[i]) {
        i += 1;
    }
    while i < chars.len() && is_word_char(chars[i]) {
        i += 1;
    }
    i
}

/// Column of the start of the previous word
pub fn prev_word_start(chars: &[char], col: usize) -> usize {
    let mut i = col.min(chars.len());
    while i > 0 && !is_word_char(chars[i - 1]) {
        i -= 1;
    }
    while i > 0 && is_word_char(chars[i - 1]) {
        i -= 1;
    }
    i
}

/// Remove `start..end` and return the new text with the cursor at `start`
pub fn delete_range(chars: &[char], start: usize, end: usize) -> (String, usize) {
    let text = chars[..start].iter().chain(&chars[end..]).collect();
    (text, start)
}

/// Swap the chars around the cursor and step past them
///
/// At the end of the line the last two chars are swapped instead.
pub fn transpose_chars(chars: &[char], col: usize) -> (String, usize) {
    let mut chars = chars.to_vec();
    let col = col.min(chars.len());
    if chars.len() < 2 || col == 0 {
        return (chars.into_iter().collect(), col);
    }

    let at = if col == chars.len() { col - 1 } else { col };
    chars.swap(at - 1, at);
    (chars.into_iter().collect(), at + 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCase {
    Upper,
    Lower,
    Capitalized,
}

/// Change the case of the next word and move past it
pub fn change_word_case(chars: &[char], col: usize, case: WordCase) -> (String, usize) {
    let end = next_word_end(chars, col);
    let mut start = col.min(end);
    while start < end && !is_word_char(chars[start]) {
        start += 1;
    }

    let mut text: String = chars[..start].iter().collect();
    for (i, &c) in chars[start..end].iter().enumerate() {
        match case {
            WordCase::Upper => text.extend(c.to_uppercase()),
            WordCase::Lower => text.extend(c.to_lowercase()),
            WordCase::Capitalized if i == 0 => text.extend(c.to_uppercase()),
            WordCase::Capitalized => text.extend(c.to_lowercase()),
        }
    }
    text.extend(&chars[end..]);

    // Case mapping can change char counts; keep the cursor after the word
    let new_end = text.chars().count() - (chars.len() - end);
    (text, new_end)
}

#[cfg(test)]
#[path = "words_tests.rs"]
mod words_tests;
