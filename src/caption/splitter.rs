//! Two-line split heuristic for captions that are too wide.

/// Split `text` into two similarly sized lines at a space.
///
/// The chosen space is the interior one closest to the middle of the string
/// (by character count); among equally close spaces the first wins. The space
/// itself is dropped. Strings shorter than three characters or without an
/// interior space come back unchanged as a single line.
///
/// ```
/// use memegen::caption::split;
///
/// assert_eq!(split("Hello, world!"), vec!["Hello,", "world!"]);
/// assert_eq!(split("no_spaces_here"), vec!["no_spaces_here"]);
/// ```
pub fn split(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let len = chars.len();
    if len < 3 {
        return vec![text];
    }

    let midpoint = len / 2;
    let best = chars[1..len - 1]
        .iter()
        .enumerate()
        .filter(|(_, (_, c))| *c == ' ')
        .map(|(i, (byte, _))| (i + 1, *byte))
        .min_by_key(|(index, _)| index.abs_diff(midpoint));

    match best {
        Some((_, byte)) => vec![&text[..byte], &text[byte + 1..]],
        None => vec![text],
    }
}
