//! Line breaking for header prose and squad lists.

/// How a string may be split across lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Break on whitespace; runs of whitespace collapse to one space.
    Prose,
    /// Break only on `", "` separators so no name is split.
    Names,
}

/// Wrap `text` to lines of at most `max_width` characters.
///
/// A single word (or name) longer than `max_width` is kept whole on its own line.
pub fn wrap(text: &str, max_width: usize, mode: WrapMode) -> String {
    match mode {
        WrapMode::Prose => wrap_prose(text, max_width),
        WrapMode::Names => wrap_names(text, max_width),
    }
}

fn wrap_prose(text: &str, max_width: usize) -> String {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let needed = if current.is_empty() { word_len } else { current_len + 1 + word_len };

        if needed <= max_width || current.is_empty() {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_len = needed;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    lines.push(current);

    lines.join("\n")
}

fn wrap_names(text: &str, max_width: usize) -> String {
    const SEPARATOR: &str = ", ";

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for (i, name) in text.split(SEPARATOR).enumerate() {
        let name_len = name.chars().count();
        if i == 0 {
            current.push_str(name);
            current_len = name_len;
        } else if current_len + SEPARATOR.len() + name_len <= max_width {
            current.push_str(SEPARATOR);
            current.push_str(name);
            current_len += SEPARATOR.len() + name_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(name);
            current_len = name_len;
        }
    }
    lines.push(current);

    lines.join("\n")
}
