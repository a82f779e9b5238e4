//! Text layout helpers: line wrapping and table rendering.

pub mod table;
pub mod wrap;

pub use table::{Align, AsciiTable, ColumnSpec, TableRenderer, TableRow};
pub use wrap::{wrap, WrapMode};

/// Python-style title case: the first letter of every alphabetic run is upper-cased,
/// the rest lower-cased.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
