//! Joins the surviving words into a single identifier.

use crate::config::Casing;

/// Renders `words` in the requested casing and cleans up the edges.
///
/// After joining, a leading run of digits or whitespace is stripped (an
/// identifier should not start with a number), then stray `_`, `-` and
/// spaces are trimmed from both ends.
///
/// ```rust
/// use naming::{render, Casing};
///
/// let words = ["220", "Bea", "Employment", "2010"];
/// assert_eq!(render(&words, Casing::Snake), "bea_employment_2010");
/// assert_eq!(render(&words, Casing::Kebab), "bea-employment-2010");
/// assert_eq!(render(&words, Casing::Camel), "BeaEmployment2010");
/// ```
pub fn render<S: AsRef<str>>(words: &[S], casing: Casing) -> String {
    let joined = match casing {
        Casing::Camel => camel_case(words),
        Casing::Snake => join_lowercase(words, '_'),
        Casing::Kebab => join_lowercase(words, '-'),
    };
    strip_leading_digits(&joined)
}

fn camel_case<S: AsRef<str>>(words: &[S]) -> String {
    let mut out = String::new();
    for (idx, word) in words.iter().enumerate() {
        if idx == 0 {
            out.push_str(&word.as_ref().to_lowercase());
        } else {
            push_title_case(&mut out, word.as_ref());
        }
    }
    out
}

fn push_title_case(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(&chars.as_str().to_lowercase());
    }
}

fn join_lowercase<S: AsRef<str>>(words: &[S], separator: char) -> String {
    let mut out = String::new();
    for (idx, word) in words.iter().enumerate() {
        if idx > 0 {
            out.push(separator);
        }
        out.push_str(word.as_ref());
    }
    out.to_lowercase()
        .trim_matches(|c: char| c == separator || c == ' ')
        .to_string()
}

fn strip_leading_digits(name: &str) -> String {
    name.trim_start_matches(|c: char| c.is_numeric() || c.is_whitespace())
        .trim_matches(|c: char| matches!(c, '_' | '-' | ' '))
        .to_string()
}
