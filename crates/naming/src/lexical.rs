//! Word-boundary recovery for compound tokens.
//!
//! Titles often arrive with their words already glued together
//! (`EconData`, `NominalGDP1997`). Before any splitting happens we turn
//! those into space separated words.
//!
//! # Rules
//!
//! 1. A run of two or more uppercase letters is an acronym. It is folded to
//!    title case and closed with a space, so `GDP` becomes `Gdp ` instead of
//!    three single-letter words.
//! 2. Every remaining uppercase letter starts a new word.
//! 3. Whitespace runs collapse to a single space and the ends are trimmed.
//!
//! ```rust
//! use naming::split_compound_words;
//!
//! assert_eq!(
//!     split_compound_words("EconIndicatorNominalGDP1997China"),
//!     "Econ Indicator Nominal Gdp 1997 China"
//! );
//! ```

/// Inserts word boundaries into camelCase and acronym runs.
///
/// Total function: any input, including the empty string, yields a string.
pub fn split_compound_words(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut spaced = String::with_capacity(text.len() + text.len() / 2);

    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        if !ch.is_uppercase() {
            spaced.push(ch);
            i += 1;
            continue;
        }

        let run_end = chars[i..]
            .iter()
            .position(|c| !c.is_uppercase())
            .map_or(chars.len(), |offset| i + offset);

        spaced.push(' ');
        spaced.push(ch);
        if run_end - i >= 2 {
            for upper in &chars[i + 1..run_end] {
                spaced.extend(upper.to_lowercase());
            }
            spaced.push(' ');
            i = run_end;
        } else {
            i += 1;
        }
    }

    collapse_whitespace(&spaced)
}

/// Collapses whitespace runs to a single ASCII space and trims both ends.
///
/// ```rust
/// use naming::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  220  Bea\tEcon  "), "220 Bea Econ");
/// assert_eq!(collapse_whitespace(" \n "), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(segment);
    }
    collapsed
}
