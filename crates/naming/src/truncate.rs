//! Length-bounded word selection.
//!
//! The budget counts characters (not bytes) summed over the kept words.
//! Separators added later by the renderer are not part of it.

use crate::config::Alignment;

fn char_len<S: AsRef<str>>(word: &S) -> usize {
    word.as_ref().chars().count()
}

/// Total characters across `words`, separators excluded.
pub fn word_chars<S: AsRef<str>>(words: &[S]) -> usize {
    words.iter().map(char_len).sum()
}

/// Selects an order-preserving sublist whose combined length fits `max_length`.
///
/// - [`Alignment::Left`] keeps words from the start and stops at the first
///   word that does not fit.
/// - [`Alignment::Right`] does the same from the end.
/// - [`Alignment::Edge`] takes one word from each end per step. When a pair
///   no longer fits, the head word alone is tried once, then selection
///   stops. Head and tail never overlap.
///
/// A list that already fits is returned unchanged.
///
/// ```rust
/// use naming::{truncate_words, Alignment};
///
/// let words = ["aaa", "bbb", "ccc", "ddd"];
/// assert_eq!(truncate_words(&words, 9, Alignment::Left), ["aaa", "bbb", "ccc"]);
/// assert_eq!(truncate_words(&words, 9, Alignment::Right), ["bbb", "ccc", "ddd"]);
/// assert_eq!(truncate_words(&words, 9, Alignment::Edge), ["aaa", "bbb", "ddd"]);
/// ```
pub fn truncate_words<S>(words: &[S], max_length: usize, alignment: Alignment) -> Vec<S>
where
    S: AsRef<str> + Clone,
{
    if word_chars(words) <= max_length {
        return words.to_vec();
    }

    match alignment {
        Alignment::Left => {
            let keep = fitting_prefix(words.iter(), max_length);
            words[..keep].to_vec()
        }
        Alignment::Right => {
            let keep = fitting_prefix(words.iter().rev(), max_length);
            words[words.len() - keep..].to_vec()
        }
        Alignment::Edge => {
            let (head_end, tail_start) = edge_bounds(words, max_length);
            let mut kept = Vec::with_capacity(head_end + words.len() - tail_start);
            kept.extend_from_slice(&words[..head_end]);
            kept.extend_from_slice(&words[tail_start..]);
            kept
        }
    }
}

/// Number of leading items (in iteration order) that fit the budget.
fn fitting_prefix<'a, S, I>(words: I, max_length: usize) -> usize
where
    S: AsRef<str> + 'a,
    I: Iterator<Item = &'a S>,
{
    let mut used = 0;
    let mut keep = 0;
    for word in words {
        let len = char_len(word);
        if used + len > max_length {
            break;
        }
        used += len;
        keep += 1;
    }
    keep
}

/// Returns `(head_end, tail_start)`: keep `words[..head_end]` and `words[tail_start..]`.
fn edge_bounds<S: AsRef<str>>(words: &[S], max_length: usize) -> (usize, usize) {
    let mut used = 0;
    let mut head_end = 0;
    let mut tail_start = words.len();

    while head_end < tail_start {
        let head_len = char_len(&words[head_end]);
        if tail_start - head_end >= 2 {
            let tail_len = char_len(&words[tail_start - 1]);
            if used + head_len + tail_len <= max_length {
                used += head_len + tail_len;
                head_end += 1;
                tail_start -= 1;
                continue;
            }
        }
        if used + head_len <= max_length {
            head_end += 1;
        }
        break;
    }

    (head_end, tail_start)
}
