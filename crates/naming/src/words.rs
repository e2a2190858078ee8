//! Tokenizer and stop-word filter.

use std::collections::HashSet;

/// Splits remapped text on `delimiter`, keeping empty tokens.
///
/// Empty tokens come from repeated delimiters and are discarded later by
/// [`StopWordFilter::filter`]. An empty delimiter yields the whole text as a
/// single word.
///
/// ```rust
/// use naming::split_words;
///
/// assert_eq!(split_words("a,,b", ","), vec!["a", "", "b"]);
/// ```
pub fn split_words(text: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return vec![text.to_string()];
    }
    text.split(delimiter).map(str::to_string).collect()
}

/// Case-insensitive stop-word set.
#[derive(Debug, Clone, Default)]
pub struct StopWordFilter {
    lowered: HashSet<String>,
}

impl StopWordFilter {
    pub fn new<I, S>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            lowered: stop_words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.lowered.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.lowered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lowered.is_empty()
    }

    /// Drops empty words and stop words, preserving order and casing.
    ///
    /// With `no_repeats`, each kept word joins a call-local copy of the stop
    /// set, so only its first occurrence survives. The filter itself is
    /// never modified.
    pub fn filter<I, S>(&self, words: I, no_repeats: bool) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut kept = Vec::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            let lowered = word.to_lowercase();
            if self.lowered.contains(&lowered) || seen.contains(&lowered) {
                continue;
            }
            if no_repeats {
                seen.insert(lowered);
            }
            kept.push(word.to_string());
        }
        kept
    }
}

/// One-shot convenience over [`StopWordFilter`].
pub fn filter_words<I, S, W>(words: I, stop_words: W, no_repeats: bool) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: IntoIterator,
    W::Item: AsRef<str>,
{
    StopWordFilter::new(stop_words).filter(words, no_repeats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::DEFAULT_STOP_WORDS;

    #[test]
    fn split_keeps_empty_tokens() {
        assert_eq!(split_words("a  b", " "), vec!["a", "", "b"]);
        assert_eq!(split_words("", " "), vec![""]);
    }

    #[test]
    fn split_on_multichar_delimiter() {
        assert_eq!(split_words("alpha::beta", "::"), vec!["alpha", "beta"]);
    }

    #[test]
    fn stop_words_case_insensitive() {
        let filter = StopWordFilter::new(DEFAULT_STOP_WORDS);
        let kept = filter.filter(["The", "THE", "the", "Report"], false);
        assert_eq!(kept, vec!["Report"]);
    }

    #[test]
    fn stop_set_supplied_uppercase_still_matches() {
        let kept = filter_words(["Annual", "DATA", "data"], ["Data"], false);
        assert_eq!(kept, vec!["Annual"]);
    }

    #[test]
    fn no_repeats_keeps_first_occurrence() {
        let filter = StopWordFilter::new(DEFAULT_STOP_WORDS);
        let kept = filter.filter(["Data", "Econ", "data", "DATA", "Econ", "2010"], true);
        assert_eq!(kept, vec!["Data", "Econ", "2010"]);
    }

    #[test]
    fn repeats_allowed_when_disabled() {
        let filter = StopWordFilter::new(Vec::<String>::new());
        let kept = filter.filter(["a", "", "a"], false);
        assert_eq!(kept, vec!["a", "a"]);
    }

    #[test]
    fn filter_is_not_mutated_by_no_repeats() {
        let filter = StopWordFilter::new(["of"]);
        let _ = filter.filter(["Data", "Data"], true);
        assert_eq!(filter.len(), 1);
        assert!(!filter.is_stop_word("data"));
        assert!(filter.is_stop_word("OF"));
    }
}
