//! Character remapping: symbols become words or disappear.
//!
//! All substitution keys are compiled into one alternation, longest key
//! first, and applied in a single left-to-right scan. At any position the
//! longest matching key wins (`<=` beats `<`, `US$` beats `$`), and text
//! produced by one replacement is never rescanned by another. The result is
//! therefore independent of map iteration order.

use std::collections::HashMap;

use regex::{Captures, Regex};

use crate::error::NamingError;
use crate::lexical::collapse_whitespace;

/// A compiled substitution table.
#[derive(Debug, Clone)]
pub struct Remapper {
    pattern: Option<Regex>,
    replacements: HashMap<String, String>,
}

impl Remapper {
    /// Compiles `substitutions`. With `remove_only` every key maps to `""`.
    pub fn new<'a, I>(substitutions: I, remove_only: bool) -> Result<Self, NamingError>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut replacements = HashMap::new();
        for (from, to) in substitutions {
            if from.is_empty() {
                return Err(NamingError::InvalidConfig(
                    "substitution keys must be non-empty".into(),
                ));
            }
            let to = if remove_only { String::new() } else { to.clone() };
            replacements.insert(from.clone(), to);
        }

        if replacements.is_empty() {
            return Ok(Self {
                pattern: None,
                replacements,
            });
        }

        let mut keys: Vec<&str> = replacements.keys().map(String::as_str).collect();
        keys.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        let alternation = keys
            .iter()
            .map(|key| regex::escape(key))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = Regex::new(&alternation).map_err(|err| {
            NamingError::InvalidConfig(format!("substitution table does not compile: {err}"))
        })?;

        Ok(Self {
            pattern: Some(pattern),
            replacements,
        })
    }

    /// Applies the table to `text`, then collapses whitespace and trims.
    pub fn apply(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return collapse_whitespace(text);
        };
        let replaced = pattern.replace_all(text, |caps: &Captures<'_>| {
            self.replacements
                .get(&caps[0])
                .cloned()
                .unwrap_or_default()
        });
        collapse_whitespace(&replaced)
    }

    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }
}

/// One-shot convenience over [`Remapper`].
pub fn remap_chars<'a, I>(
    text: &str,
    substitutions: I,
    remove_only: bool,
) -> Result<String, NamingError>
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    Ok(Remapper::new(substitutions, remove_only)?.apply(text))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::defaults::default_substitutions;

    fn defaults(remove_only: bool) -> Remapper {
        Remapper::new(&default_substitutions(), remove_only).expect("defaults compile")
    }

    #[test]
    fn operators_become_words() {
        let remap = defaults(false);
        assert_eq!(remap.apply("a <= b"), "a lte b");
        assert_eq!(remap.apply("a >= b"), "a gte b");
        assert_eq!(remap.apply("a <> b != c ~= d ^= e"), "a ne b ne c ne d ne e");
        assert_eq!(remap.apply("a = b < c > d"), "a eq b lt c gt d");
    }

    #[test]
    fn symbols_and_currency() {
        let remap = defaults(false);
        assert_eq!(remap.apply("Growth % R&D"), "Growth pct RandD");
        assert_eq!(remap.apply("miles/hour"), "milesperhour");
        assert_eq!(remap.apply("US$ 5 $ 6"), "usd 5 usd 6");
    }

    #[test]
    fn separators_and_removals() {
        let remap = defaults(false);
        assert_eq!(remap.apply("2010-2015 gdp_total"), "2010 2015 gdp total");
        assert_eq!(
            remap.apply(r#"a.b#c?d|e*f,g(h)i:j;k'l"m\n"#),
            "abcdefghijklmn"
        );
    }

    #[test]
    fn remove_only_drops_everything() {
        let remap = defaults(true);
        assert_eq!(remap.apply("220 Bea === Econ 2010-2015"), "220 Bea Econ 20102015");
    }

    #[test]
    fn longest_key_wins_regardless_of_order() {
        let mut table = BTreeMap::new();
        table.insert("a".to_string(), "1".to_string());
        table.insert("ab".to_string(), "2".to_string());
        table.insert("abc".to_string(), "3".to_string());
        let remap = Remapper::new(&table, false).expect("compiles");
        assert_eq!(remap.apply("abcab a"), "32 1");
    }

    #[test]
    fn replacements_are_not_rescanned() {
        let mut table = BTreeMap::new();
        table.insert("x".to_string(), "y".to_string());
        table.insert("y".to_string(), "z".to_string());
        let remap = Remapper::new(&table, false).expect("compiles");
        assert_eq!(remap.apply("xy"), "yz");
    }

    #[test]
    fn empty_table_only_collapses() {
        let table: BTreeMap<String, String> = BTreeMap::new();
        let remap = Remapper::new(&table, false).expect("compiles");
        assert!(remap.is_empty());
        assert_eq!(remap.apply("  a  b "), "a b");
    }

    #[test]
    fn empty_key_rejected() {
        let mut table = BTreeMap::new();
        table.insert(String::new(), "x".to_string());
        assert!(matches!(
            Remapper::new(&table, false),
            Err(NamingError::InvalidConfig(_))
        ));
    }
}
