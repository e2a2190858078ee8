//! Collision resolution against a caller-owned set of names.
//!
//! A name is split into a *base* and an optional numeric suffix
//! (`report_3` → `report` + `3`). When a candidate collides with anything
//! sharing its base, the next suffix after the highest one in use is
//! appended. Suffixes are never reused and never go down, so repeated calls
//! against the same set keep producing fresh names.
//!
//! ```rust
//! use std::collections::HashSet;
//! use naming::make_unique;
//!
//! let mut existing: HashSet<String> = ["sales".to_string(), "sales_7".to_string()].into();
//! assert_eq!(make_unique("sales", &mut existing), "sales_8");
//! assert_eq!(make_unique("sales", &mut existing), "sales_9");
//! assert_eq!(make_unique("costs", &mut existing), "costs");
//! assert!(existing.contains("sales_9"));
//! ```

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Mutex;

use tracing::trace;

/// Suffix assumed for a base that collides without any numbered sibling,
/// so the first generated name ends in `_2`.
const IMPLICIT_SUFFIX: &str = "1";

/// Splits `name` at a trailing `_<ascii digits>` suffix.
///
/// ```rust
/// use naming::split_suffix;
///
/// assert_eq!(split_suffix("gdp_2010_3"), ("gdp_2010", Some("3")));
/// assert_eq!(split_suffix("gdp_total"), ("gdp_total", None));
/// assert_eq!(split_suffix("gdp_"), ("gdp_", None));
/// ```
pub fn split_suffix(name: &str) -> (&str, Option<&str>) {
    match name.rsplit_once('_') {
        Some((base, digits)) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            (base, Some(digits))
        }
        _ => (name, None),
    }
}

/// Returns a name that is not in `existing` and records it there.
///
/// The candidate is returned as-is when neither it, its base, nor any
/// numbered variant of its base is present. Otherwise the result is
/// `<base>_<n>` where `n` is one more than the largest numeric suffix in use
/// for that base (at least `2`). Suffixes are compared as decimal numbers of
/// any width, so `n` never wraps or saturates onto a name already taken.
///
/// Not safe for unsynchronized concurrent use against one set; see
/// [`SharedNameRegistry`].
pub fn make_unique(name: &str, existing: &mut HashSet<String>) -> String {
    let (base, _) = split_suffix(name);
    let mut collides = existing.contains(name) || existing.contains(base);
    let mut highest: &str = IMPLICIT_SUFFIX;

    for entry in existing.iter() {
        let (entry_base, Some(digits)) = split_suffix(entry) else {
            continue;
        };
        if entry_base != base {
            continue;
        }
        collides = true;
        let digits = significant_digits(digits);
        if compare_digits(digits, highest) == Ordering::Greater {
            highest = digits;
        }
    }

    let unique = if collides {
        let renamed = format!("{base}_{}", increment_digits(highest));
        trace!(candidate = name, renamed = %renamed, "name_collision");
        renamed
    } else {
        name.to_string()
    };

    existing.insert(unique.clone());
    unique
}

fn significant_digits(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

/// Orders two zero-stripped digit strings by numeric value.
fn compare_digits(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Adds one to a string of ASCII digits, carrying into a new leading digit.
fn increment_digits(digits: &str) -> String {
    let mut out: Vec<char> = digits.chars().collect();
    for d in out.iter_mut().rev() {
        if *d == '9' {
            *d = '0';
        } else {
            *d = char::from(*d as u8 + 1);
            return out.into_iter().collect();
        }
    }
    let mut carried = String::with_capacity(out.len() + 1);
    carried.push('1');
    carried.extend(out);
    carried
}

/// An owned set of allocated names for one naming session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameRegistry {
    names: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a unique name derived from `name`. See [`make_unique`].
    pub fn make_unique(&mut self, name: &str) -> String {
        make_unique(name, &mut self.names)
    }

    /// Marks `name` as taken without renaming it.
    ///
    /// Returns `false` if it was already present.
    pub fn reserve(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn into_inner(self) -> HashSet<String> {
        self.names
    }
}

impl From<HashSet<String>> for NameRegistry {
    fn from(names: HashSet<String>) -> Self {
        Self { names }
    }
}

impl<S: Into<String>> FromIterator<S> for NameRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A [`NameRegistry`] behind a mutex, for callers sharing one session
/// across threads.
///
/// The scan and the insert in [`SharedNameRegistry::make_unique`] happen
/// under a single lock, so concurrent callers never receive the same name.
#[derive(Debug, Default)]
pub struct SharedNameRegistry {
    inner: Mutex<NameRegistry>,
}

impl SharedNameRegistry {
    pub fn new(registry: NameRegistry) -> Self {
        Self {
            inner: Mutex::new(registry),
        }
    }

    pub fn make_unique(&self, name: &str) -> String {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.make_unique(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        let guard = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.contains(name)
    }

    pub fn len(&self) -> usize {
        let guard = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies the current set of names.
    pub fn snapshot(&self) -> NameRegistry {
        let guard = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.clone()
    }

    pub fn into_inner(self) -> NameRegistry {
        self.inner
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
