//! Irregular plural table and the hook that lets callers adjust it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const BUILTIN: &[(&str, &str)] = &[
    ("addendum", "addenda"),
    ("analysis", "analyses"),
    ("child", "children"),
    ("goose", "geese"),
    ("locus", "loci"),
    ("louse", "lice"),
    ("oasis", "oases"),
    ("ovum", "ova"),
    ("man", "men"),
    ("mouse", "mice"),
    ("tooth", "teeth"),
    ("woman", "women"),
];

/// Mapping from a lowercase singular noun to its irregular plural.
///
/// Keys are lowercased on insertion so lookups against a normalized word
/// always hit. Serializes as a plain JSON/TOML table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct ExceptionMap(BTreeMap<String, String>);

impl ExceptionMap {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in irregular plurals.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN.iter().copied().collect()
    }

    /// Adds or overrides an entry, returning the previous plural if any.
    pub fn insert(
        &mut self,
        singular: impl AsRef<str>,
        plural: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(singular.as_ref().to_lowercase(), plural.into())
    }

    /// Removes an entry, returning its plural if it was present.
    pub fn remove(&mut self, singular: &str) -> Option<String> {
        self.0.remove(&singular.to_lowercase())
    }

    /// Looks up the irregular plural of an already-lowercased word.
    pub fn get(&self, singular: &str) -> Option<&str> {
        self.0.get(singular).map(String::as_str)
    }

    pub fn contains(&self, singular: &str) -> bool {
        self.0.contains_key(singular)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns `self` with every entry of `overrides` applied on top.
    #[must_use]
    pub fn merged(mut self, overrides: &ExceptionMap) -> Self {
        self.0
            .extend(overrides.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for ExceptionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: AsRef<str>, V: Into<String>> Extend<(K, V)> for ExceptionMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (singular, plural) in iter {
            self.insert(singular, plural);
        }
    }
}

impl From<BTreeMap<String, String>> for ExceptionMap {
    fn from(raw: BTreeMap<String, String>) -> Self {
        raw.into_iter().collect()
    }
}

impl From<ExceptionMap> for BTreeMap<String, String> {
    fn from(map: ExceptionMap) -> Self {
        map.0
    }
}

/// Extension point consulted before every pluralization.
///
/// Receives the built-in table and returns the table to use. Implementations
/// may pass it through, add entries, or discard it entirely. Closures of
/// shape `Fn(ExceptionMap) -> ExceptionMap` implement this trait directly.
pub trait ExceptionProvider: Send + Sync {
    fn exceptions(&self, builtin: ExceptionMap) -> ExceptionMap;
}

/// Uses the built-in table unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultExceptions;

impl ExceptionProvider for DefaultExceptions {
    fn exceptions(&self, builtin: ExceptionMap) -> ExceptionMap {
        builtin
    }
}

/// A table used as a provider augments the built-in one, its own entries
/// winning on conflict.
impl ExceptionProvider for ExceptionMap {
    fn exceptions(&self, builtin: ExceptionMap) -> ExceptionMap {
        builtin.merged(self)
    }
}

/// Ignores the built-in table and uses only the wrapped entries.
#[derive(Debug, Clone, Default)]
pub struct ReplaceExceptions(pub ExceptionMap);

impl ExceptionProvider for ReplaceExceptions {
    fn exceptions(&self, _builtin: ExceptionMap) -> ExceptionMap {
        self.0.clone()
    }
}

impl<F> ExceptionProvider for F
where
    F: Fn(ExceptionMap) -> ExceptionMap + Send + Sync,
{
    fn exceptions(&self, builtin: ExceptionMap) -> ExceptionMap {
        self(builtin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_twelve_entries() {
        let map = ExceptionMap::builtin();
        assert_eq!(map.len(), 12);
        assert_eq!(map.get("tooth"), Some("teeth"));
    }

    #[test]
    fn insert_lowercases_keys() {
        let mut map = ExceptionMap::new();
        map.insert("Cactus", "cacti");
        assert_eq!(map.get("cactus"), Some("cacti"));
        assert!(!map.contains("Cactus"));
    }

    #[test]
    fn merged_overrides_existing_entries() {
        let overrides: ExceptionMap = [("man", "mans"), ("cactus", "cacti")].into_iter().collect();
        let map = ExceptionMap::builtin().merged(&overrides);
        assert_eq!(map.get("man"), Some("mans"));
        assert_eq!(map.get("cactus"), Some("cacti"));
        assert_eq!(map.len(), 13);
    }

    #[test]
    fn deserialize_normalizes_keys() {
        let map: ExceptionMap = serde_json::from_str(r#"{"Person":"people"}"#).unwrap();
        assert_eq!(map.get("person"), Some("people"));
    }
}
